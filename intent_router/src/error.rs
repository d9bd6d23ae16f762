//! Routing errors surfaced to the platform layer.

use fact_store::ResourceError;

/// Failures the caller has to handle. A year with no matching fact is not one
/// of them; that is answered with a fallback fact.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("unrecognized intent `{0}`")]
    UnrecognizedIntent(String),

    #[error(transparent)]
    Resources(#[from] ResourceError),
}
