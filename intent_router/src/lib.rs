//! # Intent Router
//!
//! The request-handling core of the history facts skill. It receives a
//! normalized intent (name plus slot values) from the voice platform layer,
//! consults the `fact_store` tables, and returns the speech, reprompt and
//! card the platform layer should render.
//!
//! ## Core Components
//!
//! - **intent**: Closed set of recognized intents and the request shape
//! - **router**: Dispatch plus the random-fact, year-fact, help and stop handlers
//! - **random**: Injectable random source for fact and phrase selection
//! - **response**: The outbound response record
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every request starts fresh; nothing carries over between calls
//! - **Injected Data**: Facts and messages come in as read-only tables
//! - **Transport-Free**: The platform wire protocol lives with the caller

pub mod error;
pub mod intent;
pub mod random;
pub mod response;
pub mod router;

pub use error::*;
pub use intent::*;
pub use random::*;
pub use response::*;
pub use router::*;
