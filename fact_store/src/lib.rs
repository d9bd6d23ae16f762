//! # Fact Store
//!
//! The data crate - holds the trivia facts, the phrase set used to vary
//! responses, and the localized message tables the skill speaks from.
//! This crate is read-only once loaded and does not contain any routing logic.

pub mod error;
pub mod fact;
pub mod phrase;
pub mod resources;

pub use error::*;
pub use fact::*;
pub use phrase::*;
pub use resources::*;
