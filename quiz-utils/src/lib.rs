//! Quiz Attempt Utility Functions
//!
//! ## Current API
//!
//! - Run a quiz attempt state machine
//! - Calculate attempt scores
//! - Validate the course catalog
//!
pub mod attempt;
pub mod error;
pub mod validate;

pub use attempt::{Advance, AttemptState, PASSING_PERCENT, QuizOutcome, QuizRunner};
pub use error::Error;
