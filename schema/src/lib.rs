//! Learning Platform Schema
//!
//! Shared types for the course catalog, quizzes, and per-wallet progress
//! records, plus the key-value storage layer the progress records persist
//! through.
//!
pub mod course;
pub mod progress;
pub mod storage;

pub use course::{Course, Level, Module, Quiz, QuizQuestion};
pub use progress::{EnrollmentRecord, ProgressRecord};
