//! Progress Service
//!
//! Owns the course catalog, the per-wallet progress records and their
//! persistence, and the collaborator capabilities (wallet identity, text
//! generation, certificate ledger) the learning platform sits on.
//!
pub mod assistant;
pub mod audit;
pub mod catalog;
pub mod config;
pub mod ledger;
pub mod seed;
pub mod store;
pub mod wallet;
