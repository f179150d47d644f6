//! careconnect-core
//!
//! Pure domain types shared by the scorer and the chat classifier.
//! No I/O: this is the severity vocabulary of the CareConnect system.

pub mod error;
pub mod models;
