//! careconnect-audit
//!
//! Structured audit events for triage decisions. The scorer and classifier
//! are silent; the web layer builds an event from their output and emits it
//! after persisting the result.

pub mod error;
pub mod events;
