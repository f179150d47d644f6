pub mod recommendation;
pub mod severity;
pub mod urgency;
