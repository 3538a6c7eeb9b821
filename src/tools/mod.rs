//! Collaborators of the check-digit engine.

pub mod digit_source;
