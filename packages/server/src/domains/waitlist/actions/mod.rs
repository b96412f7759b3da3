//! Waitlist actions

mod join;

pub use join::{join_waitlist, JoinError, JOIN_WAITLIST_INTENT, UNEXPECTED_ERROR};
