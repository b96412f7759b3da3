//! Waitlist signup domain.
//!
//! Covers the whole pipeline for one signup: parsing the address, shaping
//! the stored record, and the join action that orchestrates both against
//! the record store.

pub mod actions;
pub mod models;
