//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `chrono`).
//! Keep it lean: no I/O, no networking, no heavy logic. Data and small helpers only.

pub mod config;
pub mod defines;
