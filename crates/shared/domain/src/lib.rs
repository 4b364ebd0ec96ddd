//! # Domain Models
//!
//! This crate contains pure registration types with a single dependency (`serde`).
//! Keep it lean: no DOM access, no I/O, no logging. Just data and simple helpers.

pub mod config;
pub mod constants;
pub mod record;
