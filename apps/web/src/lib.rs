//! Browser entry point for the workshop registration page.
//!
//! Built for `wasm32-unknown-unknown`; the module start hook waits for the document
//! structure, reads the optional contract override and binds the registration handler
//! to the submit control. Failures are logged to the browser console, never thrown.

#[cfg(target_arch = "wasm32")]
mod browser;
mod contract;

pub use crate::contract::resolve_contract;
