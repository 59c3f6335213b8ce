//! Processing helpers for bank-operation records: masking card and account
//! numbers for display, reformatting ISO dates, filtering/sorting/searching
//! record sequences and counting description categories.
//!
//! Records come from an external reader as a JSON array of objects; every
//! field of [`engine::Transaction`] is optional and the bulk-processing
//! functions treat absence as absence instead of failing. The user-facing
//! formatters are strict and report [`engine::InvalidFormat`].

pub mod engine;
pub mod logging;

pub use engine::{InvalidFormat, Transaction};
pub use logging::CallLog;
