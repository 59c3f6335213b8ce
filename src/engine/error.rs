use thiserror::Error;

/// The single error kind raised by the formatting helpers.
/// Bulk processing (filter/sort/search/count) never fails; only the
/// user-facing formatters (masks, dates, widget) are strict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid format: {0}")]
pub struct InvalidFormat(String);

impl InvalidFormat {
    pub fn new(message: impl Into<String>) -> Self {
        InvalidFormat(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}
