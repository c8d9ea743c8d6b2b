//! Render error types.

use thiserror::Error;

use crate::event::Payload;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The tag routed to a renderer that cannot handle this payload.
    #[error("payload mismatch: expected {expected}, found {found}")]
    PayloadMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl RenderError {
    pub fn mismatch(expected: &'static str, found: &Payload) -> Self {
        RenderError::PayloadMismatch {
            expected,
            found: found.kind(),
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
