//! User-facing notification queue.
//!
//! Failures that a browser client would raise as blocking alerts are queued
//! here as typed notices for whatever surface renders them.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::collections::VecDeque;

use crate::net::error::ErrorCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    /// Machine-readable code, e.g. `E_TRANSPORT`.
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

impl Notice {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, code, message: message.into(), retryable: false }
    }

    pub fn info(code: &'static str, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, code, message: message.into(), retryable: false }
    }

    /// Error notice carrying the error's own code and message.
    pub fn from_error(err: &impl ErrorCode) -> Self {
        Self {
            level: NoticeLevel::Error,
            code: err.error_code(),
            message: err.to_string(),
            retryable: err.retryable(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        self.queue.push_back(notice);
    }

    /// Take every queued notice in arrival order.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }
}
