// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Stream state and serialization errors.

use std::fmt;

/// Cumulative state of one side (write or read) of a stream.
///
/// Once the read side reaches `Error` it stays there until
/// [`Stream::reset_read`](crate::Stream::reset_read) is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    #[default]
    Ok,
    Error,
}

impl StreamState {
    pub fn is_ok(self) -> bool {
        self == StreamState::Ok
    }
}

/// Serialization error returned by individual read calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerError {
    /// Buffer underrun: the read needs more bytes (padding included) than remain.
    ReadFailed {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Bytes were present but cannot form the requested value.
    InvalidData { offset: usize, reason: String },
    /// A previous read already failed; the stream refuses further reads.
    StateLatched { offset: usize },
}

impl SerError {
    /// Offset of the read cursor when the error was raised.
    pub fn offset(&self) -> usize {
        match self {
            SerError::ReadFailed { offset, .. }
            | SerError::InvalidData { offset, .. }
            | SerError::StateLatched { offset } => *offset,
        }
    }
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::ReadFailed {
                offset,
                needed,
                available,
            } => write!(
                f,
                "read failed at offset {}: need {} bytes, {} available",
                offset, needed, available
            ),
            SerError::InvalidData { offset, reason } => {
                write!(f, "invalid data at offset {}: {}", offset, reason)
            }
            SerError::StateLatched { offset } => {
                write!(f, "read refused at offset {}: stream in error state", offset)
            }
        }
    }
}

impl std::error::Error for SerError {}

pub type SerResult<T> = core::result::Result<T, SerError>;
