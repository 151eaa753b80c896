// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON object writer stream.
//!
//! Companion to the binary [`Stream`](crate::Stream) for human-readable
//! dumps of the same messages. Objects are opened and closed explicitly and
//! filled with key/value members; commas are inserted between members.
//! Member values go through `serde_json`, so sequences and arrays render as
//! JSON arrays, `None` as `null`, booleans as `true`/`false`.
//!
//! ```ignore
//! let mut json = JsonStream::new();
//! json.begin_object()
//!     .member("id", &7u32)
//!     .member("samples", &[1.5, 2.5])
//!     .member("unit", &None::<String>)
//!     .end_object();
//! assert_eq!(json.as_str(), r#"{"id":7,"samples":[1.5,2.5],"unit":null}"#);
//! ```
//!
//! A member is only accepted right after `begin_object` or another member.
//! Anywhere else it is dropped and the stream's state latches to
//! [`StreamState::Error`], as it does when a value cannot be represented in
//! JSON (for example a map with non-string keys).

use serde::Serialize;

use crate::error::StreamState;

/// Last token emitted, which decides whether a member may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    None,
    LeftBrace,
    RightBrace,
    Value,
}

/// Append-only JSON text builder.
#[derive(Debug, Clone)]
pub struct JsonStream {
    out: String,
    last_token: Token,
    state: StreamState,
}

impl Default for JsonStream {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonStream {
    /// Empty output, ready for `begin_object`.
    pub fn new() -> Self {
        Self {
            out: String::new(),
            last_token: Token::None,
            state: StreamState::Ok,
        }
    }

    /// Emit `{`.
    pub fn begin_object(&mut self) -> &mut Self {
        self.out.push('{');
        self.last_token = Token::LeftBrace;
        self
    }

    /// Emit `}`.
    pub fn end_object(&mut self) -> &mut Self {
        self.out.push('}');
        self.last_token = Token::RightBrace;
        self
    }

    /// Emit `"key":value`, preceded by a comma when it follows another member.
    pub fn member<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        if !self.state.is_ok() {
            log::trace!("[JsonStream::member] skipped '{}': stream in error state", key);
            return self;
        }
        if !matches!(self.last_token, Token::LeftBrace | Token::Value) {
            log::debug!(
                "[JsonStream::member] '{}' outside an object (after {:?})",
                key,
                self.last_token
            );
            self.state = StreamState::Error;
            return self;
        }

        // Render both parts first so a failure leaves the output untouched.
        let rendered = serde_json::to_string(key)
            .and_then(|key| serde_json::to_string(value).map(|value| (key, value)));
        match rendered {
            Ok((key, value)) => {
                if self.last_token == Token::Value {
                    self.out.push(',');
                }
                self.out.push_str(&key);
                self.out.push(':');
                self.out.push_str(&value);
                self.last_token = Token::Value;
            }
            Err(e) => {
                log::debug!("[JsonStream::member] cannot render '{}': {}", key, e);
                self.state = StreamState::Error;
            }
        }
        self
    }

    /// `Error` once a member has been rejected.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Text rendered so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the stream and return its text.
    pub fn into_string(self) -> String {
        self.out
    }
}
