// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # xcdr2-stream
//!
//! In-memory XCDR2 encoder/decoder built around a single growable buffer.
//!
//! ## Quick Start
//!
//! ```rust
//! use xcdr2_stream::{Endianness, Stream, StreamState};
//!
//! let mut stream = Stream::new(Endianness::Big);
//! stream.write_u32(0x1122_3344).write_string("hello");
//! assert_eq!(&stream.buffer()[..4], &[0x11, 0x22, 0x33, 0x44]);
//!
//! assert_eq!(stream.read_u32(), Ok(0x1122_3344));
//! assert_eq!(stream.read_string().as_deref(), Ok("hello"));
//! assert_eq!(stream.deser_state(), StreamState::Ok);
//! ```
//!
//! ## Wire format
//!
//! | Type | Size | Alignment |
//! |------|------|-----------|
//! | `bool`, `i8`, `u8` | 1 | 1 |
//! | `i16`, `u16` | 2 | 2 |
//! | `i32`, `u32`, `f32` | 4 | 4 |
//! | `i64`, `u64`, `f64` | 8 | 4 |
//!
//! Strings: `u32` length + raw bytes. Sequences: `u32` count + elements.
//! Fixed arrays: elements only. There is no header or type information; the
//! reader must know the field order and the byte order used by the writer.
//!
//! ## Modules Overview
//!
//! - [`stream`] - the [`Stream`] type and its named write/read operations
//! - [`traits`] - [`Xcdr2Encode`]/[`Xcdr2Decode`] for composing user types
//! - [`align`] - alignment arithmetic
//! - [`endian`] - byte order selection
//! - [`config`] - construction settings
//! - [`error`] - [`SerError`] and [`StreamState`]
//! - `json` - [`JsonStream`], a JSON object writer for readable dumps
//!
//! ## Features
//!
//! - `json` (default): [`JsonStream`] object writer (`serde`, `serde_json`)
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; install any
//! logger to see read underruns at `debug` level.

pub mod align;
pub mod config;
pub mod endian;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod stream;
pub mod traits;

pub use config::StreamConfig;
pub use endian::Endianness;
pub use error::{SerError, SerResult, StreamState};
#[cfg(feature = "json")]
pub use json::JsonStream;
pub use stream::Stream;
pub use traits::{Xcdr2Decode, Xcdr2Encode};
