// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Stream construction settings.
//!
//! ```ignore
//! use xcdr2_stream::{Endianness, Stream, StreamConfig};
//!
//! let config = StreamConfig::new()
//!     .endianness(Endianness::Big)
//!     .initial_capacity(256);
//! let stream = Stream::with_config(config);
//! ```

use crate::endian::Endianness;

/// Settings applied when a [`Stream`](crate::Stream) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamConfig {
    /// Byte order, fixed for the lifetime of the stream.
    pub endianness: Endianness,
    /// Bytes reserved up front in the backing buffer.
    pub initial_capacity: usize,
}

impl StreamConfig {
    /// Native byte order, no pre-allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the byte order.
    #[must_use]
    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Reserve `capacity` bytes when the stream is created.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
