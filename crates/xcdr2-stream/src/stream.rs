// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR2 serialization stream.
//!
//! A [`Stream`] owns one growable byte buffer with two independent cursors:
//! `ser_length` (next byte to write) and `deser_length` (next byte to read).
//! Typed writes append to the buffer, typed reads scan it from the front.
//!
//! # Wire rules
//!
//! - Every primitive is preceded by zero padding up to `min(size, 4)`.
//! - Strings and byte sequences: `u32` length, then raw bytes (no padding, no NUL).
//! - Sequences: `u32` count, then each element with its own alignment.
//! - Fixed arrays: elements only, the length comes from the type.
//!
//! # Errors
//!
//! Each read returns a [`SerResult`]. In addition the read side keeps a sticky
//! [`StreamState`]: the first underrun latches it to `Error`, after which every
//! read is refused without moving the cursor. Callers that prefer a single
//! check per message can chain [`Stream::read_into`] and inspect
//! [`Stream::deser_state`] once at the end.
//!
//! ```ignore
//! let mut stream = Stream::new(Endianness::Big);
//! stream.write_u32(7).write_string("temp").write_f64(21.5);
//!
//! let (mut id, mut name, mut value) = (0u32, String::new(), 0.0f64);
//! stream.read_into(&mut id).read_into(&mut name).read_into(&mut value);
//! assert_eq!(stream.deser_state(), StreamState::Ok);
//! ```

use std::ops::Range;

use crate::align::padding_for;
use crate::config::StreamConfig;
use crate::endian::Endianness;
use crate::error::{SerError, SerResult, StreamState};
use crate::traits::{Xcdr2Decode, Xcdr2Encode};

/// Generate aligned write methods for fixed-width numeric types.
///
/// Each generated method converts the value with `to_be_bytes`/`to_le_bytes`
/// according to the stream's resolved byte order, then appends it after the
/// XCDR2 padding.
macro_rules! impl_write_primitive {
    ($name:ident, $type:ty) => {
        #[doc = concat!("Write a `", stringify!($type), "`.")]
        pub fn $name(&mut self, value: $type) -> &mut Self {
            let bytes = match self.endianness.resolve() {
                Endianness::Big => value.to_be_bytes(),
                _ => value.to_le_bytes(),
            };
            self.put_aligned(&bytes)
        }
    };
}

/// Generate aligned read methods for fixed-width numeric types.
///
/// A failed read leaves `deser_length` where it was.
macro_rules! impl_read_primitive {
    ($name:ident, $type:ty, $size:expr) => {
        #[doc = concat!("Read a `", stringify!($type), "`.")]
        pub fn $name(&mut self) -> SerResult<$type> {
            let bytes = self.take_aligned::<$size>()?;
            Ok(match self.endianness.resolve() {
                Endianness::Big => <$type>::from_be_bytes(bytes),
                _ => <$type>::from_le_bytes(bytes),
            })
        }
    };
}

/// Growable XCDR2 encode/decode buffer.
#[derive(Debug, Clone, Default)]
pub struct Stream {
    buffer: Vec<u8>,
    ser_length: usize,
    deser_length: usize,
    ser_state: StreamState,
    deser_state: StreamState,
    endianness: Endianness,
}

impl Stream {
    /// Empty stream with the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        Self::with_config(StreamConfig::new().endianness(endianness))
    }

    /// Empty stream using the byte order and buffer reservation in `config`.
    pub fn with_config(config: StreamConfig) -> Self {
        Self {
            buffer: Vec::with_capacity(config.initial_capacity),
            endianness: config.endianness,
            ..Self::default()
        }
    }

    /// Stream over bytes received from elsewhere, ready to be read from offset 0.
    ///
    /// The bytes count as already written, so further writes append after them.
    pub fn from_bytes(endianness: Endianness, bytes: Vec<u8>) -> Self {
        Self {
            ser_length: bytes.len(),
            buffer: bytes,
            endianness,
            ..Self::default()
        }
    }

    /// Bytes written so far, padding included.
    pub fn ser_length(&self) -> usize {
        self.ser_length
    }

    /// Read cursor: bytes consumed so far, padding included.
    pub fn deser_length(&self) -> usize {
        self.deser_length
    }

    /// Write-side state. Only an over-long length prefix sets it to `Error`.
    pub fn ser_state(&self) -> StreamState {
        self.ser_state
    }

    /// Read-side state, sticky once `Error`.
    pub fn deser_state(&self) -> StreamState {
        self.deser_state
    }

    /// True once any read on this stream has failed.
    pub fn has_read_error(&self) -> bool {
        self.deser_state == StreamState::Error
    }

    /// Byte order chosen at construction.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Everything written so far.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes not yet consumed by the read cursor.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.deser_length)
    }

    /// Consume the stream and hand back its bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Rewind the read cursor to 0 and clear the sticky read error.
    pub fn reset_read(&mut self) {
        log::trace!(
            "[Stream::reset_read] rewinding from offset {} (state {:?})",
            self.deser_length,
            self.deser_state
        );
        self.deser_length = 0;
        self.deser_state = StreamState::Ok;
    }

    // ------------------------------------------------------------------
    // Primitive writes
    // ------------------------------------------------------------------

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    impl_write_primitive!(write_i8, i8);
    impl_write_primitive!(write_u8, u8);
    impl_write_primitive!(write_i16, i16);
    impl_write_primitive!(write_u16, u16);
    impl_write_primitive!(write_i32, i32);
    impl_write_primitive!(write_u32, u32);
    impl_write_primitive!(write_i64, i64);
    impl_write_primitive!(write_u64, u64);
    impl_write_primitive!(write_f32, f32);
    impl_write_primitive!(write_f64, f64);

    // ------------------------------------------------------------------
    // Primitive reads
    // ------------------------------------------------------------------

    /// Read a `bool`; any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> SerResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    impl_read_primitive!(read_i8, i8, 1);
    impl_read_primitive!(read_u8, u8, 1);
    impl_read_primitive!(read_i16, i16, 2);
    impl_read_primitive!(read_u16, u16, 2);
    impl_read_primitive!(read_i32, i32, 4);
    impl_read_primitive!(read_u32, u32, 4);
    impl_read_primitive!(read_i64, i64, 8);
    impl_read_primitive!(read_u64, u64, 8);
    impl_read_primitive!(read_f32, f32, 4);
    impl_read_primitive!(read_f64, f64, 8);

    // ------------------------------------------------------------------
    // Strings and opaque bytes
    // ------------------------------------------------------------------

    /// Write `value` as `u32` length followed by its UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        self.write_bytes(value.as_bytes())
    }

    /// Read a length-prefixed string.
    ///
    /// If the content is short or not UTF-8 the read side latches to `Error`
    /// with the cursor left just after the length prefix.
    pub fn read_string(&mut self) -> SerResult<String> {
        let len = self.read_length()?;
        let range = self.raw_range(len)?;
        let decoded = std::str::from_utf8(&self.buffer[range.clone()]).map(str::to_owned);
        match decoded {
            Ok(text) => {
                self.deser_length = range.end;
                Ok(text)
            }
            Err(e) => Err(self.latch_invalid(format!("string is not valid UTF-8 ({})", e))),
        }
    }

    /// Write `u32` length followed by the raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        if self.write_length(bytes.len()) {
            self.buffer.extend_from_slice(bytes);
            self.ser_length += bytes.len();
        }
        self
    }

    /// Read a `u32` length followed by that many raw bytes.
    pub fn read_bytes(&mut self) -> SerResult<Vec<u8>> {
        let len = self.read_length()?;
        let range = self.raw_range(len)?;
        let bytes = self.buffer[range.clone()].to_vec();
        self.deser_length = range.end;
        Ok(bytes)
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    /// Write `u32` element count followed by each element.
    pub fn write_sequence<T: Xcdr2Encode>(&mut self, values: &[T]) -> &mut Self {
        if self.write_length(values.len()) {
            for value in values {
                value.encode_xcdr2(self);
            }
        }
        self
    }

    /// Read a counted sequence, stopping at the first element that fails.
    ///
    /// Elements that occupy no wire bytes (such as `[T; 0]`) cannot underrun,
    /// so a count larger than the bytes remaining is rejected for them.
    pub fn read_sequence<T: Xcdr2Decode>(&mut self) -> SerResult<Vec<T>> {
        let count = self.read_length()?;
        let available = self.remaining();
        // Reserve at most `available` bytes of memory, whatever the count says.
        let capacity = count.min(available / std::mem::size_of::<T>().max(1));
        let mut values = Vec::with_capacity(capacity);
        for _ in 0..count {
            let before = self.deser_length;
            values.push(T::decode_xcdr2(self)?);
            if self.deser_length == before && count > available {
                return Err(self.latch_underrun(count));
            }
        }
        Ok(values)
    }

    /// Write the elements of a fixed-size array without a count prefix.
    pub fn write_array<T: Xcdr2Encode, const N: usize>(&mut self, values: &[T; N]) -> &mut Self {
        for value in values {
            value.encode_xcdr2(self);
        }
        self
    }

    /// Read exactly `N` elements; the count comes from the type, not the wire.
    pub fn read_array<T: Xcdr2Decode, const N: usize>(&mut self) -> SerResult<[T; N]> {
        let mut values = Vec::with_capacity(N);
        for _ in 0..N {
            values.push(T::decode_xcdr2(self)?);
        }
        let offset = self.deser_length;
        <[T; N]>::try_from(values).map_err(|_| SerError::InvalidData {
            offset,
            reason: "array length mismatch".into(),
        })
    }

    // ------------------------------------------------------------------
    // Generic entry points
    // ------------------------------------------------------------------

    /// Append any [`Xcdr2Encode`] value.
    pub fn write<T: Xcdr2Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode_xcdr2(self);
        self
    }

    /// Read any [`Xcdr2Decode`] value.
    pub fn read<T: Xcdr2Decode>(&mut self) -> SerResult<T> {
        T::decode_xcdr2(self)
    }

    /// Read into `dst`, leaving it untouched on failure.
    ///
    /// Returns the stream so reads can be chained; check
    /// [`deser_state`](Self::deser_state) afterwards.
    pub fn read_into<T: Xcdr2Decode>(&mut self, dst: &mut T) -> &mut Self {
        if let Ok(value) = T::decode_xcdr2(self) {
            *dst = value;
        }
        self
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn put_aligned(&mut self, bytes: &[u8]) -> &mut Self {
        if !self.ensure_writable() {
            return self;
        }
        let padding = padding_for(self.ser_length, bytes.len());
        self.buffer.resize(self.ser_length + padding, 0);
        self.buffer.extend_from_slice(bytes);
        self.ser_length += padding + bytes.len();
        self
    }

    fn take_aligned<const N: usize>(&mut self) -> SerResult<[u8; N]> {
        self.ensure_readable()?;
        let start = self.deser_length + padding_for(self.deser_length, N);
        let end = start + N;
        if end > self.buffer.len() {
            return Err(self.latch_underrun(end - self.deser_length));
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[start..end]);
        self.deser_length = end;
        Ok(bytes)
    }

    /// Write a `u32` length prefix. Returns false if the write side is unusable.
    fn write_length(&mut self, len: usize) -> bool {
        match u32::try_from(len) {
            Ok(len) => {
                self.write_u32(len);
            }
            Err(_) => {
                log::debug!(
                    "[Stream::write] length {} exceeds u32 prefix at offset {}",
                    len,
                    self.ser_length
                );
                self.ser_state = StreamState::Error;
            }
        }
        self.ser_state.is_ok()
    }

    fn read_length(&mut self) -> SerResult<usize> {
        self.read_u32().map(|len| len as usize)
    }

    /// Unaligned range of `len` bytes at the read cursor, without consuming it.
    fn raw_range(&mut self, len: usize) -> SerResult<Range<usize>> {
        self.ensure_readable()?;
        match self.deser_length.checked_add(len) {
            Some(end) if end <= self.buffer.len() => Ok(self.deser_length..end),
            _ => Err(self.latch_underrun(len)),
        }
    }

    fn ensure_writable(&self) -> bool {
        if !self.ser_state.is_ok() {
            log::trace!(
                "[Stream::write] skipped at offset {}: write side in error state",
                self.ser_length
            );
        }
        self.ser_state.is_ok()
    }

    fn ensure_readable(&self) -> SerResult<()> {
        if self.deser_state.is_ok() {
            return Ok(());
        }
        log::trace!(
            "[Stream::read] refused at offset {}: read side in error state",
            self.deser_length
        );
        Err(SerError::StateLatched {
            offset: self.deser_length,
        })
    }

    fn latch_underrun(&mut self, needed: usize) -> SerError {
        let available = self.remaining();
        log::debug!(
            "[Stream::read] underrun at offset {}: need {} bytes, {} available",
            self.deser_length,
            needed,
            available
        );
        self.deser_state = StreamState::Error;
        SerError::ReadFailed {
            offset: self.deser_length,
            needed,
            available,
        }
    }

    fn latch_invalid(&mut self, reason: String) -> SerError {
        log::debug!(
            "[Stream::read] invalid data at offset {}: {}",
            self.deser_length,
            reason
        );
        self.deser_state = StreamState::Error;
        SerError::InvalidData {
            offset: self.deser_length,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_U32: u32 = 0x1122_3344;
    const TEST_U64: u64 = 0x0102_0304_0506_0708;

    fn both_orders() -> [Stream; 2] {
        [Stream::new(Endianness::Little), Stream::new(Endianness::Big)]
    }

    #[test]
    fn test_initial_state() {
        let stream = Stream::new(Endianness::Native);
        assert_eq!(stream.ser_length(), 0);
        assert_eq!(stream.deser_length(), 0);
        assert_eq!(stream.ser_state(), StreamState::Ok);
        assert_eq!(stream.deser_state(), StreamState::Ok);
        assert!(stream.buffer().is_empty());
        assert_eq!(stream.endianness(), Endianness::Native);
    }

    #[test]
    fn test_write_sizes_from_offset_zero() {
        for mut stream in both_orders() {
            stream.write_bool(true);
            assert_eq!(stream.ser_length(), 1);
        }
        let mut stream = Stream::new(Endianness::Little);
        stream.write_i64(-1);
        assert_eq!(stream.ser_length(), 8);
        assert_eq!(stream.deser_length(), 0);
    }

    #[test]
    fn test_byte_order_of_u32() {
        let mut big = Stream::new(Endianness::Big);
        big.write_u32(TEST_U32);
        assert_eq!(big.buffer(), &[0x11, 0x22, 0x33, 0x44]);
        assert_eq!(big.read_u32(), Ok(TEST_U32));

        let mut little = Stream::new(Endianness::Little);
        little.write_u32(TEST_U32);
        assert_eq!(little.buffer(), &[0x44, 0x33, 0x22, 0x11]);
        assert_eq!(little.read_u32(), Ok(TEST_U32));

        let mut native = Stream::new(Endianness::Native);
        native.write_u32(TEST_U32);
        assert_eq!(native.buffer(), &TEST_U32.to_ne_bytes());
    }

    #[test]
    fn test_padding_is_zeroed_and_counted() {
        let mut stream = Stream::new(Endianness::Big);
        stream.write_u8(0xAB).write_u32(TEST_U32);
        assert_eq!(stream.ser_length(), 8);
        assert_eq!(
            stream.buffer(),
            &[0xAB, 0x00, 0x00, 0x00, 0x11, 0x22, 0x33, 0x44]
        );
        assert_eq!(stream.read_u8(), Ok(0xAB));
        assert_eq!(stream.read_u32(), Ok(TEST_U32));
        assert_eq!(stream.deser_length(), 8);
    }

    #[test]
    fn test_eight_byte_values_align_to_four() {
        let mut stream = Stream::new(Endianness::Big);
        stream.write_u32(1).write_u64(TEST_U64);
        // No padding to 8: the u64 starts at offset 4
        assert_eq!(stream.ser_length(), 12);
        assert_eq!(&stream.buffer()[4..], &TEST_U64.to_be_bytes());

        let mut stream = Stream::new(Endianness::Little);
        stream.write_u8(1).write_f64(1.5);
        assert_eq!(stream.ser_length(), 12);
        assert_eq!(&stream.buffer()[1..4], &[0, 0, 0]);
    }

    #[test]
    fn test_read_underrun_latches_and_keeps_cursor() {
        let mut stream = Stream::new(Endianness::Little);
        stream.write_u16(0xBEEF);
        assert_eq!(stream.read_u16(), Ok(0xBEEF));

        let err = stream.read_u16().unwrap_err();
        assert_eq!(
            err,
            SerError::ReadFailed {
                offset: 2,
                needed: 2,
                available: 0
            }
        );
        assert_eq!(stream.deser_state(), StreamState::Error);
        assert_eq!(stream.deser_length(), 2);
    }

    #[test]
    fn test_padding_counts_toward_underrun() {
        // One byte written, then three bytes available after it: not enough for an aligned u32.
        let mut stream = Stream::from_bytes(Endianness::Little, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(stream.read_u8(), Ok(1));
        let err = stream.read_u32().unwrap_err();
        assert_eq!(
            err,
            SerError::ReadFailed {
                offset: 1,
                needed: 7,
                available: 5
            }
        );
        assert_eq!(stream.deser_length(), 1);
    }

    #[test]
    fn test_error_is_sticky() {
        let mut stream = Stream::from_bytes(Endianness::Big, vec![0x01]);
        assert!(stream.read_u32().is_err());
        // A byte is available, but the latched state refuses it
        assert_eq!(
            stream.read_u8(),
            Err(SerError::StateLatched { offset: 0 })
        );
        assert_eq!(stream.deser_length(), 0);
        assert!(stream.has_read_error());
    }

    #[test]
    fn test_reset_read_clears_latch() {
        let mut stream = Stream::from_bytes(Endianness::Big, vec![0x01]);
        assert!(stream.read_u32().is_err());
        stream.reset_read();
        assert_eq!(stream.deser_state(), StreamState::Ok);
        assert_eq!(stream.read_u8(), Ok(0x01));
    }

    #[test]
    fn test_string_layout() {
        let mut stream = Stream::new(Endianness::Big);
        stream.write_string("hello");
        assert_eq!(stream.ser_length(), 9);
        assert_eq!(stream.buffer(), b"\x00\x00\x00\x05hello");
        assert_eq!(stream.read_string().as_deref(), Ok("hello"));
        assert_eq!(stream.deser_length(), 9);
    }

    #[test]
    fn test_string_after_string_has_prefix_aligned() {
        let mut stream = Stream::new(Endianness::Little);
        stream.write_string("abc").write_string("de");
        // 4 + 3, pad 1, 4 + 2
        assert_eq!(stream.ser_length(), 14);
        assert_eq!(stream.buffer()[7], 0);
        assert_eq!(stream.read_string().as_deref(), Ok("abc"));
        assert_eq!(stream.read_string().as_deref(), Ok("de"));
    }

    #[test]
    fn test_truncated_string_keeps_prefix_advance() {
        let mut source = Stream::new(Endianness::Little);
        source.write_string("hello");
        let mut bytes = source.into_inner();
        bytes.truncate(7);

        let mut stream = Stream::from_bytes(Endianness::Little, bytes);
        let mut dst = String::from("keep");
        stream.read_into(&mut dst);
        assert_eq!(dst, "keep");
        assert_eq!(stream.deser_state(), StreamState::Error);
        assert_eq!(stream.deser_length(), 4);
    }

    #[test]
    fn test_invalid_utf8_string_is_rejected() {
        let mut source = Stream::new(Endianness::Little);
        source.write_bytes(&[0xFF, 0xFE]);
        let mut stream = Stream::from_bytes(Endianness::Little, source.into_inner());
        let err = stream.read_string().unwrap_err();
        assert!(matches!(err, SerError::InvalidData { offset: 4, .. }));
        assert_eq!(stream.deser_length(), 4);
        assert!(stream.has_read_error());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut stream = Stream::new(Endianness::Big);
        stream.write_bytes(&[]).write_bytes(&[9, 8, 7]);
        assert_eq!(stream.ser_length(), 11);
        assert_eq!(stream.read_bytes(), Ok(vec![]));
        assert_eq!(stream.read_bytes(), Ok(vec![9, 8, 7]));
    }

    #[test]
    fn test_sequence_of_i32() {
        let values: Vec<i32> = (0..10).collect();
        let mut stream = Stream::new(Endianness::Little);
        stream.write_sequence(&values);
        assert_eq!(stream.ser_length(), 44);
        assert_eq!(stream.read_sequence::<i32>(), Ok(values));
        assert_eq!(stream.deser_length(), 44);
    }

    #[test]
    fn test_sequence_stops_at_first_failed_element() {
        let mut source = Stream::new(Endianness::Big);
        source.write_sequence(&[1u32, 2, 3]);
        let mut bytes = source.into_inner();
        bytes.truncate(10);

        let mut stream = Stream::from_bytes(Endianness::Big, bytes);
        let mut dst = vec![42u32];
        stream.read_into(&mut dst);
        assert_eq!(dst, vec![42]);
        assert!(stream.has_read_error());
        // count and the first element were committed
        assert_eq!(stream.deser_length(), 8);
    }

    #[test]
    fn test_huge_count_surfaces_as_underrun() {
        let mut stream = Stream::new(Endianness::Little);
        stream.write_u32(u32::MAX).write_u32(5);
        let err = stream.read_sequence::<u32>().unwrap_err();
        assert!(matches!(err, SerError::ReadFailed { offset: 8, .. }));
    }

    #[test]
    fn test_huge_count_of_wide_elements_is_bounded_by_input() {
        // 4 KiB per element in memory, far more than any input byte
        let mut bytes = u32::MAX.to_le_bytes().to_vec();
        bytes.resize(4 + 16 * 1024 * 1024, 0);
        let mut stream = Stream::from_bytes(Endianness::Little, bytes);
        let err = stream.read_sequence::<[u64; 512]>().unwrap_err();
        assert!(matches!(err, SerError::ReadFailed { .. }));
        assert!(stream.has_read_error());
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_huge_count_of_zero_wire_size_elements_underruns() {
        let mut stream = Stream::from_bytes(Endianness::Little, vec![0xFF; 4]);
        let err = stream.read_sequence::<[u32; 0]>().unwrap_err();
        assert_eq!(
            err,
            SerError::ReadFailed {
                offset: 4,
                needed: u32::MAX as usize,
                available: 0
            }
        );
        assert!(stream.has_read_error());
        assert_eq!(stream.deser_length(), 4);
    }

    #[test]
    fn test_zero_wire_size_elements_within_remaining_bytes() {
        let mut stream = Stream::new(Endianness::Big);
        stream.write_u32(2).write_u32(0xAABB_CCDD);
        assert_eq!(stream.read_sequence::<[u32; 0]>(), Ok(vec![[], []]));
        assert_eq!(stream.read_u32(), Ok(0xAABB_CCDD));
    }

    #[test]
    fn test_fixed_array_has_no_prefix() {
        let values: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut stream = Stream::new(Endianness::Big);
        stream.write_array(&values);
        assert_eq!(stream.ser_length(), 40);
        assert_eq!(stream.read_array::<i32, 10>(), Ok(values));
    }

    #[test]
    fn test_fixed_array_failure_leaves_destination() {
        let mut stream = Stream::from_bytes(Endianness::Little, vec![1, 0, 2, 0]);
        let mut dst = [7u16; 3];
        stream.read_into(&mut dst);
        assert_eq!(dst, [7, 7, 7]);
        assert_eq!(stream.deser_length(), 4);
        assert!(stream.has_read_error());
    }

    #[test]
    fn test_from_bytes_appends_after_existing() {
        let mut stream = Stream::from_bytes(Endianness::Little, vec![0xAA]);
        assert_eq!(stream.ser_length(), 1);
        stream.write_u16(0x0102);
        assert_eq!(stream.buffer(), &[0xAA, 0x00, 0x02, 0x01]);
    }

    #[test]
    fn test_with_config_reserves_capacity() {
        let stream = Stream::with_config(
            StreamConfig::new()
                .endianness(Endianness::Big)
                .initial_capacity(64),
        );
        assert_eq!(stream.endianness(), Endianness::Big);
        assert_eq!(stream.ser_length(), 0);
        assert!(stream.buffer.capacity() >= 64);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_length_latches_write_side() {
        let mut stream = Stream::new(Endianness::Little);
        assert!(!stream.write_length(u32::MAX as usize + 1));
        assert_eq!(stream.ser_state(), StreamState::Error);
        assert_eq!(stream.ser_length(), 0);
        stream.write_u8(1);
        assert_eq!(stream.ser_length(), 0);
    }
}
