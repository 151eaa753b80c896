// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR2 encoding/decoding traits
//!
//! Implemented here for the primitive types, `String`/`str`, `Vec<T>`/`[T]`
//! and `[T; N]`. User types compose by calling the stream's named methods
//! field by field:
//!
//! ```ignore
//! struct Reading {
//!     sensor: String,
//!     samples: Vec<f32>,
//! }
//!
//! impl Xcdr2Encode for Reading {
//!     fn encode_xcdr2(&self, stream: &mut Stream) {
//!         stream.write_string(&self.sensor).write_sequence(&self.samples);
//!     }
//! }
//!
//! impl Xcdr2Decode for Reading {
//!     fn decode_xcdr2(stream: &mut Stream) -> SerResult<Self> {
//!         Ok(Self {
//!             sensor: stream.read_string()?,
//!             samples: stream.read_sequence()?,
//!         })
//!     }
//! }
//! ```

use crate::error::SerResult;
use crate::stream::Stream;

/// Types that can be appended to a [`Stream`].
pub trait Xcdr2Encode {
    /// Append `self` at the stream's write cursor, aligning as each field requires.
    fn encode_xcdr2(&self, stream: &mut Stream);
}

/// Types that can be read back from a [`Stream`].
///
/// On error the stream's read state is latched and the partially read value
/// is discarded.
pub trait Xcdr2Decode: Sized {
    /// Read a value at the stream's read cursor.
    ///
    /// Fails without reading further once the stream's read state is `Error`.
    fn decode_xcdr2(stream: &mut Stream) -> SerResult<Self>;
}

macro_rules! impl_primitive_codec {
    ($type:ty, $write:ident, $read:ident) => {
        impl Xcdr2Encode for $type {
            fn encode_xcdr2(&self, stream: &mut Stream) {
                stream.$write(*self);
            }
        }

        impl Xcdr2Decode for $type {
            fn decode_xcdr2(stream: &mut Stream) -> SerResult<Self> {
                stream.$read()
            }
        }
    };
}

impl_primitive_codec!(bool, write_bool, read_bool);
impl_primitive_codec!(i8, write_i8, read_i8);
impl_primitive_codec!(u8, write_u8, read_u8);
impl_primitive_codec!(i16, write_i16, read_i16);
impl_primitive_codec!(u16, write_u16, read_u16);
impl_primitive_codec!(i32, write_i32, read_i32);
impl_primitive_codec!(u32, write_u32, read_u32);
impl_primitive_codec!(i64, write_i64, read_i64);
impl_primitive_codec!(u64, write_u64, read_u64);
impl_primitive_codec!(f32, write_f32, read_f32);
impl_primitive_codec!(f64, write_f64, read_f64);

impl Xcdr2Encode for str {
    fn encode_xcdr2(&self, stream: &mut Stream) {
        stream.write_string(self);
    }
}

impl Xcdr2Encode for String {
    fn encode_xcdr2(&self, stream: &mut Stream) {
        stream.write_string(self);
    }
}

impl Xcdr2Decode for String {
    fn decode_xcdr2(stream: &mut Stream) -> SerResult<Self> {
        stream.read_string()
    }
}

impl<T: Xcdr2Encode> Xcdr2Encode for [T] {
    fn encode_xcdr2(&self, stream: &mut Stream) {
        stream.write_sequence(self);
    }
}

impl<T: Xcdr2Encode> Xcdr2Encode for Vec<T> {
    fn encode_xcdr2(&self, stream: &mut Stream) {
        stream.write_sequence(self);
    }
}

impl<T: Xcdr2Decode> Xcdr2Decode for Vec<T> {
    fn decode_xcdr2(stream: &mut Stream) -> SerResult<Self> {
        stream.read_sequence()
    }
}

impl<T: Xcdr2Encode, const N: usize> Xcdr2Encode for [T; N] {
    fn encode_xcdr2(&self, stream: &mut Stream) {
        stream.write_array(self);
    }
}

impl<T: Xcdr2Decode, const N: usize> Xcdr2Decode for [T; N] {
    fn decode_xcdr2(stream: &mut Stream) -> SerResult<Self> {
        stream.read_array()
    }
}

impl<T: Xcdr2Encode + ?Sized> Xcdr2Encode for &T {
    fn encode_xcdr2(&self, stream: &mut Stream) {
        (**self).encode_xcdr2(stream);
    }
}
