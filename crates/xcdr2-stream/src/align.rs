// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR2 alignment arithmetic.
//!
//! Primitives align to their natural size, except that XCDR2 caps the
//! alignment of 8-byte values (`i64`, `u64`, `f64`) at 4 bytes. Plain CDR
//! would align them to 8.

/// Largest alignment XCDR2 ever requires.
pub const MAX_ALIGNMENT: usize = 4;

/// Alignment required for a primitive of `size` bytes.
#[inline]
pub const fn xcdr2_alignment(size: usize) -> usize {
    if size > MAX_ALIGNMENT {
        MAX_ALIGNMENT
    } else {
        size
    }
}

/// Align an absolute offset to the given power-of-two boundary.
#[inline]
pub const fn align_offset(offset: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        offset
    } else {
        (offset + alignment - 1) & !(alignment - 1)
    }
}

/// Padding bytes needed before a primitive of `size` bytes at `offset`.
#[inline]
pub const fn padding_for(offset: usize, size: usize) -> usize {
    align_offset(offset, xcdr2_alignment(size)) - offset
}
