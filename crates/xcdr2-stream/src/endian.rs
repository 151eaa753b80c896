// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte order selection for XCDR2 streams.
//!
//! `Little`, `Big` and `Native` are three distinct settings. `Native` resolves
//! at build time to the host byte order via `cfg(target_endian)`, so on a
//! little-endian host `Native` and `Little` produce identical bytes while still
//! being different values of [`Endianness`].

use std::fmt;

/// Byte order requested for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first (network order).
    Big,
    /// Host byte order.
    #[default]
    Native,
}

/// Host byte order, resolved at compile time.
#[cfg(target_endian = "little")]
pub const HOST: Endianness = Endianness::Little;

/// Host byte order, resolved at compile time.
#[cfg(target_endian = "big")]
pub const HOST: Endianness = Endianness::Big;

impl Endianness {
    /// Concrete byte order: `Native` becomes `Little` or `Big`.
    pub const fn resolve(self) -> Self {
        match self {
            Endianness::Native => HOST,
            other => other,
        }
    }

    /// True when values can be copied verbatim from host memory.
    pub const fn is_host_order(self) -> bool {
        matches!(
            (self.resolve(), HOST),
            (Endianness::Little, Endianness::Little) | (Endianness::Big, Endianness::Big)
        )
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little"),
            Endianness::Big => write!(f, "big"),
            Endianness::Native => write!(f, "native"),
        }
    }
}
