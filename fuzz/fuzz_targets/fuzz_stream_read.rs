// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use xcdr2_stream::{Endianness, Stream};

fuzz_target!(|data: &[u8]| {
    for endianness in [Endianness::Little, Endianness::Big] {
        let mut stream = Stream::from_bytes(endianness, data.to_vec());
        let _ = stream.read_bool();
        let _ = stream.read_u16();
        let _ = stream.read_i64();
        let _ = stream.read_string();
        let _ = stream.read_sequence::<Vec<u32>>();
        let _ = stream.read_array::<f64, 3>();

        // Element types whose memory size dwarfs or lacks a wire size.
        for decode in [
            |s: &mut Stream| s.read_sequence::<String>().is_ok(),
            |s: &mut Stream| s.read_sequence::<[u64; 512]>().is_ok(),
            |s: &mut Stream| s.read_sequence::<[u32; 0]>().is_ok(),
        ] {
            let mut stream = Stream::from_bytes(endianness, data.to_vec());
            let _ = decode(&mut stream);
            assert!(stream.deser_length() <= data.len());
        }

        // The cursor never passes the end, and a failure stays latched.
        assert!(stream.deser_length() <= data.len());
        if stream.has_read_error() {
            assert!(stream.read_u8().is_err());
        }
    }
});
