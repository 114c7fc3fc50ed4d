// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the decoder and registry
//!
//! Arbitrary input is decoded line by line and applied to a registry. Neither
//! step should ever panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest_events::event::{Decoded, decode_line};
use gotest_events::registry::Registry;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut registry = Registry::new();

        for line in input.lines() {
            if let Ok(Decoded::Event(event)) = decode_line(line) {
                let _ = registry.apply(event);
            }
        }

        let _ = registry.summary();
    }
});
