// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;

use commit_ai::services::llm::openai::parse_candidates;

// Completion content is untrusted: parsing must never panic, and anything
// accepted has exactly the requested arity.
fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(list) = parse_candidates(content, 3) {
            assert_eq!(list.len(), 3);
        }
    }
});
