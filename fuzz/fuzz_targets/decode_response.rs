// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 issuesync Contributors

#![no_main]

use issuesync_core::{GraphQlResponse, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Classification must never panic, whatever the body.
        let _ = GraphQlResponse::from_body(s);

        // Decoding is idempotent on its own output.
        if let Ok(first) = decode(s) {
            let reencoded = serde_json::to_string(&first.to_json()).expect("serializable");
            let second = decode(&reencoded).expect("re-decodable");
            assert_eq!(first, second);
        }
    }
});
