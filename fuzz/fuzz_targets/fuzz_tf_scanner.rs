//! Fuzz target for the Terraform `required_version` scanner.
//!
//! The scanner may reject input but must never panic.
//!
//! ```bash
//! cargo +nightly fuzz run fuzz_tf_scanner
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = rvguard_repo::fuzz::scan_terraform(text);
    }
});
