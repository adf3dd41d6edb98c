//! Fuzz target for range building and constraint evaluation.
//!
//! Parsing may fail; evaluation of anything that parses must not panic, and a
//! non-compliant verdict must always produce an issue.
//!
//! ```bash
//! cargo +nightly fuzz run fuzz_constraint_eval
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EvalInput {
    min: String,
    max: String,
    expression: String,
}

fuzz_target!(|input: EvalInput| {
    if input.expression.len() > 1024 {
        return;
    }

    let Ok(range) = rvguard_domain::build_range(&input.min, &input.max) else {
        return;
    };

    if let Ok(verdict) = rvguard_domain::check_expression(&range, &input.expression, ()) {
        let compliant = verdict.compliant;
        let issue = verdict.into_issue(&range);
        assert_eq!(compliant, issue.is_none());
        if let Some(issue) = issue {
            let _ = issue.message();
        }
    }
});
