use crate::policy::FailOn;
use rvguard_types::{Finding, RvguardData, Severity, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }

    /// Errors always fail; warnings fail only under `fail_on = warning`.
    pub fn verdict(&self, fail_on: FailOn) -> Verdict {
        if self.error > 0 {
            return Verdict::Fail;
        }
        if self.warning > 0 {
            return match fail_on {
                FailOn::Warning => Verdict::Fail,
                FailOn::Error => Verdict::Warn,
            };
        }
        Verdict::Pass
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: RvguardData,
    pub counts: SeverityCounts,
}
