//! Range compliance: the three-point test that decides whether a constraint
//! keeps the resolved version inside `[min, max]`.

use crate::boundary::derive_floor_exclusion;
use crate::constraint::ConstraintExpression;
use crate::error::{ConfigError, ParseError, RangeError};
use crate::version::SemanticVersion;

pub const DEFAULT_MIN_VERSION: &str = "1.3";
pub const DEFAULT_MAX_VERSION: &str = "1.5";

/// The fixed evaluation points for one run.
///
/// `min <= max` is not enforced; configuration is trusted input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfiguredRange {
    min: SemanticVersion,
    max: SemanticVersion,
    floor_exclusion: SemanticVersion,
}

impl ConfiguredRange {
    pub fn new(min: SemanticVersion, max: SemanticVersion) -> Result<Self, ConfigError> {
        let floor_exclusion = derive_floor_exclusion(&min)?;
        Ok(Self {
            min,
            max,
            floor_exclusion,
        })
    }

    pub fn min(&self) -> &SemanticVersion {
        &self.min
    }

    pub fn max(&self) -> &SemanticVersion {
        &self.max
    }

    pub fn floor_exclusion(&self) -> &SemanticVersion {
        &self.floor_exclusion
    }
}

impl Default for ConfiguredRange {
    /// `1.3`..`1.5`, floor `1.2.999`.
    fn default() -> Self {
        Self {
            min: SemanticVersion::from_parts(1, 3, 0, 2),
            max: SemanticVersion::from_parts(1, 5, 0, 2),
            floor_exclusion: SemanticVersion::new(1, 2, crate::FLOOR_PATCH_SENTINEL),
        }
    }
}

/// Build the range from configuration strings.
pub fn build_range(min: &str, max: &str) -> Result<ConfiguredRange, RangeError> {
    let min = SemanticVersion::parse(min).map_err(RangeError::InvalidMin)?;
    let max = SemanticVersion::parse(max).map_err(RangeError::InvalidMax)?;
    Ok(ConfiguredRange::new(min, max)?)
}

/// `(admits min OR admits max) AND NOT admits floor-exclusion`.
pub fn evaluate_expression(range: &ConfiguredRange, expr: &ConstraintExpression) -> bool {
    let reaches_range = expr.admits(&range.min) || expr.admits(&range.max);
    let excludes_floor = !expr.admits(&range.floor_exclusion);
    reaches_range && excludes_floor
}

/// Outcome for one constraint occurrence; `location` is opaque to the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplianceVerdict<L> {
    pub compliant: bool,
    pub expression: String,
    pub location: L,
}

impl<L> ComplianceVerdict<L> {
    /// The reportable issue, or `None` when compliant.
    pub fn into_issue(self, range: &ConfiguredRange) -> Option<RangeIssue<L>> {
        if self.compliant {
            return None;
        }
        Some(RangeIssue {
            expression: self.expression,
            min: range.min.to_string(),
            max: range.max.to_string(),
            location: self.location,
        })
    }
}

/// A non-compliant constraint with the bounds it was judged against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeIssue<L> {
    pub expression: String,
    pub min: String,
    pub max: String,
    pub location: L,
}

impl<L> RangeIssue<L> {
    pub fn message(&self) -> String {
        format!(
            "required_version is not inclusive of the minimum {:?} and maximum {:?} terraform required_version: {:?}",
            self.min, self.max, self.expression
        )
    }
}

/// Parse `raw` and judge it against `range`.
pub fn check_expression<L>(
    range: &ConfiguredRange,
    raw: &str,
    location: L,
) -> Result<ComplianceVerdict<L>, ParseError> {
    let expr = ConstraintExpression::parse(raw)?;
    Ok(ComplianceVerdict {
        compliant: evaluate_expression(range, &expr),
        expression: raw.to_string(),
        location,
    })
}
