//! Floor-exclusion point: a version known to sit just below the configured minimum.

use crate::error::ConfigError;
use crate::version::SemanticVersion;

/// Stand-in for "the highest patch (or minor) release" when synthesizing the
/// point just below a minimum. Patch space is open-ended, so this is a
/// convention rather than a true upper bound.
pub const FLOOR_PATCH_SENTINEL: u64 = 999;

/// Highest practical version strictly below `min`.
///
/// - `X.Y` with `Y > 0` yields `X.(Y-1).999`
/// - `X.0` with `X > 0` rolls over to `(X-1).999.999`
/// - `0.0` cannot be reduced and is a configuration error
pub fn derive_floor_exclusion(min: &SemanticVersion) -> Result<SemanticVersion, ConfigError> {
    if min.minor() > 0 {
        return Ok(SemanticVersion::new(
            min.major(),
            min.minor() - 1,
            FLOOR_PATCH_SENTINEL,
        ));
    }

    if min.major() == 0 {
        return Err(ConfigError::FloorBelowZero {
            min: min.to_string(),
        });
    }

    Ok(SemanticVersion::new(
        min.major() - 1,
        FLOOR_PATCH_SENTINEL,
        FLOOR_PATCH_SENTINEL,
    ))
}
