//! Search inputs shared by the clients and the HTTP layer.

use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const MIN_RADIUS_M: u32 = 5_000;
pub const MAX_RADIUS_M: u32 = 50_000;
pub const DEFAULT_RADIUS_M: u32 = MIN_RADIUS_M;

/// A resolved city center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// A coordinate with a zero or non-finite component counts as unresolved.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_resolved(&self) -> bool {
        self.latitude != 0.0
            && self.longitude != 0.0
            && self.latitude.is_finite()
            && self.longitude.is_finite()
    }
}

/// Applies the default radius and enforces the accepted range.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRadius`] when `radius` falls outside
/// `[MIN_RADIUS_M, MAX_RADIUS_M]`.
pub fn validate_radius(radius: Option<i64>) -> Result<u32, CoreError> {
    let Some(radius) = radius else {
        return Ok(DEFAULT_RADIUS_M);
    };

    u32::try_from(radius)
        .ok()
        .filter(|r| (MIN_RADIUS_M..=MAX_RADIUS_M).contains(r))
        .ok_or(CoreError::InvalidRadius {
            got: radius,
            min: MIN_RADIUS_M,
            max: MAX_RADIUS_M,
        })
}
