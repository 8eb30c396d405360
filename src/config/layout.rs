use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, clamp};
use crate::sequence::JitterMode;

use super::ViewportConfig;

/// Tunable constants for the scatter layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum gap between tiles, and between tiles and the exclusion zone.
    pub padding: f64,
    /// Preferred smallest tile side.
    pub min_size: f64,
    /// Largest tile side.
    pub max_size: f64,
    /// Hard lower bound on the smallest side when the viewport allows it.
    pub min_floor: f64,
    /// Exclusion panel width before padding is applied.
    pub exclusion_width: f64,
    /// Exclusion panel height before padding is applied.
    pub exclusion_height: f64,
    /// Quasi-random attempts per item.
    pub max_attempts: usize,
    /// Uniform random attempts per item once the quasi-random search fails.
    pub retry_attempts: usize,
    /// Spiral steps per item in the layout; the spiral budget is `count * this`.
    pub spiral_attempts_per_item: usize,
    /// Lower bound on the spiral budget.
    pub min_spiral_attempts: usize,
    /// Size jitter window as a share of the size range.
    pub size_jitter_ratio: f64,
    /// Size jitter window as a share of the max size when the range is empty.
    pub collapsed_size_jitter_ratio: f64,
    /// Viewports at or below this width skip the scatter entirely.
    pub compact_breakpoint: u32,
    pub jitter: JitterMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            min_size: 180.0,
            max_size: 280.0,
            min_floor: 120.0,
            exclusion_width: 450.0,
            exclusion_height: 250.0,
            max_attempts: 60,
            retry_attempts: 30,
            spiral_attempts_per_item: 5,
            min_spiral_attempts: 60,
            size_jitter_ratio: 0.25,
            collapsed_size_jitter_ratio: 0.1,
            compact_breakpoint: 1024,
            jitter: JitterMode::Seeded,
        }
    }
}

/// Feasible tile sides for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    pub fn contains(&self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }
}

impl LayoutConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("padding", self.padding),
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_floor", self.min_floor),
            ("exclusion_width", self.exclusion_width),
            ("exclusion_height", self.exclusion_height),
            ("size_jitter_ratio", self.size_jitter_ratio),
            ("collapsed_size_jitter_ratio", self.collapsed_size_jitter_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "`{name}` must be a finite, non-negative number (got {value})"
                )));
            }
        }

        if self.max_size <= 0.0 {
            return Err(LayoutError::InvalidConfig(
                "`max_size` must be positive".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(LayoutError::InvalidConfig(format!(
                "`min_size` ({}) exceeds `max_size` ({})",
                self.min_size, self.max_size
            )));
        }
        if self.min_floor > self.max_size {
            return Err(LayoutError::InvalidConfig(format!(
                "`min_floor` ({}) exceeds `max_size` ({})",
                self.min_floor, self.max_size
            )));
        }
        if self.max_attempts == 0 || self.retry_attempts == 0 || self.min_spiral_attempts == 0 {
            return Err(LayoutError::InvalidConfig(
                "attempt budgets must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Feasible side lengths: never larger than the placement area's short
    /// side, never below the floor unless the viewport forces it.
    pub fn size_range(&self, viewport: &ViewportConfig) -> SizeRange {
        let dimension_cap = viewport
            .available_width()
            .min(viewport.available_height())
            .max(1.0);
        let max = self.max_size.min(dimension_cap);
        let preferred_min = self.min_floor.max(self.min_size.min(max));
        SizeRange {
            min: preferred_min.min(max),
            max,
        }
    }

    /// Side length used by every tier after the quasi-random search.
    pub fn fallback_size(&self, viewport: &ViewportConfig) -> f64 {
        let range = self.size_range(viewport);
        clamp(self.min_size, self.min_floor, range.max)
    }

    /// Centred exclusion panel, inflated by the padding on every side.
    pub fn exclusion_zone(&self, viewport: &ViewportConfig) -> Rect {
        Rect::new(
            viewport.width() / 2.0 - self.exclusion_width / 2.0,
            viewport.height() / 2.0 - self.exclusion_height / 2.0,
            self.exclusion_width,
            self.exclusion_height,
        )
        .inflate(self.padding)
    }

    /// Spiral step budget for a layout of `count` items.
    pub fn spiral_attempts(&self, count: usize) -> usize {
        count
            .saturating_mul(self.spiral_attempts_per_item)
            .max(self.min_spiral_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exclusion_zone_is_centred_and_padded() {
        let config = LayoutConfig::default();
        let zone = config.exclusion_zone(&ViewportConfig::new(1920, 1080));
        assert_eq!(zone, Rect::new(715.0, 395.0, 490.0, 290.0));
    }

    #[test]
    fn size_range_on_roomy_viewport() {
        let config = LayoutConfig::default();
        let range = config.size_range(&ViewportConfig::new(1920, 1080));
        assert_eq!(range, SizeRange { min: 180.0, max: 280.0 });
        assert_eq!(config.fallback_size(&ViewportConfig::new(1920, 1080)), 180.0);
    }

    #[test]
    fn size_range_collapses_on_tiny_viewport() {
        let config = LayoutConfig::default();
        let viewport = ViewportConfig::new(130, 200);
        let range = config.size_range(&viewport);
        assert_eq!(range.max, 100.0);
        assert_eq!(range.min, 100.0);
        assert_eq!(config.fallback_size(&viewport), 100.0);
    }

    #[test]
    fn size_range_never_empty_when_area_vanishes() {
        let config = LayoutConfig::default();
        let range = config.size_range(&ViewportConfig::new(5, 5));
        assert_eq!(range, SizeRange { min: 1.0, max: 1.0 });
    }

    #[test]
    fn spiral_budget_has_floor() {
        let config = LayoutConfig::default();
        assert_eq!(config.spiral_attempts(3), 60);
        assert_eq!(config.spiral_attempts(40), 200);
    }

    #[test]
    fn partial_json_overrides_only_named_keys() {
        let config = LayoutConfig::from_json_str(r#"{ "padding": 8, "jitter": "disabled" }"#)
            .expect("config parses");
        assert_eq!(config.padding, 8.0);
        assert_eq!(config.jitter, JitterMode::Disabled);
        assert_eq!(config.max_size, 280.0);
    }

    #[test]
    fn inverted_sizes_are_rejected() {
        let err = LayoutConfig::from_json_str(r#"{ "min_size": 300 }"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let config = LayoutConfig {
            retry_attempts: 0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_surfaces_serde_error() {
        let err = LayoutConfig::from_json_str("{ padding: }").unwrap_err();
        assert!(matches!(err, LayoutError::Serde(_)));
    }
}
