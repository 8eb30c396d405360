use std::ops::Index;
use std::slice;

use serde::Serialize;

use crate::config::{LayoutConfig, SizeRange, ViewportConfig};
use crate::geometry::{Placement, Rect, Size};
use crate::logging::{LAYOUT_TARGET, LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{LayoutMetrics, MetricSnapshot};

use super::tiers::{PlacementContext, Tier};

/// Ordered placements, index-aligned with the caller's items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlacementSet(Vec<Placement>);

impl PlacementSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Placement> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Placement> {
        self.0
    }
}

impl Index<usize> for PlacementSet {
    type Output = Placement;

    fn index(&self, index: usize) -> &Placement {
        &self.0[index]
    }
}

impl IntoIterator for PlacementSet {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlacementSet {
    type Item = &'a Placement;
    type IntoIter = slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Placements plus the diagnostics gathered while producing them.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub placements: PlacementSet,
    /// Tier that placed each item, index-aligned with `placements`.
    pub tiers: Vec<Tier>,
    pub metrics: MetricSnapshot,
    pub exclusion_zone: Rect,
    pub size_range: SizeRange,
}

/// Scatter layout generator.
///
/// Each item walks the tier chain until a strategy accepts a candidate.
/// Accepted placements accumulate in order and are read-only while the next
/// item searches, so the result is a pure function of
/// `(config, count, seed, viewport)`.
#[derive(Debug, Clone, Default)]
pub struct ScatterLayout {
    config: LayoutConfig,
    logger: Option<Logger>,
}

impl ScatterLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// False on compact viewports, where the gallery shows a plain list.
    pub fn should_scatter(&self, viewport: &ViewportConfig) -> bool {
        !viewport.is_compact(self.config.compact_breakpoint)
    }

    /// Lay out `count` tiles for `seed` on `viewport`.
    ///
    /// Seeds are meant to be non-negative. A negative seed pulls the early
    /// items' quasi-random sequence indices below zero; those clamp to index
    /// 0, so every tier-1 attempt for such an item lands on the same
    /// candidate and the item usually falls through to the retry tier.
    pub fn generate(&self, count: usize, seed: i64, viewport: &ViewportConfig) -> PlacementSet {
        self.generate_report(count, seed, viewport).placements
    }

    pub fn generate_report(
        &self,
        count: usize,
        seed: i64,
        viewport: &ViewportConfig,
    ) -> LayoutReport {
        let ctx = PlacementContext::new(&self.config, viewport, count, seed);
        let mut metrics = LayoutMetrics::new();

        if count == 0 {
            return LayoutReport {
                placements: PlacementSet::default(),
                tiers: Vec::new(),
                metrics: metrics.snapshot(),
                exclusion_zone: ctx.exclusion,
                size_range: ctx.range,
            };
        }

        let mut accepted = Vec::with_capacity(count);
        let mut tiers = Vec::with_capacity(count);

        for index in 0..count {
            let (placement, tier) = self.place_item(&ctx, index, &accepted, &mut metrics);
            metrics.record_placement(tier);
            if tier != Tier::Primary {
                self.emit(
                    LogLevel::Debug,
                    "tile_fallback",
                    [json_kv("index", index), json_str("tier", tier.as_str())],
                );
            }
            accepted.push(placement);
            tiers.push(tier);
        }

        let snapshot = metrics.snapshot();
        self.emit(
            LogLevel::Info,
            "layout_generated",
            [
                json_kv("count", count),
                json_kv("seed", seed),
                json_kv("width", viewport.size.width),
                json_kv("height", viewport.size.height),
            ]
            .into_iter()
            .chain(snapshot.as_fields()),
        );

        LayoutReport {
            placements: PlacementSet(accepted),
            tiers,
            metrics: snapshot,
            exclusion_zone: ctx.exclusion,
            size_range: ctx.range,
        }
    }

    fn place_item(
        &self,
        ctx: &PlacementContext<'_>,
        index: usize,
        accepted: &[Placement],
        metrics: &mut LayoutMetrics,
    ) -> (Placement, Tier) {
        for tier in Tier::CHAIN {
            let outcome = tier.attempt(ctx, index, accepted);
            metrics.record_candidates(outcome.candidates);
            if let Some(placement) = outcome.placement {
                return (placement, tier);
            }
        }

        let outcome = Tier::Corner.attempt(ctx, index, accepted);
        metrics.record_candidates(outcome.candidates);
        (outcome.placement.unwrap_or_else(|| ctx.corner()), Tier::Corner)
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = self.logger.as_ref() {
            if !logger.enabled(level) {
                return;
            }
            let event = event_with_fields(level, LAYOUT_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

/// Lay out `count` tiles on a `viewport` with the default configuration.
pub fn generate_placements(count: usize, seed: i64, viewport: Size) -> PlacementSet {
    ScatterLayout::default().generate(count, seed, &ViewportConfig::from(viewport))
}

/// Pair each item with its placement, in input order.
pub fn place_items<T>(
    items: impl IntoIterator<Item = T>,
    seed: i64,
    viewport: Size,
) -> Vec<(T, Placement)> {
    let items: Vec<T> = items.into_iter().collect();
    let placements = generate_placements(items.len(), seed, viewport);
    items.into_iter().zip(placements).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::sequence::JitterMode;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn zero_count_short_circuits() {
        let layout = ScatterLayout::default();
        let report = layout.generate_report(0, 3, &ViewportConfig::new(1920, 1080));
        assert!(report.placements.is_empty());
        assert!(report.tiers.is_empty());
        assert_eq!(report.metrics.items, 0);
    }

    #[test]
    fn report_tiers_align_with_placements() {
        let layout = ScatterLayout::default();
        let report = layout.generate_report(12, 1, &ViewportConfig::new(1920, 1080));
        assert_eq!(report.placements.len(), 12);
        assert_eq!(report.tiers.len(), 12);
        assert_eq!(report.metrics.items, 12);
        assert!(report.metrics.candidates >= 12);
    }

    #[test]
    fn first_item_lands_on_primary_tier() {
        let layout = ScatterLayout::default();
        let report = layout.generate_report(1, 0, &ViewportConfig::new(1920, 1080));
        assert_eq!(report.tiers, vec![Tier::Primary]);
    }

    #[test]
    fn crowded_viewport_falls_through_to_corner() {
        let layout = ScatterLayout::default();
        let report = layout.generate_report(3, 0, &ViewportConfig::new(320, 480));
        assert!(report.tiers.iter().all(|tier| *tier == Tier::Corner));
        assert_eq!(report.metrics.corner, 3);
    }

    #[test]
    fn corner_tier_counts_its_candidate() {
        let layout = ScatterLayout::default();
        let report = layout.generate_report(3, 0, &ViewportConfig::new(320, 480));
        // per item: 60 primary + 30 retry + 60 spiral + 60 crowded + 4 anchor + 1 corner
        assert_eq!(report.metrics.candidates, 3 * 215);
    }

    #[test]
    fn negative_seed_collapses_early_primary_attempts() {
        let layout = ScatterLayout::default();
        let viewport = ViewportConfig::new(1920, 1080);
        let report = layout.generate_report(6, -10, &viewport);

        assert_eq!(report.placements.len(), 6);
        assert_eq!(report.tiers[0], Tier::Primary);
        // Item 1's indices are all clamped to 0, i.e. the spot item 0 took.
        assert_eq!(report.tiers[1], Tier::Retry);
        assert!(report.tiers.iter().all(|tier| tier.is_strict()));

        let positive = layout.generate_report(6, 10, &viewport);
        assert!(report.metrics.candidates > positive.metrics.candidates);
    }

    #[test]
    fn logger_receives_fallback_and_summary_events() {
        let sink = Arc::new(MemorySink::new());
        let layout = ScatterLayout::default().with_logger(Logger::from_shared(sink.clone()));
        layout.generate(2, 0, &ViewportConfig::new(320, 480));

        let messages = sink.messages();
        assert_eq!(
            messages,
            vec!["tile_fallback", "tile_fallback", "layout_generated"]
        );
        let summary = sink.events().pop().expect("summary event");
        assert_eq!(summary.fields["count"], json!(2));
        assert_eq!(summary.fields["corner"], json!(2));
    }

    #[test]
    fn info_logger_skips_debug_fallbacks() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::from_shared(sink.clone()).with_min_level(LogLevel::Info);
        ScatterLayout::default()
            .with_logger(logger)
            .generate(2, 0, &ViewportConfig::new(320, 480));
        assert_eq!(sink.messages(), vec!["layout_generated"]);
    }

    #[test]
    fn compact_viewports_skip_scatter() {
        let layout = ScatterLayout::default();
        assert!(!layout.should_scatter(&ViewportConfig::new(800, 600)));
        assert!(layout.should_scatter(&ViewportConfig::new(1440, 900)));
    }

    #[test]
    fn placement_set_serializes_as_array() {
        let config = LayoutConfig {
            jitter: JitterMode::Disabled,
            ..LayoutConfig::default()
        };
        let placements =
            ScatterLayout::new(config).generate(2, 0, &ViewportConfig::new(1920, 1080));
        let value = serde_json::to_value(&placements).unwrap();
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 2);
        assert!(array[0].get("size").is_some());
    }

    #[test]
    fn place_items_keeps_input_order() {
        let pairs = place_items(["a", "b", "c"], 4, Size::new(1920, 1080));
        let placements = generate_placements(3, 4, Size::new(1920, 1080));
        let names: Vec<_> = pairs.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        for ((_, placement), expected) in pairs.iter().zip(placements.iter()) {
            assert_eq!(placement, expected);
        }
    }
}
