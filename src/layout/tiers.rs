use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::config::{LayoutConfig, SizeRange, ViewportConfig};
use crate::geometry::{Placement, Rect, clamp, overlaps};
use crate::sequence::{JitterSource, JitterStream, halton, sequence_index};

/// Fallback strategies, tried in declaration order for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Halton-sampled size and position, full padding.
    Primary,
    /// Uniform positions at the fallback size, full padding.
    Retry,
    /// Golden-angle spiral from the centre, half padding between tiles.
    Spiral,
    /// First spiral step clear of the exclusion zone, tiles may crowd.
    Crowded,
    /// Fixed slots beside the exclusion zone.
    Anchor,
    /// Top-left corner of the placement area; always succeeds.
    Corner,
}

impl Tier {
    /// Strategies that may decline; [`Tier::Corner`] closes the chain.
    pub const CHAIN: [Tier; 5] = [
        Tier::Primary,
        Tier::Retry,
        Tier::Spiral,
        Tier::Crowded,
        Tier::Anchor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Primary => "primary",
            Tier::Retry => "retry",
            Tier::Spiral => "spiral",
            Tier::Crowded => "crowded",
            Tier::Anchor => "anchor",
            Tier::Corner => "corner",
        }
    }

    /// Whether placements from this tier honour the full inter-tile padding.
    pub fn is_strict(self) -> bool {
        matches!(self, Tier::Primary | Tier::Retry)
    }

    pub(crate) fn attempt(
        self,
        ctx: &PlacementContext<'_>,
        index: usize,
        accepted: &[Placement],
    ) -> TierOutcome {
        match self {
            Tier::Primary => primary(ctx, index, accepted),
            Tier::Retry => retry(ctx, index, accepted),
            Tier::Spiral => spiral(ctx, index, accepted),
            Tier::Crowded => crowded(ctx, index),
            Tier::Anchor => anchor(ctx),
            Tier::Corner => TierOutcome::found(ctx.corner(), 1),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TierOutcome {
    pub placement: Option<Placement>,
    pub candidates: usize,
}

impl TierOutcome {
    fn found(placement: Placement, candidates: usize) -> Self {
        Self {
            placement: Some(placement),
            candidates,
        }
    }

    fn exhausted(candidates: usize) -> Self {
        Self {
            placement: None,
            candidates,
        }
    }
}

/// Everything a tier reads; fixed for the whole layout call.
#[derive(Debug, Clone)]
pub(crate) struct PlacementContext<'a> {
    pub config: &'a LayoutConfig,
    pub viewport: &'a ViewportConfig,
    pub exclusion: Rect,
    pub range: SizeRange,
    pub fallback_size: f64,
    pub count: usize,
    pub jitter: JitterSource,
}

impl<'a> PlacementContext<'a> {
    pub fn new(
        config: &'a LayoutConfig,
        viewport: &'a ViewportConfig,
        count: usize,
        seed: i64,
    ) -> Self {
        Self {
            config,
            viewport,
            exclusion: config.exclusion_zone(viewport),
            range: config.size_range(viewport),
            fallback_size: config.fallback_size(viewport),
            count,
            jitter: JitterSource::new(seed, config.jitter),
        }
    }

    fn padding(&self) -> f64 {
        self.config.padding
    }

    /// Clamp a tile's top-left corner into the legal region.
    fn legal(&self, x: f64, y: f64, size: f64) -> Placement {
        let margins = &self.viewport.margins;
        Placement::new(
            clamp(x, margins.left, self.viewport.max_x(size)),
            clamp(y, margins.top, self.viewport.max_y(size)),
            size,
        )
    }

    fn clears_exclusion(&self, candidate: &Placement) -> bool {
        !overlaps(candidate, &self.exclusion, self.padding())
    }

    fn clears_tiles(&self, candidate: &Placement, accepted: &[Placement], padding: f64) -> bool {
        accepted
            .iter()
            .all(|placed| !overlaps(candidate, placed, padding))
    }

    pub fn corner(&self) -> Placement {
        let margins = &self.viewport.margins;
        self.legal(margins.left, margins.top, self.fallback_size)
    }
}

fn primary(ctx: &PlacementContext<'_>, index: usize, accepted: &[Placement]) -> TierOutcome {
    let range = ctx.range;
    let span = range.span();
    let size_window = if span > 0.0 {
        span * ctx.config.size_jitter_ratio
    } else {
        range.max * ctx.config.collapsed_size_jitter_ratio
    };
    let area = ctx.viewport.placement_area();

    for attempt in 0..ctx.config.max_attempts {
        let seq = sequence_index(index, attempt, ctx.jitter.seed());

        let base_size = range.min + halton(seq, 5) * span;
        let size = clamp(
            base_size + ctx.jitter.centered(JitterStream::Size, seq, 0) * size_window,
            range.min,
            range.max,
        );

        let max_dx = (area.width - size).max(0.0);
        let max_dy = (area.height - size).max(0.0);
        let x = area.x
            + halton(seq, 2) * max_dx
            + ctx.jitter.centered(JitterStream::OffsetX, seq, 0) * ctx.padding();
        let y = area.y
            + halton(seq, 3) * max_dy
            + ctx.jitter.centered(JitterStream::OffsetY, seq, 0) * ctx.padding();

        let candidate = ctx.legal(x, y, size);
        if ctx.clears_exclusion(&candidate)
            && ctx.clears_tiles(&candidate, accepted, ctx.padding())
        {
            return TierOutcome::found(candidate, attempt + 1);
        }
    }

    TierOutcome::exhausted(ctx.config.max_attempts)
}

fn retry(ctx: &PlacementContext<'_>, index: usize, accepted: &[Placement]) -> TierOutcome {
    let size = ctx.fallback_size;
    let area = ctx.viewport.placement_area();
    let max_dx = (area.width - size).max(0.0);
    let max_dy = (area.height - size).max(0.0);

    for attempt in 0..ctx.config.retry_attempts {
        let draw = attempt as u32;
        let x = area.x + ctx.jitter.unit(JitterStream::RetryX, index as u64, draw) * max_dx;
        let y = area.y + ctx.jitter.unit(JitterStream::RetryY, index as u64, draw) * max_dy;

        let candidate = ctx.legal(x, y, size);
        if ctx.clears_exclusion(&candidate)
            && ctx.clears_tiles(&candidate, accepted, ctx.padding())
        {
            return TierOutcome::found(candidate, attempt + 1);
        }
    }

    TierOutcome::exhausted(ctx.config.retry_attempts)
}

/// Golden-angle spiral steps for item `index`, centred on the placement area.
///
/// The radius grows with `sqrt` of the normalised step so that successive
/// steps sweep equal-area annuli.
fn spiral_steps<'c>(
    ctx: &'c PlacementContext<'_>,
    index: usize,
) -> impl Iterator<Item = Placement> + 'c {
    let golden_angle = PI * (3.0 - 5f64.sqrt());
    let size = ctx.fallback_size;
    let area = ctx.viewport.placement_area();
    let (center_x, center_y) = area.center();
    let radius_x = (area.width - size).max(size) / 2.0;
    let radius_y = (area.height - size).max(size) / 2.0;
    let count = ctx.count;

    (0..ctx.config.spiral_attempts(count)).map(move |attempt| {
        let step = (index + attempt) as f64;
        let normalized = if count > 1 {
            (step / (count - 1).max(1) as f64).min(1.0)
        } else {
            0.0
        };
        let radius_scale = normalized.sqrt();
        let angle = step * golden_angle;

        ctx.legal(
            center_x + angle.cos() * radius_x * radius_scale - size / 2.0,
            center_y + angle.sin() * radius_y * radius_scale - size / 2.0,
            size,
        )
    })
}

fn spiral(ctx: &PlacementContext<'_>, index: usize, accepted: &[Placement]) -> TierOutcome {
    let relaxed = ctx.padding() * 0.5;
    let mut evaluated = 0;
    for candidate in spiral_steps(ctx, index) {
        evaluated += 1;
        if ctx.clears_exclusion(&candidate) && ctx.clears_tiles(&candidate, accepted, relaxed) {
            return TierOutcome::found(candidate, evaluated);
        }
    }
    TierOutcome::exhausted(evaluated)
}

fn crowded(ctx: &PlacementContext<'_>, index: usize) -> TierOutcome {
    let mut evaluated = 0;
    for candidate in spiral_steps(ctx, index) {
        evaluated += 1;
        if ctx.clears_exclusion(&candidate) {
            return TierOutcome::found(candidate, evaluated);
        }
    }
    TierOutcome::exhausted(evaluated)
}

/// Slots above, below, left and right of the exclusion zone, in that order.
fn anchor_slots(ctx: &PlacementContext<'_>) -> [Placement; 4] {
    let zone = ctx.exclusion;
    let size = ctx.fallback_size;
    let padding = ctx.padding();
    let (zone_cx, zone_cy) = zone.center();
    let centred_x = zone_cx - size / 2.0;
    let centred_y = zone_cy - size / 2.0;

    [
        ctx.legal(centred_x, zone.y - size - padding, size),
        ctx.legal(centred_x, zone.bottom() + padding, size),
        ctx.legal(zone.x - size - padding, centred_y, size),
        ctx.legal(zone.right() + padding, centred_y, size),
    ]
}

fn anchor(ctx: &PlacementContext<'_>) -> TierOutcome {
    let slots = anchor_slots(ctx);
    match slots
        .iter()
        .position(|slot| ctx.clears_exclusion(slot))
    {
        Some(pos) => TierOutcome::found(slots[pos], pos + 1),
        None => TierOutcome::exhausted(slots.len()),
    }
}
