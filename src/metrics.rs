use crate::layout::Tier;
use crate::logging::{LogEvent, LogFields, LogLevel};
use serde::Serialize;
use serde_json::json;

/// Per-call counters describing how hard the generator had to work.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LayoutMetrics {
    primary: u64,
    retry: u64,
    spiral: u64,
    crowded: u64,
    anchor: u64,
    corner: u64,
    candidates: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement(&mut self, tier: Tier) {
        let slot = match tier {
            Tier::Primary => &mut self.primary,
            Tier::Retry => &mut self.retry,
            Tier::Spiral => &mut self.spiral,
            Tier::Crowded => &mut self.crowded,
            Tier::Anchor => &mut self.anchor,
            Tier::Corner => &mut self.corner,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn record_candidates(&mut self, count: usize) {
        self.candidates = self.candidates.saturating_add(count as u64);
    }

    pub fn placed(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Primary => self.primary,
            Tier::Retry => self.retry,
            Tier::Spiral => self.spiral,
            Tier::Crowded => self.crowded,
            Tier::Anchor => self.anchor,
            Tier::Corner => self.corner,
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            items: self.primary
                + self.retry
                + self.spiral
                + self.crowded
                + self.anchor
                + self.corner,
            primary: self.primary,
            retry: self.retry,
            spiral: self.spiral,
            crowded: self.crowded,
            anchor: self.anchor,
            corner: self.corner,
            candidates: self.candidates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricSnapshot {
    pub items: u64,
    pub primary: u64,
    pub retry: u64,
    pub spiral: u64,
    pub crowded: u64,
    pub anchor: u64,
    pub corner: u64,
    pub candidates: u64,
}

impl MetricSnapshot {
    /// Items that could not be placed with the full padding honoured.
    pub fn degraded(&self) -> u64 {
        self.crowded + self.anchor + self.corner
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("items".to_string(), json!(self.items));
        map.insert("primary".to_string(), json!(self.primary));
        map.insert("retry".to_string(), json!(self.retry));
        map.insert("spiral".to_string(), json!(self.spiral));
        map.insert("crowded".to_string(), json!(self.crowded));
        map.insert("anchor".to_string(), json!(self.anchor));
        map.insert("corner".to_string(), json!(self.corner));
        map.insert("candidates".to_string(), json!(self.candidates));
        map
    }
}
