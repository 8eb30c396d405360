use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const DOMAIN_TAG: &[u8] = b"scatter_layout::jitter";

/// Whether candidate jitter is drawn or pinned to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterMode {
    #[default]
    Seeded,
    Disabled,
}

/// Independent draw streams, so size and position jitter never share values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterStream {
    Size,
    OffsetX,
    OffsetY,
    RetryX,
    RetryY,
}

impl JitterStream {
    fn tag(self) -> u8 {
        match self {
            Self::Size => 1,
            Self::OffsetX => 2,
            Self::OffsetY => 3,
            Self::RetryX => 4,
            Self::RetryY => 5,
        }
    }
}

/// Counter-based pseudo-random source keyed by the layout seed.
///
/// Every draw seeds a fresh `StdRng` from a hash of `(seed, stream, index,
/// draw)`, so values do not depend on call order and the same inputs always
/// produce the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterSource {
    seed: i64,
    mode: JitterMode,
}

impl JitterSource {
    pub fn new(seed: i64, mode: JitterMode) -> Self {
        Self { seed, mode }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    fn rng(&self, stream: JitterStream, index: u64, draw: u32) -> StdRng {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&[stream.tag()]);
        hasher.update(&index.to_le_bytes());
        hasher.update(&draw.to_le_bytes());
        StdRng::from_seed(*hasher.finalize().as_bytes())
    }

    /// Uniform value in `[0, 1)`. Always seeded, regardless of mode.
    pub fn unit(&self, stream: JitterStream, index: u64, draw: u32) -> f64 {
        self.rng(stream, index, draw).random_range(0.0..1.0)
    }

    /// Zero-centred value in `[-0.5, 0.5)`, or exactly 0 when jitter is disabled.
    pub fn centered(&self, stream: JitterStream, index: u64, draw: u32) -> f64 {
        match self.mode {
            JitterMode::Seeded => self.rng(stream, index, draw).random_range(-0.5..0.5),
            JitterMode::Disabled => 0.0,
        }
    }
}
