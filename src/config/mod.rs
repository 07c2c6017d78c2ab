use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;

use crate::foundation::{
    core::Viewport,
    error::{SeqError, SeqResult},
};

/// Number of frames in the intro sequence.
pub const DEFAULT_FRAME_COUNT: u32 = 300;
/// Frames that must arrive before the page boots.
pub const DEFAULT_BOOT_THRESHOLD: u32 = 35;
/// Delay after which the page boots regardless of load progress.
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(2500);
/// Digits used when zero-padding frame file names.
pub const DEFAULT_PAD_WIDTH: usize = 5;

const THREADS_ENV: &str = "SCROLLSEQ_THREADS";

/// Tunables for the frame sequence player.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Total number of frames `N`; frames are addressed `1..=N`.
    pub frame_count: u32,
    /// Completions required before boot (`<= frame_count`).
    pub boot_threshold: u32,
    /// One-shot fallback delay, in milliseconds on the wire.
    #[serde(with = "duration_ms")]
    pub fallback_delay: Duration,
    /// Directory frames are fetched from.
    pub asset_dir: PathBuf,
    /// Zero-padding width of the frame file stem.
    pub pad_width: usize,
    /// File extension without the leading dot.
    pub extension: String,
    /// Initial drawing surface size.
    pub viewport: Viewport,
    /// Fetch worker count. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            boot_threshold: DEFAULT_BOOT_THRESHOLD,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            asset_dir: PathBuf::from("assets"),
            pad_width: DEFAULT_PAD_WIDTH,
            extension: "png".to_string(),
            viewport: Viewport::default(),
            threads: None,
        }
    }
}

impl SequenceConfig {
    /// Check the cross-field constraints the loader and scrub driver rely on.
    pub fn validate(&self) -> SeqResult<()> {
        if self.frame_count == 0 {
            return Err(SeqError::validation("frame_count must be >= 1"));
        }
        if self.boot_threshold == 0 {
            return Err(SeqError::validation("boot_threshold must be >= 1"));
        }
        if self.boot_threshold > self.frame_count {
            return Err(SeqError::validation(format!(
                "boot_threshold ({}) must be <= frame_count ({})",
                self.boot_threshold, self.frame_count
            )));
        }
        if self.pad_width == 0 {
            return Err(SeqError::validation("pad_width must be >= 1"));
        }
        if self.extension.is_empty() {
            return Err(SeqError::validation("extension must be non-empty"));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(SeqError::validation("viewport dimensions must be > 0"));
        }
        if self.threads == Some(0) {
            return Err(SeqError::validation("threads must be > 0 when set"));
        }
        Ok(())
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> SeqResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .map_err(|e| SeqError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `SCROLLSEQ_THREADS` if it is set to a positive integer.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(n) = std::env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            self.threads = Some(n);
        }
        self
    }
}

mod duration_ms {
    use std::time::Duration;

    pub(super) fn serialize<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = <u64 as serde::Deserialize>::deserialize(d)?;
        Ok(Duration::from_millis(ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/config.rs"]
mod tests;
