use anyhow::Context;

use crate::{
    assets::{
        decode::{PreparedImage, decode_image},
        naming::FrameNaming,
    },
    config::SequenceConfig,
    foundation::error::{SeqError, SeqResult},
};

/// Where frames come from.
///
/// Implementations are called from fetch workers, one call per frame, in no particular order.
pub trait FrameSource: Send + Sync {
    /// Fetch and decode the frame with 1-based `index`.
    fn fetch(&self, index: u32) -> SeqResult<PreparedImage>;
}

/// Frames read from a directory using [`FrameNaming`].
#[derive(Clone, Debug)]
pub struct DirSource {
    naming: FrameNaming,
}

impl DirSource {
    /// Source over an explicit naming scheme.
    pub fn new(naming: FrameNaming) -> Self {
        Self { naming }
    }

    /// Source using the directory and naming fields of `config`.
    pub fn from_config(config: &SequenceConfig) -> Self {
        Self::new(FrameNaming::new(
            config.asset_dir.clone(),
            config.pad_width,
            config.extension.clone(),
        ))
    }

    /// Naming scheme used for lookups.
    pub fn naming(&self) -> &FrameNaming {
        &self.naming
    }
}

impl FrameSource for DirSource {
    fn fetch(&self, index: u32) -> SeqResult<PreparedImage> {
        if index == 0 {
            return Err(SeqError::validation("frame indices are 1-based"));
        }
        let path = self.naming.path_for(index);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read frame '{}'", path.display()))?;
        decode_image(&bytes)
            .map_err(|e| SeqError::load(format!("decode frame '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
