use std::path::{Path, PathBuf};

/// Relative path of frame `index` under `dir`, e.g. `assets/00001.png`.
pub fn frame_rel_path(dir: &str, index: u32, pad_width: usize, extension: &str) -> String {
    format!("{dir}/{index:0pad_width$}.{extension}")
}

/// Deterministic, zero-padded file naming for a frame sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameNaming {
    root: PathBuf,
    pad_width: usize,
    extension: String,
}

impl FrameNaming {
    /// Naming rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, pad_width: usize, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            pad_width,
            extension: extension.into(),
        }
    }

    /// Directory frames live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name (no directory) for a 1-based frame index.
    pub fn file_name(&self, index: u32) -> String {
        format!(
            "{index:0width$}.{ext}",
            width = self.pad_width,
            ext = self.extension
        )
    }

    /// Full path for a 1-based frame index.
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.root.join(self.file_name(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
