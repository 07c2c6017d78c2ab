use std::sync::Arc;

use crate::{
    assets::decode::PreparedImage,
    foundation::error::{SeqError, SeqResult},
};

/// Snapshot of one frame slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInfo {
    /// 1-based sequence index.
    pub index: u32,
    /// Whether the image has arrived.
    pub loaded: bool,
    /// Natural `(width, height)`, known only once loaded.
    pub natural_size: Option<(u32, u32)>,
}

/// Fixed-size table of frame slots, indexed `1..=N`.
///
/// Slots only ever go from empty to loaded; the renderer reads them, only the loader writes.
#[derive(Clone, Debug)]
pub struct FrameStore {
    slots: Vec<Option<Arc<PreparedImage>>>,
    loaded: usize,
}

impl FrameStore {
    /// Store with `frame_count` empty slots.
    pub fn new(frame_count: u32) -> Self {
        Self {
            slots: vec![None; frame_count as usize],
            loaded: 0,
        }
    }

    /// Number of slots `N`.
    pub fn frame_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Number of slots holding an image.
    pub fn loaded_len(&self) -> usize {
        self.loaded
    }

    /// Fill slot `index`. Returns `false` if the slot was already loaded.
    pub fn insert(&mut self, index: u32, image: PreparedImage) -> SeqResult<bool> {
        let len = self.slots.len();
        let slot = index
            .checked_sub(1)
            .and_then(|i| self.slots.get_mut(i as usize))
            .ok_or_else(|| {
                SeqError::validation(format!(
                    "frame index {index} outside 1..={}",
                    len
                ))
            })?;
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(Arc::new(image));
        self.loaded += 1;
        Ok(true)
    }

    /// Image for slot `index`, if loaded. Out-of-range indices return `None`.
    pub fn get(&self, index: u32) -> Option<&PreparedImage> {
        let i = index.checked_sub(1)?;
        self.slots.get(i as usize)?.as_deref()
    }

    pub fn is_loaded(&self, index: u32) -> bool {
        self.get(index).is_some()
    }

    /// Slot snapshot, or `None` when `index` is outside `1..=N`.
    pub fn info(&self, index: u32) -> Option<FrameInfo> {
        let i = index.checked_sub(1)?;
        let slot = self.slots.get(i as usize)?;
        Some(FrameInfo {
            index,
            loaded: slot.is_some(),
            natural_size: slot.as_ref().map(|img| (img.width, img.height)),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frames.rs"]
mod tests;
