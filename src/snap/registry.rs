use rustc_hash::FxHashMap;

use super::preset::SnapPreset;
use crate::error::RigError;
use crate::util::angle::angular_distance;

/// Ordered collection of snap presets.
///
/// Iteration order is registration order. Lookups that can match several
/// presets (`nearest`, `by_hotkey`) prefer the lowest index.
#[derive(Debug, Clone, Default)]
pub struct SnapRegistry {
    presets: Vec<SnapPreset>,
    /// Name → index. Rebuilt on removal.
    by_name: FxHashMap<String, usize>,
}

impl SnapRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a preset list, skipping later duplicates.
    #[must_use]
    pub fn from_presets(presets: impl IntoIterator<Item = SnapPreset>) -> Self {
        let mut registry = Self::new();
        for preset in presets {
            if let Err(e) = registry.add(preset) {
                log::warn!("Skipping snap preset: {e}");
            }
        }
        registry
    }

    /// Registry holding the four cardinal presets.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_presets(SnapPreset::cardinal())
    }

    /// Append a preset and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::DuplicatePreset`] if the name is taken.
    pub fn add(&mut self, preset: SnapPreset) -> Result<usize, RigError> {
        if self.by_name.contains_key(&preset.name) {
            return Err(RigError::DuplicatePreset(preset.name));
        }
        let index = self.presets.len();
        let _ = self.by_name.insert(preset.name.clone(), index);
        self.presets.push(preset);
        Ok(index)
    }

    /// Remove a preset by name, returning it. Later presets shift down one
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::NotFound`] if no preset has this name.
    pub fn remove(&mut self, name: &str) -> Result<SnapPreset, RigError> {
        let index = self.by_name(name)?;
        let removed = self.presets.remove(index);
        self.by_name = self
            .presets
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Ok(removed)
    }

    /// Preset at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::IndexOutOfRange`] for an unknown index.
    pub fn get(&self, index: usize) -> Result<&SnapPreset, RigError> {
        self.presets.get(index).ok_or(RigError::IndexOutOfRange {
            index,
            len: self.presets.len(),
        })
    }

    /// Index of the preset called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::NotFound`] if no preset has this name.
    pub fn by_name(&self, name: &str) -> Result<usize, RigError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RigError::NotFound(name.to_owned()))
    }

    /// Index of the first preset bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::NotFound`] if no preset uses this key.
    pub fn by_hotkey(&self, key: &str) -> Result<usize, RigError> {
        self.presets
            .iter()
            .position(|p| p.hotkey.as_deref() == Some(key))
            .ok_or_else(|| RigError::NotFound(key.to_owned()))
    }

    /// Closest preset to `(yaw, pitch)` and its angular distance. `None` when
    /// the registry is empty.
    #[must_use]
    pub fn nearest(&self, yaw: f32, pitch: f32) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, preset) in self.presets.iter().enumerate() {
            let d = angular_distance(yaw, pitch, preset.yaw, preset.pitch);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best
    }

    /// Presets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SnapPreset> {
        self.presets.iter()
    }

    /// Presets as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[SnapPreset] {
        &self.presets
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether no presets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
