//! Static scene parameters.
//!
//! `SceneConfig::default()` mirrors the constants in [`crate::constants`]. A
//! config is fixed for the lifetime of a mounted scene; changing any field
//! means building a new scene.

use crate::constants::*;
use crate::error::{GlassError, Result};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub panel_count: usize,
    pub field_extents: Vec3,
    pub scale_range: [f32; 2],
    pub pitch_drift_divisor: f32,
    pub yaw_drift_divisor: f32,
    pub pointer_sway: f32,
    pub max_frame_delta: f32,
    /// Seed for the instance scatter. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            panel_count: PANEL_COUNT,
            field_extents: field_extents_vec3(),
            scale_range: [PANEL_SCALE_MIN, PANEL_SCALE_MAX],
            pitch_drift_divisor: PITCH_DRIFT_DIVISOR,
            yaw_drift_divisor: YAW_DRIFT_DIVISOR,
            pointer_sway: POINTER_SWAY,
            max_frame_delta: MAX_FRAME_DELTA_SEC,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_panel_count(mut self, count: usize) -> Self {
        self.panel_count = count;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.panel_count == 0 {
            return Err(GlassError::InvalidConfig("panel_count must be > 0".into()));
        }
        if !self.field_extents.cmpgt(Vec3::ZERO).all() || !self.field_extents.is_finite() {
            return Err(GlassError::InvalidConfig(format!(
                "field extents must be positive, got {:?}",
                self.field_extents
            )));
        }
        let [lo, hi] = self.scale_range;
        if !(lo > 0.0 && lo < hi && hi.is_finite()) {
            return Err(GlassError::InvalidConfig(format!(
                "scale range must satisfy 0 < min < max, got [{lo}, {hi}]"
            )));
        }
        if self.pitch_drift_divisor <= 0.0 || self.yaw_drift_divisor <= 0.0 {
            return Err(GlassError::InvalidConfig("drift divisors must be > 0".into()));
        }
        // exponential approach overshoots once a single step reaches 1.0
        if !(self.max_frame_delta > 0.0 && self.max_frame_delta < 1.0) {
            return Err(GlassError::InvalidConfig(format!(
                "max_frame_delta must be in (0, 1), got {}",
                self.max_frame_delta
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(SceneConfig::default().with_panel_count(0).validate().is_err());

        let mut flat = SceneConfig::default();
        flat.field_extents.z = 0.0;
        assert!(flat.validate().is_err());

        let mut inverted = SceneConfig::default();
        inverted.scale_range = [0.7, 0.2];
        assert!(inverted.validate().is_err());

        let mut unstable = SceneConfig::default();
        unstable.max_frame_delta = 1.0;
        assert!(unstable.validate().is_err());
    }
}
