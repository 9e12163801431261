use crate::config::SceneConfig;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::PI;

/// Placement of one panel inside the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelInstance {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
}

impl PanelInstance {
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), q, self.position)
    }
}

/// Per-instance vertex data uploaded once at mount.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl From<&PanelInstance> for InstanceRaw {
    fn from(p: &PanelInstance) -> Self {
        Self {
            model: p.matrix().to_cols_array_2d(),
        }
    }
}

/// Scatter `cfg.panel_count` panels uniformly through the field box.
///
/// Samples per panel, in order: x, y, z, rotation x, y, z, scale. Panels may
/// overlap.
pub fn generate_instances<R: Rng>(cfg: &SceneConfig, rng: &mut R) -> Vec<PanelInstance> {
    let half = cfg.field_extents * 0.5;
    let [scale_lo, scale_hi] = cfg.scale_range;
    (0..cfg.panel_count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-half.x..half.x),
                rng.gen_range(-half.y..half.y),
                rng.gen_range(-half.z..half.z),
            );
            let rotation = Vec3::new(
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
            );
            let scale = rng.gen_range(scale_lo..scale_hi);
            PanelInstance {
                position,
                rotation,
                scale,
            }
        })
        .collect()
}

/// RNG for the instance scatter: seeded when the config asks for it.
pub fn scatter_rng(cfg: &SceneConfig) -> StdRng {
    match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn pack_instances(instances: &[PanelInstance]) -> Vec<InstanceRaw> {
    instances.iter().map(InstanceRaw::from).collect()
}
