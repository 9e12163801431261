use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Instance field
pub const PANEL_COUNT: usize = 300;
pub const FIELD_EXTENTS: [f32; 3] = [25.0, 15.0, 10.0]; // width, height, depth of the scatter box
pub const PANEL_SCALE_MIN: f32 = 0.2;
pub const PANEL_SCALE_MAX: f32 = 0.7;

// Panel geometry (16:9 slab)
pub const PANEL_SIZE: [f32; 3] = [1.6, 0.9, 0.05];

// Animation
pub const PITCH_DRIFT_DIVISOR: f32 = 80.0; // seconds per radian of pitch drift
pub const YAW_DRIFT_DIVISOR: f32 = 100.0; // seconds per radian of yaw drift
pub const POINTER_SWAY: f32 = 0.2; // max group tilt toward the pointer (radians)
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1; // approach step is only stable below 1.0

// Camera
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const KEY_LIGHT_COLOR: u32 = 0x00f0ff; // cyan
pub const FILL_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, -10.0];
pub const FILL_LIGHT_COLOR: u32 = 0x4f46e5; // indigo
pub const POINT_LIGHT_INTENSITY: f32 = 1.5;
pub const SUN_POSITION: [f32; 3] = [0.0, 5.0, 5.0];
pub const SUN_INTENSITY: f32 = 1.0;
pub const MAX_POINT_LIGHTS: usize = 4;

// Panel material
pub const GLASS_TRANSMISSION: f32 = 0.95;
pub const GLASS_THICKNESS: f32 = 0.5;
pub const GLASS_ROUGHNESS: f32 = 0.05;
pub const GLASS_CLEARCOAT: f32 = 1.0;
pub const GLASS_CLEARCOAT_ROUGHNESS: f32 = 0.05;
pub const GLASS_METALNESS: f32 = 0.0;
pub const GLASS_COLOR: u32 = 0xffffff;
pub const GLASS_EMISSIVE: u32 = 0x00f0ff;
pub const GLASS_EMISSIVE_INTENSITY: f32 = 0.02; // very faint glow
pub const GLASS_OPACITY: f32 = 0.3;

// Environment gradient ("city" look)
pub const ENV_SKY: [f32; 3] = [0.55, 0.62, 0.75];
pub const ENV_HORIZON: [f32; 3] = [0.85, 0.80, 0.72];
pub const ENV_GROUND: [f32; 3] = [0.12, 0.12, 0.14];
pub const ENV_INTENSITY: f32 = 1.0;

// Surface
// used when the surface cannot composite alpha
pub const OPAQUE_CLEAR: [f64; 3] = [0.02, 0.02, 0.04];
pub const DEVICE_PIXEL_RATIO_RANGE: [f64; 2] = [1.0, 1.5];
pub const MSAA_SAMPLES: u32 = 4;

/// Convert a `0xRRGGBB` literal into linear-ish `[0, 1]` RGB components.
#[inline]
pub fn rgb_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn field_extents_vec3() -> Vec3 {
    Vec3::from(FIELD_EXTENTS)
}
