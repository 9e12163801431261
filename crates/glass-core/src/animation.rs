use crate::config::SceneConfig;
use crate::pointer::PointerState;
use glam::{EulerRot, Mat4, Quat};

/// Rotation of the wrapping group: pitch about X, yaw about Y (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DriverParams {
    pub pitch_drift_divisor: f32,
    pub yaw_drift_divisor: f32,
    pub pointer_sway: f32,
}

impl From<&SceneConfig> for DriverParams {
    fn from(cfg: &SceneConfig) -> Self {
        Self {
            pitch_drift_divisor: cfg.pitch_drift_divisor,
            yaw_drift_divisor: cfg.yaw_drift_divisor,
            pointer_sway: cfg.pointer_sway,
        }
    }
}

/// Advances the group orientation once per frame.
///
/// Each step applies a constant drift and then eases toward a pointer-derived
/// target with `v += (target - v) * delta`. That ease is a first-order
/// exponential approach; it never overshoots while `delta < 1`.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    params: DriverParams,
    orientation: Orientation,
}

impl AnimationDriver {
    pub fn new(params: DriverParams) -> Self {
        Self {
            params,
            orientation: Orientation::default(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Group tilt the pointer asks for, bounded by `pointer_sway`.
    #[inline]
    pub fn target(&self, pointer: PointerState) -> Orientation {
        Orientation {
            pitch: pointer.y * self.params.pointer_sway,
            yaw: pointer.x * self.params.pointer_sway,
        }
    }

    pub fn step(&mut self, delta: f32, pointer: PointerState) -> Orientation {
        let mut o = self.orientation;

        // ambient drift
        o.pitch -= delta / self.params.pitch_drift_divisor;
        o.yaw -= delta / self.params.yaw_drift_divisor;

        let target = self.target(pointer);
        o.pitch += (target.pitch - o.pitch) * delta;
        o.yaw += (target.yaw - o.yaw) * delta;

        self.orientation = o;
        o
    }
}
