//! Scene graph for the glass field.
//!
//! The graph is built once at mount in a fixed order (camera, lights,
//! environment, geometry, material, instances) and then only the wrapping
//! group's orientation and the camera aspect ever change.

use crate::animation::Orientation;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::instances::{generate_instances, PanelInstance};
use glam::{Mat4, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_POSITION),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Light position; the light shines from here toward the origin.
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub points: Vec<PointLight>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Vec3::ONE,
                intensity: AMBIENT_INTENSITY,
            },
            sun: DirectionalLight {
                position: Vec3::from(SUN_POSITION),
                color: Vec3::ONE,
                intensity: SUN_INTENSITY,
            },
            points: vec![
                PointLight {
                    position: Vec3::from(KEY_LIGHT_POSITION),
                    color: rgb_hex(KEY_LIGHT_COLOR),
                    intensity: POINT_LIGHT_INTENSITY,
                },
                PointLight {
                    position: Vec3::from(FILL_LIGHT_POSITION),
                    color: rgb_hex(FILL_LIGHT_COLOR),
                    intensity: POINT_LIGHT_INTENSITY,
                },
            ],
        }
    }
}

/// Procedural reflection source: a sky/horizon/ground gradient.
#[derive(Clone, Copy, Debug)]
pub struct Environment {
    pub sky: Vec3,
    pub horizon: Vec3,
    pub ground: Vec3,
    pub intensity: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            sky: Vec3::from(ENV_SKY),
            horizon: Vec3::from(ENV_HORIZON),
            ground: Vec3::from(ENV_GROUND),
            intensity: ENV_INTENSITY,
        }
    }
}

/// Physically-inspired glass parameters shared by every panel.
#[derive(Clone, Copy, Debug)]
pub struct PanelMaterial {
    pub color: Vec3,
    pub opacity: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
}

impl Default for PanelMaterial {
    fn default() -> Self {
        Self {
            color: rgb_hex(GLASS_COLOR),
            opacity: GLASS_OPACITY,
            transmission: GLASS_TRANSMISSION,
            thickness: GLASS_THICKNESS,
            roughness: GLASS_ROUGHNESS,
            metalness: GLASS_METALNESS,
            clearcoat: GLASS_CLEARCOAT,
            clearcoat_roughness: GLASS_CLEARCOAT_ROUGHNESS,
            emissive: rgb_hex(GLASS_EMISSIVE),
            emissive_intensity: GLASS_EMISSIVE_INTENSITY,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Indexed box mesh, one set of vertices per face for flat normals.
#[derive(Clone, Debug)]
pub struct PanelGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl PanelGeometry {
    pub fn slab(size: [f32; 3]) -> Self {
        let [x, y, z] = size.map(|s| s * 0.5);
        #[rustfmt::skip]
        let vertices = vec![
            // Front face (Z+)
            Vertex::new([-x, -y,  z], [ 0.0,  0.0,  1.0]),
            Vertex::new([ x, -y,  z], [ 0.0,  0.0,  1.0]),
            Vertex::new([ x,  y,  z], [ 0.0,  0.0,  1.0]),
            Vertex::new([-x,  y,  z], [ 0.0,  0.0,  1.0]),
            // Back face (Z-)
            Vertex::new([ x, -y, -z], [ 0.0,  0.0, -1.0]),
            Vertex::new([-x, -y, -z], [ 0.0,  0.0, -1.0]),
            Vertex::new([-x,  y, -z], [ 0.0,  0.0, -1.0]),
            Vertex::new([ x,  y, -z], [ 0.0,  0.0, -1.0]),
            // Top face (Y+)
            Vertex::new([-x,  y,  z], [ 0.0,  1.0,  0.0]),
            Vertex::new([ x,  y,  z], [ 0.0,  1.0,  0.0]),
            Vertex::new([ x,  y, -z], [ 0.0,  1.0,  0.0]),
            Vertex::new([-x,  y, -z], [ 0.0,  1.0,  0.0]),
            // Bottom face (Y-)
            Vertex::new([-x, -y, -z], [ 0.0, -1.0,  0.0]),
            Vertex::new([ x, -y, -z], [ 0.0, -1.0,  0.0]),
            Vertex::new([ x, -y,  z], [ 0.0, -1.0,  0.0]),
            Vertex::new([-x, -y,  z], [ 0.0, -1.0,  0.0]),
            // Right face (X+)
            Vertex::new([ x, -y,  z], [ 1.0,  0.0,  0.0]),
            Vertex::new([ x, -y, -z], [ 1.0,  0.0,  0.0]),
            Vertex::new([ x,  y, -z], [ 1.0,  0.0,  0.0]),
            Vertex::new([ x,  y,  z], [ 1.0,  0.0,  0.0]),
            // Left face (X-)
            Vertex::new([-x, -y, -z], [-1.0,  0.0,  0.0]),
            Vertex::new([-x, -y,  z], [-1.0,  0.0,  0.0]),
            Vertex::new([-x,  y,  z], [-1.0,  0.0,  0.0]),
            Vertex::new([-x,  y, -z], [-1.0,  0.0,  0.0]),
        ];
        let indices = (0..6u16)
            .flat_map(|face| {
                let b = face * 4;
                [b, b + 1, b + 2, b + 2, b + 3, b]
            })
            .collect();
        Self { vertices, indices }
    }
}

/// All panels: one shared mesh and material, one transform per instance.
#[derive(Clone, Debug)]
pub struct InstancedNode {
    pub geometry: PanelGeometry,
    pub material: PanelMaterial,
    pub instances: Vec<PanelInstance>,
}

#[derive(Clone, Debug)]
pub struct SceneGraph {
    pub camera: Camera,
    pub lighting: Lighting,
    pub environment: Environment,
    pub panels: InstancedNode,
    /// Orientation of the group wrapping `panels`.
    pub group: Orientation,
}

impl SceneGraph {
    pub fn build<R: Rng>(cfg: &SceneConfig, rng: &mut R) -> Self {
        let camera = Camera::default();
        let lighting = Lighting::default();
        let environment = Environment::default();
        let geometry = PanelGeometry::slab(PANEL_SIZE);
        let material = PanelMaterial::default();
        let instances = generate_instances(cfg, rng);
        log::info!(
            "[scene] built {} panels, {} point lights",
            instances.len(),
            lighting.points.len()
        );
        Self {
            camera,
            lighting,
            environment,
            panels: InstancedNode {
                geometry,
                material,
                instances,
            },
            group: Orientation::default(),
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn uniforms(&self) -> SceneUniforms {
        SceneUniforms::pack(self)
    }
}

/// GPU-side mirror of the per-frame scene state (matches `panel.wgsl`).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub group: [[f32; 4]; 4],
    /// xyz eye position, w = active point light count
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    /// xyz unit vector toward the light, w = intensity
    pub sun_dir: [f32; 4],
    pub sun_color: [f32; 4],
    /// xyz position, w = intensity
    pub point_pos: [[f32; 4]; MAX_POINT_LIGHTS],
    pub point_color: [[f32; 4]; MAX_POINT_LIGHTS],
    /// rgb base color, a = opacity
    pub base_color: [f32; 4],
    pub emissive: [f32; 4],
    /// roughness, clearcoat, clearcoat roughness, transmission
    pub surface: [f32; 4],
    /// thickness, metalness, environment intensity, unused
    pub optics: [f32; 4],
    pub env_sky: [f32; 4],
    pub env_horizon: [f32; 4],
    pub env_ground: [f32; 4],
}

impl SceneUniforms {
    pub fn pack(scene: &SceneGraph) -> Self {
        let mut point_pos = [[0.0; 4]; MAX_POINT_LIGHTS];
        let mut point_color = [[0.0; 4]; MAX_POINT_LIGHTS];
        let lights = &scene.lighting;
        let active = lights.points.len().min(MAX_POINT_LIGHTS);
        for (i, p) in lights.points.iter().take(active).enumerate() {
            point_pos[i] = p.position.extend(p.intensity).to_array();
            point_color[i] = p.color.extend(1.0).to_array();
        }
        let sun_dir = lights.sun.position.normalize_or_zero();
        let m = &scene.panels.material;
        let env = &scene.environment;
        Self {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            group: scene.group.matrix().to_cols_array_2d(),
            camera_pos: scene.camera.eye.extend(active as f32).to_array(),
            ambient: (lights.ambient.color * lights.ambient.intensity)
                .extend(1.0)
                .to_array(),
            sun_dir: sun_dir.extend(lights.sun.intensity).to_array(),
            sun_color: lights.sun.color.extend(1.0).to_array(),
            point_pos,
            point_color,
            base_color: m.color.extend(m.opacity).to_array(),
            emissive: (m.emissive * m.emissive_intensity).extend(1.0).to_array(),
            surface: [m.roughness, m.clearcoat, m.clearcoat_roughness, m.transmission],
            optics: [m.thickness, m.metalness, env.intensity, 0.0],
            env_sky: env.sky.extend(1.0).to_array(),
            env_horizon: env.horizon.extend(1.0).to_array(),
            env_ground: env.ground.extend(1.0).to_array(),
        }
    }
}
