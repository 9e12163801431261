pub mod animation;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod gpu;
pub mod instances;
pub mod lifecycle;
pub mod pointer;
pub mod scene;
pub mod subscription;
pub mod viewport;

pub static PANEL_WGSL: &str = include_str!("../shaders/panel.wgsl");

pub use animation::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::GlassError;
pub use instances::*;
pub use lifecycle::*;
pub use pointer::*;
pub use scene::*;
pub use subscription::*;
pub use viewport::*;
