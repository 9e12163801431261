use thiserror::Error;

/// Failures surfaced by the glass field core.
///
/// Only mount-time failures are fatal, and only for the effect itself; the
/// front-ends log them and leave the host page untouched.
#[derive(Debug, Error)]
pub enum GlassError {
    #[error("rendering context creation failed: {0}")]
    ContextCreation(String),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("device request failed: {0}")]
    DeviceRequest(String),
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to detach {label}: {reason}")]
    Detach { label: &'static str, reason: String },
}

impl From<wgpu::CreateSurfaceError> for GlassError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GlassError::ContextCreation(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for GlassError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GlassError::DeviceRequest(e.to_string())
    }
}

pub type Result<T, E = GlassError> = std::result::Result<T, E>;
