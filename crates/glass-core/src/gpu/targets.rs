use super::helpers;
use wgpu;

/// Offscreen attachments sized to the surface.
///
/// - `msaa_*` is the multisampled color target resolved into the swapchain
///   image; absent when the adapter cannot multisample the surface format.
/// - `depth_*` shares the color sample count.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: Option<wgpu::Texture>,
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = if sample_count > 1 {
            let (t, v) = helpers::create_attachment(
                device,
                "msaa_color",
                width,
                height,
                sample_count,
                format,
            );
            (Some(t), Some(v))
        } else {
            (None, None)
        };
        let (depth_tex, depth_view) = helpers::create_attachment(
            device,
            "depth",
            width,
            height,
            sample_count,
            helpers::DEPTH_FORMAT,
        );
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            sample_count,
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        self.destroy();
        *self = Self::new(device, format, width, height, self.sample_count);
    }

    pub(crate) fn destroy(&self) {
        if let Some(t) = &self.msaa_tex {
            t.destroy();
        }
        self.depth_tex.destroy();
    }
}
