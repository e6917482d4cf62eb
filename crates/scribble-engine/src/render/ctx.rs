use crate::coords::Viewport;

/// Borrowed GPU handles a renderer needs to upload and draw one frame.
///
/// `viewport` is the window's logical size; renderers write it into their
/// uniform so shape coordinates stay in logical pixels.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
        }
    }

    /// Viewport size for the shader uniform, never below one pixel.
    pub fn viewport_size(&self) -> [f32; 2] {
        [self.viewport.width.max(1.0), self.viewport.height.max(1.0)]
    }
}

/// Frame encoder and swapchain view that each renderer appends a pass to.
///
/// Passes load the existing contents, so the order of `render` calls is the
/// order layers land on screen.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
