//! GPU context and device management.

use common::outcome::{Maybe, Outcome};
use parking_lot::RwLock;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::sync::Arc;
use thiserror::Error;
use wgpu::{
    Adapter, Device, Instance, PresentMode, Queue, Surface, SurfaceConfiguration, TextureFormat,
};

/// Errors that can occur during GPU operations.
#[derive(Error, Debug)]
pub enum GpuError {
    #[error("No suitable GPU adapter found")]
    NoAdapter,
    #[error("Failed to request device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    #[error("Surface supports no texture format for this adapter")]
    NoSurfaceFormat,
    #[error("Surface has not been configured")]
    SurfaceNotConfigured,
}

/// GPU context holding all wgpu resources of one window.
pub struct GpuContext {
    /// wgpu instance.
    pub instance: Instance,
    /// GPU adapter.
    pub adapter: Adapter,
    /// GPU device.
    pub device: Device,
    /// Command queue.
    pub queue: Queue,
    /// Surface of the window we render into.
    surface: Surface<'static>,
    /// Present mode requested at creation.
    present_mode: PresentMode,
    /// Surface configuration, once configured.
    surface_config: RwLock<Option<SurfaceConfiguration>>,
}

impl GpuContext {
    /// Create a context for `window` with default settings.
    pub fn with_window<W>(window: Arc<W>) -> Outcome<Self, GpuError>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        GpuContextBuilder::new().build(window)
    }

    /// Configure the surface for the given size.
    ///
    /// A zero-sized request (minimized window) leaves the surface untouched.
    pub fn configure_surface(&self, width: u32, height: u32) -> Outcome<(), GpuError> {
        if width == 0 || height == 0 {
            tracing::debug!("Skipping surface configuration for {width}x{height}");
            return Outcome::Ok(());
        }

        let caps = self.surface.get_capabilities(&self.adapter);
        choose_surface_format(&caps.formats)
            .ok_or(GpuError::NoSurfaceFormat)
            .map(|format| {
                let config = SurfaceConfiguration {
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    format,
                    width,
                    height,
                    present_mode: choose_present_mode(self.present_mode, &caps.present_modes),
                    alpha_mode: caps
                        .alpha_modes
                        .first()
                        .copied()
                        .unwrap_or(wgpu::CompositeAlphaMode::Auto),
                    view_formats: vec![],
                    desired_maximum_frame_latency: 2,
                };

                self.surface.configure(&self.device, &config);
                tracing::debug!(
                    "Configured surface {width}x{height} ({format:?}, {:?})",
                    config.present_mode
                );
                *self.surface_config.write() = Some(config);
            })
    }

    /// Reapply the last configuration, e.g. after the surface was lost.
    pub fn reconfigure_surface(&self) -> Outcome<(), GpuError> {
        match self.surface_size() {
            Some((width, height)) => self.configure_surface(width, height),
            None => Outcome::Err(GpuError::SurfaceNotConfigured),
        }
    }

    /// Get the surface format.
    pub fn surface_format(&self) -> Option<TextureFormat> {
        self.surface_config.read().as_ref().map(|c| c.format)
    }

    /// Get the configured surface size.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        self.surface_config
            .read()
            .as_ref()
            .map(|c| (c.width, c.height))
    }

    /// Get the current surface texture for rendering.
    pub fn get_current_texture(&self) -> Outcome<wgpu::SurfaceTexture, GpuError> {
        if self.surface_config.read().is_none() {
            return Outcome::Err(GpuError::SurfaceNotConfigured);
        }
        Outcome::from(self.surface.get_current_texture()).map_err(GpuError::Surface)
    }

    /// Create a command encoder.
    pub fn create_command_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Command Encoder"),
            })
    }

    /// Submit commands to the queue.
    pub fn submit(&self, commands: impl IntoIterator<Item = wgpu::CommandBuffer>) {
        self.queue.submit(commands);
    }
}

/// Builder for GPU context configuration.
pub struct GpuContextBuilder {
    backends: wgpu::Backends,
    power_preference: wgpu::PowerPreference,
    present_mode: PresentMode,
}

impl GpuContextBuilder {
    pub fn new() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            present_mode: PresentMode::Fifo,
        }
    }

    /// Set the backends to use.
    pub fn backends(mut self, backends: wgpu::Backends) -> Self {
        self.backends = backends;
        self
    }

    /// Set power preference.
    pub fn power_preference(mut self, preference: wgpu::PowerPreference) -> Self {
        self.power_preference = preference;
        self
    }

    /// Set the preferred present mode. Unsupported modes fall back to FIFO.
    pub fn present_mode(mut self, present_mode: PresentMode) -> Self {
        self.present_mode = present_mode;
        self
    }

    /// Build the GPU context for `window`.
    ///
    /// Blocks on the adapter and device requests.
    pub fn build<W>(self, window: Arc<W>) -> Outcome<GpuContext, GpuError>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let instance = Instance::new(wgpu::InstanceDescriptor {
            backends: self.backends,
            dx12_shader_compiler: Default::default(),
            flags: wgpu::InstanceFlags::default(),
            gles_minor_version: wgpu::Gles3MinorVersion::Automatic,
        });

        Outcome::from(instance.create_surface(window))
            .map_err(GpuError::from)
            .and_then(|surface| {
                self.request_adapter(&instance, &surface)
                    .map(|adapter| (surface, adapter))
            })
            .and_then(|(surface, adapter)| {
                self.request_device(&adapter).map(|(device, queue)| GpuContext {
                    instance,
                    adapter,
                    device,
                    queue,
                    surface,
                    present_mode: self.present_mode,
                    surface_config: RwLock::new(None),
                })
            })
    }

    fn request_adapter(
        &self,
        instance: &Instance,
        surface: &Surface<'static>,
    ) -> Outcome<Adapter, GpuError> {
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: self.power_preference,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        }));

        Maybe::from_option(adapter)
            .ok_or(GpuError::NoAdapter)
            .map(|adapter| {
                crate::inspect::inspect_adapter(&adapter);
                adapter
            })
    }

    fn request_device(&self, adapter: &Adapter) -> Outcome<(Device, Queue), GpuError> {
        let request = adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Demo Device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
                memory_hints: wgpu::MemoryHints::Performance,
            },
            None,
        );

        Outcome::from(pollster::block_on(request))
            .map_err(GpuError::from)
            .map(|(device, queue)| {
                device.on_uncaptured_error(Box::new(|error| {
                    tracing::error!("Uncaptured device error: {error}");
                }));
                device.set_device_lost_callback(|reason, message| {
                    tracing::error!("{}", device_lost_message(reason, &message));
                });
                crate::inspect::inspect_device(&device);
                (device, queue)
            })
    }
}

impl Default for GpuContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Log line for a lost device.
pub fn device_lost_message(reason: wgpu::DeviceLostReason, message: &str) -> String {
    format!("Device lost: reason {reason:?} ({message})")
}

/// Pick a surface format, preferring sRGB.
pub fn choose_surface_format(formats: &[TextureFormat]) -> Maybe<TextureFormat> {
    Maybe::from_option(
        formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| formats.first())
            .copied(),
    )
}

/// Use `requested` if the surface supports it, FIFO otherwise.
pub fn choose_present_mode(requested: PresentMode, supported: &[PresentMode]) -> PresentMode {
    if supported.contains(&requested) {
        requested
    } else {
        PresentMode::Fifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Creating a context requires a window and GPU hardware;
    // these tests cover the configuration logic.

    #[test]
    fn test_builder_creation() {
        let builder = GpuContextBuilder::new()
            .backends(wgpu::Backends::VULKAN)
            .power_preference(wgpu::PowerPreference::LowPower)
            .present_mode(PresentMode::Mailbox);

        assert_eq!(builder.backends, wgpu::Backends::VULKAN);
        assert_eq!(builder.power_preference, wgpu::PowerPreference::LowPower);
        assert_eq!(builder.present_mode, PresentMode::Mailbox);
    }

    #[test]
    fn test_surface_format_prefers_srgb() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats),
            Outcome::Ok(TextureFormat::Bgra8UnormSrgb)
        );

        let formats = [TextureFormat::Rgba16Float];
        assert_eq!(
            choose_surface_format(&formats),
            Outcome::Ok(TextureFormat::Rgba16Float)
        );

        assert!(choose_surface_format(&[]).is_err());
    }

    #[test]
    fn test_device_lost_message() {
        assert_eq!(
            device_lost_message(wgpu::DeviceLostReason::Destroyed, "dropped"),
            "Device lost: reason Destroyed (dropped)"
        );
    }

    #[test]
    fn test_present_mode_fallback() {
        let supported = [PresentMode::Fifo, PresentMode::Immediate];
        assert_eq!(
            choose_present_mode(PresentMode::Immediate, &supported),
            PresentMode::Immediate
        );
        assert_eq!(
            choose_present_mode(PresentMode::Mailbox, &supported),
            PresentMode::Fifo
        );
    }
}
