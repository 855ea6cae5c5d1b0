use std::sync::Arc;

use log::info;
use wgpu::{Adapter, Device, DeviceDescriptor, Features, Instance, Limits, Queue, Surface};

use crate::error::DisplayError;

/// Device and queue shared by everything that talks to the GPU.
/// Cloning is cheap (Arc).
#[derive(Clone)]
pub struct GpuContext {
    adapter: Arc<Adapter>,
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a context whose adapter can present to `surface`.
    /// The surface must come from the same `instance`.
    pub async fn for_surface(instance: &Instance, surface: &Surface<'_>) -> Result<Self, DisplayError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await?;

        let adapter_info = adapter.get_info();
        info!("using adapter {} ({:?})", adapter_info.name, adapter_info.backend);

        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self {
            adapter: Arc::new(adapter),
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Request device and queue. Only texture upload and a single draw are
    /// needed, so downlevel limits suffice.
    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue), DisplayError> {
        let limits = Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits());

        adapter
            .request_device(&DeviceDescriptor {
                label: Some("GPU Context Device"),
                required_features: Features::empty(),
                required_limits: limits,
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(DisplayError::from)
    }
}
