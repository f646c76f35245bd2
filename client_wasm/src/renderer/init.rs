use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
}

/// WebGPU device plus a surface sized to the canvas backing store
pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    let (width, height) = (canvas.width(), canvas.height());

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .ok_or_else(|| "Failed to find adapter".to_string())?;

    // Flat colored quads need no optional features or raised limits
    let (device, queue) = adapter
        .request_device(&DeviceDescriptor::default(), None)
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

    let mut config = surface
        .get_default_config(&adapter, width, height)
        .ok_or_else(|| "Surface not supported by adapter".to_string())?;
    // Palette colors are already sRGB encoded, so write them unconverted
    if let Some(format) = surface
        .get_capabilities(&adapter)
        .formats
        .into_iter()
        .find(|f| !f.is_srgb())
    {
        config.format = format;
    }
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
    })
}
