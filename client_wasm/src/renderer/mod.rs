pub mod draw;
pub mod init;
pub mod pipeline;
pub mod shaders;

use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

use crate::batch::{InstanceData, QuadBatch};
use crate::camera::{Camera, CameraUniform};
use crate::mesh::{create_unit_quad, Mesh};

const INITIAL_INSTANCE_CAPACITY: usize = 1024;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub camera: Camera,

    pub quad_pipeline: RenderPipeline,
    pub camera_buffer: Buffer,
    pub camera_bind_group: BindGroup,

    pub quad_mesh: Mesh,
    pub instance_buffer: Buffer,
    pub instance_capacity: usize,
}

impl Renderer {
    /// Set up WebGPU on `canvas`, mapping `logical_size` pixels onto the whole surface
    pub async fn new(canvas: web_sys::HtmlCanvasElement, logical_size: Vec2) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::pixel_space(logical_size);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let camera_buffer = ctx.device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::from_camera(&camera)]),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let (vertices, indices) = create_unit_quad();
        let quad_mesh = Mesh::new(&ctx.device, &vertices, &indices);
        let instance_buffer = create_instance_buffer(&ctx.device, INITIAL_INSTANCE_CAPACITY);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            camera,
            quad_pipeline: pipes.quad_pipeline,
            camera_buffer,
            camera_bind_group,
            quad_mesh,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
        })
    }

    pub fn draw(&mut self, batch: &QuadBatch) -> Result<(), String> {
        draw::draw_frame(self, batch)
    }

    /// Grow the instance buffer to hold at least `count` instances
    fn reserve_instances(&mut self, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        self.instance_capacity = count.next_power_of_two();
        self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
    }
}

fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
