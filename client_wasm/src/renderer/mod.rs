pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::batch::SceneBatch;
use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use resources::GameBuffers;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub scene_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// Set up WebGPU on `canvas`, whose pixel size is also the camera extent
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let scene = pipeline::create_scene_pipeline(&ctx.device, ctx.config.format);

        let (rect_vertices, rect_indices) = create_rectangle();
        let rect_mesh = Mesh::new(&ctx.device, &ctx.queue, &rect_vertices, &rect_indices);
        let (circle_vertices, circle_indices) = create_circle(CIRCLE_SEGMENTS);
        let circle_mesh = Mesh::new(&ctx.device, &ctx.queue, &circle_vertices, &circle_indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &scene.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            scene_pipeline: scene.pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
        })
    }

    pub fn draw(&mut self, batch: &SceneBatch) -> Result<(), ClientError> {
        draw::draw_frame(self, batch)
    }
}
