use super::shaders::PONG_SHADER;
use crate::batch::InstanceData;
use crate::camera::CameraUniform;
use crate::mesh::Vertex;
use wgpu::*;

/// One pipeline draws the whole scene: both meshes, instanced
pub struct ScenePipeline {
    pub pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
}

pub fn create_scene_pipeline(device: &Device, format: TextureFormat) -> ScenePipeline {
    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("camera"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: BufferSize::new(std::mem::size_of::<CameraUniform>() as u64),
            },
            count: None,
        }],
    });

    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("pong"),
        source: ShaderSource::Wgsl(PONG_SHADER.into()),
    });

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("scene"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    // Paddles and ball are opaque white on black, but the tint carries alpha
    let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("scene"),
        layout: Some(&layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout(), InstanceData::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::ALPHA_BLENDING),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState::default(),
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    ScenePipeline {
        pipeline,
        camera_layout,
    }
}
