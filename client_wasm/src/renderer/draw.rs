use super::resources::MAX_INSTANCES;
use super::Renderer;
use crate::batch::{to_wgpu_color, InstanceData, SceneBatch};
use crate::error::ClientError;
use crate::mesh::Mesh;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, batch: &SceneBatch) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(ClientError::Frame(format!("{e:?}"))),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = upload(&renderer.queue, &renderer.buffers.rects, &batch.rects);
    let circle_count = upload(&renderer.queue, &renderer.buffers.circles, &batch.circles);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(to_wgpu_color(game_core::Color::BLACK)),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.scene_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        draw_instances(&mut pass, &renderer.meshes.0, &renderer.buffers.rects, rect_count);
        draw_instances(
            &mut pass,
            &renderer.meshes.1,
            &renderer.buffers.circles,
            circle_count,
        );
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn upload(queue: &Queue, buffer: &Buffer, instances: &[InstanceData]) -> u32 {
    if instances.len() > MAX_INSTANCES {
        log::warn!(
            "dropping {} instances over capacity",
            instances.len() - MAX_INSTANCES
        );
    }
    let instances = &instances[..instances.len().min(MAX_INSTANCES)];
    if !instances.is_empty() {
        queue.write_buffer(buffer, 0, bytemuck::cast_slice(instances));
    }
    instances.len() as u32
}

fn draw_instances(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &Buffer, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..count);
}
