use wgpu::*;

use super::Renderer;
use crate::batch::QuadBatch;

pub fn draw_frame(renderer: &mut Renderer, batch: &QuadBatch) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame, the next one draws to the fresh surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, batch);

    let [r, g, b, a] = batch.clear_color;
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !batch.is_empty() {
            pass.set_pipeline(&renderer.quad_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.quad_mesh.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, renderer.instance_buffer.slice(..));
            pass.set_index_buffer(renderer.quad_mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..batch.len() as u32);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, batch: &QuadBatch) {
    if batch.is_empty() {
        return;
    }
    renderer.reserve_instances(batch.len());
    renderer
        .queue
        .write_buffer(&renderer.instance_buffer, 0, bytemuck::cast_slice(&batch.instances));
}
