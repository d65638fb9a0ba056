use anyhow::Result;

use super::timer::EveryNTicks;
use crate::scene::SceneObject;
use crate::traits::FrameRenderer;
use crate::transform::SceneObjectTransform;
use crate::types::{FrameUniforms, ObjectUniform};

/// Renderer that logs submissions instead of rasterizing
///
/// Packs the uniform blocks a GPU backend would upload, so the byte
/// layout is exercised even without a graphics context.
#[derive(Debug)]
pub struct LogRenderer {
    summary: EveryNTicks,
    frame: u64,
    draws_this_frame: usize,
    uploaded_bytes: usize,
}

impl LogRenderer {
    /// Log a frame summary every `summary_interval` frames
    pub fn new(summary_interval: u64) -> Self {
        Self {
            summary: EveryNTicks::new(summary_interval),
            frame: 0,
            draws_this_frame: 0,
            uploaded_bytes: 0,
        }
    }

    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameRenderer for LogRenderer {
    fn begin_frame(&mut self, uniforms: &FrameUniforms) -> Result<()> {
        self.frame = uniforms.frame;
        self.draws_this_frame = 0;
        let lights = uniforms.light_block();
        self.uploaded_bytes = bytemuck::bytes_of(&uniforms.camera_block()).len()
            + bytemuck::bytes_of(&uniforms.material_block()).len()
            + bytemuck::cast_slice::<[f32; 4], u8>(&lights).len();
        log::trace!(
            "frame {} shading={} wireframe={} lights={} clear={:?}",
            uniforms.frame,
            uniforms.shading,
            uniforms.wireframe,
            lights.len(),
            uniforms.clear_color
        );
        Ok(())
    }

    fn draw(&mut self, object: &SceneObject, transform: &SceneObjectTransform) -> Result<()> {
        let block = ObjectUniform::new(transform, object.material.diffuse);
        self.uploaded_bytes += bytemuck::bytes_of(&block).len();
        self.draws_this_frame += 1;
        log::debug!(
            "draw {} ({:?}) at {:?}",
            object.name,
            object.mesh,
            transform.model.w_axis.truncate()
        );
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if self.summary.tick() {
            log::info!(
                "frame {}: {} draws, {} uniform bytes",
                self.frame,
                self.draws_this_frame,
                self.uploaded_bytes
            );
        }
        Ok(())
    }
}
