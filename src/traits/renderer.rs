use anyhow::Result;

use crate::scene::SceneObject;
use crate::transform::SceneObjectTransform;
use crate::types::FrameUniforms;

/// Rendering backend - consumes the matrices computed each frame
///
/// Calls arrive in a fixed order per frame: one `begin_frame`, one `draw`
/// per scene object, one `end_frame`.
pub trait FrameRenderer {
    /// Upload per-frame uniforms (view, projection, shading state)
    fn begin_frame(&mut self, uniforms: &FrameUniforms) -> Result<()>;

    /// Submit one object with its model and normal matrices
    fn draw(&mut self, object: &SceneObject, transform: &SceneObjectTransform) -> Result<()>;

    /// Finish the frame (swap buffers, present)
    fn end_frame(&mut self) -> Result<()>;
}
