use glam::{Mat3, Mat4, Vec3};

use crate::scene::Scene;
use crate::shading::{ShadingParams, ShadingVariant};
use crate::traits::CameraController;
use crate::transform::SceneObjectTransform;

/// Per-frame state uploaded once before any object is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUniforms {
    pub frame: u64,
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub shading: ShadingVariant,
    pub wireframe: bool,
    /// World-space point lights
    pub light_positions: Vec<Vec3>,
    pub material: ShadingParams,
    pub clear_color: [f32; 4],
}

impl FrameUniforms {
    pub fn new(
        frame: u64,
        camera: &impl CameraController,
        projection: Mat4,
        shading: ShadingVariant,
        wireframe: bool,
    ) -> Self {
        Self {
            frame,
            view: camera.view_matrix(),
            projection,
            camera_position: camera.position(),
            shading,
            wireframe,
            light_positions: Vec::new(),
            material: ShadingParams::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Take lights, material constants and clear color from the scene
    pub fn with_scene_lighting(mut self, scene: &Scene) -> Self {
        self.light_positions = scene.light_positions.clone();
        self.material = scene.shading.clone();
        self.clear_color = scene.clear_color;
        self
    }

    pub fn camera_block(&self) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            position: self.camera_position.to_array(),
            _pad: 0.0,
        }
    }

    pub fn material_block(&self) -> MaterialUniform {
        let m = &self.material;
        MaterialUniform {
            kd: m.kd,
            ks: m.ks,
            ka: m.ka,
            shininess: m.shininess,
            alpha: m.alpha,
            f0: m.f0,
            _pad: [0.0; 2],
            diffuse_color: pad3(m.diffuse_color),
            specular_color: pad3(m.specular_color),
            ambient_color: pad3(m.ambient_color),
        }
    }

    /// Light positions padded to vec4, one per light
    pub fn light_block(&self) -> Vec<[f32; 4]> {
        self.light_positions.iter().map(|p| p.extend(1.0).to_array()).collect()
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Material constants for the illumination models (std140)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub kd: f32,
    pub ks: f32,
    pub ka: f32,
    pub shininess: f32,
    pub alpha: f32,
    pub f0: f32,
    pub _pad: [f32; 2],
    pub diffuse_color: [f32; 4],
    pub specular_color: [f32; 4],
    pub ambient_color: [f32; 4],
}

/// Per-object uniform block; the normal matrix columns are padded to
/// vec4 as std140 requires for mat3
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
    pub diffuse: [f32; 3],
    pub _pad: f32,
}

impl ObjectUniform {
    pub fn new(transform: &SceneObjectTransform, diffuse: [f32; 3]) -> Self {
        Self {
            model: transform.model.to_cols_array_2d(),
            normal: padded_columns(transform.normal),
            diffuse,
            _pad: 0.0,
        }
    }
}

fn pad3([r, g, b]: [f32; 3]) -> [f32; 4] {
    [r, g, b, 0.0]
}

fn padded_columns(m: Mat3) -> [[f32; 4]; 3] {
    [m.x_axis.extend(0.0).to_array(), m.y_axis.extend(0.0).to_array(), m.z_axis.extend(0.0).to_array()]
}
