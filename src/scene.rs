use glam::{EulerRot, Quat, Vec3};

use crate::animation::Spinner;
use crate::shading::{default_light_positions, ShadingParams, ShadingVariant};
use crate::transform::ObjectTransform;

/// Mesh identifiers resolved by the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Sphere,
    Bunny,
    Plane,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: [f32; 3],
}

pub const OBJECT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const PLANE_COLOR: [f32; 3] = [0.0, 0.5, 0.0];

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub mesh: MeshKind,
    pub transform: ObjectTransform,
    pub material: Material,
    /// Rotates about Y with the scene spinner
    pub spins: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: MeshKind, transform: ObjectTransform) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform,
            material: Material {
                diffuse: OBJECT_COLOR,
            },
            spins: false,
        }
    }

    pub fn with_color(mut self, diffuse: [f32; 3]) -> Self {
        self.material.diffuse = diffuse;
        self
    }

    pub fn spinning(mut self) -> Self {
        self.spins = true;
        self
    }

    /// Transform for this frame, with the spinner's rotation applied to
    /// spinning objects
    pub fn current_transform(&self, spinner: &Spinner) -> ObjectTransform {
        if self.spins {
            self.transform.rotated(spinner.angle_degrees, Spinner::AXIS)
        } else {
            self.transform
        }
    }
}

/// Which demo scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    /// Plane with a spinning sphere, cube and bunny
    Showcase,
    /// Ground slab with a grid of boxes, as laid out for the physics demo
    CubeGrid,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub light_positions: Vec<Vec3>,
    pub shading: ShadingParams,
    pub shading_variants: Vec<ShadingVariant>,
    pub clear_color: [f32; 4],
    /// Where the camera starts
    pub camera_start: Vec3,
    pub ground_locked: bool,
}

impl Scene {
    pub fn build(kind: DemoKind) -> Self {
        match kind {
            DemoKind::Showcase => Self::showcase(),
            DemoKind::CubeGrid => Self::cube_grid(5),
        }
    }

    pub fn showcase() -> Self {
        let plane = SceneObject::new(
            "plane",
            MeshKind::Plane,
            ObjectTransform::at(Vec3::new(0.0, -1.0, 0.0)).scaled(Vec3::new(10.0, 1.0, 10.0)),
        )
        .with_color(PLANE_COLOR);

        let objects = vec![
            plane,
            SceneObject::new(
                "sphere",
                MeshKind::Sphere,
                ObjectTransform::at(Vec3::new(-3.0, 0.0, 0.0)).scaled_uniform(0.8),
            )
            .spinning(),
            SceneObject::new("cube", MeshKind::Cube, ObjectTransform::at(Vec3::ZERO).scaled_uniform(0.8))
                .spinning(),
            SceneObject::new(
                "bunny",
                MeshKind::Bunny,
                ObjectTransform::at(Vec3::new(3.0, 0.0, 0.0)).scaled_uniform(0.3),
            )
            .spinning(),
        ];

        Self {
            objects,
            light_positions: default_light_positions(),
            shading: ShadingParams::default(),
            shading_variants: ShadingVariant::LIGHTING.to_vec(),
            clear_color: [0.26, 0.46, 0.98, 1.0],
            camera_start: Vec3::new(0.0, 0.0, 7.0),
            ground_locked: true,
        }
    }

    /// `num_side` x `num_side` boxes resting above a wide ground slab
    pub fn cube_grid(num_side: usize) -> Self {
        let ground = SceneObject::new(
            "ground",
            MeshKind::Cube,
            ObjectTransform::at(Vec3::new(0.0, -1.0, 0.0)).scaled(Vec3::new(200.0, 0.1, 200.0)),
        )
        .with_color(PLANE_COLOR);

        let (axis, angle) = Quat::from_euler(EulerRot::XYZ, 0.1, 0.0, 0.1).to_axis_angle();
        let n = num_side as f32;

        let boxes = (0..num_side).flat_map(|i| {
            (0..num_side).map(move |j| {
                let position = Vec3::new((i as f32 - n) + 3.0, 1.0, n - j as f32);
                SceneObject::new(
                    format!("box_{i}_{j}"),
                    MeshKind::Cube,
                    ObjectTransform::at(position)
                        .rotated(angle.to_degrees(), axis)
                        .scaled(Vec3::new(0.2, 0.5, 0.2)),
                )
            })
        });

        let objects = std::iter::once(ground).chain(boxes).collect();

        Self {
            objects,
            light_positions: vec![Vec3::new(5.0, 10.0, 10.0)],
            shading: ShadingParams {
                kd: 3.0,
                ..ShadingParams::default()
            },
            shading_variants: vec![ShadingVariant::Ggx],
            clear_color: [0.26, 0.46, 0.98, 1.0],
            camera_start: Vec3::new(0.0, 0.0, 9.0),
            ground_locked: false,
        }
    }
}
