pub mod animation;
pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod projection;
pub mod scene;
pub mod settings;
pub mod shading;
pub mod traits;
pub mod transform;
pub mod types;

pub use app::{AppContext, FrameStats, KeyAction};
pub use camera::{Camera, CameraMovement};
pub use scene::{DemoKind, Scene, SceneObject};
pub use transform::{normal_matrix, ObjectTransform, SceneObjectTransform};
