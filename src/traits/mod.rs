pub mod camera;
pub mod controller;
pub mod renderer;

pub use camera::*;
pub use controller::*;
pub use renderer::*;
