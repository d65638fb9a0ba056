pub mod clock;
pub mod input_adapter;
pub mod log_renderer;
pub mod timer;

pub use clock::{Clock, FrameTime, MAX_SECONDS_PER_STEP};
pub use input_adapter::{translate_event, InputEvent, KeyState, MouseTracker};
pub use log_renderer::LogRenderer;
pub use timer::{EveryNTicks, FpsCounter};
