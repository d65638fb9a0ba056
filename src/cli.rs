// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scene::DemoKind;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 900;

#[derive(Parser, Debug, Clone)]
#[command(name = "rtgp")]
#[command(about = "First-person camera demo scenes", long_about = None)]
pub struct Cli {
    /// Scene to load
    #[arg(long, value_enum, default_value_t = DemoKind::Showcase)]
    pub demo: DemoKind,

    /// Keep forward/backward movement on the ground plane
    #[arg(long, conflicts_with = "free_camera")]
    pub ground_locked: bool,

    /// Let forward/backward movement follow the view direction
    #[arg(long)]
    pub free_camera: bool,

    /// JSON file overriding camera and animation defaults
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Run this many frames without a window, then exit
    #[arg(long)]
    pub headless_frames: Option<u64>,
}

impl Cli {
    /// Camera mode requested on the command line, if any
    pub fn ground_lock(&self) -> Option<bool> {
        match (self.ground_locked, self.free_camera) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["rtgp"]);
        assert_eq!(cli.demo, DemoKind::Showcase);
        assert_eq!(cli.ground_lock(), None);
        assert_eq!((cli.width, cli.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert!(cli.headless_frames.is_none());
    }

    #[test]
    fn demo_and_camera_mode() {
        let cli = Cli::parse_from(["rtgp", "--demo", "cube-grid", "--free-camera", "--headless-frames", "10"]);
        assert_eq!(cli.demo, DemoKind::CubeGrid);
        assert_eq!(cli.ground_lock(), Some(false));
        assert_eq!(cli.headless_frames, Some(10));
    }

    #[test]
    fn conflicting_camera_modes_rejected() {
        assert!(Cli::try_parse_from(["rtgp", "--ground-locked", "--free-camera"]).is_err());
    }
}
