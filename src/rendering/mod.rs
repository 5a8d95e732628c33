pub mod background;
pub mod camera;
pub mod postprocess;
