pub mod camera;
pub mod globe;
pub mod markers;
pub mod starfield;
pub mod ui;
