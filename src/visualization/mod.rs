pub mod camera;
pub mod circle_geometry;
pub mod renderer;
pub mod scene;
