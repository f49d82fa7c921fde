use crate::visualization::renderer::ColoredVertex;

const GRID_STEP: f32 = 1.0;
const GRID_BLOCKS: u32 = 10;
const GRID_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
const AXIS_LENGTH: f32 = 1.0;

/// Line-list vertices for a square grid on the XY plane, centred on the origin.
pub fn grid_lines(step: f32, blocks: u32, color: [f32; 3]) -> Vec<ColoredVertex> {
    let half = step * blocks as f32 * 0.5;
    let mut vertices = Vec::with_capacity(4 * (blocks as usize + 1));
    for i in 0..=blocks {
        let offset = -half + step * i as f32;
        // Parallel to Y
        vertices.push(ColoredVertex::new([offset, -half, 0.0], color));
        vertices.push(ColoredVertex::new([offset, half, 0.0], color));
        // Parallel to X
        vertices.push(ColoredVertex::new([-half, offset, 0.0], color));
        vertices.push(ColoredVertex::new([half, offset, 0.0], color));
    }
    vertices
}

/// X (red), Y (green) and Z (blue) unit directions drawn from the origin.
pub fn axis_lines(length: f32) -> Vec<ColoredVertex> {
    let axes = [
        ([length, 0.0, 0.0], [1.0, 0.0, 0.0]),
        ([0.0, length, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, length], [0.0, 0.0, 1.0]),
    ];
    axes.into_iter()
        .flat_map(|(tip, color)| {
            [
                ColoredVertex::new([0.0; 3], color),
                ColoredVertex::new(tip, color),
            ]
        })
        .collect()
}

pub fn guide_lines() -> Vec<ColoredVertex> {
    let mut lines = grid_lines(GRID_STEP, GRID_BLOCKS, GRID_COLOR);
    lines.extend(axis_lines(AXIS_LENGTH));
    lines
}
