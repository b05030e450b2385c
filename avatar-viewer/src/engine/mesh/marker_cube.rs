// Standard library and external crates
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Edge list of a cube centred on the origin, drawn as line segments.
pub fn create_wireframe_cube_mesh(size: f32) -> Mesh {
    let h = size * 0.5;
    let vertices: Vec<[f32; 3]> = vec![
        [-h, -h, -h],
        [h, -h, -h],
        [h, h, -h],
        [-h, h, -h],
        [-h, -h, h],
        [h, -h, h],
        [h, h, h],
        [-h, h, h],
    ];

    // Back face, front face, then the four connecting edges
    let indices: Vec<u32> = vec![
        0, 1, 1, 2, 2, 3, 3, 0, //
        4, 5, 5, 6, 6, 7, 7, 4, //
        0, 4, 1, 5, 2, 6, 3, 7,
    ];

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
