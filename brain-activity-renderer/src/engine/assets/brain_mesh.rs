use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use thiserror::Error;

use super::bounds::BoundingBox;

#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("mesh contains no triangles")]
    Empty,
    #[error("shape {shape} references vertex {index} but only has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        shape: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// One shape of a parsed mesh source: flat `xyz` positions and triangle corners.
#[derive(Debug, Clone, Copy)]
pub struct MeshShape<'a> {
    pub positions: &'a [f32],
    pub corners: &'a [u32],
}

/// Triangle soup of the anatomical surface.
///
/// Every triangle corner is its own vertex, so `indices` is simply
/// `0..vertices.len()`. Shared vertices are duplicated, never welded.
#[derive(Debug, Clone)]
pub struct BrainMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub bounds: BoundingBox,
}

impl BrainMesh {
    /// Expand every triangle corner of every shape into its own vertex.
    ///
    /// `on_corner` is invoked once per expanded corner for progress reporting.
    pub fn from_shapes<'a>(
        shapes: impl IntoIterator<Item = MeshShape<'a>>,
        mut on_corner: impl FnMut(),
    ) -> Result<Self, MeshError> {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut bounds = BoundingBox::empty();

        for (shape_index, shape) in shapes.into_iter().enumerate() {
            let vertex_count = shape.positions.len() / 3;
            for &corner in shape.corners {
                let start = corner as usize * 3;
                let Some(xyz) = shape.positions.get(start..start + 3) else {
                    return Err(MeshError::VertexIndexOutOfRange {
                        shape: shape_index,
                        index: corner,
                        vertex_count,
                    });
                };

                let vertex = Vec3::new(xyz[0], xyz[1], xyz[2]);
                indices.push(vertices.len() as u32);
                vertices.push(vertex);
                bounds.include(vertex);
                on_corner();
            }
        }

        if vertices.len() < 3 {
            return Err(MeshError::Empty);
        }

        Ok(Self {
            vertices,
            indices,
            bounds,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Upload-ready triangle list with normals for the lit pipeline.
    pub fn to_render_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.vertices.iter().map(|v| v.to_array()).collect();

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(self.indices.clone()))
        .with_computed_normals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit square split into two triangles sharing the 0-2 diagonal.
    const SQUARE_POSITIONS: [f32; 12] = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    const SQUARE_CORNERS: [u32; 6] = [0, 1, 2, 0, 2, 3];

    fn square() -> MeshShape<'static> {
        MeshShape {
            positions: &SQUARE_POSITIONS,
            corners: &SQUARE_CORNERS,
        }
    }

    #[test]
    fn test_shared_vertices_are_duplicated() {
        let mesh = BrainMesh::from_shapes([square()], || {}).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices.len(), mesh.vertex_count());
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices[3], mesh.vertices[0]);
    }

    #[test]
    fn test_indices_continue_across_shapes() {
        let mut corners_seen = 0;
        let mesh = BrainMesh::from_shapes([square(), square()], || corners_seen += 1).unwrap();

        assert_eq!(corners_seen, 12);
        assert_eq!(mesh.indices, (0..12).collect::<Vec<u32>>());
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_bounds_track_expanded_corners() {
        let mesh = BrainMesh::from_shapes([square()], || {}).unwrap();
        assert_eq!(mesh.bounds.min, Vec3::ZERO);
        assert_eq!(mesh.bounds.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_out_of_range_corner_is_rejected() {
        let shape = MeshShape {
            positions: &SQUARE_POSITIONS,
            corners: &[0, 1, 4],
        };
        let err = BrainMesh::from_shapes([shape], || {}).unwrap_err();
        assert_eq!(
            err,
            MeshError::VertexIndexOutOfRange {
                shape: 0,
                index: 4,
                vertex_count: 4,
            }
        );
    }

    #[test]
    fn test_source_without_triangles_is_rejected() {
        let shape = MeshShape {
            positions: &SQUARE_POSITIONS,
            corners: &[],
        };
        assert_eq!(
            BrainMesh::from_shapes([shape], || {}).unwrap_err(),
            MeshError::Empty
        );
        assert_eq!(
            BrainMesh::from_shapes(std::iter::empty(), || {}).unwrap_err(),
            MeshError::Empty
        );
    }

    #[test]
    fn test_render_mesh_keeps_vertex_count() {
        let mesh = BrainMesh::from_shapes([square()], || {}).unwrap();
        let render_mesh = mesh.to_render_mesh();
        assert_eq!(render_mesh.count_vertices(), 6);
        assert_eq!(render_mesh.indices().map(|i| i.len()), Some(6));
        assert!(render_mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
    }
}
