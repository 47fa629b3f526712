use std::ops::Range;
use crate::error::ExportError;
use crate::utils::coordinate::Coordinate2D;

/// One polygon's slice of the mesh loop table.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPolygon {
    pub loop_start: usize,
    pub loop_total: usize,
}

impl MeshPolygon {
    pub fn new(loop_start: usize, loop_total: usize) -> Self {
        MeshPolygon { loop_start, loop_total }
    }

    pub fn loop_indices(&self) -> Range<usize> {
        self.loop_start..self.loop_start + self.loop_total
    }
}

/// One UV layer with a coordinate per mesh loop.
#[derive(Debug, Clone, PartialEq)]
pub struct UvLayer {
    pub name: String,
    pub uv: Vec<Coordinate2D>,
}

/// Plain-data view of the host mesh's polygon/loop/UV-layer tables,
/// resolved before sampling. `loop_vertices[i]` is the vertex index the
/// i-th loop refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct UvMesh {
    pub loop_vertices: Vec<u32>,
    pub polygons: Vec<MeshPolygon>,
    pub uv_layers: Vec<UvLayer>,
}

impl UvMesh {
    /// vertex_uv returns one representative UV coordinate for a vertex.
    ///
    /// Every polygon loop referencing the vertex contributes one sample per
    /// UV layer. When samples disagree a warning is emitted and the
    /// first-found sample is kept.
    ///
    /// # Arguments
    /// * `vertex_index` - index of the vertex to sample
    ///
    /// # Returns
    /// * `Result<Coordinate2D, ExportError>`
    pub fn vertex_uv(&self, vertex_index: u32) -> Result<Coordinate2D, ExportError> {
        let mut samples: Vec<Coordinate2D> = Vec::new();
        for polygon in &self.polygons {
            for loop_index in polygon.loop_indices() {
                let vi = match self.loop_vertices.get(loop_index) {
                    None => continue,
                    Some(vi) => *vi,
                };
                if vi != vertex_index {
                    continue;
                }
                for layer in &self.uv_layers {
                    if let Some(uv) = layer.uv.get(loop_index) {
                        samples.push(*uv);
                    }
                }
            }
        }

        let first = match samples.first() {
            None => return Err(ExportError::NoUvSamplesFound(vertex_index)),
            Some(first) => *first,
        };
        if samples.iter().any(|uv| uv.x != first.x || uv.y != first.y) {
            tracing::warn!(
                "multiple UVs found for vertex with index {}, keeping the first",
                vertex_index
            );
        }
        Ok(first)
    }

    /// vertex_uvs samples a list of vertices, in order.
    ///
    /// A vertex without any UV sample is reported and (0, 0) substituted,
    /// the run continues.
    ///
    /// # Arguments
    /// * `vertex_indices` - vertices to sample
    ///
    /// # Returns
    /// * `Vec<Coordinate2D>`
    pub fn vertex_uvs(&self, vertex_indices: &[u32]) -> Vec<Coordinate2D> {
        let mut uvs: Vec<Coordinate2D> = Vec::with_capacity(vertex_indices.len());
        for &vertex_index in vertex_indices {
            match self.vertex_uv(vertex_index) {
                Ok(uv) => uvs.push(uv),
                Err(e) => {
                    tracing::error!("{}", e);
                    uvs.push(Coordinate2D::new(0.0, 0.0));
                }
            }
        }
        uvs
    }
}
