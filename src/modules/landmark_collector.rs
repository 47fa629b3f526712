use nalgebra::Point3;
use crate::error::ExportError;
use crate::utils::coordinate::{Landmark, LandmarkAnnotation};
use crate::utils::utils::point_to_co;

/// collect_landmarks resolves annotation records into labeled 3D points.
///
/// Annotations with an empty label are measurement-only segments and are
/// skipped. Output order follows the input annotation order.
///
/// # Arguments
/// * `annotations` - annotation records in host order
/// * `positions` - per-vertex positions, indexed by vertex index
/// * `invert_yz` - export coordinates as [x, z, -y] instead of [x, y, z]
///
/// # Returns
/// * `Result<Vec<Landmark>, ExportError>`
pub fn collect_landmarks(
    annotations: &[LandmarkAnnotation],
    positions: &[Point3<f32>],
    invert_yz: bool,
) -> Result<Vec<Landmark>, ExportError> {
    let mut landmarks: Vec<Landmark> = Vec::with_capacity(annotations.len());
    for annotation in annotations {
        if annotation.label.is_empty() {
            continue;
        }
        let co = match positions.get(annotation.vertex_index as usize) {
            None => {
                return Err(ExportError::MissingVertexPosition(annotation.vertex_index))
            }
            Some(position) => point_to_co(position, invert_yz),
        };
        landmarks.push(Landmark {
            label: annotation.label.clone(),
            co,
        });
    }
    Ok(landmarks)
}
