use std::io::Write;
use serde::{Deserialize, Serialize};
use crate::config::config::ExportConfig;
use crate::utils::coordinate::Landmark;
use crate::utils::utils::identity_matrix_flat;

/// Top-level metadata document consumed by the face tracking runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaskMetadata {
    #[serde(rename = "ARTRACKING")]
    pub ar_tracking: Vec<FaceTracking>,
}

/// One tracked face mesh with its deformation keypoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceTracking {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "TYPE")]
    pub tracking_type: String,
    /// Flattened 4x4 row-major transform, always identity.
    #[serde(rename = "MATRIX")]
    pub matrix: Vec<f32>,
    #[serde(rename = "DEFORMEDID")]
    pub deformed_id: String,
    #[serde(rename = "DEFORMEDKEYPOINTS")]
    pub deformed_keypoints: Vec<Landmark>,
}

/// build_metadata wraps validated landmarks into the export document.
///
/// # Arguments
/// * `config` - export constants (tracking id, name, type)
/// * `geometry_name` - source mesh name, becomes DEFORMEDID
/// * `landmarks` - validated landmark sequence
///
/// # Returns
/// * `MaskMetadata`
pub fn build_metadata(
    config: &ExportConfig,
    geometry_name: &str,
    landmarks: Vec<Landmark>,
) -> MaskMetadata {
    let tracking = FaceTracking {
        id: config.tracking_id.clone(),
        name: config.tracking_name.clone(),
        tracking_type: config.tracking_type.clone(),
        matrix: identity_matrix_flat(),
        deformed_id: geometry_name.to_string(),
        deformed_keypoints: landmarks,
    };
    MaskMetadata {
        ar_tracking: vec![tracking],
    }
}

/// write_metadata serializes the document as UTF-8 JSON to the given writer.
pub fn write_metadata<W: Write>(writer: W, metadata: &MaskMetadata) -> Result<(), serde_json::Error> {
    serde_json::to_writer(writer, metadata)
}
