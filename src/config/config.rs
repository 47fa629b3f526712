use serde::{Deserialize, Serialize};

/// Landmark labels recognized by the face tracking runtime, in the
/// canonical reference order.
pub const SUPPORTED_LANDMARK_LABELS: [&str; 18] = [
    "LEFT_EYEBROW_INSIDE",
    "RIGHT_EYEBROW_INSIDE",
    "LEFT_EYE_INSIDE",
    "RIGHT_EYE_INSIDE",
    "LEFT_EYE_OUTSIDE",
    "RIGHT_EYE_OUTSIDE",
    "LEFT_EYE_BOTTOM",
    "RIGHT_EYE_BOTTOM",
    "LEFT_EAR_BOTTOM",
    "RIGHT_EAR_BOTTOM",
    "LEFT_NOSE",
    "RIGHT_NOSE",
    "NOSE_BOTTOM",
    "LEFT_MOUTH",
    "RIGHT_MOUTH",
    "MOUTH_TOP",
    "MOUTH_BOTTOM",
    "CHIN_BOTTOM",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    pub tracking_id: String,
    pub tracking_name: String,
    pub tracking_type: String,
    pub min_landmark_count: usize,
    /// Name the host assigns to meshes that were never renamed. Exporting
    /// under this name is rejected.
    pub default_geometry_name: String,
    /// Export coordinates as [x, z, -y] instead of [x, y, z].
    pub invert_yz: bool,
}

impl ExportConfig {
    pub fn new() -> Self {
        ExportConfig {
            tracking_id: "trackingParentMask".to_string(),
            tracking_name: "Exported from Blender".to_string(),
            tracking_type: "FACE".to_string(),
            min_landmark_count: 4,
            default_geometry_name: "Mesh".to_string(),
            invert_yz: false,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::new();
        assert_eq!(config.tracking_id, "trackingParentMask");
        assert_eq!(config.tracking_type, "FACE");
        assert_eq!(config.min_landmark_count, 4);
        assert!(!config.invert_yz);
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(SUPPORTED_LANDMARK_LABELS.len(), 18);
    }
}
