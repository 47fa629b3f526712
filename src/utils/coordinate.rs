use serde::{Deserialize, Serialize};

/// One annotation record as resolved from the host's measurement extension:
/// the annotated vertex and the label text the user typed, if any.
/// An empty label means the segment carries no landmark declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandmarkAnnotation {
    pub vertex_index: u32,
    pub label: String,
}

impl LandmarkAnnotation {
    pub fn new(vertex_index: u32, label: &str) -> Self {
        LandmarkAnnotation {
            vertex_index,
            label: label.to_string(),
        }
    }
}

/// A named anatomical reference point with its exported 3D position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Landmark {
    pub label: String,
    pub co: [f32; 3],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate2D {
    pub x: f32,
    pub y: f32,
}

impl Coordinate2D {
    pub fn new(x: f32, y: f32) -> Self {
        Coordinate2D { x, y }
    }
}
