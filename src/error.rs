use thiserror::Error;

/// Failure conditions of the metadata export and UV sampling passes.
///
/// Validation failures abort the whole export before anything is written,
/// so the output file is either complete and valid or absent.
/// `NoUvSamplesFound` is diagnostic only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// Geometry name is empty or still the host's unnamed-mesh placeholder.
    #[error("invalid geometry name: {0:?}")]
    InvalidGeometryName(String),
    /// Fewer labeled points than the exporter requires.
    #[error("you should label at least {min} points, found {found}")]
    InsufficientLandmarks { found: usize, min: usize },
    /// The same label was declared on more than one annotation.
    #[error("this landmark is labeled twice or more: {0}")]
    DuplicateLandmarkLabel(String),
    /// Label is not part of the supported landmark vocabulary.
    #[error("this landmark is not valid: {0}")]
    UnknownLandmarkLabel(String),
    /// A labeled annotation points at a vertex with no position entry.
    #[error("no position found for vertex with index {0}")]
    MissingVertexPosition(u32),
    /// No polygon loop referencing the vertex carries a UV coordinate.
    #[error("no UVs found for vertex with index {0}")]
    NoUvSamplesFound(u32),
}
