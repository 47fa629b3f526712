use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use anyhow::Context;
use nalgebra::Point3;
use crate::config::config::ExportConfig;
use crate::error::ExportError;
use crate::modules::landmark_collector::collect_landmarks;
use crate::modules::landmark_validator::validate_landmarks;
use crate::modules::metadata_serializer::{build_metadata, write_metadata, MaskMetadata};
use crate::utils::coordinate::LandmarkAnnotation;

#[derive(Debug, Clone)]
pub struct MaskExportPipeline {
    config: ExportConfig,
}

impl MaskExportPipeline {

    /// new initializes new instance of the export pipeline.
    pub fn new(config: ExportConfig) -> Self {
        MaskExportPipeline { config }
    }

    /// build_document runs the export pipeline up to, but not including,
    /// the file write: geometry-name check, landmark collection, then
    /// validation. Any failure aborts before anything is written.
    ///
    /// # Arguments
    /// * `geometry_name` - name of the source mesh, becomes DEFORMEDID
    /// * `annotations` - annotation records in host order
    /// * `positions` - per-vertex positions, indexed by vertex index
    ///
    /// # Returns
    /// * `Result<MaskMetadata, ExportError>`
    pub fn build_document(
        &self,
        geometry_name: &str,
        annotations: &[LandmarkAnnotation],
        positions: &[Point3<f32>],
    ) -> Result<MaskMetadata, ExportError> {
        if geometry_name.is_empty() || geometry_name == self.config.default_geometry_name {
            return Err(ExportError::InvalidGeometryName(geometry_name.to_string()));
        }

        let landmarks = collect_landmarks(annotations, positions, self.config.invert_yz)?;
        validate_landmarks(&landmarks, self.config.min_landmark_count)?;

        Ok(build_metadata(&self.config, geometry_name, landmarks))
    }

    /// export_metadata validates the annotated landmarks and writes the
    /// metadata JSON file, overwriting any existing file at the path.
    ///
    /// # Arguments
    /// * `geometry_name` - name of the source mesh
    /// * `annotations` - annotation records in host order
    /// * `positions` - per-vertex positions, indexed by vertex index
    /// * `path` - destination file path
    ///
    /// # Returns
    /// * `Result<(), anyhow::Error>`
    pub fn export_metadata(
        &self,
        geometry_name: &str,
        annotations: &[LandmarkAnnotation],
        positions: &[Point3<f32>],
        path: &Path,
    ) -> Result<(), anyhow::Error> {
        let metadata = self.build_document(geometry_name, annotations, positions)?;

        let file = File::create(path)
            .with_context(|| format!("failed to create output file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        write_metadata(&mut writer, &metadata)
            .with_context(|| format!("failed to write metadata to {:?}", path))?;
        writer
            .flush()
            .with_context(|| format!("failed to write metadata to {:?}", path))?;

        tracing::info!(
            "exported {} landmarks for geometry {} to {:?}",
            metadata.ar_tracking[0].deformed_keypoints.len(),
            geometry_name,
            path
        );
        Ok(())
    }
}
