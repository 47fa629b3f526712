use std::collections::HashSet;
use crate::config::config::SUPPORTED_LANDMARK_LABELS;
use crate::error::ExportError;
use crate::utils::coordinate::Landmark;

/// validate_landmarks checks a collected landmark set before export.
///
/// The checks run in a fixed order and the first violation aborts the
/// export: minimum count, duplicate labels, then vocabulary membership.
///
/// # Arguments
/// * `landmarks` - the collected landmark sequence
/// * `min_count` - the minimum number of labeled points required
///
/// # Returns
/// * `Result<(), ExportError>`
pub fn validate_landmarks(landmarks: &[Landmark], min_count: usize) -> Result<(), ExportError> {
    if landmarks.len() < min_count {
        return Err(ExportError::InsufficientLandmarks {
            found: landmarks.len(),
            min: min_count,
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(landmarks.len());
    for landmark in landmarks {
        if !seen.insert(landmark.label.as_str()) {
            return Err(ExportError::DuplicateLandmarkLabel(landmark.label.clone()));
        }
    }

    for landmark in landmarks {
        if !SUPPORTED_LANDMARK_LABELS.contains(&landmark.label.as_str()) {
            return Err(ExportError::UnknownLandmarkLabel(landmark.label.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark(label: &str) -> Landmark {
        Landmark {
            label: label.to_string(),
            co: [0.0, 0.0, 0.0],
        }
    }

    #[test]
    fn test_insufficient_landmarks() {
        let landmarks = vec![
            landmark("LEFT_NOSE"),
            landmark("RIGHT_NOSE"),
            landmark("CHIN_BOTTOM"),
        ];
        assert_eq!(
            validate_landmarks(&landmarks, 4),
            Err(ExportError::InsufficientLandmarks { found: 3, min: 4 })
        );
        assert_eq!(
            validate_landmarks(&[], 4),
            Err(ExportError::InsufficientLandmarks { found: 0, min: 4 })
        );
    }

    #[test]
    fn test_duplicate_label() {
        let landmarks = vec![
            landmark("LEFT_NOSE"),
            landmark("LEFT_NOSE"),
            landmark("RIGHT_NOSE"),
            landmark("CHIN_BOTTOM"),
        ];
        assert_eq!(
            validate_landmarks(&landmarks, 4),
            Err(ExportError::DuplicateLandmarkLabel("LEFT_NOSE".to_string()))
        );
    }

    #[test]
    fn test_duplicate_reported_before_unknown() {
        // an invalid label declared twice surfaces as a duplicate first
        let landmarks = vec![
            landmark("LEFT_CHEEK"),
            landmark("LEFT_CHEEK"),
            landmark("RIGHT_NOSE"),
            landmark("CHIN_BOTTOM"),
        ];
        assert_eq!(
            validate_landmarks(&landmarks, 4),
            Err(ExportError::DuplicateLandmarkLabel("LEFT_CHEEK".to_string()))
        );
    }

    #[test]
    fn test_unknown_label() {
        let landmarks = vec![
            landmark("LEFT_NOSE"),
            landmark("RIGHT_NOSE"),
            landmark("LEFT_CHEEK"),
            landmark("CHIN_BOTTOM"),
        ];
        assert_eq!(
            validate_landmarks(&landmarks, 4),
            Err(ExportError::UnknownLandmarkLabel("LEFT_CHEEK".to_string()))
        );
    }

    #[test]
    fn test_valid_set_passes() {
        let landmarks = vec![
            landmark("LEFT_EYE_INSIDE"),
            landmark("RIGHT_EYE_INSIDE"),
            landmark("NOSE_BOTTOM"),
            landmark("CHIN_BOTTOM"),
        ];
        assert_eq!(validate_landmarks(&landmarks, 4), Ok(()));
    }

    #[test]
    fn test_full_vocabulary_passes() {
        let landmarks: Vec<Landmark> = SUPPORTED_LANDMARK_LABELS
            .iter()
            .map(|label| landmark(label))
            .collect();
        assert_eq!(validate_landmarks(&landmarks, 4), Ok(()));
    }
}
