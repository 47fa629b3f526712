use nalgebra::{Matrix4, Point3};

/// Flattens the 4x4 identity transform row-major, the layout the tracking
/// runtime expects in the MATRIX field.
pub fn identity_matrix_flat() -> Vec<f32> {
    let m = Matrix4::<f32>::identity();
    m.transpose().iter().copied().collect()
}

pub fn point_to_co(p: &Point3<f32>, invert_yz: bool) -> [f32; 3] {
    if invert_yz {
        [p.x, p.z, -p.y]
    } else {
        [p.x, p.y, p.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix_flat() {
        let flat = identity_matrix_flat();
        let expected = vec![
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_point_to_co() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(point_to_co(&p, false), [1.0, 2.0, 3.0]);
        assert_eq!(point_to_co(&p, true), [1.0, 3.0, -2.0]);
    }
}
