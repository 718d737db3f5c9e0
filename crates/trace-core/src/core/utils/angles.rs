use super::geometry::GeometryError;

/// Recovers a dihedral angle in degrees from an unnormalised (sine, cosine) pair.
///
/// Generated sine/cosine values need not lie on the unit circle, so the pair is first
/// normalised by its magnitude. The result lies in `(-180, 180]`.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] if either component is NaN or infinite, and
/// [`GeometryError::ZeroMagnitudeDihedral`] if both components are exactly zero.
pub fn decode_dihedral(sin_val: f64, cos_val: f64) -> Result<f64, GeometryError> {
    if !sin_val.is_finite() {
        return Err(GeometryError::NonFinite {
            what: "dihedral sine",
            value: sin_val,
        });
    }
    if !cos_val.is_finite() {
        return Err(GeometryError::NonFinite {
            what: "dihedral cosine",
            value: cos_val,
        });
    }

    let k = sin_val.hypot(cos_val);
    if k == 0.0 {
        return Err(GeometryError::ZeroMagnitudeDihedral {
            sin: sin_val,
            cos: cos_val,
        });
    }

    let degrees = (sin_val / k).atan2(cos_val / k).to_degrees();
    // atan2 returns -180 for (-0.0, -1); fold it onto the open end of the range.
    if degrees <= -180.0 {
        Ok(180.0)
    } else {
        Ok(degrees)
    }
}

/// Encodes a dihedral angle in degrees as a unit (sine, cosine) pair.
pub fn encode_dihedral(degrees: f64) -> (f64, f64) {
    degrees.to_radians().sin_cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unit_pairs_back_to_the_original_angle() {
        let mut theta = -179.75;
        while theta <= 180.0 {
            let (sin, cos) = encode_dihedral(theta);
            let decoded = decode_dihedral(sin, cos).unwrap();
            assert!((decoded - theta).abs() < 1e-6, "{theta} decoded as {decoded}");
            theta += 0.25;
        }
    }

    #[test]
    fn unnormalised_pairs_decode_like_their_unit_counterparts() {
        let (sin, cos) = encode_dihedral(-62.5);
        let scaled = decode_dihedral(sin * 0.37, cos * 0.37).unwrap();
        assert!((scaled + 62.5).abs() < 1e-9);

        let large = decode_dihedral(sin * 250.0, cos * 250.0).unwrap();
        assert!((large + 62.5).abs() < 1e-9);
    }

    #[test]
    fn half_turn_maps_to_positive_180() {
        assert_eq!(decode_dihedral(0.0, -1.0).unwrap(), 180.0);
        assert_eq!(decode_dihedral(-0.0, -1.0).unwrap(), 180.0);
    }

    #[test]
    fn zero_pair_is_degenerate() {
        let result = decode_dihedral(0.0, 0.0);
        assert_eq!(
            result,
            Err(GeometryError::ZeroMagnitudeDihedral { sin: 0.0, cos: 0.0 })
        );
    }

    #[test]
    fn nan_component_is_rejected() {
        assert!(matches!(
            decode_dihedral(f64::NAN, 1.0),
            Err(GeometryError::NonFinite { .. })
        ));
        assert!(matches!(
            decode_dihedral(1.0, f64::INFINITY),
            Err(GeometryError::NonFinite { .. })
        ));
    }
}
