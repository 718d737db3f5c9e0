use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

/// Relative tolerance below which the reference atoms of a frame are treated as collinear.
const COLLINEARITY_TOLERANCE: f64 = 1e-9;
/// Absolute distance (in Angstroms) below which two atoms are treated as coincident.
const COINCIDENCE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Sine/cosine pair ({sin}, {cos}) has zero magnitude, the dihedral angle is undefined")]
    ZeroMagnitudeDihedral { sin: f64, cos: f64 },

    #[error("Non-finite angular input: {what} = {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Bond length must be positive and finite, got {0}")]
    InvalidBondLength(f64),

    #[error("Reference atoms are collinear, the local frame is undefined")]
    CollinearFrame,

    #[error("Reference atoms coincide, the bond direction is undefined")]
    CoincidentAtoms,

    #[error("Target span {target:.4} cannot be reached from the final frame")]
    UnreachableSpan { target: f64 },
}

/// A sliding window over the last three positions of a growing chain.
///
/// `current` is the atom the next one bonds to, `prior1` precedes it and `prior2`
/// precedes `prior1`. The window is a plain value: advancing it returns a new frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub prior2: Point3<f64>,
    pub prior1: Point3<f64>,
    pub current: Point3<f64>,
}

impl Frame {
    pub fn new(prior2: Point3<f64>, prior1: Point3<f64>, current: Point3<f64>) -> Self {
        Self {
            prior2,
            prior1,
            current,
        }
    }

    /// Shifts the window by one atom, dropping `prior2`.
    pub fn advance(self, next: Point3<f64>) -> Self {
        Self {
            prior2: self.prior1,
            prior1: self.current,
            current: next,
        }
    }

    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            prior2: self.prior2 + offset,
            prior1: self.prior1 + offset,
            current: self.current + offset,
        }
    }

    /// Orthonormal basis of the frame as matrix columns `(bc, n × bc, n)`.
    ///
    /// `bc` is the unit bond direction `prior1 -> current` and `n` the unit normal of
    /// the plane spanned by the three atoms.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoincidentAtoms`] when `prior1` and `current` coincide and
    /// [`GeometryError::CollinearFrame`] when the three atoms lie on one line.
    pub fn basis(&self) -> Result<Matrix3<f64>, GeometryError> {
        let ab = self.prior1 - self.prior2;
        let bc = self.current - self.prior1;

        let bc_norm = bc.norm();
        if bc_norm < COINCIDENCE_TOLERANCE {
            return Err(GeometryError::CoincidentAtoms);
        }
        let bc_unit = bc / bc_norm;

        let normal = ab.cross(&bc_unit);
        let normal_norm = normal.norm();
        if normal_norm <= COLLINEARITY_TOLERANCE * ab.norm().max(COINCIDENCE_TOLERANCE) {
            return Err(GeometryError::CollinearFrame);
        }
        let normal_unit = normal / normal_norm;
        let in_plane = normal_unit.cross(&bc_unit);

        Ok(Matrix3::from_columns(&[bc_unit, in_plane, normal_unit]))
    }
}

/// Places the atom bonded to `frame.current` from its internal coordinates (NeRF).
///
/// The bend angle is the interior angle `prior1 - current - new` and the dihedral is the
/// signed torsion `prior2 - prior1 - current - new`, both in radians.
///
/// # Errors
///
/// Fails on a non-positive bond length, non-finite angles, or a degenerate frame.
pub fn place_next_atom(
    frame: &Frame,
    bond_length: f64,
    bend_angle: f64,
    dihedral_angle: f64,
) -> Result<Point3<f64>, GeometryError> {
    Ok(frame.current + offset_in_world(frame, bond_length, bend_angle, dihedral_angle)?)
}

/// Same as [`place_next_atom`], but works in a frame recentred on `prior2`.
///
/// The frame is translated so that `prior2` sits at the origin, the atom is placed there
/// and the result is moved back to world coordinates.
pub fn place_next_atom_recentered(
    frame: &Frame,
    bond_length: f64,
    bend_angle: f64,
    dihedral_angle: f64,
) -> Result<Point3<f64>, GeometryError> {
    let origin = frame.prior2.coords;
    let local = frame.translated(&-origin);
    let placed = place_next_atom(&local, bond_length, bend_angle, dihedral_angle)?;
    Ok(placed + origin)
}

/// Unit direction from `frame.current` towards an atom with the given bend and dihedral.
pub fn bond_direction(
    frame: &Frame,
    bend_angle: f64,
    dihedral_angle: f64,
) -> Result<Vector3<f64>, GeometryError> {
    offset_in_world(frame, 1.0, bend_angle, dihedral_angle)
}

fn offset_in_world(
    frame: &Frame,
    bond_length: f64,
    bend_angle: f64,
    dihedral_angle: f64,
) -> Result<Vector3<f64>, GeometryError> {
    if !bond_length.is_finite() || bond_length <= 0.0 {
        return Err(GeometryError::InvalidBondLength(bond_length));
    }
    if !bend_angle.is_finite() {
        return Err(GeometryError::NonFinite {
            what: "bend angle",
            value: bend_angle,
        });
    }
    if !dihedral_angle.is_finite() {
        return Err(GeometryError::NonFinite {
            what: "dihedral angle",
            value: dihedral_angle,
        });
    }

    let basis = frame.basis()?;
    let local = Vector3::new(
        -bond_length * bend_angle.cos(),
        bond_length * bend_angle.sin() * dihedral_angle.cos(),
        bond_length * bend_angle.sin() * dihedral_angle.sin(),
    );

    Ok(basis * local)
}

/// Interior angle `a - b - c` at `b`, in degrees.
pub fn bend_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    (a - b).angle(&(c - b)).to_degrees()
}

/// Signed dihedral angle `a - b - c - d` in degrees, in `(-180, 180]`.
pub fn dihedral_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>, d: &Point3<f64>) -> f64 {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let y = b2.norm() * b1.dot(&n2);
    let x = n1.dot(&n2);
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn bent_frame() -> Frame {
        Frame::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.8, 0.0, 0.0),
            Point3::new(3.8 + 3.8 * 70f64.to_radians().cos(), 3.8 * 70f64.to_radians().sin(), 0.0),
        )
    }

    #[test]
    fn straight_bend_extends_the_prior_bond() {
        let frame = Frame::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );

        let placed = place_next_atom(&frame, 3.8, 180f64.to_radians(), 0.3).unwrap();

        assert!((placed - Point3::new(4.8, 0.0, 0.0)).norm() < TOLERANCE);
        assert!(((placed - frame.current).norm() - 3.8).abs() < TOLERANCE);
    }

    #[test]
    fn right_angle_with_zero_dihedral_stays_cis_in_plane() {
        let frame = Frame::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        );

        let placed = place_next_atom(&frame, 1.0, 90f64.to_radians(), 0.0).unwrap();

        assert!((placed - Point3::new(0.0, 1.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn placed_atom_reproduces_requested_internal_coordinates() {
        let frame = bent_frame();
        for dihedral in [-170.0, -60.0, 0.0, 45.0, 120.0, 180.0] {
            let placed =
                place_next_atom(&frame, 3.8, 100f64.to_radians(), f64::to_radians(dihedral))
                    .unwrap();

            assert!(((placed - frame.current).norm() - 3.8).abs() < TOLERANCE);
            assert!((bend_angle(&frame.prior1, &frame.current, &placed) - 100.0).abs() < 1e-7);
            let measured = dihedral_angle(&frame.prior2, &frame.prior1, &frame.current, &placed);
            let diff = (measured - dihedral).rem_euclid(360.0);
            assert!(diff < 1e-7 || (360.0 - diff) < 1e-7, "{measured} vs {dihedral}");
        }
    }

    #[test]
    fn recentered_placement_matches_direct_placement() {
        let frame = bent_frame().translated(&Vector3::new(-12.5, 7.25, 3.0));

        let direct = place_next_atom(&frame, 3.8, 1.9, -0.8).unwrap();
        let recentered = place_next_atom_recentered(&frame, 3.8, 1.9, -0.8).unwrap();

        assert!((direct - recentered).norm() < 1e-9);
    }

    #[test]
    fn collinear_frame_is_rejected() {
        let frame = Frame::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );

        let result = place_next_atom(&frame, 1.0, 1.5, 0.0);

        assert_eq!(result, Err(GeometryError::CollinearFrame));
    }

    #[test]
    fn coincident_atoms_are_rejected() {
        let frame = Frame::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );

        let result = place_next_atom(&frame, 1.0, 1.5, 0.0);

        assert_eq!(result, Err(GeometryError::CoincidentAtoms));
    }

    #[test]
    fn non_positive_bond_length_is_rejected() {
        let result = place_next_atom(&bent_frame(), 0.0, 1.5, 0.0);
        assert_eq!(result, Err(GeometryError::InvalidBondLength(0.0)));
    }

    #[test]
    fn nan_dihedral_is_rejected() {
        let result = place_next_atom(&bent_frame(), 3.8, 1.5, f64::NAN);
        assert!(matches!(
            result,
            Err(GeometryError::NonFinite {
                what: "dihedral angle",
                ..
            })
        ));
    }

    #[test]
    fn advancing_a_frame_drops_the_oldest_atom() {
        let frame = bent_frame();
        let next = Point3::new(9.0, 9.0, 9.0);

        let advanced = frame.advance(next);

        assert_eq!(advanced.prior2, frame.prior1);
        assert_eq!(advanced.prior1, frame.current);
        assert_eq!(advanced.current, next);
    }

    #[test]
    fn bond_direction_is_a_unit_vector() {
        let direction = bond_direction(&bent_frame(), 1.7, 2.2).unwrap();
        assert!((direction.norm() - 1.0).abs() < TOLERANCE);
    }
}
