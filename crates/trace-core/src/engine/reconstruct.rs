use super::config::{FinalBond, ReconstructionConfig};
use super::error::EngineError;
use crate::core::models::chain::AtomChain;
use crate::core::models::features::{FeatureError, FeatureVector};
use crate::core::utils::geometry::{
    Frame, GeometryError, bond_direction, place_next_atom_recentered,
};
use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

/// Turns decoded internal coordinates into a Cartesian chain of carbon positions.
///
/// Reconstruction is a pure function of the bend angles, dihedral angles, bond length and
/// displacement norm: the same inputs always produce the same chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainReconstructor {
    bond_length: f64,
    final_bond: FinalBond,
}

impl ChainReconstructor {
    pub fn new(config: &ReconstructionConfig) -> Self {
        Self {
            bond_length: config.bond_length,
            final_bond: config.final_bond,
        }
    }

    pub fn bond_length(&self) -> f64 {
        self.bond_length
    }

    pub fn final_bond(&self) -> FinalBond {
        self.final_bond
    }

    /// Decodes the per-residue angles of `features` and builds its chain.
    pub fn reconstruct(&self, features: &FeatureVector) -> Result<AtomChain, EngineError> {
        let residues = features.residues();
        let mut alpha = Vec::with_capacity(residues.len());
        let mut theta = Vec::with_capacity(residues.len());
        for (residue, angles) in residues.iter().enumerate() {
            alpha.push(angles.alpha);
            theta.push(
                angles
                    .theta()
                    .map_err(|source| FeatureError::Dihedral { residue, source })?,
            );
        }
        self.build(&alpha, &theta, features.compute_r1n())
    }

    /// Builds a chain from bend angles and dihedral angles in degrees.
    ///
    /// The first three atoms are seeded in the `z = 0` plane from `alpha[0]`; every further
    /// pair `(alpha[i], theta[i])` with `i >= 1` appends one atom, so `n` pairs produce
    /// `n + 2` atoms. The last appended atom is bonded with a length derived from
    /// `displacement_norm` according to the [`FinalBond`] mode.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedInput`] for empty or mismatched angle sequences, non-finite
    ///   angles, or a non-positive displacement norm where the final bond needs it
    /// - [`EngineError::InvalidConfiguration`] for a non-positive bond length
    /// - [`EngineError::DegenerateGeometry`] when a frame collapses or the span is unreachable
    pub fn build(
        &self,
        alpha: &[f64],
        theta: &[f64],
        displacement_norm: f64,
    ) -> Result<AtomChain, EngineError> {
        self.validate(alpha, theta, displacement_norm)?;

        let n = alpha.len();
        let mut atoms = Vec::with_capacity(n + 2);
        let mut frame = seed_frame(self.bond_length, alpha[0]);
        atoms.extend([frame.prior2, frame.prior1, frame.current]);

        for i in 1..n {
            let bend = alpha[i].to_radians();
            let dihedral = theta[i].to_radians();

            let next = if i == n - 1 {
                self.place_final_atom(&frame, &atoms[0], bend, dihedral, displacement_norm)?
            } else {
                place_next_atom_recentered(&frame, self.bond_length, bend, dihedral)?
            };

            trace!(index = atoms.len(), x = next.x, y = next.y, z = next.z, "Placed atom.");
            atoms.push(next);
            frame = frame.advance(next);
        }

        debug!(atoms = atoms.len(), "Chain reconstructed.");
        Ok(AtomChain::from_atoms(atoms))
    }

    fn place_final_atom(
        &self,
        frame: &Frame,
        first: &Point3<f64>,
        bend: f64,
        dihedral: f64,
        displacement_norm: f64,
    ) -> Result<Point3<f64>, EngineError> {
        match self.final_bond {
            FinalBond::DisplacementNorm => Ok(place_next_atom_recentered(
                frame,
                displacement_norm,
                bend,
                dihedral,
            )?),
            FinalBond::SpanClosure => {
                let direction = bond_direction(frame, bend, dihedral)?;
                let offset = frame.current - first;
                let length = closing_bond_length(&offset, &direction, displacement_norm)?;
                Ok(frame.current + direction * length)
            }
        }
    }

    fn validate(
        &self,
        alpha: &[f64],
        theta: &[f64],
        displacement_norm: f64,
    ) -> Result<(), EngineError> {
        if !self.bond_length.is_finite() || self.bond_length <= 0.0 {
            return Err(GeometryError::InvalidBondLength(self.bond_length).into());
        }
        if alpha.is_empty() {
            return Err(EngineError::MalformedInput(
                "at least one bend angle is required to seed a chain".to_string(),
            ));
        }
        if alpha.len() != theta.len() {
            return Err(EngineError::MalformedInput(format!(
                "{} bend angles but {} dihedral angles",
                alpha.len(),
                theta.len()
            )));
        }
        if let Some((i, value)) = alpha
            .iter()
            .chain(theta)
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(EngineError::MalformedInput(format!(
                "angle {i} is not finite: {value}"
            )));
        }
        if alpha.len() > 1 && (!displacement_norm.is_finite() || displacement_norm <= 0.0) {
            return Err(EngineError::MalformedInput(format!(
                "displacement norm must be positive and finite, got {displacement_norm}"
            )));
        }
        Ok(())
    }
}

impl Default for ChainReconstructor {
    fn default() -> Self {
        Self::new(&ReconstructionConfig::default())
    }
}

/// The first three atoms: the origin, one bond along `x`, and a third atom in the `xy`
/// plane making an interior angle of `alpha0` degrees at the second atom.
fn seed_frame(bond_length: f64, alpha0: f64) -> Frame {
    let exterior = (180.0 - alpha0).to_radians();
    Frame::new(
        Point3::origin(),
        Point3::new(bond_length, 0.0, 0.0),
        Point3::new(
            bond_length * (1.0 + exterior.cos()),
            bond_length * exterior.sin(),
            0.0,
        ),
    )
}

/// Smallest positive `r` such that `|offset + r * direction| == span`, with `direction`
/// of unit length.
fn closing_bond_length(
    offset: &Vector3<f64>,
    direction: &Vector3<f64>,
    span: f64,
) -> Result<f64, GeometryError> {
    let b = offset.dot(direction);
    let c = offset.norm_squared() - span * span;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return Err(GeometryError::UnreachableSpan { target: span });
    }

    let root = discriminant.sqrt();
    [-b - root, -b + root]
        .into_iter()
        .find(|r| *r > 0.0)
        .ok_or(GeometryError::UnreachableSpan { target: span })
}
