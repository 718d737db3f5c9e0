use crate::core::utils::angles::{decode_dihedral, encode_dihedral};
use crate::core::utils::geometry::GeometryError;
use nalgebra::Vector3;
use thiserror::Error;

/// Number of leading values holding the end-to-end displacement vector.
pub const DISPLACEMENT_LEN: usize = 3;
/// Bending angles are stored divided by this factor.
pub const ALPHA_SCALE: f64 = 180.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeatureError {
    #[error(
        "Feature vector of length {len} does not match the layout 3 + 3n (displacement, bends, sines, cosines)"
    )]
    InvalidLength { len: usize },

    #[error("Feature value at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("Failed to decode the dihedral of residue {residue}: {source}")]
    Dihedral {
        residue: usize,
        #[source]
        source: GeometryError,
    },
}

/// Internal coordinates of a single residue, decoded from the flat feature layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueAngles {
    /// Bending angle in degrees.
    pub alpha: f64,
    /// Raw, unnormalised sine of the dihedral angle.
    pub sin_theta: f64,
    /// Raw, unnormalised cosine of the dihedral angle.
    pub cos_theta: f64,
}

impl ResidueAngles {
    pub fn from_degrees(alpha: f64, theta: f64) -> Self {
        let (sin_theta, cos_theta) = encode_dihedral(theta);
        Self {
            alpha,
            sin_theta,
            cos_theta,
        }
    }

    /// The dihedral angle in degrees.
    pub fn theta(&self) -> Result<f64, GeometryError> {
        decode_dihedral(self.sin_theta, self.cos_theta)
    }
}

/// A validated feature vector as emitted by the generative model.
///
/// The layout is `[dx, dy, dz, alpha/180 (n), sin theta (n), cos theta (n)]`, where `n` is
/// the number of (bend, dihedral) pairs. Construction rejects any other length as well as
/// non-finite values, so every accessor below stays within bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
    n: usize,
}

impl FeatureVector {
    /// Validates and wraps a raw vector.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidLength`] if the length is not `3 + 3n`, and
    /// [`FeatureError::NonFinite`] for the first NaN or infinite value.
    pub fn new(values: Vec<f64>) -> Result<Self, FeatureError> {
        let len = values.len();
        if len < DISPLACEMENT_LEN || (len - DISPLACEMENT_LEN) % 3 != 0 {
            return Err(FeatureError::InvalidLength { len });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FeatureError::NonFinite { index, value });
        }

        let n = (len - DISPLACEMENT_LEN) / 3;
        Ok(Self { values, n })
    }

    pub fn from_f32(values: &[f32]) -> Result<Self, FeatureError> {
        Self::new(values.iter().map(|&v| f64::from(v)).collect())
    }

    /// Encodes a displacement and per-residue angles into the flat layout.
    ///
    /// The encoded values go through the same validation as [`FeatureVector::new`].
    pub fn from_parts(
        displacement: Vector3<f64>,
        residues: &[ResidueAngles],
    ) -> Result<Self, FeatureError> {
        let n = residues.len();
        let mut values = Vec::with_capacity(DISPLACEMENT_LEN + 3 * n);
        values.extend(displacement.iter());
        values.extend(residues.iter().map(|r| r.alpha / ALPHA_SCALE));
        values.extend(residues.iter().map(|r| r.sin_theta));
        values.extend(residues.iter().map(|r| r.cos_theta));
        Self::new(values)
    }

    /// Number of (bend, dihedral) pairs in the vector.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    /// End-to-end displacement vector of the encoded fragment.
    pub fn displacement(&self) -> Vector3<f64> {
        Vector3::new(self.values[0], self.values[1], self.values[2])
    }

    /// Bending angles in degrees.
    pub fn alpha(&self) -> Vec<f64> {
        self.raw_alpha().iter().map(|a| a * ALPHA_SCALE).collect()
    }

    pub fn sin_theta(&self) -> &[f64] {
        self.section(1)
    }

    pub fn cos_theta(&self) -> &[f64] {
        self.section(2)
    }

    /// Dihedral angles in degrees, decoded from the sine/cosine sections.
    pub fn theta(&self) -> Result<Vec<f64>, FeatureError> {
        self.sin_theta()
            .iter()
            .zip(self.cos_theta())
            .enumerate()
            .map(|(residue, (&sin, &cos))| {
                decode_dihedral(sin, cos)
                    .map_err(|source| FeatureError::Dihedral { residue, source })
            })
            .collect()
    }

    pub fn residues(&self) -> Vec<ResidueAngles> {
        self.raw_alpha()
            .iter()
            .zip(self.sin_theta())
            .zip(self.cos_theta())
            .map(|((&alpha, &sin_theta), &cos_theta)| ResidueAngles {
                alpha: alpha * ALPHA_SCALE,
                sin_theta,
                cos_theta,
            })
            .collect()
    }

    /// The pre-encoding representation `[dx, dy, dz, alpha0, theta0, alpha1, theta1, ...]`.
    pub fn to_original(&self) -> Result<Vec<f64>, FeatureError> {
        let theta = self.theta()?;
        let mut original = Vec::with_capacity(DISPLACEMENT_LEN + 2 * self.n);
        original.extend_from_slice(&self.values[..DISPLACEMENT_LEN]);
        for (alpha, theta) in self.alpha().into_iter().zip(theta) {
            original.push(alpha);
            original.push(theta);
        }
        Ok(original)
    }

    /// Norm of the displacement, i.e. the span the reconstruction aims for.
    pub fn compute_r1n(&self) -> f64 {
        self.displacement().norm()
    }

    fn raw_alpha(&self) -> &[f64] {
        self.section(0)
    }

    fn section(&self, index: usize) -> &[f64] {
        let start = DISPLACEMENT_LEN + index * self.n;
        &self.values[start..start + self.n]
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = FeatureError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
