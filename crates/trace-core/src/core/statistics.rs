//! Angle statistics of generated fragments, grouped by secondary structure.
//!
//! Generated feature vectors are conditioned on a secondary-structure string (one
//! `H`/`E`/`C` letter per residue). Collecting the decoded bend and dihedral angles per
//! letter gives the helix/strand/coil angle distributions used to sanity-check a model.

use crate::core::models::features::{FeatureError, FeatureVector};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("Unknown secondary structure code '{0}', expected one of H, E, C")]
    UnknownCode(char),
    #[error("Malformed label vector: {0}")]
    InvalidLabel(String),
    #[error(transparent)]
    Feature(#[from] FeatureError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecondaryStructure {
    Helix,
    Strand,
    Coil,
}

impl SecondaryStructure {
    pub const ALL: [SecondaryStructure; 3] = [Self::Helix, Self::Strand, Self::Coil];

    pub fn code(self) -> char {
        match self {
            Self::Helix => 'H',
            Self::Strand => 'E',
            Self::Coil => 'C',
        }
    }
}

impl TryFrom<char> for SecondaryStructure {
    type Error = StatisticsError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'H' => Ok(Self::Helix),
            'E' => Ok(Self::Strand),
            'C' => Ok(Self::Coil),
            other => Err(StatisticsError::UnknownCode(other)),
        }
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Helix => "helix",
            Self::Strand => "strand",
            Self::Coil => "coil",
        };
        write!(f, "{name}")
    }
}

pub fn parse_secondary_structure(ss: &str) -> Result<Vec<SecondaryStructure>, StatisticsError> {
    ss.chars().map(SecondaryStructure::try_from).collect()
}

/// Number of amino acid classes one-hot encoded per residue in a label vector.
pub const AMINO_ACID_CLASSES: usize = 20;
/// Width of one residue in a label vector: amino acid classes plus the H/E/C classes.
pub const LABEL_WIDTH: usize = AMINO_ACID_CLASSES + SecondaryStructure::ALL.len();

/// Extracts the secondary-structure string from a conditioning label vector.
///
/// A label for `n` residues holds `20n` amino acid one-hot values followed by `3n`
/// secondary-structure one-hot values in `H`, `E`, `C` order.
pub fn structure_from_label(label: &[f64]) -> Result<Vec<SecondaryStructure>, StatisticsError> {
    if label.len() % LABEL_WIDTH != 0 {
        return Err(StatisticsError::InvalidLabel(format!(
            "length {} is not a multiple of {LABEL_WIDTH}",
            label.len()
        )));
    }
    let n = label.len() / LABEL_WIDTH;

    label[AMINO_ACID_CLASSES * n..]
        .chunks(SecondaryStructure::ALL.len())
        .enumerate()
        .map(|(residue, classes)| {
            classes
                .iter()
                .position(|&v| v == 1.0)
                .map(|class| SecondaryStructure::ALL[class])
                .ok_or_else(|| {
                    StatisticsError::InvalidLabel(format!(
                        "residue {residue} has no active secondary structure class"
                    ))
                })
        })
        .collect()
}

/// Bend and dihedral angle (degrees) of one residue, tagged with its structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    pub structure: SecondaryStructure,
    pub alpha: f64,
    pub theta: f64,
}

/// Tags every residue of `features` with its secondary-structure letter.
///
/// Residues are paired positionally; the shorter of the two sequences bounds the output.
pub fn angles_by_secondary_structure(
    ss: &[SecondaryStructure],
    features: &FeatureVector,
) -> Result<Vec<AngleSample>, StatisticsError> {
    let theta = features.theta()?;
    Ok(ss
        .iter()
        .zip(features.alpha())
        .zip(theta)
        .map(|((&structure, alpha), theta)| AngleSample {
            structure,
            alpha,
            theta,
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSummary {
    pub count: usize,
    pub mean_alpha: f64,
    /// Circular mean of the dihedral angles, in degrees.
    pub mean_theta: f64,
}

/// `(alpha, theta)` pairs split into helix, strand and coil buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HecDistribution {
    pub helix: Vec<(f64, f64)>,
    pub strand: Vec<(f64, f64)>,
    pub coil: Vec<(f64, f64)>,
}

impl HecDistribution {
    pub fn from_samples(samples: &[AngleSample]) -> Self {
        let mut distribution = Self::default();
        distribution.extend(samples);
        distribution
    }

    pub fn extend(&mut self, samples: &[AngleSample]) {
        for sample in samples {
            self.bucket_mut(sample.structure)
                .push((sample.alpha, sample.theta));
        }
    }

    pub fn bucket(&self, structure: SecondaryStructure) -> &[(f64, f64)] {
        match structure {
            SecondaryStructure::Helix => &self.helix,
            SecondaryStructure::Strand => &self.strand,
            SecondaryStructure::Coil => &self.coil,
        }
    }

    fn bucket_mut(&mut self, structure: SecondaryStructure) -> &mut Vec<(f64, f64)> {
        match structure {
            SecondaryStructure::Helix => &mut self.helix,
            SecondaryStructure::Strand => &mut self.strand,
            SecondaryStructure::Coil => &mut self.coil,
        }
    }

    pub fn total(&self) -> usize {
        self.helix.len() + self.strand.len() + self.coil.len()
    }

    /// Summary of one bucket, or `None` when it is empty.
    pub fn summary(&self, structure: SecondaryStructure) -> Option<AngleSummary> {
        let bucket = self.bucket(structure);
        if bucket.is_empty() {
            return None;
        }

        let count = bucket.len();
        let mean_alpha = bucket.iter().map(|(alpha, _)| alpha).sum::<f64>() / count as f64;
        let (sin_sum, cos_sum) = bucket.iter().fold((0.0, 0.0), |(s, c), (_, theta)| {
            let (sin, cos) = theta.to_radians().sin_cos();
            (s + sin, c + cos)
        });

        Some(AngleSummary {
            count,
            mean_alpha,
            mean_theta: sin_sum.atan2(cos_sum).to_degrees(),
        })
    }
}
