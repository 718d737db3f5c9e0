use crate::core::utils::geometry::{bend_angle, dihedral_angle};
use nalgebra::Point3;

/// An immutable, ordered sequence of reconstructed carbon positions.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomChain {
    atoms: Vec<Point3<f64>>,
}

impl AtomChain {
    pub fn from_atoms(atoms: Vec<Point3<f64>>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[Point3<f64>] {
        &self.atoms
    }

    pub fn into_atoms(self) -> Vec<Point3<f64>> {
        self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn first(&self) -> Option<&Point3<f64>> {
        self.atoms.first()
    }

    pub fn last(&self) -> Option<&Point3<f64>> {
        self.atoms.last()
    }

    /// Straight-line distance between the first and the last atom.
    pub fn span(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (last - first).norm(),
            _ => 0.0,
        }
    }

    /// Distances between consecutive atoms.
    pub fn bond_lengths(&self) -> Vec<f64> {
        self.atoms.windows(2).map(|w| (w[1] - w[0]).norm()).collect()
    }

    /// Interior angles in degrees at every atom that has two neighbours.
    pub fn bend_angles(&self) -> Vec<f64> {
        self.atoms
            .windows(3)
            .map(|w| bend_angle(&w[0], &w[1], &w[2]))
            .collect()
    }

    /// Signed dihedral angles in degrees over every four consecutive atoms.
    pub fn dihedral_angles(&self) -> Vec<f64> {
        self.atoms
            .windows(4)
            .map(|w| dihedral_angle(&w[0], &w[1], &w[2], &w[3]))
            .collect()
    }
}
