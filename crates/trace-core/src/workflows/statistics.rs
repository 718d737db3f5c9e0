use crate::core::models::features::FeatureVector;
use crate::core::statistics::{
    HecDistribution, SecondaryStructure, angles_by_secondary_structure,
};
use crate::engine::error::EngineError;
use tracing::{info, instrument};

/// Builds helix, strand and coil angle distributions over many vectors.
///
/// `structures` is paired positionally with `vectors`. A single structure is applied to
/// every vector; any other count mismatch is rejected.
#[instrument(skip_all, name = "statistics_workflow", fields(vectors = vectors.len()))]
pub fn run(
    structures: &[Vec<SecondaryStructure>],
    vectors: &[FeatureVector],
) -> Result<HecDistribution, EngineError> {
    if structures.len() != 1 && structures.len() != vectors.len() {
        return Err(EngineError::MalformedInput(format!(
            "{} secondary structure strings for {} feature vectors",
            structures.len(),
            vectors.len()
        )));
    }

    let mut distribution = HecDistribution::default();
    for (i, features) in vectors.iter().enumerate() {
        let ss = if structures.len() == 1 {
            &structures[0]
        } else {
            &structures[i]
        };
        distribution.extend(&angles_by_secondary_structure(ss, features)?);
    }

    info!(
        helix = distribution.helix.len(),
        strand = distribution.strand.len(),
        coil = distribution.coil.len(),
        "Collected angle statistics."
    );
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::features::ResidueAngles;
    use crate::core::statistics::parse_secondary_structure;
    use nalgebra::Vector3;

    fn features(angles: &[(f64, f64)]) -> FeatureVector {
        let residues: Vec<_> = angles
            .iter()
            .map(|&(alpha, theta)| ResidueAngles::from_degrees(alpha, theta))
            .collect();
        FeatureVector::from_parts(Vector3::new(0.0, 0.0, 9.0), &residues).unwrap()
    }

    #[test]
    fn pairs_each_vector_with_its_own_structure() {
        let vectors = [
            features(&[(90.0, 50.0), (95.0, 55.0)]),
            features(&[(120.0, -160.0), (100.0, 70.0)]),
        ];
        let structures = [
            parse_secondary_structure("HH").unwrap(),
            parse_secondary_structure("EC").unwrap(),
        ];

        let distribution = run(&structures, &vectors).unwrap();

        assert_eq!(distribution.helix.len(), 2);
        assert_eq!(distribution.strand.len(), 1);
        assert_eq!(distribution.coil.len(), 1);
        assert!((distribution.strand[0].0 - 120.0).abs() < 1e-9);
    }

    #[test]
    fn a_single_structure_applies_to_every_vector() {
        let vectors = [features(&[(90.0, 50.0)]), features(&[(92.0, 48.0)])];
        let structures = [parse_secondary_structure("C").unwrap()];

        let distribution = run(&structures, &vectors).unwrap();

        assert_eq!(distribution.coil.len(), 2);
        assert_eq!(distribution.total(), 2);
    }

    #[test]
    fn mismatched_counts_are_rejected() {
        let vectors = [features(&[(90.0, 50.0)])];
        let structures = [
            parse_secondary_structure("H").unwrap(),
            parse_secondary_structure("E").unwrap(),
        ];

        assert!(matches!(
            run(&structures, &vectors),
            Err(EngineError::MalformedInput(_))
        ));
    }
}
