use crate::analysis::ProteinAnalyzer;
use crate::types::{PhysicalProfile, StabilityStatus, StabilityVerdict};
use std::sync::Arc;

/// Minimum cleaned length for a stability verdict.
const MIN_STABILITY_LEN: usize = 5;
/// Minimum cleaned length for a physical profile. Deliberately stricter
/// than the stability threshold; the two checks are independent.
const MIN_PROFILE_LEN: usize = 10;

/// Scores proteins against the injected analyzer, substituting documented
/// fallbacks for degenerate input and analyzer failures.
pub struct Evaluator {
    analyzer: Arc<dyn ProteinAnalyzer>,
}

impl Evaluator {
    pub fn new(analyzer: Arc<dyn ProteinAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Strip stop and unknown-residue markers before analysis.
    fn clean(protein: &str) -> String {
        protein.chars().filter(|&c| c != '*' && c != 'X').collect()
    }

    /// Stability classification for a protein.
    ///
    /// Proteins shorter than 5 cleaned residues get the neutral `TooShort`
    /// verdict; an analyzer failure maps to the neutral `Error` verdict
    /// instead of aborting the run.
    pub fn stability(&self, protein: &str) -> StabilityVerdict {
        let cleaned = Self::clean(protein);
        if cleaned.len() < MIN_STABILITY_LEN {
            return StabilityVerdict::neutral(StabilityStatus::TooShort);
        }

        match self.analyzer.instability_index(&cleaned) {
            Ok(index) => StabilityVerdict {
                score: index,
                status: if index < 40.0 {
                    StabilityStatus::Stable
                } else {
                    StabilityStatus::Unstable
                },
            },
            Err(e) => {
                log::debug!("stability analysis failed: {}", e);
                StabilityVerdict::neutral(StabilityStatus::Error)
            }
        }
    }

    /// Structural and physicochemical profile, or `None` when the protein
    /// has fewer than 10 cleaned residues or the analyzer fails.
    ///
    /// Helix and sheet fractions are reported as percentages, weight in
    /// kilodaltons.
    pub fn physical_profile(&self, protein: &str) -> Option<PhysicalProfile> {
        let cleaned = Self::clean(protein);
        if cleaned.len() < MIN_PROFILE_LEN {
            return None;
        }

        match self.build_profile(&cleaned) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::debug!("profile analysis failed: {}", e);
                None
            }
        }
    }

    fn build_profile(&self, cleaned: &str) -> crate::error::Result<PhysicalProfile> {
        let (helix, _turn, sheet) = self.analyzer.secondary_structure_fraction(cleaned)?;

        Ok(PhysicalProfile {
            helix_pct: helix * 100.0,
            sheet_pct: sheet * 100.0,
            isoelectric_point: self.analyzer.isoelectric_point(cleaned)?,
            weight_kda: self.analyzer.molecular_weight(cleaned)? / 1000.0,
            aromaticity: self.analyzer.aromaticity(cleaned)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenomeLabError, Result};

    /// Fake analyzer returning fixed values.
    struct FixedAnalyzer {
        index: f64,
    }

    impl ProteinAnalyzer for FixedAnalyzer {
        fn instability_index(&self, _protein: &str) -> Result<f64> {
            Ok(self.index)
        }

        fn secondary_structure_fraction(&self, _protein: &str) -> Result<(f64, f64, f64)> {
            Ok((0.25, 0.1, 0.5))
        }

        fn isoelectric_point(&self, _protein: &str) -> Result<f64> {
            Ok(7.2)
        }

        fn molecular_weight(&self, _protein: &str) -> Result<f64> {
            Ok(1500.0)
        }

        fn aromaticity(&self, _protein: &str) -> Result<f64> {
            Ok(0.3)
        }
    }

    /// Fake analyzer that fails every call.
    struct FailingAnalyzer;

    impl ProteinAnalyzer for FailingAnalyzer {
        fn instability_index(&self, _protein: &str) -> Result<f64> {
            Err(GenomeLabError::Analyzer("broken".to_string()))
        }

        fn secondary_structure_fraction(&self, _protein: &str) -> Result<(f64, f64, f64)> {
            Err(GenomeLabError::Analyzer("broken".to_string()))
        }

        fn isoelectric_point(&self, _protein: &str) -> Result<f64> {
            Err(GenomeLabError::Analyzer("broken".to_string()))
        }

        fn molecular_weight(&self, _protein: &str) -> Result<f64> {
            Err(GenomeLabError::Analyzer("broken".to_string()))
        }

        fn aromaticity(&self, _protein: &str) -> Result<f64> {
            Err(GenomeLabError::Analyzer("broken".to_string()))
        }
    }

    #[test]
    fn short_protein_gets_too_short_verdict() {
        let evaluator = Evaluator::new(Arc::new(FixedAnalyzer { index: 10.0 }));

        let verdict = evaluator.stability("MKT");
        assert_eq!(verdict.status, StabilityStatus::TooShort);
        assert_eq!(verdict.score, 100.0);
    }

    #[test]
    fn markers_are_stripped_before_the_length_check() {
        let evaluator = Evaluator::new(Arc::new(FixedAnalyzer { index: 10.0 }));

        // 6 symbols but only 4 cleaned residues.
        let verdict = evaluator.stability("MK*XTA");
        assert_eq!(verdict.status, StabilityStatus::TooShort);
    }

    #[test]
    fn index_below_forty_is_stable() {
        let evaluator = Evaluator::new(Arc::new(FixedAnalyzer { index: 39.9 }));

        let verdict = evaluator.stability("MKTAY");
        assert_eq!(verdict.status, StabilityStatus::Stable);
        assert_eq!(verdict.score, 39.9);
    }

    #[test]
    fn index_at_forty_is_unstable() {
        let evaluator = Evaluator::new(Arc::new(FixedAnalyzer { index: 40.0 }));

        let verdict = evaluator.stability("MKTAY");
        assert_eq!(verdict.status, StabilityStatus::Unstable);
    }

    #[test]
    fn analyzer_failure_maps_to_neutral_error_verdict() {
        let evaluator = Evaluator::new(Arc::new(FailingAnalyzer));

        let verdict = evaluator.stability("MKTAY");
        assert_eq!(verdict.status, StabilityStatus::Error);
        assert_eq!(verdict.score, 100.0);
    }

    #[test]
    fn profile_is_undefined_below_ten_residues() {
        let evaluator = Evaluator::new(Arc::new(FixedAnalyzer { index: 10.0 }));

        // 9 cleaned residues: long enough for stability, not for a profile.
        assert!(evaluator.physical_profile("MKTAYMKTA").is_none());
        assert_eq!(
            evaluator.stability("MKTAYMKTA").status,
            StabilityStatus::Stable
        );
    }

    #[test]
    fn profile_converts_units() {
        let evaluator = Evaluator::new(Arc::new(FixedAnalyzer { index: 10.0 }));

        let profile = evaluator.physical_profile("MKTAYMKTAY").unwrap();
        assert!((profile.helix_pct - 25.0).abs() < 1e-12);
        assert!((profile.sheet_pct - 50.0).abs() < 1e-12);
        assert!((profile.weight_kda - 1.5).abs() < 1e-12);
        assert!((profile.isoelectric_point - 7.2).abs() < 1e-12);
        assert!((profile.aromaticity - 0.3).abs() < 1e-12);
    }

    #[test]
    fn analyzer_failure_leaves_profile_undefined() {
        let evaluator = Evaluator::new(Arc::new(FailingAnalyzer));
        assert!(evaluator.physical_profile("MKTAYMKTAY").is_none());
    }
}
