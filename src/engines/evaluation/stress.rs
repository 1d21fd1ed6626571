use crate::types::PhysicalProfile;

/// Ambient temperature above which heat stress sets in, in degrees Celsius.
const HEAT_ONSET_C: f64 = 40.0;

/// Survival multiplier in [0, 100] for a protein under ambient conditions.
///
/// Starts at 100 and loses two independent penalties:
/// - heat, only above 40 degrees C, damped by aromaticity (aromatic residues
///   confer heat tolerance);
/// - pH, proportional to the distance between ambient pH and the protein's
///   isoelectric point.
///
/// An individual without a profile cannot be scored for survival and gets 0.
pub fn survival_multiplier(
    profile: Option<&PhysicalProfile>,
    temperature_c: f64,
    ph: f64,
) -> f64 {
    let profile = match profile {
        Some(profile) => profile,
        None => return 0.0,
    };

    let mut survival = 100.0;

    if temperature_c > HEAT_ONSET_C {
        survival -= (temperature_c - HEAT_ONSET_C) * (1.0 - profile.aromaticity) * 5.0;
    }

    survival -= (ph - profile.isoelectric_point).abs() * 10.0;

    survival.clamp(0.0, 100.0)
}
