//! Gordon-Taylor glass-transition modeling for amorphous dispersions.

use crate::core::constants::{
    ASD_BORDERLINE_MARGIN, ASD_STABLE_MARGIN, ASD_STORAGE_TEMPERATURE, CELSIUS_TO_KELVIN,
    KAUZMANN_OFFSET,
};
use serde::Serialize;

/// Three-band amorphous dispersion stability call, from the margin between
/// the mixture Tg and the storage temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AsdStability {
    /// Tg_mix at least 50 K above storage.
    Stable,
    /// Margin between 30 and 50 K: monitor.
    Borderline,
    /// Margin under 30 K: recrystallization risk on storage.
    Risk,
}

/// Glass-transition summary for one drug-polymer pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlassReport {
    /// Gordon-Taylor mixture Tg, °C.
    pub tg_mix: f64,
    /// Kauzmann temperature Tg_mix − 50, °C.
    pub kauzmann: f64,
    pub stability: AsdStability,
}

/// Gordon-Taylor mixture Tg in °C.
///
/// `drug_loading` is the API mass fraction w. With K the ratio of absolute
/// glass transitions, Tg_mix = (w·Tg1 + K·(1−w)·Tg2) / (w + K·(1−w)), all in
/// Kelvin.
pub fn gordon_taylor(api_tg: f64, polymer_tg: f64, drug_loading: f64) -> f64 {
    let tg1 = api_tg + CELSIUS_TO_KELVIN;
    let tg2 = polymer_tg + CELSIUS_TO_KELVIN;
    let w = drug_loading.clamp(0.0, 1.0);
    let k = tg1 / tg2;
    let mix = (w * tg1 + k * (1.0 - w) * tg2) / (w + k * (1.0 - w));
    mix - CELSIUS_TO_KELVIN
}

/// Full glass report for a drug-polymer pair at the standard storage
/// temperature.
pub fn report(api_tg: f64, polymer_tg: f64, drug_loading: f64) -> GlassReport {
    let tg_mix = gordon_taylor(api_tg, polymer_tg, drug_loading);
    let margin = tg_mix - ASD_STORAGE_TEMPERATURE;
    let stability = if margin >= ASD_STABLE_MARGIN {
        AsdStability::Stable
    } else if margin >= ASD_BORDERLINE_MARGIN {
        AsdStability::Borderline
    } else {
        AsdStability::Risk
    };
    GlassReport {
        tg_mix,
        kauzmann: tg_mix - KAUZMANN_OFFSET,
        stability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn pure_components_recover_their_own_tg() {
        assert_close(gordon_taylor(60.0, 163.0, 1.0), 60.0, 1e-9);
        assert_close(gordon_taylor(60.0, 163.0, 0.0), 163.0, 1e-9);
    }

    #[test]
    fn mixture_tg_lies_between_the_pure_values() {
        let mix = gordon_taylor(60.0, 163.0, 0.3);
        assert!(mix > 60.0 && mix < 163.0);
        // More polymer pushes the mixture toward the polymer Tg.
        assert!(gordon_taylor(60.0, 163.0, 0.2) > gordon_taylor(60.0, 163.0, 0.5));
    }

    #[test]
    fn stability_bands_follow_the_storage_margin() {
        // High-Tg polymer at low loading clears the stable margin.
        assert_eq!(report(60.0, 172.0, 0.2).stability, AsdStability::Stable);
        // PEG-like carrier drags the mixture Tg near storage temperature.
        assert_eq!(report(60.0, -20.0, 0.3).stability, AsdStability::Risk);
    }

    #[test]
    fn kauzmann_sits_fifty_degrees_below_the_mixture_tg() {
        let report = report(80.0, 120.0, 0.25);
        assert_close(report.kauzmann, report.tg_mix - 50.0, 1e-9);
    }
}
