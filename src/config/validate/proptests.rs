//! Property-based tests for configuration validation

use super::validator::validate_config;
use crate::config::schema::*;
use crate::error::Error;
use crate::metrics::MetricKind;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = ThresholdConfig> {
    (
        1e-6f64..1.0,                        // psi default
        1e-6f64..1.0,                        // ks default
        proptest::option::of(1e-6f64..1.0),  // chi-square default
        proptest::option::of(1e-6f64..0.5),  // feature override
        2usize..50,                          // psi bins
    )
        .prop_map(|(psi, ks, chi, feature, bins)| {
            let mut config = ThresholdConfig::new()
                .with_default_threshold(MetricKind::Psi, psi)
                .with_default_threshold(MetricKind::Ks, ks)
                .with_psi_binning(bins, Default::default());
            if let Some(chi) = chi {
                config = config.with_default_threshold(MetricKind::ChiSquare, chi);
            }
            if let Some(feature) = feature {
                config = config.with_feature_threshold(MetricKind::Psi, "age", feature);
            }
            config
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_non_positive_default_fails(config in arb_valid_config(), bad in -10.0f64..=0.0) {
        let config = config.with_default_threshold(MetricKind::Ks, bad);
        let rejected = matches!(
            validate_config(&config),
            Err(Error::InvalidThreshold { metric: MetricKind::Ks, feature: None, .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_non_positive_override_fails(config in arb_valid_config(), bad in -10.0f64..=0.0) {
        let config = config.with_feature_threshold(MetricKind::Psi, "income", bad);
        let result = validate_config(&config);
        let rejected = matches!(
            result,
            Err(Error::InvalidThreshold { feature: Some(ref f), .. }) if f == "income"
        );
        prop_assert!(rejected);
    }
}
