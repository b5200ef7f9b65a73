//! Property tests for core reference data.

use civitas_core::types::{IndicatorCode, Municipality};
use civitas_core::{CostTable, Dataset, MacroRegion, RegionalFactors, UnitScale};
use proptest::prelude::*;

fn arb_scale() -> impl Strategy<Value = UnitScale> {
    prop_oneof![
        Just(UnitScale::Raw),
        Just(UnitScale::PerTenth),
        Just(UnitScale::PerHalf),
        Just(UnitScale::PerHundred),
        Just(UnitScale::PerThousand),
    ]
}

proptest! {
    #[test]
    fn increments_strictly_increasing(scale in arb_scale(), a in 0.0f64..1.0e6, b in 0.0f64..1.0e6) {
        prop_assume!((a - b).abs() > 1e-6);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(scale.increments(lo) < scale.increments(hi));
    }

    #[test]
    fn state_lookup_ignores_case_and_padding(i in 0usize..27, pad in 0usize..3) {
        let states = [
            "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA",
            "PB", "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
        ];
        let upper = states[i];
        let messy = format!("{}{}{}", " ".repeat(pad), upper.to_lowercase(), " ".repeat(pad));
        prop_assert!(MacroRegion::from_state(upper).is_some());
        prop_assert_eq!(MacroRegion::from_state(upper), MacroRegion::from_state(&messy));
    }

    #[test]
    fn regional_factors_within_published_range(state in "[A-Z]{2}") {
        let factor = RegionalFactors::standard().for_state(&state);
        prop_assert!((1.0..=1.25).contains(&factor));
    }

    #[test]
    fn non_finite_values_never_read(v in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]) {
        let m = Municipality::new("x", "X", "SP", 1, 0.5).with_indicator(IndicatorCode::PavedRoads, v);
        prop_assert_eq!(m.value(IndicatorCode::PavedRoads), None);
    }

    #[test]
    fn dataset_index_finds_every_id(n in 0usize..200) {
        let all: Vec<_> = (0..n)
            .map(|i| Municipality::new(format!("{i:07}"), "M", "SP", 1_000, 0.5))
            .collect();
        let ds = Dataset::new(all).unwrap();
        prop_assert_eq!(ds.len(), n);
        for i in 0..n {
            let id = format!("{i:07}");
            prop_assert_eq!(ds.get(&id).map(|m| m.id.as_str()), Some(id.as_str()));
        }
    }
}

#[test]
fn standard_cost_table_is_valid() {
    let table = CostTable::standard();
    assert_eq!(table.len(), IndicatorCode::ALL.len());
    assert!(table.validate().is_ok());
}
