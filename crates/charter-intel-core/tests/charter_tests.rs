use charter_intel_core::charter::{
    assess_charter, calculate_charter_incentives, get_category_from_location, get_minimum_threshold,
    is_charter_eligible, validate_charter_input, CharterCalculationInput, CharterCategory,
    CharterSchedule, PartialCharterInput,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn plain(price: Decimal, category: CharterCategory) -> CharterCalculationInput {
    CharterCalculationInput {
        acquisition_price_mad: price,
        charter_category: category,
        is_renovation: false,
        renovation_cost_mad: Decimal::ZERO,
        employment_created: 0,
    }
}

fn with_jobs(jobs: i64) -> CharterCalculationInput {
    CharterCalculationInput {
        employment_created: jobs,
        ..plain(dec!(2000000), CharterCategory::B)
    }
}

/// A spread of valid inputs across categories, renovation and job counts.
fn input_grid() -> Vec<CharterCalculationInput> {
    let mut out = Vec::new();
    for category in CharterCategory::ALL {
        for price in [dec!(1000000), dec!(2750000.50), dec!(9999999)] {
            for (renovation, cost) in [(false, dec!(0)), (true, dec!(1)), (true, dec!(375000))] {
                for jobs in [0, 1, 7, 20, 150] {
                    out.push(CharterCalculationInput {
                        acquisition_price_mad: price,
                        charter_category: category,
                        is_renovation: renovation,
                        renovation_cost_mad: cost,
                        employment_created: jobs,
                    });
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn test_eligible_investment_is_price_plus_renovation() {
    for input in input_grid() {
        let r = calculate_charter_incentives(&input);
        assert_eq!(r.eligible_investment_mad, input.acquisition_price_mad + input.renovation_cost_mad);
    }
}

#[test]
fn test_total_is_base_plus_bonus() {
    for input in input_grid() {
        let r = calculate_charter_incentives(&input);
        assert_eq!(r.total_cashback_pct, r.base_cashback_pct + r.bonus_pct);
    }
}

#[test]
fn test_cashback_is_unrounded_product() {
    for input in input_grid() {
        let r = calculate_charter_incentives(&input);
        assert_eq!(
            r.estimated_cashback_mad,
            r.eligible_investment_mad * r.total_cashback_pct / dec!(100)
        );
    }
}

#[test]
fn test_calculation_is_deterministic() {
    for input in input_grid() {
        assert_eq!(calculate_charter_incentives(&input), calculate_charter_incentives(&input));
    }
}

#[test]
fn test_base_rate_depends_only_on_category() {
    for input in input_grid() {
        let expected = match input.charter_category {
            CharterCategory::A => dec!(10),
            CharterCategory::B => dec!(15),
            CharterCategory::C => dec!(20),
        };
        assert_eq!(calculate_charter_incentives(&input).base_cashback_pct, expected);
    }
}

// ---------------------------------------------------------------------------
// Bonuses
// ---------------------------------------------------------------------------

#[test]
fn test_renovation_bonus_is_flat() {
    let small = CharterCalculationInput {
        is_renovation: true,
        renovation_cost_mad: dec!(1),
        ..plain(dec!(2000000), CharterCategory::B)
    };
    let large = CharterCalculationInput {
        renovation_cost_mad: dec!(1000000),
        ..small.clone()
    };
    assert_eq!(calculate_charter_incentives(&small).bonus_pct, dec!(5));
    assert_eq!(calculate_charter_incentives(&large).bonus_pct, dec!(5));
}

#[test]
fn test_employment_bonus_caps_at_ten_points() {
    let twenty = calculate_charter_incentives(&with_jobs(20)).bonus_pct;
    let hundred = calculate_charter_incentives(&with_jobs(100)).bonus_pct;
    let five = calculate_charter_incentives(&with_jobs(5)).bonus_pct;
    assert_eq!(twenty, dec!(10));
    assert_eq!(hundred, twenty);
    assert_eq!(five, dec!(2.5));
    assert!(twenty > five);
}

#[test]
fn test_bonuses_stack() {
    let input = CharterCalculationInput {
        is_renovation: true,
        renovation_cost_mad: dec!(500000),
        employment_created: 40,
        ..plain(dec!(3000000), CharterCategory::A)
    };
    let r = calculate_charter_incentives(&input);
    assert_eq!(r.bonus_pct, dec!(15));
    assert_eq!(r.total_cashback_pct, dec!(25));
    assert_eq!(r.estimated_cashback_mad, dec!(875000));
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_marrakech_riad() {
    let r = calculate_charter_incentives(&plain(dec!(5100000), CharterCategory::A));
    assert_eq!(r.base_cashback_pct, dec!(10));
    assert_eq!(r.bonus_pct, dec!(0));
    assert_eq!(r.total_cashback_pct, dec!(10));
    assert_eq!(r.eligible_investment_mad, dec!(5100000));
    assert_eq!(r.estimated_cashback_mad, dec!(510000));
}

#[test]
fn test_scenario_emerging_zone_renovation_with_jobs() {
    let input: CharterCalculationInput =
        serde_json::from_str(include_str!("../../../data/charter_input.json")).unwrap();
    let r = calculate_charter_incentives(&input);
    assert_eq!(r.eligible_investment_mad, dec!(1500000));
    assert_eq!(r.base_cashback_pct, dec!(20));
    assert_eq!(r.bonus_pct, dec!(11));
    assert_eq!(r.total_cashback_pct, dec!(31));
    assert_eq!(r.estimated_cashback_mad, dec!(465000));
}

#[test]
fn test_amounts_at_decimal_limit_saturate() {
    let r = calculate_charter_incentives(&CharterCalculationInput {
        acquisition_price_mad: dec!(10000000000000000000000000000),
        charter_category: CharterCategory::C,
        is_renovation: true,
        renovation_cost_mad: dec!(1),
        employment_created: 0,
    });
    assert_eq!(r.total_cashback_pct, dec!(25));
    assert_eq!(r.eligible_investment_mad, dec!(10000000000000000000000000001));
    assert_eq!(r.estimated_cashback_mad, Decimal::MAX / dec!(100));
}

#[test]
fn test_assessment_at_decimal_limit() {
    let a = assess_charter(&CharterCalculationInput {
        acquisition_price_mad: Decimal::MAX,
        charter_category: CharterCategory::A,
        is_renovation: true,
        renovation_cost_mad: Decimal::MAX,
        employment_created: i64::MAX,
    });
    assert!(a.eligible);
    assert_eq!(a.shortfall_mad, Decimal::ZERO);
    assert_eq!(a.result.eligible_investment_mad, Decimal::MAX);
    assert_eq!(a.result.total_cashback_pct, dec!(25));

    let negative = assess_charter(&CharterCalculationInput {
        acquisition_price_mad: Decimal::MIN,
        charter_category: CharterCategory::A,
        is_renovation: false,
        renovation_cost_mad: Decimal::MIN,
        employment_created: 0,
    });
    assert!(!negative.eligible);
    assert_eq!(negative.result.eligible_investment_mad, Decimal::MIN);
    assert_eq!(negative.shortfall_mad, Decimal::MAX);
}

#[test]
fn test_decree_reference_by_category() {
    let refs: Vec<String> = CharterCategory::ALL
        .into_iter()
        .map(|c| calculate_charter_incentives(&plain(dec!(1), c)).decree_reference)
        .collect();
    assert_eq!(
        refs,
        vec![
            "Décret n° 2-22-XXX / Art. 15",
            "Décret n° 2-22-XXX / Art. 16",
            "Décret n° 2-22-XXX / Art. 17",
        ]
    );
}

// ---------------------------------------------------------------------------
// Lookups and eligibility
// ---------------------------------------------------------------------------

#[test]
fn test_eligibility_boundary_is_inclusive() {
    assert!(is_charter_eligible(dec!(5000000), CharterCategory::A));
    assert!(!is_charter_eligible(dec!(4999999), CharterCategory::A));
}

#[test]
fn test_eligibility_matches_threshold_table() {
    for category in CharterCategory::ALL {
        let t = get_minimum_threshold(category);
        assert!(is_charter_eligible(t, category));
        assert!(!is_charter_eligible(t - dec!(0.01), category));
    }
}

#[test]
fn test_location_normalisation() {
    assert_eq!(get_category_from_location("Marrakech"), CharterCategory::A);
    assert_eq!(get_category_from_location("  marrakech  "), CharterCategory::A);
    assert_eq!(get_category_from_location("Unknown City"), CharterCategory::C);
    assert_eq!(get_category_from_location("MEKNES"), CharterCategory::B);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_empty_input() {
    let report = validate_charter_input(&PartialCharterInput::default());
    assert!(!report.valid);
    assert!(report.errors.contains(&"Acquisition price must be positive".to_string()));
    assert!(report.errors.contains(&"Charter category is required".to_string()));
}

#[test]
fn test_validation_is_advisory() {
    let input = CharterCalculationInput {
        employment_created: -3,
        ..plain(dec!(-50000), CharterCategory::C)
    };
    let assessment = assess_charter(&input);
    assert!(!assessment.validation.valid);
    assert_eq!(assessment.result.estimated_cashback_mad, dec!(-10000));
    assert!(!assessment.eligible);
}

// ---------------------------------------------------------------------------
// Schedule overrides
// ---------------------------------------------------------------------------

#[test]
fn test_override_schedule_from_json() {
    let schedule = CharterSchedule::from_json_str(
        r#"{
            "base_cashback_pct": { "A": "8", "B": "12", "C": "18" },
            "decree_references": { "A": "Décret 2-26-001 / Art. 3", "B": "Décret 2-26-001 / Art. 4", "C": "Décret 2-26-001 / Art. 5" },
            "zones": { "Oujda": "B" }
        }"#,
    )
    .unwrap();

    let r = schedule.calculate(&plain(dec!(5100000), CharterCategory::A));
    assert_eq!(r.base_cashback_pct, dec!(8));
    assert_eq!(r.estimated_cashback_mad, dec!(408000));
    assert_eq!(r.decree_reference, "Décret 2-26-001 / Art. 3");
    assert_eq!(schedule.category_for_location(" OUJDA "), CharterCategory::B);
    // Built-in schedule is untouched.
    assert_eq!(get_category_from_location("Oujda"), CharterCategory::C);
}

#[test]
fn test_schedule_round_trips_through_json() {
    let json = serde_json::to_string(&CharterSchedule::default()).unwrap();
    let back = CharterSchedule::from_json_str(&json).unwrap();
    assert_eq!(back, CharterSchedule::default());
}
