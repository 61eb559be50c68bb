use metroscape_core::{
    analysis::{
        climate::{assess_climate_risk, assess_infrastructure},
        index::compare_index,
        mobility::estimate_air_quality,
    },
    simulation::simulate_waste,
    Validation,
};
use metroscape_schemas::{
    index::{IndexHistory, IndexName, IndexSeries},
    inputs::{InfrastructureCategory, WasteInputs},
    status::Tier,
    waste::WasteModelConstants,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn waste_inputs(growth: f64, economic: f64, policy: u32, cost: u32) -> WasteInputs {
    WasteInputs {
        population_growth_pct: growth,
        economic_index: economic,
        policy_effectiveness_pct: policy,
        landfill_cost_usd_per_ton: cost,
    }
}

#[test]
fn baseline_waste_scenario() {
    let outcome = simulate_waste(
        &WasteModelConstants::default(),
        waste_inputs(0.0, 1.0, 50, 0),
        Validation::Lenient,
    )
    .unwrap();

    assert!(close(outcome.total_monthly_tons, 12_000.0));
    assert!(close(outcome.streams.residential, 7_200.0));
    assert!(close(outcome.streams.commercial, 3_000.0));
    assert!(close(outcome.streams.organics, 1_800.0));
    assert!(close(outcome.streams.construction_and_demolition, 600.0));

    assert!(close(outcome.diverted.residential_recycled, 1_440.0));
    assert!(close(outcome.diverted.commercial_recycled, 1_950.0));
    assert!(close(outcome.diverted.organics_composted, 810.0));
    assert!(close(outcome.total_diverted_tons, 4_200.0));
    assert!(close(outcome.disposed_to_landfill_tons, 8_400.0));
    assert!(close(outcome.diversion_percent, 35.0));

    assert_eq!(outcome.diversion_status.tier, Tier::Warning);
    assert_eq!(outcome.diversion_status.title, "Moderate diversion");

    // 120000 / (8400 * 12)
    let years = outcome.lifespan.years().unwrap();
    assert!(close(years, 120_000.0 / 100_800.0));
    assert_eq!(outcome.lifespan_status.tier, Tier::Critical);
    assert!(close(outcome.lifespan_bar_percent, years / 50.0 * 100.0));
}

#[test]
fn diverted_and_landfill_bound_partition_non_cd_waste() {
    let constants = WasteModelConstants::default();
    for growth in [-20.0, 0.0, 15.0] {
        for economic in [0.5, 1.0, 2.0] {
            for policy in [0, 35, 100] {
                for cost in [0, 40, 120] {
                    let outcome =
                        simulate_waste(&constants, waste_inputs(growth, economic, policy, cost), Validation::Lenient)
                            .unwrap();
                    let landfill_excluding_cd = (outcome.disposed_to_landfill_tons
                        - outcome.streams.construction_and_demolition)
                        / outcome.total_monthly_tons
                        * 100.0;
                    assert!(
                        close(outcome.diversion_percent + landfill_excluding_cd, 100.0),
                        "growth={growth} economic={economic} policy={policy} cost={cost}"
                    );
                }
            }
        }
    }
}

#[test]
fn high_risk_climate_scenario() {
    let risk = assess_climate_risk(3.5, 20);
    assert!(close(risk.risk_score, 39.0));
    assert_eq!(risk.classification.tier, Tier::Critical);
    assert_eq!(risk.classification.class_name(), "critical");
    assert_eq!(risk.classification.title, "High Risk Scenario");
    assert!(risk.classification.message.contains("3.5°C"));
    assert!(risk.classification.message.contains("20%"));
}

#[test]
fn resilient_transport_scenario() {
    let verdict = assess_infrastructure(InfrastructureCategory::Transport, 0.5, 10);
    assert_eq!(verdict.tier, Tier::Good);
    assert_eq!(verdict.title, "Resilient");
}

#[test]
fn comparator_verdict_depends_on_index_direction() {
    let mut history = IndexHistory::default();
    history.human = IndexSeries {
        actual: vec![71.0],
        ideal: vec![70.0],
    };
    history.noise = IndexSeries {
        actual: vec![2.0, 3.0],
        ideal: vec![3.0, 3.0],
    };

    assert_eq!(
        compare_index(IndexName::Human, &history).unwrap().classification.tier,
        Tier::Good
    );
    assert_eq!(
        compare_index(IndexName::Noise, &history).unwrap().classification.tier,
        Tier::Good
    );
    assert_eq!(
        compare_index(IndexName::Water, &history).unwrap().classification.tier,
        Tier::Warning
    );
}

#[test]
fn air_quality_floor_holds_over_slider_range() {
    for traffic in 0..=100 {
        for ev in 0..=100 {
            assert!(estimate_air_quality(traffic, ev, Validation::Strict).unwrap() >= 10.0);
        }
    }
}
