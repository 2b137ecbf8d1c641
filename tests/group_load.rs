use electrical_load_toolbox::load::{
    aggregate_group, compute_group_load, GroupLoadInput, LoadCalcError,
};

fn worksheet_example() -> GroupLoadInput {
    GroupLoadInput {
        nominal_power_kw: 26.0,
        usage_coefficient: 0.27,
        tangent_phi: 1.62,
    }
}

#[test]
fn worksheet_aggregates_match_reference_row() {
    let agg = aggregate_group(worksheet_example());
    assert!((agg.machine_group_power_kw - 104.0).abs() < 1e-12);
    assert!((agg.connected_power_kw - 480.0).abs() < 1e-12);
    assert!((agg.demand_power_kw - 101.56).abs() < 1e-9);
    assert!((agg.squared_power_sum - 15896.0).abs() < 1e-9);
    assert!((agg.demand_reactive_kvar - 115.704).abs() < 1e-9);
}

#[test]
fn derived_loads_match_reference_row() {
    let res = compute_group_load(worksheet_example()).expect("group calc");
    assert!((res.usage_coefficient - 101.56 / 480.0).abs() < 1e-12);
    assert_eq!(res.effective_receiver_count, 15);
    assert!((res.active_load_kw - 126.95).abs() < 1e-9);
    assert!((res.reactive_load_kvar - 115.704).abs() < 1e-9);
    let expected_apparent = (126.95f64.powi(2) + 115.704f64.powi(2)).sqrt();
    assert!((res.apparent_power_kva - expected_apparent).abs() < 1e-9);
    assert!((res.design_current_a - 126.95 / 0.38).abs() < 1e-9);
}

#[test]
fn effective_count_truncates_after_adding_one() {
    // 480²/15896 ≈ 14.494 → +1 → 15.494 → 정수부 15
    let res = compute_group_load(worksheet_example()).expect("group calc");
    assert_eq!(res.effective_receiver_count, 15);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = worksheet_example();
    let a = compute_group_load(input).expect("first call");
    let b = compute_group_load(input).expect("second call");
    assert_eq!(a.usage_coefficient.to_bits(), b.usage_coefficient.to_bits());
    assert_eq!(a.effective_receiver_count, b.effective_receiver_count);
    assert_eq!(a.active_load_kw.to_bits(), b.active_load_kw.to_bits());
    assert_eq!(a.reactive_load_kvar.to_bits(), b.reactive_load_kvar.to_bits());
    assert_eq!(a.apparent_power_kva.to_bits(), b.apparent_power_kva.to_bits());
    assert_eq!(a.design_current_a.to_bits(), b.design_current_a.to_bits());
}

#[test]
fn zero_nominal_power_stays_finite() {
    // 고정 가산항 때문에 분모가 0이 되지 않는다.
    let res = compute_group_load(GroupLoadInput {
        nominal_power_kw: 0.0,
        usage_coefficient: 0.27,
        tangent_phi: 1.62,
    })
    .expect("boundary calc");
    assert!(res.usage_coefficient.is_finite());
    assert!(res.apparent_power_kva.is_finite());
    assert!(res.effective_receiver_count > 0);

    let agg = aggregate_group(GroupLoadInput {
        nominal_power_kw: 0.0,
        usage_coefficient: 0.27,
        tangent_phi: 1.62,
    });
    assert!((agg.connected_power_kw - 376.0).abs() < 1e-12);
    assert!((agg.squared_power_sum - 13192.0).abs() < 1e-9);
}

#[test]
fn non_finite_inputs_are_rejected() {
    let mut input = worksheet_example();
    input.nominal_power_kw = f64::NAN;
    assert_eq!(
        compute_group_load(input),
        Err(LoadCalcError::NonFiniteInput("nominal_power_kw"))
    );

    let mut input = worksheet_example();
    input.usage_coefficient = f64::INFINITY;
    assert_eq!(
        compute_group_load(input),
        Err(LoadCalcError::NonFiniteInput("usage_coefficient"))
    );

    let mut input = worksheet_example();
    input.tangent_phi = f64::NEG_INFINITY;
    assert_eq!(
        compute_group_load(input),
        Err(LoadCalcError::NonFiniteInput("tangent_phi"))
    );
}
