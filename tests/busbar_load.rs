use electrical_load_toolbox::load::{compute_busbar_load, BUSBAR_DEMAND_FACTOR};

#[test]
fn totals_match_worksheet_constants() {
    let res = compute_busbar_load();
    assert!((res.usage_coefficient - 752.0 / 2330.0).abs() < 1e-12);
    assert_eq!(res.effective_receiver_count, 56);
    assert!((res.active_load_kw - 526.4).abs() < 1e-9);
    assert!((res.reactive_load_kvar - 459.9).abs() < 1e-9);
    // sqrt(526.4² + 459.9²) ≈ 699.0028 → 정수부 699
    assert_eq!(res.apparent_power_kva, 699);
    assert!((res.design_current_a - 526.4 / 0.38).abs() < 1e-9);
}

#[test]
fn totals_row_truncates_without_adding_one() {
    // 2330²/96399 ≈ 56.317. 그룹 행과 달리 +1 없이 끊는다.
    let res = compute_busbar_load();
    assert_eq!(res.effective_receiver_count, 56);
}

#[test]
fn every_call_is_identical() {
    let a = compute_busbar_load();
    let b = compute_busbar_load();
    assert_eq!(a, b);
    assert_eq!(a.usage_coefficient.to_bits(), b.usage_coefficient.to_bits());
    assert_eq!(a.active_load_kw.to_bits(), b.active_load_kw.to_bits());
    assert_eq!(a.design_current_a.to_bits(), b.design_current_a.to_bits());
}

#[test]
fn demand_factor_constant_is_displayed_value() {
    assert_eq!(BUSBAR_DEMAND_FACTOR.to_string(), "0.7");
}
