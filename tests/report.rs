use electrical_load_toolbox::i18n::keys;
use electrical_load_toolbox::load::{
    busbar_rows, compute_busbar_load, compute_group_load, csv_report, report_rows, GroupLoadInput,
};

fn example_rows() -> Vec<electrical_load_toolbox::load::ReportRow> {
    let group = compute_group_load(GroupLoadInput {
        nominal_power_kw: 26.0,
        usage_coefficient: 0.27,
        tangent_phi: 1.62,
    })
    .expect("group calc");
    let busbar = compute_busbar_load();
    report_rows(&group, &busbar)
}

fn value_of<'a>(rows: &'a [electrical_load_toolbox::load::ReportRow], key: &str) -> &'a str {
    rows.iter()
        .find(|r| r.label_key == key)
        .map(|r| r.value.as_str())
        .expect("row present")
}

#[test]
fn report_has_fourteen_rows_in_card_order() {
    let rows = example_rows();
    assert_eq!(rows.len(), 14);
    let order: Vec<&str> = rows.iter().map(|r| r.label_key).collect();
    assert_eq!(
        order,
        vec![
            keys::REPORT_GROUP_KV,
            keys::REPORT_GROUP_EFFECTIVE,
            keys::REPORT_GROUP_LOAD_FACTOR,
            keys::REPORT_GROUP_ACTIVE,
            keys::REPORT_GROUP_REACTIVE,
            keys::REPORT_GROUP_APPARENT,
            keys::REPORT_GROUP_CURRENT,
            keys::REPORT_BUSBAR_KV,
            keys::REPORT_BUSBAR_EFFECTIVE,
            keys::REPORT_BUSBAR_DEMAND_FACTOR,
            keys::REPORT_BUSBAR_ACTIVE,
            keys::REPORT_BUSBAR_REACTIVE,
            keys::REPORT_BUSBAR_APPARENT,
            keys::REPORT_BUSBAR_CURRENT,
        ]
    );
}

#[test]
fn fixed_precision_matches_original_card() {
    let rows = example_rows();
    assert_eq!(value_of(&rows, keys::REPORT_GROUP_KV), "0.2116");
    assert_eq!(value_of(&rows, keys::REPORT_GROUP_EFFECTIVE), "15");
    assert_eq!(value_of(&rows, keys::REPORT_GROUP_ACTIVE), "126.95");
    assert_eq!(value_of(&rows, keys::REPORT_GROUP_REACTIVE), "115.70");
    assert_eq!(value_of(&rows, keys::REPORT_GROUP_CURRENT), "334.08");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_KV), "0.32");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_EFFECTIVE), "56");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_ACTIVE), "526.4");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_REACTIVE), "459.9");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_APPARENT), "699");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_CURRENT), "1385.26");

    // 피상 전력 행은 소수 3자리
    let apparent = value_of(&rows, keys::REPORT_GROUP_APPARENT);
    let parsed: f64 = apparent.parse().expect("numeric value");
    assert!((parsed - 171.766).abs() < 0.01, "apparent={apparent}");
    assert_eq!(apparent.split('.').nth(1).map(str::len), Some(3));
}

#[test]
fn static_factor_rows_are_literals() {
    let rows = example_rows();
    assert_eq!(value_of(&rows, keys::REPORT_GROUP_LOAD_FACTOR), "1.25");
    assert_eq!(value_of(&rows, keys::REPORT_BUSBAR_DEMAND_FACTOR), "0.7");
}

#[test]
fn busbar_rows_are_the_card_tail() {
    // CLI 모선 메뉴와 전체 카드가 같은 행/자릿수를 쓴다.
    let busbar = compute_busbar_load();
    let tail = busbar_rows(&busbar);
    assert_eq!(tail.len(), 7);

    let full = example_rows();
    for (a, b) in tail.iter().zip(&full[7..]) {
        assert_eq!(a.label_key, b.label_key);
        assert_eq!(a.value, b.value);
    }
}

#[test]
fn csv_export_quotes_labels() {
    let rows = example_rows();
    let csv = csv_report(&rows, |key| format!("label,{key}"));
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 15); // 헤더 + 14행
    assert_eq!(lines[0], "label,value");
    assert!(lines[1].starts_with("\"label,report.group_kv\","));
}
