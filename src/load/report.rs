//! 결과 카드 14행을 고정 소수 자릿수로 만든다. CLI/GUI가 같은 행을 쓴다.

use crate::i18n::keys;
use crate::load::busbar::{BusbarLoadResult, BUSBAR_DEMAND_FACTOR};
use crate::load::group::{GroupLoadResult, GROUP_LOAD_FACTOR};

/// 결과 카드 한 행. 라벨은 i18n 키로 들고 다니고 표시 직전에 번역한다.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub label_key: &'static str,
    pub value: String,
}

impl ReportRow {
    fn new(label_key: &'static str, value: String) -> Self {
        Self { label_key, value }
    }
}

/// 그룹 + 모선 결과를 원 결과 카드 순서/자릿수 그대로 14행으로 만든다.
/// "1.25"와 "0.7" 행은 계산값이 아니라 워크시트에 적힌 계수 자체다.
pub fn report_rows(group: &GroupLoadResult, busbar: &BusbarLoadResult) -> Vec<ReportRow> {
    let mut rows = vec![
        ReportRow::new(keys::REPORT_GROUP_KV, format!("{:.4}", group.usage_coefficient)),
        ReportRow::new(
            keys::REPORT_GROUP_EFFECTIVE,
            group.effective_receiver_count.to_string(),
        ),
        ReportRow::new(keys::REPORT_GROUP_LOAD_FACTOR, GROUP_LOAD_FACTOR.to_string()),
        ReportRow::new(keys::REPORT_GROUP_ACTIVE, format!("{:.2}", group.active_load_kw)),
        ReportRow::new(
            keys::REPORT_GROUP_REACTIVE,
            format!("{:.2}", group.reactive_load_kvar),
        ),
        ReportRow::new(
            keys::REPORT_GROUP_APPARENT,
            format!("{:.3}", group.apparent_power_kva),
        ),
        ReportRow::new(
            keys::REPORT_GROUP_CURRENT,
            format!("{:.2}", group.design_current_a),
        ),
    ];
    rows.extend(busbar_rows(busbar));
    rows
}

/// 모선 7행만 만든다. CLI의 모선 집계 메뉴와 전체 카드가 같은 행을 쓴다.
pub fn busbar_rows(busbar: &BusbarLoadResult) -> Vec<ReportRow> {
    vec![
        ReportRow::new(keys::REPORT_BUSBAR_KV, format!("{:.2}", busbar.usage_coefficient)),
        ReportRow::new(
            keys::REPORT_BUSBAR_EFFECTIVE,
            busbar.effective_receiver_count.to_string(),
        ),
        ReportRow::new(
            keys::REPORT_BUSBAR_DEMAND_FACTOR,
            BUSBAR_DEMAND_FACTOR.to_string(),
        ),
        ReportRow::new(keys::REPORT_BUSBAR_ACTIVE, format!("{:.1}", busbar.active_load_kw)),
        ReportRow::new(
            keys::REPORT_BUSBAR_REACTIVE,
            format!("{:.1}", busbar.reactive_load_kvar),
        ),
        ReportRow::new(
            keys::REPORT_BUSBAR_APPARENT,
            busbar.apparent_power_kva.to_string(),
        ),
        ReportRow::new(
            keys::REPORT_BUSBAR_CURRENT,
            format!("{:.2}", busbar.design_current_a),
        ),
    ]
}

/// 행을 CSV 두 열(label,value)로 만든다. 라벨 번역은 호출 쪽 책임.
pub fn csv_report<F>(rows: &[ReportRow], label_of: F) -> String
where
    F: Fn(&'static str) -> String,
{
    let mut out = String::from("label,value\n");
    for row in rows {
        let label = label_of(row.label_key);
        // 라벨에 쉼표가 들어갈 수 있으므로 항상 따옴표로 감싼다.
        out.push_str(&format!("\"{}\",{}\n", label.replace('"', "\"\""), row.value));
    }
    out
}
