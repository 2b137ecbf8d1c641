//! 모선(배전반) 전체 집계 부하.
//!
//! 워크시트의 합계 행은 입력과 무관한 고정값만 쓰므로 인자가 없는 순수
//! 함수로 둔다. 호출마다 항상 같은 결과가 나온다는 불변식을 분리된
//! 함수로 드러내는 것이 목적이다.

/// 모선 집계 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusbarLoadResult {
    /// 전체 사용 계수 Kv
    pub usage_coefficient: f64,
    /// 유효 수전 설비 수 nэ
    pub effective_receiver_count: i64,
    /// 계산 유효 부하 Pp [kW]
    pub active_load_kw: f64,
    /// 계산 무효 부하 Qp [kvar]
    pub reactive_load_kvar: f64,
    /// 피상 전력 Sp [kVA] (워크시트 합계 행은 정수로 끊는다)
    pub apparent_power_kva: i64,
    /// 계산 전류 Ip [A]
    pub design_current_a: f64,
}

/// 수요 계수 (결과 카드에 "0.7"로 표시되는 값).
pub const BUSBAR_DEMAND_FACTOR: f64 = 0.7;

/// 워크시트 합계 행의 고정 집계값.
const TOTAL_DEMAND_POWER_KW: f64 = 752.0;
const TOTAL_CONNECTED_POWER_KW: f64 = 2330.0;
const TOTAL_SQUARED_POWER_SUM: f64 = 96399.0;
const TOTAL_REACTIVE_BASE_KVAR: f64 = 657.0;
/// 공급 전압 [kV] (380 V 3상 계통).
const SUPPLY_VOLTAGE_KV: f64 = 0.38;

/// 모선 집계 부하를 계산한다.
pub fn compute_busbar_load() -> BusbarLoadResult {
    let usage_coefficient = TOTAL_DEMAND_POWER_KW / TOTAL_CONNECTED_POWER_KW;
    // 합계 행은 그룹 행과 달리 +1 없이 정수부만 취한다. 원 계산식 그대로.
    let effective_receiver_count =
        (TOTAL_CONNECTED_POWER_KW.powi(2) / TOTAL_SQUARED_POWER_SUM) as i64;
    let active_load_kw = BUSBAR_DEMAND_FACTOR * TOTAL_DEMAND_POWER_KW;
    let reactive_load_kvar = BUSBAR_DEMAND_FACTOR * TOTAL_REACTIVE_BASE_KVAR;
    let apparent_power_kva =
        (active_load_kw.powi(2) + reactive_load_kvar.powi(2)).sqrt() as i64;
    let design_current_a = active_load_kw / SUPPLY_VOLTAGE_KV;

    BusbarLoadResult {
        usage_coefficient,
        effective_receiver_count,
        active_load_kw,
        reactive_load_kvar,
        apparent_power_kva,
        design_current_a,
    }
}
