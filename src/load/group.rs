//! 설계 워크시트 한 행(그룹)의 부하 계산.
//!
//! 입력 그룹(동일 기계 4대) 외의 고정 그룹 값은 워크시트에서 미리 집계된
//! 리터럴이다. 상수의 공학적 근거는 워크시트 쪽에 있으므로 여기서는
//! 해석하지 않고 그대로 쓴다.

/// 그룹 부하 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLoadInput {
    /// 기계 1대의 정격 전력 Pn [kW]
    pub nominal_power_kw: f64,
    /// 사용 계수 Kv (무차원)
    pub usage_coefficient: f64,
    /// 역률각 탄젠트 tgφ
    pub tangent_phi: f64,
}

/// 워크시트 집계 중간값. 회귀 검증용으로 공개한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupAggregates {
    /// 입력 그룹 설치 전력 n·Pn [kW]
    pub machine_group_power_kw: f64,
    /// ΣPn·Kv [kW]
    pub demand_power_kw: f64,
    /// ΣPn [kW]
    pub connected_power_kw: f64,
    /// Σn·Pn² [kW²]
    pub squared_power_sum: f64,
    /// ΣPn·Kv·tgφ [kvar]
    pub demand_reactive_kvar: f64,
}

/// 그룹 부하 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLoadResult {
    /// 그룹 사용 계수 Kv
    pub usage_coefficient: f64,
    /// 유효 수전 설비 수 nэ
    pub effective_receiver_count: i64,
    /// 계산 유효 부하 Pp [kW]
    pub active_load_kw: f64,
    /// 계산 무효 부하 Qp [kvar]
    pub reactive_load_kvar: f64,
    /// 피상 전력 Sp [kVA]
    pub apparent_power_kva: f64,
    /// 계산 전류 Ip [A]
    pub design_current_a: f64,
}

/// 부하 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCalcError {
    /// 입력 값이 유한하지 않음 (NaN/∞)
    NonFiniteInput(&'static str),
}

impl std::fmt::Display for LoadCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadCalcError::NonFiniteInput(name) => {
                write!(f, "입력 값이 유한한 수가 아닙니다: {name}")
            }
        }
    }
}

impl std::error::Error for LoadCalcError {}

/// 입력 그룹의 기계 대수.
const MACHINE_COUNT: f64 = 4.0;
/// 유효 부하 계수 (결과 카드에 "1.25"로 표시되는 값).
pub const GROUP_LOAD_FACTOR: f64 = 1.25;
/// 공급 전압 [kV] (380 V 3상 계통).
const SUPPLY_VOLTAGE_KV: f64 = 0.38;

/// 워크시트 행의 집계값을 계산한다.
pub fn aggregate_group(input: GroupLoadInput) -> GroupAggregates {
    let machine_group_power_kw = MACHINE_COUNT * input.nominal_power_kw;

    let demand_power_kw = machine_group_power_kw * 0.15
        + 3.36
        + 25.2
        + 10.8
        + 10.0
        + 40.0 * input.usage_coefficient
        + 12.8
        + 13.0;
    let connected_power_kw =
        machine_group_power_kw + 28.0 + 168.0 + 36.0 + 20.0 + 40.0 + 64.0 + 20.0;
    let squared_power_sum = MACHINE_COUNT * input.nominal_power_kw.powi(2)
        + 392.0
        + 7056.0
        + 1296.0
        + 400.0
        + 1600.0
        + 2048.0
        + 400.0;
    let demand_reactive_kvar = machine_group_power_kw * 0.15 * 1.33
        + 3.36
        + 33.5
        + 36.0 * 0.3 * input.tangent_phi
        + 7.5
        + 40.0 * input.usage_coefficient * 1.0
        + 12.8
        + 9.5;

    GroupAggregates {
        machine_group_power_kw,
        demand_power_kw,
        connected_power_kw,
        squared_power_sum,
        demand_reactive_kvar,
    }
}

/// 그룹 부하를 계산한다. 고정 가산항 덕분에 분모는 항상 양수이므로
/// Pn=0 같은 경계 입력도 잘 정의된다.
pub fn compute_group_load(input: GroupLoadInput) -> Result<GroupLoadResult, LoadCalcError> {
    if !input.nominal_power_kw.is_finite() {
        return Err(LoadCalcError::NonFiniteInput("nominal_power_kw"));
    }
    if !input.usage_coefficient.is_finite() {
        return Err(LoadCalcError::NonFiniteInput("usage_coefficient"));
    }
    if !input.tangent_phi.is_finite() {
        return Err(LoadCalcError::NonFiniteInput("tangent_phi"));
    }

    let agg = aggregate_group(input);

    let usage_coefficient = agg.demand_power_kw / agg.connected_power_kw;
    // 원 계산식 그대로: 몫에 1을 더한 뒤 정수부를 취한다.
    let effective_receiver_count =
        (agg.connected_power_kw.powi(2) / agg.squared_power_sum + 1.0) as i64;
    let active_load_kw = GROUP_LOAD_FACTOR * agg.demand_power_kw;
    let reactive_load_kvar = agg.demand_reactive_kvar;
    let apparent_power_kva = (active_load_kw.powi(2) + reactive_load_kvar.powi(2)).sqrt();
    let design_current_a = active_load_kw / SUPPLY_VOLTAGE_KV;

    Ok(GroupLoadResult {
        usage_coefficient,
        effective_receiver_count,
        active_load_kw,
        reactive_load_kvar,
        apparent_power_kva,
        design_current_a,
    })
}
