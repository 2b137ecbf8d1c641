use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_LOAD_REPORT: &str = "main_menu.load_report";
    pub const MAIN_MENU_BUSBAR: &str = "main_menu.busbar";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const LOAD_REPORT_HEADING: &str = "load_report.heading";
    pub const LOAD_REPORT_NOTE_DEFAULT: &str = "load_report.note_default";
    pub const PROMPT_NOMINAL_POWER: &str = "prompt.nominal_power";
    pub const PROMPT_USAGE_COEFFICIENT: &str = "prompt.usage_coefficient";
    pub const PROMPT_TANGENT: &str = "prompt.tangent";
    pub const RESULT_HEADING: &str = "result.heading";

    pub const BUSBAR_HEADING: &str = "busbar.heading";
    pub const BUSBAR_NOTE_CONSTANT: &str = "busbar.note_constant";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_GROUP_KV: &str = "report.group_kv";
    pub const REPORT_GROUP_EFFECTIVE: &str = "report.group_effective";
    pub const REPORT_GROUP_LOAD_FACTOR: &str = "report.group_load_factor";
    pub const REPORT_GROUP_ACTIVE: &str = "report.group_active";
    pub const REPORT_GROUP_REACTIVE: &str = "report.group_reactive";
    pub const REPORT_GROUP_APPARENT: &str = "report.group_apparent";
    pub const REPORT_GROUP_CURRENT: &str = "report.group_current";
    pub const REPORT_BUSBAR_KV: &str = "report.busbar_kv";
    pub const REPORT_BUSBAR_EFFECTIVE: &str = "report.busbar_effective";
    pub const REPORT_BUSBAR_DEMAND_FACTOR: &str = "report.busbar_demand_factor";
    pub const REPORT_BUSBAR_ACTIVE: &str = "report.busbar_active";
    pub const REPORT_BUSBAR_REACTIVE: &str = "report.busbar_reactive";
    pub const REPORT_BUSBAR_APPARENT: &str = "report.busbar_apparent";
    pub const REPORT_BUSBAR_CURRENT: &str = "report.busbar_current";

    pub const HELP_LOAD_REPORT: &str = "help.load_report";
    pub const HELP_BUSBAR: &str = "help.busbar";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// t()와 같은 해석 순서로 소유 문자열을 돌려준다. 프레임마다 다시
    /// 그리는 GUI 경로는 누수가 없는 이쪽을 써야 한다.
    pub fn text(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)).to_string(),
            Language::Ko => ko(key).to_string(),
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    /// 언어팩 문자열은 호출마다 누수되므로 횟수가 유한한 CLI 경로 전용.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Electrical Load Toolbox ===",
        MAIN_MENU_LOAD_REPORT => "1) 그룹 부하 계산",
        MAIN_MENU_BUSBAR => "2) 모선 집계 보기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        LOAD_REPORT_HEADING => "\n-- 그룹 부하 계산 --",
        LOAD_REPORT_NOTE_DEFAULT => "참고: 값을 비우고 엔터를 치면 기본값을 사용합니다.",
        PROMPT_NOMINAL_POWER => "정격 전력 Pn [kW]",
        PROMPT_USAGE_COEFFICIENT => "사용 계수 Kv",
        PROMPT_TANGENT => "역률각 탄젠트 tgφ",
        RESULT_HEADING => "계산 결과:",
        BUSBAR_HEADING => "\n-- 모선 집계 --",
        BUSBAR_NOTE_CONSTANT => "참고: 합계 행은 워크시트 고정값만 쓰므로 입력과 무관합니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 자동  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        REPORT_GROUP_KV => "그룹 사용 계수 Kv",
        REPORT_GROUP_EFFECTIVE => "그룹 유효 수전 설비 수",
        REPORT_GROUP_LOAD_FACTOR => "유효 부하 계수",
        REPORT_GROUP_ACTIVE => "그룹 계산 유효 부하 [kW]",
        REPORT_GROUP_REACTIVE => "그룹 계산 무효 부하 [kvar]",
        REPORT_GROUP_APPARENT => "그룹 피상 전력 [kVA]",
        REPORT_GROUP_CURRENT => "그룹 계산 전류 [A]",
        REPORT_BUSBAR_KV => "모선 사용 계수 Kv",
        REPORT_BUSBAR_EFFECTIVE => "모선 유효 수전 설비 수",
        REPORT_BUSBAR_DEMAND_FACTOR => "모선 수요 계수",
        REPORT_BUSBAR_ACTIVE => "모선 계산 유효 부하 [kW]",
        REPORT_BUSBAR_REACTIVE => "모선 계산 무효 부하 [kvar]",
        REPORT_BUSBAR_APPARENT => "모선 피상 전력 [kVA]",
        REPORT_BUSBAR_CURRENT => "모선 계산 전류 [A]",
        HELP_LOAD_REPORT => "도움말: Pn[kW], Kv, tgφ 입력 → 그룹 + 모선 14행 결과를 출력합니다.",
        HELP_BUSBAR => "도움말: 모선 합계 행만 출력합니다. 어떤 입력에도 값이 같습니다.",
        HELP_SETTINGS => "도움말: 언어를 선택하면 config.toml에 저장됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Electrical Load Toolbox ===",
        MAIN_MENU_LOAD_REPORT => "1) Group load calculation",
        MAIN_MENU_BUSBAR => "2) Busbar totals",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        LOAD_REPORT_HEADING => "\n-- Group Load Calculation --",
        LOAD_REPORT_NOTE_DEFAULT => "Note: press enter on an empty field to use the default.",
        PROMPT_NOMINAL_POWER => "Nominal power Pn [kW]",
        PROMPT_USAGE_COEFFICIENT => "Usage coefficient Kv",
        PROMPT_TANGENT => "Power-factor tangent tgφ",
        RESULT_HEADING => "Results:",
        BUSBAR_HEADING => "\n-- Busbar Totals --",
        BUSBAR_NOTE_CONSTANT => "Note: the totals row uses fixed worksheet values; it does not depend on the inputs.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        REPORT_GROUP_KV => "Group usage coefficient Kv",
        REPORT_GROUP_EFFECTIVE => "Group effective receiver count",
        REPORT_GROUP_LOAD_FACTOR => "Group load factor",
        REPORT_GROUP_ACTIVE => "Group active load [kW]",
        REPORT_GROUP_REACTIVE => "Group reactive load [kvar]",
        REPORT_GROUP_APPARENT => "Group apparent power [kVA]",
        REPORT_GROUP_CURRENT => "Group design current [A]",
        REPORT_BUSBAR_KV => "Busbar usage coefficient Kv",
        REPORT_BUSBAR_EFFECTIVE => "Busbar effective receiver count",
        REPORT_BUSBAR_DEMAND_FACTOR => "Busbar demand factor",
        REPORT_BUSBAR_ACTIVE => "Busbar active load [kW]",
        REPORT_BUSBAR_REACTIVE => "Busbar reactive load [kvar]",
        REPORT_BUSBAR_APPARENT => "Busbar apparent power [kVA]",
        REPORT_BUSBAR_CURRENT => "Busbar design current [A]",
        HELP_LOAD_REPORT => "Help: enter Pn [kW], Kv, tgφ → prints the 14-row group + busbar report.",
        HELP_BUSBAR => "Help: prints only the busbar totals row. Identical for every input.",
        HELP_SETTINGS => "Help: the selected language is saved to config.toml.",
        _ => return None,
    })
}
