use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::load::{self, GroupLoadInput};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LoadReport,
    BusbarTotals,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_LOAD_REPORT));
    println!("{}", tr.t(keys::MAIN_MENU_BUSBAR));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::LoadReport),
            "2" => return Ok(MenuChoice::BusbarTotals),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 그룹 부하 계산 메뉴를 처리한다.
pub fn handle_load_report(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LOAD_REPORT_HEADING));
    println!("{}", tr.t(keys::HELP_LOAD_REPORT));
    println!("{}", tr.t(keys::LOAD_REPORT_NOTE_DEFAULT));

    let defaults = cfg.default_inputs;
    let pn = read_f64_or_default(
        tr,
        tr.t(keys::PROMPT_NOMINAL_POWER),
        defaults.nominal_power_kw,
    )?;
    let kv = read_f64_or_default(
        tr,
        tr.t(keys::PROMPT_USAGE_COEFFICIENT),
        defaults.usage_coefficient,
    )?;
    let tg = read_f64_or_default(tr, tr.t(keys::PROMPT_TANGENT), defaults.tangent_phi)?;

    let group = load::compute_group_load(GroupLoadInput {
        nominal_power_kw: pn,
        usage_coefficient: kv,
        tangent_phi: tg,
    })?;
    let busbar = load::compute_busbar_load();

    print_report(tr, &load::report_rows(&group, &busbar));
    Ok(())
}

/// 모선 집계 메뉴를 처리한다. 입력이 필요 없다.
pub fn handle_busbar_totals(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BUSBAR_HEADING));
    println!("{}", tr.t(keys::BUSBAR_NOTE_CONSTANT));

    let busbar = load::compute_busbar_load();
    println!("{}", tr.t(keys::RESULT_HEADING));
    for row in load::busbar_rows(&busbar) {
        print_row(tr.t(row.label_key), &row.value);
    }
    Ok(())
}

/// 설정 메뉴 번호를 언어 코드로 해석한다. 지원하지 않는 번호는 None.
pub fn language_choice(sel: &str) -> Option<&'static str> {
    match sel.trim() {
        "1" => Some("auto"),
        "2" => Some("ko"),
        "3" => Some("en-us"),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let Some(lang) = language_choice(&sel) else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
        return Ok(());
    };
    cfg.language = lang.into();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

/// 전체 14행 결과를 출력한다.
fn print_report(tr: &Translator, rows: &[load::ReportRow]) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    for row in rows {
        print_row(tr.t(row.label_key), &row.value);
    }
}

fn print_row(label: &str, value: &str) {
    println!("  {label}: {value}");
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자를 읽는다. 빈 입력은 기본값, 그 외에는 파싱될 때까지 다시 묻는다.
fn read_f64_or_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let t = s.trim();
        if t.is_empty() {
            return Ok(default);
        }
        match t.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
