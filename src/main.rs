use clap::{Parser, Subcommand};

use electrical_load_toolbox::{app, config, i18n, load};

/// 전기 부하 계산 CLI.
#[derive(Parser)]
#[command(name = "electrical_load_toolbox_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en-us)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 비대화식 계산: 그룹 + 모선 14행 결과를 출력하고 종료한다.
    Calc {
        /// 정격 전력 Pn [kW]
        nominal_power_kw: f64,
        /// 사용 계수 Kv
        usage_coefficient: f64,
        /// 역률각 탄젠트 tgφ
        tangent_phi: f64,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        Some(Command::Calc {
            nominal_power_kw,
            usage_coefficient,
            tangent_phi,
        }) => {
            let group = load::compute_group_load(load::GroupLoadInput {
                nominal_power_kw,
                usage_coefficient,
                tangent_phi,
            })?;
            let busbar = load::compute_busbar_load();
            for row in load::report_rows(&group, &busbar) {
                println!("{}: {}", tr.t(row.label_key), row.value);
            }
        }
        None => app::run(&mut cfg, &tr)?,
    }
    Ok(())
}
