#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use electrical_load_toolbox::{
    config, i18n,
    load::{self, BusbarLoadResult, GroupLoadInput, GroupLoadResult},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(560.0, 720.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Electrical Load Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["EL_Calc.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 표시가 가능한 시스템 폰트를 찾아 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/app_font.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "app_font");
        return Ok(());
    }

    // 2) Windows 시스템 폰트
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) Linux/macOS 시스템 폰트
    let candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 4) 실패: 기본 폰트 유지 (영문 UI는 정상 동작)
    Err("Korean-capable font not found; falling back to the default font.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    ctx.set_fonts(fonts);
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    show_settings_modal: bool,
    // 입력 필드
    nominal_power_kw: f64,
    usage_coefficient: f64,
    tangent_phi: f64,
    // 최신 계산 결과
    result: Option<(GroupLoadResult, BusbarLoadResult)>,
    calc_error: Option<String>,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        eprintln!("GUI language resolved: {lang_code}");
        let defaults = config.default_inputs;
        Self {
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_save_status: None,
            show_settings_modal: false,
            nominal_power_kw: defaults.nominal_power_kw,
            usage_coefficient: defaults.usage_coefficient,
            tangent_phi: defaults.tangent_phi,
            result: None,
            calc_error: None,
            export_status: None,
        }
    }

    fn recalculate(&mut self) {
        let input = GroupLoadInput {
            nominal_power_kw: self.nominal_power_kw,
            usage_coefficient: self.usage_coefficient,
            tangent_phi: self.tangent_phi,
        };
        match load::compute_group_load(input) {
            Ok(group) => {
                self.result = Some((group, load::compute_busbar_load()));
                self.calc_error = None;
            }
            Err(e) => {
                self.result = None;
                self.calc_error = Some(e.to_string());
            }
        }
        self.export_status = None;
    }

    fn export_csv(&mut self) {
        let Some((group, busbar)) = &self.result else {
            return;
        };
        let rows = load::report_rows(group, busbar);
        let tr = self.tr.clone();
        let csv = load::csv_report(&rows, |key| tr.text(key));
        let picked = FileDialog::new()
            .set_file_name("load_report.csv")
            .add_filter("CSV", &["csv"])
            .save_file();
        if let Some(path) = picked {
            self.export_status = Some(match fs::write(&path, csv) {
                Ok(()) => format!("Saved: {}", path.display()),
                Err(e) => format!("Save failed: {e}"),
            });
        }
    }

    fn apply_language(&mut self) {
        self.config.language = self.lang_input.clone();
        let lang_code = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&lang_code, self.config.language_pack_dir.as_deref());
        self.config.window_alpha = self.window_alpha;
        self.lang_save_status = Some(match self.config.save() {
            Ok(()) => "config.toml saved".into(),
            Err(e) => format!("save failed: {e}"),
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Electrical Load Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut apply_clicked = false;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(txt("gui.settings.apply", "Apply & save")).clicked() {
                        apply_clicked = true;
                    }
                    if let Some(status) = &self.lang_save_status {
                        ui.label(status);
                    }
                });
            if apply_clicked {
                self.apply_language();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(txt("gui.inputs.heading", "Inputs"));
                egui::Grid::new("input_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(self.tr.text(i18n::keys::PROMPT_NOMINAL_POWER));
                        ui.add(
                            egui::DragValue::new(&mut self.nominal_power_kw)
                                .speed(0.5)
                                .clamp_range(0.0..=f64::MAX),
                        );
                        ui.end_row();

                        ui.label(self.tr.text(i18n::keys::PROMPT_USAGE_COEFFICIENT));
                        ui.add(
                            egui::DragValue::new(&mut self.usage_coefficient)
                                .speed(0.01)
                                .clamp_range(0.0..=f64::MAX),
                        );
                        ui.end_row();

                        ui.label(self.tr.text(i18n::keys::PROMPT_TANGENT));
                        ui.add(egui::DragValue::new(&mut self.tangent_phi).speed(0.01));
                        ui.end_row();
                    });

                if ui.button(txt("gui.calc.run", "Calculate")).clicked() {
                    self.recalculate();
                }
                if let Some(err) = &self.calc_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }

                ui.separator();

                if let Some((group, busbar)) = self.result {
                    ui.heading(self.tr.text(i18n::keys::RESULT_HEADING));
                    let rows = load::report_rows(&group, &busbar);
                    egui::Grid::new("report_grid")
                        .num_columns(2)
                        .striped(true)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            for row in &rows {
                                ui.label(self.tr.text(row.label_key));
                                ui.label(&row.value);
                                ui.end_row();
                            }
                        });

                    ui.add_space(8.0);
                    if ui.button(txt("gui.export.csv", "Export CSV…")).clicked() {
                        self.export_csv();
                    }
                    if let Some(status) = &self.export_status {
                        ui.label(status);
                    }
                }
            });
        });
    }
}
