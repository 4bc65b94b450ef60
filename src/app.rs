use clap::Parser;
use eframe::egui;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::ripple::{RippleField, RippleStyle};
use crate::ui::ripple_screen::RippleScreen;

// アプリケーション全体の状態を管理する構造体
pub struct RippleApp {
    pub(crate) config: Config,
    pub(crate) ripple: RippleField,
    pub(crate) ripple_screen: RippleScreen,
    pub(crate) show_command_window: bool,
    pub(crate) input_string: String, // コンソールの入力文字列
    pub(crate) command_history: Vec<String>,
    pub(crate) user_command_history: Vec<String>,
    pub(crate) history_index: usize,
    pub(crate) focus_console_requested: bool,
}

impl RippleApp {
    pub fn new(_cc: &eframe::CreationContext, config: Config) -> Self {
        let ripple = config.ripple_field();
        Self {
            show_command_window: config.ui.show_console,
            config,
            ripple,
            ripple_screen: RippleScreen::new(),
            input_string: String::new(),
            command_history: Vec::new(),
            user_command_history: Vec::new(),
            history_index: 0,
            focus_console_requested: false,
        }
    }

    fn draw_console(&mut self, ctx: &egui::Context) {
        egui::Window::new("Console")
            .default_pos(egui::pos2(20.0, 420.0)) // 初期位置
            .default_size(egui::vec2(
                ctx.input(|i| i.screen_rect()).width() / 3.0,
                300.0,
            )) // 初期サイズ
            .resizable(true)
            .collapsible(true)
            .show(ctx, |ui| {
                let console_input_id = egui::Id::new("console_input_window");

                // コマンド履歴
                egui::ScrollArea::vertical()
                    .id_source("console_history_scroll")
                    .stick_to_bottom(true)
                    .max_height(
                        ui.available_height()
                            - ui.text_style_height(&egui::TextStyle::Monospace) * 2.0
                            - 10.0,
                    ) // 入力欄とマージンを考慮
                    .show(ui, |ui| {
                        for line in &self.command_history {
                            let color = if line.starts_with("> ") {
                                egui::Color32::GRAY
                            } else if line.starts_with("ERROR:") {
                                egui::Color32::RED
                            } else {
                                egui::Color32::WHITE
                            };
                            ui.monospace(egui::RichText::new(line).color(color));
                        }
                    });

                // 入力欄
                let text_edit_response = ui
                    .horizontal(|ui| {
                        ui.monospace(">");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.input_string)
                                .id(console_input_id)
                                .frame(false)
                                .hint_text("Enter command...")
                                .font(egui::TextStyle::Monospace)
                                .lock_focus(true)
                                .desired_width(f32::INFINITY)
                                .text_color(egui::Color32::LIGHT_GREEN),
                        )
                    })
                    .inner;

                if self.focus_console_requested {
                    text_edit_response.request_focus();
                    self.focus_console_requested = false;
                }

                // 入力履歴のナビゲーション (ArrowUp/ArrowDown)
                if text_edit_response.has_focus() {
                    let up_pressed = ctx.input(|i| i.key_pressed(egui::Key::ArrowUp));
                    let down_pressed = ctx.input(|i| i.key_pressed(egui::Key::ArrowDown));

                    if up_pressed {
                        if self.history_index > 0 {
                            self.history_index -= 1;
                            self.input_string = self
                                .user_command_history
                                .get(self.history_index)
                                .cloned()
                                .unwrap_or_default();
                        }
                        ctx.input_mut(|i| {
                            i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp)
                        });
                    } else if down_pressed {
                        if self.history_index < self.user_command_history.len() {
                            self.history_index += 1;
                            if self.history_index == self.user_command_history.len() {
                                self.input_string.clear();
                            } else {
                                self.input_string = self
                                    .user_command_history
                                    .get(self.history_index)
                                    .cloned()
                                    .unwrap_or_default();
                            }
                        }
                        ctx.input_mut(|i| {
                            i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown)
                        });
                    }
                }

                // Enter key handling (submission)
                let enter_pressed = text_edit_response.lost_focus()
                    && ctx.input(|i| i.key_pressed(egui::Key::Enter));
                if enter_pressed {
                    let full_command_line = self.input_string.trim().to_owned();
                    if !full_command_line.is_empty() {
                        self.command_history.push(format!("> {}", full_command_line));
                        self.user_command_history.push(full_command_line.clone());
                        self.history_index = self.user_command_history.len();
                        match shlex::split(&full_command_line) {
                            Some(args) => match Cli::try_parse_from(args) {
                                Ok(cli_command) => {
                                    crate::cli::handle_command(self, ctx, cli_command);
                                }
                                Err(e) => {
                                    for line in e.to_string().lines() {
                                        self.command_history.push(line.to_string());
                                    }
                                }
                            },
                            None => {
                                self.command_history
                                    .push("ERROR: Failed to parse command line.".to_string());
                            }
                        }
                    }
                    self.input_string.clear();
                    text_edit_response.request_focus();
                }
            });
    }
}

impl eframe::App for RippleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(egui::Key::L))
        {
            self.command_history.clear();
            ctx.request_repaint();
        }

        if self.show_command_window {
            self.draw_console(ctx);
        }

        // 1. 左側のパネル（コントロール）
        egui::SidePanel::left("control")
            .resizable(false)
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Ripple Diffusion");

                // ステータス表示
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label("[RIPPLE]");
                    let (status_text, status_color) = if self.ripple.is_running() {
                        ("  Status: Running", egui::Color32::GREEN)
                    } else {
                        ("  Status: Stopped", egui::Color32::GRAY)
                    };
                    ui.label(egui::RichText::new(status_text).color(status_color));
                    let style_text = match self.ripple.style() {
                        RippleStyle::Stroke => "  Style: Stroke",
                        RippleStyle::Fill => "  Style: Fill",
                    };
                    ui.label(style_text);
                });
                ui.separator();

                // 開始/停止ボタン（ラベルは次の動作を表す）
                let start_label = if self.ripple.is_running() {
                    "stop"
                } else {
                    "start"
                };
                if ui.button(start_label).clicked() {
                    if self.ripple.is_running() {
                        self.ripple.stop();
                        info!("ripple animation stopped");
                    } else {
                        let now = ctx.input(|i| i.time);
                        self.ripple.start(now);
                        info!("ripple animation started");
                    }
                }

                // スタイル切り替えボタン
                if ui.button("change style").clicked() {
                    let next = match self.ripple.style() {
                        RippleStyle::Stroke => RippleStyle::Fill,
                        RippleStyle::Fill => RippleStyle::Stroke,
                    };
                    self.ripple.set_style(next);
                }

                ui.separator();
                if ui.button("console").clicked() {
                    self.show_command_window = !self.show_command_window;
                    self.focus_console_requested = self.show_command_window;
                }
            });

        // 2. 右側のパネル（リップル表示）
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Ripple Diffusion View");
            ui.painter().rect_filled(
                ui.available_rect_before_wrap(),
                0.0,
                egui::Color32::from_rgb(20, 20, 20),
            );
            self.ripple_screen.draw(ui, &mut self.ripple);
        });
    }
}
