//! Framescope - frame-accurate preview with scening lists
//!
//! Entry point and main application loop.

mod config;
mod host;

use anyhow::Result;
use eframe::egui;
use framescope_core::Frame;
use framescope_ui::{show_transport, Theme};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::host::Host;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_args(std::env::args().skip(1))?;
    info!(
        frames = config.total_frames,
        rate = %config.frame_rate,
        "Framescope starting..."
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Framescope"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Framescope",
        options,
        Box::new(move |cc| Ok(Box::new(FramescopeApp::new(cc, &config)))),
    )?;

    Ok(())
}

struct FramescopeApp {
    host: Host,
}

impl FramescopeApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self {
            host: Host::new(config.output()),
        }
    }

    fn draw_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                let names = self.host.lists.names();
                let mut selected = self.host.current_list_index();
                let current_name = names.get(selected).cloned().unwrap_or_default();
                egui::ComboBox::from_id_salt("scening_list_picker")
                    .selected_text(current_name)
                    .show_ui(ui, |ui| {
                        for (index, name) in names.iter().enumerate() {
                            ui.selectable_value(&mut selected, index, name);
                        }
                    });
                if selected != self.host.current_list_index() {
                    self.host.switch_list(selected);
                }

                if ui.button("New List").clicked() {
                    self.host.add_list();
                }

                let label = if self.host.dialog.open {
                    "Hide Scening List"
                } else {
                    "Scening List"
                };
                if ui.button(label).clicked() {
                    self.host.toggle_dialog();
                }
            });
        });
    }

    fn draw_scene_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mark = self
                .host
                .mark_in
                .map(|frame| frame.to_string())
                .unwrap_or_else(|| "-".to_owned());
            if ui.button("Mark Start").clicked() {
                self.host.mark_in = Some(self.host.current_frame());
            }
            ui.label(egui::RichText::new(format!("start: {mark}")).size(Theme::FONT_SM));
            ui.add(
                egui::TextEdit::singleline(&mut self.host.new_label)
                    .hint_text("Scene label")
                    .desired_width(200.0),
            );
            if ui.button("Add Scene").clicked() {
                self.host.add_scene();
            }
        });
    }

    fn draw_viewport(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Theme::bg());

        let frame = self.host.current_frame();
        let info = format!(
            "{}\nFrame {} | {} | {}",
            self.host.output.name,
            frame,
            self.host.output.time_of(frame),
            self.host.output.frame_rate
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            info,
            egui::FontId::monospace(16.0),
            Theme::t2(),
        );
    }
}

impl eframe::App for FramescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_menu_bar(ctx);

        egui::TopBottomPanel::bottom("transport_panel")
            .frame(Theme::panel_frame())
            .show(ctx, |ui| {
                let requested = {
                    let list = self.host.current_list().cloned();
                    let guard = list.as_ref().map(|list| list.read());
                    show_transport(
                        ui,
                        self.host.current_frame(),
                        &self.host.output,
                        guard.as_deref(),
                    )
                };
                if let Some(frame) = requested {
                    self.host.switch_frame(frame);
                }
                ui.add_space(Theme::SPACE_XS);
                self.draw_scene_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| self.draw_viewport(ui));

        if !ctx.wants_keyboard_input() {
            let current = self.host.current_frame();
            let step: Option<Frame> = ctx.input(|input| {
                if input.key_pressed(egui::Key::ArrowRight) {
                    Some(current + 1)
                } else if input.key_pressed(egui::Key::ArrowLeft) {
                    Some(current - 1)
                } else {
                    None
                }
            });
            if let Some(frame) = step {
                self.host.switch_frame(frame);
            }
        }

        let actions = self.host.dialog.show(ctx, &mut self.host.lists);
        self.host.handle_dialog_actions(actions);
    }
}
