use super::FileUploader;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, RichText};
use rfd::FileDialog;
use std::time::Duration;

impl FileUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("File Upload System");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Send files to the upload server in one request")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                self.render_file_selection(ui);
                ui.add_space(10.0);
                self.render_directory_input(ui);
                ui.add_space(20.0);

                ui.vertical_centered(|ui| {
                    let upload_button =
                        egui::Button::new("📤 Upload Files").min_size(egui::vec2(200.0, 40.0));
                    if ui.add(upload_button).clicked() {
                        self.submit();
                    }

                    ui.add_space(5.0);
                    if ui.button("🗑 Clear All").clicked() {
                        self.reset();
                    }
                });

                ui.add_space(20.0);
                self.render_messages(ui);
                ui.add_space(20.0);
            });
        });

        // Worker results arrive over a channel, so keep polling even while
        // no input event is pending.
        ctx.request_repaint_after(Duration::from_millis(200));
    }

    fn render_file_selection(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("📁 Select Files").clicked() {
                    if let Some(paths) = FileDialog::new().pick_files() {
                        self.select_files(paths);
                    }
                }
                match self.state.files().len() {
                    0 => {
                        ui.label(RichText::new("No files selected").weak());
                    }
                    1 => {
                        ui.label("1 file selected");
                    }
                    n => {
                        ui.label(format!("{} files selected", n));
                    }
                }
            });

            if !self.state.files().is_empty() {
                ui.add_space(8.0);
                for file in self.state.files() {
                    ui.horizontal(|ui| {
                        ui.label(&file.name);
                        ui.label(
                            RichText::new(FileSizeUtils::format_size(file.size()))
                                .weak()
                                .small(),
                        );
                    });
                }
            }
        });
    }

    fn render_directory_input(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Upload directory:");
                let mut upload_dir = self.state.upload_dir().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut upload_dir)
                        .desired_width(ui.available_width())
                        .hint_text(super::DEFAULT_UPLOAD_DIR),
                );
                if response.changed() {
                    self.state.set_upload_dir(upload_dir);
                }
            });
        });
    }

    fn render_messages(&self, ui: &mut egui::Ui) {
        if self.state.messages().is_empty() {
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(200.0)
            .id_source("messages")
            .show(ui, |ui| {
                egui::Frame::none()
                    .fill(ui.style().visuals.extreme_bg_color)
                    .show(ui, |ui| {
                        ui.add_space(8.0);
                        for message in self.state.messages() {
                            ui.label(message);
                            ui.add_space(4.0);
                        }
                        ui.add_space(8.0);
                    });
            });
    }
}
