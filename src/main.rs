mod app;
mod upload;
mod utils;

use app::FileUploader;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([400.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "File Upload System",
        options,
        Box::new(|cc| Box::new(FileUploader::new(cc))),
    )
}
