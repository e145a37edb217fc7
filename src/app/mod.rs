mod state;
mod ui;

pub use state::{SelectionState, DEFAULT_UPLOAD_DIR};

use crate::upload::{SelectedFile, Uploader};
use eframe::{egui, App};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub struct FileUploader {
    state: SelectionState,
    uploader: Arc<Uploader>,
    result_tx: Sender<Vec<String>>,
    result_rx: Receiver<Vec<String>>,
}

impl FileUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("starting file upload client");
        let (result_tx, result_rx) = channel();
        Self {
            state: SelectionState::default(),
            uploader: Arc::new(Uploader::default()),
            result_tx,
            result_rx,
        }
    }

    /// Replaces the selection with the files behind `paths`, reading each
    /// into memory now. Unreadable files are dropped from the selection.
    pub fn select_files(&mut self, paths: Vec<PathBuf>) {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match SelectedFile::from_path(&path) {
                Ok(file) => files.push(file),
                Err(e) => log::warn!("skipping {}: {}", path.display(), e),
            }
        }
        self.state.set_files(files);
    }

    /// Kicks off one submission attempt on a worker thread. The button is
    /// never disabled while an attempt runs, so attempts can overlap; all
    /// of them report into the same channel and whichever resolves last
    /// overwrites the message list.
    pub fn submit(&mut self) {
        let files = self.state.files().to_vec();
        let upload_dir = self.state.upload_dir().to_string();
        let uploader = Arc::clone(&self.uploader);
        let sender = self.result_tx.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let messages = uploader.submit(&files, &upload_dir).await;
                sender.send(messages).unwrap_or_default();
            });
        });
    }

    pub fn reset(&mut self) {
        log::info!("resetting application state");
        self.state.clear();
    }

    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(messages) = self.result_rx.try_recv() {
            self.state.set_messages(messages);
            ctx.request_repaint();
        }
    }
}

impl App for FileUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.render(ctx);
    }
}
