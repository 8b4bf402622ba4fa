//! Main window: state wiring, preview textures and the per-frame update.

use eframe::{App, Frame, egui};
use screening_core::{
    AppConfig, SUPPORTED_EXTENSIONS, SelectedFile, Session, SystemEntropy, Trigger,
    is_supported_image,
};
use std::path::PathBuf;
use std::time::Instant;

mod preview;
mod sections;

use preview::PreviewLoader;

pub(crate) struct UiApp {
    config: AppConfig,
    session: Session,
    entropy: SystemEntropy,
    loader: PreviewLoader,
    preview_texture: Option<egui::TextureHandle>,
    status: String,
    app_version: &'static str,
}

impl UiApp {
    pub(crate) fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            entropy: SystemEntropy::new(),
            loader: PreviewLoader::new(),
            preview_texture: None,
            status: String::new(),
            app_version: env!("APP_VERSION"),
        }
    }

    fn choose_file(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        self.select_path(ctx, path);
    }

    fn select_path(&mut self, ctx: &egui::Context, path: PathBuf) {
        if !is_supported_image(&path) {
            tracing::warn!("{} does not look like an image", path.display());
        }
        let file = match SelectedFile::from_path(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("{e}");
                self.status = format!("Could not read file: {e}");
                return;
            }
        };
        self.status.clear();
        let ticket = self.session.select_file(file);
        self.preview_texture = None;
        self.loader
            .spawn(ctx.clone(), ticket, path, self.config.preview_max_side);
    }

    fn start_analysis(&mut self) {
        match self.session.trigger_analysis(Instant::now()) {
            Trigger::Started => self.status.clear(),
            Trigger::NoFile | Trigger::AlreadyRunning => {}
        }
    }

    fn receive_previews(&mut self, ctx: &egui::Context) {
        let loaded: Vec<_> = self.loader.try_iter().collect();
        for item in loaded {
            match item.result {
                Ok(preview) => {
                    if self.session.attach_preview(item.ticket, preview) {
                        self.upload_texture(ctx);
                    }
                }
                Err(e) => {
                    self.session.preview_failed(item.ticket, &e);
                    self.status = format!("Preview unavailable: {e}");
                }
            }
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        let Some(preview) = self.session.preview() else {
            return;
        };
        let size = [preview.width as usize, preview.height as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, &preview.rgba);
        let name = match self.session.selected_file() {
            Some(file) => format!("preview:{}", file.name),
            None => "preview".to_string(),
        };
        self.preview_texture = Some(ctx.load_texture(name, color, egui::TextureOptions::LINEAR));
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.receive_previews(ctx);
        let now = Instant::now();
        self.session.poll(now, &mut self.entropy);
        if let Some(left) = self.session.remaining(now) {
            ctx.request_repaint_after(left);
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Breast Cancer Detection System");
            ui.label("Advanced image analysis for early detection");
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Version {}", self.app_version));
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_upload_section(ui);
                    ui.add_space(12.0);
                    self.render_preview_section(ui);
                    self.render_result_section(ui);
                    if self.config.show_disclaimer {
                        ui.add_space(12.0);
                        sections::render_disclaimer(ui);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &std::path::Path, name: &str) -> anyhow::Result<PathBuf> {
        let path = dir.join(name);
        image::RgbaImage::from_pixel(4, 4, image::Rgba([9, 9, 9, 255])).save(&path)?;
        Ok(path)
    }

    #[test]
    fn choosing_a_file_mid_analysis_discards_it() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let ctx = egui::Context::default();
        let mut app = UiApp::new(AppConfig::default());

        app.select_path(&ctx, write_png(dir.path(), "first.png")?);
        app.start_analysis();
        assert!(app.session.is_analyzing());

        app.select_path(&ctx, write_png(dir.path(), "second.png")?);
        assert!(!app.session.is_analyzing());
        assert!(app.session.outcome().is_none());
        assert_eq!(
            app.session.selected_file().map(|f| f.name.as_str()),
            Some("second.png")
        );
        assert!(app.preview_texture.is_none());
        Ok(())
    }
}
