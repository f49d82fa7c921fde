mod app;
mod math;
mod visualization;

use app::CircleGeneratorApp;

const WINDOW_SIZE: [f32; 2] = [1920.0, 1080.0];

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Circle Generator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        renderer: eframe::Renderer::Wgpu,
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        "Circle Generator",
        options,
        Box::new(|cc| Box::new(CircleGeneratorApp::new(cc))),
    )
}
