use crate::visualization::{
    circle_geometry::{generate_circle_points, incremental_drift, SamplingStrategy},
    renderer::{CircleWgpuPrimitive, ColoredVertex, WgpuCircleRenderer, MAX_POINTS},
    scene::guide_lines,
};
use eframe::{egui, egui_wgpu::CallbackTrait, App, Frame};
use parking_lot::Mutex;
use std::f32::consts::TAU;
use std::ops::RangeInclusive;
use std::sync::Arc;
use type_map::concurrent::TypeMap;

const DEFAULT_POINT_COUNT: usize = 128;
const POINT_COUNT_RANGE: RangeInclusive<usize> = 3..=MAX_POINTS;
const PANEL_SIZE: [f32; 2] = [500.0, 800.0];
const BACKGROUND_GRAY: u8 = 26; // 0.1 * 255

struct CirclePaintCallback {
    primitive: Arc<CircleWgpuPrimitive>,
    mvp_matrix: glam::Mat4,
    points: Vec<ColoredVertex>,
    queue: Arc<wgpu::Queue>,
}

impl CallbackTrait for CirclePaintCallback {
    fn paint<'a>(
        &'a self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'a>,
        _resources: &'a TypeMap,
    ) {
        WgpuCircleRenderer::paint_primitive(
            &self.primitive,
            &self.mvp_matrix,
            &self.points,
            render_pass,
            &self.queue,
        );
    }
}

/// Everything the panel lets the user change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSettings {
    pub point_count: usize,
    pub strategy: SamplingStrategy,
    pub start_theta: f32,
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            strategy: SamplingStrategy::Incremental,
            start_theta: 0.0,
        }
    }
}

impl CircleSettings {
    pub fn points(&self) -> Vec<ColoredVertex> {
        let count = self.point_count.clamp(*POINT_COUNT_RANGE.start(), *POINT_COUNT_RANGE.end());
        generate_circle_points(self.strategy, count, self.start_theta)
    }

    fn show(&mut self, ui: &mut egui::Ui, fps: f32) {
        ui.label(format!("fps = {:.1}", fps));

        let mut optimized = self.strategy == SamplingStrategy::Incremental;
        if ui.checkbox(&mut optimized, "optimized").changed() {
            self.strategy = if optimized {
                SamplingStrategy::Incremental
            } else {
                SamplingStrategy::Direct
            };
        }
        ui.add(egui::Slider::new(&mut self.point_count, POINT_COUNT_RANGE).text("N"));
        ui.add(egui::Slider::new(&mut self.start_theta, 0.0..=TAU).text("start theta"));

        ui.separator();
        ui.label(format!(
            "unit-circle drift (last point) = {:.3e}",
            incremental_drift(self.point_count, self.start_theta)
        ));
    }
}

pub struct CircleGeneratorApp {
    settings: CircleSettings,
    renderer: Arc<Mutex<WgpuCircleRenderer>>,
    wgpu_queue: Option<Arc<wgpu::Queue>>,
}

impl CircleGeneratorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut local_renderer = WgpuCircleRenderer::new(guide_lines());
        let mut app_wgpu_queue_arc = None;
        if let Some(wgpu_render_state) = &cc.wgpu_render_state {
            let target_format = wgpu_render_state.target_format;
            if let Err(e) = local_renderer.prepare(&wgpu_render_state.device, target_format) {
                tracing::error!("Failed to prepare WGPU circle renderer: {}", e);
            } else {
                app_wgpu_queue_arc = Some(wgpu_render_state.queue.clone());
            }
        } else {
            tracing::warn!("WGPU render state not available at creation.");
        }

        Self {
            settings: CircleSettings::default(),
            renderer: Arc::new(Mutex::new(local_renderer)),
            wgpu_queue: app_wgpu_queue_arc,
        }
    }

    fn paint_placeholder(ui: &egui::Ui, rect: egui::Rect, fill: egui::Color32, text: &str) {
        ui.painter().rect_filled(rect, 0.0, fill);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::default(),
            egui::Color32::WHITE,
        );
    }
}

impl App for CircleGeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };

        let previous = self.settings;
        egui::Window::new("Panel")
            .default_size(PANEL_SIZE)
            .show(ctx, |ui| self.settings.show(ui, fps));
        if self.settings != previous {
            tracing::debug!(settings = ?self.settings, "Circle settings changed");
        }

        let background = egui::Frame::none().fill(egui::Color32::from_gray(BACKGROUND_GRAY));
        egui::CentralPanel::default().frame(background).show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());

            // The panel window sits above the viewport, so it swallows its own drags.
            let mvp_matrix = {
                let mut renderer_guard = self.renderer.lock();
                if response.dragged() {
                    let delta = response.drag_delta();
                    renderer_guard.camera.orbit(delta.x, delta.y);
                }
                if response.hovered() {
                    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                    if scroll != 0.0 {
                        renderer_guard.camera.zoom(scroll);
                    }
                }
                renderer_guard.calculate_mvp(rect.width() / rect.height().max(1.0))
            };

            let primitive = self.renderer.lock().get_primitive_arc();
            match (primitive, &self.wgpu_queue) {
                (Some(primitive), Some(queue)) => {
                    let cb = eframe::egui_wgpu::Callback::new_paint_callback(
                        rect,
                        CirclePaintCallback {
                            primitive,
                            mvp_matrix,
                            points: self.settings.points(),
                            queue: queue.clone(),
                        },
                    );
                    ui.painter().add(cb);
                }
                (Some(_), None) => {
                    Self::paint_placeholder(ui, rect, egui::Color32::DARK_RED, "WGPU Queue N/A")
                }
                (None, _) => {
                    Self::paint_placeholder(ui, rect, egui::Color32::DARK_GRAY, "Renderer N/A")
                }
            }
        });

        ctx.request_repaint();
    }
}
