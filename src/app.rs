use eframe::egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions};
use log::info;

use crate::components::ToolButton;
use crate::input::{InputHandler, PointerEvent};
use crate::palette::{COLOR_PALETTE, GRID_COLUMNS};
use crate::session::DrawingSession;
use crate::surface::PaintSurface;
use crate::tool::Tool;

/// We derive Deserialize/Serialize so the picked tool, color and size come
/// back on the next launch. The drawing itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PaintApp {
    session: DrawingSession,
    #[serde(skip)]
    surface: PaintSurface,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    canvas_texture: Option<TextureHandle>,
    #[serde(skip)]
    show_color_picker: bool,
    #[serde(skip)]
    confirm_clear: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            session: DrawingSession::default(),
            surface: PaintSurface::default(),
            input: InputHandler::new(),
            canvas_texture: None,
            show_color_picker: false,
            confirm_clear: false,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    fn toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                for (tool, icon) in [
                    (Tool::Brush, "🖌"),
                    (Tool::StarStamp, "⭐"),
                    (Tool::HeartStamp, "❤"),
                ] {
                    let selected = self.session.tool() == tool;
                    if ToolButton::new(tool, icon, selected).show(ui).clicked() {
                        self.session.set_tool(tool);
                    }
                }

                ui.separator();
                self.brush_preview(ui);
                let mut size = self.session.style().size();
                if ui
                    .add(egui::Slider::new(&mut size, 5.0..=80.0).show_value(false))
                    .changed()
                {
                    self.session.set_size(size);
                }

                ui.separator();
                self.color_button(ui);

                ui.separator();
                if ui.button("Clear").clicked() {
                    self.confirm_clear = true;
                }
            });
        });
    }

    /// Mirrors the current brush: a disc in the active color, clamped to a
    /// displayable diameter.
    fn brush_preview(&self, ui: &mut egui::Ui) {
        let style = self.session.style();
        let diameter = style.size().clamp(10.0, 40.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(44.0, 44.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), diameter / 2.0, style.color());
    }

    fn color_button(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(44.0, 44.0), egui::Sense::click());
        ui.painter()
            .rect_filled(rect, 8.0, self.session.style().color());
        ui.painter()
            .rect_stroke(rect, 8.0, egui::Stroke::new(1.0, Color32::from_gray(160)));
        if response.clicked() {
            self.show_color_picker = true;
        }
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;

                // The surface follows the panel; a resize wipes the drawing.
                self.surface
                    .resize(rect.width().max(0.0) as u32, rect.height().max(0.0) as u32);

                for event in self.input.poll(ctx, rect) {
                    match event {
                        PointerEvent::Down(pos) => self.session.pointer_down(pos, &mut self.surface),
                        PointerEvent::Moved(pos) => self.session.pointer_move(pos, &mut self.surface),
                        PointerEvent::Up => self.session.pointer_up(),
                        PointerEvent::Left => self.session.pointer_leave(),
                    }
                }

                painter.rect_filled(rect, 0.0, Color32::WHITE);
                if self.surface.width() == 0 || self.surface.height() == 0 {
                    return;
                }
                if self.surface.take_dirty() || self.canvas_texture.is_none() {
                    let snapshot = self.surface.as_color_image();
                    match &mut self.canvas_texture {
                        Some(texture) => texture.set(snapshot, TextureOptions::NEAREST),
                        None => {
                            self.canvas_texture =
                                Some(ctx.load_texture("canvas", snapshot, TextureOptions::NEAREST));
                        }
                    }
                }
                if let Some(texture) = &self.canvas_texture {
                    let uv = Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), rect, uv, Color32::WHITE);
                }
            });
    }

    fn color_picker(&mut self, ctx: &egui::Context) {
        if !self.show_color_picker {
            return;
        }
        let current = self.session.style().color();
        egui::Window::new("Pick a color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                for row in COLOR_PALETTE.chunks(GRID_COLUMNS) {
                    ui.horizontal(|ui| {
                        for &color in row {
                            let (rect, response) =
                                ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::click());
                            ui.painter().rect_filled(rect, 6.0, color);
                            if color == current {
                                ui.painter().rect_stroke(
                                    rect,
                                    6.0,
                                    egui::Stroke::new(2.0, Color32::WHITE),
                                );
                            }
                            if response.clicked() {
                                self.session.set_color(color);
                                self.show_color_picker = false;
                            }
                        }
                    });
                }
                ui.separator();
                if ui.button("Close").clicked() {
                    self.show_color_picker = false;
                }
            });
    }

    fn clear_confirm(&mut self, ctx: &egui::Context) {
        if !self.confirm_clear {
            return;
        }
        egui::Window::new("Clear the canvas?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.session.request_clear(&mut self.surface);
                        info!("canvas cleared");
                        self.confirm_clear = false;
                    }
                    if ui.button("Keep drawing").clicked() {
                        self.confirm_clear = false;
                    }
                });
            });
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.toolbar(ctx);
        self.canvas(ctx);
        self.color_picker(ctx);
        self.clear_confirm(ctx);
    }
}
