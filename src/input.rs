use egui::{Context, Pos2, Rect};

/// Pointer/touch events in surface-local coordinates (origin at the canvas
/// top-left). This is the complete vocabulary the drawing session consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Moved(Pos2),
    Up,
    Left,
}

/// Translates egui's per-frame pointer state into [`PointerEvent`]s.
///
/// egui folds touch input into the primary pointer, so this one path covers
/// both the mouse and touch handling of the canvas area. Presses that begin
/// outside the canvas rect produce nothing; the pointer leaving the rect
/// emits [`PointerEvent::Left`] so an in-flight stroke ends.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last hover position seen inside the canvas, in screen coordinates.
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, ctx: &Context, canvas: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|pos| canvas.contains(*pos));
            match hover {
                Some(pos) => {
                    let local = (pos - canvas.min).to_pos2();
                    if input.pointer.primary_pressed() {
                        events.push(PointerEvent::Down(local));
                    } else if self.last_pos != Some(pos) {
                        events.push(PointerEvent::Moved(local));
                    }
                    if input.pointer.primary_released() {
                        events.push(PointerEvent::Up);
                    }
                    self.last_pos = Some(pos);
                }
                None => {
                    if self.last_pos.take().is_some() {
                        events.push(PointerEvent::Left);
                    }
                }
            }
        });
        events
    }
}
