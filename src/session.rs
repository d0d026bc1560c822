//! The drawing session state machine.
//!
//! Two states: `Idle` and `Stroking`, encoded as the presence of a last
//! sampled point. The session receives translated pointer events from the UI
//! shell and drives the interpolator and shape generators into a [`StampSink`].

use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::interpolate::stamp_spacing;
use crate::surface::StampSink;
use crate::tool::{Style, Tool};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSession {
    tool: Tool,
    style: Style,
    /// `Some` exactly while a stroke is in progress.
    #[serde(skip)]
    last_point: Option<Pos2>,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            style: Style::default(),
            last_point: None,
        }
    }
}

impl DrawingSession {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn is_stroking(&self) -> bool {
        self.last_point.is_some()
    }

    /// Tool, color and size changes apply from the next stamp onward; they
    /// never stamp or end a stroke by themselves.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.style.set_color(color);
    }

    pub fn set_size(&mut self, size: f32) {
        self.style.set_size(size);
    }

    /// Begin a stroke and stamp immediately with the active tool.
    pub fn pointer_down(&mut self, pos: Pos2, sink: &mut dyn StampSink) {
        self.last_point = Some(pos);
        self.stamp_at(pos, sink);
    }

    /// Continue a stroke. The brush interpolates from the last point so fast
    /// motion still yields a continuous line; stamp tools mark only the new
    /// position. Moves while idle (hover) are ignored.
    pub fn pointer_move(&mut self, pos: Pos2, sink: &mut dyn StampSink) {
        let Some(last) = self.last_point else {
            return;
        };
        match self.tool {
            Tool::Brush => {
                for sample in stamp_spacing(last, pos, self.style.size()) {
                    sink.stamp_circle(sample, &self.style);
                }
            }
            Tool::StarStamp | Tool::HeartStamp => self.stamp_at(pos, sink),
        }
        self.last_point = Some(pos);
    }

    /// End the stroke. No stamp is drawn.
    pub fn pointer_up(&mut self) {
        self.last_point = None;
    }

    /// The pointer left the surface; treated like a release.
    pub fn pointer_leave(&mut self) {
        self.last_point = None;
    }

    /// Wipe the surface. Independent of the stroke state.
    pub fn request_clear(&self, sink: &mut dyn StampSink) {
        sink.clear();
    }

    fn stamp_at(&self, pos: Pos2, sink: &mut dyn StampSink) {
        match self.tool {
            Tool::Brush => sink.stamp_circle(pos, &self.style),
            Tool::StarStamp => {
                sink.stamp_polygon(&geometry::star_outline(pos, self.style.size()), &self.style);
            }
            Tool::HeartStamp => {
                sink.stamp_curves(&geometry::heart_outline(pos, self.style.size()), &self.style);
            }
        }
    }
}
