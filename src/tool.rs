use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::palette;

/// Alpha applied to every stamp so overlapping marks blend a little.
pub const STAMP_OPACITY: f32 = 0.9;

/// The active drawing tool. Exactly one at a time, picked in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    /// Continuous stroke of overlapping discs.
    Brush,
    /// One star per input sample, no interpolation.
    StarStamp,
    /// One heart per input sample, no interpolation.
    HeartStamp,
}

impl Default for Tool {
    fn default() -> Self {
        Self::Brush
    }
}

/// Color, size and opacity read at the moment a stamp is drawn.
///
/// Color and size are set from the toolbar; opacity is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    color: Color32,
    size: f32,
    opacity: f32,
}

impl Style {
    pub fn new(color: Color32, size: f32) -> Self {
        Self {
            color,
            size,
            opacity: STAMP_OPACITY,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(palette::DEFAULT_COLOR, 25.0)
    }
}
