//! Spacing of brush stamps between two input samples.
//!
//! Fast pointer motion delivers widely separated move events; stamping only at
//! those would leave a dotted line. The interpolator walks the segment between
//! the previous and the new sample in steps of roughly a third of the brush
//! size so consecutive discs overlap.

use egui::Pos2;

/// Evenly spaced sample points from `last` to `new`, both endpoints included.
///
/// `steps = max(1, floor(dist / (size / 3)))`, yielding `steps + 1` points.
/// The start point is re-stamped on purpose; a duplicate disc is cheap and
/// keeps the stroke continuous across move events. Clone to restart.
#[derive(Debug, Clone)]
pub struct StampSpacing {
    start: Pos2,
    end: Pos2,
    steps: usize,
    next: usize,
}

pub fn stamp_spacing(last: Pos2, new: Pos2, size: f32) -> StampSpacing {
    let dist = last.distance(new);
    let spacing = size / 3.0;
    let steps = if spacing > 0.0 {
        ((dist / spacing).floor() as usize).max(1)
    } else {
        // degenerate brush size: still emit both endpoints
        1
    };
    StampSpacing {
        start: last,
        end: new,
        steps,
        next: 0,
    }
}

impl Iterator for StampSpacing {
    type Item = Pos2;

    fn next(&mut self) -> Option<Pos2> {
        if self.next > self.steps {
            return None;
        }
        let t = self.next as f32 / self.steps as f32;
        self.next += 1;
        Some(self.start + (self.end - self.start) * t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps + 1 - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StampSpacing {}
