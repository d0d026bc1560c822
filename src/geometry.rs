use egui::{Pos2, pos2};
use std::f32::consts::{FRAC_PI_2, PI};

/// A filled disc stamp. The brush's unit mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
}

/// One cubic Bezier segment, continuing from the previous segment's endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Pos2,
    pub ctrl2: Pos2,
    pub end: Pos2,
}

/// A closed path of cubic Bezier segments starting (and ending) at `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    pub start: Pos2,
    pub segments: [CubicSegment; 6],
}

impl CurvePath {
    pub fn is_closed(&self) -> bool {
        self.segments[self.segments.len() - 1].end == self.start
    }

    /// Flatten into a closed polygon, `steps` line segments per curve.
    pub fn flatten(&self, steps: usize) -> Vec<Pos2> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(self.segments.len() * steps);
        let mut from = self.start;
        for segment in &self.segments {
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                points.push(cubic_point(from, segment, t));
            }
            from = segment.end;
        }
        points
    }
}

fn cubic_point(from: Pos2, segment: &CubicSegment, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    pos2(
        b0 * from.x + b1 * segment.ctrl1.x + b2 * segment.ctrl2.x + b3 * segment.end.x,
        b0 * from.y + b1 * segment.ctrl1.y + b2 * segment.ctrl2.y + b3 * segment.end.y,
    )
}

/// The brush stamp: a disc of diameter `size` centered on the cursor.
pub fn circle_outline(center: Pos2, size: f32) -> Circle {
    Circle {
        center,
        radius: size / 2.0,
    }
}

/// Five-point star with outer radius `size`, first point straight up.
///
/// Ten vertices alternate between the outer radius and an inner radius of
/// `size / 2.5` at equal angular steps, forming a closed polygon.
pub fn star_outline(center: Pos2, size: f32) -> [Pos2; 10] {
    let outer = size;
    let inner = size / 2.5;
    let step = PI / 5.0;

    let mut vertices = [Pos2::ZERO; 10];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = i as f32 * step - FRAC_PI_2;
        *vertex = pos2(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
    }
    vertices
}

/// Heart built from two mirrored lobes of three cubic curves each.
///
/// Offsets are in units of `size / 20`, relative to `center`; the path starts
/// in the upper notch and closes back onto it.
pub fn heart_outline(center: Pos2, size: f32) -> CurvePath {
    let s = size / 20.0;
    let at = |dx: f32, dy: f32| pos2(center.x + dx * s, center.y + dy * s);
    let curve = |c1: Pos2, c2: Pos2, end: Pos2| CubicSegment {
        ctrl1: c1,
        ctrl2: c2,
        end,
    };

    CurvePath {
        start: at(0.0, 5.0),
        segments: [
            // left lobe, down to the bottom tip
            curve(at(0.0, 2.0), at(-5.0, -3.0), at(-10.0, -3.0)),
            curve(at(-15.0, -3.0), at(-20.0, 2.0), at(-20.0, 7.0)),
            curve(at(-20.0, 12.0), at(-15.0, 17.0), at(0.0, 25.0)),
            // right lobe, back up to the notch
            curve(at(15.0, 17.0), at(20.0, 12.0), at(20.0, 7.0)),
            curve(at(20.0, 2.0), at(15.0, -3.0), at(10.0, -3.0)),
            curve(at(5.0, -3.0), at(0.0, 2.0), at(0.0, 5.0)),
        ],
    }
}
