// src/surface/recording.rs

//! A surface that records every call, for tests.

use super::{DrawSurface, Point};
use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Clear(Color),
    SetDrawColor(Color),
    Point(Point),
}

/// Records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// `(x, y, color)` triples drawn since the last clear, in draw order.
    pub fn drawn_points(&self) -> Vec<(i32, i32, Color)> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear(_)))
            .map_or(0, |idx| idx + 1);
        let mut color = Color::default();
        // The draw color survives a clear, so replay it from the beginning.
        for op in &self.ops[..start] {
            if let SurfaceOp::SetDrawColor(c) = op {
                color = *c;
            }
        }
        let mut triples = Vec::new();
        for op in &self.ops[start..] {
            match op {
                SurfaceOp::SetDrawColor(c) => color = *c,
                SurfaceOp::Point(p) => triples.push((p.x, p.y, color)),
                SurfaceOp::Clear(_) => {}
            }
        }
        triples
    }

    /// Same as [`Self::drawn_points`], sorted so that draw order does not matter.
    pub fn sorted_points(&self) -> Vec<(i32, i32, Color)> {
        let mut triples = self.drawn_points();
        triples.sort_unstable();
        triples
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Clear(color));
    }

    fn set_draw_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SetDrawColor(color));
    }

    fn draw_point(&mut self, point: Point) {
        self.ops.push(SurfaceOp::Point(point));
    }
}
