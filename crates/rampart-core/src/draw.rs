//! Draw-surface abstraction consumed by entity `draw` methods.
//!
//! Logic never touches a surface. `DrawList` records commands so headless
//! frontends and tests can inspect exactly what a frame would paint.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// RGBA color. Channels are 0-255, alpha is 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const PLATFORM_GREY: Color = Color::rgb(0xaa, 0xaa, 0xaa);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLUE_RANGE: Color = Color::rgba(0, 0, 255, 0.3);
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const DARK_GREEN_RANGE: Color = Color::rgba(0, 100, 0, 0.3);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const GREY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GREY: Color = Color::rgb(169, 169, 169);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// CSS `rgba(..)` string, for canvas-style frontends.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A 2D drawing context.
///
/// Rectangles are given by their top-left corner and size.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    );

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Color, line_width: f64);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    },
    FillCircle {
        center: Vec2,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f64,
        color: Color,
        line_width: f64,
    },
}

/// Surface that records every call in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for DrawList {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    ) {
        self.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }
}

/// Draw a two-layer health bar: background rect, then a fill proportional to `fraction`.
#[allow(clippy::too_many_arguments)]
pub fn health_bar(
    surface: &mut impl DrawSurface,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fraction: f64,
    background: Color,
    fill: Color,
) {
    surface.fill_rect(x, y, width, height, background);
    surface.fill_rect(x, y, fraction * width, height, fill);
}
