use macroquad::prelude::*;

/// Minimal 2D drawing surface the board renderer needs.
/// Coordinates are relative to the surface's top-left corner.
pub trait Canvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// Canvas backed by the macroquad window, placed at `origin` on screen
pub struct ScreenCanvas {
    pub origin: Vec2,
    pub background: Color,
}

impl ScreenCanvas {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            background: WHITE,
        }
    }
}

impl Canvas for ScreenCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(self.origin.x + x, self.origin.y + y, w, h, self.background);
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        draw_line(
            self.origin.x + x1,
            self.origin.y + y1,
            self.origin.x + x2,
            self.origin.y + y2,
            1.0,
            color,
        );
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(self.origin.x + x, self.origin.y + y, w, h, color);
    }
}

/// Draw call captured by `RecordingCanvas`
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, color: Color },
    Fill { x: f32, y: f32, w: f32, h: f32, color: Color },
}

/// Canvas that stores every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl Canvas for RecordingCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Fill { x, y, w, h, color });
    }
}
