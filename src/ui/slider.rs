use macroquad::prelude::*;

/// Horizontal slider over an integer range with a fixed step
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: u32,
    max: u32,
    step: u32,
    value: u32,
    label: String,
    dragging: bool,
}

const TRACK_HEIGHT: f32 = 6.0;
const HANDLE_RADIUS: f32 = 8.0;

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: u32, max: u32, step: u32) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            step: step.max(1),
            value: min,
            label: label.into(),
            dragging: false,
        }
    }

    /// Move for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Set value, clamped to range and snapped to the step
    pub fn set_value(&mut self, value: u32) {
        self.value = self.snap(value);
    }

    fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) as f32 / self.step as f32).round() as u32;
        (self.min + steps * self.step).min(self.max)
    }

    /// Value under screen x position
    pub fn value_at(&self, mouse_x: f32) -> u32 {
        let ratio = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        let raw = self.min as f32 + ratio * (self.max - self.min) as f32;
        self.snap(raw.round() as u32)
    }

    fn handle_x(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        self.x + (self.value - self.min) as f32 / span * self.width
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - HANDLE_RADIUS
            && mouse_pos.0 <= self.x + self.width + HANDLE_RADIUS
            && (mouse_pos.1 - self.y).abs() <= HANDLE_RADIUS
    }

    /// Track the mouse while the left button is held. Returns the new value
    /// when it changed this frame.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let next = self.value_at(mouse_pos.0);
        (next != self.value).then(|| {
            self.value = next;
            next
        })
    }

    pub fn draw(&self) {
        draw_text(
            &format!("{}: {} ms", self.label, self.value),
            self.x,
            self.y - 14.0,
            14.0,
            GRAY,
        );
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(70, 70, 70, 255),
        );
        draw_circle(self.handle_x(), self.y, HANDLE_RADIUS, Color::from_rgba(100, 149, 237, 255));
    }
}
