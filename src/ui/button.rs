use macroquad::prelude::*;

use super::ControlAction;

/// Clickable panel button bound to one controller action
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: ControlAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ControlAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn action(&self) -> ControlAction {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let label = self.action.label();
        let text_size = measure_text(label, None, 18, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// True on the frame the left button goes down over this button
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_includes_edges() {
        let btn = Button::new(10.0, 20.0, 100.0, 30.0, ControlAction::Step);
        assert!(btn.is_hovered((10.0, 20.0)));
        assert!(btn.is_hovered((110.0, 50.0)));
        assert!(!btn.is_hovered((9.9, 30.0)));
        assert!(!btn.is_hovered((50.0, 50.1)));
        assert_eq!(btn.action(), ControlAction::Step);
    }
}
