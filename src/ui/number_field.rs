use macroquad::prelude::*;

/// Single-line numeric text input. Click to focus, type digits,
/// Backspace deletes, Enter submits.
#[derive(Clone)]
pub struct NumberField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    text: String,
    max_digits: usize,
    focused: bool,
}

impl NumberField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, initial: usize, max_digits: usize) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            text: initial.to_string(),
            max_digits,
            focused: false,
        }
    }

    /// Move for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Append a typed character; non-digits and overflow are dropped
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.text.len() < self.max_digits {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle focus clicks and typing. Returns true when Enter was pressed
    /// while focused.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.is_hovered(mouse_pos);
        }
        if !self.focused {
            // Drain so keystrokes typed elsewhere don't show up on focus
            while get_char_pressed().is_some() {}
            return false;
        }

        while let Some(c) = get_char_pressed() {
            self.push_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Escape) {
            self.focused = false;
        }
        is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let border = if self.focused {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            WHITE
        };
        draw_rectangle(self.x, self.y, self.width, self.height, Color::from_rgba(45, 45, 45, 255));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let shown = if self.focused {
            format!("{}_", self.text)
        } else {
            self.text.clone()
        };
        draw_text(&shown, self.x + 6.0, self.y + 21.0, 18.0, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits_up_to_limit() {
        let mut field = NumberField::new(0.0, 0.0, 80.0, "Size", 20, 3);
        field.backspace();
        field.backspace();
        for c in "4x2-71".chars() {
            field.push_char(c);
        }
        assert_eq!(field.text(), "427");
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut field = NumberField::new(0.0, 0.0, 80.0, "Size", 5, 3);
        field.backspace();
        field.backspace();
        assert_eq!(field.text(), "");
    }
}
