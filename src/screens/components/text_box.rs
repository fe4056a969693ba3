use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::fmt::Debug;
use std::fmt::Formatter;

/// A single-line input. The value itself lives in the form draft; the box
/// only knows how to show it and how a key press changes it.
pub struct TextBox {
    pub writing_mode: bool,
    pub disabled: bool,
    label: String,
    validator: Box<dyn Fn(&str, char) -> bool + Send>,
}

impl Debug for TextBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("writing_mode", &self.writing_mode)
            .field("disabled", &self.disabled)
            .field("label", &self.label)
            .finish()
    }
}

impl TextBox {
    pub fn new(label: String, writing_mode: bool) -> Self {
        Self::with_validator(label, writing_mode, |_, _| true)
    }

    pub fn with_validator<F>(label: String, writing_mode: bool, validator: F) -> Self
    where
        F: Fn(&str, char) -> bool + Send + 'static,
    {
        Self {
            writing_mode,
            disabled: false,
            label,
            validator: Box::new(validator),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, value: &str) {
        let style = match (self.disabled, self.writing_mode) {
            (true, _) => Style::default().fg(Color::DarkGray),
            (false, true) => Style::default().add_modifier(Modifier::REVERSED),
            (false, false) => Style::default(),
        };
        let widget = Paragraph::new(format!("{}: {}", self.label, value)).style(style);
        f.render_widget(widget, area);
    }

    /// New value after typing `c`, or `None` when the box rejects it.
    pub fn handle_char(&self, current: &str, c: char) -> Option<String> {
        if self.writing_mode && !self.disabled && (self.validator)(current, c) {
            let mut value = current.to_string();
            value.push(c);
            Some(value)
        } else {
            None
        }
    }

    pub fn handle_backspace(&self, current: &str) -> Option<String> {
        if self.writing_mode && !self.disabled && !current.is_empty() {
            let mut value = current.to_string();
            value.pop();
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_focused_box_accepts_input() {
        let mut text_box = TextBox::new("first name".into(), false);
        assert_eq!(text_box.handle_char("Jo", 'e'), None);
        text_box.writing_mode = true;
        assert_eq!(text_box.handle_char("Jo", 'e'), Some("Joe".into()));
        assert_eq!(text_box.handle_backspace("Joe"), Some("Jo".into()));
        assert_eq!(text_box.handle_backspace(""), None);
    }

    #[test]
    fn validator_and_disabled_state_reject_input() {
        let mut text_box =
            TextBox::with_validator("player id".into(), true, |_, c| !c.is_whitespace());
        assert_eq!(text_box.handle_char("p", ' '), None);
        assert_eq!(text_box.handle_char("p", '1'), Some("p1".into()));
        text_box.disabled = true;
        assert_eq!(text_box.handle_char("p", '1'), None);
    }
}
