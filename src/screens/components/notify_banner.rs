use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{coordinator::state::Notice, localization::current_labels};

#[derive(Debug)]
pub struct NotifyBanner {}

impl NotifyBanner {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, f: &mut Frame, area: Rect, notice: Option<&Notice>) {
        if let Some(notice) = notice {
            let (msg, color, title) = match notice {
                Notice::Info(m) => (m, Color::Blue, current_labels().info),
                Notice::Error(m) => (m, Color::Red, current_labels().error),
            };
            let widget = Paragraph::new(msg.clone())
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(widget, area);
        }
    }
}
