use crate::shapes::filter::FilterValue;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A filter dropdown: "all" followed by the vocabulary, cycled with
/// left/right while focused.
#[derive(Debug)]
pub struct Select {
    pub writing_mode: bool,
    label: String,
    all_label: String,
}

impl Select {
    pub fn new(label: String, all_label: String, writing_mode: bool) -> Self {
        Self {
            writing_mode,
            label,
            all_label,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, value: &FilterValue) {
        let shown = match value {
            FilterValue::All => self.all_label.clone(),
            FilterValue::Exact(v) => v.clone(),
        };
        let value_style = if self.writing_mode {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::raw(if self.writing_mode { "◂ " } else { "  " }),
            Span::styled(shown, value_style),
            Span::raw(if self.writing_mode { " ▸" } else { "" }),
        ]);
        let widget = Paragraph::new(Text::from(line)).block(
            Block::default().borders(Borders::ALL).title(Span::styled(
                self.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        );
        f.render_widget(widget, area);
    }

    pub fn next(&self, current: &FilterValue, values: &[String]) -> FilterValue {
        let options = values.len() + 1;
        option_at(values, (position(current, values) + 1) % options)
    }

    pub fn previous(&self, current: &FilterValue, values: &[String]) -> FilterValue {
        let options = values.len() + 1;
        option_at(values, (position(current, values) + options - 1) % options)
    }
}

// 0 is "all"; a value missing from the vocabulary counts as "all"
fn position(current: &FilterValue, values: &[String]) -> usize {
    match current {
        FilterValue::All => 0,
        FilterValue::Exact(v) => values.iter().position(|x| x == v).map_or(0, |i| i + 1),
    }
}

fn option_at(values: &[String], index: usize) -> FilterValue {
    match index {
        0 => FilterValue::All,
        i => FilterValue::Exact(values[i - 1].clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_and_the_vocabulary() {
        let select = Select::new("sport".into(), "All Sports".into(), true);
        let sports = vec!["NBA".to_string(), "NFL".to_string()];
        let first = select.next(&FilterValue::All, &sports);
        assert_eq!(first, FilterValue::Exact("NBA".into()));
        let second = select.next(&first, &sports);
        assert_eq!(second, FilterValue::Exact("NFL".into()));
        assert_eq!(select.next(&second, &sports), FilterValue::All);
        assert_eq!(
            select.previous(&FilterValue::All, &sports),
            FilterValue::Exact("NFL".into())
        );
    }

    #[test]
    fn empty_vocabulary_stays_on_all() {
        let select = Select::new("team".into(), "All Teams".into(), true);
        assert_eq!(select.next(&FilterValue::All, &[]), FilterValue::All);
        assert_eq!(select.previous(&FilterValue::All, &[]), FilterValue::All);
    }
}
