use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SEPARATOR: &str = " = ";
const GAP: &str = "   ";

/// Footer listing the key bindings that are live on the current screen.
#[derive(Debug, Clone)]
pub struct NavigationFooter {}

impl NavigationFooter {
    pub fn new() -> Self {
        Self {}
    }

    /// `entries` are `(key, description)` pairs, packed left to right and
    /// wrapped so that no pair is split across lines.
    pub fn render(&self, f: &mut Frame, area: Rect, entries: Vec<(String, String)>) {
        // one column of left padding
        let width = area.width.saturating_sub(1) as usize;
        let lines: Vec<Line> = pack(&entries, width)
            .into_iter()
            .map(|row| {
                let spans = row.into_iter().flat_map(|(key, desc)| {
                    [
                        Span::styled(key.clone(), Style::default().fg(Color::Cyan)),
                        Span::raw(SEPARATOR),
                        Span::styled(desc.clone(), Style::default().fg(Color::White)),
                        Span::raw(GAP),
                    ]
                });
                Line::from(std::iter::once(Span::raw(" ")).chain(spans).collect::<Vec<_>>())
            })
            .collect();
        f.render_widget(Paragraph::new(lines), area);
    }
}

fn entry_width((key, desc): &(String, String)) -> usize {
    key.chars().count() + SEPARATOR.len() + desc.chars().count() + GAP.len()
}

fn pack(entries: &[(String, String)], width: usize) -> Vec<Vec<&(String, String)>> {
    let mut rows: Vec<Vec<&(String, String)>> = vec![];
    let mut used = 0;
    for entry in entries {
        let needed = entry_width(entry);
        match rows.last_mut() {
            Some(row) if used + needed <= width => row.push(entry),
            _ => {
                rows.push(vec![entry]);
                used = 0;
            }
        }
        used += needed;
    }
    rows
}
