use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::{NavItem, Outcome};

const CELL_WIDTH: usize = 5;

fn cell_style(item: &NavItem) -> Style {
    let style = match item.status {
        Some(Outcome::Correct) => Style::default().fg(Color::Green),
        Some(Outcome::Wrong) => Style::default().fg(Color::Red),
        Some(Outcome::Corrected) => Style::default().fg(Color::Yellow),
        None => Style::default().fg(Color::DarkGray),
    };
    if item.active {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

/// Draws the question grid, keeping the row with the active question in view.
pub fn render(frame: &mut Frame, area: Rect, items: &[NavItem]) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Color::DarkGray);
    let inner = block.inner(area);

    let per_row = (inner.width as usize / CELL_WIDTH).max(1);
    let rows: Vec<Line> = items
        .chunks(per_row)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|item| Span::styled(format!("{:>4} ", item.number), cell_style(item)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let active_row = items.iter().position(|item| item.active).unwrap_or(0) / per_row;
    let visible = (inner.height as usize).max(1);
    let scroll = active_row.saturating_sub(visible - 1);

    let widget = Paragraph::new(rows)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}
