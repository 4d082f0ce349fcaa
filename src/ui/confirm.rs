use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Fill(1),
    ])
    .split(area);
    let popup = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(52),
        Constraint::Fill(1),
    ])
    .split(vertical[1])[1];

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Shuffle all questions and start over?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from("Answers, scores and pending reviews will be lost.".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Green).bold()),
            Span::raw(" yes   "),
            Span::styled("n", Style::default().fg(Color::Red).bold()),
            Span::raw(" no"),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Yellow)
                .title(" reshuffle "),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
