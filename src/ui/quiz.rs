use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::{Mode, OptionState, OptionView, Snapshot};

use super::nav;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(snapshot) = app.snapshot() else {
        let widget = Paragraph::new("No questions loaded")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    };

    let has_code = snapshot.question.code.is_some();
    let chunks = create_layout(area, has_code);

    render_header(frame, chunks[0], &snapshot);
    render_progress(frame, chunks[1], &snapshot);
    render_question_text(frame, chunks[2], &snapshot);

    let mut next = 3;
    if let Some(code) = &snapshot.question.code {
        render_code_block(frame, chunks[next], code);
        next += 1;
    }

    render_options(frame, chunks[next], &snapshot.options, app.selected_option());
    nav::render(frame, chunks[next + 1], &app.session().nav_items());
    render_controls(frame, chunks[next + 2], app);
}

fn create_layout(area: Rect, has_code: bool) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
    ];
    if has_code {
        constraints.push(Constraint::Min(6));
    }
    constraints.extend([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(1),
    ]);

    Layout::vertical(constraints).margin(1).split(area)
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let (mode, mode_color) = match snapshot.mode {
        Mode::Normal => ("NORMAL", Color::Cyan),
        Mode::Review => ("REVIEWING MISSED QUESTIONS", Color::Magenta),
    };

    let line = Line::from(vec![
        Span::styled(mode, Style::default().fg(mode_color).bold()),
        Span::raw("   "),
        Span::styled(
            format!("correct {}", snapshot.scores.correct),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  ·  "),
        Span::styled(
            format!("wrong {}", snapshot.scores.wrong),
            Style::default().fg(Color::Red),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let color = match snapshot.mode {
        Mode::Normal => Color::Cyan,
        Mode::Review => Color::Magenta,
    };
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(snapshot.progress())
        .label(format!("{}/{}", snapshot.cursor + 1, snapshot.progress_total));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let text = vec![
        Line::from(Span::styled(
            format!("Question {}", snapshot.question.number),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            snapshot.question.text.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
    ];
    let widget = Paragraph::new(text).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_code_block(frame: &mut Frame, area: Rect, code: &str) {
    let code_lines: Vec<Line> = code
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Yellow))))
        .collect();

    let widget = Paragraph::new(code_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn option_style(state: OptionState, highlighted: bool) -> Style {
    match state {
        OptionState::Correct => Style::default().fg(Color::Green).bold(),
        OptionState::Wrong => Style::default().fg(Color::Red).bold(),
        OptionState::Neutral if highlighted => Style::default().fg(Color::Cyan).bold(),
        OptionState::Neutral => Style::default().fg(Color::Gray),
    }
}

fn render_options(frame: &mut Frame, area: Rect, options: &[OptionView], selected: usize) {
    let answered = options.iter().any(|option| option.state != OptionState::Neutral);
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected && !answered;
        let style = option_style(option.state, is_selected);
        let marker = match option.state {
            OptionState::Correct => "✓",
            OptionState::Wrong => "✗",
            OptionState::Neutral if is_selected => ">",
            OptionState::Neutral => " ",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option.label), style),
            Span::styled(option.text, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.jump_input() {
        Some(input) => format!("go to question: {}_   enter jump  ·  esc cancel", input),
        None => "j/k option  ·  enter answer  ·  n/p next/prev  ·  g jump  ·  s shuffle  ·  q quit"
            .to_string(),
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
