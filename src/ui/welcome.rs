use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .areas(area);

    let summary = format!(
        "{} questions · {}",
        app.total_questions(),
        app.questions().origin()
    );

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to BrainQuest",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from("Test your knowledge one question at a time.".fg(Color::Gray)),
        Line::from(Span::styled(summary, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start your quest  ·  q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, middle);
}
