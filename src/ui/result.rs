use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::progression::Outcome;

const STAR_COUNT: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.state().score;
    let total = app.total_questions();
    let percentage = app.progression().percentage();
    let stars = star_rating(percentage).min(STAR_COUNT);

    let [summary, breakdown, controls] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .areas(area);

    render_score_summary(frame, summary, score, total, percentage, stars);
    render_question_breakdown(frame, breakdown, app, app.result_scroll());
    render_controls(frame, controls);
}

/// Number of lit stars out of five.
fn star_rating(percentage: f64) -> usize {
    ((percentage / 100.0) * STAR_COUNT as f64).ceil() as usize
}

fn star_color(stars: usize) -> Color {
    match stars {
        5 => Color::Green,
        4 => Color::Magenta,
        2 | 3 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    lit: usize,
) {
    let stars = Line::from(vec![
        Span::styled("* ".repeat(lit), Style::default().fg(Color::Yellow).bold()),
        Span::styled(
            "* ".repeat(STAR_COUNT - lit),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let content = vec![
        Line::from(Span::styled(
            "QUEST COMPLETE",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Final Score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} / {}", score, total),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        stars,
        Line::from(Span::styled(
            format!("{:.0}% Mastery Achieved", percentage),
            Style::default().fg(star_color(lit)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// One entry per question: outcome marker and text, then the chosen and
/// expected answers underneath.
fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let state = app.state();
    let mut lines: Vec<Line> = Vec::with_capacity(app.total_questions() * 2);

    for (index, (outcome, question)) in app
        .progression()
        .outcomes()
        .into_iter()
        .zip(app.questions().iter())
        .enumerate()
    {
        let (symbol, color) = match outcome {
            Outcome::Correct => ("+", Color::Green),
            Outcome::Incorrect => ("-", Color::Red),
            Outcome::Unanswered => ("?", Color::DarkGray),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {:>2}. ", symbol, index + 1), Style::default().fg(color)),
            Span::styled(question.question.as_str(), Style::default().fg(Color::Gray)),
        ]));

        let chosen = state.answer_for(index).unwrap_or("no answer");
        let mut detail = vec![
            Span::raw("       "),
            Span::styled(chosen, Style::default().fg(color)),
        ];
        if outcome != Outcome::Correct {
            detail.push(Span::styled("  ·  answer: ", Style::default().fg(Color::DarkGray)));
            detail.push(Span::styled(
                question.correct_answer.as_str(),
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(detail));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll(((scroll * 2) as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r new quest  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
