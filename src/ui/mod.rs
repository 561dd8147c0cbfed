mod loading;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Phase;

pub use loading::render as render_loading;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [header, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
    render_header(frame, header);

    match app.phase() {
        Phase::Welcome => welcome::render(frame, body, app),
        Phase::InProgress => quiz::render(frame, body, app),
        Phase::Complete => result::render(frame, body, app),
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(" BRAINQUEST", Style::default().fg(Color::Magenta).bold()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
