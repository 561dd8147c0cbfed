use ratatui::{prelude::*, widgets::Paragraph};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub fn render(frame: &mut Frame, tick: usize) {
    let area = frame.area();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let content = vec![
        Line::from(Span::styled(
            SPINNER[tick % SPINNER.len()].to_string(),
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from("Loading your quiz experience...".fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), middle);
}
