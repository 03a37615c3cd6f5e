//! Output panel: generated YAML or error text, displayed verbatim

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_error = app.state.generated.starts_with("Error:");
    let text_style = if is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let content = Paragraph::new(app.state.generated.clone())
        .style(text_style)
        .block(
            Block::default()
                .title(" Generated YAML ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((app.state.output_scroll as u16, 0));

    frame.render_widget(content, area);
}
