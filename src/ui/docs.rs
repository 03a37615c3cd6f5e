//! Documentation search view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the docs view: search input on top, results below
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results
        ])
        .split(area);

    draw_search_input(frame, chunks[0], app);
    draw_results(frame, chunks[1], app);
}

fn draw_search_input(frame: &mut Frame, area: Rect, app: &App) {
    let query = &app.state.docs.query;
    let content = Paragraph::new(Line::from(vec![
        Span::styled(query.clone(), Style::default().fg(Color::Cyan)),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(" Option Search (Enter to search) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(content, area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let docs = &app.state.docs;

    let block = Block::default()
        .title(format!(" Results ({}) ", docs.hits.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if docs.hits.is_empty() {
        let message = if docs.searched {
            "No options matched. Try another keyword."
        } else {
            "Type a keyword, e.g. Health, Prevent, Display ..."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = docs
        .hits
        .iter()
        .enumerate()
        .map(|(idx, hit)| {
            let is_selected = idx == docs.selected;
            let prefix = if is_selected { "▸ " } else { "  " };

            let header_style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let header = Line::from(vec![
                Span::styled(prefix, header_style),
                Span::styled(
                    hit.entry.option,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} / {}", hit.entry.kind.label(), hit.entry.category),
                    Style::default().fg(Color::Blue),
                ),
            ]);
            let description = Line::from(Span::styled(
                format!("    {}", hit.entry.description),
                Style::default().fg(Color::Gray),
            ));

            ListItem::new(vec![header, description])
        })
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(docs.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
