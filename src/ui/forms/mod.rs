//! Form rendering: category tabs plus a scrolling column of fields

mod field_renderer;

pub use field_renderer::draw_field;

use crate::app::App;
use crate::state::{BossCategory, Form, FormField, ItemCategory};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Draw the boss configurator form
pub fn draw_boss_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.boss_form;
    let labels: Vec<&str> = BossCategory::ALL.iter().map(|c| c.label()).collect();
    let selected = BossCategory::ALL
        .iter()
        .position(|c| *c == form.active_category)
        .unwrap_or(0);

    let fields: Vec<&FormField> = collect_fields(form);
    draw_form(
        frame,
        area,
        " Boss Configurator ",
        &labels,
        selected,
        &fields,
        form.active_field(),
    );
}

/// Draw the item configurator form
pub fn draw_item_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.item_form;
    let labels: Vec<&str> = ItemCategory::ALL.iter().map(|c| c.label()).collect();
    let selected = ItemCategory::ALL
        .iter()
        .position(|c| *c == form.active_category)
        .unwrap_or(0);

    let fields: Vec<&FormField> = collect_fields(form);
    draw_form(
        frame,
        area,
        " Item Configurator ",
        &labels,
        selected,
        &fields,
        form.active_field(),
    );
}

fn collect_fields(form: &dyn Form) -> Vec<&FormField> {
    (0..form.field_count())
        .filter_map(|i| form.get_field(i))
        .collect()
}

fn draw_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    category_labels: &[&str],
    selected_category: usize,
    fields: &[&FormField],
    active_field: usize,
) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category tabs
            Constraint::Min(0),    // Fields
        ])
        .split(inner);

    let tabs = Tabs::new(category_labels.to_vec())
        .select(selected_category)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    draw_fields(frame, chunks[1], fields, active_field);
}

fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        6
    } else {
        3
    }
}

/// Index of the first field to draw so that the active field stays visible
fn first_visible(fields: &[&FormField], active: usize, height: u16) -> usize {
    let mut start = active;
    let mut used = field_height(fields[active]);
    while start > 0 {
        let h = field_height(fields[start - 1]);
        if used + h > height {
            break;
        }
        used += h;
        start -= 1;
    }
    start
}

fn draw_fields(frame: &mut Frame, area: Rect, fields: &[&FormField], active: usize) {
    if fields.is_empty() || area.height == 0 {
        return;
    }
    let active = active.min(fields.len() - 1);
    let start = first_visible(fields, active, area.height);

    let mut y = area.y;
    for (index, field) in fields.iter().enumerate().skip(start) {
        let h = field_height(field);
        if y + h > area.y + area.height {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: h,
        };
        draw_field(frame, rect, field, index == active);
        y += h;
    }
}
