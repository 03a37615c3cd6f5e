//! UI module for rendering the TUI

mod docs;
mod forms;
mod layout;
mod output;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let content_area = layout::create_layout(area);

    match app.state.current_view {
        View::BossForm => {
            let (form_area, output_area) = layout::split_main(content_area);
            forms::draw_boss_form(frame, form_area, app);
            output::draw(frame, output_area, app);
        }
        View::ItemForm => {
            let (form_area, output_area) = layout::split_main(content_area);
            forms::draw_item_form(frame, form_area, app);
            output::draw(frame, output_area, app);
        }
        View::Docs => docs::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
