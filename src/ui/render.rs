use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{component_columns, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let views = app.views();
    frame.render_widget(Header::new().widget(views.len()), header);
    frame.render_widget(Clear, body);

    let columns = component_columns(body, views.len());
    for (idx, (view, column)) in views.iter().zip(columns.iter()).enumerate() {
        frame.render_widget(view.widget(idx == app.focus()), *column);
    }

    frame.render_widget(Footer::new().widget(footer), footer);
}
