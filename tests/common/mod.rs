//! Shared test utilities.

#![allow(dead_code)]

use dualcount::ui::app::App;
use dualcount::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Draw `app` once into an in-memory terminal and return the screen text,
/// one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}
