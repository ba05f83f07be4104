use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let shutdown = ShutdownHandle::install()?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::mount(&config.ui.variants, &config.props);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => {
                handle_event(&mut app, event);
                // Batch everything that arrived before this frame
                while let Some(event) = events.try_next() {
                    handle_event(&mut app, event);
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        app.commit();
    }

    shutdown.signal();
    tracing::info!("shutting down");
    drop(guard);
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        // Both only need a redraw, which the loop does anyway
        AppEvent::Tick | AppEvent::Resize(_, _) => {}
    }
}
