use crate::config::Config;
use crate::dog::DogClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::spawn_fetch_worker;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// Run the viewer until the user quits.
///
/// Network work runs on `runtime`; drawing and input stay on this thread.
pub fn run(config: &Config, client: DogClient, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new();
    app.attach_commands(spawn_fetch_worker(runtime, client, events.sender()));

    // First dog on startup, same path as a manual reload.
    app.request_reload();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::DogFetched(outcome)) => app.on_fetch_complete(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("Viewer closed");
    drop(guard);
    Ok(())
}
