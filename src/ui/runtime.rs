use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::net::Transport;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{map_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Floor between two draws; every event coalesces into the next frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn run(config: Config) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let transport =
        Transport::spawn(config.server, events.sender()).context("failed to start transport")?;
    let mut app = App::new(FRAME_INTERVAL, transport.orders());

    loop {
        let now = Instant::now();
        if app.render_due(now) {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        // Block until the next event, but wake up in time to honor a
        // pending render.
        let timeout = app.render_deadline(Instant::now()).unwrap_or(tick_rate);
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => {
                let focused = app.focused_product().cloned();
                match map_key(app.state(), focused.as_ref(), key) {
                    InputAction::None => {}
                    InputAction::Quit => app.request_quit(),
                    InputAction::CursorUp => app.move_cursor(-1),
                    InputAction::CursorDown => app.move_cursor(1),
                    InputAction::Dispatch(intent) => app.dispatch(intent),
                }
            }
            Ok(AppEvent::Resize(_, _)) => app.request_render(),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Server(intent)) => app.dispatch(intent),
            Ok(AppEvent::Net(status)) => app.set_net_status(status),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Restore the terminal before joining the transport thread so a
    // slow join never leaves the screen in the alternate buffer.
    drop(guard);
    transport.shutdown();
    Ok(())
}
