pub mod app;
pub mod detail;
pub mod events;
pub mod input;
pub mod layout;
pub mod listing;
pub mod load;
pub mod mvi;
pub mod render;
pub mod theme;

mod terminal_guard;

use std::io;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::gateway::{worker, GatewayClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_CHANNEL_CAPACITY: usize = 32;

/// Run the UI loop on the calling thread, with gateway I/O on the given
/// runtime. Returns when the user quits.
pub fn run(client: GatewayClient, runtime: &Runtime) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = tokio::sync::mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    runtime.spawn(worker::run(command_rx, client, events.sender()));

    let mut app = App::new();
    app.attach_gateway(command_tx);
    app.refresh_countries();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::CountriesLoaded { generation, result }) => {
                app.on_countries_loaded(generation, result)
            }
            Ok(AppEvent::CountryLoaded { generation, result }) => {
                app.on_country_loaded(generation, result)
            }
            Ok(AppEvent::ImagesLoaded { generation, result }) => {
                app.on_images_loaded(generation, result)
            }
            Ok(AppEvent::UploadFinished { generation, result }) => {
                app.on_upload_finished(generation, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
