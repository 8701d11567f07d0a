use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::gateway::{CountryDetail, CountrySummary, GalleryImage, GatewayError};

/// Events consumed by the UI loop: terminal input plus gateway responses.
///
/// Gateway responses echo the generation stamped on the originating command
/// so stale results can be dropped before they touch view state.
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize,
    CountriesLoaded {
        generation: u64,
        result: Result<Vec<CountrySummary>, GatewayError>,
    },
    CountryLoaded {
        generation: u64,
        result: Result<CountryDetail, GatewayError>,
    },
    ImagesLoaded {
        generation: u64,
        result: Result<Vec<GalleryImage>, GatewayError>,
    },
    UploadFinished {
        generation: u64,
        result: Result<(), GatewayError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Short poll timeout keeps ticks on schedule.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Paste(text)) => {
                            if event_tx.send(AppEvent::Paste(text)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(_, _)) => {
                            if event_tx.send(AppEvent::Resize).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone of the sender used by the gateway worker to deliver responses.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
