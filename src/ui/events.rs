//! Event plumbing for the UI loop.
//!
//! Terminal input is read on a dedicated thread; spawned network tasks
//! post their outcomes into the same channel. The loop therefore sees one
//! linear stream of events regardless of where they originated.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::{Product, StoreError};
use crate::ui::cart::CartDelta;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// `GET /products` for the catalog screen resolved.
    CatalogLoaded(Result<Vec<Product>, StoreError>),
    /// `GET /products` for the search screen resolved.
    SearchLoaded(Result<Vec<Product>, StoreError>),
    /// The cart commit for one delta resolved.
    CartCommitted {
        delta: CartDelta,
        result: Result<(), StoreError>,
    },
    /// `DELETE /products/1` for the removal counter resolved.
    RemovalFinished(Result<(), StoreError>),
    /// `POST /products` resolved.
    FormSubmitted(Result<Product, StoreError>),
    /// `GET /products/{id}` for the showcase resolved.
    ShowcaseLoaded(Result<Product, StoreError>),
    /// A deferred search filter pass is due.
    FilterPass,
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
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
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

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
