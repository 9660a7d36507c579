use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::api::StoreClient;
use crate::config::ConfigStore;
use crate::ui::actions::Actions;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the UI loop until quit.
///
/// One thread reads terminal input; network calls run on the tokio
/// runtime and post their outcomes into the same channel the input comes
/// from, so the loop below is the only place state ever changes.
pub fn run(config: ConfigStore) -> Result<()> {
    let cfg = config.get();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let client = Arc::new(StoreClient::new(
        cfg.api.base_url.clone(),
        Duration::from_secs(u64::from(cfg.api.connect_timeout_seconds)),
        Duration::from_secs(u64::from(cfg.api.timeout_seconds)),
    ));
    info!(base_url = %client.base_url(), "store client ready");

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let actions = Actions::new(client, runtime.handle().clone(), events.sender());

    let (mut terminal, guard) = setup_terminal().context("preparing terminal")?;

    let mut app = App::new(config);
    app.attach_actions(actions);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size from the frame itself.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::CatalogLoaded(result)) => app.on_catalog_loaded(result),
            Ok(AppEvent::SearchLoaded(result)) => app.on_search_loaded(result),
            Ok(AppEvent::CartCommitted { delta, result }) => app.on_cart_committed(delta, result),
            Ok(AppEvent::RemovalFinished(result)) => app.on_removal_finished(result),
            Ok(AppEvent::FormSubmitted(result)) => app.on_form_submitted(result),
            Ok(AppEvent::ShowcaseLoaded(result)) => app.on_showcase_loaded(result),
            Ok(AppEvent::FilterPass) => app.on_filter_pass(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
