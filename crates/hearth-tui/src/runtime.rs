use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use hearth_core::HuntRepository;
use tokio::sync::mpsc;

use crate::input::{handle_key, handle_paste};
use crate::render::render;
use crate::ui::{App, LoadKind, LoadRequest, LoadResult, Tui};

const TICK_RATE: Duration = Duration::from_millis(250);

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    repository: Arc<dyn HuntRepository>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_RATE);
    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<LoadResult>();

    dispatch_load(app, &repository, &load_tx);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Some(Ok(Event::Paste(text))) => handle_paste(app, &text),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = tick.tick() => app.notifications.tick(),
            Some(result) = load_rx.recv() => {
                app.apply_load(result);
            }
        }

        dispatch_load(app, &repository, &load_tx);
    }

    Ok(())
}

/// Start whatever fetch the last key queued; older fetches keep running and
/// their results are discarded on arrival
fn dispatch_load(
    app: &mut App,
    repository: &Arc<dyn HuntRepository>,
    tx: &mpsc::UnboundedSender<LoadResult>,
) {
    let Some(request) = app.take_pending_load() else {
        return;
    };
    let repository = Arc::clone(repository);
    let tx = tx.clone();
    tokio::spawn(async move {
        let generation = request.generation;
        // Inner task so a panic inside the fetch surfaces as an error
        let outcome = tokio::spawn(execute(repository, request))
            .await
            .map_err(|e| format!("load task failed: {e}"));
        let _ = tx.send(LoadResult {
            generation,
            outcome,
        });
    });
}

async fn execute(repository: Arc<dyn HuntRepository>, request: LoadRequest) -> Vec<hearth_core::Hunt> {
    match request.kind {
        LoadKind::All => repository.get_all().await,
        LoadKind::Search(query) => repository.search(&query).await,
    }
}
