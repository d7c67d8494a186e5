//! Main TUI runner: terminal lifecycle and the event loop

use nexus_app::Engine;
use nexus_core::prelude::*;
use nexus_genai::GenerationService;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the terminal UI until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// loop itself. Pending project changes are written during shutdown.
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: GenerationService + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }
    result
}

fn run_loop<S>(term: &mut DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: GenerationService + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Replies from background tasks first, so the frame reflects them
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    info!("Leaving event loop");
    Ok(())
}
