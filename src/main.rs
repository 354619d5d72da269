mod app;
mod config;
mod error;
mod event;
mod github;
mod logging;
mod profile;
mod reveal;
mod state;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::{Config, Overrides};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::{client::ProfileClient, loader};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio with live GitHub projects")]
struct Cli {
    #[arg(long, short, help = "GitHub account whose repositories are listed")]
    account: Option<String>,

    #[arg(long, help = "GitHub API base URL")]
    api_base: Option<String>,

    #[arg(long, help = "Path of the diagnostic log file")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(Overrides {
        account: cli.account,
        api_base: cli.api_base,
        log_file: cli.log_file,
    });

    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("warning: logging disabled: {e}");
    }
    info!(account = %config.account, api_base = %config.api_base, "starting folio");

    let mut app = App::new(&config);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    match ProfileClient::new(&config.api_base, &config.account) {
        Ok(client) => {
            app.state.begin_loading();
            loader::spawn_fetch(client, tx.clone());
        }
        Err(e) => warn!(error = %e, "could not build GitHub client, skipping project fetch"),
    }

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let reveal_timer = reveal::spawn_reveal(Duration::from_millis(config.reveal_delay_ms), tx.clone());

    let input_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });
    drop(tx);

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if app.should_quit {
            break;
        }
    }

    reveal_timer.abort();
    input_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("folio exited");
    Ok(())
}
