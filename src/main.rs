mod app;
mod constants;
mod coordinator;
mod errors;
mod localization;
mod logging;
mod providers;
mod screens;
mod shapes;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    coordinator::{action::Action, runner::EffectRunner},
    logging::logger::{init_logger, log_info, log_warning},
    providers::{
        fs::{
            path::{get_base_path, get_log_file_path},
            settings_reader::FileSystemSettingsReader,
        },
        http::{
            client::ApiClient, player_reader::HttpPlayerReader, player_writer::HttpPlayerWriter,
        },
        player_reader::PlayerReader,
        player_writer::PlayerWriter,
        settings_reader::SettingsReader,
    },
    shapes::settings::Settings,
};
use crokey::crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{error::Error, sync::Arc, time::Duration};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let base_dir = get_base_path()?;

    // init logger
    init_logger(get_log_file_path(&base_dir));

    let settings_reader = FileSystemSettingsReader::new(&base_dir);
    let settings = match settings_reader.read().await {
        Ok(s) => s,
        Err(e) => {
            log_warning(&format!("using default settings: {}", e));
            Settings::default()
        }
    }
    .with_process_overrides();
    let client = ApiClient::new(&settings.base_url, settings.request_timeout())?;
    log_info(&format!("using data service at '{}'", client.base_url()));
    let (tx, rx) = unbounded_channel::<Action>();
    let runner = EffectRunner::new(
        Arc::new(HttpPlayerReader::new(client.clone())),
        Arc::new(HttpPlayerWriter::new(client)),
        tx,
    );
    let mut app = App::new(settings, runner);
    app.dispatch(Action::LoadAll);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(&mut terminal, app, rx).await;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

/// One key press or one completion is applied per step; completions that
/// arrived while waiting for input are drained before the next frame.
async fn run_app<
    B: Backend,
    R: PlayerReader + Send + Sync + 'static,
    W: PlayerWriter + Send + Sync + 'static,
>(
    terminal: &mut Terminal<B>,
    mut app: App<R, W>,
    mut rx: UnboundedReceiver<Action>,
) -> std::io::Result<()> {
    loop {
        while let Ok(action) = rx.try_recv() {
            app.dispatch(action);
        }
        terminal.draw(|f| app.render(f))?;
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
        tokio::task::yield_now().await;
    }
}
