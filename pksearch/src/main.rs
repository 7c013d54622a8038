//! `pksearch`, a terminal front-end for the Pokémon info backend.

use std::io;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use anyhow::Context as _;
use anyhow::Result;

use clap::Parser as _;

use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;

use pkinfo::display;
use pkinfo::view::Session;
use pkinfo::Backend;
use pkinfo::Config;

use tui::backend::CrosstermBackend;
use tui::Terminal;

mod cli;
mod fetch;
mod logging;
mod ui;
mod util;

/// How long the UI waits for input before redrawing anyway.
const FRAME_TIME: Duration = Duration::from_millis(50);

/// How long the longest stat bar is in `--print` output.
const TEXT_BAR_WIDTH: usize = 30;

fn main() -> Result<()> {
  let cli = cli::Cli::parse();

  if cli.print {
    logging::to_stderr()?;
  } else if let Some(path) = cli.log_file.clone().or_else(logging::default_path)
  {
    logging::to_file(&path)?;
  }

  let mut config =
    Config::load(cli.config.as_deref()).context("could not load config")?;
  cli.apply(&mut config);
  tracing::info!(base_url = %config.base_url, "starting");

  match (&cli.name, cli.print) {
    (Some(name), true) => run_headless(&config, name),
    (name, _) => run_ui(&config, name.as_deref()),
  }
}

/// Looks up `name` and prints it, without a UI.
fn run_headless(config: &Config, name: &str) -> Result<()> {
  let api = config.api().context("could not build client")?;
  let mut session = Session::new(api);
  session.search(name);

  if let Some(alert) = session.view().alert() {
    bail!("{}: {}", name, alert);
  }
  print!("{}", display::to_text(session.view(), TEXT_BAR_WIDTH));
  Ok(())
}

/// Owns the terminal while the UI is up, and gives it back on drop.
struct Screen {
  terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
  fn enter() -> Result<Self> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(Self { terminal })
  }
}

impl Drop for Screen {
  fn drop(&mut self) {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(
      self.terminal.backend_mut(),
      LeaveAlternateScreen,
      DisableMouseCapture
    );
    let _ = self.terminal.show_cursor();
  }
}

/// Runs the UI until the user quits.
fn run_ui(config: &Config, name: Option<&str>) -> Result<()> {
  let api: Arc<dyn Backend> =
    Arc::new(config.api().context("could not build client")?);
  let fetcher = fetch::Fetcher::new(Arc::clone(&api));
  let sprites = fetch::Sprites::new(api);

  let mut app = ui::App::new();
  if let Some(command) = name.and_then(|name| app.search(name)) {
    fetcher.dispatch(command);
  }

  let mut screen = Screen::enter()?;
  loop {
    screen.terminal.draw(|f| app.render(f, &sprites))?;

    while let Some(outcome) = fetcher.try_recv() {
      if let Some(command) = app.receive(outcome) {
        fetcher.dispatch(command);
      }
    }

    if event::poll(FRAME_TIME)? {
      if let Some(command) = app.process_event(event::read()?) {
        fetcher.dispatch(command);
      }
    }

    if app.should_quit() {
      tracing::info!("quitting");
      return Ok(());
    }
  }
}
