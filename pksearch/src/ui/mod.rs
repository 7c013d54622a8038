//! The pksearch UI.
//!
//! The screen is a single page, top to bottom:
//! - A search box.
//! - The details card for the Pokémon on display, if any.
//! - A row holding the base stats chart and the evolutionary line, once both
//!   are known.
//!
//! Focus is either on the search box or on the evolutionary line; Tab moves
//! it between them. A failed search pops up an alert, which swallows every
//! key until it is dismissed.
//!
//! [`App`] never blocks. Anything that needs the network comes out of
//! [`App::process_event()`] or [`App::receive()`] as a [`Command`] for the
//! caller to run.

use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use pkinfo::display;
use pkinfo::view::Command;
use pkinfo::view::Outcome;
use pkinfo::SearchView;

use tui::backend::Backend;
use tui::buffer::Buffer;
use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Widget;
use tui::Frame;

use crate::fetch::Sprites;
use crate::util;

mod alert;
mod card;
mod panel;
mod sprite;
mod style;
pub mod widgets;

use sprite::SpriteCache;
use style::StyleSheet;
use widgets::Chrome;
use widgets::Spinner;

/// Key help shown under the search box.
pub const HELP: &str = "Enter: buscar  Tab: evoluciones  Esc: salir";

/// Which part of the screen receives keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
  Search,
  Evolution,
}

/// The root UI type.
pub struct App {
  view: SearchView,
  focus: Focus,
  selected: usize,
  frame_number: usize,
  should_quit: bool,

  style_sheet: StyleSheet,
  sprite_cache: SpriteCache,

  // Recorded while rendering, for mouse hit-testing and the cursor.
  search_rect: Rect,
  thumbnail_rects: Vec<Rect>,
  cursor: Option<(u16, u16)>,
}

impl App {
  pub fn new() -> Self {
    Self {
      view: SearchView::new(),
      focus: Focus::Search,
      selected: 0,
      frame_number: 0,
      should_quit: false,
      style_sheet: StyleSheet::default(),
      sprite_cache: SpriteCache::new(),
      search_rect: Rect::default(),
      thumbnail_rects: Vec::new(),
      cursor: None,
    }
  }

  #[cfg(test)]
  pub fn view(&self) -> &SearchView {
    &self.view
  }

  #[cfg(test)]
  pub fn focus(&self) -> Focus {
    self.focus
  }

  pub fn should_quit(&self) -> bool {
    self.should_quit
  }

  /// Types `name` into the search box and submits it.
  pub fn search(&mut self, name: &str) -> Option<Command> {
    self.view.set_query(name);
    self.view.submit_search()
  }

  /// Feeds a finished request back into the view.
  pub fn receive(&mut self, outcome: Outcome) -> Option<Command> {
    let command = self.view.apply(outcome);

    // Keep the highlight on whoever is on display, if they are part of the
    // line at all.
    let line = self.view.evolution();
    self.selected = self
      .view
      .pokemon()
      .and_then(|p| line.iter().position(|e| e.name == p.name))
      .unwrap_or(0);
    if line.is_empty() && !self.view.phase().is_busy() {
      self.focus = Focus::Search;
    }

    command
  }

  /// Handles a terminal event, returning a request to run, if the event
  /// triggered one.
  pub fn process_event(&mut self, event: Event) -> Option<Command> {
    match event {
      Event::Key(key) => self.process_key(key),
      Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        ..
      }) => self.process_click(column, row),
      _ => None,
    }
  }

  fn process_key(&mut self, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
      self.should_quit = true;
      return None;
    }

    // The alert is modal.
    if self.view.alert().is_some() {
      if let KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') = key.code {
        self.view.dismiss_alert();
      }
      return None;
    }

    match key.code {
      KeyCode::Esc => {
        self.should_quit = true;
        return None;
      }
      KeyCode::Tab | KeyCode::BackTab => {
        self.toggle_focus();
        return None;
      }
      _ => {}
    }

    match self.focus {
      Focus::Search => match key.code {
        KeyCode::Enter => self.view.submit_search(),
        KeyCode::Backspace => {
          self.view.pop_char();
          None
        }
        KeyCode::Char('u') if ctrl => {
          self.view.clear_query();
          None
        }
        KeyCode::Char(c) if !ctrl => {
          self.view.push_char(c);
          None
        }
        _ => None,
      },
      Focus::Evolution => match key.code {
        KeyCode::Left | KeyCode::Up => {
          self.selected = self.selected.saturating_sub(1);
          None
        }
        KeyCode::Right | KeyCode::Down => {
          let last = self.view.evolution().len().saturating_sub(1);
          self.selected = (self.selected + 1).min(last);
          None
        }
        KeyCode::Enter => self.view.select_evolution_at(self.selected),
        // Typing goes back to the search box.
        KeyCode::Char(c) if !ctrl => {
          self.focus = Focus::Search;
          self.view.push_char(c);
          None
        }
        _ => None,
      },
    }
  }

  fn process_click(&mut self, column: u16, row: u16) -> Option<Command> {
    if self.view.alert().is_some() {
      return None;
    }

    if util::rect_contains(self.search_rect, column, row) {
      self.focus = Focus::Search;
      return None;
    }

    let index = self
      .thumbnail_rects
      .iter()
      .position(|&r| util::rect_contains(r, column, row))?;
    self.focus = Focus::Evolution;
    self.selected = index;
    self.view.select_evolution_at(index)
  }

  fn toggle_focus(&mut self) {
    self.focus = match self.focus {
      Focus::Search if display::stats_panel(&self.view).is_some() => {
        Focus::Evolution
      }
      _ => Focus::Search,
    };
  }

  /// Draws the whole UI onto `f`.
  pub fn render<B: Backend>(&mut self, f: &mut Frame<B>, sprites: &Sprites) {
    struct AppAsWidget<'a> {
      app: &'a mut App,
      sprites: &'a Sprites,
    }
    impl Widget for AppAsWidget<'_> {
      fn render(self, rect: Rect, buf: &mut Buffer) {
        self.app.draw(self.sprites, rect, buf)
      }
    }

    self.frame_number = self.frame_number.wrapping_add(1);
    let size = f.size();
    f.render_widget(
      AppAsWidget {
        app: self,
        sprites,
      },
      size,
    );
    if let Some((x, y)) = self.cursor {
      f.set_cursor(x, y);
    }
  }

  fn draw(&mut self, sprites: &Sprites, rect: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(3), Constraint::Min(0)])
      .split(rect);
    self.draw_search(chunks[0], buf);

    let body = chunks[1];
    self.thumbnail_rects.clear();
    if let Some(pokemon) = self.view.pokemon() {
      let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(card::HEIGHT), Constraint::Min(0)])
        .split(body);

      let image = sprites.get(&pokemon.sprite);
      card::render(
        pokemon,
        image.as_deref(),
        &mut self.sprite_cache,
        &self.style_sheet,
        rows[0],
        buf,
      );

      if let Some(stats) = display::stats_panel(&self.view) {
        let images = stats
          .thumbnails
          .iter()
          .map(|t| sprites.get(&t.sprite))
          .collect::<Vec<_>>();
        self.thumbnail_rects = panel::render(
          &stats,
          &images,
          panel::Selection {
            index: self.selected,
            is_focused: self.focus == Focus::Evolution,
          },
          &mut self.sprite_cache,
          &self.style_sheet,
          rows[1],
          buf,
        );
      }
    }

    if let Some(alert) = self.view.alert() {
      alert::render(alert, &self.style_sheet, rect, buf);
      self.cursor = None;
    }
  }

  fn draw_search(&mut self, rect: Rect, buf: &mut Buffer) {
    self.search_rect = rect;
    let is_focused = self.focus == Focus::Search;
    let chrome = Chrome::new()
      .title(Span::styled(display::TITLE, self.style_sheet.label))
      .footer(HELP)
      .focused(is_focused)
      .style(self.style_sheet.unfocused)
      .focus_style(self.style_sheet.focused);
    let inner = chrome.inner(rect);
    chrome.render(rect, buf);
    if inner.width == 0 || inner.height == 0 {
      self.cursor = None;
      return;
    }

    let query = self.view.query();
    let prompt = Span::styled("> ", self.style_sheet.label);
    let line = if query.is_empty() {
      Spans::from(vec![
        prompt,
        Span::styled(display::PLACEHOLDER, self.style_sheet.placeholder),
      ])
    } else {
      Spans::from(vec![prompt, Span::styled(query, self.style_sheet.focused)])
    };
    buf.set_spans(inner.x, inner.y, &line, inner.width);

    self.cursor = if is_focused {
      let typed = query.chars().count().min(inner.width as usize) as u16;
      let x = inner.x.saturating_add(2).saturating_add(typed);
      Some((x.min(inner.x + inner.width - 1), inner.y))
    } else {
      None
    };

    if self.view.phase().is_busy() {
      let spinner = Spinner::new(self.frame_number)
        .label("buscando")
        .style(self.style_sheet.unfocused)
        .into_spans();
      let width = spinner.width() as u16;
      if width < inner.width {
        buf.set_spans(
          inner.x + inner.width - width,
          inner.y,
          &spinner,
          width,
        );
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use pkinfo::api;
  use pkinfo::api::Blob;
  use pkinfo::model::BaseStat;
  use pkinfo::model::Decimetres;
  use pkinfo::model::Evolution;
  use pkinfo::model::EvolutionLine;
  use pkinfo::model::Hectograms;
  use pkinfo::model::NamedRef;
  use pkinfo::model::Pokemon;
  use pkinfo::model::TypeSlot;
  use pkinfo::view::NOT_FOUND_MESSAGE;

  use tui::backend::TestBackend;
  use tui::Terminal;

  use super::*;

  struct Offline;

  impl pkinfo::Backend for Offline {
    fn pokemon(&self, name: &str) -> Result<Pokemon, api::Error> {
      Err(api::Error::Status {
        url: name.to_string(),
        status: 503,
      })
    }

    fn evolution(&self, name: &str) -> Result<EvolutionLine, api::Error> {
      Err(api::Error::Status {
        url: name.to_string(),
        status: 503,
      })
    }

    fn blob(&self, blob: &Blob) -> Result<Box<[u8]>, api::Error> {
      Err(api::Error::Status {
        url: blob.url().to_string(),
        status: 503,
      })
    }
  }

  fn charizard() -> Pokemon {
    Pokemon {
      id: 6,
      name: "charizard".into(),
      sprite: Blob::default(),
      types: vec![
        TypeSlot {
          ty: NamedRef::new("fire"),
        },
        TypeSlot {
          ty: NamedRef::new("flying"),
        },
      ],
      stats: vec![
        BaseStat {
          stat: NamedRef::new("hp"),
          base_stat: 78,
        },
        BaseStat {
          stat: NamedRef::new("attack"),
          base_stat: 84,
        },
      ],
      height: Decimetres::new(17),
      weight: Hectograms::new(905),
      description: "Escupe fuego".into(),
    }
  }

  fn line() -> EvolutionLine {
    ["charmander", "charmeleon", "charizard"]
      .iter()
      .zip(4..)
      .map(|(&name, id)| Evolution {
        id,
        name: name.into(),
        sprite: Blob::default(),
      })
      .collect::<Vec<_>>()
      .into()
  }

  fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
      code,
      modifiers: KeyModifiers::NONE,
    })
  }

  fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
      kind: MouseEventKind::Down(MouseButton::Left),
      column,
      row,
      modifiers: KeyModifiers::NONE,
    })
  }

  fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
      assert!(app.process_event(key(KeyCode::Char(c))).is_none());
    }
  }

  /// Runs `name` through a successful search, answering from fixtures.
  fn found(app: &mut App, name: &str) {
    type_text(app, name);
    let command = app.process_event(key(KeyCode::Enter)).unwrap();
    let ticket = command.ticket();

    let follow_up = app.receive(Outcome::Pokemon {
      ticket,
      name: name.into(),
      result: Ok(charizard()),
    });
    assert!(matches!(
      follow_up,
      Some(Command::FetchEvolution { .. })
    ));
    assert!(app
      .receive(Outcome::Evolution {
        ticket,
        result: Ok(line()),
      })
      .is_none());
  }

  fn draw(app: &mut App) -> String {
    let sprites = Sprites::new(Arc::new(Offline));
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| app.render(f, &sprites)).unwrap();

    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
      for x in 0..buf.area.width {
        out.push_str(&buf.get(x, y).symbol);
      }
      out.push('\n');
    }
    out
  }

  #[test]
  fn empty_screen_shows_placeholder() {
    let mut app = App::new();
    let screen = draw(&mut app);
    assert!(screen.contains(display::TITLE));
    assert!(screen.contains(display::PLACEHOLDER));
    assert!(!screen.contains(display::STATS_HEADING));
  }

  #[test]
  fn typing_and_enter_searches() {
    let mut app = App::new();
    type_text(&mut app, "Pikachu");
    app.process_event(key(KeyCode::Backspace));

    let command = app.process_event(key(KeyCode::Enter)).unwrap();
    assert!(matches!(command, Command::FetchPokemon { .. }));
    assert_eq!(command.name(), "Pikach");
    assert!(draw(&mut app).contains("buscando"));
  }

  #[test]
  fn blank_search_does_nothing() {
    let mut app = App::new();
    type_text(&mut app, "   ");
    assert!(app.process_event(key(KeyCode::Enter)).is_none());
  }

  #[test]
  fn found_pokemon_fills_card_and_panel() {
    let mut app = App::new();
    found(&mut app, "charizard");

    let screen = draw(&mut app);
    assert!(screen.contains("#6 - CHARIZARD"));
    assert!(screen.contains("Tipo: Fuego, Volador"));
    assert!(screen.contains("Altura: 1.7 m"));
    assert!(screen.contains("Peso: 90.5 kg"));
    assert!(screen.contains("Escupe fuego"));
    assert!(screen.contains(display::STATS_HEADING));
    assert!(screen.contains(display::EVOLUTION_HEADING));
    assert!(screen.contains("#4 - Charmander"));
    assert!(screen.contains("#6 - Charizard"));
  }

  #[test]
  fn failed_line_hides_panel() {
    let mut app = App::new();
    type_text(&mut app, "charizard");
    let ticket = app.process_event(key(KeyCode::Enter)).unwrap().ticket();
    app.receive(Outcome::Pokemon {
      ticket,
      name: "charizard".into(),
      result: Ok(charizard()),
    });
    app.receive(Outcome::Evolution {
      ticket,
      result: Err(api::Error::Status {
        url: "evolution/charizard".into(),
        status: 500,
      }),
    });

    let screen = draw(&mut app);
    assert!(screen.contains("#6 - CHARIZARD"));
    assert!(!screen.contains(display::EVOLUTION_HEADING));
    assert!(app.view().alert().is_none());
  }

  #[test]
  fn clicking_a_thumbnail_searches_for_it() {
    let mut app = App::new();
    found(&mut app, "charizard");
    draw(&mut app);

    let rect = app.thumbnail_rects[0];
    let command = app.process_event(click(rect.x + 1, rect.y + 1)).unwrap();
    assert_eq!(command.name(), "charmander");
    assert_eq!(app.view().query(), "charmander");
    assert_eq!(app.focus(), Focus::Evolution);
  }

  #[test]
  fn line_is_hidden_until_it_arrives() {
    let mut app = App::new();
    found(&mut app, "charizard");
    draw(&mut app);

    let rect = app.thumbnail_rects[0];
    let command = app.process_event(click(rect.x + 1, rect.y + 1)).unwrap();
    let follow_up = app.receive(Outcome::Pokemon {
      ticket: command.ticket(),
      name: "charmander".into(),
      result: Ok(charizard()),
    });
    assert!(follow_up.is_some());

    let screen = draw(&mut app);
    assert!(!screen.contains(display::EVOLUTION_HEADING));
    assert!(app.thumbnail_rects.is_empty());
    assert_eq!(app.focus(), Focus::Evolution);
  }

  #[test]
  fn long_query_keeps_cursor_in_the_box() {
    let mut app = App::new();
    app.view.set_query("x".repeat(70_000));
    draw(&mut app);

    let (x, y) = app.cursor.unwrap();
    assert_eq!((x, y), (98, 1));
  }

  #[test]
  fn keyboard_selects_from_line() {
    let mut app = App::new();
    found(&mut app, "charizard");
    // The Pokémon on display starts out highlighted.
    assert_eq!(app.selected, 2);

    app.process_event(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Evolution);
    app.process_event(key(KeyCode::Left));

    let command = app.process_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(command.name(), "charmeleon");
  }

  #[test]
  fn tab_stays_in_search_without_a_line() {
    let mut app = App::new();
    app.process_event(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Search);
  }

  #[test]
  fn failed_search_pops_up_modal_alert() {
    let mut app = App::new();
    type_text(&mut app, "agumon");
    let command = app.process_event(key(KeyCode::Enter)).unwrap();
    app.receive(Outcome::Pokemon {
      ticket: command.ticket(),
      name: "agumon".into(),
      result: Err(api::Error::Status {
        url: "pokemon-info/agumon".into(),
        status: 404,
      }),
    });
    assert!(draw(&mut app).contains(NOT_FOUND_MESSAGE));

    // Keys other than the dismissal keys are swallowed.
    assert!(app.process_event(key(KeyCode::Char('x'))).is_none());
    assert_eq!(app.view().query(), "agumon");
    app.process_event(key(KeyCode::Esc));
    assert!(!app.should_quit());

    assert!(app.view().alert().is_none());
    assert!(!draw(&mut app).contains(NOT_FOUND_MESSAGE));
  }

  #[test]
  fn escape_and_ctrl_c_quit() {
    let mut app = App::new();
    app.process_event(key(KeyCode::Esc));
    assert!(app.should_quit());

    let mut app = App::new();
    app.process_event(Event::Key(KeyEvent {
      code: KeyCode::Char('c'),
      modifiers: KeyModifiers::CONTROL,
    }));
    assert!(app.should_quit());
    assert_eq!(app.view().query(), "");
  }
}
