//! Small `tui` widgets shared by every part of the screen.

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::style::Style;
use tui::symbols::line;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Widget;

/// An animated "busy" indicator, advanced once per frame.
#[derive(Clone, Debug)]
pub struct Spinner<'a> {
  frame_number: usize,
  label: Option<&'a str>,
  style: Style,
}

impl<'a> Spinner<'a> {
  const FRAMES: &'static [&'static str] =
    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

  /// How many frames each icon stays up for.
  const HOLD: usize = 2;

  pub fn new(frame_number: usize) -> Self {
    Self {
      frame_number,
      label: None,
      style: Style::default(),
    }
  }

  pub fn label(mut self, label: &'a str) -> Self {
    self.label = Some(label);
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn into_spans(self) -> Spans<'a> {
    let frames = Self::FRAMES;
    let icon = frames[self.frame_number / Self::HOLD % frames.len()];

    let mut spans = Vec::new();
    if let Some(label) = self.label.filter(|l| !l.is_empty()) {
      spans.push(Span::styled(label, self.style));
      spans.push(Span::styled(" ", self.style));
    }
    spans.push(Span::styled(icon, self.style));
    Spans::from(spans)
  }
}

/// A horizontal rule above and below an area, with an optional label set into
/// each rule.
///
/// When focused, the labels are drawn reversed and marked with an arrow.
#[derive(Clone, Debug)]
pub struct Chrome<'a> {
  title: Option<Span<'a>>,
  footer: Option<Span<'a>>,
  is_focused: bool,
  style: Style,
  focus_style: Style,
}

impl<'a> Chrome<'a> {
  pub fn new() -> Self {
    Self {
      title: None,
      footer: None,
      is_focused: false,
      style: Style::default(),
      focus_style: Style::default(),
    }
  }

  pub fn title(mut self, title: impl Into<Span<'a>>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn footer(mut self, footer: impl Into<Span<'a>>) -> Self {
    self.footer = Some(footer.into());
    self
  }

  pub fn focused(mut self, is_focused: bool) -> Self {
    self.is_focused = is_focused;
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  /// Style patched over [`Chrome::style()`] while focused.
  pub fn focus_style(mut self, style: Style) -> Self {
    self.focus_style = style;
    self
  }

  /// Returns the area left for content once the rules are drawn.
  pub fn inner(&self, rect: Rect) -> Rect {
    Rect::new(
      rect.x + 1,
      rect.y + 1,
      rect.width.saturating_sub(2),
      rect.height.saturating_sub(2),
    )
  }

  fn draw_rule(
    &self,
    label: Option<&Span<'a>>,
    x: u16,
    y: u16,
    width: u16,
    buf: &mut Buffer,
  ) {
    let style = if self.is_focused {
      self.style.patch(self.focus_style)
    } else {
      self.style
    };
    buf.set_stringn(
      x,
      y,
      line::HORIZONTAL.repeat(width as usize),
      width as usize,
      style,
    );

    let label = match label {
      Some(label) if width > 4 => label,
      _ => return,
    };
    let mut label_style = style.patch(label.style);
    if self.is_focused {
      label_style = label_style.add_modifier(Modifier::REVERSED);
    }
    let marker = if self.is_focused { "▸ " } else { " " };
    let spans = Spans::from(vec![
      Span::styled(marker, label_style),
      Span::styled(label.content.clone(), label_style),
      Span::styled(" ", label_style),
    ]);
    buf.set_spans(x + 1, y, &spans, width - 2);
  }
}

impl Widget for Chrome<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height < 2 {
      return;
    }

    let bottom = rect.y + rect.height - 1;
    self.draw_rule(self.title.as_ref(), rect.x, rect.y, rect.width, buf);
    self.draw_rule(self.footer.as_ref(), rect.x, bottom, rect.width, buf);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
      .map(|x| buf.get(x, y).symbol.as_str())
      .collect()
  }

  #[test]
  fn spinner_cycles_and_labels() {
    let text = |n| {
      Spinner::new(n)
        .label("buscando")
        .into_spans()
        .0
        .iter()
        .map(|s| s.content.to_string())
        .collect::<String>()
    };
    assert_eq!(text(0), "buscando ⠋");
    assert_eq!(text(2), "buscando ⠙");
    assert_eq!(text(20), "buscando ⠋");
    assert_eq!(Spinner::new(0).into_spans().width(), 1);
  }

  #[test]
  fn chrome_sets_labels_into_rules() {
    let rect = Rect::new(0, 0, 12, 4);
    let mut buf = Buffer::empty(rect);
    let chrome = Chrome::new().title("top").footer("end");
    assert_eq!(chrome.inner(rect), Rect::new(1, 1, 10, 2));
    chrome.render(rect, &mut buf);

    assert_eq!(row(&buf, 0), "─ top ──────");
    assert_eq!(row(&buf, 1), "            ");
    assert_eq!(row(&buf, 3), "─ end ──────");
  }

  #[test]
  fn focused_chrome_marks_title() {
    let rect = Rect::new(0, 0, 12, 2);
    let mut buf = Buffer::empty(rect);
    Chrome::new().title("top").focused(true).render(rect, &mut buf);
    assert_eq!(row(&buf, 0), "─▸ top ─────");
  }

  #[test]
  fn short_chrome_draws_nothing() {
    let rect = Rect::new(0, 0, 12, 1);
    let mut buf = Buffer::empty(rect);
    Chrome::new().title("top").render(rect, &mut buf);
    assert_eq!(row(&buf, 0), "            ");
  }
}
