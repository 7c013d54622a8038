//! The row under the card: base stats on the left, evolutionary line on the
//! right.

use std::iter;
use std::sync::Arc;

use image::RgbaImage;

use pkinfo::display::StatsPanel;
use pkinfo::display::EVOLUTION_HEADING;
use pkinfo::display::STATS_HEADING;

use tui::buffer::Buffer;
use tui::layout::Alignment;
use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Paragraph;
use tui::widgets::Widget as _;

use crate::ui::sprite::SpriteCache;
use crate::ui::style;
use crate::ui::style::StyleSheet;
use crate::ui::widgets::Chrome;

/// Which thumbnail is highlighted, if the line has focus.
#[derive(Copy, Clone, Debug)]
pub struct Selection {
  pub index: usize,
  pub is_focused: bool,
}

/// Draws the panel into `rect`, returning the area each thumbnail occupies,
/// in series order.
///
/// `sprites` holds the decoded picture for each thumbnail, where there is one.
pub fn render(
  panel: &StatsPanel,
  sprites: &[Option<Arc<RgbaImage>>],
  selection: Selection,
  cache: &mut SpriteCache,
  style_sheet: &StyleSheet,
  rect: Rect,
  buf: &mut Buffer,
) -> Vec<Rect> {
  let halves = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(rect);

  let chrome = Chrome::new()
    .title(Span::styled(STATS_HEADING, style_sheet.label))
    .style(style_sheet.unfocused);
  let inner = chrome.inner(halves[0]);
  chrome.render(halves[0], buf);
  render_stats(panel, style_sheet, inner, buf);

  let chrome = Chrome::new()
    .title(Span::styled(EVOLUTION_HEADING, style_sheet.label))
    .focused(selection.is_focused)
    .style(style_sheet.unfocused)
    .focus_style(style_sheet.focused);
  let inner = chrome.inner(halves[1]);
  chrome.render(halves[1], buf);
  render_line(panel, sprites, selection, cache, style_sheet, inner, buf)
}

fn render_stats(
  panel: &StatsPanel,
  style_sheet: &StyleSheet,
  rect: Rect,
  buf: &mut Buffer,
) {
  let style = style_sheet.unfocused;

  // Each line looks like this:
  //     HP  45 ██████████
  // DEFENSE  49 ███████████
  // ------- ---
  // The label column is as wide as the longest label; whatever is left over
  // goes to the bars.
  let label_width = panel
    .bars
    .iter()
    .map(|b| b.label.chars().count())
    .max()
    .unwrap_or(0);
  let data_width = label_width + 5;
  let bar_width = (rect.width as usize).saturating_sub(data_width);

  let y_max = rect.y + rect.height;
  for (y, bar) in (rect.y..y_max).zip(&panel.bars) {
    let len = panel.scale(bar, bar_width);
    let color = style::stat_color(&bar.label.to_lowercase());
    let spans = Spans::from(vec![
      Span::styled(
        format!("{:>width$}", bar.label, width = label_width),
        style_sheet.label,
      ),
      Span::styled(format!(" {:>3} ", bar.value), style),
      Span::styled(
        iter::repeat('█').take(len).collect::<String>(),
        style.fg(color),
      ),
    ]);
    buf.set_spans(rect.x, y, &spans, rect.width);
  }
}

fn render_line(
  panel: &StatsPanel,
  sprites: &[Option<Arc<RgbaImage>>],
  selection: Selection,
  cache: &mut SpriteCache,
  style_sheet: &StyleSheet,
  rect: Rect,
  buf: &mut Buffer,
) -> Vec<Rect> {
  let count = panel.thumbnails.len() as u32;
  if count == 0 || rect.width == 0 || rect.height == 0 {
    return Vec::new();
  }

  let columns = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(
      iter::repeat(Constraint::Ratio(1, count))
        .take(count as usize)
        .collect::<Vec<_>>(),
    )
    .split(rect);

  for (i, (thumbnail, &column)) in
    panel.thumbnails.iter().zip(&columns).enumerate()
  {
    let picture =
      Rect::new(column.x, column.y, column.width, column.height - 1);
    if let Some(Some(image)) = sprites.get(i) {
      cache.render(thumbnail.sprite.url(), image, picture, buf);
    }

    let mut label_style = style_sheet.unfocused;
    if i == selection.index {
      label_style = label_style.patch(style_sheet.selected);
      if selection.is_focused {
        label_style = label_style
          .patch(style_sheet.focused)
          .add_modifier(Modifier::REVERSED);
      }
    }
    Paragraph::new(Span::styled(thumbnail.label.as_str(), label_style))
      .alignment(Alignment::Center)
      .render(
        Rect::new(column.x, column.y + column.height - 1, column.width, 1),
        buf,
      );
  }

  columns
}
