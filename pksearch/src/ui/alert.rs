//! The modal popup shown when a search fails.

use pkinfo::view::Alert;

use tui::buffer::Buffer;
use tui::layout::Alignment;
use tui::layout::Rect;
use tui::text::Span;
use tui::widgets::Clear;
use tui::widgets::Paragraph;
use tui::widgets::Widget as _;

use crate::ui::style::StyleSheet;
use crate::ui::widgets::Chrome;
use crate::util;

pub const FOOTER: &str = "Enter: aceptar";

/// Draws `alert` in a box centred over `rect`, blanking out whatever was
/// underneath.
pub fn render(
  alert: &Alert,
  style_sheet: &StyleSheet,
  rect: Rect,
  buf: &mut Buffer,
) {
  let width = (alert.message().chars().count() as u16 + 8).max(30);
  let popup = util::centered(rect, width, 5);
  Clear.render(popup, buf);

  let chrome = Chrome::new()
    .footer(Span::styled(FOOTER, style_sheet.label))
    .focused(true)
    .style(style_sheet.alert);
  let inner = chrome.inner(popup);
  chrome.render(popup, buf);

  if inner.height == 0 {
    return;
  }
  let y = inner.y + inner.height / 2;
  let message = Rect::new(inner.x, y, inner.width, 1);
  Paragraph::new(Span::styled(alert.message(), style_sheet.label))
    .alignment(Alignment::Center)
    .render(message, buf);
}
