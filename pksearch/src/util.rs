//! Miscellaneous layout helpers.

use tui::layout::Rect;

/// Returns true if `rect` contains the point at `x` and `y`.
pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
  rect.x <= x
    && x < rect.x.saturating_add(rect.width)
    && rect.y <= y
    && y < rect.y.saturating_add(rect.height)
}

/// Returns a `width` by `height` rectangle centered in `rect`, shrunk to fit
/// if necessary.
pub fn centered(rect: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(rect.width);
  let height = height.min(rect.height);
  Rect::new(
    rect.x + (rect.width - width) / 2,
    rect.y + (rect.height - height) / 2,
    width,
    height,
  )
}
