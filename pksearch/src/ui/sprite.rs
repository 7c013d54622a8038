//! Sprites rendered as coloured text.

use std::collections::HashMap;

use image::imageops;
use image::imageops::FilterType;
use image::Rgba;
use image::RgbaImage;

use tui::buffer::Buffer;
use tui::layout::Alignment;
use tui::layout::Rect;
use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget as _;

/// How many times taller a terminal cell is than it is wide.
pub const FONT_HEIGHT: f64 = 2.1;

/// Returns the size, in cells, of the largest picture with `image`'s aspect
/// ratio that fits inside `rect`.
pub fn fit(image: &RgbaImage, rect: Rect, font_height: f64) -> (u32, u32) {
  if image.width() == 0 || image.height() == 0 {
    return (0, 0);
  }

  // NOTE: Wider rectangles have a smaller aspect ratio, while taller
  // rectangles have a greater one.
  let rect_aspect = rect.height as f64 / rect.width as f64;
  let image_aspect = image.height() as f64 / image.width() as f64;

  if rect_aspect * font_height < image_aspect {
    let scale = rect.height as f64 / image.height() as f64;
    let width = (image.width() as f64 * scale * font_height) as u32;
    let height = (image.height() as f64 * scale) as u32;
    (width.min(rect.width as u32), height)
  } else {
    let scale = rect.width as f64 / image.width() as f64;
    let width = (image.width() as f64 * scale) as u32;
    let height = (image.height() as f64 * scale / font_height) as u32;
    (width, height.min(rect.height as u32))
  }
}

/// Shrinks `image` down to `width` by `height` cells, one `@` per opaque
/// pixel.
pub fn rasterize(image: &RgbaImage, width: u32, height: u32) -> Text<'static> {
  let mut text = Text::default();
  if width == 0 || height == 0 {
    return text;
  }

  // Transparent pixels are recoloured black so they don't bleed white into
  // their neighbours when interpolating.
  let mut image = image.clone();
  for Rgba([r, g, b, a]) in image.pixels_mut() {
    if *a == 0 {
      *r = 0;
      *g = 0;
      *b = 0;
    }
  }

  // The nearest-neighbour copy is only used as the alpha mask.
  let mask = imageops::resize(&image, width, height, FilterType::Nearest);
  let mut resized =
    imageops::resize(&image, width, height, FilterType::Triangle);
  for (Rgba([_, _, _, a]), Rgba([_, _, _, out])) in
    mask.pixels().zip(resized.pixels_mut())
  {
    *out = *a;
  }

  for row in resized.rows() {
    let spans = row
      .map(|&Rgba([r, g, b, a])| {
        Span::styled(
          if a != 0 { "@" } else { " " },
          Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD),
        )
      })
      .collect::<Vec<_>>();
    text.lines.push(Spans::from(spans));
  }
  text
}

/// Rasterized sprites, keyed by URL and draw size.
///
/// Rasterizing is far too slow to redo every frame, so each picture is only
/// redrawn when the space it is given changes.
#[derive(Default)]
pub struct SpriteCache {
  table: HashMap<(String, u16, u16), Text<'static>>,
}

impl SpriteCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Draws `image`, centred in `rect`.
  pub fn render(
    &mut self,
    url: &str,
    image: &RgbaImage,
    rect: Rect,
    buf: &mut Buffer,
  ) {
    if rect.width == 0 || rect.height == 0 {
      return;
    }

    let key = (url.to_string(), rect.width, rect.height);
    let text = self.table.entry(key).or_insert_with(|| {
      let (width, height) = fit(image, rect, FONT_HEIGHT);
      rasterize(image, width, height)
    });

    let lines = (text.lines.len() as u16).min(rect.height);
    let dy = (rect.height - lines) / 2;
    Paragraph::new(text.clone())
      .alignment(Alignment::Center)
      .render(Rect::new(rect.x, rect.y + dy, rect.width, lines), buf);
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.table.len()
  }
}
