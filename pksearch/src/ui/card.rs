//! The details card for the Pokémon on display.

use pkinfo::display::DetailsCard;
use pkinfo::display::DESCRIPTION_LABEL;
use pkinfo::display::HEIGHT_LABEL;
use pkinfo::display::TYPE_LABEL;
use pkinfo::display::WEIGHT_LABEL;
use pkinfo::model::Pokemon;

use image::RgbaImage;

use tui::buffer::Buffer;
use tui::layout::Alignment;
use tui::layout::Rect;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget as _;
use tui::widgets::Wrap;

use crate::ui::sprite::SpriteCache;
use crate::ui::style;
use crate::ui::style::StyleSheet;
use crate::ui::widgets::Chrome;

/// How many rows the card wants, bars included.
pub const HEIGHT: u16 = 12;

pub fn render(
  pokemon: &Pokemon,
  sprite: Option<&RgbaImage>,
  cache: &mut SpriteCache,
  style_sheet: &StyleSheet,
  rect: Rect,
  buf: &mut Buffer,
) {
  let card = DetailsCard::new(pokemon);

  let chrome = Chrome::new()
    .title(Span::styled(card.title.as_str(), style_sheet.label))
    .style(style_sheet.unfocused);
  let inner = chrome.inner(rect);
  chrome.render(rect, buf);
  if inner.width == 0 || inner.height == 0 {
    return;
  }

  let picture_width = (inner.width / 3).min(30);
  let picture = Rect::new(inner.x, inner.y, picture_width, inner.height);
  match sprite {
    Some(image) => cache.render(card.sprite.url(), image, picture, buf),
    // Until the picture shows up, show its alt text.
    None => Paragraph::new(Span::styled(
      card.name.as_str(),
      style_sheet.placeholder,
    ))
    .alignment(Alignment::Center)
    .render(
      Rect::new(picture.x, picture.y + picture.height / 2, picture.width, 1),
      buf,
    ),
  }

  let label = |text: &'static str| {
    Span::styled(format!("{}: ", text), style_sheet.label)
  };

  let mut types = vec![label(TYPE_LABEL)];
  for (i, slot) in pokemon.types.iter().enumerate() {
    if i != 0 {
      types.push(Span::raw(", "));
    }
    types.push(Span::styled(
      slot.display_name(),
      style_sheet.unfocused.fg(style::type_color(slot.ty.name())),
    ));
  }

  let text = Text::from(vec![
    Spans::from(types),
    Spans::from(vec![label(HEIGHT_LABEL), Span::raw(card.height.as_str())]),
    Spans::from(vec![label(WEIGHT_LABEL), Span::raw(card.weight.as_str())]),
    Spans::default(),
    Spans::from(label(DESCRIPTION_LABEL)),
    Spans::from(card.description.as_str()),
  ]);

  let details = Rect::new(
    inner.x + picture_width + 1,
    inner.y,
    inner.width.saturating_sub(picture_width + 1),
    inner.height,
  );
  Paragraph::new(text)
    .style(style_sheet.unfocused)
    .wrap(Wrap { trim: true })
    .render(details, buf);
}
