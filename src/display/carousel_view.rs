use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::anime::DisplayRecord;
use crate::anime::color::terminal_color;
use crate::carousel::{Carousel, ItemBounds};

/// Columns between two adjacent cards.
pub const CARD_GAP: u16 = 2;
/// Rows reserved for the caption at the bottom of a card.
const CAPTION_HEIGHT: u16 = 3;
const MIN_CARD_WIDTH: u16 = 12;

/// Screen regions of the carousel view, recomputed for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub details: Rect,
    pub strip: Rect,
    /// Inside of the strip; the area cards scroll through.
    pub viewport: Rect,
    pub status: Rect,
    pub card_width: u16,
}

impl CarouselLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),         // details of the active title
                Constraint::Percentage(55), // card strip
                Constraint::Length(3),      // status
            ])
            .split(area);

        let strip = chunks[1];
        let viewport = Block::default().borders(Borders::ALL).inner(strip);

        // Covers are 3:4; a terminal cell is roughly twice as tall as wide.
        let card_width = (viewport.height as u32 * 3 / 2)
            .max(MIN_CARD_WIDTH as u32)
            .min(viewport.width.max(1) as u32) as u16;

        Self {
            details: chunks[0],
            strip,
            viewport,
            status: chunks[2],
            card_width,
        }
    }

    /// Unscrolled bounds of card `index`.
    pub fn item_bounds(&self, index: usize) -> ItemBounds {
        let advance = (self.card_width + CARD_GAP) as f64;
        ItemBounds::new(
            self.viewport.x as f64 + index as f64 * advance,
            self.card_width as f64,
        )
    }

    /// Bounds of the first two cards, the ones the carousel measures.
    pub fn measured_items(&self, item_count: usize) -> Vec<ItemBounds> {
        (0..item_count.min(2)).map(|i| self.item_bounds(i)).collect()
    }

    /// On-screen rect of card `index` after scrolling by `offset`, clipped
    /// to the viewport. `None` when the card is entirely off screen.
    pub fn card_rect(&self, index: usize, offset: f64) -> Option<Rect> {
        let bounds = self.item_bounds(index);
        let left = (bounds.left - offset.round()) as i64;
        let right = left + bounds.width as i64;
        let view_left = self.viewport.x as i64;
        let view_right = view_left + self.viewport.width as i64;

        let clipped_left = left.max(view_left);
        let clipped_right = right.min(view_right);
        if clipped_right <= clipped_left || self.viewport.height == 0 {
            return None;
        }

        Some(Rect::new(
            clipped_left as u16,
            self.viewport.y,
            (clipped_right - clipped_left) as u16,
            self.viewport.height,
        ))
    }
}

/// A card drawn in the last frame, for pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHitbox {
    pub index: usize,
    pub rect: Rect,
}

pub fn card_at(hitboxes: &[CardHitbox], column: u16, row: u16) -> Option<usize> {
    hitboxes
        .iter()
        .find(|hb| {
            let r = hb.rect;
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
        .map(|hb| hb.index)
}

/// Draw the whole carousel screen and return the visible card hitboxes.
pub fn render_carousel(
    f: &mut Frame,
    carousel: &Carousel,
    layout: &CarouselLayout,
    heading: &str,
    hovered: Option<usize>,
) -> Vec<CardHitbox> {
    render_details(f, carousel, layout.details, heading);

    let strip_title = format!(" Recommended ({}) ", carousel.len());
    f.render_widget(
        Block::default().borders(Borders::ALL).title(strip_title),
        layout.strip,
    );

    let mut hitboxes = Vec::new();
    if carousel.is_empty() {
        let empty = Paragraph::new("No recommendations for this season yet.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, layout.viewport);
    } else {
        let offset = carousel.offset();
        for (index, record) in carousel.records().iter().enumerate() {
            let Some(rect) = layout.card_rect(index, offset) else {
                continue;
            };
            let bounds = layout.item_bounds(index);
            let scrolled_left = bounds.left - offset.round();
            let clipped_left = (rect.x as f64) > scrolled_left;
            let clipped_right = (rect.right() as f64) < scrolled_left + bounds.width;

            let state = CardState {
                active: index == carousel.active(),
                hovered: hovered == Some(index),
                clipped_left,
                clipped_right,
            };
            render_card(f, record, rect, state);
            hitboxes.push(CardHitbox { index, rect });
        }
    }

    let status = format!(
        " {} / {} | ←→ browse | click to select | q quit ",
        if carousel.is_empty() { 0 } else { carousel.active() + 1 },
        carousel.len()
    );
    f.render_widget(
        Block::default().borders(Borders::ALL).title(status),
        layout.status,
    );

    hitboxes
}

#[derive(Debug, Clone, Copy, Default)]
struct CardState {
    active: bool,
    hovered: bool,
    clipped_left: bool,
    clipped_right: bool,
}

fn render_card(f: &mut Frame, record: &DisplayRecord, area: Rect, state: CardState) {
    let mut borders = Borders::ALL;
    if state.clipped_left {
        borders.remove(Borders::LEFT);
    }
    if state.clipped_right {
        borders.remove(Borders::RIGHT);
    }

    let border_style = if state.active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if state.hovered {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(borders)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let caption_height = CAPTION_HEIGHT.min(inner.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(caption_height)])
        .split(inner);

    // The cover itself is served elsewhere; show where it lives.
    let cover = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("#{}", record.id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            record.cover_url.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(cover, chunks[0]);

    let background = terminal_color(&record.background_color).unwrap_or(Color::Black);
    let foreground = terminal_color(&record.text_color).unwrap_or(Color::White);
    let caption = Paragraph::new(record.title.as_str())
        .style(
            Style::default()
                .bg(background)
                .fg(foreground)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(caption, chunks[1]);
}

fn render_details(f: &mut Frame, carousel: &Carousel, area: Rect, heading: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {heading} "));

    let lines = match carousel.active_record() {
        Some(record) => {
            let swatch = Style::default()
                .bg(terminal_color(&record.background_color).unwrap_or(Color::Black))
                .fg(terminal_color(&record.text_color).unwrap_or(Color::White));
            vec![
                Line::from(Span::styled(
                    record.title.as_str(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("AniList id: {}", record.id)),
                Line::from(format!("Cover: {}", record.cover_url)),
                Line::from(vec![
                    Span::raw("Colors: "),
                    Span::styled(
                        format!(" {} on {} ", record.text_color, record.background_color),
                        swatch,
                    ),
                ]),
            ]
        }
        None => vec![Line::from("Nothing to show.")],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CarouselLayout {
        // viewport: x=1, width=78, height=10 -> card width 15
        CarouselLayout {
            details: Rect::new(0, 0, 80, 8),
            strip: Rect::new(0, 8, 80, 12),
            viewport: Rect::new(1, 9, 78, 10),
            status: Rect::new(0, 20, 80, 3),
            card_width: 15,
        }
    }

    #[test]
    fn item_bounds_advance_by_width_plus_gap() {
        let l = layout();
        assert_eq!(l.item_bounds(0), ItemBounds::new(1.0, 15.0));
        assert_eq!(l.item_bounds(2), ItemBounds::new(35.0, 15.0));
        assert_eq!(l.measured_items(13).len(), 2);
        assert_eq!(l.measured_items(1).len(), 1);
    }

    #[test]
    fn cards_are_clipped_to_viewport() {
        let l = layout();
        assert_eq!(l.card_rect(0, 0.0), Some(Rect::new(1, 9, 15, 10)));
        // card 4 starts at 69 and would end at 84
        assert_eq!(l.card_rect(4, 0.0), Some(Rect::new(69, 9, 10, 10)));
        assert_eq!(l.card_rect(5, 0.0), None);
        // scrolled one step: card 0 is gone, card 1 starts 2 columns in
        assert_eq!(l.card_rect(0, 17.0), None);
        assert_eq!(l.card_rect(1, 15.0), Some(Rect::new(3, 9, 15, 10)));
    }

    #[test]
    fn hit_test_finds_card_under_pointer() {
        let hitboxes = [
            CardHitbox {
                index: 3,
                rect: Rect::new(1, 9, 15, 10),
            },
            CardHitbox {
                index: 4,
                rect: Rect::new(18, 9, 15, 10),
            },
        ];
        assert_eq!(card_at(&hitboxes, 1, 9), Some(3));
        assert_eq!(card_at(&hitboxes, 20, 18), Some(4));
        assert_eq!(card_at(&hitboxes, 16, 12), None);
        assert_eq!(card_at(&hitboxes, 20, 19), None);
    }

    #[test]
    fn new_layout_sizes_cards_from_viewport_height() {
        let l = CarouselLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(l.viewport.height, l.strip.height - 2);
        assert_eq!(l.card_width as u32, (l.viewport.height as u32 * 3 / 2).max(12));
    }
}
