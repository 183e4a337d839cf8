use ratatui::layout::Rect;

/// Horizontal extent of one rendered carousel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub left: f64,
    pub width: f64,
}

impl ItemBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

impl From<Rect> for ItemBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x as f64, rect.width as f64)
    }
}

/// Geometry measured from the first two rendered items.
///
/// - `item_advance`: distance of one step (item width + gap)
/// - `gap`: space between two adjacent items
/// - `visible_count`: how many items fit in the container, fractional
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayParams {
    pub item_advance: f64,
    pub gap: f64,
    pub visible_count: f64,
}

impl Default for DisplayParams {
    /// No meaningful scroll is possible yet.
    fn default() -> Self {
        Self {
            item_advance: 0.0,
            gap: 0.0,
            visible_count: 1.0,
        }
    }
}

impl DisplayParams {
    /// Measure from the container width and the bounds of the rendered items.
    ///
    /// Only the first two items are looked at. Fewer than two, or a layout
    /// where they do not advance left to right, yields the default.
    pub fn measure(container_width: f64, items: &[ItemBounds]) -> Self {
        let [first, second, ..] = items else {
            return Self::default();
        };

        let gap = (second.left - first.right()).max(0.0);
        let item_advance = first.width + gap;
        if !item_advance.is_finite() || item_advance <= 0.0 {
            return Self::default();
        }

        Self {
            item_advance,
            gap,
            visible_count: container_width.max(0.0) / item_advance,
        }
    }

    pub fn can_scroll(&self) -> bool {
        self.item_advance > 0.0
    }
}
