use crate::carousel::params::DisplayParams;

/// Horizontal offset that brings `active` into view.
///
/// The active item's left edge lines up with the viewport, minus one gap so
/// the previous item peeks in. Near the end the offset is clamped so the
/// trailing edge of the last item sits on the viewport's right edge.
/// Never negative.
pub fn translate_x(active: usize, item_count: usize, params: &DisplayParams) -> f64 {
    if active == 0 {
        return 0.0;
    }

    let DisplayParams {
        item_advance,
        gap,
        visible_count,
    } = *params;
    let max_shift = item_count as f64 - visible_count;

    let offset = if active as f64 > max_shift {
        max_shift * item_advance + item_advance * visible_count.fract() - gap
    } else {
        active as f64 * item_advance - gap
    };
    offset.max(0.0)
}

/// Largest offset [`translate_x`] can return for this list.
pub fn max_translate_x(item_count: usize, params: &DisplayParams) -> f64 {
    translate_x(item_count.saturating_sub(1), item_count, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(item_advance: f64, gap: f64, visible_count: f64) -> DisplayParams {
        DisplayParams {
            item_advance,
            gap,
            visible_count,
        }
    }

    #[test]
    fn first_item_never_scrolls() {
        assert_eq!(translate_x(0, 13, &params(18.0, 2.0, 4.5)), 0.0);
    }

    #[test]
    fn middle_items_peek_previous() {
        let p = params(18.0, 2.0, 4.5);
        assert_eq!(translate_x(1, 13, &p), 16.0);
        assert_eq!(translate_x(8, 13, &p), 142.0);
    }

    #[test]
    fn tail_is_clamped() {
        let p = params(18.0, 2.0, 4.5);
        // (13 - 4.5) * 18 + 18 * 0.5 - 2
        let clamped = 8.5 * 18.0 + 9.0 - 2.0;
        assert_eq!(translate_x(9, 13, &p), clamped);
        assert_eq!(translate_x(12, 13, &p), clamped);
        assert_eq!(max_translate_x(13, &p), clamped);
    }

    #[test]
    fn neutral_params_do_not_scroll() {
        let p = DisplayParams::default();
        for active in 0..5 {
            assert_eq!(translate_x(active, 5, &p), 0.0);
        }
    }

    #[test]
    fn short_lists_stay_put() {
        // Everything fits: the clamped branch would go negative.
        let p = params(18.0, 2.0, 6.2);
        assert_eq!(translate_x(2, 3, &p), 0.0);
    }
}
