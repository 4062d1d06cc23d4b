//! Property-based invariants for text shaping, arrangement and compositing.
//!
//! 1. `fit_to_width` output is exactly the requested width.
//! 2. `fit_to_width` is idempotent.
//! 3. Truncation never exceeds its bound.
//! 4. Ellipsis truncation of plain text ends with the ellipsis at full width.
//! 5. Weighted allocation fills the available space exactly.
//! 6. A row of windows tiles its parent without gaps or overlap.
//! 7. Drawing a block leaves every cell outside it untouched, styled or not.
//! 8. Grid tracks plus gaps add up to the grid size.
//! 9. Width table and escape stripping agree with reference crates.

use proptest::prelude::*;
use room_compose::layout::grid::Grid;
use room_compose::text::strip_styles;
use room_compose::{
    LayoutNode, Rect, Screen, Sizing, arrange, calc_sizes, display_width, fit_to_width,
    truncate_to_width, truncate_with_ellipsis,
};
use unicode_width::UnicodeWidthStr;

// ── Helpers ─────────────────────────────────────────────────────────────

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,8}",
        Just("日本語".to_string()),
        Just("한국".to_string()),
        Just("🎉".to_string()),
        Just("\x1b[31m".to_string()),
        Just("\x1b[1;34m".to_string()),
        Just("\x1b[0m".to_string()),
    ]
}

fn styled_text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

fn sizing() -> impl Strategy<Value = Sizing> {
    prop_oneof![
        (0u16..40).prop_map(Sizing::Fixed),
        (0u16..6).prop_map(Sizing::Weight),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-4. Text shaping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fit_is_exact_width(s in styled_text(), width in 0usize..60) {
        let fitted = fit_to_width(&s, width);
        prop_assert_eq!(display_width(&fitted), width, "input {:?}", s);
        if width == 0 {
            prop_assert!(fitted.is_empty());
        }
    }

    #[test]
    fn fit_is_idempotent(s in styled_text(), width in 0usize..60) {
        let once = fit_to_width(&s, width);
        prop_assert_eq!(fit_to_width(&once, width), once);
    }

    #[test]
    fn truncation_respects_bound(s in styled_text(), width in 0usize..60) {
        prop_assert!(display_width(&truncate_to_width(&s, width)) <= width);
        prop_assert!(display_width(&truncate_with_ellipsis(&s, width)) <= width);
    }

    #[test]
    fn ellipsis_marks_plain_cuts(s in "[a-z ]{2,40}", width in 1usize..40) {
        prop_assume!(s.len() > width);
        let cut = truncate_with_ellipsis(&s, width);
        prop_assert!(cut.ends_with('…'));
        prop_assert_eq!(display_width(&cut), width);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Arrangement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn weighted_allocation_fills_space(
        sizings in prop::collection::vec(sizing(), 1..8),
        available in 0u16..400,
    ) {
        let sizes = calc_sizes(&sizings, available);
        let total: u32 = sizes.iter().map(|&s| u32::from(s)).sum();
        prop_assert!(total <= u32::from(available));
        if sizings.iter().any(|s| matches!(s, Sizing::Weight(_))) {
            prop_assert_eq!(total, u32::from(available));
        }
    }

    #[test]
    fn row_of_windows_tiles_parent(
        sizings in prop::collection::vec(sizing(), 1..8),
        width in 1u16..300,
        height in 1u16..60,
    ) {
        let children = sizings
            .iter()
            .enumerate()
            .map(|(idx, sizing)| {
                let node = LayoutNode::window(format!("w{idx}"));
                match *sizing {
                    Sizing::Fixed(size) => node.fixed(size),
                    Sizing::Weight(weight) => node.weight(weight),
                }
            })
            .collect();
        let area = Rect::new(3, 2, width, height);
        let rects = arrange(&LayoutNode::row(children), area).unwrap();

        let mut ordered: Vec<Rect> = rects.values().copied().collect();
        ordered.sort_by_key(|rect| rect.x);
        let mut next_x = area.x;
        for rect in &ordered {
            prop_assert_eq!(rect.x, next_x);
            prop_assert_eq!(rect.y, area.y);
            prop_assert_eq!(rect.height, height);
            prop_assert!(rect.width > 0);
            next_x += rect.width;
        }
        if sizings.iter().any(|s| matches!(s, Sizing::Weight(_))) {
            prop_assert_eq!(next_x, area.x + width);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Compositor non-destruction
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn draw_block_only_touches_its_cells(
        width in 1usize..40,
        height in 1usize..8,
        x in 0usize..45,
        y in 0usize..10,
        block in prop::collection::vec("[a-z]{0,12}", 1..4),
        styled_rows in any::<u8>(),
    ) {
        let mut screen = Screen::new(width, height);
        let before: Vec<Vec<char>> = (0..height)
            .map(|row| {
                let line: String = (0..width)
                    .map(|col| char::from(b'A' + ((row * 7 + col) % 26) as u8))
                    .collect();
                if styled_rows & (1 << row) != 0 {
                    screen.set_line(row, &format!("\x1b[1;32m{line}\x1b[0m"));
                } else {
                    screen.set_line(row, &line);
                }
                line.chars().collect()
            })
            .collect();

        screen.draw_block(x, y, &block.join("\n"));

        for row in 0..height {
            let styled = screen.line(row).unwrap();
            prop_assert_eq!(display_width(styled), width);
            let after: Vec<char> = strip_styles(styled).chars().collect();
            prop_assert_eq!(after.len(), width);

            let drawn = row
                .checked_sub(y)
                .and_then(|offset| block.get(offset))
                .filter(|_| x < width);
            match drawn {
                None => prop_assert_eq!(&after, &before[row]),
                Some(line) => {
                    let end = (x + line.len()).min(width);
                    prop_assert_eq!(&after[..x], &before[row][..x]);
                    prop_assert_eq!(&after[end..], &before[row][end..]);
                    let placed: String = after[x..end].iter().collect();
                    prop_assert_eq!(placed.as_str(), &line[..end - x]);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Grid tracks
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_tracks_and_gaps_sum_to_size(
        rows in 1usize..6,
        cols in 1usize..6,
        gap in 0u16..3,
        extra_width in 0u16..200,
        extra_height in 0u16..60,
    ) {
        let width = gap * (cols as u16 - 1) + extra_width;
        let height = gap * (rows as u16 - 1) + extra_height;
        let mut grid = Grid::new(rows, cols);
        grid.set_size(width, height).set_gap(gap);
        grid.add_cell_span(0, 0, rows, cols, "all").unwrap();

        let col_total: u16 = grid.col_widths().iter().sum();
        let row_total: u16 = grid.row_heights().iter().sum();
        prop_assert_eq!(col_total + gap * (cols as u16 - 1), width);
        prop_assert_eq!(row_total + gap * (rows as u16 - 1), height);
        prop_assert_eq!(grid.cell_rect(0), Some(Rect::new(0, 0, width, height)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Reference crates
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn width_table_matches_unicode_width_for_common_scripts() {
    for sample in [
        "plain ascii",
        "日本語テキスト",
        "한국어",
        "中文字符",
        "ｆｕｌｌｗｉｄｔｈ",
        "🎉🚀🌍",
        "mixed 日本 and 🎉 text",
    ] {
        assert_eq!(display_width(sample), sample.width(), "{sample:?}");
    }
}

proptest! {
    #[test]
    fn strip_styles_matches_strip_ansi_escapes(s in styled_text()) {
        let reference = String::from_utf8(strip_ansi_escapes::strip(&s)).unwrap();
        prop_assert_eq!(strip_styles(&s), reference);
    }
}
