//! Screen tiling: partition the virtual canvas into window rectangles
//!
//! The tiler carves a fixed virtual canvas into exactly `count` rectangles
//! that cover it with no gaps and no overlaps. Pixel math is exact: every
//! split hands out whole pixels and distributes remainders, so the rectangle
//! areas always sum to the canvas area. Cell counts are a derived view,
//! rounded and clamped independently of the pixel partition.

use crate::config::Settings;
use crate::error::ConfigError;

/// One tiled slice of the virtual canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Terminal columns for this slice, clamped to the configured minimum.
    pub cols: u32,
    /// Terminal rows for this slice, clamped to the configured minimum.
    pub rows: u32,
}

/// Partition the canvas into `count` rectangles.
///
/// Counts with a natural grid get rows of equal columns. 5 and 7 get bespoke
/// asymmetric layouts. Larger counts fall through to an adaptive row-major
/// grid sized from the canvas aspect ratio.
pub fn tile(count: usize, settings: &Settings) -> Result<Vec<Rect>, ConfigError> {
    if count < 2 || count > settings.max_windows {
        return Err(ConfigError::InvalidCount {
            given: count.to_string(),
            min: 2,
            max: settings.max_windows,
        });
    }

    let rects = match count {
        2 => grid(&[2], settings),
        3 => grid(&[3], settings),
        4 => grid(&[2, 2], settings),
        5 => five_pane(settings),
        6 => grid(&[3, 3], settings),
        7 => seven_pane(settings),
        8 => grid(&[4, 4], settings),
        9 => grid(&[3, 3, 3], settings),
        10 => grid(&[5, 5], settings),
        n => adaptive(n, settings),
    };

    debug_assert_eq!(rects.len(), count);
    Ok(rects)
}

/// Rows of columns: one entry per row, giving the column count of that row.
fn grid(rows: &[usize], settings: &Settings) -> Vec<Rect> {
    let heights = even_split(settings.canvas_height, rows.len());
    let mut rects = Vec::new();
    let mut y = 0;

    for (row, &columns) in rows.iter().enumerate() {
        let widths = even_split(settings.canvas_width, columns);
        let mut x = 0;
        for width in widths {
            rects.push(make_rect(x, y, width, heights[row], settings));
            x += width;
        }
        y += heights[row];
    }

    rects
}

/// Five panes: three columns with {3,4,3} width weights. The outer columns
/// are split top/bottom, the wider center column spans the full height.
fn five_pane(settings: &Settings) -> Vec<Rect> {
    let widths = weighted_split(settings.canvas_width, &[3, 4, 3]);
    let halves = even_split(settings.canvas_height, 2);
    let center_x = widths[0];
    let right_x = widths[0] + widths[1];

    vec![
        make_rect(0, 0, widths[0], halves[0], settings),
        make_rect(0, halves[0], widths[0], halves[1], settings),
        make_rect(center_x, 0, widths[1], settings.canvas_height, settings),
        make_rect(right_x, 0, widths[2], halves[0], settings),
        make_rect(right_x, halves[0], widths[2], halves[1], settings),
    ]
}

/// Seven panes: a four-column top row with the two leftmost columns merged
/// (2+1+1), over a plain four-column bottom row.
fn seven_pane(settings: &Settings) -> Vec<Rect> {
    let quarters = even_split(settings.canvas_width, 4);
    let halves = even_split(settings.canvas_height, 2);
    let mut rects = Vec::with_capacity(7);

    let merged = quarters[0] + quarters[1];
    rects.push(make_rect(0, 0, merged, halves[0], settings));
    rects.push(make_rect(merged, 0, quarters[2], halves[0], settings));
    rects.push(make_rect(
        merged + quarters[2],
        0,
        quarters[3],
        halves[0],
        settings,
    ));

    let mut x = 0;
    for width in quarters {
        rects.push(make_rect(x, halves[0], width, halves[1], settings));
        x += width;
    }

    rects
}

/// Adaptive row-major layout for large counts.
///
/// Columns come from the canvas aspect ratio so windows stay roughly square;
/// the last row absorbs whatever does not fill a full row.
fn adaptive(count: usize, settings: &Settings) -> Vec<Rect> {
    let columns = ((count as f64 * settings.aspect_ratio()).sqrt().ceil() as usize).max(1);
    let rows = count.div_ceil(columns);
    let heights = even_split(settings.canvas_height, rows);

    let mut rects = Vec::with_capacity(count);
    let mut y = 0;
    let mut remaining = count;

    for height in heights {
        let in_row = remaining.min(columns);
        let widths = even_split(settings.canvas_width, in_row);
        let mut x = 0;
        for width in widths {
            rects.push(make_rect(x, y, width, height, settings));
            x += width;
        }
        y += height;
        remaining -= in_row;
    }

    rects
}

fn make_rect(x: u32, y: u32, width: u32, height: u32, settings: &Settings) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
        cols: to_cells(width, settings.px_per_col(), settings.min_cols),
        rows: to_cells(height, settings.px_per_row(), settings.min_rows),
    }
}

/// Convert a pixel dimension to terminal cells.
///
/// Round to nearest, then clamp to the configured minimum. The clamp can make
/// cell totals disagree with the exact pixel partition; that is cosmetic and
/// accepted.
fn to_cells(pixels: u32, px_per_cell: f64, min: u32) -> u32 {
    ((pixels as f64 / px_per_cell).round() as u32).max(min)
}

/// Split `total` into `parts` integers that differ by at most one.
///
/// The remainder goes to the first `total % parts` slices.
pub fn even_split(total: u32, parts: usize) -> Vec<u32> {
    let parts_u32 = parts as u32;
    let base = total / parts_u32;
    let remainder = total % parts_u32;

    (0..parts_u32)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Split `total` proportionally to `weights`, summing exactly to `total`.
///
/// Each ideal share is floored, then the leftover units go to the entries
/// with the largest fractional remainders, ties broken by original order.
pub fn weighted_split(total: u32, weights: &[u32]) -> Vec<u32> {
    let weight_sum: u32 = weights.iter().sum();
    let ideals: Vec<f64> = weights
        .iter()
        .map(|&w| total as f64 * w as f64 / weight_sum as f64)
        .collect();

    let mut sizes: Vec<u32> = ideals.iter().map(|&v| v.floor() as u32).collect();
    let allocated: u32 = sizes.iter().sum();
    let mut leftover = total - allocated;

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = ideals[a] - ideals[a].floor();
        let fb = ideals[b] - ideals[b].floor();
        fb.partial_cmp(&fa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    for index in order {
        if leftover == 0 {
            break;
        }
        sizes[index] += 1;
        leftover -= 1;
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    fn assert_exact_cover(rects: &[Rect], settings: &Settings) {
        let canvas_area = settings.canvas_width as u64 * settings.canvas_height as u64;
        let total: u64 = rects
            .iter()
            .map(|r| r.width as u64 * r.height as u64)
            .sum();
        assert_eq!(total, canvas_area, "areas must sum to the canvas area");

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "rectangles {:?} and {:?} overlap", a, b);
            }
        }
    }

    #[test]
    fn test_every_count_partitions_the_canvas() {
        let settings = settings();
        for count in 2..=settings.max_windows {
            let rects = tile(count, &settings).unwrap();
            assert_eq!(rects.len(), count);
            assert_exact_cover(&rects, &settings);
        }
    }

    #[test]
    fn test_four_windows_are_equal_quadrants() {
        let rects = tile(4, &settings()).unwrap();
        let expected = [
            (0, 0),
            (1920, 0),
            (0, 1080),
            (1920, 1080),
        ];
        for (rect, (x, y)) in rects.iter().zip(expected) {
            assert_eq!((rect.x, rect.y), (x, y));
            assert_eq!((rect.width, rect.height), (1920, 1080));
        }
    }

    #[test]
    fn test_five_pane_center_column_is_wider() {
        let rects = tile(5, &settings()).unwrap();
        let center = rects[2];
        assert_eq!(center.height, 2160);
        assert_eq!(center.width, 1536); // 3840 * 4 / 10
        assert_eq!(rects[0].width, 1152);
        assert_eq!(rects[0].height, 1080);
    }

    #[test]
    fn test_seven_pane_has_merged_top_left() {
        let rects = tile(7, &settings()).unwrap();
        assert_eq!(rects[0].width, 1920); // two quarters merged
        assert_eq!(rects.iter().filter(|r| r.y == 0).count(), 3);
        assert_eq!(rects.iter().filter(|r| r.y == 1080).count(), 4);
    }

    #[test]
    fn test_cell_minimums_hold_everywhere() {
        let settings = settings();
        for count in 2..=settings.max_windows {
            for rect in tile(count, &settings).unwrap() {
                assert!(rect.cols >= settings.min_cols);
                assert!(rect.rows >= settings.min_rows);
            }
        }
    }

    #[test]
    fn test_count_out_of_range() {
        let settings = settings();
        assert!(matches!(
            tile(1, &settings),
            Err(ConfigError::InvalidCount { .. })
        ));
        assert!(matches!(
            tile(25, &settings),
            Err(ConfigError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_even_split_distributes_remainder_first() {
        assert_eq!(even_split(10, 3), vec![4, 3, 3]);
        assert_eq!(even_split(9, 3), vec![3, 3, 3]);
        assert_eq!(even_split(7, 4), vec![2, 2, 2, 1]);
    }

    #[test]
    fn test_weighted_split_sums_exactly() {
        for total in [10u32, 100, 1000, 3840, 1001, 997] {
            let parts = weighted_split(total, &[3, 4, 3]);
            assert_eq!(parts.len(), 3);
            assert_eq!(parts.iter().sum::<u32>(), total);
            assert!(parts.iter().all(|&p| p > 0));
        }
    }

    #[test]
    fn test_weighted_split_prefers_largest_fraction() {
        // 10 over {1,1,1}: ideals 3.33 each, remainder 1 goes to the first.
        assert_eq!(weighted_split(10, &[1, 1, 1]), vec![4, 3, 3]);
        // 3840 over {3,4,3} divides exactly.
        assert_eq!(weighted_split(3840, &[3, 4, 3]), vec![1152, 1536, 1152]);
    }
}
