//! Tiling partition properties across the full supported range

use wtgrid::config::Settings;
use wtgrid::layout::tiler::{tile, weighted_split, Rect};

fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

#[test]
fn every_supported_count_is_an_exact_partition() {
    let settings = Settings::default();
    let canvas_area = settings.canvas_width as u64 * settings.canvas_height as u64;

    for count in 2..=settings.max_windows {
        let rects = tile(count, &settings).expect("count in supported range");
        assert_eq!(rects.len(), count, "tile({}) must return {} rects", count, count);

        let area: u64 = rects.iter().map(|r| r.width as u64 * r.height as u64).sum();
        assert_eq!(area, canvas_area, "tile({}) must cover the canvas", count);

        for i in 0..rects.len() {
            for j in i + 1..rects.len() {
                assert!(
                    !overlaps(&rects[i], &rects[j]),
                    "tile({}) rects {} and {} overlap",
                    count,
                    i,
                    j
                );
            }
        }

        for rect in &rects {
            assert!(rect.x + rect.width <= settings.canvas_width);
            assert!(rect.y + rect.height <= settings.canvas_height);
        }
    }
}

#[test]
fn cell_counts_respect_configured_minimums() {
    let settings = Settings::default();
    for count in 2..=settings.max_windows {
        for rect in tile(count, &settings).expect("count in supported range") {
            assert!(rect.cols >= settings.min_cols, "tile({}): {} cols", count, rect.cols);
            assert!(rect.rows >= settings.min_rows, "tile({}): {} rows", count, rect.rows);
        }
    }
}

#[test]
fn four_windows_make_equal_quadrants() {
    let rects = tile(4, &Settings::default()).expect("4 is supported");
    for rect in &rects {
        assert_eq!(rect.width, 1920);
        assert_eq!(rect.height, 1080);
    }
    assert_eq!((rects[0].x, rects[0].y), (0, 0));
    assert_eq!((rects[3].x, rects[3].y), (1920, 1080));
}

#[test]
fn weighted_split_always_sums_to_total() {
    for total in 1u32..=2000 {
        let parts = weighted_split(total, &[3, 4, 3]);
        assert_eq!(parts.iter().sum::<u32>(), total, "total {}", total);
        assert_eq!(parts.len(), 3);
    }
}

#[test]
fn weighted_split_of_real_canvas_widths_is_positive() {
    for total in [1280u32, 1920, 2560, 3440, 3840, 5120] {
        let parts = weighted_split(total, &[3, 4, 3]);
        assert_eq!(parts.iter().sum::<u32>(), total);
        assert!(parts.iter().all(|&p| p > 0));
        assert!(parts[1] > parts[0], "center column must be widest");
    }
}
