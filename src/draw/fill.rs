//! 4-connected flood fill.

use super::grid::{Cell, PixelGrid};

/// Replaces the 4-connected region of same-valued cells around `(x, y)` with `new_color`.
///
/// Returns `None` when the seed is out of bounds or already holds
/// `new_color` (transparent included). Filling the result again with the same
/// arguments therefore always returns `None`.
///
/// Traversal uses an explicit stack, so depth is bounded by the grid size
/// rather than the call stack. The input grid is left untouched; rows of the
/// result that the fill never reached stay shared with it.
pub fn flood_fill(grid: &PixelGrid, x: i32, y: i32, new_color: &Cell) -> Option<PixelGrid> {
    let (seed_col, seed_row) = grid.index(x, y)?;
    let target = grid.cell(x, y)?.clone();
    if target == *new_color {
        return None;
    }

    let (width, height) = (grid.width(), grid.height());
    let mut result = grid.clone();
    let mut stack = vec![(seed_col, seed_row)];

    while let Some((col, row)) = stack.pop() {
        if *result.cell_at(col, row) != target {
            continue;
        }
        *result.cell_mut(col, row) = new_color.clone();

        if col + 1 < width {
            stack.push((col + 1, row));
        }
        if col > 0 {
            stack.push((col - 1, row));
        }
        if row + 1 < height {
            stack.push((col, row + 1));
        }
        if row > 0 {
            stack.push((col, row - 1));
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;

    fn red() -> Cell {
        Some(Color::new("#FF0000"))
    }

    fn grid_from(rows: &[&str]) -> PixelGrid {
        // '.' is transparent, any other char becomes a one-letter token
        let height = rows.len();
        let width = rows[0].len();
        let mut grid = PixelGrid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    grid = grid
                        .with_cell(x as i32, y as i32, Some(Color::new(ch.to_string())))
                        .unwrap();
                }
            }
        }
        grid
    }

    fn render(grid: &PixelGrid) -> Vec<String> {
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(color) => color.as_str().chars().next().unwrap_or('?'),
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn fills_entire_transparent_grid() {
        let grid = PixelGrid::new(4, 4);
        let filled = flood_fill(&grid, 0, 0, &red()).unwrap();
        assert_eq!(filled.opaque_cells().count(), 16);
        assert!(filled.opaque_cells().all(|(_, _, c)| c.as_str() == "#FF0000"));
    }

    #[test]
    fn stops_at_region_boundary() {
        let grid = grid_from(&["..a..", ".a.a.", "..a..", "....."]);
        let filled = flood_fill(&grid, 2, 1, &Some(Color::new("b"))).unwrap();
        assert_eq!(render(&filled), vec!["..a..", ".aba.", "..a..", "....."]);
    }

    #[test]
    fn is_four_connected_not_eight() {
        let grid = grid_from(&["a.", ".a"]);
        let filled = flood_fill(&grid, 0, 0, &Some(Color::new("b"))).unwrap();
        assert_eq!(render(&filled), vec!["b.", ".a"]);
    }

    #[test]
    fn can_fill_with_transparent() {
        let grid = grid_from(&["aa.", "a.a"]);
        let cleared = flood_fill(&grid, 0, 0, &None).unwrap();
        assert_eq!(render(&cleared), vec!["...", "..a"]);
    }

    #[test]
    fn same_color_is_a_no_op() {
        let grid = grid_from(&["aa", "aa"]);
        assert!(flood_fill(&grid, 1, 1, &Some(Color::new("a"))).is_none());
        assert!(flood_fill(&PixelGrid::new(2, 2), 0, 0, &None).is_none());
    }

    #[test]
    fn second_fill_is_idempotent() {
        let grid = grid_from(&["ab.", "b..", "..a"]);
        let once = flood_fill(&grid, 2, 0, &red()).unwrap();
        assert!(flood_fill(&once, 2, 0, &red()).is_none());
    }

    #[test]
    fn out_of_bounds_seed_is_a_no_op() {
        let grid = PixelGrid::new(3, 3);
        assert!(flood_fill(&grid, -1, 0, &red()).is_none());
        assert!(flood_fill(&grid, 0, 3, &red()).is_none());
    }

    #[test]
    fn leaves_input_untouched() {
        let grid = grid_from(&["...", "aaa", "..."]);
        let before = grid.deep_clone();
        let _ = flood_fill(&grid, 0, 0, &red()).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn large_grid_does_not_recurse() {
        let grid = PixelGrid::new(512, 512);
        let filled = flood_fill(&grid, 256, 256, &red()).unwrap();
        assert_eq!(filled.opaque_cells().count(), 512 * 512);
    }
}
