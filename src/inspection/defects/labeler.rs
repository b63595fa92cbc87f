use std::collections::VecDeque;

use crate::inspection::raster::{BoundingBox, Raster, VisitedGrid};

/// Breadth-first 4-connected fill from `(x, y)`.
///
/// Every reached foreground pixel is marked in `visited` and the returned box
/// spans all of them, the seed included. A pixel is queued at most once.
pub fn flood_fill(input: &Raster, x: u32, y: u32, visited: &mut VisitedGrid) -> BoundingBox {
    let width = input.width();
    let height = input.height();
    let mut queue = VecDeque::new();
    let mut bbx = BoundingBox::at(x, y);

    visited.mark(x, y);
    queue.push_back((x, y));

    while let Some((px, py)) = queue.pop_front() {
        bbx.include(px, py);

        let neighbours = [
            (px.checked_sub(1), Some(py)),
            (px.checked_add(1), Some(py)),
            (Some(px), py.checked_sub(1)),
            (Some(px), py.checked_add(1)),
        ];

        for (nx, ny) in neighbours {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            if nx >= width || ny >= height {
                continue;
            }
            if visited.is_visited(nx, ny) || !input.is_foreground(nx, ny) {
                continue;
            }
            visited.mark(nx, ny);
            queue.push_back((nx, ny));
        }
    }

    bbx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::raster::{BACKGROUND, FOREGROUND};

    fn binary_from_rows(rows: &[&str]) -> Raster {
        let mut raster = Raster::filled(rows[0].len() as u32, rows.len() as u32, BACKGROUND);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    raster.set(x as u32, y as u32, FOREGROUND);
                }
            }
        }
        raster
    }

    fn visited_cells(grid: &VisitedGrid, width: u32, height: u32) -> Vec<(u32, u32)> {
        let mut cells = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if grid.is_visited(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn fill_follows_cardinal_neighbours_only() {
        let input = binary_from_rows(&[
            "##....",
            ".##...",
            "...#..",
            "......",
        ]);
        let mut visited = VisitedGrid::for_raster(&input);
        let bbx = flood_fill(&input, 0, 0, &mut visited);

        // (3, 2) only touches the component diagonally.
        assert_eq!(bbx, BoundingBox { min_x: 0, min_y: 0, max_x: 2, max_y: 1 });
        assert_eq!(visited_cells(&visited, 6, 4), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn fill_reaches_the_whole_snake() {
        let input = binary_from_rows(&[
            "#####",
            "....#",
            "#####",
            "#....",
            "#####",
        ]);
        let mut visited = VisitedGrid::for_raster(&input);
        let bbx = flood_fill(&input, 2, 4, &mut visited);

        assert_eq!(bbx, BoundingBox { min_x: 0, min_y: 0, max_x: 4, max_y: 4 });
        assert_eq!(visited.visited_count(), 17);
        for (x, y) in visited_cells(&visited, 5, 5) {
            assert!(input.is_foreground(x, y));
        }
    }

    #[test]
    fn single_pixel_component_has_zero_area() {
        let input = binary_from_rows(&[
            "...",
            ".#.",
            "...",
        ]);
        let mut visited = VisitedGrid::for_raster(&input);
        let bbx = flood_fill(&input, 1, 1, &mut visited);

        assert_eq!(bbx, BoundingBox::at(1, 1));
        assert_eq!(bbx.area(), 0);
        assert_eq!(visited.visited_count(), 1);
    }

    #[test]
    fn already_visited_pixels_block_the_fill() {
        let input = binary_from_rows(&[
            "#####",
        ]);
        let mut visited = VisitedGrid::for_raster(&input);
        visited.mark(2, 0);
        let bbx = flood_fill(&input, 0, 0, &mut visited);

        assert_eq!(bbx, BoundingBox { min_x: 0, min_y: 0, max_x: 1, max_y: 0 });
        assert!(!visited.is_visited(3, 0));
    }
}
