use std::ops::Range;

use super::{Align, Rgb, Surface, BLACK, WHITE};
use crate::entities::Rect;

/// One terminal cell: a background colour plus an optional glyph on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub bg: Rgb,
    pub glyph: char,
    pub fg: Rgb,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        bg: BLACK,
        glyph: ' ',
        fg: WHITE,
    };
}

/// A grid of terminal cells covering a logical pixel area.
///
/// Rectangles paint every cell they overlap, so thin shapes such as
/// projectiles never vanish between cells.  Round shapes and polygons paint
/// the cells whose centres they contain, falling back to the single cell
/// under their centre when they are smaller than a cell.
#[derive(Clone, Debug)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    logical_w: f32,
    logical_h: f32,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize, logical_w: f32, logical_h: f32) -> Self {
        Canvas {
            cols,
            rows,
            logical_w,
            logical_h,
            cells: vec![Cell::BLANK; cols * rows],
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        if self.cols != cols || self.rows != rows {
            self.cols = cols;
            self.rows = rows;
            self.cells = vec![Cell::BLANK; cols * rows];
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn cell_w(&self) -> f32 {
        self.logical_w / self.cols.max(1) as f32
    }

    fn cell_h(&self) -> f32 {
        self.logical_h / self.rows.max(1) as f32
    }

    fn paint(&mut self, col: usize, row: usize, color: Rgb) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Cell {
                bg: color,
                glyph: ' ',
                fg: WHITE,
            };
        }
    }

    fn center_of(&self, col: usize, row: usize) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.cell_w(),
            (row as f32 + 0.5) * self.cell_h(),
        )
    }

    fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_w()) as usize;
        let row = (y / self.cell_h()) as usize;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// Paint cells whose centre passes `inside`, within the bounding box.
    fn fill_where(&mut self, bounds: Rect, color: Rgb, inside: impl Fn(f32, f32) -> bool) {
        let cols = span(bounds.x, bounds.right(), self.cell_w(), self.cols);
        let rows = span(bounds.y, bounds.bottom(), self.cell_h(), self.rows);
        let mut painted = false;
        for row in rows {
            for col in cols.clone() {
                let (cx, cy) = self.center_of(col, row);
                if inside(cx, cy) {
                    self.paint(col, row, color);
                    painted = true;
                }
            }
        }
        if !painted {
            if let Some((col, row)) = self.cell_at(bounds.center_x(), bounds.center_y()) {
                self.paint(col, row, color);
            }
        }
    }
}

/// Cell indices overlapping `[lo, hi)` along one axis.
fn span(lo: f32, hi: f32, cell: f32, limit: usize) -> Range<usize> {
    if hi <= lo || hi <= 0.0 || cell <= 0.0 {
        return 0..0;
    }
    let start = (lo / cell).floor().max(0.0) as usize;
    let end = ((hi / cell).ceil().max(0.0) as usize).min(limit);
    start.min(end)..end
}

impl Surface for Canvas {
    fn size(&self) -> (f32, f32) {
        (self.logical_w, self.logical_h)
    }

    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Cell {
            bg: color,
            glyph: ' ',
            fg: WHITE,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let cols = span(rect.x, rect.right(), self.cell_w(), self.cols);
        let rows = span(rect.y, rect.bottom(), self.cell_h(), self.rows);
        for row in rows {
            for col in cols.clone() {
                self.paint(col, row, color);
            }
        }
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Rgb) {
        let (rx, ry) = (rect.w / 2.0, rect.h / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (ox, oy) = (rect.center_x(), rect.center_y());
        self.fill_where(rect, color, |x, y| {
            let dx = (x - ox) / rx;
            let dy = (y - oy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &(x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let bounds = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);
        self.fill_where(bounds, color, |x, y| point_in_polygon(points, x, y));
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb, align: Align) {
        if y < 0.0 {
            return;
        }
        let row = (y / self.cell_h()) as usize;
        if row >= self.rows {
            return;
        }
        let len = text.chars().count() as f32;
        let start = match align {
            Align::Left => x / self.cell_w(),
            Align::Center => x / self.cell_w() - len / 2.0,
        }
        .round() as i64;
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col as usize >= self.cols {
                continue;
            }
            let cell = &mut self.cells[row * self.cols + col as usize];
            cell.glyph = ch;
            cell.fg = color;
        }
    }
}

/// Even-odd ray cast.
fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
