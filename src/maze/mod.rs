pub mod cell;

pub use cell::{Cell, CellWall};

use smallvec::SmallVec;

use crate::dims::Dims;
use crate::mask::CellMask;

/// Axis-aligned rectangle selecting the active sub-region of the backing
/// buffer. Coordinates handed to the board are local to these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    /// Is the bounds-local point within `[0, w) × [0, h)`?
    pub fn contains(&self, p: Dims) -> bool {
        p.all_non_negative() && p.0 < self.w && p.1 < self.h
    }
}

/// The grid the carvers work on: a flat row-major buffer of wall bitmasks,
/// a row pitch, the active bounds and an optional exclusion mask.
///
/// The buffer is mutated in place by wall removal only; walls are never
/// re-added. Cells outside the bounds or masked off are never read or
/// written by carving or solving.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    stride: usize,
    bounds: Bounds,
    mask: Option<CellMask>,
}

impl Board {
    /// A fully walled `width × height` grid.
    pub fn new(width: i32, height: i32) -> Board {
        Board::with_mask(width, height, None)
    }

    /// A fully walled grid with masked cells marked blocked up front.
    pub fn with_mask(width: i32, height: i32, mask: Option<CellMask>) -> Board {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");

        let stride = width as usize;
        let mut cells = vec![Cell::FILLED; stride * height as usize];
        if let Some(mask) = &mask {
            for (index, cell) in cells.iter_mut().enumerate() {
                if mask.is_excluded(index) {
                    *cell = Cell::BLOCKED;
                }
            }
        }

        Board {
            cells,
            stride,
            bounds: Bounds {
                x: 0,
                y: 0,
                w: width,
                h: height,
            },
            mask,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.w
    }

    pub fn height(&self) -> i32 {
        self.bounds.h
    }

    /// Row pitch of the backing buffer; exceeds `width()` when the board is
    /// restricted to a sub-view.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw cell buffer, `stride × rows`, what a renderer walks.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Temporarily restricts the working region without reallocating the
    /// buffer. The new bounds must fit inside it.
    pub fn restrict(&mut self, bounds: Bounds) {
        assert!(bounds.x >= 0 && bounds.y >= 0 && bounds.w > 0 && bounds.h > 0);
        assert!(
            bounds.x + bounds.w <= self.stride as i32
                && (bounds.y + bounds.h) as usize * self.stride <= self.cells.len(),
            "bounds exceed the backing buffer"
        );
        self.bounds = bounds;
    }

    /// Buffer index of a bounds-local point.
    pub fn cell_index(&self, p: Dims) -> usize {
        (p.1 + self.bounds.y) as usize * self.stride + (p.0 + self.bounds.x) as usize
    }

    /// Direct buffer read; callers must have validated `is_inside` first.
    pub fn cell(&self, p: Dims) -> Cell {
        self.cells[self.cell_index(p)]
    }

    /// Direct buffer write; callers must have validated `is_inside` first.
    pub fn set_cell(&mut self, p: Dims, cell: Cell) {
        let index = self.cell_index(p);
        self.cells[index] = cell;
    }

    fn cell_mut(&mut self, p: Dims) -> &mut Cell {
        let index = self.cell_index(p);
        &mut self.cells[index]
    }

    /// Within the current bounds and not masked off. "Inside" is always
    /// mask-aware.
    pub fn is_inside(&self, p: Dims) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }

        match &self.mask {
            Some(mask) => !mask.is_excluded(self.cell_index(p)),
            None => true,
        }
    }

    /// `is_inside` of the neighbor one step through `wall`.
    pub fn is_inside_via(&self, p: Dims, wall: CellWall) -> bool {
        self.is_inside(p + wall.offset())
    }

    /// Clears the wall bit on `p`, and the mirrored bit on the neighbor iff
    /// the neighbor is inside. An open passage is visible from both sides.
    pub fn remove_wall(&mut self, p: Dims, wall: CellWall) {
        self.cell_mut(p).remove_wall(wall);

        let neighbor = p + wall.offset();
        if self.is_inside(neighbor) {
            self.cell_mut(neighbor).remove_wall(wall.reverse());
        }
    }

    /// Does `p` touch the outer edge of the current bounds?
    pub fn is_on_boundary(&self, p: Dims) -> bool {
        p.0 == 0 || p.1 == 0 || p.0 == self.bounds.w - 1 || p.1 == self.bounds.h - 1
    }

    /// Punches the single outer-facing wall of a boundary cell, checked in
    /// fixed priority: left edge, then right, then top, then bottom. An
    /// interior point is left untouched.
    pub fn open_boundary(&mut self, p: Dims) {
        if p.0 == 0 {
            self.remove_wall(p, CellWall::Left);
        } else if p.0 == self.bounds.w - 1 {
            self.remove_wall(p, CellWall::Right);
        } else if p.1 == 0 {
            self.remove_wall(p, CellWall::Top);
        } else if p.1 == self.bounds.h - 1 {
            self.remove_wall(p, CellWall::Bottom);
        }
    }

    /// Inside neighbors reachable from `p` through open walls.
    pub fn open_neighbors(&self, p: Dims) -> SmallVec<[Dims; 4]> {
        let cell = self.cell(p);
        CellWall::in_order()
            .into_iter()
            .filter(|&wall| !cell.has_wall(wall) && self.is_inside_via(p, wall))
            .map(|wall| p + wall.offset())
            .collect()
    }

    /// Number of addressable, unmasked cells in the current bounds.
    pub fn inside_count(&self) -> usize {
        Dims::iter_fill(Dims::ZERO, Dims(self.bounds.w, self.bounds.h))
            .filter(|&p| self.is_inside(p))
            .count()
    }
}

/// A finished maze: the carved board plus its two boundary openings.
/// Read-only by contract once generation returns it.
#[derive(Debug, Clone)]
pub struct Maze {
    board: Board,
    start: Dims,
    end: Dims,
}

impl Maze {
    pub(crate) fn new(board: Board, start: Dims, end: Dims) -> Maze {
        Maze { board, start, end }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    /// Shortest path between the maze's own endpoints.
    pub fn solve(&self) -> Option<Vec<Dims>> {
        crate::solve::solve(&self.board, self.start, self.end)
    }
}
