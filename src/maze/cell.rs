use crate::dims::Dims;

/// One grid cell: a wall bitmask over the four sides, plus the block flag
/// for structurally excluded (masked) cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell(u8);

impl Cell {
    /// All four walls present, the state of a freshly allocated cell.
    pub const FILLED: Cell = Cell(0b1111);
    /// Fully walled and structurally excluded. The block flag is never
    /// cleared by carving.
    pub const BLOCKED: Cell = Cell(0b1_1111);

    const WALL_BITS: u8 = 0b1111;
    const BLOCK_BIT: u8 = 0b1_0000;

    /// Still untouched by carving: every wall standing.
    pub fn is_filled(self) -> bool {
        self.0 & Self::WALL_BITS == Self::WALL_BITS
    }

    pub fn is_blocked(self) -> bool {
        self.0 & Self::BLOCK_BIT != 0
    }

    pub fn has_wall(self, wall: CellWall) -> bool {
        self.0 & wall.bit() != 0
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        self.0 &= !wall.bit();
    }

    /// The 4-bit wall mask alone, what a renderer reads per cell.
    pub fn walls(self) -> u8 {
        self.0 & Self::WALL_BITS
    }
}

/// One of the four sides of a cell, doubling as a direction of travel.
/// A step is always exactly one direction by construction; the bitmask
/// representation stays confined to [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub const COUNT: usize = 4;

    pub fn in_order() -> [CellWall; 4] {
        use CellWall::*;
        [Top, Right, Bottom, Left]
    }

    /// Round-robin lookup; any index maps onto the four directions.
    pub fn from_index(index: usize) -> CellWall {
        Self::in_order()[index % Self::COUNT]
    }

    pub fn bit(self) -> u8 {
        match self {
            Self::Top => 0b0001,
            Self::Right => 0b0010,
            Self::Bottom => 0b0100,
            Self::Left => 0b1000,
        }
    }

    /// Unit offset of one step through this wall.
    pub fn offset(self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }

    /// The same wall as seen from the neighboring cell.
    pub fn reverse(self) -> CellWall {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The wall of `from` facing `to`, if the two cells are adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<CellWall> {
        match (to.0 - from.0, to.1 - from.1) {
            (0, -1) => Some(Self::Top),
            (1, 0) => Some(Self::Right),
            (0, 1) => Some(Self::Bottom),
            (-1, 0) => Some(Self::Left),
            _ => None,
        }
    }
}
