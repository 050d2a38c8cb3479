mod depth_first;
mod wilsons;

use std::hash::Hasher;

use fnv::FnvHasher;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dims::Dims;
use crate::mask::CellMask;
use crate::maze::{Board, Maze};

/// Random number generator used for anything where determinism is
/// required. The whole pipeline consumes exactly one of these in a fixed,
/// algorithm-defined order, so identical seeds reproduce identical mazes.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub const MIN_WIDTH: i32 = 10;
pub const MAX_WIDTH: i32 = 200;
pub const MIN_HEIGHT: i32 = 10;
pub const MAX_HEIGHT: i32 = 100;

/// Seed of the maze.
///
/// Textual seeds are hashed with FNV-1a, so the same text maps to the same
/// generator state on every platform and run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    pub fn to_u64(&self) -> u64 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(text) => {
                let mut hasher = FnvHasher::default();
                hasher.write(text.as_bytes());
                hasher.finish()
            }
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Number(0)
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_owned())
    }
}

/// A maze generation request.
///
/// `width` and `height` outside the supported range are clamped, not
/// rejected. `start` and `end` default to the top-left and bottom-right
/// corners; when given, they must lie on the outer boundary of the
/// unmasked grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MazeRequest {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub seed: Seed,
    /// Packed exclusion bitmap, one bit per cell in row-major order,
    /// MSB-first within each byte. A set bit excludes the cell.
    #[serde(default)]
    pub mask: Option<Vec<u8>>,
    #[serde(default)]
    pub start: Option<Dims>,
    #[serde(default)]
    pub end: Option<Dims>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("exclusion mask too short: need {expected} bits, got {actual}")]
    MaskTooShort { expected: usize, actual: usize },

    #[error("endpoint {0:?} is not on the unmasked outer boundary")]
    InvalidEndpoint(Dims),

    #[error("random walk exceeded its step budget without reaching the maze")]
    WalkBudgetExhausted,

    #[error("random walk has no viable step from {0:?}")]
    NoViableStep(Dims),

    #[error("loop-erased walk is not contiguous")]
    BrokenWalk,

    #[error("could not seed an initial connected cell")]
    SeedRetriesExhausted,
}

/// Generates a maze: clamp the dimensions, allocate the fully walled grid,
/// carve depth-first, finish with Wilson's loop-erased walks, then punch
/// the start and end openings.
///
/// The result is the only value escaping the call; the caller owns it
/// exclusively and the grid is read-only by contract from here on.
pub fn generate(request: &MazeRequest) -> Result<Maze, GenerateError> {
    let width = request.width.clamp(MIN_WIDTH, MAX_WIDTH);
    let height = request.height.clamp(MIN_HEIGHT, MAX_HEIGHT);
    if width != request.width || height != request.height {
        log::debug!(
            "maze size clamped from {}x{} to {}x{}",
            request.width,
            request.height,
            width,
            height
        );
    }

    let cell_count = width as usize * height as usize;
    let mask = match &request.mask {
        Some(bytes) => Some(CellMask::from_packed(bytes, cell_count).ok_or(
            GenerateError::MaskTooShort {
                expected: cell_count,
                actual: bytes.len() * 8,
            },
        )?),
        None => None,
    };

    let mut board = Board::with_mask(width, height, mask);

    let start = request.start.unwrap_or(Dims(0, 0));
    let end = request.end.unwrap_or(Dims(width - 1, height - 1));
    for p in [start, end] {
        if !board.is_inside(p) || !board.is_on_boundary(p) {
            return Err(GenerateError::InvalidEndpoint(p));
        }
    }

    let mut rng = Random::seed_from_u64(request.seed.to_u64());

    depth_first::carve(&mut board, &mut rng, None);
    wilsons::carve(&mut board, &mut rng)?;

    board.open_boundary(start);
    board.open_boundary(end);

    Ok(Maze::new(board, start, end))
}
