//! **gridmaze** generates rectangular grid mazes (perfect, fully
//! connected passage graphs) from a deterministic seed, optionally
//! constrained to a silhouette mask, and finds shortest paths through
//! them.
//!
//! The pipeline: allocate a fully walled [`maze::Board`], carve it with a
//! randomized depth-first pass followed by Wilson's loop-erased random
//! walks, punch the two boundary openings, and hand the finished
//! [`maze::Maze`] to the caller. Rendering reads the wall bitmasks and
//! never mutates the grid.

pub mod dims;
pub mod generate;
pub mod mask;
pub mod maze;
pub mod pointset;
pub mod solve;

pub use dims::Dims;
pub use generate::{generate, GenerateError, MazeRequest, Random, Seed};
pub use mask::CellMask;
pub use maze::{Board, Bounds, Cell, CellWall, Maze};
pub use pointset::PointSet;
pub use solve::solve;
