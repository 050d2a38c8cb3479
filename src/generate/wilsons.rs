use rand::Rng;

use super::{GenerateError, Random};
use crate::dims::Dims;
use crate::maze::{Board, CellWall};
use crate::pointset::PointSet;

/// Upper bound on steps for a single loop-erased walk. Hitting it means
/// the connectivity invariant is broken (e.g. a mask that splits the
/// unmasked region), which is a fatal generation error, not a timeout.
const WALK_STEP_BUDGET: usize = 100_000;

/// Attempts to seed an initial connected cell on a pristine grid before
/// giving up. One attempt always succeeds; the bound guards the loop.
const SEED_RETRY_LIMIT: usize = 4;

/// Wilson's algorithm: loop-erased random walks from not-yet-connected
/// cells into the already-connected set, yielding a uniform spanning tree
/// over every unmasked cell regardless of any depth-first bias.
pub fn carve(board: &mut Board, rng: &mut Random) -> Result<(), GenerateError> {
    let (mut maze, mut filled) = seed_sets(board, rng)?;

    while !filled.is_empty() {
        let start = filled.at(rng.gen_range(0..filled.len()));
        let walk = random_walk(board, rng, start, &maze)?;

        // The final walk point is already in the maze; every earlier point
        // joins it, knocking out the wall along the way.
        for i in 1..walk.len() {
            let prev = walk.at(i - 1);
            let cur = walk.at(i);
            let wall = CellWall::between(prev, cur).ok_or(GenerateError::BrokenWalk)?;
            board.remove_wall(prev, wall);

            let added = maze.add(prev);
            debug_assert!(added, "walk point {prev:?} was already connected");
            let removed = filled.remove(prev);
            debug_assert!(removed, "walk point {prev:?} was not pending");
        }
    }

    Ok(())
}

/// Scans the grid into the two working sets: inside cells still fully
/// walled are pending, everything else (already carved, masked or out of
/// region) counts as maze. A pristine grid gets one random interior wall
/// knocked out first so a walk has something to land on.
fn seed_sets(board: &mut Board, rng: &mut Random) -> Result<(PointSet, PointSet), GenerateError> {
    let bounds = board.bounds();

    for _ in 0..=SEED_RETRY_LIMIT {
        let mut maze = PointSet::new();
        let mut filled = PointSet::new();

        for p in Dims::iter_fill(Dims::ZERO, Dims(bounds.w, bounds.h)) {
            if board.is_inside(p) && board.cell(p).is_filled() {
                filled.add(p);
            } else {
                maze.add(p);
            }
        }

        if !maze.is_empty() {
            return Ok((maze, filled));
        }

        let p = Dims(
            rng.gen_range(1..bounds.w - 1),
            rng.gen_range(1..bounds.h - 1),
        );
        let wall = CellWall::from_index(rng.gen_range(0..CellWall::COUNT));
        board.remove_wall(p, wall);
    }

    Err(GenerateError::SeedRetriesExhausted)
}

/// One loop-erased random walk from `start` until it lands in `maze`.
/// Revisiting a point of the current walk erases the loop in between.
fn random_walk(
    board: &Board,
    rng: &mut Random,
    start: Dims,
    maze: &PointSet,
) -> Result<PointSet, GenerateError> {
    let mut walk = PointSet::new();
    walk.add(start);

    let mut current = start;
    let mut previous = start;

    for _ in 0..WALK_STEP_BUDGET {
        let next = step(board, rng, current, previous)?;

        if walk.contains(next) {
            walk.remove_after(next);
        } else {
            walk.add(next);
        }
        debug_assert!(walk.is_contiguous());

        previous = current;
        current = next;

        if maze.contains(next) {
            if !walk.is_contiguous() {
                return Err(GenerateError::BrokenWalk);
            }
            return Ok(walk);
        }
    }

    Err(GenerateError::WalkBudgetExhausted)
}

/// Draws a random direction and scans round-robin from it, skipping steps
/// that leave the addressable region or immediately back onto the
/// preceding walk point. A cell with no viable step at all breaks the
/// carver's invariant.
fn step(board: &Board, rng: &mut Random, current: Dims, previous: Dims) -> Result<Dims, GenerateError> {
    let first = rng.gen_range(0..CellWall::COUNT);
    for turn in 0..CellWall::COUNT {
        let next = current + CellWall::from_index(first + turn).offset();
        if next != previous && board.is_inside(next) {
            return Ok(next);
        }
    }

    Err(GenerateError::NoViableStep(current))
}
