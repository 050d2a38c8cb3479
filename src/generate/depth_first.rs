use rand::Rng;

use super::Random;
use crate::dims::Dims;
use crate::maze::{Board, CellWall};

/// Randomized depth-first carving: an explicit-stack backtracker producing
/// a spanning tree over the connected unmasked component containing the
/// seed cell. The stack keeps recursion depth off the call stack on large
/// grids.
///
/// Disconnected unmasked regions are left untouched; Wilson's pass picks
/// those up afterwards.
pub fn carve(board: &mut Board, rng: &mut Random, start: Option<Dims>) {
    let Some(start) = start.or_else(|| first_inside_cell(board)) else {
        // Everything is masked off; nothing to carve.
        return;
    };

    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        let first = rng.gen_range(0..CellWall::COUNT);
        for turn in 0..CellWall::COUNT {
            let wall = CellWall::from_index(first + turn);
            let next = p + wall.offset();
            if !board.is_inside(next) || !board.cell(next).is_filled() {
                continue;
            }

            // Revisit `p` later for its remaining directions.
            stack.push(p);
            board.remove_wall(p, wall);
            stack.push(next);
            break;
        }
    }
}

/// First unmasked in-bounds cell, scanning row-major from the origin.
fn first_inside_cell(board: &Board) -> Option<Dims> {
    let bounds = board.bounds();
    Dims::iter_fill(Dims::ZERO, Dims(bounds.w, bounds.h)).find(|&p| board.is_inside(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::tests::{passage_count, reachable_count};
    use crate::mask::CellMask;
    use rand::SeedableRng;

    #[test]
    fn carves_a_perfect_maze_on_an_unmasked_grid() {
        let mut board = Board::new(12, 9);
        let mut rng = Random::seed_from_u64(42);
        carve(&mut board, &mut rng, None);

        let cells = board.inside_count();
        assert_eq!(passage_count(&board), cells - 1);
        assert_eq!(reachable_count(&board, Dims(0, 0)), cells);
    }

    #[test]
    fn carving_stays_out_of_masked_cells() {
        let mut mask = CellMask::new(100);
        // Mask the top-left 2x2 block; the seed scan must skip past it.
        for &index in &[0, 1, 10, 11] {
            mask.exclude(index);
        }
        let mut board = Board::with_mask(10, 10, Some(mask));
        let mut rng = Random::seed_from_u64(7);
        carve(&mut board, &mut rng, None);

        for p in [Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)] {
            assert!(board.cell(p).is_blocked());
            assert_eq!(board.cell(p).walls(), 0b1111);
        }

        let cells = board.inside_count();
        assert_eq!(cells, 96);
        assert_eq!(passage_count(&board), cells - 1);
        assert_eq!(reachable_count(&board, Dims(2, 0)), cells);
    }

    #[test]
    fn a_mask_split_region_leaves_the_far_component_filled() {
        // A full masked column splits the grid; only the left component is
        // reachable from the seed.
        let mut mask = CellMask::new(100);
        for y in 0..10 {
            mask.exclude(y * 10 + 4);
        }
        let mut board = Board::with_mask(10, 10, Some(mask));
        let mut rng = Random::seed_from_u64(3);
        carve(&mut board, &mut rng, None);

        assert_eq!(reachable_count(&board, Dims(0, 0)), 40);
        for p in Dims::iter_fill(Dims(5, 0), Dims(10, 10)) {
            assert!(board.cell(p).is_filled());
        }
    }

    #[test]
    fn respects_an_explicit_start() {
        let mut board = Board::new(10, 10);
        let mut rng = Random::seed_from_u64(11);
        carve(&mut board, &mut rng, Some(Dims(5, 5)));

        let cells = board.inside_count();
        assert_eq!(passage_count(&board), cells - 1);
        assert_eq!(reachable_count(&board, Dims(5, 5)), cells);
    }
}
