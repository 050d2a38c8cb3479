use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::dims::Dims;
use crate::maze::Board;

/// Breadth-first shortest path over a carved grid, treating each absent
/// wall bit as a traversable edge.
///
/// Returns the cell sequence from `start` to `end` inclusive, minimal in
/// edge count, or `None` when `end` is unreachable. An unreachable end is
/// a normal outcome, not an error; disconnected grids are representable.
pub fn solve(board: &Board, start: Dims, end: Dims) -> Option<Vec<Dims>> {
    if !board.is_inside(start) || !board.is_inside(end) {
        return None;
    }

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut parent: HashMap<Dims, Dims> = HashMap::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        if p == end {
            return Some(reconstruct(&parent, start, end));
        }

        for next in board.open_neighbors(p) {
            if visited.insert(next) {
                parent.insert(next, p);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Follows parent links from `end` back to `start` and reverses.
fn reconstruct(parent: &HashMap<Dims, Dims>, start: Dims, end: Dims) -> Vec<Dims> {
    let mut path = vec![end];
    let mut p = end;
    while p != start {
        p = parent[&p];
        path.push(p);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellWall;

    /// Carves a single corridor through the listed cells.
    fn corridor(board: &mut Board, cells: &[Dims]) {
        for pair in cells.windows(2) {
            let wall = CellWall::between(pair[0], pair[1]).expect("corridor cells not adjacent");
            board.remove_wall(pair[0], wall);
        }
    }

    fn assert_is_walkable(board: &Board, path: &[Dims]) {
        for pair in path.windows(2) {
            let wall = CellWall::between(pair[0], pair[1]).expect("path cells not adjacent");
            assert!(
                !board.cell(pair[0]).has_wall(wall),
                "wall between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn start_equals_end() {
        let board = Board::new(4, 4);
        assert_eq!(solve(&board, Dims(1, 1), Dims(1, 1)), Some(vec![Dims(1, 1)]));
    }

    #[test]
    fn uncarved_grid_has_no_path() {
        let board = Board::new(4, 4);
        assert_eq!(solve(&board, Dims(0, 0), Dims(3, 3)), None);
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let board = Board::new(4, 4);
        assert_eq!(solve(&board, Dims(-1, 0), Dims(3, 3)), None);
        assert_eq!(solve(&board, Dims(0, 0), Dims(4, 0)), None);
    }

    #[test]
    fn single_corridor_is_returned_verbatim() {
        let mut board = Board::new(4, 4);
        let snake = [
            Dims(0, 0),
            Dims(1, 0),
            Dims(2, 0),
            Dims(3, 0),
            Dims(3, 1),
            Dims(2, 1),
            Dims(2, 2),
            Dims(3, 2),
            Dims(3, 3),
        ];
        corridor(&mut board, &snake);

        let path = solve(&board, Dims(0, 0), Dims(3, 3)).unwrap();
        assert_eq!(path, snake);
    }

    #[test]
    fn shortest_of_two_routes_wins() {
        // Hand-built 4x4 with a short route along the top/right edges and a
        // long detour along the left/bottom edges.
        let mut board = Board::new(4, 4);
        corridor(
            &mut board,
            &[Dims(0, 0), Dims(1, 0), Dims(2, 0), Dims(3, 0), Dims(3, 1), Dims(3, 2), Dims(3, 3)],
        );
        corridor(
            &mut board,
            &[
                Dims(0, 0),
                Dims(0, 1),
                Dims(0, 2),
                Dims(0, 3),
                Dims(1, 3),
                Dims(1, 2),
                Dims(2, 2),
                Dims(2, 3),
                Dims(3, 3),
            ],
        );

        let path = solve(&board, Dims(0, 0), Dims(3, 3)).unwrap();
        // 6 steps is the Manhattan minimum on a 4x4 corner-to-corner route.
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Dims(0, 0)));
        assert_eq!(path.last(), Some(&Dims(3, 3)));
        assert_is_walkable(&board, &path);
    }

    #[test]
    fn boundary_opening_does_not_leak_outside() {
        let mut board = Board::new(4, 4);
        corridor(&mut board, &[Dims(0, 0), Dims(1, 0)]);
        board.open_boundary(Dims(0, 0));

        // The gap removes the outer wall but BFS must not step through it.
        let path = solve(&board, Dims(0, 0), Dims(1, 0)).unwrap();
        assert_eq!(path, vec![Dims(0, 0), Dims(1, 0)]);
    }
}
