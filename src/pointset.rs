use hashbrown::HashMap;

use crate::dims::Dims;

/// Insertion-ordered set of distinct grid points with O(1) membership and
/// mid-sequence truncation. This is the walk container for loop-erased
/// random walks: revisiting a point erases everything recorded after it.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    order: Vec<Dims>,
    index: HashMap<Dims, usize>,
}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet::default()
    }

    pub fn with_capacity(capacity: usize) -> PointSet {
        PointSet {
            order: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Appends `p` unless it is already present. Returns whether the point
    /// was added.
    pub fn add(&mut self, p: Dims) -> bool {
        if self.index.contains_key(&p) {
            return false;
        }

        self.index.insert(p, self.order.len());
        self.order.push(p);
        true
    }

    pub fn contains(&self, p: Dims) -> bool {
        self.index.contains_key(&p)
    }

    /// Removes `p`, keeping the relative order of the remaining points.
    pub fn remove(&mut self, p: Dims) -> bool {
        let Some(at) = self.index.remove(&p) else {
            return false;
        };

        self.order.remove(at);
        for (i, q) in self.order.iter().enumerate().skip(at) {
            self.index.insert(*q, i);
        }
        true
    }

    /// Truncates the sequence to end at `p`, dropping every point that was
    /// added after it. Returns the number of points dropped; `0` when `p`
    /// is absent or already last.
    pub fn remove_after(&mut self, p: Dims) -> usize {
        let Some(&at) = self.index.get(&p) else {
            return 0;
        };

        let dropped = self.order.len() - at - 1;
        for q in self.order.drain(at + 1..) {
            self.index.remove(&q);
        }
        dropped
    }

    /// The point at `index` in insertion order.
    ///
    /// Panics when `index` is out of range.
    pub fn at(&self, index: usize) -> Dims {
        self.order[index]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Dims> + '_ {
        self.order.iter().copied()
    }

    /// Do all consecutive points differ by exactly one unit step in exactly
    /// one axis? The carver relies on this to turn a walk into wall
    /// removals.
    pub fn is_contiguous(&self) -> bool {
        self.order
            .windows(2)
            .all(|pair| pair[0].step_distance(pair[1]) == 1)
    }
}
