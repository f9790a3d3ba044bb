use tracing::{debug, trace};

use crate::{error::UnionFindResult, make_union_find_error, DisjointSets};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
  /// The index of parent of this node (self if root).
  parent: usize,
  /// Upper bound on the height of the tree under this node. Stale unless this
  /// node is a root.
  rank: u32,
  /// Number of elements in the tree under this node. Stale unless this node is
  /// a root.
  size: usize,
}

impl Node {
  fn singleton(idx: usize) -> Self {
    Self {
      parent: idx,
      rank: 0,
      size: 1,
    }
  }
}

/// A disjoint-set forest over the fixed universe of elements `0..len`.
///
/// Elements are indices into the forest, and passing an index outside of the
/// universe to any operation is a bug in the caller which panics. Use
/// [`UnionFind::try_find`] and [`UnionFind::try_union`] for indices which have
/// not been validated.
#[derive(Clone, Debug)]
pub struct UnionFind {
  unique_sets: usize,
  elements: Vec<Node>,
}

impl UnionFind {
  /// Creates a union-find of `n` elements, each in its own set.
  pub fn new(n: usize) -> Self {
    debug!(n, "creating dense union-find");
    Self {
      unique_sets: n,
      elements: (0..n).map(Node::singleton).collect(),
    }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn unique_sets(&self) -> usize {
    self.unique_sets
  }

  fn check_bounds(&self, node_id: usize) -> UnionFindResult {
    if node_id < self.len() {
      Ok(())
    } else {
      Err(make_union_find_error!(
        "Element {} out of range for union-find of {} elements",
        node_id,
        self.len()
      ))
    }
  }

  fn assert_in_bounds(&self, node_id: usize) {
    if let Err(err) = self.check_bounds(node_id) {
      panic!("{err}");
    }
  }

  /// Gives id of the root of tree that node is in. Every node on the path from
  /// `node_id` to the root is re-pointed directly at the root.
  ///
  /// # Panics
  ///
  /// If `node_id` is not less than `self.len()`.
  pub fn find(&mut self, node_id: usize) -> usize {
    self.assert_in_bounds(node_id);

    let mut root_id = node_id;
    while self.elements[root_id].parent != root_id {
      root_id = self.elements[root_id].parent;
    }

    let mut node_id = node_id;
    while node_id != root_id {
      node_id = std::mem::replace(&mut self.elements[node_id].parent, root_id);
    }

    root_id
  }

  /// Like [`UnionFind::find`], but returns an error for out-of-range elements
  /// instead of panicking.
  pub fn try_find(&mut self, node_id: usize) -> UnionFindResult<usize> {
    self.check_bounds(node_id)?;
    Ok(self.find(node_id))
  }

  /// Unions the two sets that a and b are in (noop if are already in the same
  /// set), returning the new set index of the two nodes.
  ///
  /// # Panics
  ///
  /// If either id is not less than `self.len()`.
  pub fn union(&mut self, a_id: usize, b_id: usize) -> usize {
    let a_root_id = self.find(a_id);
    let b_root_id = self.find(b_id);

    if a_root_id == b_root_id {
      return a_root_id;
    }

    let a_root = self.elements[a_root_id];
    let b_root = self.elements[b_root_id];

    // Attach the lower-rank tree to the higher-rank tree, preferring a's root
    // on ties.
    let (root_id, child_id) = if a_root.rank < b_root.rank {
      (b_root_id, a_root_id)
    } else {
      (a_root_id, b_root_id)
    };

    // Two sets have joined, reducing the number of unique sets by one.
    self.unique_sets -= 1;

    self.elements[child_id].parent = root_id;
    let root = &mut self.elements[root_id];
    root.size = a_root.size + b_root.size;
    if a_root.rank == b_root.rank {
      root.rank += 1;
    }

    trace!(root_id, child_id, size = root.size, "merged two sets");
    root_id
  }

  /// Like [`UnionFind::union`], but returns an error for out-of-range elements
  /// instead of panicking. Nothing is merged if either element is invalid.
  pub fn try_union(&mut self, a_id: usize, b_id: usize) -> UnionFindResult<usize> {
    self.check_bounds(a_id)?;
    self.check_bounds(b_id)?;
    Ok(self.union(a_id, b_id))
  }

  pub fn connected(&mut self, a_id: usize, b_id: usize) -> bool {
    self.find(a_id) == self.find(b_id)
  }

  /// The number of elements in the set containing `node_id`.
  pub fn set_size(&mut self, node_id: usize) -> usize {
    let root_id = self.find(node_id);
    self.elements[root_id].size
  }

  /// Returns every set in the forest. Groups are ordered by their smallest
  /// element, and elements within a group are ascending.
  pub fn sets(&mut self) -> Vec<Vec<usize>> {
    let mut group_of_root: Vec<Option<usize>> = vec![None; self.len()];
    let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.unique_sets);

    for node_id in 0..self.len() {
      let root_id = self.find(node_id);
      let group_idx = match group_of_root[root_id] {
        Some(group_idx) => group_idx,
        None => {
          groups.push(Vec::with_capacity(self.elements[root_id].size));
          group_of_root[root_id] = Some(groups.len() - 1);
          groups.len() - 1
        }
      };
      groups[group_idx].push(node_id);
    }

    groups
  }
}

impl DisjointSets for UnionFind {
  type Element = usize;

  fn len(&self) -> usize {
    UnionFind::len(self)
  }

  fn unique_sets(&self) -> usize {
    UnionFind::unique_sets(self)
  }

  fn find(&mut self, element: usize) -> usize {
    UnionFind::find(self, element)
  }

  fn union(&mut self, a: usize, b: usize) -> usize {
    UnionFind::union(self, a, b)
  }

  fn connected(&mut self, a: usize, b: usize) -> bool {
    UnionFind::connected(self, a, b)
  }

  fn set_size(&mut self, element: usize) -> usize {
    UnionFind::set_size(self, element)
  }

  fn sets(&mut self) -> Vec<Vec<usize>> {
    UnionFind::sets(self)
  }
}
