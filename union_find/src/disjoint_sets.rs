/// A partition of elements into disjoint sets, supporting merges and
/// membership queries.
///
/// Every query takes `&mut self`, since finding the representative of a set
/// compresses the path walked to reach it. Sharing a structure between threads
/// requires locking the whole structure for each operation.
pub trait DisjointSets {
  type Element;

  /// The number of elements known to the structure.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The number of distinct sets the elements are currently partitioned into.
  fn unique_sets(&self) -> usize;

  /// Returns the representative of the set containing `element`.
  fn find(&mut self, element: Self::Element) -> Self::Element;

  /// Merges the sets containing `a` and `b` (noop if they are already in the
  /// same set), returning the representative of the merged set.
  fn union(&mut self, a: Self::Element, b: Self::Element) -> Self::Element;

  /// True if `a` and `b` are in the same set.
  fn connected(&mut self, a: Self::Element, b: Self::Element) -> bool
  where
    Self::Element: PartialEq,
  {
    self.find(a) == self.find(b)
  }

  /// The number of elements in the set containing `element`.
  fn set_size(&mut self, element: Self::Element) -> usize;

  /// Returns every set as a group of its elements. The order of the groups,
  /// and of the elements within each group, is unspecified.
  fn sets(&mut self) -> Vec<Vec<Self::Element>>;
}
