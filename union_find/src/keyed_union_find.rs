use std::{
  borrow::Borrow,
  collections::{hash_map::Entry, HashMap},
  hash::Hash,
};

use itertools::Itertools;
use tracing::trace;

use crate::DisjointSets;

#[derive(Clone, Debug, PartialEq, Eq)]
struct KeyedNode<K> {
  /// The key of the parent of this node (self if root).
  parent: K,
  /// Upper bound on the height of the tree under this node. Stale unless this
  /// node is a root.
  rank: u32,
  /// Number of keys in the tree under this node. Stale unless this node is a
  /// root.
  size: usize,
}

/// A disjoint-set forest over keys which are discovered as they are used.
///
/// Keys are added to the forest in their own singleton set the first time they
/// are mentioned, whether by [`KeyedUnionFind::make_set`] or by any query.
/// Looking up an unseen key with [`KeyedUnionFind::find`],
/// [`KeyedUnionFind::connected`] or [`KeyedUnionFind::set_size`] therefore
/// inserts it. Use [`KeyedUnionFind::contains`] to check for a key without
/// adding it.
///
/// Lookups accept any borrowed form of the key, so a `KeyedUnionFind<String>`
/// can be queried with `&str`.
#[derive(Clone, Debug)]
pub struct KeyedUnionFind<K> {
  unique_sets: usize,
  nodes: HashMap<K, KeyedNode<K>>,
}

impl<K> KeyedUnionFind<K> {
  pub fn new() -> Self {
    Self {
      unique_sets: 0,
      nodes: HashMap::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn unique_sets(&self) -> usize {
    self.unique_sets
  }
}

impl<K> Default for KeyedUnionFind<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K> KeyedUnionFind<K>
where
  K: Hash + Eq + Clone,
{
  /// Creates a union-find with each of `keys` in its own set. Duplicate keys
  /// are ignored.
  pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
    keys.into_iter().collect()
  }

  /// True if `key` has been added to the forest. Unlike every other query,
  /// this never adds the key.
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.nodes.contains_key(key)
  }

  fn node(&self, key: &K) -> &KeyedNode<K> {
    &self.nodes[key]
  }

  fn node_mut(&mut self, key: &K) -> Option<&mut KeyedNode<K>> {
    self.nodes.get_mut(key)
  }

  fn insert_singleton(&mut self, key: K) -> bool {
    match self.nodes.entry(key) {
      Entry::Occupied(_) => false,
      Entry::Vacant(entry) => {
        let parent = entry.key().clone();
        entry.insert(KeyedNode {
          parent,
          rank: 0,
          size: 1,
        });
        self.unique_sets += 1;
        trace!(len = self.nodes.len(), "created singleton set");
        true
      }
    }
  }

  /// Adds `key` to the forest in its own set if it is not already present.
  /// Returns true if the key was added.
  pub fn make_set<Q>(&mut self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
  {
    if self.nodes.contains_key(key) {
      return false;
    }
    self.insert_singleton(key.to_owned())
  }

  /// Returns the representative of the set containing `key`, pointing every
  /// node on the path to it directly at the representative.
  ///
  /// An unseen key is added to the forest as a singleton and is its own
  /// representative.
  pub fn find<Q>(&mut self, key: &Q) -> K
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
  {
    let mut root = match self.nodes.get(key) {
      Some(node) => node.parent.clone(),
      None => {
        let key = key.to_owned();
        self.insert_singleton(key.clone());
        return key;
      }
    };
    loop {
      let parent = &self.node(&root).parent;
      if *parent == root {
        break;
      }
      root = parent.clone();
    }

    let mut next = match self.nodes.get_mut(key) {
      Some(node) => std::mem::replace(&mut node.parent, root.clone()),
      None => return root,
    };
    while next != root {
      let Some(node) = self.node_mut(&next) else {
        break;
      };
      next = std::mem::replace(&mut node.parent, root.clone());
    }

    root
  }

  /// Unions the sets containing `a` and `b` (noop if they are already in the
  /// same set), adding either key if unseen. Returns the representative of the
  /// merged set.
  pub fn union<Q>(&mut self, a: &Q, b: &Q) -> K
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
  {
    let a_root = self.find(a);
    let b_root = self.find(b);

    if a_root == b_root {
      return a_root;
    }

    let a_node = self.node(&a_root);
    let b_node = self.node(&b_root);
    let (a_rank, b_rank) = (a_node.rank, b_node.rank);
    let size = a_node.size + b_node.size;

    // Attach the lower-rank tree to the higher-rank tree, preferring a's root
    // on ties.
    let (root, child) = if a_rank < b_rank {
      (b_root, a_root)
    } else {
      (a_root, b_root)
    };

    // Two sets have joined, reducing the number of unique sets by one.
    self.unique_sets -= 1;

    if let Some(child_node) = self.node_mut(&child) {
      child_node.parent = root.clone();
    }
    if let Some(root_node) = self.node_mut(&root) {
      root_node.size = size;
      if a_rank == b_rank {
        root_node.rank += 1;
      }
    }

    trace!(size, "merged two sets");
    root
  }

  /// True if `a` and `b` are in the same set. Adds either key if unseen, so two
  /// unseen keys are never connected.
  pub fn connected<Q>(&mut self, a: &Q, b: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
  {
    self.find(a) == self.find(b)
  }

  /// The number of keys in the set containing `key`. Adds the key if unseen.
  pub fn set_size<Q>(&mut self, key: &Q) -> usize
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
  {
    let root = self.find(key);
    self.node(&root).size
  }

  /// Returns every set in the forest, keyed by its representative.
  pub fn sets_by_root(&mut self) -> HashMap<K, Vec<K>> {
    let keys = self.nodes.keys().cloned().collect_vec();
    keys
      .into_iter()
      .map(|key| (self.find(&key), key))
      .into_group_map()
  }
}

impl<K> FromIterator<K> for KeyedUnionFind<K>
where
  K: Hash + Eq + Clone,
{
  fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
    let mut uf = Self::new();
    uf.extend(iter);
    uf
  }
}

impl<K> Extend<K> for KeyedUnionFind<K>
where
  K: Hash + Eq + Clone,
{
  fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
    iter.into_iter().for_each(|key| {
      self.insert_singleton(key);
    });
  }
}

impl<K> DisjointSets for KeyedUnionFind<K>
where
  K: Hash + Eq + Clone,
{
  type Element = K;

  fn len(&self) -> usize {
    KeyedUnionFind::len(self)
  }

  fn unique_sets(&self) -> usize {
    KeyedUnionFind::unique_sets(self)
  }

  fn find(&mut self, element: K) -> K {
    KeyedUnionFind::find(self, &element)
  }

  fn union(&mut self, a: K, b: K) -> K {
    KeyedUnionFind::union(self, &a, &b)
  }

  fn connected(&mut self, a: K, b: K) -> bool {
    KeyedUnionFind::connected(self, &a, &b)
  }

  fn set_size(&mut self, element: K) -> usize {
    KeyedUnionFind::set_size(self, &element)
  }

  fn sets(&mut self) -> Vec<Vec<K>> {
    self.sets_by_root().into_values().collect()
  }
}
