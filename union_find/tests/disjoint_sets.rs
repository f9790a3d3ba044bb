use googletest::{gtest, prelude::*};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;
use rstest_reuse::{apply, template};
use union_find::{DisjointSets, KeyedUnionFind, UnionFind};

/// Builds a union-find over the elements `0..n`, each in its own set.
trait Forest {
  type Sets: DisjointSets<Element = usize>;

  fn build(&self, n: usize) -> Self::Sets;
}

const SEEDS: [u64; 3] = [3, 17, 9001];

struct Dense;

impl Forest for Dense {
  type Sets = UnionFind;

  fn build(&self, n: usize) -> UnionFind {
    UnionFind::new(n)
  }
}

struct Keyed;

impl Forest for Keyed {
  type Sets = KeyedUnionFind<usize>;

  fn build(&self, n: usize) -> KeyedUnionFind<usize> {
    KeyedUnionFind::from_keys(0..n)
  }
}

fn sorted_sets(uf: &mut impl DisjointSets<Element = usize>) -> Vec<Vec<usize>> {
  uf.sets()
    .into_iter()
    .map(|set| set.into_iter().sorted().collect_vec())
    .sorted()
    .collect()
}

fn random_unions(uf: &mut impl DisjointSets<Element = usize>, n: usize, unions: usize, seed: u64) {
  let mut rng = StdRng::seed_from_u64(seed);
  for _ in 0..unions {
    uf.union(rng.random_range(0..n), rng.random_range(0..n));
  }
}

#[template]
#[rstest]
fn forests(#[values(Dense, Keyed)] forest: (impl Forest)) {}

#[apply(forests)]
#[gtest]
fn test_singletons(forest: impl Forest) {
  let mut uf = forest.build(4);

  expect_eq!(uf.len(), 4);
  expect_eq!(uf.unique_sets(), 4);
  for i in 0..4 {
    expect_eq!(uf.find(i), i);
    expect_eq!(uf.set_size(i), 1);
  }
  expect_that!(
    sorted_sets(&mut uf),
    eq(&vec![vec![0], vec![1], vec![2], vec![3]])
  );
}

#[apply(forests)]
#[gtest]
fn test_friend_circles(forest: impl Forest) {
  let mut uf = forest.build(6);

  uf.union(0, 1);
  uf.union(1, 2);
  uf.union(3, 4);

  expect_true!(uf.connected(0, 2));
  expect_false!(uf.connected(0, 4));
  expect_eq!(uf.set_size(0), 3);
  expect_that!(
    sorted_sets(&mut uf),
    eq(&vec![vec![0, 1, 2], vec![3, 4], vec![5]])
  );
}

#[apply(forests)]
#[gtest]
fn test_merge_components(forest: impl Forest) {
  let mut uf = forest.build(5);

  uf.union(0, 1);
  uf.union(2, 3);
  expect_false!(uf.connected(1, 2));

  uf.union(1, 2);
  for i in 0..4 {
    expect_true!(uf.connected(0, i));
  }
  expect_eq!(uf.set_size(0), 4);
  expect_eq!(uf.set_size(4), 1);
  expect_eq!(uf.unique_sets(), 2);
}

#[apply(forests)]
#[gtest]
fn test_union_is_idempotent(forest: impl Forest) {
  let mut uf = forest.build(6);

  uf.union(2, 2);
  expect_eq!(uf.unique_sets(), 6);

  uf.union(0, 4);
  let sets = sorted_sets(&mut uf);
  for _ in 0..3 {
    uf.union(0, 4);
    uf.union(4, 0);
    uf.union(4, 4);
  }

  expect_that!(sorted_sets(&mut uf), eq(&sets));
  expect_eq!(uf.unique_sets(), 5);
}

#[apply(forests)]
#[gtest]
fn test_union_returns_representative(forest: impl Forest) {
  let mut uf = forest.build(8);

  for (a, b) in [(0, 1), (2, 3), (1, 3), (4, 5), (5, 0), (7, 7)] {
    let root = uf.union(a, b);
    expect_eq!(uf.find(a), root);
    expect_eq!(uf.find(b), root);
  }
}

#[apply(forests)]
#[gtest]
fn test_find_is_stable(forest: impl Forest) {
  let mut uf = forest.build(64);
  random_unions(&mut uf, 64, 40, 1);

  for i in 0..64 {
    let root = uf.find(i);
    expect_eq!(uf.find(i), root);
    expect_eq!(uf.find(root), root);
  }
}

#[apply(forests)]
#[gtest]
fn test_long_chain(forest: impl Forest) {
  let mut uf = forest.build(256);

  for i in 0..255 {
    uf.union(i, i + 1);
  }

  let root = uf.find(0);
  for i in 1..256 {
    expect_eq!(uf.find(i), root);
  }
  expect_eq!(uf.set_size(128), 256);
  expect_eq!(uf.unique_sets(), 1);
}

#[apply(forests)]
#[gtest]
fn test_unique_sets_decrease_only_on_merge(forest: impl Forest) {
  const N: usize = 100;

  for seed in SEEDS {
    let mut uf = forest.build(N);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..300 {
      let a = rng.random_range(0..N);
      let b = rng.random_range(0..N);
      let was_connected = uf.connected(a, b);
      let before = uf.unique_sets();

      uf.union(a, b);

      let expected = if was_connected { before } else { before - 1 };
      expect_eq!(uf.unique_sets(), expected);
      expect_true!(uf.connected(a, b));
    }
  }
}

#[apply(forests)]
#[gtest]
fn test_sets_partition_universe(forest: impl Forest) {
  const N: usize = 100;

  for seed in SEEDS {
    let mut uf = forest.build(N);
    random_unions(&mut uf, N, 60, seed);

    let sets = uf.sets();
    expect_eq!(sets.len(), uf.unique_sets());
    expect_that!(
      sets.iter().flatten().copied().sorted().collect_vec(),
      eq(&(0..N).collect_vec())
    );

    for set in &sets {
      let root = uf.find(set[0]);
      for &element in set {
        expect_eq!(uf.find(element), root);
      }
    }
  }
}

#[apply(forests)]
#[gtest]
fn test_set_size_counts_connected(forest: impl Forest) {
  const N: usize = 60;

  for seed in SEEDS {
    let mut uf = forest.build(N);
    random_unions(&mut uf, N, 35, seed);

    for a in 0..N {
      let connected = (0..N).filter(|&b| uf.connected(a, b)).count();
      expect_eq!(uf.set_size(a), connected);
    }

    let total: usize = uf.sets().iter().map(|set| uf.set_size(set[0])).sum();
    expect_eq!(total, N);
  }
}

#[gtest]
fn test_dense_and_keyed_agree() {
  const N: usize = 200;
  let mut dense = Dense.build(N);
  let mut keyed = Keyed.build(N);

  random_unions(&mut dense, N, 150, 42);
  random_unions(&mut keyed, N, 150, 42);

  expect_eq!(dense.unique_sets(), keyed.unique_sets());
  expect_that!(sorted_sets(&mut dense), eq(&sorted_sets(&mut keyed)));
}

#[gtest]
fn test_keyed_string_components() {
  let mut uf = KeyedUnionFind::<String>::new();

  uf.union("A", "B");
  uf.union("C", "D");
  uf.union("B", "C");

  for key in ["A", "B", "C", "D"] {
    expect_true!(uf.connected("A", key));
  }
  expect_eq!(uf.set_size("A"), 4);
  expect_eq!(uf.unique_sets(), 1);
}

#[gtest]
fn test_keyed_unseen_keys_are_not_connected() {
  let mut uf = KeyedUnionFind::<String>::new();

  expect_false!(uf.connected("X", "Y"));
  expect_eq!(uf.len(), 2);
  expect_eq!(uf.unique_sets(), 2);
  expect_eq!(uf.set_size("X"), 1);
}

#[gtest]
fn test_keyed_grows_through_trait() {
  let mut uf = KeyedUnionFind::<usize>::new();

  DisjointSets::union(&mut uf, 10, 20);
  DisjointSets::union(&mut uf, 30, 20);

  expect_eq!(DisjointSets::len(&uf), 3);
  expect_eq!(DisjointSets::set_size(&mut uf, 30), 3);
  expect_that!(sorted_sets(&mut uf), eq(&vec![vec![10, 20, 30]]));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_dense_out_of_range_panics() {
  let mut uf = Dense.build(3);
  uf.connected(0, 3);
}

#[gtest]
fn test_dense_try_find_out_of_range() {
  let mut uf = UnionFind::new(3);

  expect_that!(uf.try_find(1), ok(eq(&1)));
  expect_that!(
    uf.try_find(10).map_err(|err| err.to_string()),
    err(eq("Error: Element 10 out of range for union-find of 3 elements"))
  );
}
