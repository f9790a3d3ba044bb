mod demo_opts;

use std::time::Instant;

use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};
use union_find::{KeyedUnionFind, UnionFind};

use crate::demo_opts::DemoOptions;

fn print_components(uf: &mut KeyedUnionFind<String>) {
  for (root, members) in uf.sets_by_root().into_iter().sorted() {
    println!(
      "Component with root {root}: [{}]",
      members.iter().sorted().join(", ")
    );
  }
}

/// People 0-5, where friendship is transitive.
fn friend_circles() {
  println!("Friend circles (dense)");

  let mut uf = UnionFind::new(6);
  for (a, b) in [(0, 1), (1, 2), (3, 4)] {
    println!("{a} and {b} become friends");
    uf.union(a, b);
  }

  println!("0 and 2 in the same circle? {}", uf.connected(0, 2));
  println!("0 and 4 in the same circle? {}", uf.connected(0, 4));
  println!("Size of 0's circle: {}", uf.set_size(0));

  for (idx, circle) in uf.sets().iter().enumerate() {
    println!("Circle {}: [{}]", idx + 1, circle.iter().join(", "));
  }
}

fn network_components() {
  println!("Network components (keyed)");

  let mut network = KeyedUnionFind::<String>::new();
  for (a, b) in [
    ("serverA", "serverB"),
    ("serverB", "serverC"),
    ("serverD", "serverE"),
  ] {
    println!("Connecting {a} to {b}");
    network.union(a, b);
  }
  println!("Adding serverF");
  network.make_set("serverF");

  println!(
    "serverA and serverC connected? {}",
    network.connected("serverA", "serverC")
  );
  println!(
    "serverA and serverD connected? {}",
    network.connected("serverA", "serverD")
  );
  println!(
    "Size of serverA's network: {}",
    network.set_size("serverA")
  );

  print_components(&mut network);
}

fn component_growth() {
  println!("Dynamic component growth (keyed)");

  let mut growth = KeyedUnionFind::<String>::new();
  let steps: [&[(&str, &str)]; 3] = [&[("A", "B"), ("C", "D")], &[("B", "C")], &[("A", "E")]];
  for (idx, step) in steps.iter().enumerate() {
    println!("Step {}", idx + 1);
    for &(a, b) in step.iter() {
      growth.union(a, b);
    }
    print_components(&mut growth);
  }
}

fn random_forest(options: &DemoOptions) {
  println!(
    "Random forest of {} elements, {} unions",
    options.elements, options.unions
  );

  let mut uf = UnionFind::new(options.elements);
  let mut rng = StdRng::seed_from_u64(options.seed);

  let start = Instant::now();
  if !uf.is_empty() {
    for _ in 0..options.unions {
      let a = rng.random_range(0..options.elements);
      let b = rng.random_range(0..options.elements);
      uf.union(a, b);
    }
  }
  let end = Instant::now();
  debug!(elapsed = ?(end - start), "finished random unions");

  let largest = uf.sets().iter().map(Vec::len).max().unwrap_or(0);
  println!(
    "{} sets remain, the largest has {} elements",
    uf.unique_sets(),
    largest
  );
  println!("{:?} for {} unions", end - start, options.unions);
}

fn main() {
  let options = DemoOptions::parse();

  tracing_subscriber::fmt()
    .with_max_level(options.log_level)
    .init();

  info!(?options, "running union-find demonstrations");

  friend_circles();
  println!();
  network_components();
  println!();
  component_growth();
  println!();
  random_forest(&options);
}
