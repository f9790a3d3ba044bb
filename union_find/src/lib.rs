mod disjoint_sets;
pub mod error;
mod keyed_union_find;
mod union_find;

pub use disjoint_sets::*;
pub use keyed_union_find::*;
pub use union_find::*;
