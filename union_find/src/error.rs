use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFindError {
  message: String,
}

impl UnionFindError {
  pub fn new(message: String) -> Self {
    UnionFindError { message }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl Error for UnionFindError {}

impl Display for UnionFindError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Error: {}", self.message)
  }
}

#[macro_export]
macro_rules! make_union_find_error {
  ($($args:expr),+) => {
    $crate::error::UnionFindError::new(format!($($args),+))
  };
}

pub type UnionFindResult<T = ()> = Result<T, UnionFindError>;
