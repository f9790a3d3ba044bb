use clap::Parser;
use tracing::Level;

const DEFAULT_ELEMENTS: usize = 10_000;
const DEFAULT_UNIONS: usize = 7_000;
const DEFAULT_SEED: u64 = 392420;

/// Demonstrations of dense and keyed union-find.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct DemoOptions {
  /// Number of elements in the randomly joined forest.
  #[arg(short, long, default_value_t = DEFAULT_ELEMENTS)]
  pub elements: usize,

  /// Number of random unions performed on the forest.
  #[arg(short, long, default_value_t = DEFAULT_UNIONS)]
  pub unions: usize,

  /// Seed for choosing the random unions.
  #[arg(short, long, default_value_t = DEFAULT_SEED)]
  pub seed: u64,

  /// Most verbose level of log events to print: TRACE, DEBUG, INFO, WARN or
  /// ERROR.
  #[arg(short, long, default_value_t = Level::INFO)]
  pub log_level: Level,
}

impl Default for DemoOptions {
  fn default() -> Self {
    Self {
      elements: DEFAULT_ELEMENTS,
      unions: DEFAULT_UNIONS,
      seed: DEFAULT_SEED,
      log_level: Level::INFO,
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::Parser;
  use googletest::prelude::*;
  use tracing::Level;

  use crate::demo_opts::DemoOptions;

  #[gtest]
  fn test_no_args_is_default() {
    expect_that!(
      DemoOptions::try_parse_from(["union-find-rs"]),
      ok(eq(&DemoOptions::default()))
    );
  }

  #[gtest]
  fn test_parse_args() {
    let options =
      DemoOptions::try_parse_from(["union-find-rs", "-e", "50", "--unions", "20", "-l", "debug"]);
    expect_that!(
      options,
      ok(eq(&DemoOptions {
        elements: 50,
        unions: 20,
        seed: 392420,
        log_level: Level::DEBUG,
      }))
    );
  }

  #[gtest]
  fn test_bad_log_level() {
    expect_true!(DemoOptions::try_parse_from(["union-find-rs", "--log-level", "loud"]).is_err());
  }
}
