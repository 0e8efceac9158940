use clap::Parser;

use crate::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_STEPS};

/// Conway's Game of Life on a bounded grid, printed to the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Number of rows in the grid
    #[arg(default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns in the grid
    #[arg(default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of generations to simulate
    #[arg(default_value_t = DEFAULT_STEPS)]
    pub steps: usize,

    /// Seed for the initial board (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between generations in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Print frames one after another instead of clearing the screen
    #[arg(long)]
    pub no_clear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            steps: DEFAULT_STEPS,
            seed: None,
            delay_ms: 1000,
            no_clear: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["text_life"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_positional_and_flags() {
        let config =
            Config::try_parse_from(["text_life", "4", "6", "3", "--seed", "7", "--no-clear"])
                .unwrap();
        assert_eq!((config.rows, config.cols, config.steps), (4, 6, 3));
        assert_eq!(config.seed, Some(7));
        assert!(config.no_clear);
        assert_eq!(config.delay_ms, 1000);
    }

    #[test]
    fn test_negative_steps_rejected() {
        assert!(Config::try_parse_from(["text_life", "4", "4", "-1"]).is_err());
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
