//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::Player as Mark;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Mark you play (x or o); X moves first
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Your display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Stop after this many games
    #[arg(short, long)]
    pub games: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("no arguments is valid");
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.mark, None);
        assert_eq!(cli.games, None);
    }

    #[test]
    fn test_mark_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["tictactoe", "--mark", "o", "--games", "3"])
            .expect("valid arguments");
        assert_eq!(cli.mark, Some(Mark::O));
        assert_eq!(cli.games, Some(3));
    }

    #[test]
    fn test_rejects_unknown_mark() {
        assert!(Cli::try_parse_from(["tictactoe", "--mark", "z"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
