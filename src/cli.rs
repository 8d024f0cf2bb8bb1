use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "css-guard",
    version,
    about = "CSS size budget guard for the static site build"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root the artifact path and content globs are resolved against"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to <root>/css-guard.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure the compiled stylesheet and enforce the size budget
    Check,
    /// Inspect the content-scan configuration
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// Print the content globs and theme extension
    Show,
    /// List the files the content globs currently match
    Files,
    /// Write the configuration as the generator's module file
    Export {
        #[arg(long, help = "Output path (defaults to <root>/tailwind.config.js)")]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, ContentCommands};
    use clap::Parser;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["css-guard"]);
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.root, std::path::PathBuf::from("."));
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from(["css-guard", "content", "export", "--json", "--root", "site"]);
        assert!(cli.json);
        assert_eq!(cli.root, std::path::PathBuf::from("site"));
        assert!(matches!(
            cli.command,
            Some(Commands::Content {
                command: ContentCommands::Export { out: None }
            })
        ));
    }
}
