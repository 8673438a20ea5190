use clap::{Parser, Subcommand};

/// Management commands for the organization LoggerRole database.
#[derive(Debug, Parser)]
#[command(name = "manage", version)]
pub struct Cli {
    /// SQLite file path or `sqlite:` URL (overrides DATABASE_PATH)
    #[arg(long, global = true, value_name = "PATH|URL")]
    pub database: Option<String>,

    /// Log level (overrides LOG_LEVEL)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Creates the schema, adds some data, and prints organization LoggerRole counts
    PrintOrgLoggerRoleCounts,

    /// Creates the schema and adds the sample data
    Seed,

    /// Prints organization LoggerRole counts for the data already stored
    Report {
        /// Print the counts as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_print_counts_takes_no_arguments() {
        let cli = Cli::try_parse_from(["manage", "print-org-logger-role-counts"]).unwrap();
        assert_eq!(cli.command, Command::PrintOrgLoggerRoleCounts);
        assert!(cli.database.is_none());

        let extra = Cli::try_parse_from(["manage", "print-org-logger-role-counts", "Apple"]);
        assert!(extra.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "manage",
            "report",
            "--json",
            "--database",
            "sqlite::memory:",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::Report { json: true });
        assert_eq!(cli.database.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["manage"]).is_err());
    }
}
