use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Todo - manage todo items and run the Todo API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database URL
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Print todos as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start API server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },

    /// Initialize database
    InitDb,

    /// List todos
    #[command(group(ArgGroup::new("status").args(["completed", "pending"])))]
    List {
        /// Only completed todos
        #[arg(long)]
        completed: bool,

        /// Only pending todos
        #[arg(long)]
        pending: bool,
    },

    /// Show a todo by ID
    Show {
        /// Todo ID
        id: i64,
    },

    /// Create a todo
    Add {
        /// Todo title
        title: String,

        /// Todo description
        #[arg(long)]
        description: Option<String>,

        /// Mark as completed
        #[arg(long)]
        completed: bool,
    },

    /// Replace title, description and completion of a todo
    Update {
        /// Todo ID
        id: i64,

        /// New title
        #[arg(long)]
        title: String,

        /// New description (cleared when omitted)
        #[arg(long)]
        description: Option<String>,

        /// Mark as completed
        #[arg(long)]
        completed: bool,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: i64,
    },

    /// Search todos by title (case-insensitive)
    Search {
        /// Text to look for
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "todo",
            "add",
            "Learn X",
            "--description",
            "Read the book",
            "--completed",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Add {
                title: "Learn X".to_string(),
                description: Some("Read the book".to_string()),
                completed: true,
            }
        );
    }

    #[test]
    fn test_list_filters_are_exclusive() {
        let result = Cli::try_parse_from(["todo", "list", "--completed", "--pending"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "todo",
            "show",
            "7",
            "--json",
            "--database-url",
            "postgresql://localhost/todos",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.database_url.as_deref(), Some("postgresql://localhost/todos"));
        assert_eq!(cli.command, Commands::Show { id: 7 });
    }
}
