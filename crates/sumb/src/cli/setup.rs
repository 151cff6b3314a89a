use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sumb", bin_name = "sumb", version)]
#[command(about = "Keep short notes in the terminal and find them again", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Note text. Use `-` to read stdin; with nothing given, opens $EDITOR.
        #[arg(num_args = 0..)]
        words: Vec<String>,

        /// Note text as a single argument
        #[arg(short = 'm', long, conflicts_with = "words")]
        body: Option<String>,
    },

    /// Edit a note by ID
    #[command(alias = "e")]
    Edit {
        /// ID of the note
        id: String,

        /// Replace the body without opening an editor
        #[arg(short = 'm', long)]
        body: Option<String>,
    },

    /// List the latest notes
    #[command(alias = "ls")]
    List {
        /// How many notes to show (defaults to the `list-limit` setting)
        #[arg(allow_negative_numbers = true)]
        count: Option<i64>,
    },

    /// Search notes by text
    #[command(alias = "s")]
    Search {
        /// Search terms
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// Show a note by ID
    #[command(alias = "v")]
    Show {
        /// ID of the note
        id: String,
    },

    /// Delete a note by ID
    #[command(alias = "rm")]
    Delete {
        /// ID of the note
        id: String,
    },

    /// Rebuild the search index from the stored notes
    Reindex,

    /// Check that the search index agrees with the stored notes
    Doctor {
        /// Rebuild the index if problems are found
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (list-limit, search-limit, preview-chars, wrap-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print where notes, index and config are stored
    Paths,
}
