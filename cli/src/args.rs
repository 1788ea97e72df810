use clap::{Parser, Subcommand, ValueEnum};
use filmpath_core::{DEFAULT_RECOMMENDATIONS, RecordField};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filmpath")]
#[command(about = "Find how actors and crew members are connected through the films they share")]
pub struct Args {
    /// Extracted movie records (JSON array)
    #[arg(short, long, global = true, env = "FILMPATH_RECORDS", value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the overview of a movie
    Lookup {
        /// Movie title (case-insensitive)
        title: String,

        /// Release year, needed when several movies share the title
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Find the shortest collaboration path between two people
    Path {
        /// First person, exactly as credited
        from: String,

        /// Second person, exactly as credited
        to: String,

        #[command(flatten)]
        graph: GraphArgs,

        /// Quiet mode - only show the path flow
        #[arg(short, long)]
        quiet: bool,
    },

    /// Score how much two movies share in cast, crew and genres
    Correlate {
        /// First movie title
        first: String,

        /// Second movie title
        second: String,

        /// Release year of the first movie
        #[arg(long, value_name = "YEAR")]
        first_year: Option<String>,

        /// Release year of the second movie
        #[arg(long, value_name = "YEAR")]
        second_year: Option<String>,
    },

    /// Recommend movies by genre or by a favourite movie
    Recommend {
        /// Genre to match (repeatable)
        #[arg(short, long, conflicts_with = "title", required_unless_present = "title")]
        genre: Vec<String>,

        /// Favourite movie whose genres drive the ranking
        #[arg(short, long)]
        title: Option<String>,

        /// Release year of the favourite movie
        #[arg(short, long, requires = "title", conflicts_with = "genre")]
        year: Option<String>,

        /// Number of movies to list
        #[arg(short = 'n', long, value_name = "COUNT", default_value_t = DEFAULT_RECOMMENDATIONS)]
        limit: usize,
    },

    /// Show how far one person is from everyone they can reach
    Separation {
        /// Person, exactly as credited
        name: String,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Build a collaboration graph and save it as JSON adjacency lists
    ExportGraph {
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        out: PathBuf,

        /// Credit list that links people
        #[arg(short, long, value_enum, default_value_t = FieldArg::Cast)]
        field: FieldArg,

        /// Only write the first N people in name order
        #[arg(short, long, value_name = "COUNT")]
        limit: Option<usize>,

        /// Keep each person as their own neighbor
        #[arg(long)]
        self_loops: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct GraphArgs {
    /// Credit list that links people
    #[arg(short, long, value_enum, default_value_t = FieldArg::Cast)]
    pub field: FieldArg,

    /// Load a saved graph instead of building one from the records
    #[arg(short, long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Keep each person as their own neighbor when building
    #[arg(long, conflicts_with = "graph")]
    pub self_loops: bool,
}

impl GraphArgs {
    /// The credit list the graph links people through. Unknown for a saved
    /// graph, since the file does not record which list built it.
    pub fn credits(&self) -> Option<RecordField> {
        match self.graph {
            Some(_) => None,
            None => Some(self.field.into()),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArg {
    Cast,
    Crew,
}

impl From<FieldArg> for RecordField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Cast => RecordField::Cast,
            FieldArg::Crew => RecordField::Crew,
        }
    }
}
