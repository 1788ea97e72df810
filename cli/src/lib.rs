pub mod app;
pub mod args;
pub mod colors;
pub mod commands;
pub mod display;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::FilmPathApp;
pub use args::{Args, Command, FieldArg, GraphArgs};
pub use commands::run;
pub use search::{create_search_request, execute_path_search, find_person};
pub use utils::format_number;
