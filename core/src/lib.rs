pub mod error;
pub mod files;
pub mod graph;
pub mod graph_config;
pub mod pathfinding;
pub mod record_index;
pub mod records;
pub mod recommend;
pub mod similarity;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{CoreError, Result};
pub use graph::{CollaborationGraph, build_graph, load_graph, save_graph};
pub use graph_config::GraphConfig;
pub use pathfinding::{BfsTree, PathResult, PathSearch, bfs, bfs_find_path, shortest_path};
pub use record_index::RecordIndex;
pub use records::{Record, RecordField, load_records};
pub use recommend::{DEFAULT_RECOMMENDATIONS, Recommendation, recommend_by_genres, recommend_like};
pub use similarity::{ScorePair, correlate_titles, correlation_score, overlap_score};
