pub mod bfs;
pub mod utils;

pub use bfs::{BfsTree, bfs, bfs_find_path, shortest_path};
pub use utils::{ParentMap, PathResult, PathSearch, reconstruct_path};
