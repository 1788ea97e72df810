use rustc_hash::FxHashMap;

/// Parent pointers of one BFS run. The root maps to `None`.
pub type ParentMap<'g> = FxHashMap<&'g str, Option<&'g str>>;

/// Outcome of a path query. Disconnection is an ordinary outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult<'g> {
    Found(Vec<&'g str>),
    NoPath,
}

impl<'g> PathResult<'g> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&[&'g str]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }

    pub fn into_owned(self) -> Option<Vec<String>> {
        match self {
            PathResult::Found(path) => Some(path.into_iter().map(str::to_string).collect()),
            PathResult::NoPath => None,
        }
    }
}

/// A path query together with how much of the graph it touched.
#[derive(Debug, Clone)]
pub struct PathSearch<'g> {
    pub result: PathResult<'g>,
    pub nodes_visited: usize,
    pub elapsed_secs: f64,
}

/// Walks parent pointers from `target` up to the root and returns the
/// path root-first.
pub fn reconstruct_path<'g>(parent_map: &ParentMap<'g>, target: &'g str) -> Vec<&'g str> {
    let mut path = Vec::new();
    let mut current_node = Some(target);

    while let Some(node) = current_node {
        path.push(node);
        current_node = parent_map.get(node).copied().flatten();
    }

    path.reverse();
    path
}
