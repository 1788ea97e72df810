use filmpath_core::string_normalization::clean_name;
use filmpath_core::{CollaborationGraph, CoreError, RecordField, bfs_find_path};

pub struct SearchRequest {
    pub from_name: String,
    pub to_name: String,
    pub credits: Option<RecordField>,
}

pub struct SearchResult {
    pub path: Option<Vec<String>>,
    pub people_visited: usize,
    pub search_duration: f64,
    pub from_name: String,
    pub to_name: String,
}

/// Resolves a typed name to a node. The name is tried exactly as typed,
/// then with stray whitespace collapsed.
pub fn find_person(name: &str, graph: &CollaborationGraph) -> Result<String, CoreError> {
    if graph.contains(name) {
        return Ok(name.to_string());
    }

    let clean = clean_name(name);
    if graph.contains(&clean) {
        Ok(clean)
    } else {
        Err(CoreError::NodeNotFound(name.to_string()))
    }
}

pub fn create_search_request(
    from: &str,
    to: &str,
    credits: Option<RecordField>,
    graph: &CollaborationGraph,
) -> Result<SearchRequest, CoreError> {
    Ok(SearchRequest {
        from_name: find_person(from, graph)?,
        to_name: find_person(to, graph)?,
        credits,
    })
}

pub fn execute_path_search(
    request: SearchRequest,
    graph: &CollaborationGraph,
) -> Result<SearchResult, CoreError> {
    let search = bfs_find_path(graph, &request.from_name, &request.to_name)?;

    Ok(SearchResult {
        path: search.result.into_owned(),
        people_visited: search.nodes_visited,
        search_duration: search.elapsed_secs,
        from_name: request.from_name,
        to_name: request.to_name,
    })
}
