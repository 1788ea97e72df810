/// Configuration for building collaboration graphs
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Keep every member as its own neighbor, the way a plain set union of
    /// a record's member list behaves (default: off)
    pub self_loops: bool,
}

impl GraphConfig {
    pub fn new(self_loops: bool) -> Self {
        Self { self_loops }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { self_loops: false }
    }
}
