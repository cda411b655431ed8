//! Graph configuration options.

#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    pub directed: bool,
    /// Number of nodes (ids `0..node_count`) allocated at construction.
    pub node_count: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            node_count: 0,
        }
    }
}
