use crate::config::{SearchConfig, DEFAULT_SIZE_HINT};
use crate::graph::types::{Adjacency, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Depth reported for nodes the last search never assigned a depth to, and
/// the maximum depth of a search that expanded nothing.
pub const UNKNOWN_DEPTH: i32 = i32::MIN;

/// Depth limit meaning "expand everything reachable"
pub const UNBOUNDED_DEPTH: i32 = i32::MAX;

/// Upper bound on up-front allocation, whatever the size hint says
const MAX_PRESIZE: usize = 1 << 16;

/// Options for a breadth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsOptions {
    /// Deepest hop count whose nodes are visited and returned
    pub depth_limit: i32,
    /// Expected node count, used only to presize internal storage
    pub size_hint: usize,
}

impl Default for BfsOptions {
    fn default() -> Self {
        BfsOptions {
            depth_limit: UNBOUNDED_DEPTH,
            size_hint: DEFAULT_SIZE_HINT,
        }
    }
}

impl From<&SearchConfig> for BfsOptions {
    fn from(config: &SearchConfig) -> Self {
        BfsOptions {
            depth_limit: config.depth_limit.unwrap_or(UNBOUNDED_DEPTH),
            size_hint: config.size_hint,
        }
    }
}

/// Queue and visited set for one traversal
struct BfsState {
    visited: HashSet<NodeId>,
    queue: VecDeque<NodeId>,
}

impl BfsState {
    fn with_capacity(size_hint: usize) -> Self {
        Self {
            visited: HashSet::with_capacity(size_hint),
            queue: VecDeque::with_capacity(size_hint),
        }
    }
}

/// Breadth-first search engine.
///
/// Finds every node reachable from a source, optionally bounded by a depth
/// limit, and records the hop depth of each node it reached. The depth map
/// and maximum depth describe the most recent search only: every `find_all*`
/// call starts from a clean slate.
///
/// The maximum depth also observes nodes one hop past the depth limit. Those
/// nodes raise [`max_depth`](Self::max_depth) but are neither returned nor
/// given a depth.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    depth: HashMap<NodeId, i32>,
    max_depth: i32,
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        BreadthFirstSearch {
            depth: HashMap::new(),
            max_depth: UNKNOWN_DEPTH,
        }
    }

    /// Find every node reachable from `source`, unbounded
    pub fn find_all<G: Adjacency + ?Sized>(
        &mut self,
        graph: &G,
        source: NodeId,
    ) -> HashSet<NodeId> {
        self.find_all_with(graph, source, &BfsOptions::default())
    }

    /// Find every node reachable from `source`, presized for `total_nodes`
    pub fn find_all_sized<G: Adjacency + ?Sized>(
        &mut self,
        graph: &G,
        source: NodeId,
        total_nodes: usize,
    ) -> HashSet<NodeId> {
        let opts = BfsOptions {
            size_hint: total_nodes,
            ..Default::default()
        };
        self.find_all_with(graph, source, &opts)
    }

    /// Find every node within `depth_limit` hops of `source`
    pub fn find_all_within<G: Adjacency + ?Sized>(
        &mut self,
        graph: &G,
        source: NodeId,
        depth_limit: i32,
        total_nodes: usize,
    ) -> HashSet<NodeId> {
        let opts = BfsOptions {
            depth_limit,
            size_hint: total_nodes,
        };
        self.find_all_with(graph, source, &opts)
    }

    /// Find every node reachable from `source` under `opts`.
    ///
    /// A source with no outgoing edges yields `{source}` without traversal:
    /// the source keeps depth 0 and the maximum depth stays [`UNKNOWN_DEPTH`].
    /// A source the graph does not contain yields an empty set and is given
    /// no depth.
    #[tracing::instrument(skip(self, graph, opts), fields(source = %source, depth_limit = opts.depth_limit))]
    pub fn find_all_with<G: Adjacency + ?Sized>(
        &mut self,
        graph: &G,
        source: NodeId,
        opts: &BfsOptions,
    ) -> HashSet<NodeId> {
        let size_hint = opts.size_hint.min(MAX_PRESIZE);
        self.reset();
        if !graph.contains(source) {
            tracing::debug!("source is not in the graph");
            return HashSet::new();
        }
        self.depth.reserve(size_hint);
        self.depth.insert(source, 0);

        if graph.out_degree(source) == 0 {
            tracing::trace!("source has no outgoing edges");
            return HashSet::from([source]);
        }

        let mut state = BfsState::with_capacity(size_hint);
        state.queue.push_back(source);

        while let Some(current) = state.queue.pop_front() {
            state.visited.insert(current);
            let successor_depth = self.depth_of(current).saturating_add(1);

            for neighbour in graph.neighbours(current) {
                if state.visited.contains(&neighbour) || self.depth.contains_key(&neighbour) {
                    continue;
                }

                if successor_depth > self.max_depth {
                    self.max_depth = successor_depth;
                }

                if successor_depth > opts.depth_limit {
                    continue;
                }

                self.depth.insert(neighbour, successor_depth);
                state.queue.push_back(neighbour);
            }
        }

        tracing::trace!(
            reached = state.visited.len(),
            max_depth = self.max_depth,
            "bfs complete"
        );

        state.visited
    }

    /// Forget the results of the previous search
    pub fn reset(&mut self) {
        self.depth.clear();
        self.max_depth = UNKNOWN_DEPTH;
    }

    /// Depth of every node the last search assigned a depth to
    pub fn depths(&self) -> &HashMap<NodeId, i32> {
        &self.depth
    }

    /// Depth of `node` in the last search, or [`UNKNOWN_DEPTH`]
    pub fn depth_of(&self, node: NodeId) -> i32 {
        self.depth.get(&node).copied().unwrap_or(UNKNOWN_DEPTH)
    }

    /// Greatest depth observed by the last search, or [`UNKNOWN_DEPTH`]
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }
}
