//! Reuse graph for one section kind
//!
//! Nodes are market ids, edges point from a reusing market to the market it
//! reuses. Since every market reuses at most one other market per section,
//! each node has at most one outgoing edge and every cycle is found by
//! walking forward from each node.
//!
//! # Example
//!
//! ```
//! use market_core::graph::ReuseGraph;
//! use market_meta::MarketId;
//!
//! let mut graph = ReuseGraph::new();
//! graph.add_edge(MarketId::new("sg"), MarketId::new("my"));
//! graph.add_edge(MarketId::new("my"), MarketId::new("sg"));
//!
//! let cycles = graph.find_cycles();
//! assert_eq!(cycles.len(), 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use market_meta::{MarketId, MarketRecord, SectionKind};

/// Directed graph of reuse references for a single section kind.
#[derive(Debug, Clone, Default)]
pub struct ReuseGraph {
    nodes: BTreeSet<MarketId>,
    /// Key reuses value.
    edges: BTreeMap<MarketId, MarketId>,
}

impl ReuseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph of `kind` references among `records`. Targets that
    /// are not among the records still appear as nodes.
    pub fn for_section(records: &[MarketRecord], kind: SectionKind) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.add_node(record.id.clone());
            if let Some(target) = record.reuse_target(kind) {
                graph.add_edge(record.id.clone(), target.clone());
            }
        }
        graph
    }

    pub fn add_node(&mut self, id: MarketId) {
        self.nodes.insert(id);
    }

    /// Declare that `from` reuses `to`, replacing any earlier edge from
    /// `from`.
    pub fn add_edge(&mut self, from: MarketId, to: MarketId) {
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.edges.insert(from, to);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn target_of(&self, id: &MarketId) -> Option<&MarketId> {
        self.edges.get(id)
    }

    /// Follow edges from `start`, stopping before the first repeated node.
    ///
    /// The returned chain starts with `start` itself.
    pub fn chain_from(&self, start: &MarketId) -> Vec<MarketId> {
        let mut chain = vec![start.clone()];
        let mut current = start;
        while let Some(next) = self.edges.get(current) {
            if chain.contains(next) {
                break;
            }
            chain.push(next.clone());
            current = next;
        }
        chain
    }

    /// Every distinct cycle, each listed from its smallest id and closed by
    /// repeating that id.
    pub fn find_cycles(&self) -> Vec<Vec<MarketId>> {
        let mut cycles: BTreeSet<Vec<MarketId>> = BTreeSet::new();

        for start in &self.nodes {
            let chain = self.chain_from(start);
            let Some(last) = chain.last() else {
                continue;
            };
            let Some(back_to) = self.edges.get(last) else {
                continue;
            };
            let Some(pos) = chain.iter().position(|id| id == back_to) else {
                continue;
            };

            let mut cycle: Vec<MarketId> = chain[pos..].to_vec();
            if let Some(min_pos) = cycle
                .iter()
                .enumerate()
                .min_by(|a, b| a.1.cmp(b.1))
                .map(|(i, _)| i)
            {
                cycle.rotate_left(min_pos);
            }
            cycle.push(cycle[0].clone());
            cycles.insert(cycle);
        }

        cycles.into_iter().collect()
    }

    /// True when any cycle exists.
    pub fn has_cycle(&self) -> bool {
        !self.find_cycles().is_empty()
    }
}
