//! Union/find workload generator.
//!
//! Produces operation sequences and weighted graphs with a controlled shape.
//! All randomness is seeded, so a given [`WorkloadConfig`] always yields the
//! same workload.

use dsreg_core::{DisjointSetRegistry, NodeId, RegistryError};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How union operands are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Both operands uniform over all nodes.
    Random,
    /// `union(i, i + 1)` in order, interleaved with random finds.
    Sequential,
}

/// Configuration for the workload generator.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of registered nodes.
    pub nodes: usize,
    /// Number of union operations.
    pub unions: usize,
    /// Number of find operations.
    pub finds: usize,
    /// Operand selection strategy for unions.
    pub shape: Shape,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1 000 nodes, 2 000 operations.
    Small,
    /// 10 000 nodes, 20 000 operations.
    Medium,
    /// 100 000 nodes, 200 000 operations.
    Large,
}

impl SizeTier {
    /// Returns the default random-shape `WorkloadConfig` for this size tier.
    pub fn config(self, seed: u64) -> WorkloadConfig {
        let nodes = match self {
            SizeTier::Small => 1_000,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 100_000,
        };
        WorkloadConfig {
            seed,
            nodes,
            unions: nodes,
            finds: nodes,
            shape: Shape::Random,
        }
    }
}

/// A single registry operation on node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Union(usize, usize),
    Find(usize),
}

/// A generated operation sequence over `nodes` elements.
#[derive(Debug, Clone)]
pub struct Workload {
    pub nodes: usize,
    pub ops: Vec<Op>,
}

/// Generates a workload from `config`.
///
/// Unions and finds are interleaved at random in roughly the configured
/// proportion. An empty node set yields an empty workload.
pub fn generate_workload(config: &WorkloadConfig) -> Workload {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let total = config.unions + config.finds;
    let mut ops = Vec::with_capacity(total);
    if config.nodes == 0 {
        return Workload { nodes: 0, ops };
    }

    let mut next_sequential = 0;
    for _ in 0..total {
        if rng.gen_range(0..total) < config.unions {
            let (a, b) = match config.shape {
                Shape::Random => (
                    rng.gen_range(0..config.nodes),
                    rng.gen_range(0..config.nodes),
                ),
                Shape::Sequential => {
                    let a = next_sequential % config.nodes;
                    next_sequential += 1;
                    (a, (a + 1) % config.nodes)
                }
            };
            ops.push(Op::Union(a, b));
        } else {
            ops.push(Op::Find(rng.gen_range(0..config.nodes)));
        }
    }
    Workload {
        nodes: config.nodes,
        ops,
    }
}

/// Registers `workload.nodes` nodes in an unbounded registry and applies
/// every operation in order.
///
/// # Errors
///
/// Propagates [`RegistryError`]; generated workloads only use in-range
/// indices, so none is expected.
pub fn replay(workload: &Workload) -> Result<DisjointSetRegistry<usize>, RegistryError> {
    let mut registry = DisjointSetRegistry::unbounded();
    for i in 0..workload.nodes {
        registry.register(i)?;
    }
    for op in &workload.ops {
        match *op {
            Op::Union(a, b) => {
                registry.union(NodeId::from(a), NodeId::from(b))?;
            }
            Op::Find(x) => {
                registry.find(NodeId::from(x))?;
            }
        }
    }
    Ok(registry)
}

/// Generates a weighted undirected graph with `config.nodes` nodes and
/// `config.unions` random edges with weights in `1..=1000`.
///
/// Node weights are the node indices.
pub fn generate_weighted_graph(config: &WorkloadConfig) -> UnGraph<usize, u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = UnGraph::with_capacity(config.nodes, config.unions);
    for i in 0..config.nodes {
        graph.add_node(i);
    }
    if config.nodes == 0 {
        return graph;
    }
    for _ in 0..config.unions {
        let a = NodeIndex::new(rng.gen_range(0..config.nodes));
        let b = NodeIndex::new(rng.gen_range(0..config.nodes));
        graph.add_edge(a, b, rng.gen_range(1..=1000));
    }
    graph
}
