//! Disjoint-set registry: node arena, `find` with path compression and
//! `union` by rank.
//!
//! Nodes live in an owned arena and refer to their parent by index. A node
//! whose parent is itself is the root (representative) of its group.
//!
//! [`DisjointSetRegistry::find`] runs in two passes: the first walks to the
//! root, the second rewrites every node on the walked path to point directly
//! at it. Neither pass recurses, so deep trees built before any compression
//! cannot exhaust the call stack.
//!
//! [`DisjointSetRegistry::union`] attaches the lower-rank root under the
//! higher-rank one. On equal ranks the root of the **first** operand wins and
//! its rank grows by one.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use log::{debug, trace, warn};

use crate::config::{AlreadyUnifiedPolicy, RegistryConfig};
use crate::error::RegistryError;

/// Rank assigned to every freshly registered node.
const INITIAL_RANK: u32 = 1;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Handle to a node owned by a [`DisjointSetRegistry`].
///
/// Ids are assigned in ascending order starting at `0` and are never reused.
/// A handle is only meaningful for the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One element of the universe tracked by a registry.
///
/// Parent and rank are owned by the registry; callers can only read them.
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: NodeId,
    parent: NodeId,
    rank: u32,
    payload: T,
}

impl<T> Node<T> {
    /// The node's stable handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's current parent. Equal to [`Node::id`] for roots.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Upper bound on the height of the tree rooted here.
    ///
    /// Only meaningful while [`Node::is_root`] holds; the value of a node
    /// that has been attached under another root is stale.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// The caller-supplied payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns `true` if this node is the representative of its group.
    pub fn is_root(&self) -> bool {
        self.parent == self.id
    }
}

// ---------------------------------------------------------------------------
// DisjointSetRegistry
// ---------------------------------------------------------------------------

/// A union-find structure that owns its nodes and their payloads.
///
/// # Capacity
///
/// The registry accepts at most [`RegistryConfig::max_nodes`] registrations
/// (1024 by default). Pass [`RegistryConfig::unbounded`] to lift the limit.
///
/// # Mutation on lookup
///
/// `find` compresses paths and therefore takes `&mut self`. Use
/// [`DisjointSetRegistry::root_of`] for a lookup through a shared reference.
#[derive(Debug, Clone)]
pub struct DisjointSetRegistry<T> {
    nodes: Vec<Node<T>>,
    config: RegistryConfig,
    group_count: usize,
}

impl<T> Default for DisjointSetRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointSetRegistry<T> {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry that accepts at most `max_nodes` nodes.
    pub fn bounded(max_nodes: usize) -> Self {
        Self::with_config(RegistryConfig::default().with_max_nodes(max_nodes))
    }

    /// Creates an empty registry without a capacity limit.
    pub fn unbounded() -> Self {
        Self::with_config(RegistryConfig::default().unbounded())
    }

    /// Creates an empty registry from an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
            group_count: 0,
        }
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers `payload` as a new singleton group and returns its handle.
    ///
    /// The new node is its own parent and starts with rank 1.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] when the registry already
    /// holds `max_nodes` nodes. Nothing is allocated in that case.
    pub fn register(&mut self, payload: T) -> Result<NodeId, RegistryError> {
        if let Some(max_nodes) = self.config.max_nodes {
            if self.nodes.len() >= max_nodes {
                warn!("registry full: refusing registration beyond {max_nodes} nodes");
                return Err(RegistryError::CapacityExceeded { max_nodes });
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            parent: id,
            rank: INITIAL_RANK,
            payload,
        });
        self.group_count += 1;
        trace!("registered node {id}");
        Ok(id)
    }

    /// Returns the root of the group containing `id`, compressing the path.
    ///
    /// After this call every node that was on the path from `id` to the root
    /// has the root as its direct parent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] if `id` was not issued by this
    /// registry.
    pub fn find(&mut self, id: NodeId) -> Result<NodeId, RegistryError> {
        let root = self.root_of(id)?;

        let mut current = id;
        while current != root {
            let next = self.nodes[current.0].parent;
            self.nodes[current.0].parent = root;
            current = next;
        }
        Ok(root)
    }

    /// Merges the groups containing `a` and `b` and returns the merged root.
    ///
    /// The root with the lower rank is attached under the other. When ranks
    /// are equal the root of `a` becomes the parent and its rank increases by
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] if either handle is foreign;
    /// both are checked before anything is touched. Returns
    /// [`RegistryError::AlreadyUnified`] when the operands share a root and
    /// the registry was configured with [`AlreadyUnifiedPolicy::Reject`].
    pub fn union(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, RegistryError> {
        self.check(a)?;
        self.check(b)?;

        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return match self.config.on_already_unified {
                AlreadyUnifiedPolicy::Ignore => Ok(root_a),
                AlreadyUnifiedPolicy::Reject => {
                    debug!("rejecting union of {a} and {b}: both under root {root_a}");
                    Err(RegistryError::AlreadyUnified { root: root_a })
                }
            };
        }

        let root = match self.nodes[root_a.0].rank.cmp(&self.nodes[root_b.0].rank) {
            Ordering::Equal => {
                self.nodes[root_b.0].parent = root_a;
                self.nodes[root_a.0].rank += 1;
                root_a
            }
            Ordering::Less => {
                self.nodes[root_a.0].parent = root_b;
                root_b
            }
            Ordering::Greater => {
                self.nodes[root_b.0].parent = root_a;
                root_a
            }
        };
        self.group_count -= 1;
        trace!("union({a}, {b}) -> root {root}");
        Ok(root)
    }

    /// Returns `true` if `a` and `b` belong to the same group.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] if either handle is foreign.
    pub fn same_group(&mut self, a: NodeId, b: NodeId) -> Result<bool, RegistryError> {
        self.check(b)?;
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Returns the root of the group containing `id` without compressing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] if `id` was not issued by this
    /// registry.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, RegistryError> {
        self.check(id)?;
        let mut current = id;
        loop {
            let parent = self.nodes[current.0].parent;
            if parent == current {
                return Ok(current);
            }
            current = parent;
        }
    }

    /// Returns the node behind `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] for a foreign handle.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, RegistryError> {
        self.nodes.get(id.0).ok_or(RegistryError::InvalidHandle {
            id,
            len: self.nodes.len(),
        })
    }

    /// Returns the payload registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] for a foreign handle.
    pub fn payload(&self, id: NodeId) -> Result<&T, RegistryError> {
        self.node(id).map(Node::payload)
    }

    /// Returns a mutable reference to the payload registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] for a foreign handle.
    pub fn payload_mut(&mut self, id: NodeId) -> Result<&mut T, RegistryError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .map(|node| &mut node.payload)
            .ok_or(RegistryError::InvalidHandle { id, len })
    }

    /// Iterates from `id` up its parent chain, ending with the root.
    ///
    /// The walk does not compress the path.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] for a foreign handle.
    pub fn ancestors(&self, id: NodeId) -> Result<Ancestors<'_, T>, RegistryError> {
        self.check(id)?;
        Ok(Ancestors {
            nodes: &self.nodes,
            next: Some(id),
        })
    }

    /// Returns every member of the group containing `id`, sorted by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidHandle`] for a foreign handle.
    pub fn group_of(&self, id: NodeId) -> Result<Vec<NodeId>, RegistryError> {
        let root = self.root_of(id)?;
        let mut members = Vec::new();
        for node in &self.nodes {
            if self.root_of(node.id)? == root {
                members.push(node.id);
            }
        }
        Ok(members)
    }

    /// Returns the current partition.
    ///
    /// Each group is sorted by id and groups are ordered by their smallest
    /// member, so the result depends only on the partition and not on which
    /// node happens to be the root.
    pub fn groups(&self) -> Vec<Vec<NodeId>> {
        let mut slot_by_root: HashMap<NodeId, usize> = HashMap::with_capacity(self.group_count);
        let mut groups: Vec<Vec<NodeId>> = Vec::with_capacity(self.group_count);

        for node in &self.nodes {
            let root = self.walk_to_root(node.id);
            let slot = *slot_by_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(node.id);
        }
        groups
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint groups, equal to the number of roots.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// The configured capacity, or `None` when unbounded.
    pub fn max_nodes(&self) -> Option<usize> {
        self.config.max_nodes
    }

    /// How many more nodes can be registered, or `None` when unbounded.
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.config
            .max_nodes
            .map(|max| max.saturating_sub(self.nodes.len()))
    }

    /// Iterates over all nodes in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    fn check(&self, id: NodeId) -> Result<(), RegistryError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(RegistryError::InvalidHandle {
                id,
                len: self.nodes.len(),
            })
        }
    }

    /// Root lookup for ids already known to be in range.
    fn walk_to_root(&self, mut id: NodeId) -> NodeId {
        while self.nodes[id.0].parent != id {
            id = self.nodes[id.0].parent;
        }
        id
    }
}

impl<'a, T> IntoIterator for &'a DisjointSetRegistry<T> {
    type Item = &'a Node<T>;
    type IntoIter = std::slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

// ---------------------------------------------------------------------------
// Ancestors
// ---------------------------------------------------------------------------

/// Iterator returned by [`DisjointSetRegistry::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?.0)?;
        self.next = if node.is_root() {
            None
        } else {
            Some(node.parent)
        };
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn registry_with(n: usize) -> (DisjointSetRegistry<usize>, Vec<NodeId>) {
        let mut reg = DisjointSetRegistry::unbounded();
        let ids = (0..n)
            .map(|i| reg.register(i).expect("unbounded registry accepts nodes"))
            .collect();
        (reg, ids)
    }

    /// Builds a binomial tree over 16 nodes whose deepest node is 15, via
    /// 15 -> 14 -> 12 -> 8 -> 0.
    fn binomial_tree() -> (DisjointSetRegistry<usize>, Vec<NodeId>) {
        let (mut reg, ids) = registry_with(16);
        for step in [1, 2, 4, 8] {
            for i in (0..16).step_by(2 * step) {
                reg.union(ids[i], ids[i + step]).expect("union");
            }
        }
        (reg, ids)
    }

    #[test]
    fn register_creates_singletons() {
        let (mut reg, ids) = registry_with(5);
        for (i, &id) in ids.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(reg.find(id).expect("find"), id, "{id} should be its own root");
            let node = reg.node(id).expect("node");
            assert!(node.is_root());
            assert_eq!(node.rank(), 1);
        }
        assert_eq!(reg.group_count(), 5);
    }

    #[test]
    fn register_accepts_unit_payload() {
        let mut reg: DisjointSetRegistry<()> = DisjointSetRegistry::new();
        let id = reg.register(()).expect("register");
        assert_eq!(reg.payload(id).expect("payload"), &());
    }

    #[test]
    fn ids_are_unique_and_ascending() {
        let (_, ids) = registry_with(10);
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn capacity_boundary() {
        let mut reg = DisjointSetRegistry::bounded(3);
        for i in 0..3 {
            reg.register(i).expect("within capacity");
        }
        assert_eq!(reg.remaining_capacity(), Some(0));
        assert_eq!(
            reg.register(3),
            Err(RegistryError::CapacityExceeded { max_nodes: 3 })
        );
        assert_eq!(reg.len(), 3, "failed registration must not allocate");
        // Still usable for find/union.
        let root = reg.union(NodeId(0), NodeId(2)).expect("union after full");
        assert_eq!(reg.find(NodeId(2)).expect("find"), root);
        // And keeps refusing.
        assert!(reg.register(4).is_err());
    }

    #[test]
    fn default_capacity_is_1024() {
        let mut reg = DisjointSetRegistry::new();
        for i in 0..1024 {
            reg.register(i).expect("within default capacity");
        }
        assert_eq!(
            reg.register(1024),
            Err(RegistryError::CapacityExceeded { max_nodes: 1024 })
        );
    }

    #[test]
    fn zero_capacity_rejects_first_registration() {
        let mut reg = DisjointSetRegistry::bounded(0);
        assert!(matches!(
            reg.register("x"),
            Err(RegistryError::CapacityExceeded { max_nodes: 0 })
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn find_is_idempotent() {
        let (mut reg, ids) = registry_with(4);
        reg.union(ids[0], ids[1]).expect("union");
        let first = reg.find(ids[1]).expect("find");
        let second = reg.find(ids[1]).expect("find");
        assert_eq!(first, second);
    }

    #[test]
    fn union_two_elements_same_set() {
        let (mut reg, ids) = registry_with(4);
        reg.union(ids[0], ids[1]).expect("union");
        assert_eq!(reg.find(ids[0]).expect("find"), reg.find(ids[1]).expect("find"));
    }

    #[test]
    fn union_does_not_affect_others() {
        let (mut reg, ids) = registry_with(4);
        reg.union(ids[0], ids[1]).expect("union");
        assert!(!reg.same_group(ids[0], ids[2]).expect("query"));
        assert!(!reg.same_group(ids[0], ids[3]).expect("query"));
        assert!(!reg.same_group(ids[2], ids[3]).expect("query"));
        assert_eq!(reg.group_count(), 3);
    }

    #[test]
    fn equal_rank_first_operand_wins_and_rank_grows() {
        let (mut reg, ids) = registry_with(2);
        let root = reg.union(ids[1], ids[0]).expect("union");
        assert_eq!(root, ids[1]);
        assert_eq!(reg.node(ids[0]).expect("node").parent(), ids[1]);
        assert_eq!(reg.node(ids[1]).expect("node").rank(), 2);
    }

    #[test]
    fn lower_rank_attaches_under_higher_rank() {
        let (mut reg, ids) = registry_with(3);
        reg.union(ids[0], ids[1]).expect("union");
        // ids[2] (rank 1) as first operand still goes under ids[0] (rank 2).
        let root = reg.union(ids[2], ids[0]).expect("union");
        assert_eq!(root, ids[0]);
        assert_eq!(reg.node(ids[2]).expect("node").parent(), ids[0]);
        assert_eq!(reg.node(ids[0]).expect("node").rank(), 2);

        let (mut reg, ids) = registry_with(3);
        reg.union(ids[0], ids[1]).expect("union");
        let root = reg.union(ids[0], ids[2]).expect("union");
        assert_eq!(root, ids[0], "higher-rank first operand stays root");
        assert_eq!(reg.node(ids[0]).expect("node").rank(), 2);
    }

    #[test]
    fn union_symmetry_same_partition() {
        let (mut ab, ids_ab) = registry_with(3);
        ab.union(ids_ab[0], ids_ab[1]).expect("union");
        let (mut ba, ids_ba) = registry_with(3);
        ba.union(ids_ba[1], ids_ba[0]).expect("union");
        assert_eq!(ab.groups(), ba.groups());
        assert!(ba.same_group(ids_ba[0], ids_ba[1]).expect("query"));
    }

    #[test]
    fn transitive_closure() {
        let (mut reg, ids) = registry_with(3);
        reg.union(ids[0], ids[1]).expect("union");
        reg.union(ids[1], ids[2]).expect("union");
        assert!(reg.same_group(ids[0], ids[2]).expect("query"));
    }

    #[test]
    fn repeated_union_is_noop_by_default() {
        let (mut reg, ids) = registry_with(3);
        let root = reg.union(ids[0], ids[1]).expect("union");
        let groups_before = reg.groups();
        let rank_before = reg.node(root).expect("node").rank();

        assert_eq!(reg.union(ids[0], ids[1]).expect("union"), root);
        assert_eq!(reg.union(ids[1], ids[0]).expect("union"), root);
        assert_eq!(reg.union(ids[2], ids[2]).expect("self union"), ids[2]);

        assert_eq!(reg.groups(), groups_before);
        assert_eq!(reg.node(root).expect("node").rank(), rank_before);
        assert_eq!(reg.group_count(), 2);
    }

    #[test]
    fn reject_policy_reports_already_unified_without_mutation() {
        let config = RegistryConfig::default().with_policy(AlreadyUnifiedPolicy::Reject);
        let mut reg = DisjointSetRegistry::with_config(config);
        let a = reg.register('a').expect("register");
        let b = reg.register('b').expect("register");
        let root = reg.union(a, b).expect("first union");

        assert_eq!(
            reg.union(b, a),
            Err(RegistryError::AlreadyUnified { root })
        );
        assert_eq!(reg.node(root).expect("node").rank(), 2);
        assert_eq!(reg.group_count(), 1);
        assert_eq!(reg.find(b).expect("find"), root);
    }

    #[test]
    fn invalid_handles_are_rejected() {
        let (mut reg, ids) = registry_with(2);
        let foreign = NodeId(2);
        let expected = RegistryError::InvalidHandle { id: foreign, len: 2 };

        assert_eq!(reg.find(foreign), Err(expected.clone()));
        assert_eq!(reg.union(ids[0], foreign), Err(expected.clone()));
        assert_eq!(reg.union(foreign, ids[0]), Err(expected.clone()));
        assert_eq!(reg.payload(foreign).err(), Some(expected.clone()));
        assert_eq!(reg.payload_mut(foreign).err(), Some(expected.clone()));
        assert_eq!(reg.ancestors(foreign).err(), Some(expected.clone()));
        assert_eq!(reg.same_group(ids[0], foreign), Err(expected));

        assert_eq!(reg.group_count(), 2, "rejected calls leave state intact");
        assert!(reg.node(ids[0]).expect("node").is_root());
        assert!(reg.node(ids[1]).expect("node").is_root());
    }

    #[test]
    fn rejected_calls_do_not_compress_valid_operand() {
        let (mut reg, ids) = binomial_tree();
        let foreign = NodeId(16);
        let expected = RegistryError::InvalidHandle { id: foreign, len: 16 };

        assert_eq!(reg.union(ids[15], foreign), Err(expected.clone()));
        assert_eq!(reg.same_group(ids[15], foreign), Err(expected));

        assert_eq!(reg.node(ids[15]).expect("node").parent(), ids[14]);
        assert_eq!(reg.node(ids[14]).expect("node").parent(), ids[12]);
        assert_eq!(reg.node(ids[12]).expect("node").parent(), ids[8]);
        assert_eq!(reg.group_count(), 1);
    }

    #[test]
    fn path_compression_rewrites_parents_to_root() {
        let (mut reg, ids) = binomial_tree();
        assert_eq!(reg.node(ids[15]).expect("node").parent(), ids[14]);
        let chain: Vec<NodeId> = reg
            .ancestors(ids[15])
            .expect("ancestors")
            .map(Node::id)
            .collect();
        assert_eq!(chain, vec![ids[15], ids[14], ids[12], ids[8], ids[0]]);

        assert_eq!(reg.find(ids[15]).expect("find"), ids[0]);
        for i in [15, 14, 12, 8] {
            assert_eq!(
                reg.node(ids[i]).expect("node").parent(),
                ids[0],
                "node {i} should point straight at the root after find"
            );
        }
        // Untouched branches keep their parents.
        assert_eq!(reg.node(ids[13]).expect("node").parent(), ids[12]);
    }

    #[test]
    fn root_of_does_not_compress() {
        let (reg, ids) = binomial_tree();
        assert_eq!(reg.root_of(ids[15]).expect("root"), ids[0]);
        assert_eq!(reg.node(ids[15]).expect("node").parent(), ids[14]);
    }

    #[test]
    fn four_node_scenario() {
        let mut reg = DisjointSetRegistry::new();
        let payload = 271_828;
        let a = reg.register(payload).expect("register a");
        let b = reg.register(payload).expect("register b");
        let c = reg.register(payload).expect("register c");
        let d = reg.register(payload).expect("register d");

        reg.union(a, b).expect("union a b");
        assert!(reg.same_group(a, b).expect("query"));
        reg.union(c, d).expect("union c d");
        assert!(reg.same_group(c, d).expect("query"));
        assert!(!reg.same_group(a, c).expect("query"));

        let root = reg.union(b, d).expect("union b d");
        assert_eq!(root, a);

        let all = [a, b, c, d];
        for (i, &x) in all.iter().enumerate() {
            for &y in &all[i + 1..] {
                assert_eq!(
                    reg.find(x).expect("find"),
                    reg.find(y).expect("find"),
                    "{x} and {y} should share a root"
                );
            }
        }
        assert_eq!(reg.node(d).expect("node").parent(), a);
        assert_eq!(reg.payload(d).expect("payload"), &271_828);
        assert_eq!(reg.group_count(), 1);
    }

    #[test]
    fn groups_are_deterministic() {
        let (mut reg, ids) = registry_with(6);
        reg.union(ids[5], ids[1]).expect("union");
        reg.union(ids[3], ids[4]).expect("union");
        reg.union(ids[4], ids[1]).expect("union");
        assert_eq!(
            reg.groups(),
            vec![
                vec![ids[0]],
                vec![ids[1], ids[3], ids[4], ids[5]],
                vec![ids[2]],
            ]
        );
        assert_eq!(
            reg.group_of(ids[3]).expect("group"),
            vec![ids[1], ids[3], ids[4], ids[5]]
        );
    }

    #[test]
    fn payload_mut_updates_in_place() {
        let mut reg = DisjointSetRegistry::new();
        let id = reg.register(String::from("old")).expect("register");
        reg.payload_mut(id).expect("payload").push_str("-new");
        assert_eq!(reg.payload(id).expect("payload"), "old-new");
    }

    #[test]
    fn len_and_is_empty() {
        let reg: DisjointSetRegistry<u8> = DisjointSetRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert_eq!(reg.max_nodes(), Some(1024));

        let (reg, _) = registry_with(3);
        assert!(!reg.is_empty());
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.max_nodes(), None);
        assert_eq!(reg.remaining_capacity(), None);
        assert_eq!(reg.iter().count(), 3);
    }

    #[test]
    fn large_component_merge() {
        const N: usize = 64;
        let (mut reg, ids) = registry_with(N);
        for i in 1..N {
            reg.union(ids[0], ids[i]).expect("union");
        }
        let root = reg.find(ids[0]).expect("find");
        for &id in &ids {
            assert_eq!(reg.find(id).expect("find"), root, "{id} should share the root");
        }
        assert_eq!(reg.group_count(), 1);
        assert!(reg.node(root).expect("node").rank() <= 7);
    }
}
