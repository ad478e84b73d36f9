//! A directed graph over an arbitrary hashable, orderable vertex type, storing only
//! inbound adjacency (outbound would make `remove_vertex` cheaper but `roots` more
//! expensive, and `roots` is on the hot path of every graph-based method).
//!
//! Cycle pruning is snapshot-based rather than edge-by-edge: a batch of candidate
//! edges is added optimistically, then any edge that closes a cycle is identified by
//! walking inbound reachability from its source and removed, all at once. Processing
//! edge-by-edge instead would make the outcome depend on iteration order, which is not
//! deterministic across hash-map implementations.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use crate::errors::CoreError;

/// A directed graph that tracks only inbound edges per vertex.
#[derive(Clone, Debug)]
pub struct Graph<V: Clone + Eq + Hash + Ord> {
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: Clone + Eq + Hash + Ord> Graph<V> {
    /// Create a new graph over the given vertex set, with no edges.
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Self {
        Graph {
            vertices: vertices.into_iter().map(|v| (v, HashSet::new())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    fn require(&self, v: &V) -> Result<(), CoreError> {
        if self.vertices.contains_key(v) {
            Ok(())
        } else {
            Err(CoreError::NoSuchVertex(format!("{:?}", v)))
        }
    }

    /// Add an edge from `source` to `sink`, unconditionally. Provides no protection
    /// against cycles; use `acyclic_edges` or `river_edges` when that matters.
    pub fn edge(&mut self, source: V, sink: V) {
        self.vertices.entry(sink).or_default().insert(source);
    }

    /// Add each of `edges` as long as the graph remains acyclic afterward. Returns the
    /// number of edges that survived pruning.
    pub fn acyclic_edges(&mut self, edges: impl IntoIterator<Item = (V, V)>) -> usize {
        let mut completed: HashSet<(V, V)> = HashSet::new();
        for (source, sink) in edges {
            self.vertices.entry(sink.clone()).or_default().insert(source.clone());
            completed.insert((source, sink));
        }
        let cyclic = self.prune_cycles(completed.iter().cloned());
        completed.len() - cyclic.len()
    }

    /// Remove any of `edges` that participate in a cycle, given the graph as it
    /// currently stands (including edges added earlier in the same batch). Returns the
    /// set of edges removed.
    pub fn prune_cycles(&mut self, edges: impl IntoIterator<Item = (V, V)>) -> HashSet<(V, V)> {
        let mut cyclic: HashSet<(V, V)> = HashSet::new();
        for (source, sink) in edges {
            let mut seen: HashSet<V> = HashSet::new();
            let mut connected: Vec<V> = vec![source.clone()];
            'walk: while let Some(vertex) = connected.pop() {
                let inbound = match self.vertices.get(&vertex) {
                    Some(set) => set,
                    None => continue,
                };
                if inbound.contains(&sink) {
                    cyclic.insert((source.clone(), sink.clone()));
                    break 'walk;
                }
                seen.insert(vertex.clone());
                for candidate in inbound {
                    if !seen.contains(candidate) {
                        connected.push(candidate.clone());
                    }
                }
            }
        }
        for (source, sink) in &cyclic {
            if let Some(inbound) = self.vertices.get_mut(sink) {
                inbound.remove(source);
            }
        }
        cyclic
    }

    /// Add each of `edges` that would not introduce a cycle or give any vertex more
    /// than one outbound edge. Returns the set of edges that were rejected, whether for
    /// branching or for cyclicity.
    pub fn river_edges(&mut self, edges: impl IntoIterator<Item = (V, V)>) -> HashSet<(V, V)> {
        let mut sinks: HashMap<V, HashSet<V>> = HashMap::new();
        for (source, sink) in edges {
            sinks.entry(sink).or_default().insert(source);
        }

        let mut blocked: HashSet<(V, V)> = HashSet::new();
        let mut completed: HashSet<(V, V)> = HashSet::new();
        for (sink, sources) in sinks {
            let already_has_inbound = self
                .vertices
                .get(&sink)
                .map(|set| !set.is_empty())
                .unwrap_or(false);
            if already_has_inbound || sources.len() > 1 {
                for source in sources {
                    blocked.insert((source, sink.clone()));
                }
            } else {
                let source = sources.into_iter().next().unwrap();
                self.vertices.entry(sink.clone()).or_default().insert(source.clone());
                completed.insert((source, sink));
            }
        }

        let cyclic = self.prune_cycles(completed.iter().cloned());
        blocked.union(&cyclic).cloned().collect()
    }

    /// All edges currently in the graph, as `(source, sink)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.vertices.iter().flat_map(|(sink, inbound)| {
            inbound.iter().map(move |source| (source.clone(), sink.clone()))
        })
    }

    /// Vertices with no inbound edges: the best choices under whichever ordering built
    /// this graph.
    pub fn roots(&self) -> BTreeSet<V> {
        self.vertices
            .iter()
            .filter(|(_, inbound)| inbound.is_empty())
            .map(|(v, _)| v.clone())
            .collect()
    }

    /// Remove and return the current root vertices, then drop them from every other
    /// vertex's inbound set, in one atomic step. Repeated calls peel the graph layer by
    /// layer: this is how ranked-pairs/beatpath/river extract a full ordering.
    pub fn pop(&mut self) -> BTreeSet<V> {
        let roots: BTreeSet<V> = self.roots();
        for root in &roots {
            self.vertices.remove(root);
        }
        for inbound in self.vertices.values_mut() {
            for root in &roots {
                inbound.remove(root);
            }
        }
        roots
    }

    /// All simple paths from `source` to `sink`, shortest first.
    pub fn paths(&self, source: &V, sink: &V) -> Vec<Vec<V>> {
        let mut found = Vec::new();
        let mut queue: Vec<(Vec<V>, HashSet<V>)> = vec![(vec![sink.clone()], self.inbound_of(sink))];
        while !queue.is_empty() {
            let (path, steps) = queue.remove(0);
            for item in &steps {
                if item == source {
                    let mut full = vec![item.clone()];
                    full.extend(path.iter().cloned());
                    found.push(full);
                } else if !path.contains(item) {
                    let inbound = self.inbound_of(item);
                    if !inbound.is_empty() {
                        let mut next_path = vec![item.clone()];
                        next_path.extend(path.iter().cloned());
                        queue.push((next_path, inbound));
                    }
                }
            }
        }
        found
    }

    fn inbound_of(&self, v: &V) -> HashSet<V> {
        self.vertices.get(v).cloned().unwrap_or_default()
    }

    /// Remove a vertex and any edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), CoreError> {
        self.require(vertex)?;
        self.vertices.remove(vertex);
        for inbound in self.vertices.values_mut() {
            inbound.remove(vertex);
        }
        Ok(())
    }

    /// Remove a single edge.
    pub fn remove_edge(&mut self, source: &V, sink: &V) -> Result<(), CoreError> {
        let inbound = self
            .vertices
            .get_mut(sink)
            .ok_or_else(|| CoreError::NoSuchVertex(format!("{:?}", sink)))?;
        if inbound.remove(source) {
            Ok(())
        } else {
            Err(CoreError::NoSuchEdge(
                format!("{:?}", source),
                format!("{:?}", sink),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acyclic_edges_rejects_the_closing_edge() {
        // A three-edge cycle plus an edge hanging off one of its vertices: the whole
        // cycle is rejected as one mutually-dependent batch, but the unrelated edge
        // survives.
        let mut g = Graph::new(["A", "B", "C", "D"]);
        let added = g.acyclic_edges([("A", "B"), ("B", "C"), ("C", "A"), ("A", "D")]);
        assert_eq!(added, 1);
        assert_eq!(g.roots(), BTreeSet::from(["A", "B", "C"]));
    }

    #[test]
    fn acyclic_edges_rejects_a_whole_symmetric_cycle_at_once() {
        // When every edge in a batch is mutually cyclic (no edge survives once the
        // others are present), the batch-pruning snapshot rejects all of them rather
        // than arbitrarily keeping a subset: ties stay ties.
        let mut g = Graph::new(["A", "B", "C"]);
        let added = g.acyclic_edges([("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(added, 0);
        assert_eq!(g.roots(), BTreeSet::from(["A", "B", "C"]));
    }

    #[test]
    fn river_edges_blocks_branching() {
        let mut g = Graph::new(["A", "B", "C"]);
        let blocked = g.river_edges([("A", "C"), ("B", "C")]);
        assert_eq!(blocked.len(), 2);
        assert_eq!(g.roots(), BTreeSet::from(["A", "B", "C"]));
    }

    #[test]
    fn pop_peels_layers() {
        let mut g = Graph::new(["A", "B", "C"]);
        g.edge("A", "B");
        g.edge("B", "C");
        assert_eq!(g.pop(), BTreeSet::from(["A"]));
        assert_eq!(g.pop(), BTreeSet::from(["B"]));
        assert_eq!(g.pop(), BTreeSet::from(["C"]));
    }

    #[test]
    fn paths_shortest_first() {
        let mut g = Graph::new(["A", "B", "C"]);
        g.edge("A", "B");
        g.edge("B", "C");
        g.edge("A", "C");
        let paths = g.paths(&"A", &"C");
        assert_eq!(paths[0], vec!["A", "C"]);
        assert!(paths.contains(&vec!["A", "B", "C"]));
    }
}
