use crate::constants::Weight;
use crate::error::Error;
use log::info;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Node identifier. u32 is ample for the target scale (a few dozen cities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A city. The label is stored normalized (trimmed, lower-cased).
#[derive(Debug, Clone)]
pub struct City {
    pub name: String,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An undirected connection between two cities. Stored once; the adjacency
/// lists reference it from both endpoints.
#[derive(Debug, Clone)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Record shape of a CSV edge list (header: `source,target,weight`).
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: Weight,
}

/// In-memory city map. Built once from an edge list, read-only afterwards;
/// searches borrow it immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<City>,
    pub edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeIndex>>,
    node_ids: FxHashMap<String, NodeIndex>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            adjacency: Vec::with_capacity(num_nodes),
            node_ids: FxHashMap::default(),
        }
    }

    /// Interns a city by label and returns its index. Adding a label that is
    /// already present returns the existing index.
    pub fn add_node(&mut self, name: &str) -> Result<NodeIndex, Error> {
        let name = normalize(name);
        if name.is_empty() {
            return Err(Error::EmptyCityName);
        }

        if let Some(&node_idx) = self.node_ids.get(&name) {
            return Ok(node_idx);
        }

        let node_idx = NodeIndex::new(self.nodes.len());
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "Maximum number of nodes exceeded"
        );

        self.adjacency.push(Vec::new());
        self.node_ids.insert(name.clone(), node_idx);
        self.nodes.push(City { name });

        Ok(node_idx)
    }

    /// Add a new undirected `edge` to the graph.
    ///
    /// Self-loops and negative or non-finite weights are rejected. If an edge
    /// between the same pair already exists, the lighter weight wins and no
    /// second edge is stored.
    ///
    /// **Panics** if the source or target node does not exist.
    ///
    /// Returns the index of the edge.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex, Error> {
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );

        if edge.source == edge.target {
            return Err(Error::SelfLoop(self.nodes[edge.source.index()].name.clone()));
        }
        if edge.weight < 0.0 || !edge.weight.is_finite() {
            return Err(Error::InvalidWeight {
                from: self.nodes[edge.source.index()].name.clone(),
                target: self.nodes[edge.target.index()].name.clone(),
                weight: edge.weight,
            });
        }

        // Duplicate pair: keep the lighter of the two weights
        for &edge_idx in &self.adjacency[edge.source.index()] {
            let old_edge = &self.edges[edge_idx.index()];
            if edge.target == old_edge.source || edge.target == old_edge.target {
                if edge.weight < old_edge.weight {
                    self.edges[edge_idx.index()].weight = edge.weight;
                }
                return Ok(edge_idx);
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        self.adjacency[edge.source.index()].push(edge_idx);
        self.adjacency[edge.target.index()].push(edge_idx);
        self.edges.push(edge);

        Ok(edge_idx)
    }

    /// Resolves a city label (normalized before lookup).
    pub fn index_of(&self, name: &str) -> Result<NodeIndex, Error> {
        let name = normalize(name);
        self.node_ids
            .get(&name)
            .copied()
            .ok_or(Error::UnknownCity(name))
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&City> {
        self.nodes.get(node_idx.index())
    }

    /// Returns an iterator over all cities of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &City> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Neighbors of `node_idx` with edge weights, in edge-insertion order.
    /// Empty for an isolated city.
    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            if edge.source == node_idx {
                (edge.target, edge.weight)
            } else {
                (edge.source, edge.weight)
            }
        })
    }

    /// Weight of the direct edge between `source` and `target`, if one exists.
    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.neighbors(source)
            .find(|&(neighbor, _)| neighbor == target)
            .map(|(_, weight)| weight)
    }

    /// Builds a graph from `(city, city, distance)` triples.
    pub fn from_edge_list(triples: &[(&str, &str, Weight)]) -> Result<Self, Error> {
        let mut g = Graph::with_capacity(triples.len(), triples.len());
        for &(source, target, weight) in triples {
            let source = g.add_node(source)?;
            let target = g.add_node(target)?;
            g.add_edge(Edge::new(source, target, weight))?;
        }
        Ok(g)
    }

    /// Reads a headered CSV edge list (`source,target,weight`).
    pub fn from_csv(path: &Path) -> Result<Self, Error> {
        let mut g = Graph::new();

        let mut reader = csv::Reader::from_path(path)?;
        for result in reader.deserialize() {
            let record: EdgeRecord = result?;
            let source = g.add_node(&record.source)?;
            let target = g.add_node(&record.target)?;
            g.add_edge(Edge::new(source, target, record.weight))?;
        }

        info!(
            "Graph has {} cities and {} edges",
            g.nodes.len(),
            g.edges.len()
        );
        Ok(g)
    }
}
