use crate::constants::Weight;
use crate::error::SearchError;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Default integer typer for node and edge indices
pub type DefaultIdx = u32;

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// Optional description of a node
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// A stop of the network (airport or city), identified by its code.
///
/// Two nodes are equal if their codes are equal, metadata is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub id: String,
    pub location: Option<Location>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            location: None,
        }
    }

    pub fn with_location(id: impl Into<String>, location: Location) -> Self {
        Node {
            id: id.into(),
            location: Some(location),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Attributes carried by every edge.
///
/// `time` already contains the layover, `cost` never does. The layover
/// penalty on cost is applied by [`crate::objective::Objective::AdjustedCost`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct EdgeAttributes {
    /// Kilometres
    pub distance: Weight,
    /// Hours, including the layover
    pub time: Weight,
    pub cost: Weight,
    /// Hours
    pub layover: Weight,
    #[serde(default = "Default::default")]
    pub fuel_surcharge: Weight,
}

impl EdgeAttributes {
    pub fn new(distance: Weight, time: Weight, cost: Weight, layover: Weight) -> Self {
        EdgeAttributes {
            distance,
            time,
            cost,
            layover,
            fuel_surcharge: 0.0,
        }
    }

    pub fn fuel_surcharge(mut self, fuel_surcharge: Weight) -> Self {
        self.fuel_surcharge = fuel_surcharge;
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub attrs: EdgeAttributes,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, attrs: EdgeAttributes) -> Self {
        Edge {
            source,
            target,
            attrs,
        }
    }
}

/// Directed graph with multi-attribute edges.
///
/// There is at most one edge per ordered pair of nodes. The graph is never
/// modified by the search algorithms, they only borrow it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges_out: Vec<Vec<EdgeIndex>>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    node_lookup: FxHashMap<String, NodeIndex>,
    edge_lookup: FxHashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            edges_out: Vec::with_capacity(num_nodes),
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            node_lookup: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
            edge_lookup: FxHashMap::with_capacity_and_hasher(num_edges, Default::default()),
        }
    }

    /// Adds a new node to the graph.
    ///
    /// If a node with the same id exists, its location is replaced and the
    /// existing index is returned.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(node_idx) = self.node_lookup.get(&node.id) {
            if node.location.is_some() {
                self.nodes[node_idx.index()].location = node.location;
            }
            return *node_idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.node_lookup.insert(node.id.clone(), node_idx);
        self.nodes.push(node);

        node_idx
    }

    /// Add a new `edge` to the graph.
    ///
    /// **Panics** if the source or target node does not exist
    ///
    /// If an edge between source and target already exists its attributes
    /// are overwritten. Returns the index of the edge.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
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

        if let Some(edge_idx) = self.edge_lookup.get(&(edge.source, edge.target)) {
            self.edges[edge_idx.index()].attrs = edge.attrs;
            return *edge_idx;
        }

        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out[edge.source.index()].push(edge_idx);
        self.edge_lookup.insert((edge.source, edge.target), edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Adds an edge between two nodes given by their ids.
    pub fn add_route(
        &mut self,
        source: &str,
        target: &str,
        attrs: EdgeAttributes,
    ) -> Result<EdgeIndex, SearchError> {
        let source = self.resolve(source)?;
        let target = self.resolve(target)?;
        Ok(self.add_edge(Edge::new(source, target, attrs)))
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Returns the id of a node. **Panics** if the node does not exist.
    pub fn id(&self, node_idx: NodeIndex) -> &str {
        &self.nodes[node_idx.index()].id
    }

    /// Looks up a node by its id
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_lookup.get(id).copied()
    }

    /// Like [`Graph::node_index`] but fails with [`SearchError::UnknownNode`].
    pub fn resolve(&self, id: &str) -> Result<NodeIndex, SearchError> {
        self.node_index(id)
            .ok_or_else(|| SearchError::UnknownNode(id.to_string()))
    }

    /// Fails with [`SearchError::UnknownNode`] if `node_idx` is not part of
    /// the graph
    pub fn check(&self, node_idx: NodeIndex) -> Result<NodeIndex, SearchError> {
        if node_idx.index() < self.nodes.len() {
            Ok(node_idx)
        } else {
            Err(SearchError::UnknownNode(format!("#{}", node_idx.index())))
        }
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over the indices of all nodes
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.nodes.len()).map(NodeIndex::new)
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| &self.edges[edge_idx.index()])
    }

    /// Attributes of the edge `source -> target`, if there is one
    pub fn edge(&self, source: NodeIndex, target: NodeIndex) -> Option<&EdgeAttributes> {
        self.edge_lookup
            .get(&(source, target))
            .map(|edge_idx| &self.edges[edge_idx.index()].attrs)
    }

    pub fn print_info(&self) {
        info!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.edges.len()
        );
    }
}

/// Macro to create a edge from source to target with attributes
///
/// edge!(0 , 1, attrs) Returns edge in both directions
///
/// edge!(0 => 1, attrs) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $attrs:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $attrs)
    };
    ($source:expr , $target:expr, $attrs:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $attrs),
            $crate::graph::Edge::new($target.into(), $source.into(), $attrs),
        ]
    };
}

/// Macro to create edge attributes without layover
/// attrs!(distance, time, cost)
#[macro_export]
macro_rules! attrs {
    ($distance:expr, $time:expr, $cost:expr) => {
        $crate::graph::EdgeAttributes::new($distance, $time, $cost, 0.0)
    };
    ($distance:expr, $time:expr, $cost:expr, $layover:expr) => {
        $crate::graph::EdgeAttributes::new($distance, $time, $cost, $layover)
    };
}
