//! The multigraph derived from a board and one railway's stations.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use r18hex::Hex;
use r18map::Board;
use r18tile::{Settlement, SettlementSlot};

/// A node of the route graph: a settlement slot on a tile, or the
/// junction at the shared edge between two adjacent hexes.
///
/// Junctions split a "through" step into two half-edges, which is what
/// makes U-turn prevention and per-hex edge bookkeeping possible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    City { hex: Hex, slot: SettlementSlot },
    Junction { hexes: (Hex, Hex) },
}

impl Node {
    pub fn city(hex: Hex, slot: SettlementSlot) -> Node {
        Node::City { hex, slot }
    }

    /// Creates a junction node; the hex pair is stored in a canonical
    /// order so that the two sides always name the same node.
    pub fn junction(a: Hex, b: Hex) -> Node {
        if a <= b {
            Node::Junction { hexes: (a, b) }
        } else {
            Node::Junction { hexes: (b, a) }
        }
    }

    pub fn is_city(&self) -> bool {
        matches!(self, Node::City { .. })
    }

    pub fn is_junction(&self) -> bool {
        matches!(self, Node::Junction { .. })
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Node::City { hex, slot } => write!(f, "{}.{}", hex, slot),
            Node::Junction { hexes } => {
                write!(f, "{}-{}", hexes.0, hexes.1)
            }
        }
    }
}

/// An edge of the route graph: an unordered pair of nodes, plus the hex
/// whose track the edge physically traverses. Distinct hexes can carry
/// separate edges between the same pair of nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    nodes: (Node, Node),
    hex: Hex,
}

impl Edge {
    pub fn new(a: Node, b: Node, hex: Hex) -> Edge {
        let nodes = if a <= b { (a, b) } else { (b, a) };
        Edge { nodes, hex }
    }

    pub fn nodes(&self) -> (Node, Node) {
        self.nodes
    }

    /// Returns the hex whose track this edge traverses.
    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// Returns the endpoint that is not `node`.
    pub fn other(&self, node: Node) -> Node {
        if self.nodes.0 == node {
            self.nodes.1
        } else {
            self.nodes.0
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.nodes.0, self.nodes.1)
    }
}

/// The track network reachable from one railway's stations.
///
/// This is a plain owned structure, rebuilt from scratch whenever the
/// board or the railway's stations change.
#[derive(Clone, Debug, Default)]
pub struct RouteGraph {
    nodes: BTreeSet<Node>,
    edges: BTreeSet<Edge>,
    cities: BTreeSet<Node>,
    homes: Vec<Node>,
    incident: BTreeMap<Node, Vec<Edge>>,
}

impl RouteGraph {
    /// Derives the graph for one railway by breadth-first expansion from
    /// its home stations.
    ///
    /// A full city that the railway has no station in is kept as a node
    /// (routes may end there) but gets no outgoing edges, which encodes
    /// the blocking rule. Hexes beyond the map boundary are skipped.
    pub fn for_railway(board: &Board, railway_id: &str) -> RouteGraph {
        let mut graph = RouteGraph::default();
        for (hex, tile) in board.iter() {
            if let Some(slot) = tile.station_slot(railway_id) {
                graph.homes.push(Node::city(hex, slot));
            }
        }
        let mut queue: VecDeque<Node> = graph.homes.iter().copied().collect();
        while let Some(node) = queue.pop_front() {
            if !graph.nodes.insert(node) {
                continue;
            }
            match node {
                Node::City { hex, slot } => {
                    graph.expand_city(board, railway_id, hex, slot, &mut queue)
                }
                Node::Junction { hexes } => {
                    graph.expand_junction(board, hexes, &mut queue)
                }
            }
        }
        graph.incident = graph
            .nodes
            .iter()
            .map(|&node| {
                let edges: Vec<Edge> = graph
                    .edges
                    .iter()
                    .filter(|edge| {
                        edge.nodes().0 == node || edge.nodes().1 == node
                    })
                    .copied()
                    .collect();
                (node, edges)
            })
            .collect();
        debug!(
            "Graph for {}: {} nodes, {} edges, {} cities, {} homes",
            railway_id,
            graph.nodes.len(),
            graph.edges.len(),
            graph.cities.len(),
            graph.homes.len()
        );
        graph
    }

    fn expand_city(
        &mut self,
        board: &Board,
        railway_id: &str,
        hex: Hex,
        slot: SettlementSlot,
        queue: &mut VecDeque<Node>,
    ) {
        let node = Node::city(hex, slot);
        self.cities.insert(node);
        let segment = match board.segment_at(hex, slot) {
            Ok(segment) => segment,
            Err(_) => return,
        };
        if let Some(settlement) = &segment.settlement {
            if settlement.is_blocking_for(railway_id) {
                // A terminus only: no outgoing edges.
                return;
            }
        }
        for &dir in &segment.tracks {
            let junction = Node::junction(hex, hex.neighbour(dir));
            self.edges.insert(Edge::new(node, junction, hex));
            queue.push_back(junction);
        }
    }

    fn expand_junction(
        &mut self,
        board: &Board,
        hexes: (Hex, Hex),
        queue: &mut VecDeque<Node>,
    ) {
        let node = Node::junction(hexes.0, hexes.1);
        for (base, other) in [(hexes.0, hexes.1), (hexes.1, hexes.0)] {
            let tile = match board.tile_at(base) {
                Some(tile) => tile,
                // The junction sits on the map boundary.
                None => continue,
            };
            let entry = match base.direction_towards(other) {
                Ok(dir) => dir,
                Err(_) => continue,
            };
            for segment in tile.segments_with_exit(entry) {
                if let Some(slot) = segment.slot {
                    let city = Node::city(base, slot);
                    self.edges.insert(Edge::new(node, city, base));
                    queue.push_back(city);
                } else {
                    // A pass-through curve: continue to the junctions on
                    // its other exits.
                    for &dir in segment.tracks.iter().filter(|&&d| d != entry)
                    {
                        let next =
                            Node::junction(base, base.neighbour(dir));
                        self.edges.insert(Edge::new(node, next, base));
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    pub fn nodes(&self) -> &BTreeSet<Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// The settlement nodes of the graph.
    pub fn cities(&self) -> &BTreeSet<Node> {
        &self.cities
    }

    /// The nodes holding one of the railway's stations.
    pub fn homes(&self) -> &[Node] {
        self.homes.as_slice()
    }

    /// The edges incident to a node.
    pub fn incident_to(&self, node: Node) -> &[Edge] {
        self.incident
            .get(&node)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the settlement a city node refers to, if it still exists
    /// on the board.
    pub fn settlement<'a>(
        &self,
        board: &'a Board,
        node: Node,
    ) -> Option<&'a Settlement> {
        match node {
            Node::City { hex, slot } => board.settlement_at(hex, slot).ok(),
            Node::Junction { .. } => None,
        }
    }
}
