//! Routes: settlement-to-settlement walks through the route graph.

use std::collections::HashSet;

use crate::graph::{Edge, Node};

/// A walk through the route graph, alternating nodes and edges and
/// starting at a settlement node.
///
/// Routes are value types: extending a route clones it, so the search
/// frontier can hold many partial walks that share a prefix.
///
/// Two routes are equal up to reversal: a walk and its reverse describe
/// the same train run, so equality and hashing use the canonical (lesser
/// of forward and reverse) form.
#[derive(Clone, Debug)]
pub struct Route {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Route {
    pub fn start_at(node: Node) -> Route {
        Route {
            nodes: vec![node],
            edges: vec![],
        }
    }

    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    pub fn first(&self) -> Node {
        self.nodes[0]
    }

    pub fn last(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn last_edge(&self) -> Option<Edge> {
        self.edges.last().copied()
    }

    /// The number of settlements this route stops at.
    pub fn num_cities(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_city()).count()
    }

    /// The settlement nodes along the route, in walk order.
    pub fn cities(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied().filter(|node| node.is_city())
    }

    pub fn contains_node(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns a new route extended by one edge and its far node.
    pub fn add_stop(&self, edge: Edge, node: Node) -> Route {
        let mut extended = self.clone();
        extended.edges.push(edge);
        extended.nodes.push(node);
        extended
    }

    /// Returns the same walk in the opposite direction.
    pub fn reversed(&self) -> Route {
        let mut reversed = self.clone();
        reversed.nodes.reverse();
        reversed.edges.reverse();
        reversed
    }

    /// Joins two walks that share a first node into a single route that
    /// passes through that node.
    pub fn merge(a: &Route, b: &Route) -> Route {
        if a.first() != b.first() {
            panic!(
                "routes starting at {} and {} cannot be merged",
                a.first(),
                b.first()
            );
        }
        let mut merged = a.reversed();
        merged.nodes.extend(b.nodes[1..].iter().copied());
        merged.edges.extend(b.edges.iter().copied());
        merged
    }

    /// Returns whether the proposed next edge would double back through
    /// the hex the walk just traversed; this is the forbidden U-turn at
    /// a junction node.
    pub fn turns_back(&self, edge: Edge) -> bool {
        self.last().is_junction()
            && self.last_edge().map(|last| last.hex() == edge.hex())
                == Some(true)
    }

    /// Returns whether any node or edge occurs twice.
    pub fn has_subtour(&self) -> bool {
        let mut seen_nodes = HashSet::new();
        if !self.nodes.iter().all(|node| seen_nodes.insert(node)) {
            return true;
        }
        let mut seen_edges = HashSet::new();
        !self.edges.iter().all(|edge| seen_edges.insert(edge))
    }

    /// Returns whether the two routes use a common edge.
    pub fn shares_edge(&self, other: &Route) -> bool {
        self.edges.iter().any(|edge| other.edges.contains(edge))
    }

    fn canonical(&self) -> (Vec<Node>, Vec<Edge>) {
        let forward = (self.nodes.clone(), self.edges.clone());
        let reversed = self.reversed();
        let backward = (reversed.nodes, reversed.edges);
        forward.min(backward)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Route) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Route {}

impl std::hash::Hash for Route {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "|")?;
        for (ix, node) in self.nodes.iter().enumerate() {
            if ix > 0 {
                write!(f, " -> {} -> ", self.edges[ix - 1])?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "|")
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::graph::{Edge, Node};
    use r18hex::Hex;
    use r18tile::SettlementSlot;

    fn hex(coord: &str) -> Hex {
        coord.parse().unwrap()
    }

    fn city(coord: &str) -> Node {
        Node::city(hex(coord), SettlementSlot::C)
    }

    /// A walk C4 -> C6 through the junction between them.
    fn two_city_route() -> Route {
        let a = city("C4");
        let j = Node::junction(hex("C4"), hex("C6"));
        let b = city("C6");
        Route::start_at(a)
            .add_stop(Edge::new(a, j, hex("C4")), j)
            .add_stop(Edge::new(j, b, hex("C6")), b)
    }

    #[test]
    /// A route and its reverse are the same route.
    fn equal_up_to_reversal() {
        let route = two_city_route();
        let reversed = route.reversed();
        assert_eq!(route, reversed);
        assert_eq!(2, route.num_cities());
        assert_eq!(2, reversed.num_cities());
        assert_eq!(route.first(), reversed.last());

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(route);
        assert!(!set.insert(reversed));
    }

    #[test]
    /// Merging two walks rooted at the same node forms a through route;
    /// a repeated node or edge is a subtour.
    fn merge_and_subtours() {
        let a = city("C4");
        let j_north = Node::junction(hex("C4"), hex("C2"));
        let north = city("C2");
        let walk_north = Route::start_at(a)
            .add_stop(Edge::new(a, j_north, hex("C4")), j_north)
            .add_stop(Edge::new(j_north, north, hex("C2")), north);
        let walk_south = two_city_route();

        let through = Route::merge(&walk_north, &walk_south);
        assert_eq!(3, through.num_cities());
        assert_eq!(north, through.first());
        assert_eq!(city("C6"), through.last());
        assert!(!through.has_subtour());

        let doubled = Route::merge(&walk_south, &walk_south);
        assert!(doubled.has_subtour());
    }

    #[test]
    /// The U-turn rule: at a junction, the walk may not continue into
    /// the hex it arrived through.
    fn uturn_detection() {
        let a = city("C4");
        let j = Node::junction(hex("C4"), hex("C6"));
        let arrive = Edge::new(a, j, hex("C4"));
        let partial = Route::start_at(a).add_stop(arrive, j);
        // Another edge through C4 doubles back; the edge onwards through
        // C6 does not.
        let back = Edge::new(j, city("C4"), hex("C4"));
        let onwards = Edge::new(j, city("C6"), hex("C6"));
        assert!(partial.turns_back(back));
        assert!(!partial.turns_back(onwards));
    }
}
