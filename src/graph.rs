use std::fmt::Write;

use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CompassPrimary, Coordinate};
use crate::grid::Grid;
use crate::units::{EdgesCount, NodesCount};
use crate::utils::{self, FnvHashMap};

/// Undirected graph of a maze's passages: a node per open cell, an edge per pair of
/// adjacent open cells.
#[derive(Debug, Clone)]
pub struct PassageGraph {
    graph: UnGraph<Coordinate, ()>,
    nodes: FnvHashMap<Coordinate, NodeIndex>,
}

impl PassageGraph {
    pub fn new(grid: &Grid) -> PassageGraph {

        let (NodesCount(nodes_hint), EdgesCount(edges_hint)) = grid.graph_size();
        let open_count = grid.open_count();
        let mut graph = UnGraph::with_capacity(open_count.min(nodes_hint), open_count.min(edges_hint));
        let mut nodes = utils::fnv_hashmap(open_count);

        for coord in grid.iter_open() {
            nodes.insert(coord, graph.add_node(coord));
        }

        // Looking only South and East visits each adjacent pair once.
        for coord in grid.iter_open() {
            for dir in &[CompassPrimary::South, CompassPrimary::East] {
                if let Some(neighbour) = grid.neighbour_at_direction(coord, *dir) {
                    if let (Some(&a), Some(&b)) = (nodes.get(&coord), nodes.get(&neighbour)) {
                        let _ = graph.add_edge(a, b, ());
                    }
                }
            }
        }

        PassageGraph { graph, nodes }
    }

    #[inline]
    pub fn nodes_count(&self) -> NodesCount {
        NodesCount(self.graph.node_count())
    }

    #[inline]
    pub fn edges_count(&self) -> EdgesCount {
        EdgesCount(self.graph.edge_count())
    }

    #[inline]
    pub fn graph(&self) -> &UnGraph<Coordinate, ()> {
        &self.graph
    }

    pub fn node_index(&self, coord: Coordinate) -> Option<NodeIndex> {
        self.nodes.get(&coord).cloned()
    }

    pub fn connected_components(&self) -> usize {
        algo::connected_components(&self.graph)
    }

    pub fn has_cycle(&self) -> bool {
        algo::is_cyclic_undirected(&self.graph)
    }

    /// Connected with exactly one fewer passage than cells: a spanning tree.
    pub fn is_spanning_tree(&self) -> bool {
        let NodesCount(nodes) = self.nodes_count();
        let EdgesCount(edges) = self.edges_count();
        nodes > 0 && edges == nodes - 1 && self.connected_components() == 1
    }

    /// Iterate the passages as pairs of coordinates.
    pub fn passages<'a>(&'a self) -> impl Iterator<Item = (Coordinate, Coordinate)> + 'a {
        self.graph
            .raw_edges()
            .iter()
            .map(move |edge| (self.graph[edge.source()], self.graph[edge.target()]))
    }
}

/// Is every open cell joined to every other by exactly one path?
pub fn is_perfect_maze(grid: &Grid) -> bool {
    PassageGraph::new(grid).is_spanning_tree()
}

/// Serialize a maze's passages. Line 1: `n m`, the number of grid cells and passages.
/// Every following line is a passage between two cells as 1-based row-major cell indices.
pub fn edge_list_text(grid: &Grid) -> String {
    let passage_graph = PassageGraph::new(grid);
    let EdgesCount(edges_count) = passage_graph.edges_count();

    let mut graph_data = String::new();
    let _ = writeln!(graph_data, "{} {}", grid.cells_count(), edges_count);

    for (src, dst) in passage_graph.passages() {
        if let (Some(index_a), Some(index_b)) = (grid.coordinate_to_index(src),
                                                 grid.coordinate_to_index(dst)) {
            let _ = writeln!(graph_data, "{} {}", index_a + 1, index_b + 1);
        }
    }

    graph_data
}
