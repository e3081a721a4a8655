//! The graph store.
//!
//! Mutations are exposed only within the crate; they are driven by the per-resource
//! `kubert::index` implementations, each of which holds the write lock for a whole watch event.
//! Reads happen through [`Graph::has_path_from`] under the read lock.

use crate::{index::VertexIndex, Vertex, VertexType};
use parking_lot::RwLock;
use petgraph::{
    stable_graph::{NodeIndex, StableDiGraph},
    visit::Dfs,
    Direction,
};
use std::sync::Arc;

pub type SharedGraph = Arc<RwLock<Graph>>;

/// Holds the relationships between objects in the garden cluster.
///
/// The vertex index and the graph are always updated together: every vertex in the graph is
/// indexed, and every indexed vertex is in the graph.
#[derive(Debug, Default)]
pub struct Graph {
    graph: StableDiGraph<Vertex, ()>,
    vertices: VertexIndex,
}

// === impl Graph ===

impl Graph {
    pub fn shared() -> SharedGraph {
        Arc::new(RwLock::new(Self::default()))
    }

    /// Returns true if the `to` object can be reached from the `from` object by following one or
    /// more edges.
    ///
    /// Unknown objects are never reachable and never reach anything.
    pub fn has_path_from(
        &self,
        from_type: VertexType,
        from_namespace: &str,
        from_name: &str,
        to_type: VertexType,
        to_namespace: &str,
        to_name: &str,
    ) -> bool {
        let from = match self.vertices.get(from_type, from_namespace, from_name) {
            Some(id) => id,
            None => return false,
        };
        let to = match self.vertices.get(to_type, to_namespace, to_name) {
            Some(id) => id,
            None => return false,
        };

        // Seed the traversal with the source's successors so that a vertex only reaches itself
        // through a cycle.
        let mut dfs = Dfs::empty(&self.graph);
        dfs.stack
            .extend(self.graph.neighbors_directed(from, Direction::Outgoing));
        while let Some(id) = dfs.next(&self.graph) {
            if id == to {
                return true;
            }
        }
        false
    }

    pub fn has_vertex(&self, vertex_type: VertexType, namespace: &str, name: &str) -> bool {
        self.vertices.get(vertex_type, namespace, name).is_some()
    }

    pub fn vertex(&self, vertex_type: VertexType, namespace: &str, name: &str) -> Option<&Vertex> {
        let id = self.vertices.get(vertex_type, namespace, name)?;
        self.graph.node_weight(id)
    }

    /// Returns true if there is an edge directly from one object to another.
    pub fn has_edge(
        &self,
        (from_type, from_namespace, from_name): (VertexType, &str, &str),
        (to_type, to_namespace, to_name): (VertexType, &str, &str),
    ) -> bool {
        match (
            self.vertices.get(from_type, from_namespace, from_name),
            self.vertices.get(to_type, to_namespace, to_name),
        ) {
            (Some(from), Some(to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// Iterates over all vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.graph.node_indices().map(move |id| &self.graph[id])
    }

    pub fn vertex_count(&self) -> usize {
        debug_assert_eq!(self.vertices.len(), self.graph.node_count());
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of vertices of each type, omitting types without vertices.
    pub fn vertex_counts_by_type(&self) -> impl Iterator<Item = (VertexType, usize)> + '_ {
        self.vertices.counts_by_type()
    }

    pub(crate) fn get_or_create_vertex(
        &mut self,
        vertex_type: VertexType,
        namespace: &str,
        name: &str,
    ) -> NodeIndex {
        if let Some(id) = self.vertices.get(vertex_type, namespace, name) {
            return id;
        }

        let id = self.graph.add_node(Vertex::new(vertex_type, namespace, name));
        self.graph[id].id = id;
        self.vertices.insert(vertex_type, namespace, name, id);
        tracing::trace!(vertex = %self.graph[id], "Created vertex");
        id
    }

    /// Adds an edge unless it already exists.
    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if self.graph.contains_edge(from, to) {
            return;
        }
        tracing::trace!(from = %self.graph[from], to = %self.graph[to], "Adding edge");
        self.graph.add_edge(from, to, ());
    }

    /// Removes an object's vertex along with every neighbor that was only connected through it.
    ///
    /// A successor is removed once it has no incoming edges left and a predecessor once it has no
    /// outgoing edges left; removal continues from each removed neighbor in the same way.
    ///
    /// A removed neighbor loses the edges its own updater added. When the last shoot using a
    /// SecretBinding is deleted, the binding goes too, and a shoot that later names the same
    /// binding does not reach the binding's secret until the SecretBinding is applied again.
    pub(crate) fn delete_vertex(&mut self, vertex_type: VertexType, namespace: &str, name: &str) {
        let id = match self.vertices.get(vertex_type, namespace, name) {
            Some(id) => id,
            None => return,
        };

        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            // A vertex reached twice, e.g. through a cycle, has already been removed.
            if !self.graph.contains_node(id) {
                continue;
            }

            let successors = self
                .graph
                .neighbors_directed(id, Direction::Outgoing)
                .collect::<Vec<_>>();
            let predecessors = self
                .graph
                .neighbors_directed(id, Direction::Incoming)
                .collect::<Vec<_>>();
            self.remove_vertex(id);

            pending.extend(
                successors
                    .into_iter()
                    .filter(|&n| !self.has_edges(n, Direction::Incoming)),
            );
            pending.extend(
                predecessors
                    .into_iter()
                    .filter(|&n| !self.has_edges(n, Direction::Outgoing)),
            );
        }
    }

    /// Removes all edges from objects of `from_type` into the given object.
    ///
    /// Sources left without any edges are removed, as is the target if it ends up isolated.
    pub(crate) fn delete_all_incoming_edges(
        &mut self,
        from_type: VertexType,
        to_type: VertexType,
        to_namespace: &str,
        to_name: &str,
    ) {
        let to = match self.vertices.get(to_type, to_namespace, to_name) {
            Some(id) => id,
            None => return,
        };

        let sources = self
            .graph
            .neighbors_directed(to, Direction::Incoming)
            .filter(|&n| self.graph[n].vertex_type == from_type)
            .collect::<Vec<_>>();
        for from in sources {
            self.remove_edge(from, to);
            self.remove_if_isolated(from);
        }
        self.remove_if_isolated(to);
    }

    /// Removes all edges from the given object into objects of `to_type`.
    ///
    /// Targets left without any edges are removed, as is the source if it ends up isolated.
    pub(crate) fn delete_all_outgoing_edges(
        &mut self,
        from_type: VertexType,
        from_namespace: &str,
        from_name: &str,
        to_type: VertexType,
    ) {
        let from = match self.vertices.get(from_type, from_namespace, from_name) {
            Some(id) => id,
            None => return,
        };

        let targets = self
            .graph
            .neighbors_directed(from, Direction::Outgoing)
            .filter(|&n| self.graph[n].vertex_type == to_type)
            .collect::<Vec<_>>();
        for to in targets {
            self.remove_edge(from, to);
            self.remove_if_isolated(to);
        }
        self.remove_if_isolated(from);
    }

    fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if let Some(edge) = self.graph.find_edge(from, to) {
            tracing::trace!(from = %self.graph[from], to = %self.graph[to], "Removing edge");
            self.graph.remove_edge(edge);
        }
    }

    /// Removes a vertex and all of its edges, dropping it from the index.
    fn remove_vertex(&mut self, id: NodeIndex) {
        if let Some(vertex) = self.graph.remove_node(id) {
            self.vertices
                .remove(vertex.vertex_type, &vertex.namespace, &vertex.name);
            tracing::debug!(%vertex, "Removed vertex");
        }
    }

    fn remove_if_isolated(&mut self, id: NodeIndex) {
        if !self.has_edges(id, Direction::Incoming) && !self.has_edges(id, Direction::Outgoing) {
            self.remove_vertex(id);
        }
    }

    fn has_edges(&self, id: NodeIndex, dir: Direction) -> bool {
        self.graph.neighbors_directed(id, dir).next().is_some()
    }
}
