use crate::VertexType;
use ahash::AHashMap as HashMap;
use petgraph::stable_graph::NodeIndex;

/// Looks up vertices by type, namespace, and name.
///
/// The index has no locking of its own; it is only accessed through the graph that owns it.
#[derive(Debug, Default)]
pub(crate) struct VertexIndex {
    by_type: HashMap<VertexType, HashMap<String, HashMap<String, NodeIndex>>>,
}

// === impl VertexIndex ===

impl VertexIndex {
    pub(crate) fn get(
        &self,
        vertex_type: VertexType,
        namespace: &str,
        name: &str,
    ) -> Option<NodeIndex> {
        self.by_type
            .get(&vertex_type)?
            .get(namespace)?
            .get(name)
            .copied()
    }

    pub(crate) fn insert(
        &mut self,
        vertex_type: VertexType,
        namespace: &str,
        name: &str,
        id: NodeIndex,
    ) -> Option<NodeIndex> {
        self.by_type
            .entry(vertex_type)
            .or_default()
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string(), id)
    }

    /// Removes a vertex, dropping its namespace and type buckets once they are empty.
    pub(crate) fn remove(
        &mut self,
        vertex_type: VertexType,
        namespace: &str,
        name: &str,
    ) -> Option<NodeIndex> {
        let namespaces = self.by_type.get_mut(&vertex_type)?;
        let names = namespaces.get_mut(namespace)?;
        let id = names.remove(name);
        if names.is_empty() {
            namespaces.remove(namespace);
        }
        if namespaces.is_empty() {
            self.by_type.remove(&vertex_type);
        }
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.by_type
            .values()
            .flat_map(|namespaces| namespaces.values())
            .map(|names| names.len())
            .sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// The number of vertices of each type that currently has any.
    pub(crate) fn counts_by_type(&self) -> impl Iterator<Item = (VertexType, usize)> + '_ {
        self.by_type.iter().map(|(vertex_type, namespaces)| {
            let count = namespaces.values().map(|names| names.len()).sum();
            (*vertex_type, count)
        })
    }

    /// The number of namespace buckets held for a vertex type.
    #[cfg(test)]
    pub(crate) fn namespace_buckets(&self, vertex_type: VertexType) -> usize {
        self.by_type.get(&vertex_type).map_or(0, |namespaces| namespaces.len())
    }
}
