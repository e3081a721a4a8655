use crate::SharedGraph;
use prometheus_client::{
    collector::Collector,
    encoding::{DescriptorEncoder, EncodeMetric},
    metrics::{gauge::ConstGauge, MetricType},
    registry::Registry,
};

#[derive(Debug)]
struct Instrumented(SharedGraph);

/// Registers gauges describing the size of the graph.
pub fn register(reg: &mut Registry, graph: SharedGraph) {
    reg.register_collector(Box::new(Instrumented(graph)));
}

impl Collector for Instrumented {
    fn encode(&self, mut encoder: DescriptorEncoder<'_>) -> Result<(), std::fmt::Error> {
        let graph = self.0.read();

        let mut vertices_encoder = encoder.encode_descriptor(
            "vertices",
            "The number of vertices in the graph",
            None,
            MetricType::Gauge,
        )?;
        for (vertex_type, count) in graph.vertex_counts_by_type() {
            let labels = [("type", vertex_type.kind())];
            let vertices = ConstGauge::new(count as i64);
            let vertices_encoder = vertices_encoder.encode_family(&labels)?;
            vertices.encode(vertices_encoder)?;
        }

        let edges_encoder = encoder.encode_descriptor(
            "edges",
            "The number of edges in the graph",
            None,
            MetricType::Gauge,
        )?;
        ConstGauge::new(graph.edge_count() as i64).encode(edges_encoder)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, VertexType};

    #[test]
    fn encodes_graph_size() {
        let graph = Graph::shared();
        {
            let mut graph = graph.write();
            let shoot = graph.get_or_create_vertex(VertexType::Shoot, "garden-dev", "shoot-0");
            let seed = graph.get_or_create_vertex(VertexType::Seed, "", "seed-0");
            graph.add_edge(shoot, seed);
        }

        let mut registry = Registry::default();
        register(registry.sub_registry_with_prefix("graph"), graph);
        let mut text = String::new();
        prometheus_client::encoding::text::encode(&mut text, &registry).expect("encodes");

        assert!(text.contains("graph_vertices{type=\"Seed\"} 1"), "{text}");
        assert!(text.contains("graph_vertices{type=\"Shoot\"} 1"), "{text}");
        assert!(text.contains("graph_edges 1"), "{text}");
    }
}
