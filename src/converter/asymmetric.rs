//! 非对称转换
//!
//! 把每个顶点 `v` 拆分为 tail 与 head 两个顶点，并以零代价弧 `tail(v) -> head(v)` 相连。
//! 原图中的边 `(u, v)` 变为 `head(u) -> tail(v)`。设原图最大顶点 ID 为 `B`：
//!
//! - `tail(v) = B + 1 + v`，取值范围 `[B + 1, 2B + 1]`
//! - `head(v) = 2(B + 1) + v`，取值范围 `[2B + 2, 3B + 2]`

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{AttrValue, EdgeFunctionName, VertexFunctionName, VertexId, VertexList};
use tracing::debug;

/// 最大顶点 ID
pub fn biggest_vertex_id(graph: &Graph) -> Result<VertexId> {
    graph.biggest_vertex_id().ok_or(Error::EmptyGraph)
}

/// 可拆分的最大原始顶点 ID：保证 `3 * (B + 1)` 不溢出
pub const MAX_SPLIT_BIGGEST: VertexId = VertexId::MAX / 3 - 1;

/// 原始顶点对应的 head
pub fn split_head(biggest_vertex: VertexId, original_vertex: VertexId) -> VertexId {
    2 * (biggest_vertex + 1) + original_vertex
}

/// 原始顶点对应的 tail
pub fn split_tail(biggest_vertex: VertexId, original_vertex: VertexId) -> VertexId {
    biggest_vertex + 1 + original_vertex
}

pub fn is_vertex_split_tail(biggest_vertex: VertexId, vertex: VertexId) -> bool {
    biggest_vertex + 1 <= vertex && vertex < 2 * (biggest_vertex + 1)
}

pub fn is_vertex_split_head(biggest_vertex: VertexId, vertex: VertexId) -> bool {
    2 * (biggest_vertex + 1) <= vertex && vertex < 3 * (biggest_vertex + 1)
}

/// head 分得的奖励：向上取整
pub fn head_prize(prize: i64) -> i64 {
    prize - tail_prize(prize)
}

/// tail 分得的奖励：向下取整
pub fn tail_prize(prize: i64) -> i64 {
    prize.div_euclid(2)
}

/// 拆分顶点对应的原始顶点
pub fn get_original_from_split_vertex(
    biggest_vertex: VertexId,
    split_vertex: VertexId,
) -> Result<VertexId> {
    if is_vertex_split_head(biggest_vertex, split_vertex) {
        Ok(split_vertex - 2 * (biggest_vertex + 1))
    } else if is_vertex_split_tail(biggest_vertex, split_vertex) {
        Ok(split_vertex - biggest_vertex - 1)
    } else {
        Err(Error::InvalidSplitVertex {
            vertex: split_vertex,
            biggest: biggest_vertex,
        })
    }
}

/// 把非对称图中的路径映射回原图
///
/// tail 总是输出其原始顶点；head 仅在与前一个拆分顶点的原始顶点不同时输出，
/// 因此内部的 `tail(v) -> head(v)` 弧被合并，真实的重复访问得以保留。
pub fn get_original_path_from_split_path(
    biggest_vertex: VertexId,
    split_path: &[VertexId],
) -> Result<VertexList> {
    let mut original_path = Vec::with_capacity(split_path.len());
    let mut previous: Option<VertexId> = None;
    for &split_vertex in split_path {
        let original = get_original_from_split_vertex(biggest_vertex, split_vertex)?;
        if is_vertex_split_tail(biggest_vertex, split_vertex) || previous != Some(original) {
            original_path.push(original);
        }
        previous = Some(original);
    }
    Ok(original_path)
}

/// 弧 `(tail, head)` 是否为某个原始顶点内部的零代价弧
pub fn is_split_vertex_pair(biggest_vertex: VertexId, tail: VertexId, head: VertexId) -> bool {
    head - tail == biggest_vertex + 1
        && is_vertex_split_head(biggest_vertex, head)
        && is_vertex_split_tail(biggest_vertex, tail)
}

/// 非对称转换器
#[derive(Debug, Clone)]
pub struct AsymmetricConverter {
    prize_attr: String,
    cost_attr: String,
}

impl Default for AsymmetricConverter {
    fn default() -> Self {
        Self {
            prize_attr: VertexFunctionName::Prize.as_str().to_string(),
            cost_attr: EdgeFunctionName::Cost.as_str().to_string(),
        }
    }
}

impl AsymmetricConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置奖励属性名
    pub fn with_prize_attr(mut self, name: impl Into<String>) -> Self {
        self.prize_attr = name.into();
        self
    }

    /// 设置代价属性名
    pub fn with_cost_attr(mut self, name: impl Into<String>) -> Self {
        self.cost_attr = name.into();
        self
    }

    /// 从有向图构造非对称有向图
    pub fn from_directed(&self, graph: &Graph) -> Result<Graph> {
        if !graph.is_directed() {
            return Err(Error::InvalidGraphKind(
                "from_directed 需要有向图".to_string(),
            ));
        }
        let biggest = biggest_vertex_id(graph)?;
        if let Some(negative) = graph.vertices().map(|v| v.id()).find(|&id| id < 0) {
            return Err(Error::NegativeVertex(negative));
        }
        if biggest > MAX_SPLIT_BIGGEST {
            return Err(Error::InvalidInput(format!(
                "最大顶点 ID {biggest} 超过 {MAX_SPLIT_BIGGEST}, head ID 会溢出"
            )));
        }

        let mut asymmetric = Graph::directed().with_meta(graph.meta().clone());
        let mut internal_arcs = Vec::with_capacity(graph.vertex_count());

        for vertex in graph.vertices() {
            let head = split_head(biggest, vertex.id());
            let tail = split_tail(biggest, vertex.id());
            let (tail_value, head_value) = self.split_prize(vertex.property(&self.prize_attr))?;

            let mut head_vertex = vertex.relabeled(head);
            head_vertex.set_property(self.prize_attr.as_str(), head_value);
            let mut tail_vertex = vertex.relabeled(tail);
            tail_vertex.set_property(self.prize_attr.as_str(), tail_value);

            asymmetric.add_vertex(head_vertex);
            asymmetric.add_vertex(tail_vertex);

            let mut arc = Edge::new(tail, head);
            arc.set_property(self.cost_attr.as_str(), AttrValue::Int(0));
            internal_arcs.push(arc);
        }

        for arc in internal_arcs {
            asymmetric.add_edge(arc)?;
        }

        for edge in graph.edges() {
            let u_head = split_head(biggest, edge.src());
            let v_tail = split_tail(biggest, edge.dst());
            asymmetric.add_edge(Edge::with_properties(
                u_head,
                v_tail,
                edge.properties().clone(),
            ))?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            split_vertices = asymmetric.vertex_count(),
            split_edges = asymmetric.edge_count(),
            biggest,
            "asymmetric graph built from directed graph"
        );
        Ok(asymmetric)
    }

    /// 从无向图构造：先把每条无向边变为两条相反的有向边
    pub fn from_undirected(&self, graph: &Graph) -> Result<Graph> {
        if graph.is_directed() {
            return Err(Error::InvalidGraphKind(
                "from_undirected 需要无向图".to_string(),
            ));
        }
        self.from_directed(&graph.to_directed())
    }

    /// 拆分奖励为 (tail, head)；缺失视为 0
    fn split_prize(&self, prize: Option<&AttrValue>) -> Result<(AttrValue, AttrValue)> {
        match prize {
            None => Ok((AttrValue::Int(0), AttrValue::Int(0))),
            Some(AttrValue::Int(p)) => Ok((
                AttrValue::Int(tail_prize(*p)),
                AttrValue::Int(head_prize(*p)),
            )),
            Some(AttrValue::Float(p)) => {
                let tail = (p / 2.0).floor();
                Ok((AttrValue::Float(tail), AttrValue::Float(p - tail)))
            }
            Some(other) => Err(Error::InvalidAttribute {
                name: self.prize_attr.clone(),
                reason: format!("奖励必须是数值, 实际为 {}", other.type_name()),
            }),
        }
    }
}

/// 从有向图构造非对称有向图（默认属性名）
pub fn asymmetric_from_directed(graph: &Graph) -> Result<Graph> {
    AsymmetricConverter::default().from_directed(graph)
}

/// 从无向图构造非对称有向图（默认属性名）
pub fn asymmetric_from_undirected(graph: &Graph) -> Result<Graph> {
    AsymmetricConverter::default().from_undirected(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_strongly_connected;
    use crate::graph::Vertex;
    use crate::types::{GraphKind, GraphMeta};

    const ORIGINAL: [VertexId; 3] = [0, 1, 2];
    const TAILS: [VertexId; 3] = [3, 4, 5];
    const HEADS: [VertexId; 3] = [6, 7, 8];

    fn complete_with_unit_weights(n: usize, kind: GraphKind) -> Graph {
        let mut graph = Graph::complete_graph(n, kind).with_meta(GraphMeta::named("complete"));
        graph.set_vertex_attribute("prize", AttrValue::Int(1));
        graph.set_edge_attribute("cost", AttrValue::Int(1));
        graph
    }

    /// 检查非对称图与原图的对应关系
    fn assert_matches_original(original: &Graph, asymmetric: &Graph) {
        let biggest = biggest_vertex_id(original).unwrap();
        for vertex in original.vertices() {
            let head = split_head(biggest, vertex.id());
            let tail = split_tail(biggest, vertex.id());
            assert!(asymmetric.has_vertex(head));
            assert!(asymmetric.has_vertex(tail));
            assert!(asymmetric.has_edge(tail, head));
            assert_eq!(asymmetric.in_degree(head), 1);
            assert_eq!(asymmetric.out_degree(tail), 1);

            let head_data = asymmetric.vertex(head).unwrap();
            let tail_data = asymmetric.vertex(tail).unwrap();
            let keys: Vec<_> = vertex.properties().keys().collect();
            assert_eq!(keys, head_data.properties().keys().collect::<Vec<_>>());
            assert_eq!(keys, tail_data.properties().keys().collect::<Vec<_>>());
            assert_eq!(
                vertex.prize().unwrap(),
                head_data.prize().unwrap() + tail_data.prize().unwrap()
            );
            assert_eq!(asymmetric.edge(tail, head).unwrap().cost(), Some(0.0));
        }

        for edge in original.edges() {
            let head_of_u = split_head(biggest, edge.src());
            let tail_of_v = split_tail(biggest, edge.dst());
            let arc = asymmetric.edge(head_of_u, tail_of_v).unwrap();
            for (key, value) in edge.properties() {
                assert_eq!(arc.property(key), Some(value));
            }
        }
    }

    #[test]
    fn test_asymmetric_from_directed() {
        for n in [3, 5, 10] {
            let graph = complete_with_unit_weights(n, GraphKind::Directed);
            let asymmetric = asymmetric_from_directed(&graph).unwrap();
            assert_matches_original(&graph, &asymmetric);
            assert!(is_strongly_connected(&asymmetric));
            assert_eq!(asymmetric.meta(), graph.meta());
        }
    }

    #[test]
    fn test_asymmetric_from_undirected() {
        for n in [3, 5, 10] {
            let graph = complete_with_unit_weights(n, GraphKind::Undirected);
            let asymmetric = asymmetric_from_undirected(&graph).unwrap();
            assert_matches_original(&graph.to_directed(), &asymmetric);
            assert!(is_strongly_connected(&asymmetric));

            let biggest = biggest_vertex_id(&graph).unwrap();
            let zero_cost_internal = asymmetric
                .edges()
                .filter(|e| is_split_vertex_pair(biggest, e.src(), e.dst()))
                .filter(|e| e.cost() == Some(0.0))
                .count();
            assert_eq!(zero_cost_internal, n);
        }
    }

    #[test]
    fn test_wrong_graph_kind_is_rejected() {
        let undirected = Graph::complete_graph(3, GraphKind::Undirected);
        let directed = Graph::complete_graph(3, GraphKind::Directed);
        assert!(matches!(
            asymmetric_from_directed(&undirected),
            Err(Error::InvalidGraphKind(_))
        ));
        assert!(matches!(
            asymmetric_from_undirected(&directed),
            Err(Error::InvalidGraphKind(_))
        ));
    }

    #[test]
    fn test_empty_and_negative_graphs_are_rejected() {
        assert!(matches!(
            asymmetric_from_directed(&Graph::directed()),
            Err(Error::EmptyGraph)
        ));

        let mut graph = Graph::directed();
        graph.add_vertex(Vertex::new(-1));
        graph.add_vertex(Vertex::new(2));
        assert!(matches!(
            asymmetric_from_directed(&graph),
            Err(Error::NegativeVertex(-1))
        ));
    }

    #[test]
    fn test_oversized_vertex_ids_are_rejected() {
        let mut graph = Graph::directed();
        graph.add_vertex(Vertex::new(0));
        graph.add_vertex(Vertex::new(MAX_SPLIT_BIGGEST + 1));
        assert!(matches!(
            asymmetric_from_directed(&graph),
            Err(Error::InvalidInput(_))
        ));

        let mut largest = Graph::directed();
        largest.add_vertex(Vertex::new(MAX_SPLIT_BIGGEST));
        let asymmetric = asymmetric_from_directed(&largest).unwrap();
        let head = split_head(MAX_SPLIT_BIGGEST, MAX_SPLIT_BIGGEST);
        assert!(asymmetric.has_vertex(head));
        assert!(is_vertex_split_head(MAX_SPLIT_BIGGEST, head));
        assert_eq!(
            get_original_from_split_vertex(MAX_SPLIT_BIGGEST, head).unwrap(),
            MAX_SPLIT_BIGGEST
        );
    }

    #[test]
    fn test_missing_and_float_prizes() {
        let mut graph = Graph::directed();
        graph.add_vertex(Vertex::new(0));
        let mut v = Vertex::new(1);
        v.set_property("prize", AttrValue::Float(5.0));
        graph.add_vertex(v);
        graph.add_edge(Edge::new(0, 1)).unwrap();

        let asymmetric = asymmetric_from_directed(&graph).unwrap();
        assert_eq!(asymmetric.vertex(2).unwrap().prize(), Some(0));
        assert_eq!(asymmetric.vertex(4).unwrap().prize(), Some(0));
        assert_eq!(
            asymmetric.vertex(3).unwrap().property("prize"),
            Some(&AttrValue::Float(2.0))
        );
        assert_eq!(
            asymmetric.vertex(5).unwrap().property("prize"),
            Some(&AttrValue::Float(3.0))
        );
    }

    #[test]
    fn test_custom_attribute_names() {
        let mut graph = Graph::directed();
        let mut v = Vertex::new(0);
        v.set_property("score", AttrValue::Int(9));
        graph.add_vertex(v);

        let asymmetric = AsymmetricConverter::new()
            .with_prize_attr("score")
            .with_cost_attr("weight")
            .from_directed(&graph)
            .unwrap();
        assert_eq!(
            asymmetric.vertex(1).unwrap().property("score"),
            Some(&AttrValue::Int(4))
        );
        assert_eq!(
            asymmetric.vertex(2).unwrap().property("score"),
            Some(&AttrValue::Int(5))
        );
        assert_eq!(
            asymmetric.edge(1, 2).unwrap().property("weight"),
            Some(&AttrValue::Int(0))
        );
    }

    #[test]
    fn test_biggest_vertex_id() {
        let graph = Graph::complete_graph(5, GraphKind::Undirected);
        let biggest = biggest_vertex_id(&graph).unwrap();
        assert_eq!(biggest, 4);
        assert!(graph.vertices().all(|v| v.id() <= biggest));
        assert!(matches!(
            biggest_vertex_id(&Graph::undirected()),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_split_vertex_round_trip() {
        let biggest = 2;
        for i in 0..3 {
            assert_eq!(split_head(biggest, ORIGINAL[i]), HEADS[i]);
            assert_eq!(split_tail(biggest, ORIGINAL[i]), TAILS[i]);
            assert_eq!(
                get_original_from_split_vertex(biggest, HEADS[i]).unwrap(),
                ORIGINAL[i]
            );
            assert_eq!(
                get_original_from_split_vertex(biggest, TAILS[i]).unwrap(),
                ORIGINAL[i]
            );
        }

        let graph = Graph::complete_graph(10, GraphKind::Undirected);
        let biggest = biggest_vertex_id(&graph).unwrap();
        for v in graph.vertex_ids() {
            let head = split_head(biggest, v);
            let tail = split_tail(biggest, v);
            assert_eq!(get_original_from_split_vertex(biggest, head).unwrap(), v);
            assert_eq!(get_original_from_split_vertex(biggest, tail).unwrap(), v);
        }
    }

    #[test]
    fn test_invalid_split_vertex() {
        for vertex in [0, 2, 9, -1] {
            assert!(matches!(
                get_original_from_split_vertex(2, vertex),
                Err(Error::InvalidSplitVertex { .. })
            ));
        }
    }

    #[test]
    fn test_get_original_path_from_split_path() {
        let cases: [(&[VertexId], &[VertexId]); 5] = [
            (&[3, 6, 4, 7, 5, 8], &[0, 1, 2]),
            (&[6, 4, 7, 5], &[0, 1, 2]),
            (&[], &[]),
            (&[8, 3], &[2, 0]),
            (&[5, 8, 3, 6, 5], &[2, 0, 2]),
        ];
        for (split_path, original_path) in cases {
            assert_eq!(
                get_original_path_from_split_path(2, split_path).unwrap(),
                original_path
            );
        }
        assert!(get_original_path_from_split_path(2, &[3, 1]).is_err());
    }

    #[test]
    fn test_split_vertex_classification() {
        let biggest = 2;
        for i in 0..3 {
            assert!(is_split_vertex_pair(biggest, TAILS[i], HEADS[i]));
            assert!(!is_split_vertex_pair(biggest, TAILS[i], ORIGINAL[i]));

            assert!(is_vertex_split_head(biggest, HEADS[i]));
            assert!(!is_vertex_split_head(biggest, ORIGINAL[i]));
            assert!(!is_vertex_split_head(biggest, TAILS[i]));

            assert!(is_vertex_split_tail(biggest, TAILS[i]));
            assert!(!is_vertex_split_tail(biggest, ORIGINAL[i]));
            assert!(!is_vertex_split_tail(biggest, HEADS[i]));
        }
        assert!(!is_split_vertex_pair(biggest, 3, 7));
    }

    #[test]
    fn test_prize_split_policy() {
        for (prize, tail, head) in [(8, 4, 4), (7, 3, 4), (0, 0, 0), (1, 0, 1)] {
            assert_eq!(tail_prize(prize), tail);
            assert_eq!(head_prize(prize), head);
        }
        for prize in 0..100 {
            assert_eq!(head_prize(prize) + tail_prize(prize), prize);
        }
    }
}
