//! 边拆分
//!
//! 每条边 `(u, v)` 被一个新的负数顶点 `w` 细分为 `(u, w)` 与 `(w, v)`：
//! 边上的代价平分到两条新边，边上的长度移到 `w` 上成为奖励，
//! 每条新边都记录其原始边。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::types::{
    AttrValue, EdgeFunctionName, EdgeList, EdgePair, Properties, VertexFunctionName, VertexId,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 细分每条边；第 `i` 条边使用新顶点 `-(i + 1)`
///
/// 输出长度恰为输入的两倍，顺序与输入一致。计数器属于单次调用。
/// 输入中已有负数顶点时使用 [`split_edges_from`]。
pub fn split_edges(edges: &[EdgePair]) -> EdgeList {
    split_edges_from(edges, -1)
}

/// 细分每条边；第 `i` 条边使用新顶点 `first - i`
pub fn split_edges_from(edges: &[EdgePair], first: VertexId) -> EdgeList {
    let mut splits = Vec::with_capacity(edges.len() * 2);
    let mut next_vertex = first;
    for &(u, v) in edges {
        let w = next_vertex;
        next_vertex -= 1;
        splits.push((u, w));
        splits.push((w, v));
    }
    splits
}

fn check_split_len(edges: &[EdgePair], splits: &[EdgePair]) -> Result<()> {
    if splits.len() != edges.len() * 2 {
        return Err(Error::InvalidInput(format!(
            "拆分边数量应为 {}, 实际为 {}",
            edges.len() * 2,
            splits.len()
        )));
    }
    Ok(())
}

/// 拆分边 -> 原始边
pub fn lookup_from_split(
    edges: &[EdgePair],
    splits: &[EdgePair],
) -> Result<HashMap<EdgePair, EdgePair>> {
    check_split_len(edges, splits)?;
    let mut lookup = HashMap::with_capacity(splits.len());
    for (edge, halves) in edges.iter().zip(splits.chunks_exact(2)) {
        lookup.insert(halves[0], *edge);
        lookup.insert(halves[1], *edge);
    }
    Ok(lookup)
}

/// 原始边 -> 两条拆分边
pub fn lookup_to_split(
    edges: &[EdgePair],
    splits: &[EdgePair],
) -> Result<HashMap<EdgePair, (EdgePair, EdgePair)>> {
    check_split_len(edges, splits)?;
    Ok(edges
        .iter()
        .zip(splits.chunks_exact(2))
        .map(|(edge, halves)| (*edge, (halves[0], halves[1])))
        .collect())
}

/// 边拆分选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// 平分到两条新边的属性
    pub split_attr: String,
    /// 移到中间顶点的边属性
    pub vertex_attr: String,
    /// 中间顶点上的新属性名
    pub new_vertex_attr: String,
    /// 新边上记录原始边的属性名
    pub old_edge_attr: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            split_attr: EdgeFunctionName::Cost.as_str().to_string(),
            vertex_attr: EdgeFunctionName::Weight.as_str().to_string(),
            new_vertex_attr: VertexFunctionName::Prize.as_str().to_string(),
            old_edge_attr: EdgeFunctionName::OldEdge.as_str().to_string(),
        }
    }
}

/// 边拆分器
#[derive(Debug, Clone, Default)]
pub struct EdgeSplitter {
    options: SplitOptions,
}

impl EdgeSplitter {
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// 从 "边 -> 属性" 映射构造拆分后的无向简单图
    pub fn split_properties(&self, edge_properties: &IndexMap<EdgePair, Properties>) -> Result<Graph> {
        let edges: Vec<(EdgePair, &Properties)> =
            edge_properties.iter().map(|(e, p)| (*e, p)).collect();
        self.build(Graph::undirected(), &edges)
    }

    /// 拆分已有图的所有边，保留原顶点属性、图类型与元数据
    pub fn split_graph(&self, graph: &Graph) -> Result<Graph> {
        let mut base = Graph::new(graph.kind()).with_meta(graph.meta().clone());
        for vertex in graph.vertices() {
            base.add_vertex(vertex.clone());
        }
        let edges: Vec<(EdgePair, &Properties)> =
            graph.edges().map(|e| (e.pair(), e.properties())).collect();
        self.build(base, &edges)
    }

    fn build(&self, mut graph: Graph, edges: &[(EdgePair, &Properties)]) -> Result<Graph> {
        let opts = &self.options;
        let pairs: Vec<EdgePair> = edges.iter().map(|(e, _)| *e).collect();
        // 中间顶点不能与已有的负数顶点（例如简化产生的哑顶点）重合
        let first = first_free_vertex(&graph, edges);
        let splits = split_edges_from(&pairs, first);

        let halve = covers_all(edges, &opts.split_attr);
        let move_to_vertex = covers_all(edges, &opts.vertex_attr);
        if !halve {
            debug!(attr = %opts.split_attr, "attribute missing on some edges, not splitting it");
        }
        if !move_to_vertex {
            debug!(attr = %opts.vertex_attr, "attribute missing on some edges, not moving it to vertices");
        }

        for (((u, v), properties), halves) in edges.iter().zip(splits.chunks_exact(2)) {
            let (u, v) = (*u, *v);
            let middle = halves[0].1;

            for endpoint in [u, v] {
                if !graph.has_vertex(endpoint) {
                    graph.add_vertex(Vertex::new(endpoint));
                }
            }
            let mut middle_vertex = Vertex::new(middle);
            if move_to_vertex {
                if let Some(value) = properties.get(&opts.vertex_attr) {
                    middle_vertex.set_property(opts.new_vertex_attr.as_str(), value.clone());
                }
            }
            graph.add_vertex(middle_vertex);

            let half = if halve {
                let value = properties.get(&opts.split_attr).and_then(AttrValue::as_float);
                match value {
                    Some(value) => Some(value / 2.0),
                    None => {
                        return Err(Error::InvalidAttribute {
                            name: opts.split_attr.clone(),
                            reason: format!("边 ({u}, {v}) 的属性不是数值"),
                        })
                    }
                }
            } else {
                None
            };

            for &(a, b) in halves {
                let mut edge = Edge::new(a, b);
                if let Some(half) = half {
                    edge.set_property(opts.split_attr.as_str(), AttrValue::Float(half));
                }
                edge.set_property(opts.old_edge_attr.as_str(), AttrValue::Edge(u, v));
                graph.add_edge(edge)?;
            }
        }

        if move_to_vertex {
            let missing: Vec<VertexId> = graph
                .vertices()
                .filter(|v| v.property(&opts.new_vertex_attr).is_none())
                .map(|v| v.id())
                .collect();
            for id in missing {
                if let Some(vertex) = graph.vertex_mut(id) {
                    vertex.set_property(opts.new_vertex_attr.as_str(), AttrValue::Int(0));
                }
            }
        }

        debug!(
            edges = edges.len(),
            split_edges = graph.edge_count(),
            vertices = graph.vertex_count(),
            halve,
            move_to_vertex,
            "edges split"
        );
        Ok(graph)
    }
}

/// 比 `graph` 的顶点和 `edges` 的端点都小的第一个负数 ID
fn first_free_vertex(graph: &Graph, edges: &[(EdgePair, &Properties)]) -> VertexId {
    let smallest = graph
        .vertices()
        .map(|v| v.id())
        .chain(edges.iter().flat_map(|&((u, v), _)| [u, v]))
        .min()
        .unwrap_or(0);
    smallest.min(0) - 1
}

/// 所有边都带有该属性（空边集视为不覆盖）
fn covers_all(edges: &[(EdgePair, &Properties)], attr: &str) -> bool {
    !edges.is_empty() && edges.iter().all(|(_, p)| p.contains_key(attr))
}

/// 从 "边 -> 属性" 映射构造拆分图
pub fn split_graph_from_properties(
    edge_properties: &IndexMap<EdgePair, Properties>,
    split_attr: &str,
    vertex_attr: &str,
    new_vertex_attr: &str,
    old_edge_attr: &str,
) -> Result<Graph> {
    EdgeSplitter::new(SplitOptions {
        split_attr: split_attr.to_string(),
        vertex_attr: vertex_attr.to_string(),
        new_vertex_attr: new_vertex_attr.to_string(),
        old_edge_attr: old_edge_attr.to_string(),
    })
    .split_properties(edge_properties)
}

/// 拆分图的每条边（默认选项），结果图类型与输入一致
pub fn split_graph(graph: &Graph) -> Result<Graph> {
    EdgeSplitter::default().split_graph(graph)
}
