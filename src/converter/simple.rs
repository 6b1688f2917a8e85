//! 多重图简化
//!
//! key 为 0 的平行边保留为直接相连的边；key 为 `k > 0` 的平行边 `(u, v)`
//! 通过插入哑顶点 `d = -((B + 1)(k - 1) + u + 1)` 替换为 `u - d` 与 `d - v`。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, MultiGraph};
use crate::types::{EdgeKey, VertexId};
use tracing::debug;

/// 平行边对应的哑顶点 ID；key 为 0 时返回原顶点
pub fn new_dummy_vertex(vertex: VertexId, key: EdgeKey, biggest: VertexId) -> VertexId {
    if key > 0 {
        -((biggest + 1) * (key - 1)) - vertex - 1
    } else {
        vertex
    }
}

/// 从哑顶点还原原顶点；非负 ID 原样返回
pub fn old_vertex_from_dummy(dummy: VertexId, key: EdgeKey, biggest: VertexId) -> VertexId {
    if dummy < 0 {
        -(dummy + (biggest + 1) * (key - 1) + 1)
    } else {
        dummy
    }
}

/// 把无向多重图转换为无向简单图
///
/// 哑顶点复制平行边源顶点的属性，两条新边都复制平行边的属性。
///
/// 哑顶点 ID 只由源顶点和 key 决定，因此同一源顶点出发、key 相同的两条平行边
/// （例如 `(u, v1)` 与 `(u, v2)` 的 key 都是 1）会得到同一个哑顶点。
/// 这种输入被拒绝并返回 [`Error::DummyVertexCollision`]，不会把两个哑顶点合并。
pub fn to_simple_undirected(multi: &MultiGraph) -> Result<Graph> {
    let mut simple = Graph::undirected().with_meta(multi.meta().clone());
    for vertex in multi.vertices() {
        simple.add_vertex(vertex.clone());
    }
    if multi.edge_count() == 0 {
        return Ok(simple);
    }

    let biggest = multi.biggest_vertex_id().ok_or(Error::EmptyGraph)?;
    let mut dummies = 0usize;

    for edge in multi.edges() {
        let (u, v, key) = (edge.src(), edge.dst(), edge.key());
        if key < 0 {
            return Err(Error::NegativeEdgeKey {
                src: u,
                dst: v,
                key,
            });
        }
        if u == v && key > 0 {
            return Err(Error::UnexpectedSelfLoop(u));
        }

        if key == 0 {
            simple.add_edge(Edge::with_properties(u, v, edge.properties().clone()))?;
            continue;
        }

        let dummy = new_dummy_vertex(u, key, biggest);
        if simple.has_vertex(dummy) {
            return Err(Error::DummyVertexCollision(dummy));
        }
        let source = multi.vertex(u).ok_or(Error::VertexNotFound(u))?;
        simple.add_vertex(source.relabeled(dummy));
        simple.add_edge(Edge::with_properties(u, dummy, edge.properties().clone()))?;
        simple.add_edge(Edge::with_properties(dummy, v, edge.properties().clone()))?;
        dummies += 1;
    }

    debug!(
        edges = multi.edge_count(),
        dummies,
        simple_edges = simple.edge_count(),
        "multigraph simplified"
    );
    Ok(simple)
}
