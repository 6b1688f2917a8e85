//! 图属性与表示形式的辅助函数

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::types::{EdgePair, VertexId};
use indexmap::{IndexMap, IndexSet};

/// 邻接表：顶点到其后继列表
pub type AdjList = IndexMap<VertexId, Vec<VertexId>>;

/// 带权邻接表：顶点到（后继 -> 权重）
pub type AdjWeights<W> = IndexMap<VertexId, IndexMap<VertexId, W>>;

fn attribute_names<'a, I>(maps: I) -> Vec<String>
where
    I: Iterator<Item = &'a crate::types::Properties>,
{
    let names: IndexSet<&String> = maps.flat_map(|props| props.keys()).collect();
    let mut names: Vec<String> = names.into_iter().cloned().collect();
    names.sort();
    names
}

/// 所有边属性名（去重后按字典序）
pub fn edge_attribute_names(graph: &Graph) -> Vec<String> {
    attribute_names(graph.edges().map(Edge::properties))
}

/// 所有顶点属性名（去重后按字典序）
pub fn node_attribute_names(graph: &Graph) -> Vec<String> {
    attribute_names(graph.vertices().map(Vertex::properties))
}

/// 重命名边属性，返回新图
///
/// `renaming` 的键为旧名、值为新名；任一边缺少旧属性时返回错误。
/// `del_old` 为真时删除旧属性。
pub fn rename_edge_attributes(
    graph: &Graph,
    renaming: &IndexMap<String, String>,
    del_old: bool,
) -> Result<Graph> {
    let mut renamed = graph.clone();
    for (u, v) in graph.edge_pairs() {
        let edge = renamed
            .edge_mut(u, v)
            .ok_or_else(|| Error::EdgeNotFound(format!("({u}, {v})")))?;
        for (old, new) in renaming {
            let value = edge.property(old).cloned().ok_or_else(|| Error::InvalidAttribute {
                name: old.clone(),
                reason: format!("边 ({u}, {v}) 没有该属性"),
            })?;
            if del_old {
                edge.remove_property(old);
            }
            edge.set_property(new.clone(), value);
        }
    }
    Ok(renamed)
}

/// 重命名顶点属性，返回新图
pub fn rename_node_attributes(
    graph: &Graph,
    renaming: &IndexMap<String, String>,
    del_old: bool,
) -> Result<Graph> {
    let mut renamed = graph.clone();
    for id in graph.vertex_ids() {
        let vertex = renamed.vertex_mut(id).ok_or(Error::VertexNotFound(id))?;
        for (old, new) in renaming {
            let value = vertex.property(old).cloned().ok_or_else(|| Error::InvalidAttribute {
                name: old.clone(),
                reason: format!("顶点 {id} 没有该属性"),
            })?;
            if del_old {
                vertex.remove_property(old);
            }
            vertex.set_property(new.clone(), value);
        }
    }
    Ok(renamed)
}

pub fn adjacency_list_from_edge_list(edges: &[EdgePair]) -> AdjList {
    let mut adjacency = AdjList::new();
    for &(u, v) in edges {
        adjacency.entry(u).or_default().push(v);
    }
    adjacency
}

pub fn edge_list_from_adjacency_list(adjacency: &AdjList) -> Vec<EdgePair> {
    adjacency
        .iter()
        .flat_map(|(&u, neighbors)| neighbors.iter().map(move |&v| (u, v)))
        .collect()
}

pub fn adjacency_weights_from_edge_dict<W: Copy>(weights: &IndexMap<EdgePair, W>) -> AdjWeights<W> {
    let mut adjacency = AdjWeights::new();
    for (&(u, v), &w) in weights {
        adjacency.entry(u).or_insert_with(IndexMap::new).insert(v, w);
    }
    adjacency
}

pub fn edge_dict_from_adjacency_weights<W: Copy>(adjacency: &AdjWeights<W>) -> IndexMap<EdgePair, W> {
    adjacency
        .iter()
        .flat_map(|(&u, neighbors)| neighbors.iter().map(move |(&v, &w)| ((u, v), w)))
        .collect()
}

/// 按插入顺序把顶点重新编号为 `0..n`
///
/// 返回新图和旧 ID 到新 ID 的映射。简化或拆分后的图带有负数 ID，
/// 重新编号后即可交给非对称拆分。元数据中的根顶点随之更新；
/// 属性值（例如 `old_edge`）保持原样，仍指向旧 ID。
pub fn relabel_consecutive(graph: &Graph) -> Result<(Graph, IndexMap<VertexId, VertexId>)> {
    let mapping: IndexMap<VertexId, VertexId> = graph
        .vertices()
        .zip(0..)
        .map(|(vertex, new_id)| (vertex.id(), new_id))
        .collect();

    let mut meta = graph.meta().clone();
    meta.root = meta.root.and_then(|root| mapping.get(&root).copied());
    let mut relabeled = Graph::new(graph.kind()).with_meta(meta);
    for vertex in graph.vertices() {
        relabeled.add_vertex(vertex.relabeled(mapping[&vertex.id()]));
    }
    for edge in graph.edges() {
        let (u, v) = edge.pair();
        relabeled.add_edge(Edge::with_properties(
            mapping[&u],
            mapping[&v],
            edge.properties().clone(),
        ))?;
    }
    Ok((relabeled, mapping))
}
