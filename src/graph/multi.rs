//! 无向多重图
//!
//! 同一对顶点之间可以有多条平行边，以 key 区分

use super::edge::Edge;
use super::graph::Graph;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{EdgeKey, GraphMeta, VertexId};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};

/// 无向多重图
#[derive(Debug, Clone, Default)]
pub struct MultiGraph {
    meta: GraphMeta,
    vertices: IndexMap<VertexId, Vertex>,
    /// 按插入顺序保存的所有边（含 key）
    edges: Vec<Edge>,
    /// 无序顶点对 -> 已使用的 key
    keys: HashMap<(VertexId, VertexId), BTreeSet<EdgeKey>>,
}

fn unordered(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl MultiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meta(mut self, meta: GraphMeta) -> Self {
        self.meta = meta;
        self
    }

    /// 从无向简单图构造，所有边的 key 为 0
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        if graph.is_directed() {
            return Err(Error::InvalidGraphKind(
                "多重图只支持无向图".to_string(),
            ));
        }
        let mut multi = MultiGraph::new().with_meta(graph.meta().clone());
        for vertex in graph.vertices() {
            multi.add_vertex(vertex.clone());
        }
        for edge in graph.edges() {
            multi.add_edge_with_key(edge.clone(), 0)?;
        }
        Ok(multi)
    }

    pub fn meta(&self) -> &GraphMeta {
        &self.meta
    }

    /// 添加顶点；顶点已存在时合并属性
    pub fn add_vertex(&mut self, vertex: Vertex) {
        match self.vertices.get_mut(&vertex.id()) {
            Some(existing) => existing
                .properties_mut()
                .extend(vertex.properties().clone()),
            None => {
                self.vertices.insert(vertex.id(), vertex);
            }
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn biggest_vertex_id(&self) -> Option<VertexId> {
        self.vertices.keys().copied().max()
    }

    /// 添加平行边，分配该顶点对最小的未使用 key
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeKey> {
        let pair = unordered(edge.src(), edge.dst());
        let used = self.keys.get(&pair);
        let mut key = used.map_or(0, |k| k.len() as EdgeKey);
        while used.is_some_and(|k| k.contains(&key)) {
            key += 1;
        }
        self.add_edge_with_key(edge, key)?;
        Ok(key)
    }

    /// 以指定 key 添加平行边；key 已存在时替换该边
    ///
    /// 不校验 key 的符号，负数 key 在简化时才报错。
    pub fn add_edge_with_key(&mut self, edge: Edge, key: EdgeKey) -> Result<()> {
        for endpoint in [edge.src(), edge.dst()] {
            if !self.vertices.contains_key(&endpoint) {
                return Err(Error::VertexNotFound(endpoint));
            }
        }
        let pair = unordered(edge.src(), edge.dst());
        let edge = edge.with_key(key);
        let used = self.keys.entry(pair).or_default();
        if used.insert(key) {
            self.edges.push(edge);
        } else if let Some(slot) = self
            .edges
            .iter_mut()
            .find(|e| e.key() == key && unordered(e.src(), e.dst()) == pair)
        {
            *slot = edge;
        }
        Ok(())
    }

    /// 按插入顺序遍历边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 两个顶点之间的平行边数量
    pub fn number_of_edges_between(&self, u: VertexId, v: VertexId) -> usize {
        self.keys.get(&unordered(u, v)).map_or(0, BTreeSet::len)
    }

    /// 是否存在 key 大于 0 的平行边
    pub fn has_parallel_edges(&self) -> bool {
        self.edges.iter().any(|e| e.key() != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttrValue, GraphKind};

    #[test]
    fn test_keys_are_assigned_per_pair() {
        let mut multi = MultiGraph::from_graph(&Graph::complete_graph(3, GraphKind::Undirected))
            .unwrap();
        assert!(!multi.has_parallel_edges());

        assert_eq!(multi.add_edge(Edge::new(2, 0)).unwrap(), 1);
        assert_eq!(multi.add_edge(Edge::new(0, 2)).unwrap(), 2);
        assert_eq!(multi.add_edge(Edge::new(1, 2)).unwrap(), 1);

        assert_eq!(multi.number_of_edges_between(0, 2), 3);
        assert_eq!(multi.edge_count(), 6);
        assert!(multi.has_parallel_edges());
    }

    #[test]
    fn test_explicit_key_replaces_edge() {
        let mut multi = MultiGraph::new();
        multi.add_vertex(Vertex::new(0));
        multi.add_vertex(Vertex::new(1));
        multi.add_edge_with_key(Edge::new(0, 1), 0).unwrap();
        multi
            .add_edge_with_key(Edge::with_cost(1, 0, AttrValue::Int(5)), 0)
            .unwrap();

        assert_eq!(multi.edge_count(), 1);
        assert_eq!(multi.edges().next().unwrap().cost(), Some(5.0));
    }

    #[test]
    fn test_from_directed_graph_is_rejected() {
        let graph = Graph::complete_graph(2, GraphKind::Directed);
        assert!(matches!(
            MultiGraph::from_graph(&graph),
            Err(Error::InvalidGraphKind(_))
        ));
    }
}
