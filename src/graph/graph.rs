//! 图数据结构
//!
//! 内存中的简单图（有向或无向），顶点与边均保持插入顺序。
//! 所有变换都从借用的输入图构造新图，不修改输入。

use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{AttrValue, EdgePair, GraphKind, GraphMeta, VertexId};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 简单图
///
/// 不允许重复边：再次添加已存在的边会合并属性。
/// 无向图中边 `(u, v)` 与 `(v, u)` 视为同一条边，按首次插入的方向存储。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord", into = "GraphRecord")]
pub struct Graph {
    kind: GraphKind,
    meta: GraphMeta,
    vertices: IndexMap<VertexId, Vertex>,
    edges: IndexMap<EdgePair, Edge>,
    /// 出邻接（无向图中即全部邻居）
    successors: HashMap<VertexId, IndexSet<VertexId>>,
    /// 入邻接（仅有向图维护）
    predecessors: HashMap<VertexId, IndexSet<VertexId>>,
}

impl Graph {
    /// 创建空图
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// 创建空无向图
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// 创建空有向图
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// 设置图元数据
    pub fn with_meta(mut self, meta: GraphMeta) -> Self {
        self.meta = meta;
        self
    }

    /// `n` 个顶点 (0..n) 的完全图，不含自环与属性
    pub fn complete_graph(n: usize, kind: GraphKind) -> Self {
        let mut graph = Self::new(kind);
        for id in 0..n as VertexId {
            graph.add_vertex(Vertex::new(id));
        }
        for u in 0..n as VertexId {
            for v in 0..n as VertexId {
                let wanted = match kind {
                    GraphKind::Undirected => u < v,
                    GraphKind::Directed => u != v,
                };
                if wanted {
                    graph.insert_edge_unchecked(Edge::new(u, v));
                }
            }
        }
        graph
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn meta(&self) -> &GraphMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut GraphMeta {
        &mut self.meta
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点；顶点已存在时合并属性
    pub fn add_vertex(&mut self, vertex: Vertex) {
        let id = vertex.id();
        if let Some(existing) = self.vertices.get_mut(&id) {
            existing
                .properties_mut()
                .extend(vertex.properties().clone());
            return;
        }
        self.successors.entry(id).or_default();
        if self.is_directed() {
            self.predecessors.entry(id).or_default();
        }
        self.vertices.insert(id, vertex);
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 最大顶点 ID
    pub fn biggest_vertex_id(&self) -> Option<VertexId> {
        self.vertices.keys().copied().max()
    }

    /// 为所有顶点设置同一属性值
    pub fn set_vertex_attribute(&mut self, name: &str, value: AttrValue) {
        for vertex in self.vertices.values_mut() {
            vertex.set_property(name, value.clone());
        }
    }

    // ==================== 边操作 ====================

    /// 添加边；两个端点必须已存在，边已存在时合并属性
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        for endpoint in [edge.src(), edge.dst()] {
            if !self.has_vertex(endpoint) {
                return Err(Error::VertexNotFound(endpoint));
            }
        }
        self.insert_edge_unchecked(edge);
        Ok(())
    }

    fn insert_edge_unchecked(&mut self, edge: Edge) {
        let (u, v) = edge.pair();
        if let Some(slot) = self.edge_slot(u, v) {
            if let Some(existing) = self.edges.get_mut(&slot) {
                existing
                    .properties_mut()
                    .extend(edge.properties().clone());
            }
            return;
        }

        self.successors.entry(u).or_default().insert(v);
        if self.is_directed() {
            self.predecessors.entry(v).or_default().insert(u);
        } else {
            self.successors.entry(v).or_default().insert(u);
        }
        self.edges.insert((u, v), edge.with_key(0));
    }

    /// 删除边（无向图接受任一方向）
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Option<Edge> {
        let slot = self.edge_slot(u, v)?;
        let edge = self.edges.shift_remove(&slot)?;
        let (a, b) = slot;
        if let Some(set) = self.successors.get_mut(&a) {
            set.shift_remove(&b);
        }
        if self.is_directed() {
            if let Some(set) = self.predecessors.get_mut(&b) {
                set.shift_remove(&a);
            }
        } else if let Some(set) = self.successors.get_mut(&b) {
            set.shift_remove(&a);
        }
        Some(edge)
    }

    /// 实际存储该边的键
    fn edge_slot(&self, u: VertexId, v: VertexId) -> Option<EdgePair> {
        if self.edges.contains_key(&(u, v)) {
            Some((u, v))
        } else if !self.is_directed() && self.edges.contains_key(&(v, u)) {
            Some((v, u))
        } else {
            None
        }
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_slot(u, v).is_some()
    }

    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<&Edge> {
        self.edge_slot(u, v).and_then(|slot| self.edges.get(&slot))
    }

    pub fn edge_mut(&mut self, u: VertexId, v: VertexId) -> Option<&mut Edge> {
        let slot = self.edge_slot(u, v)?;
        self.edges.get_mut(&slot)
    }

    /// 按插入顺序遍历边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge_pairs(&self) -> Vec<EdgePair> {
        self.edges.keys().copied().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 为所有边设置同一属性值
    pub fn set_edge_attribute(&mut self, name: &str, value: AttrValue) {
        for edge in self.edges.values_mut() {
            edge.set_property(name, value.clone());
        }
    }

    // ==================== 邻接查询 ====================

    /// 后继顶点（无向图中为全部邻居）
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.successors
            .get(&v)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// 前驱顶点（无向图中为全部邻居）
    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let map = if self.is_directed() {
            &self.predecessors
        } else {
            &self.successors
        };
        map.get(&v).into_iter().flat_map(|set| set.iter().copied())
    }

    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let mut result: IndexSet<VertexId> = self.successors(v).collect();
        if self.is_directed() {
            result.extend(self.predecessors(v));
        }
        result.into_iter().collect()
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.successors.get(&v).map_or(0, IndexSet::len)
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        if self.is_directed() {
            self.predecessors.get(&v).map_or(0, IndexSet::len)
        } else {
            self.out_degree(v)
        }
    }

    /// 关联边数量（自环计两次）
    pub fn degree(&self, v: VertexId) -> usize {
        let self_loop = usize::from(self.has_edge(v, v));
        if self.is_directed() {
            self.out_degree(v) + self.in_degree(v)
        } else {
            self.out_degree(v) + self_loop
        }
    }

    // ==================== 转换 ====================

    /// 转为有向图：每条无向边变为两条方向相反、属性相同的有向边
    pub fn to_directed(&self) -> Graph {
        if self.is_directed() {
            return self.clone();
        }
        let mut directed = Graph::directed().with_meta(self.meta.clone());
        for vertex in self.vertices() {
            directed.add_vertex(vertex.clone());
        }
        for edge in self.edges() {
            directed.insert_edge_unchecked(edge.clone());
            if !edge.is_self_loop() {
                directed.insert_edge_unchecked(edge.reversed());
            }
        }
        directed
    }

    /// 顶点到整数属性的映射（缺失或非整数的顶点被跳过）
    pub fn prize_map(&self, attr: &str) -> HashMap<VertexId, i64> {
        self.vertices()
            .filter_map(|v| v.property(attr).and_then(AttrValue::as_int).map(|p| (v.id(), p)))
            .collect()
    }

    /// 边到数值属性的映射（缺失或非数值的边被跳过）
    pub fn cost_map(&self, attr: &str) -> HashMap<EdgePair, f64> {
        self.edges()
            .filter_map(|e| e.property(attr).and_then(AttrValue::as_float).map(|c| (e.pair(), c)))
            .collect()
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 反序列化
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// 序列化用的扁平表示（JSON 不支持元组键）
#[derive(Debug, Serialize, Deserialize)]
struct GraphRecord {
    kind: GraphKind,
    #[serde(default)]
    meta: GraphMeta,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl From<Graph> for GraphRecord {
    fn from(graph: Graph) -> Self {
        GraphRecord {
            kind: graph.kind,
            meta: graph.meta,
            vertices: graph.vertices.into_values().collect(),
            edges: graph.edges.into_values().collect(),
        }
    }
}

impl TryFrom<GraphRecord> for Graph {
    type Error = Error;

    fn try_from(record: GraphRecord) -> Result<Self> {
        let mut graph = Graph::new(record.kind).with_meta(record.meta);
        for vertex in record.vertices {
            graph.add_vertex(vertex);
        }
        for edge in record.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_graph() -> Graph {
        let mut graph = Graph::undirected();
        for id in 0..4 {
            graph.add_vertex(Vertex::with_prize(id, 1));
        }
        for (u, v) in [(0, 1), (0, 3), (1, 2), (1, 3)] {
            graph.add_edge(Edge::with_cost(u, v, AttrValue::Int(1))).unwrap();
        }
        graph
    }

    #[test]
    fn test_undirected_edge_lookup() {
        let graph = walk_graph();
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 2));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.neighbors(0), vec![1, 3]);
    }

    #[test]
    fn test_add_edge_requires_vertices() {
        let mut graph = Graph::undirected();
        graph.add_vertex(Vertex::new(0));
        let err = graph.add_edge(Edge::new(0, 9)).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(9)));
    }

    #[test]
    fn test_duplicate_edge_merges_properties() {
        let mut graph = walk_graph();
        let mut edge = Edge::new(1, 0);
        edge.set_property("weight", AttrValue::Int(4));
        graph.add_edge(edge).unwrap();

        assert_eq!(graph.edge_count(), 4);
        let stored = graph.edge(0, 1).unwrap();
        assert_eq!(stored.pair(), (0, 1));
        assert_eq!(stored.cost(), Some(1.0));
        assert_eq!(stored.property("weight"), Some(&AttrValue::Int(4)));
    }

    #[test]
    fn test_directed_adjacency() {
        let graph = Graph::complete_graph(3, GraphKind::Directed);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.in_degree(0), 2);
        assert!(graph.has_edge(2, 0));
    }

    #[test]
    fn test_to_directed_bidirects_edges() {
        let graph = walk_graph();
        let directed = graph.to_directed();

        assert!(directed.is_directed());
        assert_eq!(directed.edge_count(), 8);
        assert_eq!(directed.edge(3, 1).unwrap().cost(), Some(1.0));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = walk_graph();
        let removed = graph.remove_edge(3, 0).unwrap();
        assert_eq!(removed.pair(), (0, 3));
        assert!(!graph.has_edge(0, 3));
        assert_eq!(graph.degree(3), 1);
        assert!(graph.remove_edge(3, 0).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut graph = walk_graph().with_meta(GraphMeta::named("walk"));
        graph.meta_mut().root = Some(0);

        let json = graph.to_json().unwrap();
        let restored = Graph::from_json(&json).unwrap();

        assert_eq!(graph, restored);
        assert_eq!(restored.meta().name.as_deref(), Some("walk"));
    }

    #[test]
    fn test_json_rejects_dangling_edge() {
        let json = r#"{"kind":"Undirected","vertices":[{"id":0}],"edges":[{"src":0,"dst":1}]}"#;
        assert!(Graph::from_json(json).is_err());
    }

    #[test]
    fn test_prize_and_cost_maps() {
        let graph = walk_graph();
        let prizes = graph.prize_map("prize");
        let costs = graph.cost_map("cost");
        assert_eq!(prizes.len(), 4);
        assert_eq!(costs.get(&(1, 3)), Some(&1.0));
        assert!(costs.get(&(3, 1)).is_none());
    }
}
