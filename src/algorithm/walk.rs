//! 游走（walk）的构造与校验
//!
//! 游走是相邻顶点组成的有序序列，可以是开放的，也可以首尾相同（闭合）。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{EdgeList, EdgePair, VertexId, VertexList};
use std::collections::HashSet;
use tracing::trace;

/// 游走中相邻顶点组成的边，顺序与游走一致
pub fn edge_list_from_walk(walk: &[VertexId]) -> EdgeList {
    walk.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// 每对相邻顶点在图中都有边（允许自环与重复）
pub fn is_walk(graph: &Graph, walk: &[VertexId]) -> bool {
    walk.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}

/// 游走且所有顶点互不相同
pub fn is_simple_path(graph: &Graph, path: &[VertexId]) -> bool {
    let distinct: HashSet<VertexId> = path.iter().copied().collect();
    is_walk(graph, path) && distinct.len() == path.len()
}

/// 游走、首尾相同且其余顶点互不相同；长度不超过 1 时恒为真
pub fn is_simple_cycle(graph: &Graph, cycle: &[VertexId]) -> bool {
    if cycle.len() <= 1 {
        return true;
    }
    let distinct: HashSet<VertexId> = cycle.iter().copied().collect();
    is_walk(graph, cycle) && cycle.len() == distinct.len() + 1 && cycle.first() == cycle.last()
}

/// 边列表中出现的全部顶点
pub fn vertex_set_from_edge_list(edges: &[EdgePair]) -> HashSet<VertexId> {
    edges.iter().flat_map(|&(u, v)| [u, v]).collect()
}

/// 去掉自环，保持其余边的顺序
pub fn remove_self_loops_from_edge_list(edges: &[EdgePair]) -> EdgeList {
    edges.iter().copied().filter(|(u, v)| u != v).collect()
}

/// 从按顺序相邻的边列表恢复顶点序列
///
/// 起点是第一条边中不属于第二条边的端点（只有一条边时取第一条边的第一个端点）。
/// 之后每一步取当前边中不等于上一个输出顶点的端点；
/// 任何一条边不包含当前顶点时立即返回 [`Error::EdgesNotAdjacent`]。
pub fn walk_from_edge_list(edges: &[EdgePair]) -> Result<VertexList> {
    let Some(&(a, b)) = edges.first() else {
        return Ok(Vec::new());
    };
    let start = match edges.get(1) {
        Some(&(c, d)) if a == c || a == d => {
            if b != c && b != d {
                b
            } else {
                a
            }
        }
        _ => a,
    };

    let mut walk = Vec::with_capacity(edges.len() + 1);
    walk.push(start);
    let mut current = start;
    for (index, &(u, v)) in edges.iter().enumerate() {
        let next = if u == current {
            v
        } else if v == current {
            u
        } else {
            return Err(Error::EdgesNotAdjacent {
                index,
                src: u,
                dst: v,
                current,
            });
        };
        trace!(index, from = current, to = next, "walk step");
        walk.push(next);
        current = next;
    }
    Ok(walk)
}
