//! 连通性判断

use crate::graph::Graph;
use crate::types::VertexId;
use std::collections::{HashSet, VecDeque};

/// 从 `start` 出发按 `next` 给出的邻接关系做广度优先遍历，返回可达顶点数
fn reachable_count<F, I>(start: VertexId, mut next: F) -> usize
where
    F: FnMut(VertexId) -> I,
    I: IntoIterator<Item = VertexId>,
{
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for neighbor in next(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited.len()
}

/// 强连通：任意两个顶点互相可达
///
/// 无向图等价于连通。空图视为不连通。
pub fn is_strongly_connected(graph: &Graph) -> bool {
    let Some(start) = graph.vertices().next().map(|v| v.id()) else {
        return false;
    };
    let n = graph.vertex_count();
    reachable_count(start, |v| graph.successors(v).collect::<Vec<_>>()) == n
        && reachable_count(start, |v| graph.predecessors(v).collect::<Vec<_>>()) == n
}

/// 忽略方向后连通（有向图即弱连通）。空图视为不连通。
pub fn is_connected(graph: &Graph) -> bool {
    let Some(start) = graph.vertices().next().map(|v| v.id()) else {
        return false;
    };
    reachable_count(start, |v| graph.neighbors(v)) == graph.vertex_count()
}
