//! 边列表排序
//!
//! 求解器常常以无序的边集合给出解；这里把它整理成相邻边首尾相接的顺序，
//! 并可以把指定的根顶点旋转到开头。

use super::walk::walk_from_edge_list;
use crate::error::{Error, Result};
use crate::types::{EdgeList, EdgePair, VertexId};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

/// 每个顶点关联的边下标；简单路径或简单环中每个顶点最多关联两条边
type Incidence = IndexMap<VertexId, SmallVec<[usize; 2]>>;

fn incidence_of(edges: &[EdgePair]) -> Result<Incidence> {
    let mut incidence = Incidence::new();
    for (index, &(u, v)) in edges.iter().enumerate() {
        for endpoint in [u, v] {
            let slots = incidence.entry(endpoint).or_default();
            if slots.len() == 2 {
                return Err(Error::NotSimple(format!(
                    "顶点 {} 出现在两条以上的边中",
                    endpoint
                )));
            }
            slots.push(index);
        }
    }
    Ok(incidence)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Cycle,
    Path,
}

impl Shape {
    fn violation(self, reason: String) -> Error {
        match self {
            Shape::Cycle => Error::NotSimpleCycle(reason),
            Shape::Path => Error::NotSimplePath(reason),
        }
    }
}

/// 把无序的边列表整理为相邻边首尾相接的顺序
///
/// 输入必须恰好构成一条简单环或一条简单路径。每条边保持原有朝向，只调整顺序：
/// 简单环从第 0 条边开始，沿第 0 条边第二个端点的方向前进；
/// 简单路径从第一条包含度为 1 顶点的边开始。
///
/// # 示例
///
/// ```
/// use tspwp::algorithm::order_edge_list;
///
/// let ordered = order_edge_list(&[(1, 0), (2, 1), (0, 2)]).unwrap();
/// assert_eq!(ordered, vec![(1, 0), (0, 2), (2, 1)]);
/// ```
pub fn order_edge_list(edges: &[EdgePair]) -> Result<EdgeList> {
    if edges.is_empty() {
        return Ok(Vec::new());
    }
    let incidence = incidence_of(edges)?;
    let ends: SmallVec<[VertexId; 2]> = incidence
        .iter()
        .filter(|(_, slots)| slots.len() == 1)
        .map(|(&vertex, _)| vertex)
        .take(3)
        .collect();

    let (shape, start_index, mut current) = match ends.as_slice() {
        [] => (Shape::Cycle, 0, edges[0].1),
        [first, _] => {
            let start_index = incidence
                .get(first)
                .and_then(|slots| slots.first().copied())
                .ok_or(Error::NodeNotFound(*first))?;
            let (u, v) = edges[start_index];
            (Shape::Path, start_index, if u == *first { v } else { u })
        }
        _ => {
            return Err(Error::NotSimple(
                "度为 1 的顶点数既不是 0 也不是 2".to_string(),
            ))
        }
    };

    let mut visited = vec![false; edges.len()];
    let mut ordered = Vec::with_capacity(edges.len());
    visited[start_index] = true;
    ordered.push(edges[start_index]);
    let mut current_index = start_index;

    while ordered.len() < edges.len() {
        let next_index = incidence
            .get(&current)
            .and_then(|slots| slots.iter().copied().find(|&i| i != current_index));
        let Some(next_index) = next_index else {
            break;
        };
        if visited[next_index] {
            return Err(shape.violation(format!(
                "在顶点 {} 处回到了已访问的边 {:?}",
                current, edges[next_index]
            )));
        }
        visited[next_index] = true;
        ordered.push(edges[next_index]);
        let (u, v) = edges[next_index];
        current = if u == current { v } else { u };
        current_index = next_index;
    }

    if ordered.len() != edges.len() {
        return Err(shape.violation(format!(
            "只能连成 {} 条边，共 {} 条",
            ordered.len(),
            edges.len()
        )));
    }
    debug!(edges = edges.len(), cycle = shape == Shape::Cycle, "edge list ordered");
    Ok(ordered)
}

/// 旋转边列表，使根顶点出现在第一条边中
///
/// 闭合游走旋转到第一个“本边与前一条边都包含根”的位置，根同时出现在首尾两条边；
/// 开放游走中根已是起点时原样返回，根是终点时整体反转顺序，
/// 根在中间时旋转到第一条包含根的边（此时结果不再是首尾相接的游走）。
pub fn reorder_edge_list_from_root(edges: &[EdgePair], root: VertexId) -> Result<EdgeList> {
    let touches = |&(u, v): &EdgePair| u == root || v == root;
    if !edges.iter().any(touches) {
        return Err(Error::NodeNotFound(root));
    }

    let walk = walk_from_edge_list(edges)?;
    let n = edges.len();
    let rotate = |start: usize| -> EdgeList {
        edges[start..].iter().chain(&edges[..start]).copied().collect()
    };

    if walk.first() == walk.last() {
        let start = (0..n)
            .find(|&i| touches(&edges[i]) && touches(&edges[(i + n - 1) % n]))
            .or_else(|| edges.iter().position(touches))
            .ok_or(Error::NodeNotFound(root))?;
        return Ok(rotate(start));
    }
    if walk.first() == Some(&root) {
        return Ok(edges.to_vec());
    }
    if walk.last() == Some(&root) {
        return Ok(edges.iter().rev().copied().collect());
    }
    let start = edges
        .iter()
        .position(touches)
        .ok_or(Error::NodeNotFound(root))?;
    Ok(rotate(start))
}
