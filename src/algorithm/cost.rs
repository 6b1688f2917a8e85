//! 游走的奖励与开销汇总

use super::walk::edge_list_from_walk;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{EdgePair, VertexId};
use std::collections::HashMap;
use std::ops::AddAssign;

/// 顶点奖励之和；任一顶点缺少奖励时返回 [`Error::VertexNotFound`]
pub fn total_prize<W>(prizes: &HashMap<VertexId, W>, vertices: &[VertexId]) -> Result<W>
where
    W: Copy + Default + AddAssign,
{
    let mut total = W::default();
    for vertex in vertices {
        total += *prizes.get(vertex).ok_or(Error::VertexNotFound(*vertex))?;
    }
    Ok(total)
}

/// 边开销之和
///
/// 先按给定朝向 `(u, v)` 查找，找不到再查 `(v, u)`；两个朝向都没有时返回
/// [`Error::EdgeNotFound`]。
pub fn total_cost<W>(costs: &HashMap<EdgePair, W>, edges: &[EdgePair]) -> Result<W>
where
    W: Copy + Default + AddAssign,
{
    let mut total = W::default();
    for &(u, v) in edges {
        let cost = costs
            .get(&(u, v))
            .or_else(|| costs.get(&(v, u)))
            .ok_or_else(|| Error::EdgeNotFound(format!("({u}, {v}) 与 ({v}, {u})")))?;
        total += *cost;
    }
    Ok(total)
}

/// 沿游走累加图中边的数值属性
///
/// 边查找遵循图的方向性：有向图只接受 `(u, v)` 这一朝向的弧。
pub fn total_cost_of_walk(graph: &Graph, walk: &[VertexId], cost_attr: &str) -> Result<f64> {
    let mut total = 0.0;
    for (u, v) in edge_list_from_walk(walk) {
        let edge = graph
            .edge(u, v)
            .ok_or_else(|| Error::EdgeNotFound(format!("({u}, {v})")))?;
        total += edge
            .property(cost_attr)
            .and_then(|value| value.as_float())
            .ok_or_else(|| Error::InvalidAttribute {
                name: cost_attr.to_string(),
                reason: format!("边 ({u}, {v}) 缺少数值属性"),
            })?;
    }
    Ok(total)
}
