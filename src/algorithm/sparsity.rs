//! 稀疏化与稀疏度度量
//!
//! 完全图实例可以通过随机删边变得稀疏；k-核数与退化度用来衡量结果有多稀疏。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::VertexId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 均匀独立地随机删边，直到边数不超过 `kappa * 顶点数`
///
/// 每一轮随机选一个顶点，若它有后继则随机删去一条关联边。
/// 返回新图，输入图保持不变。
pub fn sparsify_uid<R: Rng + ?Sized>(graph: &Graph, kappa: usize, rng: &mut R) -> Graph {
    let mut sparse = graph.clone();
    let vertices = sparse.vertex_ids();
    let target = sparse.vertex_count().saturating_mul(kappa);
    let mut rounds = 0usize;

    while sparse.edge_count() > target {
        rounds += 1;
        let Some(&u) = vertices.choose(rng) else {
            break;
        };
        let neighbors: Vec<VertexId> = sparse.successors(u).collect();
        if let Some(&v) = neighbors.choose(rng) {
            sparse.remove_edge(u, v);
        }
    }

    debug!(
        kappa,
        before = graph.edge_count(),
        after = sparse.edge_count(),
        rounds,
        "graph sparsified"
    );
    sparse
}

/// 每个顶点的核数（所在最大 k-核的 k），自环不计入度数
///
/// 仅支持无向图。
pub fn core_numbers(graph: &Graph) -> Result<HashMap<VertexId, usize>> {
    if graph.is_directed() {
        return Err(Error::InvalidGraphKind("核数只对无向图定义".to_string()));
    }

    let mut degree: HashMap<VertexId, usize> = graph
        .vertices()
        .map(|vertex| {
            let id = vertex.id();
            let d = graph.successors(id).filter(|&w| w != id).count();
            (id, d)
        })
        .collect();
    let mut removed: HashSet<VertexId> = HashSet::with_capacity(degree.len());
    let mut cores = HashMap::with_capacity(degree.len());
    let mut k = 0;

    loop {
        let next = degree
            .iter()
            .filter(|(id, _)| !removed.contains(*id))
            .map(|(&id, &d)| (id, d))
            .min_by_key(|&(id, d)| (d, id));
        let Some((v, d)) = next else {
            break;
        };
        k = k.max(d);
        cores.insert(v, k);
        removed.insert(v);
        for w in graph.successors(v) {
            if w != v && !removed.contains(&w) {
                if let Some(dw) = degree.get_mut(&w) {
                    *dw = dw.saturating_sub(1);
                }
            }
        }
    }
    Ok(cores)
}

/// 退化度：最大核数；空图为 0
pub fn degeneracy(graph: &Graph) -> Result<usize> {
    Ok(core_numbers(graph)?.into_values().max().unwrap_or(0))
}

/// 稀疏度指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparsityMetrics {
    pub degeneracy: usize,
    /// 度数之和与两倍边数之比；没有边时为 0
    pub degree_ratio: f64,
    /// 边数与完全图边数之比
    pub density: f64,
}

pub fn measure_sparsity_metrics(graph: &Graph) -> Result<SparsityMetrics> {
    let degeneracy = degeneracy(graph)?;
    let edges = graph.edge_count() as f64;
    let degree_sum: usize = graph.vertices().map(|v| graph.degree(v.id())).sum();
    let degree_ratio = if edges > 0.0 {
        degree_sum as f64 / (2.0 * edges)
    } else {
        0.0
    };
    let n = graph.vertex_count() as f64;
    let density = if n > 1.0 {
        2.0 * edges / (n * (n - 1.0))
    } else {
        0.0
    };
    Ok(SparsityMetrics {
        degeneracy,
        degree_ratio,
        density,
    })
}
