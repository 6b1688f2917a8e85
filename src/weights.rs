//! 顶点奖励与边开销的生成函数
//!
//! 奖励生成方式沿用 OP 基准实例的三代约定：
//! 第一代所有顶点奖励为 1，第二代按顶点 ID 伪随机，第三代与到根顶点的距离成正比。

use crate::error::{Error, Result};
use crate::types::{EdgePair, VertexId};
use indexmap::IndexMap;
use rand::Rng;

/// 第一代奖励：恒为 1
pub fn generation_one_prize() -> i64 {
    1
}

/// 第二代奖励：`1 + (7141 * v + 73) mod 100`，取值 1..=100
pub fn generation_two_prize(vertex: VertexId) -> i64 {
    1 + (7141 * vertex + 73).rem_euclid(100)
}

/// 第三代奖励：`1 + floor(99 * d / d_max)`，`d` 为到根顶点的欧氏距离
///
/// `d_max` 为所有顶点到根的最大距离加 0.5 后取整；为 0 时无法归一化，返回错误。
pub fn generation_three_prizes(coords: &[(f64, f64)], root_index: usize) -> Result<Vec<i64>> {
    let &(rx, ry) = coords.get(root_index).ok_or_else(|| {
        Error::InvalidInput(format!("根顶点下标 {} 超出坐标数量 {}", root_index, coords.len()))
    })?;
    let distance = |&(x, y): &(f64, f64)| (x - rx).hypot(y - ry);
    let max_distance = coords
        .iter()
        .map(|coord| (distance(coord) + 0.5).trunc())
        .fold(0.0_f64, f64::max);
    if max_distance == 0.0 {
        return Err(Error::InvalidInput(
            "所有顶点到根顶点的最大距离为 0".to_string(),
        ));
    }
    Ok(coords
        .iter()
        .map(|coord| 1 + (99.0 / max_distance * distance(coord)).floor() as i64)
        .collect())
}

/// 为每条边独立均匀地生成 `[min_value, max_value]` 内的整数开销
pub fn uniform_random_cost<R: Rng + ?Sized>(
    edges: &[EdgePair],
    min_value: i64,
    max_value: i64,
    rng: &mut R,
) -> Result<IndexMap<EdgePair, i64>> {
    if min_value > max_value {
        return Err(Error::InvalidInput(format!(
            "开销下界 {} 大于上界 {}",
            min_value, max_value
        )));
    }
    Ok(edges
        .iter()
        .map(|&edge| (edge, rng.gen_range(min_value..=max_value)))
        .collect())
}
