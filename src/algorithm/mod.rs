//! 图算法模块
//!
//! 包含游走校验与重建、边列表排序、开销汇总、连通性判断和稀疏化

mod connectivity;
mod cost;
mod order;
mod sparsity;
mod walk;

pub use connectivity::{is_connected, is_strongly_connected};
pub use cost::{total_cost, total_cost_of_walk, total_prize};
pub use order::{order_edge_list, reorder_edge_list_from_root};
pub use sparsity::{
    core_numbers, degeneracy, measure_sparsity_metrics, sparsify_uid, SparsityMetrics,
};
pub use walk::{
    edge_list_from_walk, is_simple_cycle, is_simple_path, is_walk,
    remove_self_loops_from_edge_list, vertex_set_from_edge_list, walk_from_edge_list,
};
