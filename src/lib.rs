//! tspwp - 带奖励旅行商问题（TSP with Profits）的图变换库
//!
//! 把带奖励与开销的图实例改写成求解器更容易处理的等价形式：
//! - 非对称拆分：每个顶点拆成 tail/head，奖励平分，得到有向图
//! - 多重图简化：平行边通过哑顶点改写为简单图
//! - 边拆分：每条边中间插入新顶点，开销平分
//! - 游走工具：校验、重建、排序与开销汇总

pub mod algorithm;
pub mod config;
pub mod converter;
pub mod error;
pub mod graph;
pub mod logging;
pub mod types;
pub mod utils;
pub mod weights;

// 重导出常用类型
pub use config::TransformConfig;
pub use converter::{AsymmetricConverter, EdgeSplitter, SplitOptions};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, MultiGraph, Vertex};
pub use types::{
    AttrValue, EdgeFunctionName, EdgeKey, EdgeList, EdgePair, GraphKind, GraphMeta, Properties,
    VertexFunctionName, VertexId, VertexList,
};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
