//! 图核心模块
//!
//! 定义顶点、边、简单图与多重图的数据结构

mod edge;
mod graph;
mod multi;
mod vertex;

pub use edge::Edge;
pub use graph::Graph;
pub use multi::MultiGraph;
pub use vertex::Vertex;
