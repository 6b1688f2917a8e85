//! 图变换模块
//!
//! 包含非对称拆分、多重图简化与边拆分三种变换

mod asymmetric;
mod simple;
mod split;

pub use asymmetric::{
    asymmetric_from_directed, asymmetric_from_undirected, biggest_vertex_id,
    get_original_from_split_vertex, get_original_path_from_split_path, head_prize,
    is_split_vertex_pair, is_vertex_split_head, is_vertex_split_tail, split_head, split_tail,
    tail_prize, AsymmetricConverter, MAX_SPLIT_BIGGEST,
};
pub use simple::{new_dummy_vertex, old_vertex_from_dummy, to_simple_undirected};
pub use split::{
    lookup_from_split, lookup_to_split, split_edges, split_edges_from, split_graph,
    split_graph_from_properties, EdgeSplitter, SplitOptions,
};
