//! tspwp 演示脚本
//!
//! 构造一个小实例，依次执行多重图简化、边拆分、非对称拆分，
//! 再把拆分图上的回路还原为原图上的回路

use tspwp::algorithm::{
    edge_list_from_walk, is_simple_cycle, order_edge_list, total_cost_of_walk, total_prize,
    walk_from_edge_list,
};
use tspwp::converter::{
    get_original_path_from_split_path, split_head, split_tail, to_simple_undirected,
};
use tspwp::logging::init_logging;
use tspwp::utils::relabel_consecutive;
use tspwp::weights::generation_two_prize;
use tspwp::{AttrValue, Edge, GraphMeta, MultiGraph, TransformConfig, Vertex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TransformConfig::default();
    init_logging(&config.log_level)?;

    println!("tspwp 演示");
    println!("==========\n");

    // 1. 构造带一条平行边的多重图
    println!("1. 构造多重图...");
    let mut multi = MultiGraph::new().with_meta(GraphMeta::named("demo"));
    for id in 0..4 {
        multi.add_vertex(Vertex::with_prize(id, generation_two_prize(id)));
    }
    for (u, v, cost) in [(0, 1, 3), (1, 2, 4), (2, 3, 2), (3, 0, 5), (0, 2, 6)] {
        multi.add_edge(Edge::with_cost(u, v, AttrValue::Int(cost)))?;
    }
    let key = multi.add_edge(Edge::with_cost(0, 1, AttrValue::Int(1)))?;
    println!(
        "   顶点: {}, 边: {}, 新平行边 key: {}\n",
        multi.vertex_count(),
        multi.edge_count(),
        key
    );

    // 2. 简化为简单图
    println!("2. 多重图简化...");
    let simple = to_simple_undirected(&multi)?;
    println!(
        "   顶点: {}, 边: {}\n",
        simple.vertex_count(),
        simple.edge_count()
    );

    // 3. 边拆分
    println!("3. 边拆分...");
    let split = config.edge_splitter().split_graph(&simple)?;
    println!(
        "   顶点: {}, 边: {}\n",
        split.vertex_count(),
        split.edge_count()
    );

    // 4. 非对称拆分（先把负数 ID 重新编号）
    println!("4. 非对称拆分...");
    let (relabeled, _) = relabel_consecutive(&simple)?;
    let converter = config.asymmetric_converter();
    let asymmetric = converter.from_undirected(&relabeled)?;
    println!(
        "   类型: {}, 顶点: {}, 弧: {}\n",
        asymmetric.kind(),
        asymmetric.vertex_count(),
        asymmetric.edge_count()
    );

    // 5. 拆分图上的回路 0 -> 1 -> 2 -> 0 还原为原图回路
    println!("5. 回路还原...");
    let biggest = relabeled
        .biggest_vertex_id()
        .ok_or(tspwp::Error::EmptyGraph)?;
    let cycle = [0, 1, 2];
    let mut split_walk: Vec<_> = cycle
        .iter()
        .flat_map(|&v| [split_tail(biggest, v), split_head(biggest, v)])
        .collect();
    split_walk.push(split_tail(biggest, cycle[0]));
    let original = get_original_path_from_split_path(biggest, &split_walk)?;
    println!("   拆分回路: {:?}", split_walk);
    println!("   原图回路: {:?}", original);

    println!(
        "   简单回路: {}, 总开销: {}, 总奖励: {}\n",
        is_simple_cycle(&relabeled, &original),
        total_cost_of_walk(&relabeled, &original, &config.cost_attr)?,
        total_prize(
            &relabeled.prize_map(&config.prize_attr),
            &original[..original.len().saturating_sub(1)]
        )?
    );

    // 6. 求解器输出的无序边集合恢复为游走
    println!("6. 边列表排序...");
    let mut solution = edge_list_from_walk(&original);
    solution.reverse();
    let ordered = order_edge_list(&solution)?;
    println!("   无序: {:?}", solution);
    println!("   有序: {:?}", ordered);
    println!("   游走: {:?}", walk_from_edge_list(&ordered)?);
    Ok(())
}
