//! 变换配置
//!
//! 不同数据集对奖励和开销使用不同的属性名，这里集中管理这些名字，
//! 并据此构造配置好的转换器。

use crate::converter::{AsymmetricConverter, EdgeSplitter, SplitOptions};
use crate::error::Result;
use crate::types::{EdgeFunctionName, VertexFunctionName};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 变换配置，缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// 顶点奖励属性名
    pub prize_attr: String,
    /// 边开销属性名
    pub cost_attr: String,
    /// 边拆分选项
    pub split: SplitOptions,
    /// 默认日志级别（`RUST_LOG` 优先）
    pub log_level: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            prize_attr: VertexFunctionName::Prize.as_str().to_string(),
            cost_attr: EdgeFunctionName::Cost.as_str().to_string(),
            split: SplitOptions::default(),
            log_level: "info".to_string(),
        }
    }
}

impl TransformConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 使用配置中属性名的非对称转换器
    pub fn asymmetric_converter(&self) -> AsymmetricConverter {
        AsymmetricConverter::new()
            .with_prize_attr(self.prize_attr.as_str())
            .with_cost_attr(self.cost_attr.as_str())
    }

    pub fn edge_splitter(&self) -> EdgeSplitter {
        EdgeSplitter::new(self.split.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::Graph;
    use crate::types::{AttrValue, GraphKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.prize_attr, "prize");
        assert_eq!(config.cost_attr, "cost");
        assert_eq!(config.split.split_attr, "cost");
        assert_eq!(config.split.vertex_attr, "weight");
        assert_eq!(config.log_level, "info");
        assert_eq!(TransformConfig::from_json_str("{}").unwrap(), config);
    }

    #[test]
    fn test_partial_json() {
        let config = TransformConfig::from_json_str(
            r#"{"cost_attr": "length", "split": {"split_attr": "length"}}"#,
        )
        .unwrap();
        assert_eq!(config.cost_attr, "length");
        assert_eq!(config.prize_attr, "prize");
        assert_eq!(config.split.split_attr, "length");
        assert_eq!(config.split.old_edge_attr, "old_edge");

        let round_trip = TransformConfig::from_json_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"prize_attr": "score", "log_level": "debug"}}"#).unwrap();
        let config = TransformConfig::from_file(file.path()).unwrap();
        assert_eq!(config.prize_attr, "score");
        assert_eq!(config.log_level, "debug");

        assert!(matches!(
            TransformConfig::from_file("/nonexistent/tspwp.json"),
            Err(Error::IoError(_))
        ));
        assert!(matches!(
            TransformConfig::from_json_str("{"),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_configured_transforms() {
        let config = TransformConfig::from_json_str(
            r#"{"prize_attr": "score", "cost_attr": "length", "split": {"split_attr": "length"}}"#,
        )
        .unwrap();

        let mut graph = Graph::complete_graph(3, GraphKind::Undirected);
        graph.set_vertex_attribute("score", AttrValue::Int(6));
        graph.set_edge_attribute("length", AttrValue::Int(4));

        let asymmetric = config.asymmetric_converter().from_undirected(&graph).unwrap();
        assert_eq!(asymmetric.vertex_count(), 6);
        assert_eq!(asymmetric.vertex(3).unwrap().property("score"), Some(&AttrValue::Int(3)));

        let split = config.edge_splitter().split_graph(&graph).unwrap();
        assert_eq!(split.vertex_count(), 6);
        assert!(split
            .edges()
            .all(|e| e.property("length") == Some(&AttrValue::Float(2.0))));
    }
}
