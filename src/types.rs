//! 通用类型定义：顶点、边、属性值与图元数据

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID
///
/// 原始图使用非负整数；哑顶点与边拆分产生的中间顶点为负数，
/// 非对称拆分产生的 tail/head 位于原始最大 ID 之上。
pub type VertexId = i64;

/// 平行边 key（简单图中恒为 0）
pub type EdgeKey = i64;

/// 顶点对表示的边
pub type EdgePair = (VertexId, VertexId);

/// 顶点序列
pub type VertexList = Vec<VertexId>;

/// 边序列
pub type EdgeList = Vec<EdgePair>;

/// 属性值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// 指向另一条边（例如拆分边记录其原始边）
    Edge(VertexId, VertexId),
    List(Vec<AttrValue>),
}

impl AttrValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Bool(_) => "bool",
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::String(_) => "string",
            AttrValue::Edge(_, _) => "edge",
            AttrValue::List(_) => "list",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// 数值属性统一转为 f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttrValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<EdgePair> {
        match self {
            AttrValue::Edge(u, v) => Some((*u, *v)),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AttrValue::Int(_) | AttrValue::Float(_))
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<EdgePair> for AttrValue {
    fn from((u, v): EdgePair) -> Self {
        AttrValue::Edge(u, v)
    }
}

/// 属性映射（保持插入顺序）
pub type Properties = IndexMap<String, AttrValue>;

/// 图的方向性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    Undirected,
    Directed,
}

impl Default for GraphKind {
    fn default() -> Self {
        GraphKind::Undirected
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Directed => write!(f, "directed"),
        }
    }
}

/// 常用顶点属性名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexFunctionName {
    /// 访问顶点获得的奖励
    Prize,
    /// 横坐标
    X,
    /// 纵坐标
    Y,
    /// 是否为仓库（根）顶点
    IsDepot,
}

impl VertexFunctionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexFunctionName::Prize => "prize",
            VertexFunctionName::X => "x",
            VertexFunctionName::Y => "y",
            VertexFunctionName::IsDepot => "is_depot",
        }
    }
}

impl fmt::Display for VertexFunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 常用边属性名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeFunctionName {
    /// 经过边的代价
    Cost,
    /// 边的长度/权重
    Weight,
    /// 拆分边对应的原始边
    OldEdge,
}

impl EdgeFunctionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeFunctionName::Cost => "cost",
            EdgeFunctionName::Weight => "weight",
            EdgeFunctionName::OldEdge => "old_edge",
        }
    }
}

impl fmt::Display for EdgeFunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 图级元数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphMeta {
    pub name: Option<String>,
    pub comment: Option<String>,
    /// 根（仓库）顶点
    pub root: Option<VertexId>,
    /// 问题规模（顶点数）
    pub dimension: Option<usize>,
    /// 其他图级属性
    #[serde(default)]
    pub extra: Properties,
}

impl GraphMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
