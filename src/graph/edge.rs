//! 边定义
//!
//! 边连接两个顶点，带平行边 key 与属性映射

use crate::types::{AttrValue, EdgeFunctionName, EdgeKey, EdgePair, Properties, VertexId};
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点 ID
    src: VertexId,
    /// 目标顶点 ID
    dst: VertexId,
    /// 平行边 key（简单图中为 0）
    #[serde(default)]
    key: EdgeKey,
    /// 属性
    #[serde(default)]
    properties: Properties,
}

impl Edge {
    /// 创建新边
    pub fn new(src: VertexId, dst: VertexId) -> Self {
        Self::with_properties(src, dst, Properties::new())
    }

    /// 创建带属性的边
    pub fn with_properties(src: VertexId, dst: VertexId, properties: Properties) -> Self {
        Self {
            src,
            dst,
            key: 0,
            properties,
        }
    }

    /// 创建带代价的边
    pub fn with_cost(src: VertexId, dst: VertexId, cost: AttrValue) -> Self {
        let mut e = Self::new(src, dst);
        e.properties
            .insert(EdgeFunctionName::Cost.as_str().to_string(), cost);
        e
    }

    pub(crate) fn with_key(mut self, key: EdgeKey) -> Self {
        self.key = key;
        self
    }

    /// 获取源顶点 ID
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 以顶点对形式返回
    pub fn pair(&self) -> EdgePair {
        (self.src, self.dst)
    }

    /// 平行边 key
    pub fn key(&self) -> EdgeKey {
        self.key
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }

    /// 获取属性
    pub fn property(&self, key: &str) -> Option<&AttrValue> {
        self.properties.get(key)
    }

    /// 设置属性
    pub fn set_property(&mut self, key: impl Into<String>, value: AttrValue) {
        self.properties.insert(key.into(), value);
    }

    /// 移除属性
    pub fn remove_property(&mut self, key: &str) -> Option<AttrValue> {
        self.properties.shift_remove(key)
    }

    /// 获取所有属性
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// 代价（整数代价转为 f64）
    pub fn cost(&self) -> Option<f64> {
        self.properties
            .get(EdgeFunctionName::Cost.as_str())
            .and_then(AttrValue::as_float)
    }

    /// 拆分边指向的原始边
    pub fn old_edge(&self) -> Option<EdgePair> {
        self.properties
            .get(EdgeFunctionName::OldEdge.as_str())
            .and_then(AttrValue::as_edge)
    }

    /// 反向边（属性相同）
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            key: self.key,
            properties: self.properties.clone(),
        }
    }
}
