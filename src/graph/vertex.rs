//! 顶点定义
//!
//! 顶点由整数 ID 与属性映射组成，常用属性提供类型化访问器

use crate::types::{AttrValue, Properties, VertexFunctionName, VertexId};
use serde::{Deserialize, Serialize};

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 属性
    #[serde(default)]
    properties: Properties,
}

impl Vertex {
    /// 创建无属性顶点
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            properties: Properties::new(),
        }
    }

    /// 创建带属性的顶点
    pub fn with_properties(id: VertexId, properties: Properties) -> Self {
        Self { id, properties }
    }

    /// 创建带奖励的顶点
    pub fn with_prize(id: VertexId, prize: i64) -> Self {
        let mut v = Self::new(id);
        v.properties.insert(
            VertexFunctionName::Prize.as_str().to_string(),
            AttrValue::Int(prize),
        );
        v
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
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

    /// 复制属性到另一个 ID 的顶点
    pub fn relabeled(&self, id: VertexId) -> Self {
        Self {
            id,
            properties: self.properties.clone(),
        }
    }

    /// 整数奖励
    pub fn prize(&self) -> Option<i64> {
        self.properties
            .get(VertexFunctionName::Prize.as_str())
            .and_then(AttrValue::as_int)
    }

    /// 坐标 (x, y)，两个分量都存在时返回
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let x = self
            .properties
            .get(VertexFunctionName::X.as_str())
            .and_then(AttrValue::as_float)?;
        let y = self
            .properties
            .get(VertexFunctionName::Y.as_str())
            .and_then(AttrValue::as_float)?;
        Some((x, y))
    }

    /// 是否为仓库顶点
    pub fn is_depot(&self) -> bool {
        self.properties
            .get(VertexFunctionName::IsDepot.as_str())
            .and_then(AttrValue::as_bool)
            .unwrap_or(false)
    }
}
