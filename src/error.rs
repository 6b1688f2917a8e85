//! 错误类型定义

use crate::types::{EdgeKey, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图为空: 至少需要一个顶点")]
    EmptyGraph,

    #[error("无效的拆分顶点: {vertex} 既不是 tail 也不是 head (最大原始顶点 {biggest})")]
    InvalidSplitVertex { vertex: VertexId, biggest: VertexId },

    #[error("顶点 {0} 上出现 key 大于 0 的自环: 同一顶点上存在多个自环")]
    UnexpectedSelfLoop(VertexId),

    #[error("边 ({src}, {dst}) 的 key 为负数: {key}")]
    NegativeEdgeKey {
        src: VertexId,
        dst: VertexId,
        key: EdgeKey,
    },

    #[error("哑顶点 {0} 已存在: 同一顶点的多条平行边使用了相同的 key")]
    DummyVertexCollision(VertexId),

    #[error("边列表不是简单路径或简单环: {0}")]
    NotSimple(String),

    #[error("边列表不是简单环: {0}")]
    NotSimpleCycle(String),

    #[error("边列表不是简单路径: {0}")]
    NotSimplePath(String),

    #[error("第 {index} 条边 ({src}, {dst}) 不包含当前顶点 {current}")]
    EdgesNotAdjacent {
        index: usize,
        src: VertexId,
        dst: VertexId,
        current: VertexId,
    },

    #[error("边列表中不存在节点: {0}")]
    NodeNotFound(VertexId),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("图类型不匹配: {0}")]
    InvalidGraphKind(String),

    #[error("顶点 ID 不能为负数: {0}")]
    NegativeVertex(VertexId),

    #[error("无效的属性 {name}: {reason}")]
    InvalidAttribute { name: String, reason: String },

    #[error("无效的输入: {0}")]
    InvalidInput(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("日志初始化失败: {0}")]
    LoggingError(String),
}

impl Error {
    /// 是否属于"非简单路径/环"类错误
    pub fn is_not_simple(&self) -> bool {
        matches!(
            self,
            Error::NotSimple(_) | Error::NotSimpleCycle(_) | Error::NotSimplePath(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_simple_family() {
        assert!(Error::NotSimple("x".into()).is_not_simple());
        assert!(Error::NotSimpleCycle("x".into()).is_not_simple());
        assert!(Error::NotSimplePath("x".into()).is_not_simple());
        assert!(!Error::NodeNotFound(1).is_not_simple());
    }

    #[test]
    fn test_edges_not_adjacent_message() {
        let err = Error::EdgesNotAdjacent {
            index: 1,
            src: 2,
            dst: 3,
            current: 1,
        };
        let message = err.to_string();
        assert!(message.contains("(2, 3)"));
        assert!(message.contains('1'));
    }
}
