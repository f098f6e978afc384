use thiserror::Error;

use crate::errors::TensorError;
use crate::nn::NodeId;

/// Graph 操作错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("节点{0}不存在（可能已在反向传播后被释放）")]
    NodeNotFound(NodeId),
    #[error("无效操作：{0}")]
    InvalidOperation(String),
    #[error("形状不匹配：期望{expected:?}，实际{got:?}。{message}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    #[error("计算错误：{0}")]
    ComputationError(String),
    #[error("节点名重复：{0}")]
    DuplicateNodeName(String),
}

impl From<TensorError> for GraphError {
    fn from(e: TensorError) -> Self {
        Self::ComputationError(e.to_string())
    }
}
