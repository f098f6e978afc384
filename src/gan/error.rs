use thiserror::Error;

use crate::data::DataError;
use crate::nn::{CheckpointError, GraphError};
use crate::vision::VisionError;

/// 对抗训练过程中的错误；任何一个都会中止`fit`
#[derive(Error, Debug)]
pub enum GanError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("参数存档失败：{0}")]
    Checkpoint(#[from] CheckpointError),
    #[error("样本图写出失败：{0}")]
    Vision(#[from] VisionError),
    #[error("IO 错误：{0}")]
    Io(#[from] std::io::Error),
    #[error("第{epoch}个 epoch 的数据源没有产出任何批次")]
    EmptyEpoch { epoch: usize },
    #[error("训练配置无效：{0}")]
    InvalidConfig(String),
}
