/*
 * @Description  : 生成器与判别器共同的能力：在图上前向传播，并暴露可训练参数
 */

use serde::{Deserialize, Serialize};

use crate::nn::{Graph, GraphError, Module, Var};
use crate::tensor::Tensor;

/// 可参与对抗训练的网络
///
/// 生成器与判别器须建在同一个`Graph`上：生成器的更新要让梯度穿过判别器流回生成器。
/// 参数名在图中唯一，存档时据此匹配。
pub trait Network: Module {
    fn graph(&self) -> &Graph;

    fn forward(&self, input: &Var) -> Result<Var, GraphError>;
}

/// 计算设备。目前只有 CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
}

impl Device {
    /// 把主机上的张量放到设备上，作为`graph`中的输入节点
    pub fn input(self, graph: &Graph, tensor: &Tensor) -> Result<Var, GraphError> {
        match self {
            Self::Cpu => graph.input(tensor),
        }
    }

    /// 在设备上采样标准正态分布的输入（使用图的 RNG）
    pub fn randn(self, graph: &Graph, shape: &[usize]) -> Result<Var, GraphError> {
        match self {
            Self::Cpu => graph.randn(shape),
        }
    }
}

pub(crate) fn ensure_shared_graph<D, G>(discriminator: &D, generator: &G) -> Result<(), GraphError>
where
    D: Network + ?Sized,
    G: Network + ?Sized,
{
    if discriminator.graph().same_graph(generator.graph()) {
        Ok(())
    } else {
        Err(GraphError::InvalidOperation(
            "生成器与判别器必须建在同一个图上".to_string(),
        ))
    }
}
