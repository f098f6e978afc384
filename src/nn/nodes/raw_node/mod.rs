mod input;
mod loss;
mod ops;
mod parameter;

pub(crate) use input::Input;
pub(crate) use loss::BceLoss;
pub(crate) use ops::{Add, LeakyRelu, MatMul, Sigmoid, Tanh};
pub(crate) use parameter::Parameter;

use enum_dispatch::enum_dispatch;

use crate::nn::GraphError;
use crate::tensor::Tensor;

#[enum_dispatch]
pub(crate) enum NodeType {
    Input(Input),
    Parameter(Parameter),
    Add(Add),
    MatMul(MatMul),
    Sigmoid(Sigmoid),
    Tanh(Tanh),
    LeakyRelu(LeakyRelu),
    BceLoss(BceLoss),
}

#[enum_dispatch(NodeType)]
pub(crate) trait TraitNode {
    /// 节点类型名，用于生成默认节点名及错误信息
    fn type_name(&self) -> &'static str;

    /// 父节点应有的个数（叶子节点为0）
    fn parents_count(&self) -> usize;

    /// 根据父节点的值计算本节点的值
    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError>;

    /// VJP：给定上游梯度`upstream_grad`（与本节点值同形状），计算对第`parent_index`个父节点的梯度
    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError>;
}

/// 叶子节点（输入、参数）的公共报错
fn leaf_node_error(type_name: &str) -> GraphError {
    GraphError::InvalidOperation(format!(
        "{type_name}节点没有父节点。不该触及本错误，否则说明crate代码有问题"
    ))
}
