use super::{TraitNode, leaf_node_error};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 输入节点：数据、目标值、常量及 detach 后的副本。不参与梯度计算
pub(crate) struct Input;

impl TraitNode for Input {
    fn type_name(&self) -> &'static str {
        "Input"
    }

    fn parents_count(&self) -> usize {
        0
    }

    fn calc_value_by_parents(&self, _parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Err(leaf_node_error(self.type_name()))
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        _parents: &[&Tensor],
        _value: &Tensor,
        _upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Err(leaf_node_error(self.type_name()))
    }
}
