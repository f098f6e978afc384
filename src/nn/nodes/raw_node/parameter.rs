use super::{TraitNode, leaf_node_error};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 参数节点：可训练的权重，其梯度在反向传播时累加到节点的 grad 上
pub(crate) struct Parameter;

impl TraitNode for Parameter {
    fn type_name(&self) -> &'static str {
        "Parameter"
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
