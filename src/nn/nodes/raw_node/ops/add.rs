use crate::nn::GraphError;
use crate::nn::nodes::raw_node::TraitNode;
use crate::tensor::Tensor;

/// 加法节点：`a + b`，支持 NumPy 风格广播（如 `[batch, out] + [1, out]` 的偏置）
///
/// backward: 上游梯度对被广播的维度求和，还原为各父节点的形状
pub(crate) struct Add;

impl TraitNode for Add {
    fn type_name(&self) -> &'static str {
        "Add"
    }

    fn parents_count(&self) -> usize {
        2
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let (a, b) = (parents[0], parents[1]);
        if !a.can_broadcast_with(b) {
            return Err(GraphError::ShapeMismatch {
                expected: a.shape().to_vec(),
                got: b.shape().to_vec(),
                message: "Add节点的两个父节点形状无法广播".to_string(),
            });
        }
        Ok(a + b)
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        Ok(upstream_grad.sum_to_shape(parents[parent_index].shape())?)
    }
}
