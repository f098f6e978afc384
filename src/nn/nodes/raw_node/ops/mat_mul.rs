use crate::nn::GraphError;
use crate::nn::nodes::raw_node::TraitNode;
use crate::tensor::Tensor;

/// 矩阵乘法节点：`C = A @ B`
///
/// backward:
/// - dA = G @ B^T
/// - dB = A^T @ G
pub(crate) struct MatMul;

impl TraitNode for MatMul {
    fn type_name(&self) -> &'static str {
        "MatMul"
    }

    fn parents_count(&self) -> usize {
        2
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        parents[0]
            .mat_mul(parents[1])
            .map_err(|_| GraphError::ShapeMismatch {
                expected: vec![parents[0].shape().last().copied().unwrap_or(0)],
                got: parents[1].shape().to_vec(),
                message: format!(
                    "MatMul节点要求左矩阵的列数等于右矩阵的行数，左矩阵形状为{:?}",
                    parents[0].shape()
                ),
            })
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let grad = match parent_index {
            0 => upstream_grad.mat_mul(&parents[1].transpose()?)?,
            _ => parents[0].transpose()?.mat_mul(upstream_grad)?,
        };
        Ok(grad)
    }
}
