/*
 * @Description  : 二元交叉熵（Binary Cross Entropy）损失节点，均值归约
 *
 * loss = -mean( t * ln(p) + (1 - t) * ln(1 - p) )
 *
 * 与 PyTorch 的 BCELoss 一致：
 * - ln 的结果被截断到不低于 -100，p 恰为 0 或 1 时损失仍为有限值
 * - 对 p 的梯度为 (p - t) / max(p * (1 - p), 1e-12) / N
 */

use crate::nn::GraphError;
use crate::nn::nodes::raw_node::TraitNode;
use crate::tensor::Tensor;

const LOG_CLAMP: f32 = -100.;
const GRAD_EPSILON: f32 = 1e-12;

/// 父节点顺序：[预测概率 p, 目标 t]，两者形状必须一致；输出形状为 [1, 1]
pub(crate) struct BceLoss;

fn clamped_ln(x: f32) -> f32 {
    x.ln().max(LOG_CLAMP)
}

impl TraitNode for BceLoss {
    fn type_name(&self) -> &'static str {
        "BCELoss"
    }

    fn parents_count(&self) -> usize {
        2
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        let (prediction, target) = (parents[0], parents[1]);
        if !prediction.is_same_shape(target) {
            return Err(GraphError::ShapeMismatch {
                expected: prediction.shape().to_vec(),
                got: target.shape().to_vec(),
                message: "BCELoss的目标值形状必须与预测值一致".to_string(),
            });
        }
        let elementwise = prediction.zip_map(target, |p, t| {
            -(t * clamped_ln(p) + (1. - t) * clamped_ln(1. - p))
        })?;
        Ok(Tensor::new(&[elementwise.mean()], &[1, 1]))
    }

    fn calc_grad_to_parent(
        &self,
        parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let (prediction, target) = (parents[0], parents[1]);
        let upstream = upstream_grad.number().ok_or_else(|| {
            GraphError::ComputationError("BCELoss的上游梯度必须是标量".to_string())
        })?;
        let n = prediction.size().max(1) as f32;

        let grad = match parent_index {
            0 => prediction.zip_map(target, |p, t| {
                upstream * (p - t) / (p * (1. - p)).max(GRAD_EPSILON) / n
            })?,
            _ => prediction.map(|p| upstream * (clamped_ln(1. - p) - clamped_ln(p)) / n),
        };
        Ok(grad)
    }
}
