use crate::nn::GraphError;
use crate::nn::nodes::raw_node::TraitNode;
use crate::tensor::Tensor;

/// LeakyReLU 激活函数节点：x if x > 0 else alpha * x
///
/// 在 x == 0 处取 alpha 作为导数（与 PyTorch 一致）
pub(crate) struct LeakyRelu {
    alpha: f32,
}

impl LeakyRelu {
    pub(crate) const fn new(alpha: f32) -> Self {
        Self { alpha }
    }
}

impl TraitNode for LeakyRelu {
    fn type_name(&self) -> &'static str {
        "LeakyReLU"
    }

    fn parents_count(&self) -> usize {
        1
    }

    fn calc_value_by_parents(&self, parents: &[&Tensor]) -> Result<Tensor, GraphError> {
        Ok(parents[0].leaky_relu(self.alpha))
    }

    fn calc_grad_to_parent(
        &self,
        _parent_index: usize,
        parents: &[&Tensor],
        _value: &Tensor,
        upstream_grad: &Tensor,
    ) -> Result<Tensor, GraphError> {
        let alpha = self.alpha;
        let mask = parents[0].map(|x| if x > 0. { 1. } else { alpha });
        Ok(upstream_grad * &mask)
    }
}
