use crate::nn::nodes::raw_node::BceLoss;
use crate::nn::{GraphError, Var};
use std::rc::Rc;

/// 损失函数扩展 trait
///
/// ```ignore
/// let loss = prediction.bce_loss(&target)?;
/// ```
pub trait VarLossOps {
    /// Binary Cross Entropy（均值归约）。`self`须为概率（如 sigmoid 的输出），
    /// `target`与之同形状，返回形状为 [1, 1] 的标量损失节点
    fn bce_loss(&self, target: &Var) -> Result<Var, GraphError>;
}

impl VarLossOps for Var {
    fn bce_loss(&self, target: &Var) -> Result<Var, GraphError> {
        self.check_same_graph(target)?;
        let id = self
            .graph()
            .borrow_mut()
            .new_op_node(BceLoss, &[self.node_id(), target.node_id()], None)?;
        Ok(Self::new(id, Rc::clone(self.graph())))
    }
}
