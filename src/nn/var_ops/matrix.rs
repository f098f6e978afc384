use crate::nn::nodes::raw_node::MatMul;
use crate::nn::{GraphError, Var};
use std::rc::Rc;

/// 矩阵运算扩展 trait
pub trait VarMatrixOps {
    /// 矩阵乘法：[m, k] @ [k, n] = [m, n]
    fn matmul(&self, other: &Var) -> Result<Var, GraphError>;
}

impl VarMatrixOps for Var {
    fn matmul(&self, other: &Var) -> Result<Var, GraphError> {
        self.check_same_graph(other)?;
        let id = self
            .graph()
            .borrow_mut()
            .new_op_node(MatMul, &[self.node_id(), other.node_id()], None)?;
        Ok(Self::new(id, Rc::clone(self.graph())))
    }
}
