use crate::nn::nodes::raw_node::{LeakyRelu, Sigmoid, Tanh};
use crate::nn::{GraphError, Var};
use std::rc::Rc;

/// 激活函数扩展 trait
pub trait VarActivationOps {
    /// Sigmoid 激活：1 / (1 + exp(-x))
    fn sigmoid(&self) -> Result<Var, GraphError>;

    /// Tanh 激活
    fn tanh(&self) -> Result<Var, GraphError>;

    /// `LeakyReLU` 激活：x if x > 0 else alpha * x
    fn leaky_relu(&self, alpha: f32) -> Result<Var, GraphError>;
}

impl VarActivationOps for Var {
    fn sigmoid(&self) -> Result<Var, GraphError> {
        let id = self
            .graph()
            .borrow_mut()
            .new_op_node(Sigmoid, &[self.node_id()], None)?;
        Ok(Self::new(id, Rc::clone(self.graph())))
    }

    fn tanh(&self) -> Result<Var, GraphError> {
        let id = self
            .graph()
            .borrow_mut()
            .new_op_node(Tanh, &[self.node_id()], None)?;
        Ok(Self::new(id, Rc::clone(self.graph())))
    }

    fn leaky_relu(&self, alpha: f32) -> Result<Var, GraphError> {
        let id = self
            .graph()
            .borrow_mut()
            .new_op_node(LeakyRelu::new(alpha), &[self.node_id()], None)?;
        Ok(Self::new(id, Rc::clone(self.graph())))
    }
}
