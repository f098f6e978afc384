/*
 * @Description  : GraphInner train/eval 模式、detach 机制
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::NodeId;

impl GraphInner {
    pub const fn set_train_mode(&mut self) {
        self.is_eval_mode = false;
    }

    pub const fn set_eval_mode(&mut self) {
        self.is_eval_mode = true;
    }

    pub const fn is_train_mode(&self) -> bool {
        !self.is_eval_mode
    }

    /// 复制节点当前的值为一个新的输入节点，反向传播到此为止
    pub fn detach_node(&mut self, node_id: NodeId) -> Result<NodeId, GraphError> {
        let value = self.get_node_value(node_id)?.clone();
        self.new_input_node(&value, None)
    }

    /// no_grad 上下文
    pub fn no_grad_scope<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let was_train = self.is_train_mode();
        self.set_eval_mode();
        let result = f(self);
        if was_train {
            self.set_train_mode();
        }
        result
    }
}
