use std::fmt;

use serde::{Deserialize, Serialize};

use super::raw_node::{NodeType, TraitNode};
use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 节点在图中的唯一标识。图内单调递增分配，故父节点的 id 总是小于子节点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 图中节点的存储单元：公共部分（id、名称、父节点、值、梯度）+ 具体节点类型
pub(crate) struct NodeHandle {
    id: NodeId,
    name: String,
    raw_node: NodeType,
    parents: Vec<NodeId>,
    value: Option<Tensor>,
    grad: Option<Tensor>,
}

impl NodeHandle {
    pub(crate) fn new<T: Into<NodeType>>(
        id: NodeId,
        name: &str,
        raw_node: T,
        parents: Vec<NodeId>,
        value: Tensor,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            raw_node: raw_node.into(),
            parents,
            value: Some(value),
            grad: None,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) const fn node_type(&self) -> &NodeType {
        &self.raw_node
    }

    pub(crate) fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub(crate) fn is_parameter(&self) -> bool {
        matches!(self.raw_node, NodeType::Parameter(_))
    }

    pub(crate) fn is_input(&self) -> bool {
        matches!(self.raw_node, NodeType::Input(_))
    }

    pub(crate) const fn value(&self) -> Option<&Tensor> {
        self.value.as_ref()
    }

    /// 只有输入、参数节点允许手动设置值，且形状不可改变
    pub(crate) fn set_value(&mut self, value: &Tensor) -> Result<(), GraphError> {
        if !self.is_parameter() && !self.is_input() {
            return Err(GraphError::InvalidOperation(format!(
                "{self}的值由父节点计算得到，不应该被手动设置"
            )));
        }
        if let Some(old) = &self.value {
            if old.shape() != value.shape() {
                return Err(GraphError::ShapeMismatch {
                    expected: old.shape().to_vec(),
                    got: value.shape().to_vec(),
                    message: format!("{self}的新值形状与原值不一致"),
                });
            }
        }
        self.value = Some(value.clone());
        Ok(())
    }

    pub(crate) const fn grad(&self) -> Option<&Tensor> {
        self.grad.as_ref()
    }

    pub(crate) fn clear_grad(&mut self) {
        self.grad = None;
    }

    /// 把`grad`累加到本节点已有的梯度上（没有则直接存入）
    pub(crate) fn accumulate_grad(&mut self, grad: &Tensor) -> Result<(), GraphError> {
        let expected = self.value.as_ref().map(|v| v.shape().to_vec());
        if let Some(expected) = expected {
            if expected != grad.shape() {
                return Err(GraphError::ShapeMismatch {
                    expected,
                    got: grad.shape().to_vec(),
                    message: format!("{self}收到的梯度形状与其值不一致"),
                });
            }
        }
        match self.grad.as_mut() {
            Some(existing) => *existing += grad,
            None => self.grad = Some(grad.clone()),
        }
        Ok(())
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "节点[id={}, name={}, type={}]",
            self.id.0,
            self.name,
            self.raw_node.type_name()
        )
    }
}
