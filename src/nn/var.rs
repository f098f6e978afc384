/*
 * @Description  : Smart Var - 智能变量句柄，支持链式调用
 */

use super::graph::{Graph, GraphInner};
use super::nodes::raw_node::Add;
use super::{GraphError, NodeId};
use crate::tensor::Tensor;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

// ==================== Init 枚举 ====================

/// 参数初始化策略
#[derive(Debug, Clone)]
pub enum Init {
    /// 常数初始化
    Constant(f32),
    /// 全零
    Zeros,
    /// 全一
    Ones,
    /// 正态分布（使用 Graph 的 RNG）
    Normal { mean: f32, std: f32 },
    /// Kaiming/He 初始化（适用于 `ReLU` 族）
    Kaiming,
    /// Xavier/Glorot 初始化（适用于 Sigmoid/Tanh）
    Xavier,
}

impl Init {
    /// 生成初始化后的 Tensor（使用指定的 RNG）
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, shape: &[usize], rng: &mut R) -> Tensor {
        match self {
            Self::Constant(v) => Tensor::full(*v, shape),
            Self::Zeros => Tensor::zeros(shape),
            Self::Ones => Tensor::ones(shape),
            Self::Normal { mean, std } => Tensor::normal_with_rng(*mean, *std, shape, rng),
            Self::Kaiming => {
                let fan_in = shape.first().copied().unwrap_or(1).max(1);
                let std = (2.0 / fan_in as f32).sqrt();
                Tensor::normal_with_rng(0.0, std, shape, rng)
            }
            Self::Xavier => {
                let (fan_in, fan_out) = (
                    shape.first().copied().unwrap_or(1),
                    shape.get(1).copied().unwrap_or(1),
                );
                let std = (2.0 / (fan_in + fan_out).max(1) as f32).sqrt();
                Tensor::normal_with_rng(0.0, std, shape, rng)
            }
        }
    }
}

// ==================== Var 结构 ====================

/// 智能变量句柄 - 携带图引用，支持链式调用
///
/// Clone 语义（非 Copy），开销仅为一次 Rc clone。
///
/// ```ignore
/// let graph = Graph::new();
/// let x = graph.input(&images)?;
/// let h = x.matmul(&w)?.leaky_relu(0.2)?;
/// let loss = h.sigmoid()?.bce_loss(&target)?;
/// loss.backward()?;
/// ```
#[derive(Clone)]
pub struct Var {
    id: NodeId,
    graph: Rc<RefCell<GraphInner>>,
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Var").field("id", &self.id).finish()
    }
}

impl Var {
    pub(crate) const fn new(id: NodeId, graph: Rc<RefCell<GraphInner>>) -> Self {
        Self { id, graph }
    }

    pub const fn node_id(&self) -> NodeId {
        self.id
    }

    pub(crate) const fn graph(&self) -> &Rc<RefCell<GraphInner>> {
        &self.graph
    }

    /// 检查两个 Var 是否来自同一个 Graph
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph)
    }

    pub(crate) fn check_same_graph(&self, other: &Self) -> Result<(), GraphError> {
        if self.same_graph(other) {
            Ok(())
        } else {
            Err(GraphError::InvalidOperation(format!(
                "节点{}与节点{}不在同一个图中",
                self.id, other.id
            )))
        }
    }

    /// 获取 Var 所属的 Graph handle
    pub fn get_graph(&self) -> Graph {
        Graph::from_rc(Rc::clone(&self.graph))
    }

    pub fn name(&self) -> Result<String, GraphError> {
        Ok(self.graph.borrow().get_node_name(self.id)?.to_string())
    }

    // ==================== 值与梯度 ====================

    /// 获取节点的值（克隆）
    pub fn value(&self) -> Result<Tensor, GraphError> {
        Ok(self.graph.borrow().get_node_value(self.id)?.clone())
    }

    pub fn value_shape(&self) -> Result<Vec<usize>, GraphError> {
        Ok(self.graph.borrow().get_node_value(self.id)?.shape().to_vec())
    }

    /// 设置节点的值（仅限输入、参数节点，且形状不可改变）
    pub fn set_value(&self, value: &Tensor) -> Result<(), GraphError> {
        self.graph.borrow_mut().set_node_value(self.id, value)
    }

    /// 获取标量节点的值
    pub fn item(&self) -> Result<f32, GraphError> {
        let g = self.graph.borrow();
        let value = g.get_node_value(self.id)?;
        value.number().ok_or_else(|| {
            GraphError::InvalidOperation(format!(
                "item() 只适用于标量节点，但节点{}的形状为{:?}",
                self.id,
                value.shape()
            ))
        })
    }

    /// 获取节点的梯度（克隆），尚未反向传播过则为 None
    pub fn grad(&self) -> Result<Option<Tensor>, GraphError> {
        Ok(self.graph.borrow().get_node_grad(self.id)?.cloned())
    }

    // ==================== 执行 ====================

    /// 以本节点为损失做反向传播，返回损失值。之后图中的非参数节点均被释放
    pub fn backward(&self) -> Result<f32, GraphError> {
        self.graph.borrow_mut().backward(self.id)
    }

    /// 返回一个持有当前值副本的新输入节点，梯度不会经由它流回本节点
    pub fn detach(&self) -> Result<Self, GraphError> {
        let id = self.graph.borrow_mut().detach_node(self.id)?;
        Ok(Self::new(id, Rc::clone(&self.graph)))
    }

    /// 逐元素相加（支持广播）
    pub fn try_add(&self, other: &Self) -> Result<Self, GraphError> {
        self.check_same_graph(other)?;
        let id = self
            .graph
            .borrow_mut()
            .new_op_node(Add, &[self.id, other.id], None)?;
        Ok(Self::new(id, Rc::clone(&self.graph)))
    }
}
