/*
 * @Description  : Graph 句柄（用户级 API）
 */

use super::error::GraphError;
use super::inner::GraphInner;
use crate::nn::NodeId;
use crate::nn::var::{Init, Var};
use crate::tensor::Tensor;
use std::cell::RefCell;
use std::rc::Rc;

/// Graph - 计算图句柄（PyTorch 风格用户 API）
///
/// - 是 `Rc<RefCell<GraphInner>>` 的薄封装，Clone 后引用同一个 GraphInner
/// - 创建的 Var 自动持有图引用
/// - 生成器与判别器可共享同一个图，各自的优化器只更新各自的参数
#[derive(Clone)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl Graph {
    // ==================== 创建 ====================

    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    /// 创建带种子的图（用于确定性训练）
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_inner(GraphInner::new_with_seed(seed))
    }

    pub fn from_inner(inner: GraphInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub(crate) const fn from_rc(inner: Rc<RefCell<GraphInner>>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> std::cell::Ref<'_, GraphInner> {
        self.inner.borrow()
    }

    pub fn inner_mut(&self) -> std::cell::RefMut<'_, GraphInner> {
        self.inner.borrow_mut()
    }

    pub(crate) fn inner_rc(&self) -> Rc<RefCell<GraphInner>> {
        Rc::clone(&self.inner)
    }

    /// 将 NodeId 包装成 Var
    pub fn wrap_node_id(&self, node_id: NodeId) -> Var {
        Var::new(node_id, self.inner_rc())
    }

    /// 两个句柄是否指向同一个图
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ==================== 创建变量 ====================

    /// 创建输入节点并设置数据
    pub fn input(&self, data: &Tensor) -> Result<Var, GraphError> {
        let node_id = self.inner.borrow_mut().new_input_node(data, None)?;
        Ok(self.wrap_node_id(node_id))
    }

    /// 创建参数节点（若图带种子则初始化可复现）
    pub fn parameter(&self, shape: &[usize], init: Init, name: &str) -> Result<Var, GraphError> {
        let mut g = self.inner.borrow_mut();
        let init_data = g.with_rng(|rng| init.generate_with_rng(shape, rng));
        let node_id = g.new_parameter_node(&init_data, Some(name))?;
        Ok(Var::new(node_id, Rc::clone(&self.inner)))
    }

    pub fn zeros(&self, shape: &[usize]) -> Result<Var, GraphError> {
        self.input(&Tensor::zeros(shape))
    }

    pub fn ones(&self, shape: &[usize]) -> Result<Var, GraphError> {
        self.input(&Tensor::ones(shape))
    }

    /// 创建服从标准正态分布的随机输入（使用图的 RNG）
    pub fn randn(&self, shape: &[usize]) -> Result<Var, GraphError> {
        let data = self.inner.borrow_mut().sample_standard_normal(shape);
        self.input(&data)
    }

    // ==================== 训练控制 ====================

    /// 清零所有参数的梯度
    pub fn zero_grad(&self) {
        self.inner.borrow_mut().clear_grad();
    }

    pub fn train(&self) {
        self.inner.borrow_mut().set_train_mode();
    }

    pub fn eval(&self) {
        self.inner.borrow_mut().set_eval_mode();
    }

    pub fn is_eval(&self) -> bool {
        !self.inner.borrow().is_train_mode()
    }

    /// 在 no_grad 上下文中执行闭包
    pub fn no_grad_scope<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        let was_train = !self.is_eval();
        self.eval();
        let result = f(self);
        if was_train {
            self.train();
        }
        result
    }

    /// 释放所有非参数节点（一般在推理结束后调用；反向传播会自动释放）
    pub fn release_intermediate_results(&self) {
        self.inner.borrow_mut().release_intermediate_results();
    }

    pub fn nodes_count(&self) -> usize {
        self.inner.borrow().nodes_count()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
