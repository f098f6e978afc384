/*
 * @Description  : Optimizer API - PyTorch 风格
 *
 * - Optimizer 持有 Rc<RefCell<GraphInner>> 引用，并绑定一组参数（Var）
 * - zero_grad()/step() 只作用于绑定的参数：同一个图上的两个优化器互不干扰
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::nn::graph::GraphInner;
use crate::nn::{Graph, GraphError, NodeId, Var};
use crate::tensor::Tensor;

/// Optimizer trait（PyTorch 风格）
///
/// ```ignore
/// optimizer.zero_grad()?;
/// let loss = model.forward(&x)?.bce_loss(&y)?;
/// loss.backward()?;
/// optimizer.step()?;
/// ```
pub trait Optimizer {
    /// 清零所绑定参数的梯度
    fn zero_grad(&mut self) -> Result<(), GraphError>;

    /// 更新参数（只更新 Optimizer 绑定的参数；没有梯度的参数保持不变）
    fn step(&mut self) -> Result<(), GraphError>;

    fn learning_rate(&self) -> f32;
}

/// Adam 优化器（PyTorch 风格）
///
/// Adam: Adaptive Moment Estimation
/// - m = β1 * m + (1 - β1) * g
/// - v = β2 * v + (1 - β2) * g²
/// - θ = θ - α * `m_hat` / (√`v_hat` + ε)
pub struct Adam {
    graph: Rc<RefCell<GraphInner>>,
    params: Vec<Var>,
    lr: f32,
    /// β1 (一阶矩衰减)
    beta1: f32,
    /// β2 (二阶矩衰减)
    beta2: f32,
    /// 数值稳定项
    epsilon: f32,
    /// 一阶矩估计（按 `NodeId` 索引）
    m: HashMap<NodeId, Tensor>,
    /// 二阶矩估计（按 `NodeId` 索引）
    v: HashMap<NodeId, Tensor>,
    /// 时间步
    t: usize,
}

impl Adam {
    /// 使用默认超参数（β1=0.9, β2=0.999, ε=1e-8）创建
    pub fn new(graph: &Graph, params: &[Var], lr: f32) -> Self {
        Self::new_with_config(graph, params, lr, 0.9, 0.999, 1e-8)
    }

    pub fn new_with_config(
        graph: &Graph,
        params: &[Var],
        lr: f32,
        beta1: f32,
        beta2: f32,
        epsilon: f32,
    ) -> Self {
        Self {
            graph: graph.inner_rc(),
            params: params.to_vec(),
            lr,
            beta1,
            beta2,
            epsilon,
            m: HashMap::new(),
            v: HashMap::new(),
            t: 0,
        }
    }

    /// 获取优化器绑定的参数列表
    pub fn params(&self) -> &[Var] {
        &self.params
    }

    pub const fn betas(&self) -> (f32, f32) {
        (self.beta1, self.beta2)
    }

    pub const fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// 已执行的 step 次数
    pub const fn step_count(&self) -> usize {
        self.t
    }
}

impl Optimizer for Adam {
    fn zero_grad(&mut self) -> Result<(), GraphError> {
        let mut g = self.graph.borrow_mut();
        for param in &self.params {
            g.clear_node_grad(param.node_id())?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), GraphError> {
        self.t += 1;
        let bias_correction1 = 1.0 - self.beta1.powi(self.t as i32);
        let bias_correction2 = 1.0 - self.beta2.powi(self.t as i32);

        let mut g = self.graph.borrow_mut();
        for param in &self.params {
            let node_id = param.node_id();
            let Some(grad) = g.get_node_grad(node_id)?.cloned() else {
                continue;
            };

            // m = β1 * m + (1 - β1) * g
            let m = self
                .m
                .entry(node_id)
                .or_insert_with(|| Tensor::zeros(grad.shape()));
            *m *= self.beta1;
            *m += &grad * (1.0 - self.beta1);

            // v = β2 * v + (1 - β2) * g²
            let v = self
                .v
                .entry(node_id)
                .or_insert_with(|| Tensor::zeros(grad.shape()));
            *v *= self.beta2;
            *v += &(&grad * &grad) * (1.0 - self.beta2);

            let m_hat = &*m / bias_correction1;
            let v_hat = &*v / bias_correction2;
            let update = &m_hat / &(v_hat.sqrt() + self.epsilon);

            let new_value = g.get_node_value(node_id)? - &(update * self.lr);
            g.set_node_value(node_id, &new_value)?;
        }
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }
}
