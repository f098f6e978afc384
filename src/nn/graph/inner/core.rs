/*
 * @Description  : GraphInner 核心操作 + 前向传播
 *
 * 前向传播是即时（eager）的：运算节点在创建时即根据父节点的值算出自身的值。
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::NodeId;
use crate::nn::nodes::{NodeHandle, NodeType, TraitNode};
use crate::nn::nodes::raw_node::{Input, Parameter};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashMap;

impl GraphInner {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_graph")
    }

    /// 创建一个带固定种子的计算图（确保可重复性）
    pub fn new_with_seed(seed: u64) -> Self {
        let mut graph = Self::new();
        graph.rng = Some(StdRng::seed_from_u64(seed));
        graph
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: HashMap::new(),
            next_id: 0,
            is_eval_mode: false,
            rng: None,
        }
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub(in crate::nn) fn get_node(&self, id: NodeId) -> Result<&NodeHandle, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(in crate::nn) fn get_node_mut(&mut self, id: NodeId) -> Result<&mut NodeHandle, GraphError> {
        self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn get_node_name(&self, id: NodeId) -> Result<&str, GraphError> {
        Ok(self.get_node(id)?.name())
    }

    pub fn get_node_value(&self, id: NodeId) -> Result<&Tensor, GraphError> {
        let node = self.get_node(id)?;
        node.value().ok_or_else(|| {
            GraphError::ComputationError(format!("{node}没有值。不该触及本错误，否则说明crate代码有问题"))
        })
    }

    pub fn set_node_value(&mut self, id: NodeId, value: &Tensor) -> Result<(), GraphError> {
        self.get_node_mut(id)?.set_value(value)
    }

    pub fn get_node_grad(&self, id: NodeId) -> Result<Option<&Tensor>, GraphError> {
        let node = self.get_node(id)?;
        if node.is_input() {
            return Err(GraphError::InvalidOperation(format!(
                "输入{node}不应该有梯度"
            )));
        }
        Ok(node.grad())
    }

    // ========== ID/名称生成 ==========

    fn generate_valid_node_id(&mut self) -> NodeId {
        // 先递增再返回，所以第一个节点 ID 是 1
        self.next_id += 1;
        NodeId(self.next_id)
    }

    fn check_duplicate_node_name(&self, name: &str) -> Result<(), GraphError> {
        if self.nodes.values().any(|node| node.name() == name) {
            return Err(GraphError::DuplicateNodeName(format!(
                "节点{}在图{}中重复",
                name,
                self.name()
            )));
        }
        Ok(())
    }

    /// 未指定名称时生成形如`MatMul_12`的名称，id 唯一故名称也唯一
    fn generate_valid_new_node_name(
        &self,
        name: Option<&str>,
        type_name: &str,
        id: NodeId,
    ) -> Result<String, GraphError> {
        match name {
            Some(name) if !name.is_empty() => {
                self.check_duplicate_node_name(name)?;
                Ok(name.to_string())
            }
            _ => Ok(format!("{type_name}_{}", id.0)),
        }
    }

    // ========== 随机数 ==========

    /// 使用图的 RNG（若有种子）或线程 RNG 执行采样
    pub fn with_rng<T>(&mut self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self.rng.as_mut() {
            Some(rng) => f(rng),
            None => f(&mut rand::thread_rng()),
        }
    }

    /// 采样一个服从标准正态分布的张量
    pub fn sample_standard_normal(&mut self, shape: &[usize]) -> Tensor {
        self.with_rng(|rng| Tensor::normal_with_rng(0., 1., shape, rng))
    }

    // ========== 节点创建（即前向传播） ==========

    fn insert_node<T: Into<NodeType>>(
        &mut self,
        raw_node: T,
        parents: Vec<NodeId>,
        value: Tensor,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let raw_node: NodeType = raw_node.into();
        let id = self.generate_valid_node_id();
        let name = self.generate_valid_new_node_name(name, raw_node.type_name(), id)?;
        self.nodes
            .insert(id, NodeHandle::new(id, &name, raw_node, parents, value));
        Ok(id)
    }

    pub fn new_input_node(&mut self, value: &Tensor, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.insert_node(Input, vec![], value.clone(), name)
    }

    pub fn new_parameter_node(
        &mut self,
        value: &Tensor,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.insert_node(Parameter, vec![], value.clone(), name)
    }

    /// 创建运算节点并立即计算其值
    ///
    /// 评估（no_grad）模式下不记录计算关系：结果以输入节点的形式存入图中，
    /// 反向传播不会经过它。
    pub(in crate::nn) fn new_op_node<T: Into<NodeType>>(
        &mut self,
        raw_node: T,
        parents: &[NodeId],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let raw_node: NodeType = raw_node.into();
        if parents.len() != raw_node.parents_count() {
            return Err(GraphError::InvalidOperation(format!(
                "{}节点需要{}个父节点，但收到{}个",
                raw_node.type_name(),
                raw_node.parents_count(),
                parents.len()
            )));
        }

        let value = {
            let parent_values = parents
                .iter()
                .map(|&id| self.get_node_value(id))
                .collect::<Result<Vec<_>, _>>()?;
            raw_node.calc_value_by_parents(&parent_values)?
        };

        if self.is_eval_mode {
            self.insert_node(Input, vec![], value, name)
        } else {
            self.insert_node(raw_node, parents.to_vec(), value, name)
        }
    }

    /// 释放所有非参数节点（中间结果、输入、常量）
    ///
    /// 参数节点及其梯度保留；指向被释放节点的 Var 随之失效。
    pub fn release_intermediate_results(&mut self) {
        self.nodes.retain(|_, node| node.is_parameter());
    }
}
