/*
 * @Description  : GraphInner VJP 反向传播
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::NodeId;
use crate::nn::nodes::TraitNode;
use crate::tensor::Tensor;
use std::collections::{BTreeSet, HashMap};

impl GraphInner {
    /// 反向传播：计算损失对所有可达参数的梯度（累加到参数的 grad 上），
    /// 返回损失的标量值，随后释放图中所有非参数节点
    pub fn backward(&mut self, loss: NodeId) -> Result<f32, GraphError> {
        if !self.is_train_mode() {
            return Err(GraphError::InvalidOperation(
                "评估（no_grad）模式下没有记录计算关系，无法反向传播".to_string(),
            ));
        }

        let loss_value = self.get_node_value(loss)?;
        let loss_scalar = match (loss_value.size(), loss_value.number()) {
            (1, Some(number)) => number,
            _ => {
                return Err(GraphError::InvalidOperation(format!(
                    "反向传播要求损失为标量 [1, 1]，但得到 {:?}",
                    loss_value.shape()
                )));
            }
        };

        self.backward_vjp_core(loss)?;

        self.release_intermediate_results();
        Ok(loss_scalar)
    }

    fn backward_vjp_core(&mut self, loss_id: NodeId) -> Result<(), GraphError> {
        // 中间节点的梯度只在本次传播中有效，不写回节点
        let mut upstream: HashMap<NodeId, Tensor> = HashMap::new();
        let loss_shape = self.get_node_value(loss_id)?.shape().to_vec();
        upstream.insert(loss_id, Tensor::ones(&loss_shape));

        // id 大的节点一定在其父节点之后创建，故按 id 降序即为反向拓扑序
        for node_id in self.reachable_nodes(loss_id)?.into_iter().rev() {
            let Some(grad) = upstream.remove(&node_id) else {
                continue;
            };

            let node = self.get_node(node_id)?;
            if node.is_parameter() {
                self.get_node_mut(node_id)?.accumulate_grad(&grad)?;
                continue;
            }
            if node.is_input() {
                continue;
            }

            let parent_grads = {
                let parent_ids = node.parents();
                let parent_values = parent_ids
                    .iter()
                    .map(|&id| self.get_node_value(id))
                    .collect::<Result<Vec<_>, _>>()?;
                let value = self.get_node_value(node_id)?;

                let mut grads = Vec::with_capacity(parent_ids.len());
                for (index, &parent_id) in parent_ids.iter().enumerate() {
                    if self.get_node(parent_id)?.is_input() {
                        continue;
                    }
                    let parent_grad = node.node_type().calc_grad_to_parent(
                        index,
                        &parent_values,
                        value,
                        &grad,
                    )?;
                    grads.push((parent_id, parent_grad));
                }
                grads
            };

            for (parent_id, parent_grad) in parent_grads {
                match upstream.get_mut(&parent_id) {
                    Some(existing) => *existing += &parent_grad,
                    None => {
                        upstream.insert(parent_id, parent_grad);
                    }
                }
            }
        }
        Ok(())
    }

    /// 从`loss_id`出发沿父节点可达的所有节点（按 id 升序）
    fn reachable_nodes(&self, loss_id: NodeId) -> Result<BTreeSet<NodeId>, GraphError> {
        let mut visited = BTreeSet::new();
        let mut stack = vec![loss_id];
        while let Some(id) = stack.pop() {
            if visited.insert(id) {
                stack.extend_from_slice(self.get_node(id)?.parents());
            }
        }
        Ok(visited)
    }

    /// 清除所有节点的梯度
    pub fn clear_grad(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_grad();
        }
    }

    /// 清除单个节点的梯度
    pub fn clear_node_grad(&mut self, node_id: NodeId) -> Result<(), GraphError> {
        self.get_node_mut(node_id)?.clear_grad();
        Ok(())
    }
}
