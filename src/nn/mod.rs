/*
 * @Description  : 神经网络模块：计算图（Graph）、节点、智能变量（Var）、层、优化器及参数存档
 */

mod checkpoint;
mod graph;
pub mod layer;
mod module;
mod nodes;
pub mod optimizer;
mod var;
mod var_ops;

pub use checkpoint::{CHECKPOINT_MAGIC, CHECKPOINT_VERSION, CheckpointError, load_module, save_module};
pub use graph::{Graph, GraphError, GraphInner};
pub use layer::Linear;
pub use module::Module;
pub use nodes::NodeId;
pub use optimizer::{Adam, Optimizer};
pub use var::{Init, Var};
pub use var_ops::{VarActivationOps, VarLossOps, VarMatrixOps};

#[cfg(test)]
mod tests;
