/*
 * @Description  : Var 扩展 trait 模块
 *
 * 按功能领域组织 Var 的扩展方法，用户按需 import：
 * - `activation`: 激活函数（sigmoid, tanh, leaky_relu）
 * - `loss`: 损失函数（bce_loss）
 * - `matrix`: 矩阵运算（matmul）
 */

mod activation;
mod loss;
mod matrix;

pub use activation::VarActivationOps;
pub use loss::VarLossOps;
pub use matrix::VarMatrixOps;
