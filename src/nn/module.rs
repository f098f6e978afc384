/*
 * @Description  : Module trait 定义
 */

use super::Var;

/// 模块 trait
///
/// - `forward()` **不是** trait 方法（签名各异）
/// - `new()` **不是** trait 方法（参数各异）
/// - `parameters()` 返回 `Vec<Var>`（签名一致，放入 trait）
///
/// ```ignore
/// struct Mlp {
///     fc1: Linear,
///     fc2: Linear,
/// }
///
/// impl Module for Mlp {
///     fn parameters(&self) -> Vec<Var> {
///         [self.fc1.parameters(), self.fc2.parameters()].concat()
///     }
/// }
/// ```
pub trait Module {
    /// 获取所有可训练参数
    ///
    /// 用于：
    /// - 优化器需要知道要更新哪些参数
    /// - 存档/读档模型参数
    fn parameters(&self) -> Vec<Var>;

    /// 获取参数（张量）个数
    fn num_params(&self) -> usize {
        self.parameters().len()
    }
}
