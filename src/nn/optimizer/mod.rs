/*
 * @Description  : 优化器模块
 */

mod core;

pub use core::{Adam, Optimizer};
