use std::ops::{Index, IndexMut};

use super::Tensor;

// 2阶张量的[行, 列]索引
impl Index<[usize; 2]> for Tensor {
    type Output = f32;

    fn index(&self, index: [usize; 2]) -> &f32 {
        &self.data[&index[..]]
    }
}

impl IndexMut<[usize; 2]> for Tensor {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut f32 {
        &mut self.data[&index[..]]
    }
}

impl Tensor {
    /// 取出第`row`行，结果形状为`[1, 列数...]`
    pub fn row(&self, row: usize) -> Self {
        self.select_rows(&[row])
    }
}
