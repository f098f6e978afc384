/*
 * @Description  : Linear (全连接) 层
 */

use crate::nn::{Graph, GraphError, Init, Module, Var, VarMatrixOps};

/// Linear (全连接) 层
///
/// PyTorch 风格的全连接层：`output = x @ W + b`
///
/// # 输入/输出形状
/// - 输入：[batch_size, in_features]
/// - 输出：[batch_size, out_features]
///
/// ```ignore
/// let fc = Linear::new(&graph, 784, 128, true, "fc1")?;
/// let h = fc.forward(&x)?.leaky_relu(0.2)?;
/// ```
pub struct Linear {
    /// 权重参数 [in_features, out_features]
    weights: Var,
    /// 偏置参数 [1, out_features]（可选）
    bias: Option<Var>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// 创建新的 Linear 层
    ///
    /// 权重采用 Kaiming 初始化，偏置为零；参数节点名为`{name}_W`、`{name}_b`，
    /// 在同一个图中须唯一（存档时按名称匹配参数）。
    pub fn new(
        graph: &Graph,
        in_features: usize,
        out_features: usize,
        use_bias: bool,
        name: &str,
    ) -> Result<Self, GraphError> {
        let weights = graph.parameter(
            &[in_features, out_features],
            Init::Kaiming,
            &format!("{name}_W"),
        )?;

        let bias = if use_bias {
            Some(graph.parameter(&[1, out_features], Init::Zeros, &format!("{name}_b"))?)
        } else {
            None
        };

        Ok(Self {
            weights,
            bias,
            in_features,
            out_features,
        })
    }

    /// 前向传播：计算 `x @ W + b`
    pub fn forward(&self, x: &Var) -> Result<Var, GraphError> {
        let shape = x.value_shape()?;
        if shape.len() != 2 || shape[1] != self.in_features {
            return Err(GraphError::ShapeMismatch {
                expected: vec![shape.first().copied().unwrap_or(0), self.in_features],
                got: shape,
                message: "Linear层的输入形状应为[batch_size, in_features]".to_string(),
            });
        }

        let xw = x.matmul(&self.weights)?;
        match &self.bias {
            // [batch, out] + [1, out]：偏置按行广播
            Some(bias) => xw.try_add(bias),
            None => Ok(xw),
        }
    }

    pub const fn in_features(&self) -> usize {
        self.in_features
    }

    pub const fn out_features(&self) -> usize {
        self.out_features
    }

    pub const fn weights(&self) -> &Var {
        &self.weights
    }

    pub const fn bias(&self) -> Option<&Var> {
        self.bias.as_ref()
    }
}

impl Module for Linear {
    fn parameters(&self) -> Vec<Var> {
        let mut params = vec![self.weights.clone()];
        if let Some(bias) = &self.bias {
            params.push(bias.clone());
        }
        params
    }
}
