/*
 * @Description  : 模块参数存档（checkpoint）：把一个 Module 的全部参数写入单个二进制文件，或从中读回
 *
 * 文件格式（bincode）：魔数 + 版本号 + [(参数名, 参数张量)]
 * 只包含参数值，不含优化器状态、epoch 计数等训练进度信息。
 */

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nn::{GraphError, Module};
use crate::tensor::Tensor;

/// 参数文件魔数
pub const CHECKPOINT_MAGIC: [u8; 4] = *b"OGPR";
/// 参数文件版本
pub const CHECKPOINT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("存档文件读写失败：{0}")]
    Io(#[from] std::io::Error),
    #[error("存档文件编解码失败：{0}")]
    Codec(#[from] bincode::Error),
    #[error("无效的存档文件：魔数为{0:?}，这不是本crate保存的参数文件")]
    BadMagic([u8; 4]),
    #[error("不支持的存档文件版本：{0}")]
    UnsupportedVersion(u32),
    #[error("存档中缺少参数`{0}`")]
    MissingParameter(String),
    #[error("参数`{name}`的形状不一致：模型中为{expected:?}，存档中为{got:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Serialize, Deserialize)]
struct ParamRecord {
    name: String,
    value: Tensor,
}

#[derive(Serialize, Deserialize)]
struct CheckpointFile {
    magic: [u8; 4],
    version: u32,
    params: Vec<ParamRecord>,
}

/// 保存模块的所有参数（已存在的文件会被覆盖）
pub fn save_module<M: Module + ?Sized>(module: &M, path: impl AsRef<Path>) -> Result<(), CheckpointError> {
    let params = module
        .parameters()
        .iter()
        .map(|param| {
            Ok(ParamRecord {
                name: param.name()?,
                value: param.value()?,
            })
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    let checkpoint = CheckpointFile {
        magic: CHECKPOINT_MAGIC,
        version: CHECKPOINT_VERSION,
        params,
    };

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    bincode::serialize_into(&mut writer, &checkpoint)?;
    writer.flush()?;
    Ok(())
}

/// 从文件读回模块的参数，按参数名匹配
///
/// 模块的每个参数都必须在存档中出现且形状一致；存档中多余的参数被忽略。
pub fn load_module<M: Module + ?Sized>(module: &M, path: impl AsRef<Path>) -> Result<(), CheckpointError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let checkpoint: CheckpointFile = bincode::deserialize_from(reader)?;

    if checkpoint.magic != CHECKPOINT_MAGIC {
        return Err(CheckpointError::BadMagic(checkpoint.magic));
    }
    if checkpoint.version != CHECKPOINT_VERSION {
        return Err(CheckpointError::UnsupportedVersion(checkpoint.version));
    }

    let stored: HashMap<String, Tensor> = checkpoint
        .params
        .into_iter()
        .map(|record| (record.name, record.value))
        .collect();

    // 先全部校验再写入，避免只加载了一半
    let params = module.parameters();
    let mut updates = Vec::with_capacity(params.len());
    for param in &params {
        let name = param.name()?;
        let value = stored
            .get(&name)
            .ok_or_else(|| CheckpointError::MissingParameter(name.clone()))?;
        let expected = param.value_shape()?;
        if expected != value.shape() {
            return Err(CheckpointError::ShapeMismatch {
                name,
                expected,
                got: value.shape().to_vec(),
            });
        }
        updates.push((param, value));
    }

    for (param, value) in updates {
        param.set_value(value)?;
    }
    Ok(())
}
