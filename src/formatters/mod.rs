//! # 格式化模块
//!
//! 将分子记录渲染为量子化学程序的几何输入文本 (XYZ, CFOUR, NWChem)。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `models/` 使用
//! - 使用 `models/`
//! - 子模块: atoms, template, formula, xyz, cfour, nwchem

pub mod atoms;
pub mod formula;
pub mod template;

mod cfour;
mod nwchem;
mod xyz;

pub use formula::formula_generator;
pub use template::LabelTemplate;

use atoms::LineLayout;
use crate::error::{QcmolError, Result};
use crate::models::{MoleculeRecord, Units};
use clap::ValueEnum;
use std::str::FromStr;

/// 坐标字段默认宽度
pub const DEFAULT_WIDTH: usize = 17;

/// 坐标默认小数位数
pub const DEFAULT_PREC: usize = 12;

/// 标签与坐标之间的空格数
const SEPARATOR_WIDTH: usize = 2;

/// 支持的输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// XYZ format (count line, name line, atoms)
    Xyz,
    /// CFOUR ZMAT geometry fragment
    Cfour,
    /// NWChem geometry block
    Nwchem,
}

impl OutputFormat {
    /// 由输入文件名主干生成输出文件名
    pub fn output_file_name(&self, stem: &str) -> String {
        match self {
            OutputFormat::Xyz => format!("{}.xyz", stem),
            OutputFormat::Cfour => format!("ZMAT_{}", stem),
            OutputFormat::Nwchem => format!("{}.nw", stem),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xyz => write!(f, "xyz"),
            OutputFormat::Cfour => write!(f, "cfour"),
            OutputFormat::Nwchem => write!(f, "nwchem"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = QcmolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "xyz" => Ok(OutputFormat::Xyz),
            "cfour" => Ok(OutputFormat::Cfour),
            "nwchem" => Ok(OutputFormat::Nwchem),
            other => Err(QcmolError::UnsupportedFormat(format!(
                "dtype '{}' (expected xyz, cfour or nwchem)",
                other
            ))),
        }
    }
}

/// 将分子记录格式化为 `dtype` 文本
///
/// 坐标先由记录单位换算到 `units`。`atom_format` / `ghost_format` 仅对 XYZ 生效，
/// 缺省为 `{elem}` 与 `@{elem}`；空的 ghost 模板会隐藏 ghost 原子。
/// CFOUR 和 NWChem 固定使用 `{elem}` 与 `GH`。
///
/// 返回以换行结尾的多行字符串。
pub fn to_string(
    molrec: &MoleculeRecord,
    dtype: OutputFormat,
    units: Units,
    atom_format: Option<&LabelTemplate>,
    ghost_format: Option<&LabelTemplate>,
    width: usize,
    prec: usize,
) -> Result<String> {
    molrec.validate()?;

    let factor = molrec
        .units
        .conversion_factor(units, molrec.input_units_to_au);
    let geom: Vec<[f64; 3]> = molrec
        .positions()
        .map(|xyz| xyz.map(|x| x * factor))
        .collect();

    let layout = LineLayout {
        width,
        prec,
        sp: SEPARATOR_WIDTH,
    };

    let smol = match dtype {
        OutputFormat::Xyz => xyz::render(molrec, &geom, units, atom_format, ghost_format, layout),
        OutputFormat::Cfour => cfour::render(molrec, &geom, layout),
        OutputFormat::Nwchem => nwchem::render(molrec, &geom, units, layout),
    };

    Ok(smol.join("\n") + "\n")
}
