//! # 分子记录数据模型
//!
//! 以按原子并列的序列保存分子几何，字段布局与 Psi4 molrec JSON 一致，
//! 未识别的键在反序列化时被忽略。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `formatters/` 使用
//! - 使用 `physics/constants.rs`

use crate::error::{QcmolError, Result};
use crate::formatters::formula_generator;
use crate::physics::constants::{ANGSTROM2BOHR, BOHR2ANGSTROMS};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// 长度单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Units {
    #[default]
    Angstrom,
    Bohr,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Angstrom => "Angstrom",
            Units::Bohr => "Bohr",
        }
    }

    /// 从 `self` 换算到 `target` 的长度因子
    ///
    /// Å → Bohr 时优先使用记录自带的 `input_units_to_au`。
    pub fn conversion_factor(self, target: Units, input_units_to_au: Option<f64>) -> f64 {
        match (self, target) {
            (Units::Angstrom, Units::Angstrom) => 1.0,
            (Units::Angstrom, Units::Bohr) => input_units_to_au.unwrap_or(ANGSTROM2BOHR),
            (Units::Bohr, Units::Angstrom) => BOHR2ANGSTROMS,
            (Units::Bohr, Units::Bohr) => 1.0,
        }
    }
}

impl FromStr for Units {
    type Err = QcmolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Angstrom" => Ok(Units::Angstrom),
            "Bohr" => Ok(Units::Bohr),
            other => Err(QcmolError::Validation(format!(
                "units must be 'Angstrom'/'Bohr', not {}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Units {
    type Error = QcmolError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Units> for String {
    fn from(units: Units) -> Self {
        units.as_str().to_string()
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 分子记录
///
/// 所有按原子的序列长度均为 N，`geom` 为展平的 3N 个坐标。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleculeRecord {
    /// 分子名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 坐标单位
    pub units: Units,

    /// 元素符号
    pub elem: Vec<String>,

    /// 原子序数
    pub elez: Vec<u32>,

    /// 质量数，-1 表示未指定
    pub elea: Vec<i32>,

    /// 原子质量
    pub mass: Vec<f64>,

    /// 自由标签
    pub elbl: Vec<String>,

    /// true 为真实原子，false 为 ghost 原子
    pub real: Vec<bool>,

    /// 展平坐标 [x0, y0, z0, x1, ...]，也接受 [[x, y, z], ...]
    #[serde(deserialize_with = "deserialize_geom")]
    pub geom: Vec<f64>,

    /// 固定点群（NWChem `symmetry` 行）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_symmetry: Option<String>,

    /// 输入单位到原子单位的换算因子
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_units_to_au: Option<f64>,

    /// 分子总电荷
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_charge: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeomRepr {
    Flat(Vec<f64>),
    Rows(Vec<[f64; 3]>),
}

fn deserialize_geom<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match GeomRepr::deserialize(deserializer)? {
        GeomRepr::Flat(flat) => flat,
        GeomRepr::Rows(rows) => rows.into_iter().flatten().collect(),
    })
}

impl MoleculeRecord {
    /// 原子数
    pub fn natom(&self) -> usize {
        self.elem.len()
    }

    /// ghost 原子数
    pub fn nghost(&self) -> usize {
        self.real.iter().filter(|&&r| !r).count()
    }

    /// 检查各并列序列长度是否一致
    pub fn validate(&self) -> Result<()> {
        let nat = self.natom();
        let lengths = [
            ("elez", self.elez.len()),
            ("elea", self.elea.len()),
            ("mass", self.mass.len()),
            ("elbl", self.elbl.len()),
            ("real", self.real.len()),
        ];

        for (field, len) in lengths {
            if len != nat {
                return Err(QcmolError::InvalidRecord(format!(
                    "'{}' has {} entries but 'elem' has {}",
                    field, len, nat
                )));
            }
        }

        if self.geom.len() != 3 * nat {
            return Err(QcmolError::InvalidRecord(format!(
                "'geom' has {} values, expected {} for {} atoms",
                self.geom.len(),
                3 * nat,
                nat
            )));
        }

        Ok(())
    }

    /// 按原子给出坐标行
    pub fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.geom.chunks_exact(3).map(|xyz| [xyz[0], xyz[1], xyz[2]])
    }

    /// 化学式
    pub fn formula(&self) -> String {
        formula_generator(&self.elem)
    }

    /// 分子名称，缺省时使用化学式
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.formula())
    }
}
