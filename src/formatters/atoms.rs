//! # 原子行格式化
//!
//! 每个原子一行：左对齐的原子标签，随后是三个右对齐的定点坐标。
//!
//! ## 依赖关系
//! - 被 `formatters/xyz.rs`, `cfour.rs`, `nwchem.rs` 使用
//! - 使用 `formatters/template.rs`, `models/`

use super::template::{AtomInfo, LabelTemplate};
use crate::models::MoleculeRecord;

/// 原子行的列宽设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    /// 标签与坐标的字段宽度
    pub width: usize,
    /// 坐标小数位数
    pub prec: usize,
    /// 字段之间的空格数
    pub sp: usize,
}

/// 生成每个原子的坐标行
///
/// `geom` 已换算到目标单位，且行数与 `molrec` 原子数一致。
/// ghost 模板为空时跳过 ghost 原子。
pub fn atoms_formatter(
    molrec: &MoleculeRecord,
    geom: &[[f64; 3]],
    atom_format: &LabelTemplate,
    ghost_format: &LabelTemplate,
    layout: LineLayout,
) -> Vec<String> {
    let LineLayout { width, prec, sp } = layout;
    let sep = " ".repeat(sp);

    let mut atoms = Vec::with_capacity(geom.len());
    for (iat, xyz) in geom.iter().enumerate() {
        let info = AtomInfo {
            elea: Some(molrec.elea[iat]).filter(|&a| a != -1),
            elez: molrec.elez[iat],
            elem: &molrec.elem[iat],
            mass: molrec.mass[iat],
            elbl: &molrec.elbl[iat],
        };

        let template = if molrec.real[iat] {
            atom_format
        } else if ghost_format.is_empty() {
            continue;
        } else {
            ghost_format
        };

        let mut fields = Vec::with_capacity(4);
        fields.push(format!("{:<width$}", template.render(&info), width = width));
        fields.extend(
            xyz.iter()
                .map(|x| format!("{:>width$.prec$}", x, width = width, prec = prec)),
        );
        atoms.push(fields.join(&sep));
    }

    atoms
}
