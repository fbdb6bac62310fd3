//! # CFOUR ZMAT 几何片段
//!
//! 首行注释不可有前导空格。标签固定为元素符号，ghost 原子一律写作 `GH`，
//! ghost 的元素身份由基组部分另行给出。

use super::atoms::{atoms_formatter, LineLayout};
use super::template::LabelTemplate;
use crate::models::MoleculeRecord;

pub(super) fn render(
    molrec: &MoleculeRecord,
    geom: &[[f64; 3]],
    layout: LineLayout,
) -> Vec<String> {
    let atoms = atoms_formatter(
        molrec,
        geom,
        &LabelTemplate::element(),
        &LabelTemplate::literal("GH"),
        layout,
    );

    let mut smol = vec![format!(
        "auto-generated by qcmol from molecule {}",
        molrec.display_name()
    )];
    smol.extend(atoms);
    smol
}
