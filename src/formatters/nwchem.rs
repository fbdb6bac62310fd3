//! # NWChem geometry 块
//!
//! ```text
//! geometry units angstrom
//! O  x  y  z
//! ...
//! symmetry c2v           # 仅当 fix_symmetry 非空，否则为空行
//! end
//! ```

use super::atoms::{atoms_formatter, LineLayout};
use super::template::LabelTemplate;
use crate::models::{MoleculeRecord, Units};

pub(super) fn render(
    molrec: &MoleculeRecord,
    geom: &[[f64; 3]],
    units: Units,
    layout: LineLayout,
) -> Vec<String> {
    let atoms = atoms_formatter(
        molrec,
        geom,
        &LabelTemplate::element(),
        &LabelTemplate::literal("GH"),
        layout,
    );

    let symm_line = match molrec.fix_symmetry.as_deref() {
        Some(symm) if !symm.is_empty() => format!("symmetry {}", symm),
        _ => String::new(),
    };

    let mut smol = vec![format!("geometry units {}", units.as_str().to_lowercase())];
    smol.extend(atoms);
    smol.push(symm_line);
    smol.push("end".to_string());
    smol
}
