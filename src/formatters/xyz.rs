//! # XYZ 格式
//!
//! ```text
//! 3                      # 原子数，Bohr 输出时为 "3 au"
//! water                  # 名称
//! O  x  y  z
//! ...
//! ```

use super::atoms::{atoms_formatter, LineLayout};
use super::template::LabelTemplate;
use crate::models::{MoleculeRecord, Units};

pub(super) fn render(
    molrec: &MoleculeRecord,
    geom: &[[f64; 3]],
    units: Units,
    atom_format: Option<&LabelTemplate>,
    ghost_format: Option<&LabelTemplate>,
    layout: LineLayout,
) -> Vec<String> {
    let atom_format = atom_format.cloned().unwrap_or_else(LabelTemplate::element);
    let ghost_format = ghost_format
        .cloned()
        .unwrap_or_else(LabelTemplate::ghost_element);

    let atoms = atoms_formatter(molrec, geom, &atom_format, &ghost_format, layout);

    let first_line = match units {
        Units::Bohr => format!("{} au", atoms.len()),
        Units::Angstrom => atoms.len().to_string(),
    };

    let mut smol = vec![first_line, molrec.display_name()];
    smol.extend(atoms);
    smol
}
