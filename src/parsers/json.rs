//! # molrec JSON 解析器
//!
//! 读取 Psi4 风格的分子记录 JSON，并检查各并列序列长度。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/molecule.rs`
//! - 使用 `serde_json` crate

use crate::error::{QcmolError, Result};
use crate::models::MoleculeRecord;
use std::fs;
use std::path::Path;

/// 解析 molrec JSON 文件
pub fn parse_json_file(path: &Path) -> Result<MoleculeRecord> {
    let content = fs::read_to_string(path).map_err(|e| QcmolError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_json_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 molrec JSON
pub fn parse_json_content(content: &str, source: &str) -> Result<MoleculeRecord> {
    let record: MoleculeRecord =
        serde_json::from_str(content).map_err(|e| QcmolError::ParseError {
            path: source.to_string(),
            reason: e.to_string(),
        })?;

    record.validate()?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Units;

    const HF: &str = r#"{
        "name": "hydrogen fluoride",
        "units": "Angstrom",
        "input_units_to_au": 1.8897261246257702,
        "molecular_charge": 0.0,
        "molecular_multiplicity": 1,
        "elem": ["H", "F"],
        "elez": [1, 9],
        "elea": [1, 19],
        "mass": [1.00782503223, 18.99840316273],
        "elbl": ["", ""],
        "real": [true, true],
        "geom": [0.0, 0.0, 0.0, 0.0, 0.0, 0.917]
    }"#;

    #[test]
    fn test_parse_json_content() {
        let mol = parse_json_content(HF, "hf.json").unwrap();
        assert_eq!(mol.name.as_deref(), Some("hydrogen fluoride"));
        assert_eq!(mol.units, Units::Angstrom);
        assert_eq!(mol.molecular_charge, Some(0.0));
        assert_eq!(mol.elez, vec![1, 9]);
        assert!(mol.fix_symmetry.is_none());
    }

    #[test]
    fn test_parse_json_syntax_error() {
        let err = parse_json_content("{\"units\": ", "broken.json").unwrap_err();
        match err {
            QcmolError::ParseError { path, .. } => assert_eq!(path, "broken.json"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_json_shape_error() {
        let content = HF.replace("\"real\": [true, true]", "\"real\": [true]");
        let err = parse_json_content(&content, "hf.json").unwrap_err();
        assert!(matches!(err, QcmolError::InvalidRecord(_)));
    }

    #[test]
    fn test_parse_record_file_unsupported_extension() {
        let err = crate::parsers::parse_record_file(Path::new("water.xyz")).unwrap_err();
        assert!(matches!(err, QcmolError::UnsupportedFormat(_)));
    }
}
