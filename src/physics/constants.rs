//! # 物理常数
//!
//! CODATA 2014 推荐值。

/// 1 Bohr 对应的 Å 数
pub const BOHR2ANGSTROMS: f64 = 0.52917721067;

/// 1 Å 对应的 Bohr 数
pub const ANGSTROM2BOHR: f64 = 1.0 / BOHR2ANGSTROMS;
