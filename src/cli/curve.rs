//! # curve 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/curve.rs`

use super::quantity::parse_wavelength;

use clap::{Args, ValueEnum};

/// 曲线输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CurveFormat {
    /// Terminal table
    #[default]
    Table,
    /// CSV on stdout
    Csv,
}

impl std::fmt::Display for CurveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveFormat::Table => write!(f, "table"),
            CurveFormat::Csv => write!(f, "csv"),
        }
    }
}

/// curve 子命令参数
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Nanocrystal type: CdSe, CdS or CdTe
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub nc_type: String,

    /// First wavelength of the grid (nm)
    #[arg(long, default_value = "300", value_parser = parse_wavelength)]
    pub start: f64,

    /// Last wavelength of the grid, inclusive (nm)
    #[arg(long, default_value = "1000", value_parser = parse_wavelength)]
    pub end: f64,

    /// Grid step (nm)
    #[arg(long, default_value_t = 50.0)]
    pub step: f64,

    /// Output format
    #[arg(short, long, value_enum, env = "QDSIZER_FORMAT", default_value_t = CurveFormat::Table)]
    pub format: CurveFormat,
}
