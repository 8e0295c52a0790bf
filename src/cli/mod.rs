//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `estimate`: 由吸收峰估算直径、消光系数与浓度
//! - `curve`: 输出尺寸-波长曲线
//! - `types`: 列出支持的纳米晶类型及其系数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: curve, estimate, quantity

pub mod curve;
pub mod estimate;
pub mod quantity;

use clap::{Parser, Subcommand};

/// qdsizer - 量子点尺寸与浓度计算器
#[derive(Parser)]
#[command(name = "qdsizer")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Quantum dot size, extinction coefficient and concentration calculator",
    long_about = "Estimate the diameter, extinction coefficient and molar concentration of \
                  CdSe, CdS and CdTe nanocrystals from the first excitonic absorption peak \
                  (Yu, Qu, Guo & Peng, Chem. Mater. 2003)."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate diameter, extinction coefficient and concentration from an absorption peak
    Estimate(estimate::EstimateArgs),

    /// Print the sizing curve (diameter vs. wavelength) for a nanocrystal type
    Curve(curve::CurveArgs),

    /// List supported nanocrystal types and their empirical coefficients
    Types,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate() {
        let cli = Cli::try_parse_from([
            "qdsizer",
            "estimate",
            "--type",
            "CdSe",
            "--wavelength",
            "500nm",
            "--absorbance",
            "0.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.nc_type, "CdSe");
                assert_eq!(args.wavelength, 500.0);
                assert_eq!(args.absorbance, Some(0.5));
                assert_eq!(args.path_length, 1.0);
            }
            _ => panic!("expected estimate subcommand"),
        }
    }

    #[test]
    fn test_parse_curve_defaults() {
        let cli = Cli::try_parse_from(["qdsizer", "curve", "--type", "cds"]).unwrap();
        match cli.command {
            Commands::Curve(args) => {
                assert_eq!(args.start, 300.0);
                assert_eq!(args.end, 1000.0);
                assert_eq!(args.step, 50.0);
                assert_eq!(args.format, curve::CurveFormat::Table);
            }
            _ => panic!("expected curve subcommand"),
        }
    }

    #[test]
    fn test_out_of_range_wavelength_is_usage_error() {
        for w in ["299.9", "1000.5nm"] {
            let err = match Cli::try_parse_from([
                "qdsizer",
                "estimate",
                "--type",
                "CdSe",
                "--wavelength",
                w,
            ]) {
                Ok(_) => panic!("wavelength {} should be rejected", w),
                Err(e) => e,
            };
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_reject_negative_absorbance() {
        let result = Cli::try_parse_from([
            "qdsizer",
            "estimate",
            "--type",
            "CdSe",
            "--wavelength",
            "500",
            "--absorbance",
            "-0.1",
        ]);
        assert!(result.is_err());
    }
}
