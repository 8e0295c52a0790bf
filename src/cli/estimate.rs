//! # estimate 子命令 CLI 定义
//!
//! 对应单次测量的输入：纳米晶类型、吸收峰波长，以及可选的吸光度与光程。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/estimate.rs`

use super::quantity::{parse_absorbance, parse_path_length, parse_wavelength};
use crate::sizing::calculator::DEFAULT_PATH_LENGTH_CM;

use clap::Args;

/// estimate 子命令参数
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Nanocrystal type: CdSe, CdS or CdTe
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub nc_type: String,

    /// First excitonic absorption peak wavelength, 300-1000 nm (e.g., 512.3 or 512.3nm)
    #[arg(short, long, value_parser = parse_wavelength)]
    pub wavelength: f64,

    /// Absorbance at the first excitonic peak (enables concentration)
    #[arg(short, long, value_parser = parse_absorbance)]
    pub absorbance: Option<f64>,

    /// Cuvette path length in cm (accepts cm or mm suffix)
    #[arg(
        short,
        long,
        env = "QDSIZER_PATH_LENGTH",
        default_value_t = DEFAULT_PATH_LENGTH_CM,
        value_parser = parse_path_length
    )]
    pub path_length: f64,
}
