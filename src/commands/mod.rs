//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `sizing/`, `models/`, `utils/`
//! - 子模块: curve, estimate, types

pub mod curve;
pub mod estimate;
pub mod types;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Estimate(args) => estimate::execute(args),
        Commands::Curve(args) => curve::execute(args),
        Commands::Types => types::execute(),
    }
}
