//! # qdsizer 命令行入口
//!
//! ## 子命令
//! - `estimate` - 由吸收峰估算直径、消光系数与浓度
//! - `curve`    - 尺寸-波长曲线
//! - `types`    - 支持的纳米晶类型与系数

use clap::Parser;
use qdsizer::cli::Cli;
use qdsizer::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
