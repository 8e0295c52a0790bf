//! # qdsizer - 量子点尺寸与浓度计算器
//!
//! 由第一激子吸收峰波长估算 CdSe / CdS / CdTe 纳米晶的直径、
//! 消光系数与摩尔浓度（Yu, Qu, Guo & Peng, Chem. Mater. 2003）。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   └── commands/   (命令执行逻辑)
//!         ├── sizing/    (经验公式与计算流程)
//!         ├── models/    (数据模型)
//!         ├── utils/     (输出与格式化)
//!         └── error.rs   (错误处理)
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod sizing;
pub mod utils;
