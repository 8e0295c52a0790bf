//! # 统一错误处理模块
//!
//! 定义 qdsizer 应用层的错误类型，使用 `thiserror` 派生。
//!
//! 公式引擎（`sizing/`）本身从不返回错误：不可计算的结果用 `Option::None`
//! 或 `Estimate` 变体表示，这里的错误只出现在参数校验和输出阶段。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `main.rs` 使用
//! - 无外部模块依赖

use thiserror::Error;

/// qdsizer 统一错误类型
#[derive(Error, Debug)]
pub enum QdError {
    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Could not compute diameter: unknown nanocrystal type '{name}' (expected CdSe, CdS or CdTe)")]
    UnknownNanocrystal { name: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误（单值校验由 clap value_parser 完成）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QdError>;
