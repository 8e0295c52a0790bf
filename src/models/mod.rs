//! # 数据模型模块
//!
//! 定义纳米晶类型等领域数据模型。
//!
//! ## 依赖关系
//! - 被 `sizing/` 和 `commands/` 使用
//! - 子模块: nanocrystal

pub mod nanocrystal;

pub use nanocrystal::NanocrystalType;
