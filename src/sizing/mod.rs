//! # 纳米晶尺寸计算模块
//!
//! 基于 Peng 等人 (2003) 的经验公式，由紫外-可见吸收峰估算
//! 纳米晶直径、消光系数与浓度。
//!
//! ## 功能
//! - 尺寸多项式 D(λ)
//! - 消光系数幂律 ε(D)
//! - Beer-Lambert 浓度
//! - 尺寸-波长曲线
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 子模块: calculator, coefficients, curve

pub mod calculator;
pub mod coefficients;
pub mod curve;

pub use calculator::{estimate, ConcentrationOutcome, Estimate};
pub use curve::{curve_point_count, sizing_curve, CurvePoint, MAX_CURVE_POINTS};
