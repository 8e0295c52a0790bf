//! # 纳米晶类型数据模型
//!
//! 定义支持的半导体纳米晶类型，决定尺寸与消光系数公式所用的系数组。
//!
//! ## 依赖关系
//! - 被 `sizing/` 和 `commands/` 使用
//! - 无外部模块依赖

/// 纳米晶类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NanocrystalType {
    CdSe,
    CdS,
    CdTe,
}

impl NanocrystalType {
    /// 全部支持的类型
    pub const ALL: [NanocrystalType; 3] = [
        NanocrystalType::CdSe,
        NanocrystalType::CdS,
        NanocrystalType::CdTe,
    ];

    /// 从名称解析（忽略大小写与首尾空白），未知名称返回 None
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "cdse" => Some(NanocrystalType::CdSe),
            "cds" => Some(NanocrystalType::CdS),
            "cdte" => Some(NanocrystalType::CdTe),
            _ => None,
        }
    }

    /// 规范名称
    pub fn name(&self) -> &'static str {
        match self {
            NanocrystalType::CdSe => "CdSe",
            NanocrystalType::CdS => "CdS",
            NanocrystalType::CdTe => "CdTe",
        }
    }
}

impl std::fmt::Display for NanocrystalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
