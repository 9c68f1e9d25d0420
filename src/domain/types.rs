// ==========================================
// 合作社生产记录 - 领域类型定义
// ==========================================
// 作物、质量等级、记录状态均为封闭词表
// 序列化格式: 与页面展示文本一致（如 "Palm Oil" / "Grade A"）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 作物筛选 "全部" 哨兵文本
pub const ALL_CROPS_LABEL: &str = "All Crops";

/// 等级筛选 "全部" 哨兵文本
pub const ALL_GRADES_LABEL: &str = "All Grades";

// ==========================================
// 作物 (Crop)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Cocoa,
    Coffee,
    Maize,
    #[serde(rename = "Palm Oil")]
    PalmOil,
    Cotton,
    Cassava,
}

impl Crop {
    /// 下拉框顺序
    pub const ALL: [Crop; 6] = [
        Crop::Cocoa,
        Crop::Coffee,
        Crop::Maize,
        Crop::PalmOil,
        Crop::Cotton,
        Crop::Cassava,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Cocoa => "Cocoa",
            Crop::Coffee => "Coffee",
            Crop::Maize => "Maize",
            Crop::PalmOil => "Palm Oil",
            Crop::Cotton => "Cotton",
            Crop::Cassava => "Cassava",
        }
    }

    /// 从展示文本解析（忽略首尾空白与大小写）
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Crop::ALL
            .iter()
            .copied()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 质量等级 (Grade)
// ==========================================
// 三级封闭词表,每级对应一个展示样式类
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "Grade A")]
    A, // 优质
    #[serde(rename = "Grade B")]
    B, // 标准
    #[serde(rename = "Grade C")]
    C, // 最低档
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::A, Grade::B, Grade::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "Grade A",
            Grade::B => "Grade B",
            Grade::C => "Grade C",
        }
    }

    /// 展示样式类（1:1 映射）
    pub fn class(&self) -> &'static str {
        match self {
            Grade::A => "grade-a",
            Grade::B => "grade-b",
            Grade::C => "grade-c",
        }
    }

    /// 从展示文本解析,接受 "Grade A" 或单字母 "A"
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Grade::ALL.iter().copied().find(|grade| {
            grade.as_str().eq_ignore_ascii_case(needle)
                || grade.as_str()[6..].eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 记录状态 (Record Status)
// ==========================================
// 新建记录一律为 Pending; 核验/驳回由外部流程驱动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Pending,  // 待核验
    Verified, // 已核验
    Rejected, // 已驳回
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Verified => "Verified",
            RecordStatus::Rejected => "Rejected",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Verified => "verified",
            RecordStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
