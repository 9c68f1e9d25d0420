// ==========================================
// 合作社生产记录 - 生产记录领域模型
// ==========================================
// ProductionRecord: 记录仓储中的规范记录
// ProductionInput:  录入表单的不可变快照（校验前）
// ==========================================

use crate::domain::types::{Crop, Grade, RecordStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 页面日期展示格式
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

// ==========================================
// Quantity - 数量（数值 + 单位）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String, // 如 "MT"
}

impl Quantity {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

// ==========================================
// MonetaryValue - 金额（数值 + 币种）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryValue {
    pub amount: f64,
    pub currency: String, // 如 "XAF"
}

impl MonetaryValue {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for MonetaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", group_thousands(self.amount), self.currency)
    }
}

/// 千分位分组,最多保留 3 位小数（去掉尾随 0）
///
/// 5250000.0 -> "5,250,000"; 1234.5 -> "1,234.5"
pub fn group_thousands(amount: f64) -> String {
    let rounded = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if amount < 0.0 && (grouped != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

// ==========================================
// ProductionRecord - 生产记录
// ==========================================
// 红线: id 唯一且按插入顺序严格递增; quantity/value 为正
// 红线: 新建记录 status 恒为 Pending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub id: String,              // PROD001 形式
    pub date: NaiveDate,         // 交售日期
    pub farmer: String,          // 社员展示名,含社员编号 "Kwame Osei (M001)"
    pub crop: Crop,
    pub quantity: Quantity,
    pub grade: Grade,
    pub warehouse: String,
    pub value: MonetaryValue,
    pub status: RecordStatus,
    pub notes: Option<String>,   // 录入备注,不参与导出
}

impl ProductionRecord {
    /// DD/MM/YYYY
    pub fn date_display(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn grade_class(&self) -> &'static str {
        self.grade.class()
    }

    pub fn status_class(&self) -> &'static str {
        self.status.class()
    }

    /// 从社员展示名中提取括号内的社员编号
    pub fn member_code(&self) -> Option<&str> {
        member_code_of(&self.farmer)
    }
}

/// "Kwame Osei (M001)" -> Some("M001")
pub fn member_code_of(farmer: &str) -> Option<&str> {
    let open = farmer.rfind('(')?;
    let close = farmer[open..].find(')')? + open;
    let code = farmer[open + 1..close].trim();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

// ==========================================
// ProductionInput - 录入表单快照
// ==========================================
// 用途: 表单提交时的原始值,交给 RecordIntake 校验
// 默认值与表单重置状态一致（空串 / 0）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionInput {
    pub farmer: String,
    pub crop: String,
    pub quantity: f64,
    pub grade: String,
    pub warehouse: String,
    pub value: f64,
    #[serde(default)]
    pub notes: Option<String>,
}
