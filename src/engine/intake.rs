// ==========================================
// 合作社生产记录 - 记录录入引擎
// ==========================================
// 输入: ProductionInput（表单快照）
// 输出: ProductionRecord | ValidationError
// 红线: 校验失败必须列出全部违规字段,不允许只报第一个
// 红线: 新记录 status 恒为 Pending
// ==========================================

use crate::domain::production::{MonetaryValue, ProductionInput, ProductionRecord, Quantity};
use crate::domain::types::{Crop, Grade, RecordStatus};
use crate::i18n::{t, t_with_args};
use crate::repository::seed::{DEFAULT_CURRENCY, DEFAULT_QUANTITY_UNIT};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::instrument;

/// 记录编号前缀
pub const RECORD_ID_PREFIX: &str = "PROD";

// ==========================================
// GradePolicy - 未知等级处理策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradePolicy {
    /// 未识别等级视为校验失败
    #[default]
    Strict,
    /// 未识别等级归入 Grade C
    LenientFallback,
}

impl GradePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "STRICT" => Some(GradePolicy::Strict),
            "LENIENT_FALLBACK" => Some(GradePolicy::LenientFallback),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradePolicy::Strict => "STRICT",
            GradePolicy::LenientFallback => "LENIENT_FALLBACK",
        }
    }
}

// ==========================================
// 字段级校验错误
// ==========================================

/// 录入表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Farmer,
    Crop,
    Quantity,
    Grade,
    Warehouse,
    Value,
}

impl IntakeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeField::Farmer => "farmer",
            IntakeField::Crop => "crop",
            IntakeField::Quantity => "quantity",
            IntakeField::Grade => "grade",
            IntakeField::Warehouse => "warehouse",
            IntakeField::Value => "value",
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单字段违规
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: IntakeField,
    pub reason: String, // 已本地化,可直接展示在控件旁
}

/// 录入校验错误（可由用户修正,不致命）
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("生产记录校验失败: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// 违规字段（按表单顺序）
    pub fn fields(&self) -> Vec<IntakeField> {
        self.violations.iter().map(|v| v.field).collect()
    }

    pub fn has(&self, field: IntakeField) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn reason_for(&self, field: IntakeField) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.reason.as_str())
    }
}

// ==========================================
// ValidatedInput - 通过校验的规范化输入
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub farmer: String,
    pub crop: Crop,
    pub quantity: f64,
    pub grade: Grade,
    pub warehouse: String,
    pub value: f64,
    pub notes: Option<String>,
}

// ==========================================
// RecordIntake - 记录录入引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct RecordIntake {
    grade_policy: GradePolicy,
    quantity_unit: String,
    currency: String,
}

impl Default for RecordIntake {
    fn default() -> Self {
        Self::new(GradePolicy::Strict, DEFAULT_QUANTITY_UNIT, DEFAULT_CURRENCY)
    }
}

impl RecordIntake {
    pub fn new(
        grade_policy: GradePolicy,
        quantity_unit: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            grade_policy,
            quantity_unit: quantity_unit.into(),
            currency: currency.into(),
        }
    }

    pub fn grade_policy(&self) -> GradePolicy {
        self.grade_policy
    }

    /// 纯校验: 收集全部违规字段
    pub fn validate(&self, input: &ProductionInput) -> Result<ValidatedInput, ValidationError> {
        let mut violations = Vec::new();

        let farmer = input.farmer.trim();
        if farmer.is_empty() {
            violations.push(required(IntakeField::Farmer));
        }

        let crop = if input.crop.trim().is_empty() {
            violations.push(required(IntakeField::Crop));
            None
        } else {
            let parsed = Crop::parse(&input.crop);
            if parsed.is_none() {
                violations.push(FieldViolation {
                    field: IntakeField::Crop,
                    reason: t_with_args("validation.unknown_crop", &[("value", input.crop.trim())]),
                });
            }
            parsed
        };

        if !is_strictly_positive(input.quantity) {
            violations.push(positive(IntakeField::Quantity));
        }

        let grade = if input.grade.trim().is_empty() {
            violations.push(required(IntakeField::Grade));
            None
        } else {
            match (Grade::parse(&input.grade), self.grade_policy) {
                (Some(grade), _) => Some(grade),
                (None, GradePolicy::LenientFallback) => {
                    tracing::warn!(grade = %input.grade, "未识别等级,按 Grade C 处理");
                    Some(Grade::C)
                }
                (None, GradePolicy::Strict) => {
                    violations.push(FieldViolation {
                        field: IntakeField::Grade,
                        reason: t_with_args(
                            "validation.unknown_grade",
                            &[("value", input.grade.trim())],
                        ),
                    });
                    None
                }
            }
        };

        let warehouse = input.warehouse.trim();
        if warehouse.is_empty() {
            violations.push(required(IntakeField::Warehouse));
        }

        if !is_strictly_positive(input.value) {
            violations.push(positive(IntakeField::Value));
        }

        match (crop, grade) {
            (Some(crop), Some(grade)) if violations.is_empty() => Ok(ValidatedInput {
                farmer: farmer.to_string(),
                crop,
                quantity: input.quantity,
                grade,
                warehouse: warehouse.to_string(),
                value: input.value,
                notes: input
                    .notes
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(ValidationError { violations }),
        }
    }

    /// 校验并构造新记录（调用方负责入库）
    ///
    /// # 参数
    /// - store_len: 当前仓储记录数（用于生成编号）
    /// - today: 记录日期
    #[instrument(skip(self, input), fields(farmer = %input.farmer))]
    pub fn submit(
        &self,
        input: &ProductionInput,
        store_len: usize,
        today: NaiveDate,
    ) -> Result<ProductionRecord, ValidationError> {
        let valid = self.validate(input).map_err(|err| {
            tracing::warn!(invalid = %summarize(&err.violations), "录入校验失败");
            err
        })?;

        Ok(ProductionRecord {
            id: next_record_id(store_len),
            date: today,
            farmer: valid.farmer,
            crop: valid.crop,
            quantity: Quantity::new(valid.quantity, self.quantity_unit.clone()),
            grade: valid.grade,
            warehouse: valid.warehouse,
            value: MonetaryValue::new(valid.value, self.currency.clone()),
            status: RecordStatus::Pending,
            notes: valid.notes,
        })
    }

    /// 以本地当前日期构造新记录
    pub fn submit_today(
        &self,
        input: &ProductionInput,
        store_len: usize,
    ) -> Result<ProductionRecord, ValidationError> {
        self.submit(input, store_len, Local::now().date_naive())
    }
}

/// "PROD" + 三位补零序号（store_len + 1）
pub fn next_record_id(store_len: usize) -> String {
    format!("{}{:03}", RECORD_ID_PREFIX, store_len + 1)
}

fn is_strictly_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn required(field: IntakeField) -> FieldViolation {
    FieldViolation {
        field,
        reason: t("validation.required"),
    }
}

fn positive(field: IntakeField) -> FieldViolation {
    FieldViolation {
        field,
        reason: t("validation.positive"),
    }
}
