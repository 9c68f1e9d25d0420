// ==========================================
// 合作社生产记录 - 筛选条件与导出选项
// ==========================================
// FilterCriteria: 页面临时状态,不持久化
// ExportOptions:  导出对话框确认后的选项
// ==========================================

use crate::domain::types::{Crop, Grade, ALL_CROPS_LABEL, ALL_GRADES_LABEL};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 作物筛选器
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CropSelector {
    #[default]
    All,
    Only(Crop),
}

impl CropSelector {
    /// 从下拉框文本解析（"All Crops" 为哨兵）
    pub fn parse(label: &str) -> Option<Self> {
        if label.trim().eq_ignore_ascii_case(ALL_CROPS_LABEL) {
            return Some(CropSelector::All);
        }
        Crop::parse(label).map(CropSelector::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropSelector::All => ALL_CROPS_LABEL,
            CropSelector::Only(crop) => crop.as_str(),
        }
    }

    pub fn accepts(&self, crop: Crop) -> bool {
        match self {
            CropSelector::All => true,
            CropSelector::Only(selected) => *selected == crop,
        }
    }

    /// 下拉框选项,哨兵在首位
    pub fn options() -> Vec<&'static str> {
        std::iter::once(ALL_CROPS_LABEL)
            .chain(Crop::ALL.iter().map(|c| c.as_str()))
            .collect()
    }
}

// ==========================================
// 等级筛选器
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradeSelector {
    #[default]
    All,
    Only(Grade),
}

impl GradeSelector {
    /// 从下拉框文本解析（"All Grades" 为哨兵）
    pub fn parse(label: &str) -> Option<Self> {
        if label.trim().eq_ignore_ascii_case(ALL_GRADES_LABEL) {
            return Some(GradeSelector::All);
        }
        Grade::parse(label).map(GradeSelector::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeSelector::All => ALL_GRADES_LABEL,
            GradeSelector::Only(grade) => grade.as_str(),
        }
    }

    pub fn accepts(&self, grade: Grade) -> bool {
        match self {
            GradeSelector::All => true,
            GradeSelector::Only(selected) => *selected == grade,
        }
    }

    pub fn options() -> Vec<&'static str> {
        std::iter::once(ALL_GRADES_LABEL)
            .chain(Grade::ALL.iter().map(|g| g.as_str()))
            .collect()
    }
}

// ==========================================
// FilterCriteria - 筛选条件
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub crop: CropSelector,
    pub grade: GradeSelector,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_crop(mut self, crop: CropSelector) -> Self {
        self.crop = crop;
        self
    }

    pub fn with_grade(mut self, grade: GradeSelector) -> Self {
        self.grade = grade;
        self
    }

    /// 无任何约束（筛选结果等于输入）
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.crop == CropSelector::All && self.grade == GradeSelector::All
    }
}

// ==========================================
// 导出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,         // 文本
    Spreadsheet, // Excel 工作簿
    Document,    // PDF 文档
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Csv,
        ExportFormat::Spreadsheet,
        ExportFormat::Document,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Document => "application/pdf",
        }
    }

    /// 对话框/通知中的展示名
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Spreadsheet => "Excel",
            ExportFormat::Document => "PDF",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "excel" | "xlsx" | "spreadsheet" => Some(ExportFormat::Spreadsheet),
            "pdf" | "document" => Some(ExportFormat::Document),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// ExportOptions - 导出选项
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_filters: bool, // true: 仅导出当前筛选结果
}

impl ExportOptions {
    pub fn new(format: ExportFormat, include_filters: bool) -> Self {
        Self {
            format,
            include_filters,
        }
    }
}
