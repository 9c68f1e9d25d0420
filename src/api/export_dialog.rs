// ==========================================
// 合作社生产记录 - 导出对话框状态
// ==========================================
// 规则: 未选择格式时不可确认
// 规则: "仅导出筛选结果" 默认勾选
// 规则: 确认或关闭后状态复位
// ==========================================

use crate::domain::criteria::{ExportFormat, ExportOptions};
use crate::i18n::t;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDialog {
    open: bool,
    selected_format: Option<ExportFormat>,
    include_filters: bool,
}

impl Default for ExportDialog {
    fn default() -> Self {
        Self {
            open: false,
            selected_format: None,
            include_filters: true,
        }
    }
}

impl ExportDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 打开对话框（清空上次的选择）
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn select_format(&mut self, format: ExportFormat) {
        self.selected_format = Some(format);
    }

    pub fn selected_format(&self) -> Option<ExportFormat> {
        self.selected_format
    }

    pub fn set_include_filters(&mut self, include_filters: bool) {
        self.include_filters = include_filters;
    }

    pub fn include_filters(&self) -> bool {
        self.include_filters
    }

    /// 确认按钮是否可用
    pub fn can_export(&self) -> bool {
        self.open && self.selected_format.is_some()
    }

    /// 确认按钮不可用时的提示文本（对话框关闭时无提示）
    pub fn blocking_message(&self) -> Option<String> {
        if self.open && self.selected_format.is_none() {
            Some(t("export.no_format_selected"))
        } else {
            None
        }
    }

    /// 确认导出; 未选择格式时返回 None 且对话框保持打开
    pub fn confirm(&mut self) -> Option<ExportOptions> {
        if !self.can_export() {
            return None;
        }
        let format = self.selected_format?;
        let options = ExportOptions::new(format, self.include_filters);
        self.close();
        Some(options)
    }
}
