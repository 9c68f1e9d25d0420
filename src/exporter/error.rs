// ==========================================
// 合作社生产记录 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 渲染错误 =====
    #[error("CSV 生成失败: {0}")]
    CsvRenderError(String),

    #[error("Excel 生成失败: {0}")]
    XlsxRenderError(String),

    #[error("PDF 生成失败: {0}")]
    PdfRenderError(String),

    // ===== 回读错误 =====
    #[error("文件格式不支持: {0}（仅支持 .csv/.xlsx）")]
    UnsupportedFormat(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("表头不匹配: 期望 {expected} 列, 实际 {actual} 列")]
    HeaderMismatch { expected: usize, actual: usize },

    // ===== 文件写出错误 =====
    #[error("文件写出失败: {0}")]
    FileWriteError(String),

    #[error("导出目录不可用: {0}")]
    ExportDirUnavailable(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ExportError {
    fn from(err: calamine::XlsxError) -> Self {
        ExportError::ExcelParseError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::XlsxRenderError(err.to_string())
    }
}

impl From<printpdf::Error> for ExportError {
    fn from(err: printpdf::Error) -> Self {
        ExportError::PdfRenderError(format!("{:?}", err))
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
