// ==========================================
// 合作社生产记录 - 导出渲染器接口
// ==========================================
// 职责: 定义渲染 trait、渲染上下文、导出文件与文件命名
// 红线: 渲染器是载荷 + 上下文的纯函数,不读仓储,不读时钟
// ==========================================

use crate::domain::criteria::ExportFormat;
use crate::exporter::csv_renderer::CsvRenderer;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::payload::TabularPayload;
use crate::exporter::pdf_renderer::PdfRenderer;
use crate::exporter::xlsx_renderer::XlsxRenderer;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认文件名主干
pub const DEFAULT_FILE_STEM: &str = "production-data";

/// 默认报表标题
pub const DEFAULT_REPORT_TITLE: &str = "Agribind - Production Report";

/// 文件名时间戳格式
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// `{stem}_{YYYYMMDD_HHMM}.{ext}`
pub fn export_file_name(stem: &str, format: ExportFormat, generated_at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        stem,
        generated_at.format(FILE_TIMESTAMP_FORMAT),
        format.extension()
    )
}

// ==========================================
// RenderContext - 渲染上下文
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub file_stem: String,
    pub title: String,
    pub generated_at: NaiveDateTime,
}

impl RenderContext {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            file_stem: DEFAULT_FILE_STEM.to_string(),
            title: DEFAULT_REPORT_TITLE.to_string(),
            generated_at,
        }
    }

    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        export_file_name(&self.file_stem, format, self.generated_at)
    }
}

// ==========================================
// ExportedFile - 生成的可下载文件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

impl ExportedFile {
    /// 写入目录,返回完整路径（同名文件覆盖）
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> ExportResult<PathBuf> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        if !dir.is_dir() {
            return Err(ExportError::ExportDirUnavailable(dir.display().to_string()));
        }

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "导出文件已写出");
        Ok(path)
    }
}

/// 默认导出目录: 用户下载目录,不可用时退回当前目录
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

// ==========================================
// ExportRenderer Trait
// ==========================================
pub trait ExportRenderer {
    fn format(&self) -> ExportFormat;

    /// 渲染为文件字节
    fn render(&self, payload: &TabularPayload, ctx: &RenderContext) -> ExportResult<Vec<u8>>;

    /// 渲染并包装为可下载文件
    fn export(&self, payload: &TabularPayload, ctx: &RenderContext) -> ExportResult<ExportedFile> {
        let format = self.format();
        let bytes = self.render(payload, ctx)?;
        Ok(ExportedFile {
            format,
            file_name: ctx.file_name(format),
            mime_type: format.mime_type(),
            bytes,
            row_count: payload.row_count(),
        })
    }
}

// ==========================================
// ExportDispatcher Trait - 按格式分派渲染
// ==========================================
/// API 层持有的渲染入口,可替换（如测试中注入失败的渲染器）
pub trait ExportDispatcher: Send + Sync {
    fn export(
        &self,
        format: ExportFormat,
        payload: &TabularPayload,
        ctx: &RenderContext,
    ) -> ExportResult<ExportedFile>;
}

// ==========================================
// 通用渲染器（根据格式自动选择）
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalRenderer;

impl UniversalRenderer {
    pub fn export(
        &self,
        format: ExportFormat,
        payload: &TabularPayload,
        ctx: &RenderContext,
    ) -> ExportResult<ExportedFile> {
        match format {
            ExportFormat::Csv => CsvRenderer.export(payload, ctx),
            ExportFormat::Spreadsheet => XlsxRenderer.export(payload, ctx),
            ExportFormat::Document => PdfRenderer.export(payload, ctx),
        }
    }
}

impl ExportDispatcher for UniversalRenderer {
    fn export(
        &self,
        format: ExportFormat,
        payload: &TabularPayload,
        ctx: &RenderContext,
    ) -> ExportResult<ExportedFile> {
        UniversalRenderer::export(self, format, payload, ctx)
    }
}
