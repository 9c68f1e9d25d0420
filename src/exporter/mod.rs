// ==========================================
// 合作社生产记录 - 导出层
// ==========================================
// 职责: 载荷构建、CSV/Excel/PDF 渲染、导出文件回读
// ==========================================

pub mod csv_renderer;
pub mod error;
pub mod payload;
pub mod payload_reader;
pub mod pdf_renderer;
pub mod renderer;
pub mod xlsx_renderer;

pub use csv_renderer::CsvRenderer;
pub use error::{ExportError, ExportResult};
pub use payload::{build_payload, export_headers, TabularPayload, EXPORT_COLUMN_COUNT};
pub use payload_reader::{CsvPayloadReader, ExcelPayloadReader, UniversalPayloadReader};
pub use pdf_renderer::PdfRenderer;
pub use renderer::{
    default_export_dir, export_file_name, ExportDispatcher, ExportRenderer, ExportedFile,
    RenderContext, UniversalRenderer,
};
pub use xlsx_renderer::XlsxRenderer;
