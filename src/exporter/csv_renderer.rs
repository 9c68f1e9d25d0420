// ==========================================
// 合作社生产记录 - CSV 渲染器
// ==========================================
// 规则: 表头 + 每条记录一行,逗号分隔,\n 连接（无尾随换行）
// 规则: 农户列恒加双引号; 其他列含逗号/引号/换行时加双引号
// ==========================================

use crate::domain::criteria::ExportFormat;
use crate::exporter::error::ExportResult;
use crate::exporter::payload::{TabularPayload, FARMER_COLUMN};
use crate::exporter::renderer::{ExportRenderer, RenderContext};

pub struct CsvRenderer;

impl CsvRenderer {
    /// 渲染为 CSV 文本
    pub fn render_text(&self, payload: &TabularPayload) -> String {
        let header = payload
            .headers
            .iter()
            .map(|h| escape_field(h, false))
            .collect::<Vec<_>>()
            .join(",");

        std::iter::once(header)
            .chain(payload.rows.iter().map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(idx, field)| escape_field(field, idx == FARMER_COLUMN))
                    .collect::<Vec<_>>()
                    .join(",")
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ExportRenderer for CsvRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, payload: &TabularPayload, _ctx: &RenderContext) -> ExportResult<Vec<u8>> {
        Ok(self.render_text(payload).into_bytes())
    }
}

/// 按需加引号,内部双引号转义为两个双引号
fn escape_field(field: &str, always_quote: bool) -> String {
    let needs_quote =
        always_quote || field.contains(',') || field.contains('"') || field.contains('\n');
    if needs_quote {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
