// ==========================================
// 合作社生产记录 - Excel 渲染器
// ==========================================
// 工具: rust_xlsxwriter
// 结构: 单工作表 "Production Data",首行加粗表头,列宽按列调整
// ==========================================

use crate::domain::criteria::ExportFormat;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::payload::TabularPayload;
use crate::exporter::renderer::{ExportRenderer, RenderContext};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};

/// 工作表名称
pub const SHEET_NAME: &str = "Production Data";

/// 各列宽度（字符数）
pub const COLUMN_WIDTHS: [f64; 9] = [12.0, 12.0, 20.0, 12.0, 10.0, 10.0, 18.0, 15.0, 10.0];

pub struct XlsxRenderer;

impl ExportRenderer for XlsxRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Spreadsheet
    }

    fn render(&self, payload: &TabularPayload, _ctx: &RenderContext) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x328048))
            .set_border(FormatBorder::Thin);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, width) in COLUMN_WIDTHS.iter().enumerate().take(payload.column_count()) {
            worksheet.set_column_width(col_index(col)?, *width)?;
        }

        for (col, header) in payload.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col_index(col)?, header, &header_format)?;
        }

        for (row_idx, row) in payload.rows.iter().enumerate() {
            let row_num = u32::try_from(row_idx + 1)
                .map_err(|_| ExportError::XlsxRenderError(format!("行号超出范围: {}", row_idx)))?;
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_num, col_index(col)?, value)?;
            }
        }

        worksheet.set_freeze_panes(1, 0)?;

        let bytes = workbook.save_to_buffer()?;
        tracing::debug!(rows = payload.row_count(), bytes = bytes.len(), "Excel 渲染完成");
        Ok(bytes)
    }
}

fn col_index(col: usize) -> ExportResult<u16> {
    u16::try_from(col).map_err(|_| ExportError::XlsxRenderError(format!("列号超出范围: {}", col)))
}
