// ==========================================
// 合作社生产记录 - 导出文件回读
// ==========================================
// 职责: 将 CSV / Excel 导出文件解析回 TabularPayload
// 用途: 导出校验、导出文件再导入
// ==========================================

use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::payload::{TabularPayload, EXPORT_COLUMN_COUNT};
use calamine::{Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// CSV 回读
// ==========================================
pub struct CsvPayloadReader;

impl CsvPayloadReader {
    pub fn read(&self, bytes: &[u8]) -> ExportResult<TabularPayload> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        check_header_width(&headers)?;

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.to_string()).collect();

            // 跳过完全空白的行
            if row.iter().all(|v| v.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(TabularPayload { headers, rows })
    }
}

// ==========================================
// Excel 回读
// ==========================================
pub struct ExcelPayloadReader;

impl ExcelPayloadReader {
    pub fn read(&self, bytes: &[u8]) -> ExportResult<TabularPayload> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ExportError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut rows_iter = range.rows();
        let header_row = rows_iter
            .next()
            .ok_or_else(|| ExportError::ExcelParseError("Excel 文件无数据行".to_string()))?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
        check_header_width(&headers)?;

        // 读取数据行
        let mut rows = Vec::new();
        for data_row in rows_iter {
            let row: Vec<String> = data_row.iter().map(|cell| cell.to_string()).collect();
            if row.iter().all(|v| v.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(TabularPayload { headers, rows })
    }
}

// ==========================================
// 通用回读（根据扩展名自动选择）
// ==========================================
pub struct UniversalPayloadReader;

impl UniversalPayloadReader {
    pub fn read_file<P: AsRef<Path>>(&self, file_path: P) -> ExportResult<TabularPayload> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvPayloadReader.read(&fs::read(path)?),
            "xlsx" => ExcelPayloadReader.read(&fs::read(path)?),
            _ => Err(ExportError::UnsupportedFormat(ext)),
        }
    }
}

fn check_header_width(headers: &[String]) -> ExportResult<()> {
    if headers.len() != EXPORT_COLUMN_COUNT {
        return Err(ExportError::HeaderMismatch {
            expected: EXPORT_COLUMN_COUNT,
            actual: headers.len(),
        });
    }
    Ok(())
}
