// ==========================================
// 合作社生产记录 - PDF 渲染器
// ==========================================
// 工具: printpdf（内置 Helvetica 字体）
// 版式: A4 横向; 首页标题 + 生成时间; 表格每页重复表头
// 版式: 表头加粗底色,数据行隔行底纹,单元格内折行
// 版式: 每页底部居中 "Page X of Y"
// ==========================================
// 先排版（纯计算,可测）,再绘制
// ==========================================

use crate::domain::criteria::ExportFormat;
use crate::exporter::error::ExportResult;
use crate::exporter::payload::TabularPayload;
use crate::exporter::renderer::{ExportRenderer, RenderContext};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb};

// ===== 页面尺寸（mm）=====
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
const MARGIN_LEFT_MM: f32 = 14.0;
const TABLE_TOP_MM: f32 = 28.0;
const TABLE_BOTTOM_LIMIT_MM: f32 = 20.0; // 距页底,留给页脚
const TITLE_TOP_MM: f32 = 15.0;
const GENERATED_TOP_MM: f32 = 22.0;
const FOOTER_BOTTOM_MM: f32 = 10.0;

// ===== 字号（pt）=====
const TITLE_FONT_PT: f32 = 18.0;
const GENERATED_FONT_PT: f32 = 10.0;
const HEAD_FONT_PT: f32 = 9.0;
const BODY_FONT_PT: f32 = 8.0;
const FOOTER_FONT_PT: f32 = 8.0;

// ===== 单元格 =====
const CELL_PADDING_MM: f32 = 2.0;
const LINE_SPACING: f32 = 1.15;
const PT_TO_MM: f32 = 0.3528;
const AVG_CHAR_WIDTH_EM: f32 = 0.5; // Helvetica 平均字宽估算

/// 各列宽度（mm）
pub const COLUMN_WIDTHS_MM: [f32; 9] = [22.0, 22.0, 40.0, 20.0, 20.0, 18.0, 35.0, 28.0, 20.0];

// ===== 配色 =====
const BRAND_GREEN: (f32, f32, f32) = (50.0 / 255.0, 128.0 / 255.0, 72.0 / 255.0);
const ROW_SHADE: (f32, f32, f32) = (249.0 / 255.0, 250.0 / 255.0, 251.0 / 255.0);
const BODY_TEXT: (f32, f32, f32) = (44.0 / 255.0, 44.0 / 255.0, 44.0 / 255.0);
const MUTED_TEXT: (f32, f32, f32) = (100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0);
const FOOTER_TEXT: (f32, f32, f32) = (150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0);
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);

// ==========================================
// 排版结果
// ==========================================

/// 排好版的一行（每个单元格已折行）
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutRow {
    pub cells: Vec<Vec<String>>,
    pub height_mm: f32,
    pub shaded: bool,
}

/// 一页表格内容
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub header: LaidOutRow,
    pub rows: Vec<LaidOutRow>,
}

/// 把载荷排成若干页; 空载荷也返回一页（仅表头）
pub fn layout_pages(payload: &TabularPayload) -> Vec<PageLayout> {
    let header = layout_row(&payload.headers, HEAD_FONT_PT, false);
    let available = PAGE_HEIGHT_MM - TABLE_TOP_MM - TABLE_BOTTOM_LIMIT_MM - header.height_mm;

    let mut pages = Vec::new();
    let mut current: Vec<LaidOutRow> = Vec::new();
    let mut used = 0.0_f32;

    for (idx, row) in payload.rows.iter().enumerate() {
        let laid = layout_row(row, BODY_FONT_PT, idx % 2 == 1);
        // 单行超过整页高度时仍独占一页
        if !current.is_empty() && used + laid.height_mm > available {
            pages.push(PageLayout {
                header: header.clone(),
                rows: std::mem::take(&mut current),
            });
            used = 0.0;
        }
        used += laid.height_mm;
        current.push(laid);
    }

    pages.push(PageLayout {
        header,
        rows: current,
    });
    pages
}

fn layout_row(values: &[String], font_pt: f32, shaded: bool) -> LaidOutRow {
    let cells: Vec<Vec<String>> = values
        .iter()
        .enumerate()
        .map(|(col, value)| {
            let width = COLUMN_WIDTHS_MM.get(col).copied().unwrap_or(20.0);
            wrap_text(value, max_chars(width, font_pt))
        })
        .collect();

    let max_lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    LaidOutRow {
        cells,
        height_mm: max_lines as f32 * line_height_mm(font_pt) + 2.0 * CELL_PADDING_MM,
        shaded,
    }
}

fn line_height_mm(font_pt: f32) -> f32 {
    font_pt * PT_TO_MM * LINE_SPACING
}

fn char_width_mm(font_pt: f32) -> f32 {
    font_pt * PT_TO_MM * AVG_CHAR_WIDTH_EM
}

fn max_chars(col_width_mm: f32, font_pt: f32) -> usize {
    let usable = (col_width_mm - 2.0 * CELL_PADDING_MM).max(char_width_mm(font_pt));
    ((usable / char_width_mm(font_pt)).floor() as usize).max(1)
}

/// 按词折行; 超长单词按字符硬切
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let line_len = line.chars().count();
        if line.is_empty() {
            line = word;
        } else if line_len + 1 + word.chars().count() <= max_chars {
            line.push(' ');
            line.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut line, word));
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

// ==========================================
// PdfRenderer - PDF 渲染器
// ==========================================
pub struct PdfRenderer;

impl ExportRenderer for PdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Document
    }

    fn render(&self, payload: &TabularPayload, ctx: &RenderContext) -> ExportResult<Vec<u8>> {
        let pages = layout_pages(payload);
        let page_count = pages.len();

        let (doc, first_page, first_layer) = PdfDocument::new(
            ctx.title.clone(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1".to_string(),
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut first = Some((first_page, first_layer));
        for (page_idx, page) in pages.iter().enumerate() {
            let (page_ref, layer_ref) = match first.take() {
                Some(refs) => refs,
                None => doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Layer {}", page_idx + 1),
                ),
            };
            let layer = doc.get_page(page_ref).get_layer(layer_ref);

            if page_idx == 0 {
                draw_title_block(&layer, ctx, &bold, &regular);
            }

            let mut top = TABLE_TOP_MM;
            draw_row(&layer, &page.header, top, HEAD_FONT_PT, &bold, Some(BRAND_GREEN), WHITE);
            top += page.header.height_mm;

            for row in &page.rows {
                let fill = if row.shaded { Some(ROW_SHADE) } else { None };
                draw_row(&layer, row, top, BODY_FONT_PT, &regular, fill, BODY_TEXT);
                top += row.height_mm;
            }

            draw_footer(&layer, page_idx + 1, page_count, &regular);
        }

        let bytes = doc.save_to_bytes()?;
        tracing::debug!(
            rows = payload.row_count(),
            pages = page_count,
            bytes = bytes.len(),
            "PDF 渲染完成"
        );
        Ok(bytes)
    }
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// 自页顶的距离换算为 PDF 坐标（原点在左下）
fn from_top(mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - mm)
}

fn draw_title_block(
    layer: &PdfLayerReference,
    ctx: &RenderContext,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
) {
    layer.set_fill_color(rgb(BRAND_GREEN));
    layer.use_text(
        ctx.title.clone(),
        TITLE_FONT_PT,
        Mm(MARGIN_LEFT_MM),
        from_top(TITLE_TOP_MM),
        bold,
    );

    layer.set_fill_color(rgb(MUTED_TEXT));
    layer.use_text(
        format!("Generated: {}", ctx.generated_at.format("%d/%m/%Y %H:%M:%S")),
        GENERATED_FONT_PT,
        Mm(MARGIN_LEFT_MM),
        from_top(GENERATED_TOP_MM),
        regular,
    );
}

fn draw_row(
    layer: &PdfLayerReference,
    row: &LaidOutRow,
    top_mm: f32,
    font_pt: f32,
    font: &IndirectFontRef,
    fill: Option<(f32, f32, f32)>,
    text_color: (f32, f32, f32),
) {
    let table_width: f32 = COLUMN_WIDTHS_MM.iter().sum();

    if let Some(fill) = fill {
        layer.set_fill_color(rgb(fill));
        layer.add_rect(Rect::new(
            Mm(MARGIN_LEFT_MM),
            from_top(top_mm + row.height_mm),
            Mm(MARGIN_LEFT_MM + table_width),
            from_top(top_mm),
        ));
    }

    layer.set_fill_color(rgb(text_color));
    let line_height = line_height_mm(font_pt);
    let mut x = MARGIN_LEFT_MM;
    for (col, lines) in row.cells.iter().enumerate() {
        for (line_idx, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = top_mm + CELL_PADDING_MM + font_pt * PT_TO_MM + line_idx as f32 * line_height;
            layer.use_text(
                line.clone(),
                font_pt,
                Mm(x + CELL_PADDING_MM),
                from_top(baseline),
                font,
            );
        }
        x += COLUMN_WIDTHS_MM.get(col).copied().unwrap_or(20.0);
    }
}

fn draw_footer(layer: &PdfLayerReference, page: usize, page_count: usize, font: &IndirectFontRef) {
    let text = format!("Page {} of {}", page, page_count);
    let width = text.chars().count() as f32 * char_width_mm(FOOTER_FONT_PT);

    layer.set_fill_color(rgb(FOOTER_TEXT));
    layer.use_text(
        text,
        FOOTER_FONT_PT,
        Mm(PAGE_WIDTH_MM / 2.0 - width / 2.0),
        Mm(FOOTER_BOTTOM_MM),
        font,
    );
}
