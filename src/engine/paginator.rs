// ==========================================
// 合作社生产记录 - 分页器
// ==========================================
// total_pages = max(1, ceil(len / page_size))
// 页切片 = [(page-1)*size, page*size) 截断到序列边界
// 红线: 越界页返回空切片,不报错
// 红线: 翻页夹紧在 [1, total_pages],边界处为空操作
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// 计算总页数（空序列也报告 1 页）
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_items.div_ceil(size).max(1)
}

// ==========================================
// Page - 分页结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// "第 X–Y 条 / 共 N 条" 的 1 基区间,空页返回 None
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// 取第 page 页（1 基）
///
/// page_size 为 0 时按 1 处理; page 为 0 或超出总页数时返回空切片
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let pages = total_pages(items.len(), size);

    let slice = if page == 0 {
        &items[..0]
    } else {
        let start = (page - 1).saturating_mul(size).min(items.len());
        let end = page.saturating_mul(size).min(items.len());
        &items[start..end]
    };

    tracing::debug!(page, page_size = size, total_pages = pages, len = slice.len(), "分页");

    Page {
        items: slice,
        page,
        page_size: size,
        total_pages: pages,
        total_items: items.len(),
    }
}

// ==========================================
// PageCursor - 当前页游标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    current: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// 下一页; 已在末页时不变。返回是否移动
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current < total_pages {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// 上一页; 已在首页时不变。返回是否移动
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// 跳转到指定页,夹紧到 [1, total_pages]
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current = page.clamp(1, total_pages.max(1));
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}
