/// 分页引擎
///
/// 页码从 1 开始；只有空集合的第 1 页会返回空页，其余越界页码均为 NotFound
use crate::error::{QuizError, Result};
use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::debug;

/// 分页请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: NonZeroUsize,
}

impl PageRequest {
    /// 页码缺失或非正数时按第 1 页处理
    pub fn new(page_number: Option<i64>, page_size: NonZeroUsize) -> Self {
        let page_number = page_number
            .filter(|n| *n > 0)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(1);
        Self {
            page_number,
            page_size,
        }
    }

    /// 解析查询参数中的原始页码，无法解析时按第 1 页处理
    pub fn from_query(raw: Option<&str>, page_size: NonZeroUsize) -> Self {
        let page_number = raw.and_then(|v| v.trim().parse::<i64>().ok());
        Self::new(page_number, page_size)
    }

    pub fn first(page_size: NonZeroUsize) -> Self {
        Self::new(None, page_size)
    }

    /// 从 0 开始的起始偏移量
    pub fn offset(&self) -> usize {
        (self.page_number as usize - 1).saturating_mul(self.page_size.get())
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 未分页前的总数
    pub total_count: usize,
    pub page_number: u32,
    pub page_size: usize,
}

/// 对有序集合分页，保持输入顺序
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Result<Page<T>> {
    let start = request.offset();

    if start >= items.len() && request.page_number > 1 {
        debug!(
            "页码 {} 超出范围 (共 {} 条, 每页 {} 条)",
            request.page_number,
            items.len(),
            request.page_size
        );
        return Err(QuizError::not_found(format!(
            "page {} is beyond the available data",
            request.page_number
        )));
    }

    let end = start.saturating_add(request.page_size.get()).min(items.len());
    let slice = items.get(start..end).unwrap_or_default();

    Ok(Page {
        items: slice.to_vec(),
        total_count: items.len(),
        page_number: request.page_number,
        page_size: request.page_size.get(),
    })
}
