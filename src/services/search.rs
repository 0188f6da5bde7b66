//! 题目搜索
//!
//! 只匹配题干，不匹配答案；空搜索词视为错误而不是"匹配全部"

use crate::error::{QuizError, Result};
use crate::models::Question;
use crate::store::QuestionStore;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// 把搜索词构建成不区分大小写的字面量匹配表达式
pub fn term_matcher(term: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            warn!("无法构建搜索表达式 '{}': {}", term, e);
            QuizError::bad_request(format!("search term cannot be matched: {e}"))
        })
}

/// 按题干过滤，结果按 id 升序
pub fn filter_questions(questions: Vec<Question>, matcher: &Regex) -> Vec<Question> {
    let mut matched: Vec<Question> = questions
        .into_iter()
        .filter(|q| matcher.is_match(&q.question))
        .collect();
    matched.sort_by_key(|q| q.id);
    matched
}

/// 校验搜索词并查询存储层
pub fn search<S: QuestionStore + ?Sized>(store: &S, term: &str) -> Result<Vec<Question>> {
    let term = term.trim();
    if term.is_empty() {
        warn!("搜索词为空");
        return Err(QuizError::bad_request("search term must not be empty"));
    }

    let matcher = term_matcher(term)?;
    let mut results = store.search(&matcher)?;
    results.sort_by_key(|q| q.id);
    debug!("搜索 '{}' 命中 {} 个题目", term, results.len());

    Ok(results)
}
