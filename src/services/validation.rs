//! 公共校验
//!
//! 结构性问题（缺字段、格式错误）返回 BadRequest，
//! 违反业务规则（分类不存在、难度越界、题目不存在）返回 Unprocessable

use std::ops::RangeInclusive;

use tracing::warn;

use crate::error::{QuizError, Result};
use crate::models::{NewQuestion, QuestionDraft};
use crate::store::CategoryStore;

/// 必填文本字段，去掉首尾空白后不能为空
fn required_text(value: Option<String>, field: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => {
            warn!("缺少必填字段: {}", field);
            Err(QuizError::bad_request(format!("{field} is required")))
        }
    }
}

/// 必填整数字段
fn required_int(value: Option<String>, field: &str) -> Result<i64> {
    let raw = required_text(value, field)?;
    raw.parse::<i64>().map_err(|_| {
        warn!("字段 {} 不是整数: '{}'", field, raw);
        QuizError::bad_request(format!("{field} must be an integer"))
    })
}

/// 校验分类过滤条件是否引用了已存在的分类
pub fn validate_category_filter<S: CategoryStore + ?Sized>(store: &S, category_id: i64) -> Result<()> {
    if store.exists(category_id)? {
        Ok(())
    } else {
        warn!("分类不存在: {}", category_id);
        Err(QuizError::unprocessable(format!(
            "category {category_id} does not exist"
        )))
    }
}

/// 校验新题目
pub fn validate_new_question<S: CategoryStore + ?Sized>(
    draft: QuestionDraft,
    categories: &S,
    difficulty_range: RangeInclusive<u8>,
) -> Result<NewQuestion> {
    let question = required_text(draft.question, "question")?;
    let answer = required_text(draft.answer, "answer")?;
    let category = required_int(draft.category, "category")?;
    let difficulty = required_int(draft.difficulty, "difficulty")?;

    validate_category_filter(categories, category)?;

    let difficulty = u8::try_from(difficulty)
        .ok()
        .filter(|d| difficulty_range.contains(d))
        .ok_or_else(|| {
            warn!("难度 {} 超出范围 {:?}", difficulty, difficulty_range);
            QuizError::unprocessable(format!(
                "difficulty must be between {} and {}",
                difficulty_range.start(),
                difficulty_range.end()
            ))
        })?;

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

/// 解析路径中的题目 id，非整数返回 BadRequest
pub fn parse_question_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        warn!("非法的题目 id: '{}'", raw);
        QuizError::bad_request(format!("'{raw}' is not a valid question id"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::store::InMemoryStore;

    fn categories() -> InMemoryStore {
        InMemoryStore::with_data(vec![Category::new(4, "History")], vec![], 1..=5).unwrap()
    }

    fn draft() -> QuestionDraft {
        QuestionDraft::new("Who was the US president in 2021", "Joe Biden", 4, 4)
    }

    #[test]
    fn test_valid_draft() {
        let new_question = validate_new_question(draft(), &categories(), 1..=5).unwrap();
        assert_eq!(new_question.category, 4);
        assert_eq!(new_question.difficulty, 4);
        assert_eq!(new_question.answer, "Joe Biden");
    }

    #[test]
    fn test_missing_or_empty_fields_are_bad_request() {
        let cases = [
            QuestionDraft { question: None, ..draft() },
            QuestionDraft { answer: Some("  ".to_string()), ..draft() },
            QuestionDraft { category: None, ..draft() },
            QuestionDraft { difficulty: Some(String::new()), ..draft() },
            QuestionDraft { difficulty: Some("hard".to_string()), ..draft() },
            QuestionDraft::default(),
        ];
        for case in cases {
            assert!(matches!(
                validate_new_question(case, &categories(), 1..=5),
                Err(QuizError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn test_domain_rule_violations_are_unprocessable() {
        let unknown_category = QuestionDraft { category: Some("99".to_string()), ..draft() };
        assert!(matches!(
            validate_new_question(unknown_category, &categories(), 1..=5),
            Err(QuizError::Unprocessable(_))
        ));

        for difficulty in ["0", "6", "-1", "300"] {
            let case = QuestionDraft { difficulty: Some(difficulty.to_string()), ..draft() };
            assert!(matches!(
                validate_new_question(case, &categories(), 1..=5),
                Err(QuizError::Unprocessable(_))
            ));
        }
    }

    #[test]
    fn test_difficulty_range_is_configurable() {
        let case = QuestionDraft { difficulty: Some("8".to_string()), ..draft() };
        assert!(validate_new_question(case, &categories(), 1..=10).is_ok());
    }

    #[test]
    fn test_parse_question_id() {
        assert_eq!(parse_question_id("2").unwrap(), 2);
        assert_eq!(parse_question_id("1000").unwrap(), 1000);
        assert!(matches!(parse_question_id("asdfgh10"), Err(QuizError::BadRequest(_))));
        assert!(matches!(parse_question_id(""), Err(QuizError::BadRequest(_))));
    }
}
