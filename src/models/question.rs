use serde::{Deserialize, Serialize};

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 由存储层分配，创建后不可变
    pub id: i64,
    /// 题干
    pub question: String,
    pub answer: String,
    /// 所属分类 ID
    pub category: i64,
    /// 难度
    pub difficulty: u8,
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let preview = if self.question.chars().count() > 80 {
            self.question.chars().take(80).collect::<String>() + "..."
        } else {
            self.question.clone()
        };
        write!(f, "#{} {} [分类: {}, 难度: {}]", self.id, preview, self.category, self.difficulty)
    }
}

/// 校验通过、待写入存储层的新题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: u8,
}

/// 创建题目的原始请求
///
/// 所有字段都可能缺失；`category` 和 `difficulty` 同时接受整数和数字字符串
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_int_like")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_int_like")]
    pub difficulty: Option<String>,
}

impl QuestionDraft {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl ToString,
        difficulty: impl ToString,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category.to_string()),
            difficulty: Some(difficulty.to_string()),
        }
    }
}

// Helper function to deserialize an integer field sent either as string or integer
fn deserialize_int_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct IntLikeVisitor;

    impl<'de> Visitor<'de> for IntLikeVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IntLikeVisitor)
}
