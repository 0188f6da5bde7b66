use serde::{Deserialize, Serialize};

/// 题目分类
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// 分类名称，对外字段名为 `type`
    #[serde(rename = "type")]
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_name_as_type() {
        let value = serde_json::to_value(Category::new(3, "Geography")).unwrap();
        assert_eq!(value["type"], "Geography");
        assert_eq!(value["id"], 3);
    }
}
