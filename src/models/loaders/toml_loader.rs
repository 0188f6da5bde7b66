use crate::models::category::Category;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 种子数据中的题目，`id` 可省略，由存储层顺序分配
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: u8,
}

/// 种子数据文件内容
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// 解析 TOML 文本为种子数据
pub fn parse_seed(content: &str) -> Result<SeedData> {
    let seed: SeedData = toml::from_str(content).context("无法解析种子数据")?;
    Ok(seed)
}

/// 从 TOML 文件加载种子数据
pub async fn load_seed_file(seed_file_path: &Path) -> Result<SeedData> {
    if !seed_file_path.exists() {
        anyhow::bail!("种子文件不存在: {}", seed_file_path.display());
    }

    let content = fs::read_to_string(seed_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", seed_file_path.display()))?;

    let seed = parse_seed(&content)
        .with_context(|| format!("无法解析TOML文件: {}", seed_file_path.display()))?;

    tracing::info!(
        "成功加载 {} 个分类, {} 个题目",
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(seed)
}
