//! 模型协作方接口 - 生成调用的统一抽象

use anyhow::Result;
use async_trait::async_trait;

use crate::config::LLMConfig;

pub mod client;

pub use client::LLMClient;

/// 单次生成调用的采样参数
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// 温度
    pub temperature: f64,
    /// 核采样阈值
    pub top_p: f64,
    /// 最大tokens
    pub max_tokens: u32,
    /// 停止标记
    pub stop: Vec<String>,
}

impl From<&LLMConfig> for GenerateOptions {
    fn from(config: &LLMConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
            stop: Vec::new(),
        }
    }
}

/// 模型协作方 - 一次阻塞的生成调用：prompt进，文本出
///
/// 生产实现为基于rig的[`LLMClient`]，测试中以脚本化的mock替代。
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String>;
}
