//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

use crate::config::LLMConfig;
use crate::llm::{GenerateOptions, ModelClient};

mod providers;

use providers::ProviderClient;

/// 固定的系统预设，保证模型只输出所请求的内容本身
const SYSTEM_PREAMBLE: &str = "You are an expert software engineer. \
Reply with exactly the content requested, without surrounding explanation.";

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        let options = GenerateOptions::from(&self.config);
        match self.generate("Hello", &options).await {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let max_retries = self.config.retry_attempts;
        let retry_delay_ms = self.config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {}次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }
}

#[async_trait]
impl ModelClient for LLMClient {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String> {
        let agent = self
            .client
            .create_agent(&self.config.model, SYSTEM_PREAMBLE, options);

        self.retry_with_backoff(|| async { agent.prompt(prompt).await })
            .await
    }
}
