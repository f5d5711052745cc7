use std::sync::Arc;

use anyhow::Result;

use crate::{config::Config, llm::LLMClient, llm::ModelClient};

/// 生成器上下文 - 显式持有模型句柄与配置，贯穿一次会话的所有生成调用
///
/// 模型句柄在启动时构造一次，此后只读。
#[derive(Clone)]
pub struct GeneratorContext {
    /// 模型协作方，用于与AI通信。
    pub model: Arc<dyn ModelClient>,
    /// 配置
    pub config: Config,
}

impl GeneratorContext {
    /// 创建新的生成器上下文（生产路径，基于rig的LLM客户端）
    ///
    /// 构造客户端后先做一次连接检查，失败时直接返回错误。
    pub async fn new(config: Config) -> Result<Self> {
        let client = LLMClient::new(config.llm.clone())?;
        client.check_connection().await?;
        Ok(Self {
            model: Arc::new(client),
            config,
        })
    }

    /// 用外部提供的模型句柄构造上下文（测试或自定义客户端）
    pub fn with_model(config: Config, model: Arc<dyn ModelClient>) -> Self {
        Self { model, config }
    }
}
