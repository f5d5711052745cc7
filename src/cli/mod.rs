use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::config::{Config, LLMProvider};
use crate::generator::assembler::{ProjectAssembler, save_file};
use crate::generator::context::GeneratorContext;

mod interactive;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// 交互模式：REPL中创建项目或单个文件
    Interactive,
    /// 批处理模式：从需求文件生成完整项目
    File,
    /// 单文件模式：生成一个指定文件
    Single,
}

/// codesmith-rs - 由Rust与AI驱动的代码生成引擎
#[derive(Parser, Debug)]
#[command(name = "codesmith-rs")]
#[command(
    about = "AI-based code generation engine. It plans a project structure from natural-language requirements, generates each file with an LLM, cleans the output and writes the project to disk."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 运行模式
    #[arg(long, value_enum, default_value_t = Mode::Interactive)]
    pub mode: Mode,

    /// 输出路径（未指定时采用配置文件或默认值）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 需求文件路径（file模式）
    #[arg(short, long)]
    pub requirements: Option<PathBuf>,

    /// 要生成的文件名（single模式）
    #[arg(long)]
    pub single_file: Option<String>,

    /// 单文件的需求描述（single模式）
    #[arg(long)]
    pub single_requirements: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 代码生成使用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// LLM Provider (openai, moonshot, deepseek, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|e| {
                eprintln!(
                    "⚠️ 警告: 无法读取配置文件 {:?}: {}，使用默认配置",
                    config_path, e
                );
                Config::default()
            })
        } else {
            // 没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("codesmith.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|e| {
                    eprintln!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}: {}，使用默认配置",
                        default_config_path, e
                    );
                    Config::default()
                })
            } else {
                Config::default()
            }
        };

        // 覆盖配置文件中的设置（未传入的参数保留配置文件的值）
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if self.verbose {
            config.verbose = true;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = api_base_url;
        }
        if let Some(api_key) = self.llm_api_key {
            config.llm.api_key = api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        config
    }
}

/// 启动入口：初始化模型句柄并按模式分发
pub async fn run(args: Args) -> Result<()> {
    println!(
        r#"
╔══════════════════════════════════════════╗
║              CODESMITH-RS                ║
║        AI代码生成引擎                    ║
╚══════════════════════════════════════════╝
"#
    );

    let mode = args.mode;
    let requirements_file = args.requirements.clone();
    let single_file = args.single_file.clone();
    let single_requirements = args.single_requirements.clone();

    let config = args.into_config();
    println!(
        "🔧 模型: {} (provider: {})",
        config.llm.model, config.llm.provider
    );

    // 模型句柄在此构造一次，检查连接后贯穿整个会话只读使用
    let context = GeneratorContext::new(config).await?;

    println!("🚀 codesmith-rs 已就绪");

    match mode {
        Mode::Interactive => interactive::run(&context).await,
        Mode::File => {
            let path =
                requirements_file.context("❌ file模式需要 --requirements 指定需求文件")?;
            run_from_file(&context, &path).await
        }
        Mode::Single => {
            let filename =
                single_file.context("❌ single模式需要 --single-file 指定文件名")?;
            let requirements = single_requirements
                .context("❌ single模式需要 --single-requirements 指定需求")?;
            run_single(&context, &requirements, &filename).await
        }
    }
}

/// 从需求文件批量生成完整项目
async fn run_from_file(context: &GeneratorContext, requirements_file: &PathBuf) -> Result<()> {
    let requirements = std::fs::read_to_string(requirements_file)
        .context(format!("❌ 文件未找到: {:?}", requirements_file))?;

    println!("📖 读取需求文件: {:?}", requirements_file);
    println!("📁 输出目录: {:?}", context.config.output_path);

    let assembler = ProjectAssembler::new(context);
    let summary = assembler
        .generate_project(&requirements, &context.config.output_path)
        .await?;

    println!("\n✅ 项目生成完成");
    println!("🏷️  名称: {}", summary.project_name);
    println!("📊 文件数: {}", summary.files.len());

    Ok(())
}

/// 生成单个文件并写入输出目录
async fn run_single(context: &GeneratorContext, requirements: &str, filename: &str) -> Result<()> {
    println!("⚙️ 生成单个文件: {}", filename);

    let assembler = ProjectAssembler::new(context);
    let file = assembler.generate_single_file(requirements, filename).await?;

    println!("📏 语言: {}", file.language);
    if !file.dependencies.is_empty() {
        println!("📦 依赖: {}", file.dependencies.join(", "));
    }

    save_file(&file, &context.config.output_path)?;
    println!(
        "✅ 文件已保存: {:?}",
        context.config.output_path.join(&file.filename)
    );

    Ok(())
}
