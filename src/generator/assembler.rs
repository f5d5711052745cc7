//! 项目组装器 - 编排结构规划、逐文件生成、清洗与落盘

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::generator::cleaner::CodeCleaner;
use crate::generator::context::GeneratorContext;
use crate::generator::dependencies::DependencyExtractor;
use crate::generator::prompts;
use crate::generator::structure::{PlanConfidence, StructureOutcome, StructureParser};
use crate::llm::GenerateOptions;
use crate::types::{GeneratedFile, Language, ProjectStructure};

/// 整体项目生成的结果摘要
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    /// 项目名称
    pub project_name: String,
    /// 已写入磁盘的全部文件名（含辅助文件）
    pub files: Vec<String>,
    /// 本次使用的结构计划
    pub structure: ProjectStructure,
    /// 结构计划的置信级别
    pub plan_confidence: PlanConfidence,
}

/// 项目组装器
pub struct ProjectAssembler<'a> {
    context: &'a GeneratorContext,
    parser: StructureParser,
    cleaner: CodeCleaner,
    extractor: DependencyExtractor,
}

impl<'a> ProjectAssembler<'a> {
    pub fn new(context: &'a GeneratorContext) -> Self {
        Self {
            context,
            parser: StructureParser::new(),
            cleaner: CodeCleaner::new(),
            extractor: DependencyExtractor::new(),
        }
    }

    /// 基于需求生成完整项目，逐文件生成并即时写盘
    ///
    /// 任何一次模型调用失败都会中止剩余计划并向上传播；
    /// 之前已写入的文件保留在磁盘上。
    pub async fn generate_project(
        &self,
        requirements: &str,
        output_dir: &Path,
    ) -> Result<ProjectSummary> {
        let brief: String = requirements.chars().take(50).collect();
        println!("🚀 生成项目: {}...", brief);

        // 第一步：规划项目结构
        let structure_prompt = prompts::structure_prompt(requirements);
        let response = self
            .context
            .model
            .generate(&structure_prompt, &self.options())
            .await?;
        let outcome = self.parser.parse(&response);
        if self.context.config.verbose {
            match &outcome {
                StructureOutcome::Parsed(_) => {}
                StructureOutcome::Recovered { reason, .. } => {
                    println!("🔄 结构计划降级: {}", reason)
                }
                StructureOutcome::Defaulted { reason, .. } => {
                    println!("🔄 结构计划回退: {}", reason)
                }
            }
        }
        let plan_confidence = outcome.confidence();
        let structure = outcome.into_structure();

        // 第二步：按计划顺序逐文件生成
        let mut written = Vec::new();
        for file_spec in &structure.files {
            println!("📄 生成中: {}", file_spec.path);

            let file_prompt = prompts::file_prompt(requirements, file_spec, &structure);
            let raw_code = self
                .context
                .model
                .generate(&file_prompt, &self.options())
                .await?;
            let cleaned = self.cleaner.clean(&raw_code, file_spec.language);

            // 整体项目生成信任计划声明的依赖，不做代码扫描
            let declared = file_spec.dependencies.clone().unwrap_or_default();
            let file = GeneratedFile::new(
                file_spec.path.clone(),
                cleaned,
                file_spec.language,
                declared,
            );

            save_file(&file, output_dir)?;
            written.push(file.filename);
        }

        // 第三步：合成辅助项目文件
        for config_file in self.generate_config_files(&structure, requirements) {
            save_file(&config_file, output_dir)?;
            written.push(config_file.filename);
        }

        println!("✅ 项目已生成: {}", output_dir.display());

        Ok(ProjectSummary {
            project_name: structure.name.clone(),
            files: written,
            structure,
            plan_confidence,
        })
    }

    /// 生成单个孤立文件（不落盘，由调用方决定）
    ///
    /// 与整体项目生成不同，这里总是对清洗后的代码做依赖提取。
    pub async fn generate_single_file(
        &self,
        requirements: &str,
        filename: &str,
    ) -> Result<GeneratedFile> {
        let language = Language::from_filename(filename);

        let prompt = prompts::single_file_prompt(requirements, filename, language);
        let raw_code = self.context.model.generate(&prompt, &self.options()).await?;

        let cleaned = self.cleaner.clean(&raw_code, language);
        let dependencies = self.extractor.extract(&cleaned, language);

        Ok(GeneratedFile::new(
            filename.to_string(),
            cleaned,
            language,
            dependencies,
        ))
    }

    /// 合成辅助项目文件：项目说明文档，回显原始需求
    fn generate_config_files(
        &self,
        structure: &ProjectStructure,
        requirements: &str,
    ) -> Vec<GeneratedFile> {
        let readme_content = format!(
            "# {}\n\n## Description\nProject generated automatically by codesmith-rs.\n\n## Original Requirements\n{}\n",
            structure.name, requirements
        );

        vec![GeneratedFile::new(
            "README.md".to_string(),
            readme_content,
            Language::Markdown,
            Vec::new(),
        )]
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions::from(&self.context.config.llm)
    }
}

/// 将生成文件写入`<output_dir>/<相对路径>`，按需创建父目录
///
/// UTF-8文本，逐文件同步写入，无原子性保证。
pub fn save_file(file: &GeneratedFile, output_dir: &Path) -> Result<()> {
    let output_path = output_dir.join(&file.filename);

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {:?}", parent))?;
    }

    fs::write(&output_path, &file.content)
        .context(format!("Failed to write file: {:?}", output_path))?;

    Ok(())
}

// Include tests
#[cfg(test)]
mod tests;
