//! 结构响应解析器 - 从原始模型输出中提取项目结构计划
//!
//! 三级降级策略，保证永不向外失败：
//! 1. 提取```json围栏块并反序列化
//! 2. 无围栏时按行启发式识别源文件路径
//! 3. 解析出错时回退到固定的兜底结构

use regex::Regex;

use crate::types::{FileSpec, Language, ProjectStructure};

/// 行启发式识别的源文件扩展名
const PLAN_EXTENSIONS: [&str; 7] = [".py", ".js", ".ts", ".java", ".cpp", ".rs", ".go"];

/// 结构计划的置信级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanConfidence {
    /// 模型输出了合法的JSON计划
    Parsed,
    /// 无JSON围栏，从纯文本行恢复
    Recovered,
    /// 解析失败，使用兜底结构
    Defaulted,
}

/// 解析结果 - 带置信标签的结构计划
///
/// 调用方可以区分计划的来源，而不是把降级信息丢失在一条日志里。
#[derive(Debug, Clone)]
pub enum StructureOutcome {
    Parsed(ProjectStructure),
    Recovered {
        structure: ProjectStructure,
        reason: String,
    },
    Defaulted {
        structure: ProjectStructure,
        reason: String,
    },
}

impl StructureOutcome {
    pub fn structure(&self) -> &ProjectStructure {
        match self {
            StructureOutcome::Parsed(structure) => structure,
            StructureOutcome::Recovered { structure, .. } => structure,
            StructureOutcome::Defaulted { structure, .. } => structure,
        }
    }

    pub fn into_structure(self) -> ProjectStructure {
        match self {
            StructureOutcome::Parsed(structure) => structure,
            StructureOutcome::Recovered { structure, .. } => structure,
            StructureOutcome::Defaulted { structure, .. } => structure,
        }
    }

    pub fn confidence(&self) -> PlanConfidence {
        match self {
            StructureOutcome::Parsed(_) => PlanConfidence::Parsed,
            StructureOutcome::Recovered { .. } => PlanConfidence::Recovered,
            StructureOutcome::Defaulted { .. } => PlanConfidence::Defaulted,
        }
    }
}

/// 结构响应解析器
#[derive(Debug)]
pub struct StructureParser {
    json_fence_regex: Regex,
}

impl Default for StructureParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureParser {
    pub fn new() -> Self {
        Self {
            json_fence_regex: Regex::new(r"(?s)```json\n(.*?)\n```").unwrap(),
        }
    }

    /// 解析结构响应，永不失败
    pub fn parse(&self, response: &str) -> StructureOutcome {
        if let Some(captures) = self.json_fence_regex.captures(response) {
            let body = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            return match serde_json::from_str::<ProjectStructure>(body) {
                Ok(structure) => StructureOutcome::Parsed(structure),
                Err(e) => {
                    eprintln!("⚠️ 解析结构计划出错: {}", e);
                    StructureOutcome::Defaulted {
                        structure: ProjectStructure::fallback(),
                        reason: format!("json fence did not deserialize: {}", e),
                    }
                }
            };
        }

        self.parse_plain_lines(response)
    }

    /// 无JSON围栏时的行启发式解析
    fn parse_plain_lines(&self, response: &str) -> StructureOutcome {
        let mut files = Vec::new();

        for line in response.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if PLAN_EXTENSIONS.iter().any(|ext| line.ends_with(ext)) {
                // 剥离"- "之类的列表标记
                let path = line.trim_matches(|c| c == '-' || c == ' ').to_string();
                let language = Language::from_filename(&path);
                files.push(FileSpec {
                    path,
                    language,
                    purpose: None,
                    dependencies: None,
                });
            }
        }

        StructureOutcome::Recovered {
            structure: ProjectStructure {
                name: "project".to_string(),
                files,
            },
            reason: "no json fence found, recovered file paths from plain text".to_string(),
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
