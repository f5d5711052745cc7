//! 依赖提取器 - 从清洗后的源文本中扫描import类语句
//!
//! 仅实现Python与JavaScript两个语言族；其余语言返回空序列，
//! 这是明确记录的能力缺口，不是静默缺陷。

use regex::Regex;

use crate::types::Language;

/// 依赖提取器
#[derive(Debug)]
pub struct DependencyExtractor {
    python_import_regex: Regex,
    js_require_regex: Regex,
    js_import_from_regex: Regex,
    js_import_bare_regex: Regex,
}

impl Default for DependencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyExtractor {
    pub fn new() -> Self {
        Self {
            python_import_regex: Regex::new(r"(?m)^\s*(?:import|from)\s+(\S+)").unwrap(),
            js_require_regex: Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).unwrap(),
            js_import_from_regex: Regex::new(r#"import[^\n]*from\s+['"]([^'"]+)['"]"#).unwrap(),
            js_import_bare_regex: Regex::new(r#"import\s+['"]([^'"]+)['"]"#).unwrap(),
        }
    }

    /// 提取外部依赖名，按首次出现顺序去重
    pub fn extract(&self, code: &str, language: Language) -> Vec<String> {
        match language {
            Language::Python => self.extract_python(code),
            Language::JavaScript => self.extract_javascript(code),
            // 其余语言暂不支持依赖提取
            _ => Vec::new(),
        }
    }

    fn extract_python(&self, code: &str) -> Vec<String> {
        let mut dependencies = Vec::new();

        for captures in self.python_import_regex.captures_iter(code) {
            let module = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            // 取点分路径的首段作为依赖名，下划线开头视为内部模块
            let name = module.split('.').next().unwrap_or(module);
            if name.is_empty() || name.starts_with('_') {
                continue;
            }
            if !dependencies.iter().any(|d| d == name) {
                dependencies.push(name.to_string());
            }
        }

        dependencies
    }

    fn extract_javascript(&self, code: &str) -> Vec<String> {
        // 三种import形态按文本位置合并，保证首次出现顺序
        let mut matches: Vec<(usize, &str)> = Vec::new();
        for regex in [
            &self.js_require_regex,
            &self.js_import_from_regex,
            &self.js_import_bare_regex,
        ] {
            for captures in regex.captures_iter(code) {
                if let Some(m) = captures.get(1) {
                    matches.push((m.start(), m.as_str()));
                }
            }
        }
        matches.sort_by_key(|(position, _)| *position);

        let mut dependencies = Vec::new();
        for (_, specifier) in matches {
            // 相对路径导入不是结构性依赖
            if specifier.starts_with('.') {
                continue;
            }
            // lodash/fp 之类的子路径折叠为首段包名
            let name = specifier.split('/').next().unwrap_or(specifier);
            if name.is_empty() {
                continue;
            }
            if !dependencies.iter().any(|d| d == name) {
                dependencies.push(name.to_string());
            }
        }

        dependencies
    }
}
