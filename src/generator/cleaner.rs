//! 代码清洗器 - 将原始模型输出转换为可落盘的源文本
//!
//! 依次剥离markdown围栏、残留的提示词回显行，对Python做一次语法校验，
//! 失败时套用尽力而为的缩进修复。修复结果不做二次校验。

use regex::Regex;
use rustpython_parser::{Mode, parse};

use crate::types::Language;

/// 代码清洗器
#[derive(Debug)]
pub struct CodeCleaner {
    fence_open_regex: Regex,
    hash_echo_regex: Regex,
    slash_echo_regex: Regex,
}

impl Default for CodeCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeCleaner {
    pub fn new() -> Self {
        Self {
            fence_open_regex: Regex::new(r"```[a-z]*\n").unwrap(),
            hash_echo_regex: Regex::new(r"(?mi)^# Response:.*\n?").unwrap(),
            slash_echo_regex: Regex::new(r"(?mi)^// Response:.*\n?").unwrap(),
        }
    }

    /// 清洗生成的代码
    ///
    /// 对已清洗的输入是幂等的（无围栏、无回显行时清洗两次等于清洗一次）。
    pub fn clean(&self, code: &str, language: Language) -> String {
        // 移除带语言提示的开围栏与残留的裸围栏
        let code = self.fence_open_regex.replace_all(code, "");
        let code = code.replace("```", "");

        // 移除回显的提示词行
        let code = self.hash_echo_regex.replace_all(&code, "");
        let mut code = self.slash_echo_regex.replace_all(&code, "").to_string();

        // 仅对Python做完整语法校验，失败时尝试缩进修复
        if language == Language::Python
            && let Err(e) = parse(&code, Mode::Module, "<generated>")
        {
            eprintln!("⚠️ 检测到语法错误，尝试修复...");
            code = repair_python_indentation(&code, &e.to_string());
        }

        code.trim().to_string()
    }
}

/// Python缩进修复启发式
///
/// 单遍、单级的缩进修复：前一原始行以冒号结尾而当前行没有任何缩进时，
/// 为当前行补上固定的4空格缩进。不追踪嵌套深度，不处理多级缩进/回退，
/// 既可能修不够也可能修过头。只是尽力而为的外观修复，不是解析器。
/// error_msg仅作参考信息，算法不使用。
pub fn repair_python_indentation(code: &str, _error_msg: &str) -> String {
    let lines: Vec<&str> = code.split('\n').collect();
    let mut fixed_lines = Vec::with_capacity(lines.len());

    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim_end();
        if !line.is_empty()
            && !line.starts_with(' ')
            && !line.starts_with('\t')
            && i > 0
            && lines[i - 1].ends_with(':')
        {
            fixed_lines.push(format!("    {}", line));
        } else {
            fixed_lines.push(line.to_string());
        }
    }

    fixed_lines.join("\n")
}
