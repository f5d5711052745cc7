//! 交互模式 - REPL式的项目/单文件创建

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::generator::assembler::{ProjectAssembler, save_file};
use crate::generator::context::GeneratorContext;

/// 运行交互循环
///
/// 生成过程中的错误（包括模型调用失败）在循环内捕获并报告，
/// 不会中断会话；只有stdin关闭或用户退出才结束。
pub async fn run(context: &GeneratorContext) -> Result<()> {
    println!("\n📝 交互模式");
    println!("输入 'exit' 退出，'project' 创建完整项目，'help' 查看帮助");
    println!("{}", "-".repeat(50));

    loop {
        let Some(input) = read_line("\n🎯 codesmith > ")? else {
            break;
        };
        let input = input.trim().to_string();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("👋 再见！");
                break;
            }
            "project" => {
                if let Err(e) = create_project(context).await {
                    eprintln!("❌ 生成项目出错: {}", e);
                }
            }
            "help" => show_help(),
            _ => {
                // 其余输入视为单文件需求
                if let Err(e) = create_single_file(context, &input).await {
                    eprintln!("❌ Error: {}", e);
                }
            }
        }
    }

    Ok(())
}

/// 交互式创建完整项目
async fn create_project(context: &GeneratorContext) -> Result<()> {
    println!("\n🏗️  项目创建");

    let Some(requirements) = read_line("📋 描述你的项目:\n> ")? else {
        return Ok(());
    };
    let requirements = requirements.trim().to_string();
    if requirements.is_empty() {
        println!("⚠️ 需要项目描述");
        return Ok(());
    }

    let output_dir = read_line("📁 输出目录 (./generated_project): ")?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "./generated_project".to_string());

    println!("\n⚙️ 生成项目中...");

    let assembler = ProjectAssembler::new(context);
    let summary = assembler
        .generate_project(&requirements, &PathBuf::from(&output_dir))
        .await?;

    println!("\n🎉 项目生成成功");
    println!("📁 目录: {}", output_dir);
    println!("📊 文件数: {}", summary.files.len());
    println!("🏷️  名称: {}", summary.project_name);

    println!("\n📂 结构:");
    for file_path in &summary.files {
        println!("  📄 {}", file_path);
    }

    Ok(())
}

/// 交互式创建单个文件
async fn create_single_file(context: &GeneratorContext, requirements: &str) -> Result<()> {
    let Some(filename) = read_line("📝 文件名 (例如 app.py): ")? else {
        return Ok(());
    };
    let filename = filename.trim().to_string();
    if filename.is_empty() {
        println!("⚠️ 需要文件名");
        return Ok(());
    }

    println!("⚙️ 生成 {} 中...", filename);
    let assembler = ProjectAssembler::new(context);
    let file = assembler.generate_single_file(requirements, &filename).await?;

    println!("\n✅ 文件已生成: {}", file.filename);
    println!("📏 语言: {}", file.language);
    println!(
        "📦 依赖: {}",
        if file.dependencies.is_empty() {
            "无".to_string()
        } else {
            file.dependencies.join(", ")
        }
    );

    if confirm("\n💾 保存文件? (y/n): ")? {
        let output_dir = read_line("📁 输出目录 (./output): ")?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "./output".to_string());
        save_file(&file, &PathBuf::from(output_dir))?;
    }

    if confirm("\n👁️ 显示代码? (y/n): ")? {
        println!("\n{}", "=".repeat(80));
        let preview: String = file.content.chars().take(500).collect();
        print!("{}", preview);
        if file.content.chars().count() > 500 {
            println!("\n... [已截断]");
        } else {
            println!();
        }
        println!("{}", "=".repeat(80));
    }

    Ok(())
}

fn show_help() {
    let help_text = r#"
📖 codesmith-rs 帮助

交互命令:
  project       - 创建一个新的完整项目
  exit/quit     - 退出程序
  help          - 显示此帮助

使用示例:
  > Create a REST API with FastAPI
  > Generate a React component in TypeScript
  > Implement a data processing script

运行模式:
  1. 完整项目: 规划结构并生成多个文件
  2. 单个文件: 根据需求生成指定文件
"#;
    println!("{}", help_text);
}

/// 读取一行用户输入；stdin关闭时返回None
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut buffer = String::new();
    let bytes_read = std::io::stdin().read_line(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(read_line(prompt)?
        .map(|s| {
            let answer = s.trim().to_lowercase();
            answer == "y" || answer == "yes"
        })
        .unwrap_or(false))
}
