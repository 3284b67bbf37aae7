//! 编辑器语言与代码模板
//! 语言只影响模板和编辑器语法模式，不影响评测

/// 新题目和未知语言使用的默认语言
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// 编辑器支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    C,
    Python,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::JavaScript, Language::C, Language::Python];

    /// 未识别的语言标签回退到 JavaScript
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "c" => Language::C,
            "python" => Language::Python,
            _ => Language::JavaScript,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::C => "c",
            Language::Python => "python",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Language::JavaScript => JAVASCRIPT_TEMPLATE,
            Language::C => C_TEMPLATE,
            Language::Python => PYTHON_TEMPLATE,
        }
    }
}

const JAVASCRIPT_TEMPLATE: &str = r#"// Write your solution here
function solution() {
    // Your code goes here
    return "Hello, World!";
}

// Test your function
console.log(solution());"#;

const C_TEMPLATE: &str = r#"#include <stdio.h>

// Write your solution here
int main() {
    // Your code goes here
    printf("Hello, World!\n");
    return 0;
}"#;

const PYTHON_TEMPLATE: &str = r#"# Write your solution here
def solution():
    # Your code goes here
    return "Hello, World!"

# Test your function
print(solution())"#;

/// 语言对应的起始代码
pub fn code_template(language: &str) -> &'static str {
    Language::from_tag(language).template()
}
