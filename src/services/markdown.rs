//! 题目描述渲染
//! 使用 pulldown-cmark 将描述转为 HTML，原始 HTML 一律转义

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

/// 渲染题目描述
pub fn render_description(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_description_becomes_paragraph() {
        let html = render_description("Write a function that returns the string 'Hello, World!'");
        assert!(html.starts_with("<p>"));
        assert!(html.contains("Hello, World!"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_description("Sum <script>alert(1)</script> numbers");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_markdown_formatting() {
        let html = render_description("Return `n!` for **n**");
        assert!(html.contains("<code>n!</code>"));
        assert!(html.contains("<strong>n</strong>"));
    }
}
