// 题库命令模块
// 提供供前端调用的题目列表、添加题目和编辑器语言切换命令

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, NewProblem, Problem, TestCase};
use crate::services::{code_template, render_description, Language};
use crate::state::AppState;
use crate::utils::preview;

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// 题目列表项（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummaryDto {
    pub id: i64,
    pub title: String,
    pub description_preview: String,
    pub difficulty: String,
    pub test_count: usize,
    pub language: String,
}

impl From<&Problem> for ProblemSummaryDto {
    fn from(p: &Problem) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            description_preview: preview(&p.description, DESCRIPTION_PREVIEW_CHARS),
            difficulty: p.difficulty.as_str().to_string(),
            test_count: p.test_cases.len(),
            language: p.language.clone(),
        }
    }
}

/// 添加题目表单（前端传入）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblemDto {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub test_cases: Vec<TestCase>,
}

/// 编辑器初始化信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSetupDto {
    pub problem_id: i64,
    pub language: String,
    pub template: String,
}

/// 获取题目列表
pub async fn get_problems(state: &AppState) -> Result<Vec<ProblemSummaryDto>, String> {
    let store = state.problems.lock().map_err(|e| e.to_string())?;
    Ok(store.list().iter().map(ProblemSummaryDto::from).collect())
}

/// 获取单道题目
pub async fn get_problem(id: i64, state: &AppState) -> Result<Option<Problem>, String> {
    let store = state.problems.lock().map_err(|e| e.to_string())?;
    Ok(store.get(id).cloned())
}

/// 添加题目
pub async fn add_problem(input: NewProblemDto, state: &AppState) -> Result<Problem, String> {
    let difficulty = if input.difficulty.trim().is_empty() {
        None
    } else {
        Some(input.difficulty.parse::<Difficulty>().map_err(|e| e.to_string())?)
    };

    let mut store = state.problems.lock().map_err(|e| e.to_string())?;
    store
        .add(NewProblem {
            title: input.title,
            description: input.description,
            difficulty,
            test_cases: input.test_cases,
        })
        .map_err(|e| e.to_string())
}

/// 切换题目语言并返回对应的起始代码
pub async fn change_language(
    problem_id: i64,
    language: String,
    state: &AppState,
) -> Result<EditorSetupDto, String> {
    let mut store = state.problems.lock().map_err(|e| e.to_string())?;
    let problem = store
        .set_language(problem_id, &language)
        .map_err(|e| e.to_string())?;

    Ok(EditorSetupDto {
        problem_id: problem.id,
        template: code_template(&problem.language).to_string(),
        language: problem.language,
    })
}

/// 语言下拉框选项
pub async fn get_languages() -> Result<Vec<String>, String> {
    Ok(Language::ALL.iter().map(|l| l.tag().to_string()).collect())
}

/// 获取语言的起始代码
pub async fn get_code_template(language: String) -> Result<String, String> {
    Ok(code_template(&language).to_string())
}

/// 渲染题目描述为 HTML
pub async fn render_problem_description(problem_id: i64, state: &AppState) -> Result<String, String> {
    let store = state.problems.lock().map_err(|e| e.to_string())?;
    let problem = store
        .get(problem_id)
        .ok_or_else(|| format!("Problem not found: {}", problem_id))?;
    Ok(render_description(&problem.description))
}
