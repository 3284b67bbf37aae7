// 评测与提交历史命令模块

use serde::{Deserialize, Serialize};

use crate::models::{Submission, TestResult};
use crate::services::{build_submission, ResultSummary};
use crate::state::AppState;
use crate::utils::preview;

const CODE_PREVIEW_CHARS: usize = 200;

/// 评测结果传输对象
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub results: Vec<TestResult>,
    pub passed_count: usize,
    pub total_count: usize,
    pub summary: String,
}

impl From<Vec<TestResult>> for EvaluationDto {
    fn from(results: Vec<TestResult>) -> Self {
        let summary = ResultSummary::of(&results);
        Self {
            passed_count: summary.passed,
            total_count: summary.total,
            summary: summary.to_string(),
            results,
        }
    }
}

/// 历史列表项
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemDto {
    pub id: i64,
    pub problem_id: i64,
    pub problem_title: String,
    pub language: String,
    pub timestamp: String,
    pub code_preview: String,
    pub passed_count: usize,
    pub total_count: usize,
    pub passed: bool,
}

impl From<&Submission> for HistoryItemDto {
    fn from(s: &Submission) -> Self {
        Self {
            id: s.id,
            problem_id: s.problem_id,
            problem_title: s.problem_title.clone(),
            language: s.language.clone(),
            timestamp: s.timestamp.clone(),
            code_preview: preview(&s.code, CODE_PREVIEW_CHARS),
            passed_count: s.passed_count(),
            total_count: s.results.len(),
            passed: s.passed,
        }
    }
}

/// 只评测，不写入历史
pub async fn evaluate_code(
    problem_id: i64,
    code: String,
    language: String,
    state: &AppState,
) -> Result<EvaluationDto, String> {
    let test_cases = {
        let store = state.problems.lock().map_err(|e| e.to_string())?;
        store
            .get(problem_id)
            .map(|p| p.test_cases.clone())
            .ok_or_else(|| format!("Problem not found: {}", problem_id))?
    };

    let results = state.evaluator.evaluate(&code, &language, &test_cases);
    Ok(results.into())
}

/// 评测并保存提交记录
pub async fn submit_code(
    problem_id: i64,
    code: String,
    language: String,
    state: &AppState,
) -> Result<Submission, String> {
    if code.trim().is_empty() {
        return Err("Code is empty".to_string());
    }

    let problem = {
        let store = state.problems.lock().map_err(|e| e.to_string())?;
        store
            .get(problem_id)
            .cloned()
            .ok_or_else(|| format!("Problem not found: {}", problem_id))?
    };

    let results = state.evaluator.evaluate(&code, &language, &problem.test_cases);
    let submission = build_submission(&problem, &code, &language, results);

    let mut history = state.history.lock().map_err(|e| e.to_string())?;
    history
        .append(submission.clone())
        .map_err(|e| e.to_string())?;

    log::info!(
        "submission {} for problem {}: {}",
        submission.id,
        problem_id,
        if submission.passed { "passed" } else { "failed" }
    );
    Ok(submission)
}

/// 获取提交历史（最新在前）
pub async fn get_history(state: &AppState) -> Result<Vec<HistoryItemDto>, String> {
    let history = state.history.lock().map_err(|e| e.to_string())?;
    Ok(history.list().iter().map(HistoryItemDto::from).collect())
}

/// 获取某道题目的全部提交
pub async fn get_problem_history(problem_id: i64, state: &AppState) -> Result<Vec<Submission>, String> {
    let history = state.history.lock().map_err(|e| e.to_string())?;
    Ok(history.for_problem(problem_id).into_iter().cloned().collect())
}

/// 清空提交历史
pub async fn delete_history(state: &AppState) -> Result<(), String> {
    let mut history = state.history.lock().map_err(|e| e.to_string())?;
    history.clear().map_err(|e| e.to_string())
}
