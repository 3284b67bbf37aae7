//! 提交评测引擎
//!
//! 不真正执行代码：按优先级依次匹配启发式规则，第一条命中的规则根据测试输入
//! 推算输出，再与期望输出（去除首尾空白后）逐字比较。
//!
//! 规则顺序是契约的一部分：
//! 1. 代码包含 `Hello, World!`
//! 2. 代码包含 `sum` 或 `+`
//! 3. 代码包含 `factorial` 或 `!`
//! 4. 兜底：`Output not recognized`
//!
//! 语言参数只用于展示，不参与规则选择。

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::EvaluationFault;
use crate::models::{Problem, Submission, TestCase, TestResult};
use crate::utils::next_timestamp_id;

pub const HELLO_WORLD: &str = "Hello, World!";
pub const UNRECOGNIZED_OUTPUT: &str = "Output not recognized";

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("leading integer pattern"));

/// 读取字符串开头的整数（可带符号），忽略其后的内容
///
/// 没有数字前缀时返回 `Ok(None)`；数字超出 i64 范围时返回故障。
pub fn parse_leading_int(text: &str) -> Result<Option<i64>, EvaluationFault> {
    let trimmed = text.trim();
    match LEADING_INT.find(trimmed) {
        Some(m) => m
            .as_str()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| EvaluationFault::IntegerOutOfRange(m.as_str().to_string())),
        None => Ok(None),
    }
}

/// 启发式规则：根据代码文本判断是否适用，再由测试输入推算输出
pub trait OutputHeuristic: Send + Sync {
    fn name(&self) -> &'static str;

    fn matches(&self, code: &str) -> bool;

    fn produce(&self, input: &str) -> Result<String, EvaluationFault>;
}

/// 输出固定问候语
pub struct HelloWorld;

impl OutputHeuristic for HelloWorld {
    fn name(&self) -> &'static str {
        "hello-world"
    }

    fn matches(&self, code: &str) -> bool {
        code.contains(HELLO_WORLD)
    }

    fn produce(&self, _input: &str) -> Result<String, EvaluationFault> {
        Ok(HELLO_WORLD.to_string())
    }
}

/// 逗号分隔输入中前两个整数之和
pub struct SumOfTwo;

impl OutputHeuristic for SumOfTwo {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn matches(&self, code: &str) -> bool {
        code.contains("sum") || code.contains('+')
    }

    fn produce(&self, input: &str) -> Result<String, EvaluationFault> {
        let mut numbers = Vec::new();
        for token in input.split(',') {
            if let Some(n) = parse_leading_int(token)? {
                numbers.push(n);
            }
        }

        if numbers.len() < 2 {
            return Ok(String::new());
        }
        numbers[0]
            .checked_add(numbers[1])
            .map(|sum| sum.to_string())
            .ok_or(EvaluationFault::Overflow("sum"))
    }
}

/// 输入整数的阶乘
///
/// 使用 128 位检查乘法，超过 34! 即溢出报错，迭代次数因此有上界。
pub struct Factorial;

impl OutputHeuristic for Factorial {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn matches(&self, code: &str) -> bool {
        code.contains("factorial") || code.contains('!')
    }

    fn produce(&self, input: &str) -> Result<String, EvaluationFault> {
        let n = match parse_leading_int(input)? {
            Some(n) => n,
            None => return Ok(String::new()),
        };

        let mut result: u128 = 1;
        if n > 1 {
            for i in 2..=(n as u128) {
                result = result
                    .checked_mul(i)
                    .ok_or(EvaluationFault::Overflow("factorial"))?;
            }
        }
        Ok(result.to_string())
    }
}

/// 兜底规则，总是匹配
pub struct Unrecognized;

impl OutputHeuristic for Unrecognized {
    fn name(&self) -> &'static str {
        "unrecognized"
    }

    fn matches(&self, _code: &str) -> bool {
        true
    }

    fn produce(&self, _input: &str) -> Result<String, EvaluationFault> {
        Ok(UNRECOGNIZED_OUTPUT.to_string())
    }
}

/// 评测器：有序的启发式规则列表
pub struct Evaluator {
    heuristics: Vec<Box<dyn OutputHeuristic>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(vec![
            Box::new(HelloWorld),
            Box::new(SumOfTwo),
            Box::new(Factorial),
            Box::new(Unrecognized),
        ])
    }
}

impl Evaluator {
    /// 自定义规则列表；末尾若没有兜底规则，未命中时使用 `Unrecognized`
    pub fn new(heuristics: Vec<Box<dyn OutputHeuristic>>) -> Self {
        Self { heuristics }
    }

    pub fn heuristic_names(&self) -> Vec<&'static str> {
        self.heuristics.iter().map(|h| h.name()).collect()
    }

    /// 选出第一条命中的规则
    pub fn classify(&self, code: &str) -> &dyn OutputHeuristic {
        self.heuristics
            .iter()
            .find(|h| h.matches(code))
            .map(|h| &**h)
            .unwrap_or(&Unrecognized)
    }

    /// 按测试用例顺序评测，单个用例的故障不影响其余用例
    pub fn evaluate(&self, code: &str, language: &str, test_cases: &[TestCase]) -> Vec<TestResult> {
        let heuristic = self.classify(code);
        log::debug!(
            "evaluating {} test case(s) with heuristic '{}' (language: {})",
            test_cases.len(),
            heuristic.name(),
            language
        );

        let results: Vec<TestResult> = test_cases
            .iter()
            .enumerate()
            .map(|(index, test_case)| run_test_case(heuristic, index, test_case))
            .collect();

        log::info!("{}", ResultSummary::of(&results));
        results
    }
}

fn run_test_case(heuristic: &dyn OutputHeuristic, index: usize, test_case: &TestCase) -> TestResult {
    match heuristic.produce(&test_case.input) {
        Ok(actual_output) => TestResult {
            test_case_index: index,
            passed: actual_output.trim() == test_case.expected_output.trim(),
            actual_output,
            expected_output: test_case.expected_output.clone(),
            error: None,
        },
        Err(fault) => {
            log::warn!("test case {} faulted: {}", index + 1, fault);
            TestResult {
                test_case_index: index,
                passed: false,
                actual_output: String::new(),
                expected_output: test_case.expected_output.clone(),
                error: Some(fault.to_string()),
            }
        }
    }
}

/// 通过数统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub passed: usize,
    pub total: usize,
}

impl ResultSummary {
    pub fn of(results: &[TestResult]) -> Self {
        Self {
            passed: results.iter().filter(|r| r.passed).count(),
            total: results.len(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} test cases passed", self.passed, self.total)
    }
}

/// 组装提交记录，题目标题按值快照
pub fn build_submission(
    problem: &Problem,
    code: &str,
    language: &str,
    results: Vec<TestResult>,
) -> Submission {
    let passed = results.iter().all(|r| r.passed);
    Submission {
        id: next_timestamp_id(),
        problem_id: problem.id,
        problem_title: problem.title.clone(),
        code: code.to_string(),
        language: language.to_string(),
        results,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        passed,
    }
}
