// 题库服务
// 内置默认题目 + 用户添加的题目，整体持久化在 codingProblems 键下

use std::collections::HashSet;

use crate::error::{StoreError, StoreResult, ValidationError};
use crate::models::{Difficulty, NewProblem, Problem, TestCase};
use crate::services::database::{KvStore, PROBLEMS_KEY};
use crate::services::templates::DEFAULT_LANGUAGE;
use crate::utils::{next_timestamp_id, observe_id};

/// 内置的三道默认题目
pub fn default_problems() -> Vec<Problem> {
    vec![
        Problem {
            id: 1,
            title: "Hello World".to_string(),
            description: "Write a function that returns the string 'Hello, World!'".to_string(),
            difficulty: Difficulty::Easy,
            test_cases: vec![TestCase::new("", "Hello, World!")],
            language: DEFAULT_LANGUAGE.to_string(),
        },
        Problem {
            id: 2,
            title: "Sum of Two Numbers".to_string(),
            description: "Write a function that takes two numbers as parameters and returns their sum."
                .to_string(),
            difficulty: Difficulty::Easy,
            test_cases: vec![
                TestCase::new("5, 3", "8"),
                TestCase::new("-2, 7", "5"),
                TestCase::new("0, 0", "0"),
            ],
            language: DEFAULT_LANGUAGE.to_string(),
        },
        Problem {
            id: 3,
            title: "Factorial".to_string(),
            description: "Write a function that calculates the factorial of a given number n."
                .to_string(),
            difficulty: Difficulty::Medium,
            test_cases: vec![
                TestCase::new("5", "120"),
                TestCase::new("0", "1"),
                TestCase::new("3", "6"),
            ],
            language: DEFAULT_LANGUAGE.to_string(),
        },
    ]
}

fn validate_catalog(problems: &[Problem]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for problem in problems {
        problem.validate()?;
        if !seen.insert(problem.id) {
            return Err(ValidationError::DuplicateId(problem.id));
        }
    }
    Ok(())
}

/// 丢弃输入和期望输出都为空的行，其余去除首尾空白
fn collect_test_cases(rows: Vec<TestCase>) -> Vec<TestCase> {
    rows.into_iter()
        .map(|tc| TestCase::new(tc.input.trim(), tc.expected_output.trim()))
        .filter(|tc| !tc.input.is_empty() || !tc.expected_output.is_empty())
        .collect()
}

/// 题库
pub struct ProblemStore {
    kv: KvStore,
    problems: Vec<Problem>,
}

impl ProblemStore {
    /// 读取已保存的题库；没有保存过时使用默认题目
    pub fn load(kv: KvStore) -> StoreResult<Self> {
        let problems = match kv.get_json::<Vec<Problem>>(PROBLEMS_KEY)? {
            Some(problems) => {
                validate_catalog(&problems).map_err(|e| StoreError::Corrupt {
                    key: PROBLEMS_KEY.to_string(),
                    reason: e.to_string(),
                })?;
                log::info!("loaded {} problem(s)", problems.len());
                problems
            }
            None => {
                log::info!("no saved problems, using default catalog");
                default_problems()
            }
        };

        for problem in &problems {
            observe_id(problem.id);
        }

        Ok(Self { kv, problems })
    }

    pub fn list(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get(&self, id: i64) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// 整体覆盖保存题库
    pub fn save(&mut self, problems: Vec<Problem>) -> StoreResult<()> {
        validate_catalog(&problems)?;
        self.kv.set_json(PROBLEMS_KEY, &problems)?;
        for problem in &problems {
            observe_id(problem.id);
        }
        self.problems = problems;
        Ok(())
    }

    /// 添加题目，校验失败时题库保持不变
    pub fn add(&mut self, input: NewProblem) -> StoreResult<Problem> {
        let title = input.title.trim().to_string();
        let description = input.description.trim().to_string();

        if title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        if description.is_empty() {
            return Err(ValidationError::MissingField("description").into());
        }
        let difficulty = input
            .difficulty
            .ok_or(ValidationError::MissingField("difficulty"))?;

        let test_cases = collect_test_cases(input.test_cases);
        if test_cases.is_empty() {
            return Err(ValidationError::NoTestCases.into());
        }

        let problem = Problem {
            id: next_timestamp_id(),
            title,
            description,
            difficulty,
            test_cases,
            language: DEFAULT_LANGUAGE.to_string(),
        };

        let mut next = self.problems.clone();
        next.push(problem.clone());
        self.kv.set_json(PROBLEMS_KEY, &next)?;
        self.problems = next;

        log::info!("added problem {} '{}'", problem.id, problem.title);
        Ok(problem)
    }

    /// 切换题目的默认语言，这是题目创建后唯一可变的字段
    pub fn set_language(&mut self, id: i64, language: &str) -> StoreResult<Problem> {
        let index = self
            .problems
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::ProblemNotFound(id))?;

        let mut next = self.problems.clone();
        next[index].language = language.to_string();
        self.kv.set_json(PROBLEMS_KEY, &next)?;
        self.problems = next;

        log::debug!("problem {} language set to {}", id, language);
        Ok(self.problems[index].clone())
    }
}
