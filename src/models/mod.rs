// 数据模型
// 题目、测试用例、评测结果与提交记录，字段名与持久化 JSON 保持一致（camelCase）

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 题目难度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// 测试用例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub input: String,
    pub expected_output: String,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
        }
    }
}

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub test_cases: Vec<TestCase>,
    pub language: String,
}

impl Problem {
    /// 校验题目是否可提交：标题、描述非空且至少一个测试用例
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if self.test_cases.is_empty() {
            return Err(ValidationError::NoTestCases);
        }
        Ok(())
    }
}

/// 新建题目的表单输入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblem {
    pub title: String,
    pub description: String,
    pub difficulty: Option<Difficulty>,
    pub test_cases: Vec<TestCase>,
}

/// 单个测试用例的评测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub test_case_index: usize,
    pub passed: bool,
    pub actual_output: String,
    pub expected_output: String,
    pub error: Option<String>,
}

/// 提交记录
///
/// `problem_title` 是提交时的快照，之后题目变化不会影响历史记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub problem_id: i64,
    pub problem_title: String,
    pub code: String,
    pub language: String,
    pub results: Vec<TestResult>,
    pub timestamp: String,
    pub passed: bool,
}

impl Submission {
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// 校验从存储读回的提交记录
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, result) in self.results.iter().enumerate() {
            if result.test_case_index != index {
                return Err(ValidationError::ResultOrder {
                    expected: index,
                    found: result.test_case_index,
                });
            }
        }
        let all_passed = self.results.iter().all(|r| r.passed);
        if all_passed != self.passed {
            return Err(ValidationError::PassedMismatch(self.id));
        }
        chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|_| ValidationError::BadTimestamp(self.timestamp.clone()))?;
        Ok(())
    }
}

/// 界面主题
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 编辑器对应的配色方案
    pub fn editor_theme(self) -> &'static str {
        match self {
            Theme::Light => "vs",
            Theme::Dark => "vs-dark",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission() -> Submission {
        Submission {
            id: 1_700_000_000_000,
            problem_id: 2,
            problem_title: "Sum of Two Numbers".to_string(),
            code: "return a + b".to_string(),
            language: "javascript".to_string(),
            results: vec![
                TestResult {
                    test_case_index: 0,
                    passed: true,
                    actual_output: "8".to_string(),
                    expected_output: "8".to_string(),
                    error: None,
                },
                TestResult {
                    test_case_index: 1,
                    passed: false,
                    actual_output: "4".to_string(),
                    expected_output: "5".to_string(),
                    error: None,
                },
            ],
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            passed: false,
        }
    }

    #[test]
    fn test_problem_json_uses_camel_case() {
        let problem = Problem {
            id: 1,
            title: "Hello World".to_string(),
            description: "Print it".to_string(),
            difficulty: Difficulty::Easy,
            test_cases: vec![TestCase::new("", "Hello, World!")],
            language: "javascript".to_string(),
        };
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["testCases"][0]["expectedOutput"], "Hello, World!");
        assert_eq!(json["testCases"][0]["input"], "");
    }

    #[test]
    fn test_problem_validation() {
        let mut problem = Problem {
            id: 1,
            title: "  ".to_string(),
            description: "desc".to_string(),
            difficulty: Difficulty::Hard,
            test_cases: vec![TestCase::new("1", "1")],
            language: "c".to_string(),
        };
        assert_eq!(problem.validate(), Err(ValidationError::MissingField("title")));

        problem.title = "Title".to_string();
        problem.test_cases.clear();
        assert_eq!(problem.validate(), Err(ValidationError::NoTestCases));
    }

    #[test]
    fn test_submission_validation() {
        let submission = sample_submission();
        assert!(submission.validate().is_ok());
        assert_eq!(submission.passed_count(), 1);

        let mut lying = submission.clone();
        lying.passed = true;
        assert!(matches!(lying.validate(), Err(ValidationError::PassedMismatch(_))));

        let mut shuffled = submission.clone();
        shuffled.results.swap(0, 1);
        assert!(matches!(shuffled.validate(), Err(ValidationError::ResultOrder { .. })));

        let mut bad_time = submission;
        bad_time.timestamp = "yesterday".to_string();
        assert!(matches!(bad_time.validate(), Err(ValidationError::BadTimestamp(_))));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.editor_theme(), "vs-dark");
    }
}
