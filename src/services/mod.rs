// 服务模块
// 提供核心业务逻辑服务

pub mod database;
pub mod evaluator;
pub mod history;
pub mod markdown;
pub mod problems;
pub mod settings;
pub mod templates;

pub use database::{KvStore, HISTORY_KEY, PROBLEMS_KEY, THEME_KEY};

pub use evaluator::{
    build_submission,
    parse_leading_int,
    Evaluator,
    OutputHeuristic,
    ResultSummary,
    HELLO_WORLD,
    UNRECOGNIZED_OUTPUT,
};

pub use history::HistoryStore;

pub use markdown::render_description;

pub use problems::{default_problems, ProblemStore};

pub use settings::SettingsService;

pub use templates::{code_template, Language, DEFAULT_LANGUAGE};
