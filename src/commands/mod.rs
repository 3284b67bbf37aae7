// 命令模块
// 提供供前端调用的命令接口，错误统一以字符串返回

pub mod problems;
pub mod settings;
pub mod submissions;

pub use problems::{
    add_problem,
    change_language,
    get_code_template,
    get_languages,
    get_problem,
    get_problems,
    render_problem_description,
    EditorSetupDto,
    NewProblemDto,
    ProblemSummaryDto,
};

pub use settings::{get_theme, toggle_theme, ThemeDto};

pub use submissions::{
    delete_history,
    evaluate_code,
    get_history,
    get_problem_history,
    submit_code,
    EvaluationDto,
    HistoryItemDto,
};
