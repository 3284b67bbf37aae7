// 提交历史服务
// 最新的提交在前，整体持久化在 submissionHistory 键下

use crate::error::{StoreError, StoreResult};
use crate::models::Submission;
use crate::services::database::{KvStore, HISTORY_KEY};
use crate::utils::observe_id;

/// 提交历史
pub struct HistoryStore {
    kv: KvStore,
    submissions: Vec<Submission>,
}

impl HistoryStore {
    pub fn load(kv: KvStore) -> StoreResult<Self> {
        let submissions = kv
            .get_json::<Vec<Submission>>(HISTORY_KEY)?
            .unwrap_or_default();

        for submission in &submissions {
            submission.validate().map_err(|e| StoreError::Corrupt {
                key: HISTORY_KEY.to_string(),
                reason: e.to_string(),
            })?;
            observe_id(submission.id);
        }

        log::info!("loaded {} submission(s)", submissions.len());
        Ok(Self { kv, submissions })
    }

    /// 插入到最前面并保存
    pub fn append(&mut self, submission: Submission) -> StoreResult<()> {
        let mut next = Vec::with_capacity(self.submissions.len() + 1);
        next.push(submission);
        next.extend(self.submissions.iter().cloned());

        self.kv.set_json(HISTORY_KEY, &next)?;
        self.submissions = next;
        Ok(())
    }

    /// 最新在前
    pub fn list(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn for_problem(&self, problem_id: i64) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|s| s.problem_id == problem_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// 清空历史；调用前的确认由界面负责
    pub fn clear(&mut self) -> StoreResult<()> {
        self.kv.set_json(HISTORY_KEY, &Vec::<Submission>::new())?;
        self.submissions.clear();
        log::info!("submission history cleared");
        Ok(())
    }
}
