use super::error::ConversionError;
use std::path::{Path, PathBuf};

/// 單一檔案的轉換結果
#[derive(Debug)]
pub enum ConversionOutcome {
    Converted { source: PathBuf, target: PathBuf },
    Failed { source: PathBuf, error: ConversionError },
}

impl ConversionOutcome {
    #[must_use]
    pub fn source(&self) -> &Path {
        match self {
            Self::Converted { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// 整批轉換摘要
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub outcomes: Vec<ConversionOutcome>,
    /// 因中斷而未處理的檔案數
    pub unprocessed: usize,
}

impl ConversionSummary {
    #[must_use]
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    /// 成功寫入的輸出檔
    pub fn targets(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            ConversionOutcome::Converted { target, .. } => Some(target.as_path()),
            ConversionOutcome::Failed { .. } => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty() && self.unprocessed == 0
    }
}
