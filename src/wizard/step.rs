use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IndexTarget, WizardError};

/// The four fixed wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    BasicInfo,
    Structure,
    Content,
    Schedule,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::BasicInfo, Step::Structure, Step::Content, Step::Schedule];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Step, WizardError> {
        Step::ALL.get(index).copied().ok_or(WizardError::InvalidIndex {
            target: IndexTarget::Step,
            index,
            len: Step::ALL.len(),
        })
    }

    /// The following step; `Schedule` stays put.
    pub fn next(self) -> Step {
        Step::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(self)
    }

    /// The preceding step; `BasicInfo` stays put.
    pub fn previous(self) -> Step {
        self.index()
            .checked_sub(1)
            .map(|i| Step::ALL[i])
            .unwrap_or(self)
    }

    pub fn is_last(self) -> bool {
        self == Step::Schedule
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Основная информация",
            Step::Structure => "Структура",
            Step::Content => "Содержание",
            Step::Schedule => "Расписание",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::BasicInfo => "Название и описание курса",
            Step::Structure => "Разделы и уроки",
            Step::Content => "Материалы уроков",
            Step::Schedule => "Даты и стоимость",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::BasicInfo => "basic info",
            Step::Structure => "structure",
            Step::Content => "content",
            Step::Schedule => "schedule",
        };
        f.write_str(name)
    }
}
