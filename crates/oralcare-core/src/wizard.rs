//! Linear page flow for the questionnaire.
//!
//! Eight pages, 0 (intro) through 7 (summary). Navigation is never blocked
//! by missing input: the default [`Unconditional`] policy lets the user
//! reach the summary with an empty assessment. A stricter flow plugs in a
//! different [`TransitionPolicy`] instead of checks inside the pages.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::assessment::Assessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Page {
    Intro,
    PatientInfo,
    Plaque,
    Perio,
    Interdental,
    Sensitivity,
    ArchAndMotor,
    Summary,
}

impl Page {
    pub const FIRST: Page = Page::Intro;
    pub const LAST: Page = Page::Summary;

    const ORDER: [Page; 8] = [
        Page::Intro,
        Page::PatientInfo,
        Page::Plaque,
        Page::Perio,
        Page::Interdental,
        Page::Sensitivity,
        Page::ArchAndMotor,
        Page::Summary,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Page, CoreError> {
        Self::ORDER
            .get(index)
            .copied()
            .ok_or(CoreError::InvalidPage(index))
    }

    pub fn next(self) -> Option<Page> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Page> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Intro => "Oral Hygiene Product Assessment",
            Page::PatientInfo => "Patient Information",
            Page::Plaque => "1. Plaque Control",
            Page::Perio => "2. Periodontal Health",
            Page::Interdental => "3. Interdental Spaces",
            Page::Sensitivity => "4. Sensitivity",
            Page::ArchAndMotor => "5. Arch Size and Hand Motor Function",
            Page::Summary => "Final Summary",
        }
    }
}

/// Decides whether a move between two pages is allowed.
pub trait TransitionPolicy: Send + Sync {
    fn permits(&self, from: Page, to: Page, assessment: &Assessment) -> bool;
}

/// Every transition is allowed regardless of how complete the input is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconditional;

impl TransitionPolicy for Unconditional {
    fn permits(&self, _from: Page, _to: Page, _assessment: &Assessment) -> bool {
        true
    }
}

/// Holds the current page and the single in-memory assessment.
pub struct Wizard {
    page: Page,
    assessment: Assessment,
    policy: Box<dyn TransitionPolicy>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_policy(Box::new(Unconditional))
    }

    pub fn with_policy(policy: Box<dyn TransitionPolicy>) -> Self {
        Self {
            page: Page::FIRST,
            assessment: Assessment::new(),
            policy,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn assessment_mut(&mut self) -> &mut Assessment {
        &mut self.assessment
    }

    /// The summary page is the conceptual end of data collection.
    pub fn is_finalized(&self) -> bool {
        self.page == Page::LAST
    }

    /// Moves forward one page; stays put on the summary page.
    pub fn advance(&mut self) -> Page {
        if let Some(next) = self.page.next() {
            self.jump_to(next);
        }
        self.page
    }

    /// Moves back one page; stays put on the intro page.
    pub fn retreat(&mut self) -> Page {
        if let Some(previous) = self.page.previous() {
            self.jump_to(previous);
        }
        self.page
    }

    pub fn jump_to(&mut self, to: Page) -> Page {
        if to != self.page && self.policy.permits(self.page, to, &self.assessment) {
            tracing::debug!(from = ?self.page, to = ?to, "page transition");
            self.page = to;
        }
        self.page
    }

    /// Discards the current assessment and starts over on the intro page.
    pub fn restart(&mut self) {
        tracing::info!(assessment_id = %self.assessment.id, "assessment discarded");
        self.assessment = Assessment::new();
        self.page = Page::FIRST;
    }
}
