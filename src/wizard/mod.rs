//! Linear seven-step wizard state machine. Steps only move forward one at a
//! time (auto-advance after a generation, or an explicit user action); restart
//! is the only way back to the beginning.

use crate::advisor::Advisor;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 7;

/// Everything accumulated across the wizard's stages.
/// `selected_idea_index` only means something once `product_ideas` is filled;
/// the draft and steps stages read `product_ideas[selected_idea_index]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupData {
    pub problem: String,
    pub business_question: String,
    pub product_ideas: Vec<String>,
    pub selected_idea_index: usize,
    pub business_draft: String,
    pub actionable_steps: Vec<String>,
}

/// Shallow merge: only fields set here replace current values.
#[derive(Debug, Default)]
pub struct DataPatch {
    pub problem: Option<String>,
    pub business_question: Option<String>,
    pub product_ideas: Option<Vec<String>>,
    pub selected_idea_index: Option<usize>,
    pub business_draft: Option<String>,
    pub actionable_steps: Option<Vec<String>>,
}

pub struct Wizard {
    step: u8,
    generating: bool,
    data: StartupData,
    advisor: Advisor,
}

impl Wizard {
    pub fn new(advisor: Advisor) -> Self {
        Self {
            step: FIRST_STEP,
            generating: false,
            data: StartupData::default(),
            advisor,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn data(&self) -> &StartupData {
        &self.data
    }

    pub fn selected_idea(&self) -> Option<&str> {
        self.data
            .product_ideas
            .get(self.data.selected_idea_index)
            .map(String::as_str)
    }

    pub fn advance(&mut self) {
        self.step = (self.step + 1).min(LAST_STEP);
    }

    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1).max(FIRST_STEP);
    }

    pub fn restart(&mut self) {
        self.step = FIRST_STEP;
        self.data = StartupData::default();
    }

    pub fn update_data(&mut self, patch: DataPatch) {
        if let Some(v) = patch.problem {
            self.data.problem = v;
        }
        if let Some(v) = patch.business_question {
            self.data.business_question = v;
        }
        if let Some(v) = patch.product_ideas {
            self.data.product_ideas = v;
        }
        if let Some(v) = patch.selected_idea_index {
            self.data.selected_idea_index = v;
        }
        if let Some(v) = patch.business_draft {
            self.data.business_draft = v;
        }
        if let Some(v) = patch.actionable_steps {
            self.data.actionable_steps = v;
        }
    }

    // The four generation operations share one shape: mark generating, ask the
    // advisor (which never fails), merge, advance one step, clear the flag.
    // Re-invoking overwrites the field and re-advances, bounded at LAST_STEP.

    pub async fn generate_business_question(&mut self, problem: &str) {
        self.generating = true;
        self.data.business_question = self.advisor.business_question(problem).await;
        self.advance();
        self.generating = false;
    }

    pub async fn generate_product_ideas(&mut self, business_question: &str) {
        self.generating = true;
        self.data.product_ideas = self.advisor.product_ideas(business_question).await;
        self.advance();
        self.generating = false;
    }

    pub async fn generate_business_draft(
        &mut self,
        problem: &str,
        business_question: &str,
        selected_idea: &str,
    ) {
        self.generating = true;
        self.data.business_draft = self
            .advisor
            .business_draft(problem, business_question, selected_idea)
            .await;
        self.advance();
        self.generating = false;
    }

    /// Unlike the other stages this one reads its inputs from current state.
    pub async fn generate_actionable_steps(&mut self) {
        self.generating = true;
        let idea = self.selected_idea().unwrap_or_default().to_string();
        self.data.actionable_steps = self
            .advisor
            .actionable_steps(&self.data.problem, &self.data.business_question, &idea)
            .await;
        self.advance();
        self.generating = false;
    }
}
