//! Content generation for the four wizard stages. Builds the stage prompt,
//! runs it through the completion client, and shapes the free-text reply into
//! what the stage needs (one string, or an ordered list). Never fails: parse
//! quality below threshold swaps in the fixed fallback content.

use crate::client::{Completion, CompletionClient};
use crate::fallback;
use crate::log::SessionLog;
use crate::prompt;

pub const IDEA_COUNT: usize = 3;
pub const STEP_COUNT: usize = 8;
/// Parsed step lists shorter than this are discarded wholesale.
const MIN_PARSED_STEPS: usize = 6;

pub struct Advisor {
    client: CompletionClient,
    user_context: Option<String>,
    session: Option<SessionLog>,
}

impl Advisor {
    pub fn new(client: CompletionClient, user_context: Option<String>, session: Option<SessionLog>) -> Self {
        Self { client, user_context, session }
    }

    async fn run_stage(&self, stage: &str, prompt: &str) -> Completion {
        let completion = self.client.request(prompt).await;
        if let Some(session) = &self.session {
            if let Err(e) = session.save_stage(stage, prompt, completion.text(), completion.tag()) {
                eprintln!("warn[log]: could not save {stage} artifacts: {e}");
            }
        }
        completion
    }

    /// One "How might we..." question for the given problem. Whatever text
    /// comes back is accepted as-is; the <=20 word constraint is advisory.
    pub async fn business_question(&self, problem: &str) -> String {
        let prompt = prompt::business_question(problem);
        self.run_stage("question", &prompt).await.into_text()
    }

    /// Exactly three idea strings.
    pub async fn product_ideas(&self, business_question: &str) -> Vec<String> {
        let prompt = prompt::product_ideas(business_question);
        let completion = self.run_stage("ideas", &prompt).await;
        let mut ideas = parse_list_lines(completion.text());
        if ideas.len() < IDEA_COUNT {
            return fallback::product_ideas();
        }
        ideas.truncate(IDEA_COUNT);
        ideas
    }

    /// Multi-section concept draft. A fallback or blank completion yields the
    /// deterministic template instead.
    pub async fn business_draft(
        &self,
        problem: &str,
        business_question: &str,
        selected_idea: &str,
    ) -> String {
        let prompt = prompt::business_draft(problem, business_question, selected_idea);
        let completion = self.run_stage("draft", &prompt).await;
        if completion.is_fallback() || completion.text().is_empty() {
            return fallback::business_draft(problem, business_question, selected_idea);
        }
        completion.into_text()
    }

    /// Ordered action plan. Fewer than 6 parseable lines discards the reply
    /// entirely in favor of the fixed 8-step fallback; 6 or 7 parsed lines are
    /// returned short, without padding.
    pub async fn actionable_steps(
        &self,
        problem: &str,
        business_question: &str,
        selected_idea: &str,
    ) -> Vec<String> {
        let prompt = prompt::actionable_steps(
            problem,
            business_question,
            selected_idea,
            self.user_context.as_deref(),
        );
        let completion = self.run_stage("steps", &prompt).await;
        let mut steps = parse_list_lines(completion.text());
        if steps.len() < MIN_PARSED_STEPS {
            return fallback::actionable_steps(problem);
        }
        steps.truncate(STEP_COUNT);
        steps
    }
}

/// Keeps lines carrying a leading `<digits>.` or `-` marker, marker stripped.
fn parse_list_lines(response: &str) -> Vec<String> {
    response.lines().filter_map(list_item).collect()
}

// markers must sit at the very start of the line; indented lists don't count
fn list_item(line: &str) -> Option<String> {
    let rest = if let Some(r) = line.strip_prefix('-') {
        r
    } else {
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix('.')?
    };
    let item = rest.trim();
    (!item.is_empty()).then(|| item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CompletionClient;
    use crate::config::Config;
    use crate::errors::CompletionError;
    use crate::provider::{OfflineProvider, Provider};
    use crate::wire::ChatRequest;
    use async_trait::async_trait;

    fn offline_advisor() -> Advisor {
        let client = CompletionClient::new(Box::new(OfflineProvider), &Config::default(), false);
        Advisor::new(client, None, None)
    }

    struct CannedProvider(&'static str);

    #[async_trait]
    impl Provider for CannedProvider {
        async fn complete(&self, _req: &ChatRequest, _debug: bool) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    fn scripted_advisor(reply: &'static str) -> Advisor {
        let cfg = Config {
            api_key: Some("sk-test".into()),
            ..Config::default()
        };
        let client = CompletionClient::new(Box::new(CannedProvider(reply)), &cfg, false);
        Advisor::new(client, None, None)
    }

    #[test]
    fn parses_numbered_lines_in_order() {
        let response = "1. A\n2. B\n3. C\n4. D\n5. E\n6. F\n7. G\n8. H";
        assert_eq!(
            parse_list_lines(response),
            vec!["A", "B", "C", "D", "E", "F", "G", "H"]
        );
    }

    #[test]
    fn parses_dashed_lines_and_skips_prose() {
        let response = "Here is your plan:\n- first\n- second\n\nGood luck!";
        assert_eq!(parse_list_lines(response), vec!["first", "second"]);
    }

    #[test]
    fn ignores_markers_without_separator_or_content() {
        assert!(parse_list_lines("1) not a match\n2.\n-   \nplain").is_empty());
    }

    #[tokio::test]
    async fn question_is_nonempty_offline() {
        let advisor = offline_advisor();
        let q = advisor.business_question("Finding parking is hard").await;
        assert!(q.starts_with("How might we"));
    }

    #[tokio::test]
    async fn ideas_fall_back_to_exactly_three() {
        let advisor = offline_advisor();
        let ideas = advisor.product_ideas("How might we fix parking?").await;
        assert_eq!(ideas.len(), IDEA_COUNT);
    }

    #[tokio::test]
    async fn draft_fallback_contains_selected_idea() {
        let advisor = offline_advisor();
        let draft = advisor
            .business_draft("Parking is hard", "How might we fix parking?", "Idea Y")
            .await;
        assert!(draft.contains("Idea Y"));
        assert!(draft.contains("**Revenue Model:**"));
    }

    #[tokio::test]
    async fn steps_fall_back_to_exactly_eight() {
        let advisor = offline_advisor();
        let steps = advisor
            .actionable_steps("Parking is hard", "How might we fix parking?", "Idea Y")
            .await;
        assert_eq!(steps.len(), STEP_COUNT);
        assert!(steps[0].contains("Parking is hard"));
    }

    #[test]
    fn indented_markers_are_not_list_items() {
        assert!(parse_list_lines("  1. indented\n\t- tabbed\n - spaced dash").is_empty());
    }

    #[tokio::test]
    async fn seven_parsed_steps_are_returned_unpadded() {
        let advisor = scripted_advisor("1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g");
        let steps = advisor
            .actionable_steps("Parking is hard", "How might we fix parking?", "Idea Y")
            .await;
        assert_eq!(steps, vec!["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[tokio::test]
    async fn six_parsed_steps_are_returned_unpadded() {
        let advisor = scripted_advisor("- a\n- b\n- c\n- d\n- e\n- f");
        let steps = advisor
            .actionable_steps("Parking is hard", "How might we fix parking?", "Idea Y")
            .await;
        assert_eq!(steps, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[tokio::test]
    async fn five_parsed_steps_trigger_the_full_fallback() {
        let advisor = scripted_advisor("1. a\n2. b\n3. c\n4. d\n5. e");
        let steps = advisor
            .actionable_steps("Parking is hard", "How might we fix parking?", "Idea Y")
            .await;
        assert_eq!(steps.len(), STEP_COUNT);
        assert!(steps[0].contains("Parking is hard"));
    }
}
