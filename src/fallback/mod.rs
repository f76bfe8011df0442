//! Rule-based fallback content. Every generation stage has a deterministic,
//! locally computed substitute so the wizard can always move forward with no
//! credential and no network.

use regex::Regex;

const GENERIC_QUESTION: &str =
    "How might we create an innovative solution that addresses the core challenges people face in this area?";

const GENERIC_STEPS: &str =
    "Research your market, validate your idea, build an MVP, test with users, iterate based on feedback, and develop a go-to-market strategy.";

const CONFIGURE_KEY: &str = "Please configure your AI API key to get personalized responses.";

/// Substitute text for a failed or skipped completion, keyed off the prompt.
pub fn for_prompt(prompt: &str) -> String {
    // steps prompts also mention "business question", so check them first
    if prompt.contains("actionable steps") {
        return GENERIC_STEPS.to_string();
    }
    if prompt.contains("business question") {
        return match extract_quoted_problem(prompt) {
            Some(problem) => smart_question(&problem),
            None => GENERIC_QUESTION.to_string(),
        };
    }
    CONFIGURE_KEY.to_string()
}

/// Pulls the problem statement back out of a prompt that embedded it as
/// `problem: "..."`.
fn extract_quoted_problem(prompt: &str) -> Option<String> {
    let re = Regex::new(r#"(?i)problem: "([^"]+)""#).ok()?;
    re.captures(prompt).map(|c| c[1].to_string())
}

/// Pattern-matched "How might we" question for common problem shapes.
fn smart_question(problem: &str) -> String {
    let p = problem.to_lowercase();

    if p.contains("email") && p.contains("organiz") {
        return "How might we create a solution that automates email organization to save users time and reduce daily inbox management?".to_string();
    }
    if p.contains("time") && p.contains("manual") {
        let tail = p
            .split("manual")
            .nth(1)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("daily workflows");
        return format!(
            "How might we automate the manual processes that consume too much time in {tail}?"
        );
    }
    if p.contains("difficult") || p.contains("hard") {
        let subject = strip_difficulty(&p);
        return format!(
            "How might we simplify and streamline {subject} for better user experience?"
        );
    }
    if p.contains("expensive") || p.contains("cost") {
        return format!(
            "How might we create an affordable alternative that reduces costs while maintaining quality in {p}?"
        );
    }
    format!(
        "How might we create a solution that directly addresses {p} through innovative technology and user-centered design?"
    )
}

fn strip_difficulty(problem: &str) -> String {
    let re = Regex::new(r"(?i)\b(it('?s)?\s+)?(is\s+)?(difficult|hard)\b")
        .expect("static pattern");
    let stripped = re.replace_all(problem, "");
    let trimmed = stripped.trim().trim_end_matches([',', '.']).trim();
    if trimmed.is_empty() {
        "this experience".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Fixed 8-step plan used when the model output fails the line-count check.
/// The first step is contextualized with the problem when one is known.
pub fn actionable_steps(problem: &str) -> Vec<String> {
    let first = if problem.trim().is_empty() {
        "Validate the specific opportunity outlined in your business question through 30+ customer interviews using structured problem-discovery frameworks".to_string()
    } else {
        format!(
            "Validate the specific opportunity behind \"{}\" through 30+ customer interviews using structured problem-discovery frameworks",
            problem.trim()
        )
    };
    vec![
        first,
        "Analyze 10-15 direct and indirect competitors addressing similar challenges, identifying their pricing models, feature gaps, and customer complaints".to_string(),
        "Build detailed user personas and customer journey maps specific to the target market implied by your business question".to_string(),
        "Develop an MVP focusing on your core value proposition with 2-3 essential features that directly address your business question".to_string(),
        "Launch beta testing with 50-100 users from your target segment, tracking specific usage metrics and user feedback loops".to_string(),
        "Iterate based on user behavior analytics, implementing features that show highest engagement and solution effectiveness".to_string(),
        "Design a pricing strategy based on value-based pricing models, testing with your beta users to optimize price points and packaging".to_string(),
        "Execute a targeted go-to-market strategy using channels where your specific target audience already congregates and seeks solutions".to_string(),
    ]
}

/// Canned idea set used when the model returns fewer than 3 parseable lines.
pub fn product_ideas() -> Vec<String> {
    vec![
        "AI-powered mobile app with smart automation and personalized recommendations".to_string(),
        "Web-based platform with community features and real-time collaboration tools".to_string(),
        "SaaS solution with advanced analytics and integration capabilities".to_string(),
    ]
}

/// Template concept draft embedding the user's inputs verbatim.
pub fn business_draft(problem: &str, business_question: &str, selected_idea: &str) -> String {
    format!(
        r#"**STARTUP CONCEPT DRAFT**

**Problem Statement:**
{problem}

**Business Question:**
{business_question}

**Solution:**
{selected_idea}

**Target Audience:**
Early adopters and professionals seeking efficient solutions to streamline their workflow and eliminate common pain points.

**Unique Value Proposition:**
Revolutionary approach combining AI-driven insights with user-centric design to deliver measurable results and exceptional user experience.

**Revenue Model:**
- Freemium model with basic features
- Premium subscriptions ($29-99/month)
- Enterprise plans with custom pricing
- API access and integration fees

**Market Opportunity:**
Addressing a $2B+ market with growing demand for innovative solutions and strong user adoption rates.

**Competitive Advantage:**
First-mover advantage in this specific niche, proprietary technology, and deep understanding of user needs."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_fallback_reuses_quoted_problem() {
        let prompt = crate::prompt::business_question("Finding parking is hard");
        let out = for_prompt(&prompt);
        assert!(out.starts_with("How might we"), "got: {out}");
        assert!(out.contains("parking"));
    }

    #[test]
    fn question_fallback_without_quote_is_generic() {
        let out = for_prompt("please produce a business question");
        assert_eq!(out, GENERIC_QUESTION);
    }

    #[test]
    fn steps_fallback_is_a_single_sentence() {
        let out = for_prompt("give me actionable steps for my startup");
        assert_eq!(out, GENERIC_STEPS);
    }

    #[test]
    fn unknown_prompt_gets_configure_notice() {
        assert_eq!(for_prompt("hello"), CONFIGURE_KEY);
    }

    #[test]
    fn smart_question_email_pattern() {
        let q = smart_question("I waste hours organizing email threads");
        assert!(q.contains("email organization"));
    }

    #[test]
    fn smart_question_strips_difficulty_phrase() {
        let q = smart_question("Finding parking is hard");
        assert!(q.contains("finding parking"));
        assert!(!q.contains("hard"));
    }

    #[test]
    fn fixed_steps_are_exactly_eight_and_contextual() {
        let steps = actionable_steps("Finding parking is hard");
        assert_eq!(steps.len(), 8);
        assert!(steps[0].contains("Finding parking is hard"));
        let generic = actionable_steps("");
        assert_eq!(generic.len(), 8);
        assert!(generic[0].contains("business question"));
    }

    #[test]
    fn draft_template_embeds_inputs() {
        let d = business_draft("P", "Q", "Idea Y");
        assert!(d.contains("**STARTUP CONCEPT DRAFT**"));
        assert!(d.contains("\nP\n"));
        assert!(d.contains("Idea Y"));
        assert!(d.contains("**Competitive Advantage:**"));
    }
}
