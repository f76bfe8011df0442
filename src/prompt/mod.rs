//! Per-stage prompt builders. Each stage turns wizard inputs into one user
//! prompt; the system persona is fixed across stages.

pub fn system_persona() -> &'static str {
    "You are an expert startup advisor and business strategist with 15+ years of \
     experience helping entrepreneurs build successful companies. You provide \
     specific, actionable, and highly personalized advice based on the exact \
     problem described. Never give generic responses - always tailor your advice \
     to the specific situation."
}

pub fn business_question(problem: &str) -> String {
    format!(
        r#"I need you to create a precise business question for this specific problem: "{problem}"

Requirements:
- Start with "How might we..."
- Be extremely specific to the exact problem mentioned
- Focus on the core pain point, not generic business solutions
- Include specific keywords from the problem statement
- Make it actionable for creating a targeted startup solution
- Maximum 20 words

Example:
Problem: "I spend too much time manually organizing my email inbox every day"
Good Question: "How might we create a solution that automates email organization to save users time and reduce daily inbox management?"

Bad Question: "How might we create an innovative solution that addresses core challenges?"

Now generate a specific business question for: "{problem}"

Return ONLY the question, nothing else."#
    )
}

pub fn product_ideas(business_question: &str) -> String {
    format!(
        r#"Propose exactly 3 distinct product concepts that answer this business question:

**Business Question**: {business_question}

Each concept must be a single sentence naming the product form (app, platform, SaaS, service, hardware) and its core differentiator. Make the three concepts genuinely different approaches, not variations of one idea.

Format: Return exactly 3 numbered lines, nothing else."#
    )
}

pub fn business_draft(problem: &str, business_question: &str, selected_idea: &str) -> String {
    format!(
        r#"Write a concise startup concept draft for this idea:

**Problem**: {problem}
**Business Question**: {business_question}
**Chosen Solution**: {selected_idea}

Structure the draft with these bold section headers, in order:
**STARTUP CONCEPT DRAFT**, **Problem Statement:**, **Business Question:**, **Solution:**, **Target Audience:**, **Unique Value Proposition:**, **Revenue Model:**, **Market Opportunity:**, **Competitive Advantage:**

Repeat the problem, question, and chosen solution verbatim in their sections. Keep every other section to 1-3 sentences or a short dashed list. Return only the draft text."#
    )
}

pub fn actionable_steps(
    problem: &str,
    business_question: &str,
    selected_idea: &str,
    user_context: Option<&str>,
) -> String {
    let context_line = match user_context {
        Some(ctx) => format!("**Additional Context**: {ctx}\n"),
        None => String::new(),
    };
    format!(
        r#"Create a detailed, actionable 8-step roadmap for this specific startup idea:

**Problem**: {problem}
**Business Question**: {business_question}
**Solution Approach**: {selected_idea}
{context_line}
I need a premium-quality, personalized roadmap that someone would pay for. Each step should be:

1. **Hyper-specific** to this exact business question and solution
2. **Actionable** with concrete next steps
3. **Valuable** - containing insights worth paying for
4. **Realistic** with practical timelines
5. **Progressive** - each step builds on the previous

Include specific tactics, tools, metrics, and methodologies relevant to this particular startup idea based on the business question.

Format: Return exactly 8 numbered actionable steps, each 1-2 sentences with specific actionable details.

Example quality level:
Instead of: "Validate your idea"
Provide: "Conduct 25 customer interviews using the Mom Test methodology, focusing on the specific pain points in your business question, and achieve 80%+ problem confirmation rate within 3 weeks"

Generate 8 premium-quality, specific steps based on the business question:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_prompt_embeds_problem_verbatim() {
        let p = business_question("Finding parking is hard");
        assert!(p.contains("\"Finding parking is hard\""));
        assert!(p.contains("How might we"));
        assert!(p.contains("Maximum 20 words"));
    }

    #[test]
    fn steps_prompt_includes_optional_context_only_when_given() {
        let with = actionable_steps("p", "q", "idea", Some("B2B only"));
        assert!(with.contains("**Additional Context**: B2B only"));
        let without = actionable_steps("p", "q", "idea", None);
        assert!(!without.contains("**Additional Context**"));
    }

    #[test]
    fn draft_prompt_names_every_section() {
        let p = business_draft("p", "q", "idea");
        for header in [
            "**Problem Statement:**",
            "**Business Question:**",
            "**Solution:**",
            "**Target Audience:**",
            "**Unique Value Proposition:**",
            "**Revenue Model:**",
            "**Market Opportunity:**",
            "**Competitive Advantage:**",
        ] {
            assert!(p.contains(header), "missing {header}");
        }
    }
}
