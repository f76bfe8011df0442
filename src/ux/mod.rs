use colored::Colorize;
use indicatif::ProgressBar;
use std::future::Future;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::wizard::StartupData;

const STEP_LABELS: [&str; 6] = ["Problem", "Question", "Ideas", "Unlock", "Draft", "Steps"];

/// Progress banner shown on every step after the hero screen.
pub fn show_progress(step: u8) {
    if step <= 1 {
        return;
    }
    let idx = (step - 2) as usize;
    let trail: Vec<String> = STEP_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i < idx {
                format!("{}", label.green())
            } else if i == idx {
                format!("{}", label.bold().cyan())
            } else {
                label.to_string()
            }
        })
        .collect();
    println!(
        "\n{} {}",
        format!("[{}/{}]", step - 1, STEP_LABELS.len()).bold(),
        trail.join(" > ")
    );
}

pub fn show_hero() {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━━━━ FounderAI ━━━━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!("  Turn a problem you care about into a startup concept:");
    println!("  business question, product ideas, concept draft, and an");
    println!("  8-step action plan.");
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );
}

pub fn show_question(problem: &str, question: &str) {
    println!("\n{} {}", "Problem:".bold(), problem);
    println!("{}\n  {}", "Business question:".bold(), question.cyan());
}

pub fn show_ideas(question: &str, ideas: &[String]) {
    println!("\n{} {}", "Business question:".bold(), question);
    println!("{}", "Product ideas:".bold());
    for (i, idea) in ideas.iter().enumerate() {
        println!("{}. {}", i + 1, idea.yellow());
    }
}

pub fn show_paywall() {
    println!("\n{}", "=== Unlock Your Business Draft ===".bold());
    println!("  {} Professional business draft", "*".green());
    println!("  {} 8-step action plan", "*".green());
    println!("  Usually $49 - today {}", "FREE".bold().green());
}

pub fn show_draft(draft: &str) {
    println!("\n{}", "=== BUSINESS DRAFT ===".bold());
    println!("{draft}");
}

pub fn show_steps(steps: &[String]) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━━ Action Plan ━━━━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", format!("{}", i + 1).bold().cyan(), step);
    }
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );
}

pub fn show_summary(data: &StartupData) {
    println!("\n{}", "Your startup so far:".bold());
    println!("  problem:  {}", data.problem);
    println!("  question: {}", data.business_question);
    if let Some(idea) = data.product_ideas.get(data.selected_idea_index) {
        println!("  idea:     {idea}");
    }
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

pub fn read_line(prompt: &str) -> String {
    print!("{prompt}: ");
    let _ = io::stdout().flush();
    let mut s = String::new();
    let _ = io::stdin().read_line(&mut s);
    s.trim().to_string()
}

/// 1-based menu choice, re-prompting until valid.
pub fn choose(prompt: &str, max: usize) -> usize {
    loop {
        let raw = read_line(&format!("{prompt} [1-{max}]"));
        match raw.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return n,
            _ => println!("Please enter a number between 1 and {max}."),
        }
    }
}

/// Runs one generation with a spinner; the wizard stays busy until it resolves.
pub async fn with_spinner<T>(msg: &str, fut: impl Future<Output = T>) -> T {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

/// CLI stand-in for the browser's draft download: write it next to the root.
pub fn save_draft(root: &Path, draft: &str) -> anyhow::Result<PathBuf> {
    let path = root.join("founderai-draft.txt");
    fs_err::write(&path, draft)?;
    Ok(path)
}
