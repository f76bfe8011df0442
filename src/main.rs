use clap::Parser;
use std::path::Path;
use uuid::Uuid;

use founderai::{advisor, cli, client, config, log, provider, ux, wizard};
use founderai::wizard::DataPatch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::load(args.config.as_deref())?;
    args.apply_to(&mut cfg);

    if !cfg.has_credential() {
        eprintln!(
            "note: no {} configured; the wizard runs fully offline with fallback content",
            config::API_KEY_ENV
        );
    }

    let session_id = Uuid::new_v4();
    let session = match log::SessionLog::create(Path::new(&cfg.root), session_id, &cfg) {
        Ok(s) => {
            if args.debug {
                println!("debug: session artifacts at {}", s.dir().display());
            }
            Some(s)
        }
        Err(e) => {
            eprintln!("warn: could not create session directory: {e}");
            None
        }
    };

    let provider = provider::make_provider(args.provider.clone(), cfg.timeout_secs, cfg.api_key.clone());
    let client = client::CompletionClient::new(provider, &cfg, args.debug);
    let advisor = advisor::Advisor::new(client, args.context.clone(), session);
    let mut wizard = wizard::Wizard::new(advisor);

    loop {
        ux::show_progress(wizard.step());
        match wizard.step() {
            1 => {
                ux::show_hero();
                if !ux::confirm("Start building your startup?") {
                    return Ok(());
                }
                wizard.advance();
            }
            2 => {
                let problem = ux::read_line("Describe the problem you want to solve");
                if problem.is_empty() {
                    println!("A problem statement is required.");
                    continue;
                }
                wizard.update_data(DataPatch {
                    problem: Some(problem.clone()),
                    ..DataPatch::default()
                });
                ux::with_spinner(
                    "Generating business question...",
                    wizard.generate_business_question(&problem),
                )
                .await;
            }
            3 => {
                let data = wizard.data();
                ux::show_question(&data.problem, &data.business_question);
                let question = data.business_question.clone();
                ux::read_line("Press Enter to generate product ideas");
                ux::with_spinner(
                    "Generating product ideas...",
                    wizard.generate_product_ideas(&question),
                )
                .await;
            }
            4 => {
                let data = wizard.data();
                ux::show_ideas(&data.business_question, &data.product_ideas);
                let picked = ux::choose("Pick the idea to build on", data.product_ideas.len());
                wizard.update_data(DataPatch {
                    selected_idea_index: Some(picked - 1),
                    ..DataPatch::default()
                });
                wizard.advance();
            }
            5 => {
                ux::show_paywall();
                if !ux::confirm("Unlock your draft and action plan?") {
                    continue;
                }
                let data = wizard.data();
                let (problem, question) = (data.problem.clone(), data.business_question.clone());
                let idea = wizard.selected_idea().unwrap_or_default().to_string();
                ux::with_spinner(
                    "Drafting your business concept...",
                    wizard.generate_business_draft(&problem, &question, &idea),
                )
                .await;
            }
            6 => {
                ux::show_draft(&wizard.data().business_draft);
                if ux::confirm("Save the draft to founderai-draft.txt?") {
                    match ux::save_draft(Path::new(&cfg.root), &wizard.data().business_draft) {
                        Ok(path) => println!("Saved to {}", path.display()),
                        Err(e) => eprintln!("warn: could not save draft: {e}"),
                    }
                }
                ux::read_line("Press Enter to generate your action plan");
                ux::with_spinner(
                    "Generating actionable steps...",
                    wizard.generate_actionable_steps(),
                )
                .await;
            }
            _ => {
                ux::show_summary(wizard.data());
                ux::show_steps(&wizard.data().actionable_steps);
                if ux::confirm("Start over with a new problem?") {
                    wizard.restart();
                    continue;
                }
                println!("Good luck out there.");
                return Ok(());
            }
        }
    }
}
