use crate::infra::InMemoryHistoryRepository;
use clap::Args;
use std::sync::Arc;
use textify::error::AppError;
use textify::workflows::humanize::{
    HistoryRepository, HumanizeRequest, HumanizeService, OfflineDetectionGateway,
    OfflineRewriteGateway, Tone, ToneTransformer,
};

#[derive(Args, Debug)]
pub(crate) struct HumanizeArgs {
    /// Text to rewrite
    #[arg(long)]
    pub(crate) text: String,
    /// Tone label (formal, friendly, concise, persuasive, creative)
    #[arg(long, default_value = "formal")]
    pub(crate) tone: String,
    /// Seed for the candidate selection, for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the candidate selection so demo runs are comparable
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the originality check portion of the demo
    #[arg(long)]
    pub(crate) skip_originality: bool,
}

const DEMO_TEXT: &str = "I think this is a good plan, basically. We can't wait \
because the end result is very important and we need to get it done soon. \
According to the team it should be easy, therefore everyone is happy.";

fn offline_service(seed: Option<u64>) -> (HumanizeService<InMemoryHistoryRepository>, Arc<InMemoryHistoryRepository>) {
    let repository = Arc::new(InMemoryHistoryRepository::default());
    let transformer = match seed {
        Some(seed) => ToneTransformer::seeded(seed),
        None => ToneTransformer::from_entropy(),
    };
    let service = HumanizeService::with_transformer(
        transformer,
        repository.clone(),
        Box::new(OfflineRewriteGateway),
        Box::new(OfflineDetectionGateway),
    );
    (service, repository)
}

pub(crate) fn run_humanize(args: HumanizeArgs) -> Result<(), AppError> {
    let (service, _) = offline_service(args.seed);

    match service.humanize(HumanizeRequest {
        text: args.text,
        tone: args.tone,
    }) {
        Ok(outcome) => {
            println!("{}", outcome.result.humanized_text);
            println!(
                "-- tone {} | source {} | originality level {} | similarity {:.0}%",
                outcome.result.tone,
                outcome.result.source.label(),
                outcome.result.originality_level.unwrap_or(1),
                outcome.stats.similarity * 100.0
            );
        }
        Err(err) => println!("Humanization rejected: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (service, repository) = offline_service(args.seed);

    println!("Text humanizer demo (local engine, no external services)");
    println!("\nInput:\n  {DEMO_TEXT}");

    for tone in Tone::ALL {
        let outcome = match service.humanize(HumanizeRequest {
            text: DEMO_TEXT.to_string(),
            tone: tone.label().to_string(),
        }) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("  {} rejected: {err}", tone.label());
                continue;
            }
        };

        println!("\n[{}] {}", tone.label(), tone.blurb());
        println!("  {}", outcome.result.humanized_text);
        println!(
            "  originality level {} | {} -> {} words | similarity {:.0}%",
            outcome.result.originality_level.unwrap_or(1),
            outcome.stats.original_words,
            outcome.stats.humanized_words,
            outcome.stats.similarity * 100.0
        );
    }

    if !args.skip_originality {
        let check = service.check_originality(DEMO_TEXT);
        println!(
            "\nOriginality check ({}): level {}/10, {} flagged section(s)",
            check.source.label(),
            check.assessment.level,
            check.assessment.spans.len()
        );
    }

    let entries = repository
        .list()
        .map(|entries| {
            entries
                .iter()
                .map(|entry| entry.view())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    println!("\nHistory snapshot ({} entries, newest first)", entries.len());
    match serde_json::to_string_pretty(&entries) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("History snapshot unavailable: {err}"),
    }

    Ok(())
}
