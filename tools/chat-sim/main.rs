use clap::Parser;
use clinichat::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const NOISE_TEXT: &[&str] = &[
    "",
    " ",
    "A",
    "Al",
    "hello?",
    "123",
    "98765 43210",
    "+91 98765-43210",
    "Tue 2–4 PM",
];
const NOISE_LABELS: &[&str] = &[
    "Something else",
    "Learn about Naturopathy",
    "Skip",
    "Book a WhatsApp Call",
    "Ask another question",
];

/// A CLI tool that drives random conversations through the dialogue engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of conversations to simulate
    #[arg(short, long, default_value_t = 1000)]
    conversations: usize,

    /// Maximum inputs per conversation
    #[arg(long, default_value_t = 40)]
    max_turns: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of sending an input that is not on offer
    #[arg(long, default_value_t = 0.15)]
    noise: f64,

    /// Simulate the variant without the phone step
    #[arg(long)]
    no_phone: bool,
}

#[derive(Default)]
struct Summary {
    completed: usize,
    abandoned: usize,
    turns: usize,
    violations: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .init();

    let cli = Cli::parse();
    if !(0.0..=1.0).contains(&cli.noise) {
        eprintln!("Error: --noise ({}) must be between 0 and 1", cli.noise);
        std::process::exit(1);
    }

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let catalog = Arc::new(Catalog::builtin()?);
    let facts = Arc::new(ClinicFacts::default());

    println!(
        "Simulating {} conversations (seed {}, noise {})...",
        cli.conversations, seed, cli.noise
    );

    let mut summary = Summary::default();
    for index in 0..cli.conversations {
        let mut engine = DialogueEngine::builder(Arc::clone(&catalog), Arc::clone(&facts))
            .collect_phone(!cli.no_phone)
            .build();
        simulate(index, &mut engine, &cli, &mut rng, &mut summary);
    }

    println!("\n--- Simulation Summary ---");
    println!("Completed bookings:   {}", summary.completed);
    println!("Abandoned:            {}", summary.abandoned);
    println!("Total inputs:         {}", summary.turns);
    println!("Invariant violations: {}", summary.violations.len());
    for violation in summary.violations.iter().take(10) {
        println!("  -> {}", violation);
    }

    if !summary.violations.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn simulate(
    index: usize,
    engine: &mut DialogueEngine,
    cli: &Cli,
    rng: &mut StdRng,
    summary: &mut Summary,
) {
    let entry = if rng.random_bool(0.5) {
        EntryMode::Menu
    } else {
        EntryMode::Learning
    };
    let mut last = engine.start(entry);

    for _ in 0..cli.max_turns {
        summary.turns += 1;
        let before = engine.record().clone();
        let state = engine.state();

        let next = if rng.random_bool(cli.noise) {
            let next = if rng.random_bool(0.5) {
                engine.select_choice(NOISE_LABELS.choose(rng).copied().unwrap_or_default())
            } else {
                engine.submit_free_text(NOISE_TEXT.choose(rng).copied().unwrap_or_default())
            };
            // Noise may legitimately advance a step (e.g. a valid name), but must never
            // leave the engine without something to answer.
            if next.is_empty() && engine.state() != state {
                summary
                    .violations
                    .push(format!("#{index}: silent transition from {state}"));
            }
            next
        } else {
            next_valid_input(engine, &last, rng)
        };
        // Nudges without choices keep the previous options on screen.
        if next.last_choices().is_some() {
            last = next;
        }

        if state == DialogueState::Learning && engine.record().concern != before.concern {
            summary
                .violations
                .push(format!("#{index}: learning changed the intake record"));
        }

        if engine.state().is_terminal() {
            check_outbound(index, engine, summary);
            summary.completed += 1;
            return;
        }
    }
    summary.abandoned += 1;
}

/// Picks something the last render actually offered, typing text where a step asks for it.
fn next_valid_input(
    engine: &mut DialogueEngine,
    last: &RenderInstruction,
    rng: &mut StdRng,
) -> RenderInstruction {
    if let DialogueState::Booking(BookingStep::Phone) = engine.state() {
        let phone = format!("{}", rng.random_range(6_000_000_000u64..10_000_000_000));
        return engine.submit_free_text(&phone);
    }
    if let DialogueState::Booking(BookingStep::Name) = engine.state() {
        if rng.random_bool(0.5) {
            return engine.submit_free_text("Asha");
        }
    }
    match last.last_choices().and_then(|labels| labels.choose(rng)) {
        Some(label) => {
            let label = label.clone();
            engine.select_choice(&label)
        }
        None => engine.trigger(ButtonEffect::RestartLearning),
    }
}

fn check_outbound(index: usize, engine: &DialogueEngine, summary: &mut Summary) {
    let (Some(message), Some(link)) = (engine.outbound_message(), engine.outbound_link()) else {
        summary
            .violations
            .push(format!("#{index}: done without an outbound message"));
        return;
    };
    if decode_link_text(&link).as_deref() != Some(message) {
        summary
            .violations
            .push(format!("#{index}: deep link does not round-trip"));
    }
    if MessageComposer::compose(engine.record(), engine.facts()) != message {
        summary
            .violations
            .push(format!("#{index}: composition is not deterministic"));
    }
}
