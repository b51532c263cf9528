use clap::{Parser, ValueEnum};
use clinichat::prelude::*;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Menu,
    Learn,
}

/// Talk to the clinic intake bot in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the catalog JSON file (defaults to the built-in content)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Path to a compiled catalog artifact, used instead of --catalog
    #[arg(long, conflicts_with = "catalog")]
    compiled: Option<String>,

    /// Path to the clinic facts JSON file (defaults to the built-in clinic)
    #[arg(long)]
    clinic: Option<String>,

    /// How the conversation opens
    #[arg(short, long, value_enum, default_value = "menu")]
    mode: ModeCli,

    /// Open in learn mode and answer this question right away
    #[arg(short, long)]
    question: Option<String>,

    /// Do not ask for a phone number during booking
    #[arg(long)]
    no_phone: bool,

    /// Fail when a follow-up references a missing topic
    #[arg(long)]
    strict: bool,

    /// Print every render directive as a JSON line instead of chat text
    #[arg(long)]
    json: bool,

    /// Print the direct-contact link and exit
    #[arg(long)]
    direct_link: bool,

    /// Write the resolved catalog as a compiled artifact and exit
    #[arg(long, value_name = "PATH")]
    compile_to: Option<String>,
}

enum Pick {
    Choice(String),
    Button(ButtonEffect),
}

/// Renders directives to stdout and remembers the numbered options last shown.
struct TerminalAdapter {
    json: bool,
    options: Vec<Pick>,
}

impl TerminalAdapter {
    fn new(json: bool) -> Self {
        Self {
            json,
            options: Vec::new(),
        }
    }

    fn pick(&self, number: usize) -> Option<&Pick> {
        number.checked_sub(1).and_then(|i| self.options.get(i))
    }

    fn forget_options(&mut self) {
        self.options.clear();
    }
}

impl PresentationAdapter for TerminalAdapter {
    fn render(&mut self, instruction: &RenderInstruction) {
        let offers_options = instruction.iter().any(|d| {
            matches!(
                d,
                Directive::ShowChoices { .. } | Directive::ShowButtonAction { .. }
            )
        });
        if offers_options {
            self.options.clear();
        }

        for directive in instruction {
            if self.json {
                match serde_json::to_string(directive) {
                    Ok(line) => println!("{}", line),
                    Err(e) => eprintln!("Failed to serialize directive: {}", e),
                }
            }
            match directive {
                Directive::ShowMessage { text, sender } => {
                    if !self.json {
                        let who = match sender {
                            Sender::Bot => "bot",
                            Sender::User => "you",
                        };
                        println!("{:>4} | {}", who, text);
                    }
                }
                Directive::ShowChoices { labels } => {
                    for label in labels {
                        self.options.push(Pick::Choice(label.clone()));
                        if !self.json {
                            println!("       [{}] {}", self.options.len(), label);
                        }
                    }
                }
                Directive::ShowLinkAction { label, uri } => {
                    if !self.json {
                        println!("       -> {}: {}", label, uri);
                    }
                }
                Directive::ShowButtonAction { label, effect } => {
                    self.options.push(Pick::Button(*effect));
                    if !self.json {
                        println!("       [{}] {}", self.options.len(), label);
                    }
                }
            }
        }
    }

    fn clear(&mut self) {
        self.options.clear();
        if !self.json {
            println!("\n--- New conversation ---");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let facts = match &cli.clinic {
        Some(path) => ClinicFacts::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load clinic facts: {}", e))
        }),
        None => ClinicFacts::default(),
    };

    if cli.direct_link {
        println!("{}", direct_contact_link(&facts));
        return;
    }

    let catalog = load_catalog(&cli);
    if cli.strict {
        catalog
            .ensure_complete()
            .unwrap_or_else(|e| exit_with_error(&format!("Catalog check failed: {}", e)));
    }

    if let Some(path) = &cli.compile_to {
        CompiledCatalog::new(catalog)
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write artifact: {}", e)));
        println!("Compiled catalog written to '{}'", path);
        return;
    }

    let mut widget = Widget::new(
        Arc::new(catalog),
        Arc::new(facts),
        TerminalAdapter::new(cli.json),
    )
    .with_phone_collection(!cli.no_phone);

    match (&cli.question, cli.mode) {
        (Some(question), _) => widget.open_with_question(question),
        (None, ModeCli::Menu) => widget.open(EntryMode::Menu),
        (None, ModeCli::Learn) => widget.open(EntryMode::Learning),
    }

    run_loop(&mut widget);
}

fn load_catalog(cli: &Cli) -> Catalog {
    if let Some(path) = &cli.compiled {
        return CompiledCatalog::from_file(path)
            .map(CompiledCatalog::into_catalog)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load artifact: {}", e)));
    }
    let loaded = match &cli.catalog {
        Some(path) => Catalog::from_file(path),
        None => Catalog::builtin(),
    };
    loaded.unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
}

/// Reads lines until EOF or `/quit`. A number picks an option; anything else is typed text.
fn run_loop(widget: &mut Widget<TerminalAdapter>) {
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line =
            line.unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)));
        let input = line.trim();

        match input {
            "/quit" | "/exit" => break,
            "/restart" => widget.open(EntryMode::Menu),
            "" => {}
            _ => match input.parse::<usize>() {
                Ok(number) => match widget.adapter().pick(number) {
                    Some(Pick::Choice(label)) => {
                        let label = label.clone();
                        widget.select_choice(&label);
                    }
                    Some(Pick::Button(effect)) => {
                        let effect = *effect;
                        widget.trigger(effect);
                    }
                    None => widget.submit_free_text(input),
                },
                Err(_) => widget.submit_free_text(input),
            },
        }
        // A typed-only step leaves the previous step's numbered options stale.
        if widget.engine().is_some_and(DialogueEngine::awaiting_text_only) {
            widget.adapter_mut().forget_options();
        }
        prompt();
    }
    widget.close();
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
