use std::io::{self, BufRead, Write};
use std::path::Path;

use smartbank_edu::catalog::Catalog;
use smartbank_edu::commands::Command;
use smartbank_edu::config::Config;
use smartbank_edu::error::{AppResult, CommandError};
use smartbank_edu::events::{SettingsField, WizardEvent};
use smartbank_edu::generation::ConsoleSink;
use smartbank_edu::wizard::{
    AttachedFile, CollectionKind, Difficulty, NavigationResult, SettingsPatch, WizardFlow,
    WizardStep,
};

/// Initialize tracing with file rotation
///
/// Logs are written to:
/// - macOS: ~/Library/Application Support/SmartBankEDU/logs/
/// - Windows: %APPDATA%/SmartBankEDU/logs/
/// - Linux: ~/.config/SmartBankEDU/logs/
///
/// Log rotation:
/// - Daily rotation (new file each day)
/// - Files named: smartbank-edu.YYYY-MM-DD.log
///
/// Log output:
/// - Debug builds: Console + File
/// - Release builds: File only
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("SmartBankEDU").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "smartbank-edu.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    // In debug builds, also log to console
    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    // In release builds, only log to file
    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn main() {
    initialize_tracing();
    tracing::info!(
        "Starting SmartBank EDU v{} on {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    );

    if let Err(e) = run() {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    println!("===========================================");
    println!("  SmartBank EDU - Intelligent Exam Generator");
    println!("===========================================\n");

    let config = Config::load()?;
    println!("✓ Configuration loaded");
    println!("  Config file: {}", Config::config_path_display());
    println!("  Default question count: {}", config.default_total_questions);
    println!("  Default difficulty: {}\n", config.default_difficulty);

    let catalog = Catalog::load()?;
    println!("✓ Catalog loaded");
    println!("  Catalog file: {}\n", Catalog::catalog_path_display());

    let mut flow = WizardFlow::with_catalog(catalog)?;
    flow.update_settings(SettingsPatch {
        total_questions: Some(config.default_total_questions as i64),
        difficulty: Some(config.default_difficulty),
    });

    println!("Type 'help' for the command list.\n");
    render_step(&flow);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: treat like quit
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };

        tracing::debug!("Executing command: {}", command.description());

        match command {
            Command::Toggle { id } => handle_toggle(&mut flow, &id),
            Command::Next => match flow.advance() {
                NavigationResult::Success(step) => {
                    log_event(&WizardEvent::StepChanged {
                        from: step.previous().unwrap_or(step),
                        to: step,
                    });
                    render_step(&flow);
                }
                NavigationResult::Blocked { reason } => {
                    log_event(&WizardEvent::NavigationBlocked {
                        reason: reason.clone(),
                    });
                    println!("✗ {}", reason);
                }
            },
            Command::Back => match flow.retreat() {
                NavigationResult::Success(step) => {
                    log_event(&WizardEvent::StepChanged {
                        from: step.next().unwrap_or(step),
                        to: step,
                    });
                    render_step(&flow);
                }
                NavigationResult::Blocked { reason } => {
                    log_event(&WizardEvent::NavigationBlocked {
                        reason: reason.clone(),
                    });
                    println!("✗ {}", reason);
                }
            },
            Command::SetQuestions { raw } => match flow.set_total_questions_raw(&raw) {
                Ok(stored) => {
                    log_event(&WizardEvent::SettingsChanged {
                        field: SettingsField::TotalQuestions,
                    });
                    println!("✓ Total questions set to {}", stored);
                }
                Err(e) => {
                    println!(
                        "✗ {} (keeping {})",
                        e,
                        flow.state().settings().total_questions()
                    );
                }
            },
            Command::SetDifficulty { raw } => match raw.parse::<Difficulty>() {
                Ok(difficulty) => {
                    flow.update_settings(SettingsPatch {
                        total_questions: None,
                        difficulty: Some(difficulty),
                    });
                    log_event(&WizardEvent::SettingsChanged {
                        field: SettingsField::Difficulty,
                    });
                    println!("✓ Difficulty set to {}", difficulty);
                }
                Err(e) => println!("✗ {}", e),
            },
            Command::Attach { path } => handle_attach(&config, &mut flow, &path),
            Command::Detach => match flow.detach_file() {
                Some(file) => println!("✓ Removed attached file: {}", file.name),
                None => println!("✗ No file is attached"),
            },
            Command::Show => render_step(&flow),
            Command::Generate => handle_generate(&flow),
            Command::Help => println!("{}", Command::help_text()),
            Command::Quit => break,
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

/// The collection the current step toggles, if it has one
fn toggle_target(step: WizardStep) -> Option<CollectionKind> {
    match step {
        WizardStep::Subjects => Some(CollectionKind::Subjects),
        WizardStep::Questions => Some(CollectionKind::QuestionTypes),
        WizardStep::Generate => None,
    }
}

fn handle_toggle(flow: &mut WizardFlow, id: &str) {
    let Some(kind) = toggle_target(flow.current_step()) else {
        println!("✗ Nothing to toggle on this step; use 'back' to change selections");
        return;
    };

    match flow.toggle(kind, id) {
        Ok(selected) => {
            let event = WizardEvent::SelectionChanged {
                kind,
                id: id.to_string(),
                selected,
            };
            log_event(&event);
            println!("✓ {}", event.description());
        }
        Err(e) => {
            tracing::warn!("{}", e);
            println!("✗ {}", e);
        }
    }
}

fn handle_attach(config: &Config, flow: &mut WizardFlow, path: &Path) {
    if !config.accepts_extension(path) {
        println!(
            "✗ Unsupported file type (accepted: {})",
            config.accepted_extensions.join(", ")
        );
        return;
    }

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => {
            println!("✗ Not a file: {}", path.display());
            return;
        }
        Err(e) => {
            println!("✗ Cannot read {}: {}", path.display(), e);
            return;
        }
    };

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = AttachedFile::new(name, metadata.len());
    log_event(&WizardEvent::FileAttached {
        name: file.name.clone(),
        size_bytes: file.size_bytes,
    });
    println!("✓ Attached {} ({})", file.name, file.display_size());
    flow.attach_file(file);
}

fn handle_generate(flow: &WizardFlow) {
    if flow.current_step() != WizardStep::Generate {
        println!("✗ Finish the wizard first; generation happens on the final step");
        return;
    }

    let mut sink = ConsoleSink;
    match flow.submit(&mut sink) {
        Ok(request) => {
            log_event(&WizardEvent::ExamGenerated {
                subject_count: request.subject_names.len(),
                question_type_count: request.question_type_names.len(),
                total_questions: request.total_questions,
            });
        }
        Err(e) => println!("✗ {:#}", e),
    }
}

fn log_event(event: &WizardEvent) {
    tracing::info!("{}", event.description());
}

fn render_step(flow: &WizardFlow) {
    let step = flow.current_step();
    let state = flow.state();

    println!();
    println!(
        "--- Step {} of {}: {} ---",
        step.number(),
        WizardStep::total_steps(),
        step.title()
    );
    println!("{}\n", step.description());

    match step {
        WizardStep::Subjects => {
            for item in state.subjects().items() {
                let marker = if item.is_selected() { "[x]" } else { "[ ]" };
                println!("  {} {:<16} {}", marker, item.id(), item.label());
            }
            let selected = state.selected_subject_labels();
            if !selected.is_empty() {
                println!("\nSelected Subjects: {}", selected.join(", "));
            }
        }
        WizardStep::Questions => {
            for item in state.question_types().items() {
                let marker = if item.is_selected() { "[x]" } else { "[ ]" };
                println!(
                    "  {} {:<16} {} - {}",
                    marker,
                    item.id(),
                    item.label(),
                    item.description().unwrap_or("")
                );
            }
            let selected = state.selected_question_type_labels();
            if !selected.is_empty() {
                println!("\nSelected Question Types: {}", selected.join(", "));
            }
        }
        WizardStep::Generate => {
            let settings = state.settings();
            println!("Exam Preview");
            println!(
                "  Subjects:       {}",
                state.selected_subject_labels().join(", ")
            );
            println!(
                "  Question Types: {}",
                state.selected_question_type_labels().join(", ")
            );
            println!("  Total Questions: {}", settings.total_questions());
            println!("  Difficulty:      {}", settings.difficulty());
            match settings.attached_file() {
                Some(file) => {
                    println!("  Reference File:  {} ({})", file.name, file.display_size())
                }
                None => println!("  Reference File:  none"),
            }
            println!("\nAdjust with 'questions <n>', 'difficulty <d>', 'attach <path>',");
            println!("then run 'generate'.");
        }
    }
    println!();
}
