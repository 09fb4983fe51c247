use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use tracing::{debug, info};

use gd_core::{
    Category, Cue, CueSink, Event, GameConfig, History, Reaction, SecretMode, Session, Snapshot,
    Status, Transition, TurnOutcome,
};

const HELP: &str = "  Commands:
    <number>   guess (or, in hot-seat mode, set the secret)
    status     show level, range, and HP
    hint       show the hint, once one has unlocked
    history    list recent runs
    again      start a new run in the same category
    quit       leave the game";

pub struct PlayOptions {
    pub category: String,
    pub seed: Option<u64>,
    pub hot_seat: bool,
    pub secrets: Vec<u32>,
    pub table: Option<PathBuf>,
    pub bell: bool,
}

/// Rings the terminal bell for misses and defeat.
struct Bell {
    enabled: bool,
}

impl CueSink for Bell {
    fn cue(&mut self, cue: Cue) {
        if self.enabled && matches!(cue, Cue::WrongGuess | Cue::Defeated) {
            print!("\x07");
        }
    }
}

pub fn run(opts: &PlayOptions) -> Result<(), String> {
    let category = Category::parse(&opts.category).map_err(|e| e.to_string())?;
    let table = super::load_table(opts.table.as_deref())?;

    let mode = if opts.hot_seat {
        SecretMode::AttackerChooses
    } else if opts.secrets.is_empty() {
        SecretMode::Random
    } else {
        SecretMode::Scripted(opts.secrets.clone())
    };
    let mut config = GameConfig::default()
        .with_table(table)
        .with_secret_mode(mode);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(category, &config);
    let mut history = History::new();
    let mut bell = Bell {
        enabled: opts.bell,
    };

    println!("  {} Guess Duel | {category} mode", "Starting".bold());
    println!("  {}", category.blurb());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", level_banner(&session.snapshot()));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = input.to_ascii_lowercase();
        match command.as_str() {
            "quit" | "q" => break,
            "help" | "?" => {
                println!("{HELP}\n");
                continue;
            }
            "status" => {
                println!("{}\n", level_banner(&session.snapshot()));
                continue;
            }
            "hint" => {
                match session.current_hint() {
                    Some(hint) => println!("  Hint: {}\n", hint.to_string().cyan()),
                    None => println!("  No hint yet.\n"),
                }
                continue;
            }
            "history" => {
                println!("{}\n", history.export_text());
                continue;
            }
            "again" | "restart" => {
                debug!(command = %command, "restarting run");
                session.restart();
                println!("{}\n", level_banner(&session.snapshot()));
                continue;
            }
            _ => {}
        }

        match session.handle_event(event_for(session.status(), input)) {
            Ok(reaction) => {
                reaction.dispatch(&mut bell);
                println!("{}\n", render_reaction(&reaction));

                if reaction.snapshot.status.is_terminal() {
                    if let Some(record) = session.run_record() {
                        info!(run = %record, "run recorded");
                        history.push(record);
                    }
                    if let (Status::Defeated, Some(secret)) =
                        (reaction.snapshot.status, session.reveal_secret())
                    {
                        println!("  The secret was {secret}.");
                    }
                    println!("  Type 'again' for another run, 'history' to review, 'quit' to exit.\n");
                } else if matches!(reaction.transition, Some(Transition::LevelCleared { .. })) {
                    println!("{}\n", level_banner(&reaction.snapshot));
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}

/// The session event for a line of non-command input.
fn event_for(status: Status, input: &str) -> Event {
    match status {
        Status::AwaitingSecret => Event::ChooseSecret(input.to_string()),
        _ => Event::SubmitGuess(input.to_string()),
    }
}

fn level_banner(snap: &Snapshot) -> String {
    let mut out = format!(
        "  {} {}/5 | Range {} | {}",
        "Level".bold(),
        snap.level,
        snap.range,
        snap.hp
    );
    match snap.status {
        Status::AwaitingSecret => {
            out.push_str(&format!("\n  Attacker, enter the secret ({}):", snap.range));
        }
        Status::InProgress => {
            out.push_str(&format!("\n  Defender, guess a number ({}):", snap.range));
        }
        Status::Defeated | Status::ChampionOfCategory => {
            out.push_str(&format!("\n  Run over: {}", snap.status));
        }
    }
    out
}

/// Text for one reaction, without trailing newline.
fn render_reaction(reaction: &Reaction) -> String {
    let snap = &reaction.snapshot;
    let mut lines = Vec::new();

    match &reaction.outcome {
        TurnOutcome::Correct => lines.push(format!("  {}", "Correct!".green().bold())),
        TurnOutcome::TooLow => lines.push(format!("  {} {}", "Too low".red(), snap.hp)),
        TurnOutcome::TooHigh => lines.push(format!("  {} {}", "Too high".red(), snap.hp)),
        TurnOutcome::InvalidGuess(e) => {
            lines.push(format!("  {}", format!("Invalid guess: {e}").yellow()));
        }
        TurnOutcome::SecretAccepted => lines.push(format!(
            "  Secret locked in. Defender, guess a number ({}):",
            snap.range
        )),
        TurnOutcome::InvalidSecret(e) => {
            lines.push(format!("  {}", format!("Invalid secret: {e}").yellow()));
        }
    }

    let unlocked = reaction.cues.contains(&Cue::HintUnlocked);
    if let Some(hint) = reaction.hint.filter(|_| unlocked) {
        lines.push(format!("  Hint unlocked: {}", hint.to_string().cyan()));
    }

    match reaction.transition {
        Some(Transition::LevelCleared { cleared, next }) => {
            lines.push(format!("  Level {cleared} cleared! On to level {next}."));
        }
        Some(Transition::Defeated { level }) => lines.push(format!(
            "  {} Defeated on level {level}. The Attacker wins.",
            "Game over.".red().bold()
        )),
        Some(Transition::Champion) => lines.push(format!(
            "  {} Champion of {}! The Defender wins.",
            "Victory!".green().bold(),
            snap.category
        )),
        None => {}
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secrets: &[u32]) -> Session {
        let config = GameConfig::default()
            .with_seed(5)
            .with_secret_mode(SecretMode::Scripted(secrets.to_vec()));
        Session::new(Category::Easy, &config)
    }

    #[test]
    fn renders_misses_with_hp() {
        colored::control::set_override(false);
        let mut s = session(&[7]);
        let text = render_reaction(&s.guess(3).unwrap());
        assert_eq!(text, "  Too low HP: 2/3");
    }

    #[test]
    fn renders_level_clear() {
        colored::control::set_override(false);
        let mut s = session(&[7]);
        let text = render_reaction(&s.guess(7).unwrap());
        assert!(text.contains("Correct!"));
        assert!(text.contains("Level 1 cleared! On to level 2."));
    }

    #[test]
    fn renders_invalid_guess() {
        colored::control::set_override(false);
        let mut s = session(&[7]);
        let text = render_reaction(&s.submit_guess("eleven").unwrap());
        assert_eq!(text, "  Invalid guess: 'eleven' is not a number");
    }

    #[test]
    fn input_becomes_secret_then_guess() {
        let mut s = Session::new(
            Category::Easy,
            &GameConfig::default().with_secret_mode(SecretMode::AttackerChooses),
        );
        let event = event_for(s.status(), "4");
        assert_eq!(event, Event::ChooseSecret("4".to_string()));
        let reaction = s.handle_event(event).unwrap();
        assert_eq!(reaction.outcome, TurnOutcome::SecretAccepted);

        let event = event_for(s.status(), "4");
        assert_eq!(event, Event::SubmitGuess("4".to_string()));
        let reaction = s.handle_event(event).unwrap();
        assert_eq!(reaction.outcome, TurnOutcome::Correct);
    }

    #[test]
    fn banner_prompts_the_right_player() {
        colored::control::set_override(false);
        let s = session(&[7]);
        let banner = level_banner(&s.snapshot());
        assert!(banner.contains("Level 1/5 | Range 1-10 | HP: 3/3"));
        assert!(banner.contains("Defender, guess"));

        let hot_seat = Session::new(
            Category::Easy,
            &GameConfig::default().with_secret_mode(SecretMode::AttackerChooses),
        );
        assert!(level_banner(&hot_seat.snapshot()).contains("Attacker, enter the secret"));
    }
}
