use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ronin_desk::cli::{Cli, Command};
use ronin_desk::error::StoreResult;
use ronin_desk::metadata::{PKG_DESCRIPTION, PKG_NAME, PKG_VERSION};
use ronin_desk::storage::{FileStorage, Storage};
use ronin_desk::store::RoninStore;
use ronin_desk::terminal::{self, CommandOutput};
use ronin_desk::widgets::{LogPose, QuestLog, Treasury};
use ronin_desk::SessionGate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Terminal => run_terminal(),
        Command::Status => run_status(&cli.data_dir)?,
        Command::Login { passphrase } => run_login(&cli.data_dir, &passphrase)?,
        Command::Logout => run_logout(&cli.data_dir)?,
        Command::Version => {
            println!("{PKG_NAME} {PKG_VERSION}");
            println!("{PKG_DESCRIPTION}");
        }
    }

    Ok(())
}

fn open_storage(data_dir: &Option<PathBuf>) -> StoreResult<Box<dyn Storage>> {
    let storage = match data_dir {
        Some(dir) => FileStorage::open(dir.clone())?,
        None => FileStorage::open_default()?,
    };
    Ok(Box::new(storage))
}

fn run_terminal() {
    for line in terminal::banner() {
        println!("{}", line.red());
    }

    loop {
        let input: String = match Input::with_theme(&ColorfulTheme::default())
            .with_prompt("ronin@desk ~")
            .allow_empty(true)
            .interact_text()
        {
            Ok(input) => input,
            // Ctrl-C / closed stdin ends the session.
            Err(_) => break,
        };

        let trimmed = input.trim().to_lowercase();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        match terminal::execute(&input) {
            CommandOutput::Text(lines) => {
                for line in lines {
                    println!("{}", line.green());
                }
            }
            CommandOutput::ClearScreen => {
                print!("\x1b[2J\x1b[1;1H");
            }
        }
    }
}

fn run_status(data_dir: &Option<PathBuf>) -> StoreResult<()> {
    let store = RoninStore::new(open_storage(data_dir)?);
    let gate = SessionGate::new(open_storage(data_dir)?);
    let pose = LogPose::new(open_storage(data_dir)?);
    let quest_log = QuestLog::new(open_storage(data_dir)?);
    let treasury = Treasury::new(open_storage(data_dir)?);

    println!("{}", "── the desk ──────────────────────".bold());
    println!("projects:      {}", store.projects().len());
    println!("quests:        {}", store.quests().len());
    println!("habits:        {}", store.habits().len());
    println!("library items: {}", store.library_items().len());
    println!(
        "{}: episode {}, chapter {}",
        pose.data().series,
        store.one_piece_episode(),
        store.one_piece_chapter()
    );
    println!("{}", "── widgets ───────────────────────".bold());
    let open_quests = quest_log.entries().iter().filter(|q| !q.completed).count();
    println!("quest log:     {} open / {} total", open_quests, quest_log.entries().len());
    let (saved, cost) = treasury
        .items()
        .iter()
        .fold((0u64, 0u64), |(s, c), i| (s + u64::from(i.saved), c + u64::from(i.cost)));
    println!("treasury:      {saved} saved of {cost}");
    println!("{}", "── session ───────────────────────".bold());
    if gate.is_authenticated() {
        println!("hidden area:   {}", "unlocked".green());
    } else {
        println!("hidden area:   {}", "locked".yellow());
    }
    if store.is_admin() {
        println!("admin view:    {}", "on".green());
    } else {
        println!("admin view:    off");
    }

    Ok(())
}

fn run_login(data_dir: &Option<PathBuf>, passphrase: &str) -> StoreResult<()> {
    let mut gate = SessionGate::new(open_storage(data_dir)?);
    if gate.login(passphrase) {
        println!("{}", "The hidden area is open.".green());
    } else {
        println!("{}", "That is not the way.".red());
        std::process::exit(1);
    }
    Ok(())
}

fn run_logout(data_dir: &Option<PathBuf>) -> StoreResult<()> {
    let mut gate = SessionGate::new(open_storage(data_dir)?);
    gate.logout();
    println!("The hidden area is sealed.");
    Ok(())
}
