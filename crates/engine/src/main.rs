//! QuestWorlds Engine - command-line contest runner.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questworlds_domain::{ContestFrame, ContestOutcome, DiceRolls, Modifier, Rating, TargetNumber};
use questworlds_engine::infrastructure::settings::{EngineSettings, OutputFormat};
use questworlds_engine::App;

/// Resolve a single QuestWorlds contest
#[derive(Parser, Debug)]
#[command(name = "questworlds-engine")]
#[command(about = "Frame, resolve and interpret a QuestWorlds contest")]
struct Args {
    /// What the player hopes to achieve
    #[arg(long)]
    prize: String,

    /// Resistance in rating notation (e.g. 14, 10M, 6M2)
    #[arg(long)]
    resistance: Rating,

    /// Name of the ability the player brings to the contest
    #[arg(long)]
    ability: String,

    /// Player rating in rating notation
    #[arg(long)]
    rating: Rating,

    /// Modifier as TYPE:VALUE (e.g. augment:+5, stretch:-10); repeatable
    #[arg(long = "modifier", value_name = "TYPE:VALUE", allow_hyphen_values = true)]
    modifiers: Vec<Modifier>,

    /// Use these rolls instead of rolling: PLAYER,RESISTANCE (e.g. 5,20)
    #[arg(long, value_parser = parse_rolls)]
    rolls: Option<DiceRolls>,

    /// Seed for reproducible dice (overrides QUESTWORLDS_DICE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format (overrides QUESTWORLDS_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn parse_rolls(s: &str) -> Result<DiceRolls, String> {
    let (player, resistance) = s
        .split_once(',')
        .ok_or_else(|| format!("expected PLAYER,RESISTANCE, got '{}'", s))?;
    let player: u8 = player
        .trim()
        .parse()
        .map_err(|_| format!("invalid player roll '{}'", player))?;
    let resistance: u8 = resistance
        .trim()
        .parse()
        .map_err(|_| format!("invalid resistance roll '{}'", resistance))?;
    DiceRolls::new(player, resistance).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root, preferring local overrides.
    load_dotenv_from_repo_root();

    let args = Args::parse();

    let mut settings = EngineSettings::from_env()?;
    if let Some(seed) = args.seed {
        settings.dice_seed = Some(seed);
    }
    if let Some(format) = args.format {
        settings.output = format;
    }

    // Initialize logging (stderr, so JSON output stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?settings, "Loaded settings");

    let app = App::new(&settings);

    let mut frame = ContestFrame::new(args.prize, TargetNumber::from(args.resistance))?;
    frame.set_player_ability(args.ability, args.rating)?;
    for modifier in args.modifiers {
        tracing::debug!(%modifier, "Applying modifier");
        frame.apply_modifier(modifier);
    }

    let outcome = match args.rolls {
        Some(rolls) => app.use_cases.contest.run.execute_with_rolls(&frame, rolls)?,
        None => app.use_cases.contest.run.execute(&frame)?,
    };

    match settings.output {
        OutputFormat::Text => print_text(&outcome),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

fn print_text(outcome: &ContestOutcome) {
    println!("Prize: {}", outcome.prize);
    println!(
        "Player: {} {} rolled {} ({} successes)",
        outcome.player_ability_name,
        outcome.player_rating,
        outcome.player_roll,
        outcome.player_successes
    );
    println!(
        "Resistance: {} rolled {} ({} successes)",
        outcome.resistance_target_number, outcome.resistance_roll, outcome.resistance_successes
    );
    println!("{}", outcome.summary);
    if let Some(modifier) = outcome.benefit_consequence_modifier {
        println!("Benefit/consequence: {:+}", modifier);
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
