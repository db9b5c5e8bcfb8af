//! hexdelve: generate a dungeon and print it
//!
//! Prints an ASCII map by default, or the full result as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use hd_core::dungeon::{BuildParams, DungeonBuilder, World, estimate_world_size_for};
use hd_core::{DEFAULT_CORRIDOR_PAD, GameRng};

mod render;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

/// Procedural hex-grid dungeon generator
#[derive(Parser, Debug)]
#[command(name = "hexdelve")]
#[command(author, version, about = "Generate a room-and-corridor dungeon", long_about = None)]
struct Args {
    /// Seed for the generator (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Player experience level
    #[arg(short = 'p', long = "player-level")]
    player_level: Option<i32>,

    /// Monster level
    #[arg(short = 'm', long = "monster-level")]
    monster_level: Option<i32>,

    /// Difficulty setting; each step adds two rooms
    #[arg(short = 'd', long = "difficulty", allow_negative_numbers = true)]
    difficulty: Option<i32>,

    /// Dungeon level (z) stamped into tile keys
    #[arg(short = 'z', long = "level")]
    level: Option<i32>,

    /// Grid width (estimated from the room count if omitted)
    #[arg(long = "width")]
    width: Option<i32>,

    /// Grid height (estimated from the room count if omitted)
    #[arg(long = "height")]
    height: Option<i32>,

    /// Place this many rooms instead of deriving the count from levels
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<u32>,

    /// JSON file with build parameters; flags above override its fields
    #[arg(long = "params")]
    params: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Build the fixed single-room dungeon
    #[arg(long = "single-room")]
    single_room: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn build_params(&self) -> anyhow::Result<BuildParams> {
        let mut params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing build parameters from {}", path.display()))?
            }
            None => BuildParams::default(),
        };

        if let Some(v) = self.player_level {
            params.player_level = v;
        }
        if let Some(v) = self.monster_level {
            params.monster_level = v;
        }
        if let Some(v) = self.difficulty {
            params.difficulty_level = v;
        }
        if let Some(v) = self.level {
            params.z = v;
        }
        if self.rooms.is_some() {
            params.room_count = self.rooms;
        }
        Ok(params)
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Off, Warn};
    let level = match verbose {
        0 => Warn,
        1 => Info,
        _ => Debug,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let params = args.build_params()?;
    let estimate = estimate_world_size_for(&params, DEFAULT_CORRIDOR_PAD);
    let width = args.width.unwrap_or(estimate.width);
    let height = args.height.unwrap_or(estimate.height);
    let world = World::new(width, height)?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {}, world {width}x{height}", rng.seed());

    let mut builder = DungeonBuilder::new(world, rng);
    let dungeon = if args.single_room {
        builder.build_default()?
    } else {
        builder.build_dungeon(&params)?
    };

    let mut out = io::stdout().lock();
    match args.format {
        Format::Ascii => out.write_all(render::ascii_map(&dungeon).as_bytes())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &dungeon)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
