//! Main Program for Jigsolve
//! Run with `--help` for more instruction

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Error};
use clap::{Args, Parser, Subcommand};
use jigsolve::{pixels, ConfigBuilder, Dimensions, Ordering};
use log::{info, warn, LevelFilter};
use rand::SeedableRng;
use sha2::{Digest, Sha256};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Copy tiles on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rearrange tiles of an image by an ordering file
    Unscramble(UnscrambleArgs),
    /// Shuffle tiles of an image and write the ordering that restores it
    Scramble(ScrambleArgs),
    /// Check whether an ordering fits an image and tile size
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct UnscrambleArgs {
    /// Input file
    input: PathBuf,

    /// Tile size (WxH, or N for NxN)
    #[arg(short = 't', long)]
    tile_size: Dimensions,

    /// Ordering file, one tile index per line
    #[arg(short = 'r', long)]
    ordering: PathBuf,

    /// Output file
    #[arg(short = 'o', long)]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct ScrambleArgs {
    /// Input file
    input: PathBuf,

    /// Tile size (WxH, or N for NxN)
    #[arg(short = 't', long)]
    tile_size: Dimensions,

    /// Random seed
    #[arg(long)]
    seed: Option<String>,

    /// Output file
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Where to write the ordering that unscrambles the output
    #[arg(long)]
    ordering_out: PathBuf,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Image size (WxH)
    #[arg(short = 's', long)]
    image_size: Dimensions,

    /// Tile size (WxH, or N for NxN)
    #[arg(short = 't', long)]
    tile_size: Dimensions,

    /// Ordering file, one tile index per line
    #[arg(short = 'r', long)]
    ordering: PathBuf,
}

fn read_ordering(path: &Path) -> Result<Ordering, Error> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read ordering {}", path.display()))?;
    text.parse()
        .with_context(|| format!("Cannot parse ordering {}", path.display()))
}

fn main() -> Result<ExitCode, Error> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = ConfigBuilder::new().parallel(!cli.sequential).build();

    match cli.command {
        Command::Unscramble(args) => {
            let ordering = read_ordering(&args.ordering)?;
            let im = pixels::open(&args.input)?;

            let out = jigsolve::rearrange_with(
                pixels::as_array(&im)?,
                pixels::dimensions(&im),
                args.tile_size,
                &ordering,
                &config,
            )?;

            pixels::save(&args.output, out.view(), im.color())?;
            info!("Wrote {}", args.output.display());
        }
        Command::Scramble(args) => {
            let im = pixels::open(&args.input)?;
            let image_size = pixels::dimensions(&im);

            let Some(grid) = jigsolve::TileGrid::new(image_size, args.tile_size) else {
                anyhow::bail!("Tile size {} does not divide image size {image_size}", args.tile_size);
            };

            let mut random = if let Some(seed) = args.seed {
                let mut hasher = Sha256::new();
                hasher.update(seed);

                rand_xoshiro::Xoshiro256StarStar::from_seed(hasher.finalize().into())
            } else {
                rand_xoshiro::Xoshiro256StarStar::from_entropy()
            };

            let ordering = Ordering::random(grid.len(), &mut random);
            let inverse = ordering
                .inverse()
                .context("Random ordering is not a permutation")?;

            let out = jigsolve::rearrange_with(
                pixels::as_array(&im)?,
                image_size,
                args.tile_size,
                &ordering,
                &config,
            )?;

            pixels::save(&args.output, out.view(), im.color())?;
            fs::write(&args.ordering_out, inverse.to_string()).with_context(|| {
                format!("Cannot write ordering {}", args.ordering_out.display())
            })?;
            info!(
                "Wrote {} and {}",
                args.output.display(),
                args.ordering_out.display()
            );
        }
        Command::Check(args) => {
            let ordering = read_ordering(&args.ordering)?;

            if jigsolve::is_valid(args.image_size, args.tile_size, &ordering) {
                println!("valid");
            } else {
                warn!(
                    "{} tile(s) in ordering, image {} with tile {}",
                    ordering.len(),
                    args.image_size,
                    args.tile_size,
                );
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
