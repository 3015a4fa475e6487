// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt, fs::File, io::BufReader, sync::Arc};

use anyhow::{anyhow, Context};
use clap::{value_t, App, Arg};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use piecegrid::{Board, Catalog, Piece, PieceFactory};

use crate::commands::Command;

mod commands;

fn main() -> anyhow::Result<()> {
    let matches = App::new("piecegrid")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Set up a board from a piece type catalog and print it.")
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("ROWS")
                .help("number of rows on the board")
                .takes_value(true)
                .default_value("8"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("COLUMNS")
                .help("number of columns on the board")
                .takes_value(true)
                .default_value("8"),
        )
        .arg(
            Arg::with_name("catalog")
                .short("c")
                .long("catalog")
                .value_name("FILE")
                .help("JSON file of piece type descriptors; defaults to the built-in catalog")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("list the available piece types"),
        )
        .arg(
            Arg::with_name("scatter")
                .short("s")
                .long("scatter")
                .value_name("COUNT")
                .help("place COUNT pieces of random types on random empty cells")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for --scatter")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log board changes to stderr"),
        )
        .arg(
            Arg::with_name("commands")
                .value_name("COMMAND")
                .help("setup commands applied in order: \"<type> at <row>,<column>\", \"move <row>,<column> to <row>,<column>\", \"remove <row>,<column>\"")
                .multiple(true),
        )
        .get_matches();

    init_tracing(matches.is_present("verbose"));

    let catalog = Arc::new(match matches.value_of("catalog") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open catalog {}", path))?;
            Catalog::from_reader(BufReader::new(file))
                .with_context(|| format!("cannot load catalog {}", path))?
        }
        None => Catalog::builtin().context("cannot load built-in catalog")?,
    });
    info!(piece_types = catalog.len(), "catalog ready");

    if matches.is_present("list") {
        show_catalog(&catalog);
        if matches.values_of("commands").is_none() && !matches.is_present("scatter") {
            return Ok(());
        }
        println!();
    }

    let height = value_t!(matches, "height", usize)?;
    let width = value_t!(matches, "width", usize)?;
    let mut board = Board::new(height, width)?;
    let factory = PieceFactory::new(catalog);

    for text in matches.values_of("commands").into_iter().flatten() {
        let command: Command = text.parse()?;
        debug!(?command, "applying command");
        apply(&mut board, &factory, command).with_context(|| format!("command {:?} failed", text))?;
    }

    if let Some(count) = matches.value_of("scatter") {
        let count: usize = count
            .parse()
            .with_context(|| format!("invalid scatter count {:?}", count))?;
        let mut rng = match matches.value_of("seed") {
            Some(seed) => StdRng::seed_from_u64(
                seed.parse()
                    .with_context(|| format!("invalid seed {:?}", seed))?,
            ),
            None => StdRng::from_entropy(),
        };
        scatter_pieces(&mut rng, &mut board, &factory, count)?;
    }

    show_board(&board);
    Ok(())
}

/// Install the log subscriber. `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply a single setup command to the board.
fn apply(board: &mut Board, factory: &PieceFactory, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Place(name, position) => {
            let piece = factory
                .create_piece(&name, position)
                .with_context(|| format!("cannot create {:?}", name))?;
            board.add_piece(piece)?;
        }
        Command::Move(from, to) => board.move_piece(from, to)?,
        Command::Remove(position) => {
            if board.remove_piece(position)?.is_none() {
                warn!(%position, "no piece to remove");
            }
        }
    }
    Ok(())
}

/// Place `count` pieces of random types on random empty cells. Stops early if the board
/// fills up.
fn scatter_pieces(
    rng: &mut impl Rng,
    board: &mut Board,
    factory: &PieceFactory,
    count: usize,
) -> anyhow::Result<()> {
    let names: Vec<&String> = factory.available_piece_types().keys().collect();
    for placed in 0..count {
        let position = match board.random_empty_position(&mut *rng) {
            Some(position) => position,
            None => {
                warn!(placed, requested = count, "board is full");
                break;
            }
        };
        let name = names
            .choose(&mut *rng)
            .ok_or_else(|| anyhow!("the catalog has no piece types to scatter"))?;
        board.add_piece(factory.create_piece(name, position)?)?;
    }
    Ok(())
}

/// Print the piece types of the catalog, one per line.
fn show_catalog(catalog: &Catalog) {
    println!(
        "{:<12} {:<16} {:^4} {:>6} {:>6}",
        "NAME", "DISPLAY NAME", "ICON", "POWER", "SPEED"
    );
    for piece_type in catalog.available_piece_types().values() {
        println!(
            "{:<12} {:<16} {:^4} {:>6} {:>6}",
            piece_type.name(),
            piece_type.display_name(),
            piece_type.text_icon(),
            piece_type.power(),
            piece_type.speed()
        );
    }
}

/// Print the board with row and column numbers, drawing each piece with its text icon.
fn show_board(board: &Board) {
    print!("   ");
    for i in 0..board.width() {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in board.iter_rows().enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", CellIcon(cell));
        }
        println!();
    }
}

/// Display helper that prints a piece's icon, or a dot for an empty cell.
struct CellIcon<'a>(Option<&'a Piece>);

impl fmt::Display for CellIcon<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(piece) => f.pad(piece.piece_type().text_icon()),
            None => f.pad("."),
        }
    }
}
