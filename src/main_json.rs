// Copyright (C) 2020-2026 Andy Kurnia.

use infixer::{
    build, dictionary, display, error, game_config, logging, movegen, return_error, snapshot,
};
use std::io::Write;

// usage: json <wordlist> <question.json>
// question: see snapshot::Question. The answer array goes to stdout last.
#[tokio::main]
async fn main() -> error::Returns<()> {
    logging::init_logger(false);
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 3 {
        return_error!(
            Input,
            format!("usage: {} <wordlist> <question.json>", args[0])
        );
    }
    let game_config = game_config::make_english_game_config();
    let alphabet = game_config.alphabet();

    let data = std::fs::read_to_string(&args[2])?;
    let question = snapshot::Question::from_json(&data)?;
    let board = question.make_board(&game_config)?;
    let rack = question.make_rack(&game_config)?;

    let lexicon = dictionary::read_words_from_file(alphabet, &args[1])?;
    let index = build::build_index_async(&lexicon.words, |progress| {
        print!("\rProcessing dictionary... {:.2}", progress * 100.0);
        let _ = std::io::stdout().flush();
    })
    .await;
    println!();

    let board_snapshot = &movegen::BoardSnapshot {
        board: &board,
        game_config: &game_config,
        index: &index,
    };
    display::print_board(alphabet, &board);
    println!("rack: {}", alphabet.fmt_rack(rack.tiles()));

    let answers = snapshot::answer(
        board_snapshot,
        rack.tiles(),
        question.count,
        &question.search_options(num_cpus::get()),
    );
    println!("{}", serde_json::to_string_pretty(&answers)?);

    Ok(())
}
