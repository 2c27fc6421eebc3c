// Copyright (C) 2020-2026 Andy Kurnia.

use infixer::{
    bag, board, build, dictionary, display, error, game_config, logging, move_picker, movegen,
    return_error,
};
use rand::prelude::*;

const NUM_PLAYERS: usize = 2;

// usage: auto <wordlist> [games] [seed] [out.csv]
// Both players always take the top-scoring move and pass when they have none.
fn main() -> error::Returns<()> {
    logging::init_logger(false);
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 5 {
        return_error!(
            Input,
            format!("usage: {} <wordlist> [games] [seed] [out.csv]", args[0])
        );
    }
    let num_games = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => 1,
    };
    let seed = match args.get(3) {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random::<u64>(),
    };
    println!("seed: {}", seed);

    let game_config = game_config::make_english_game_config();
    let alphabet = game_config.alphabet();
    let lexicon = dictionary::read_words_from_file(alphabet, &args[1])?;
    let index = build::build_index(&lexicon.words, |_| {});
    let options = movegen::SearchOptions {
        hooks: true,
        num_threads: num_cpus::get(),
    };

    let mut csv_out = match args.get(4) {
        Some(path) => {
            let mut w = csv::Writer::from_path(path)?;
            w.serialize((
                "game",
                "turn",
                "player",
                "rack",
                "play",
                "score",
                "total",
                "remaining",
            ))?;
            Some(w)
        }
        None => None,
    };

    let t0 = std::time::Instant::now();
    let mut num_moves = 0u64;
    for game_num in 1..=num_games {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed.wrapping_add(game_num));
        let mut bag = bag::Bag::new(alphabet);
        bag.shuffle(&mut rng);
        let mut board = board::Board::new(game_config.board_layout());
        let mut racks: [board::Rack; NUM_PLAYERS] = Default::default();
        for rack in racks.iter_mut() {
            bag.replenish(&mut rack.0, game_config.rack_size() as usize);
        }
        let mut scores = [0i32; NUM_PLAYERS];
        let mut turn = 0usize;
        let mut turn_num = 0u32;
        let mut zero_turns = 0;
        println!("\ngame {}", game_num);

        loop {
            turn_num += 1;
            let rack_str = alphabet.fmt_rack(racks[turn].tiles());
            let best = move_picker::find_best_move(
                &movegen::BoardSnapshot {
                    board: &board,
                    game_config: &game_config,
                    index: &index,
                },
                racks[turn].tiles(),
                &options,
            );
            let (play_str, score) = match &best {
                Some(play) => {
                    let play_str = display::fmt_move(alphabet, &board, play);
                    racks[turn].use_tiles(&board, play)?;
                    board.apply(alphabet, play);
                    bag.replenish(&mut racks[turn].0, game_config.rack_size() as usize);
                    zero_turns = 0;
                    (play_str, play.score)
                }
                None => {
                    zero_turns += 1;
                    ("pass".to_string(), 0)
                }
            };
            scores[turn] += score;
            num_moves += 1;
            println!(
                "p{} {:7} {} total {}",
                turn + 1,
                rack_str,
                play_str,
                scores[turn]
            );
            if let Some(w) = csv_out.as_mut() {
                w.serialize((
                    game_num,
                    turn_num,
                    turn + 1,
                    &rack_str,
                    &play_str,
                    score,
                    scores[turn],
                    bag.len(),
                ))?;
            }
            if racks[turn].is_empty() || zero_turns >= NUM_PLAYERS * 3 {
                break;
            }
            turn = (turn + 1) % NUM_PLAYERS;
        }

        // unplayed tiles count against their holder; going out collects them.
        let leftovers = racks
            .iter()
            .map(|rack| {
                rack.tiles()
                    .iter()
                    .map(|&tile| alphabet.score(tile) as i32)
                    .sum::<i32>()
            })
            .collect::<Vec<_>>();
        let total_leftover = leftovers.iter().sum::<i32>();
        for (i, score) in scores.iter_mut().enumerate() {
            *score -= leftovers[i];
            if racks[i].is_empty() {
                *score += total_leftover;
            }
        }
        display::print_board(alphabet, &board);
        for (i, score) in scores.iter().enumerate() {
            println!("player {}: {}", i + 1, score);
        }
    }
    if let Some(w) = csv_out.as_mut() {
        w.flush()?;
    }
    log::info!(
        "{} games, {} moves in {:?}",
        num_games,
        num_moves,
        t0.elapsed()
    );

    Ok(())
}
