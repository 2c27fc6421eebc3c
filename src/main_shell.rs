// Copyright (C) 2020-2026 Andy Kurnia.

use infixer::{
    board, build, dictionary, display, error, game_config, infix, logging, move_picker, movegen,
    rlhelper, snapshot,
};
use std::io::Write;

static HELP: &str = "\
lex <wordlist>        load a word list and build the index
board [standard|wide] start over on an empty board (no arg: show it)
load <question.json>  take board and rack from a json question
rack <letters>        set the rack, ? for blanks
best                  show the best move
top [n]               show the n best moves (default 10)
play                  play the best move and draw nothing
word <letters>        look up a word
hooks [on|off]        also search from squares next to tiles
threads <n>           spread the search over n threads
source <file>         run commands from a file
help                  this
exit";

struct Shell {
    game_config: game_config::GameConfig<'static>,
    index: Option<infix::InfixIndex>,
    board: board::Board,
    rack: board::Rack,
    options: movegen::SearchOptions,
}

impl Shell {
    fn new() -> Self {
        let game_config = game_config::make_wide_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        Self {
            game_config,
            index: None,
            board,
            rack: board::Rack(Vec::new()),
            options: movegen::SearchOptions {
                hooks: false,
                num_threads: num_cpus::get(),
            },
        }
    }

    fn lex(&mut self, path: &str) -> error::Returns<()> {
        let lexicon = dictionary::read_words_from_file(self.game_config.alphabet(), path)?;
        let index = build::build_index(&lexicon.words, |progress| {
            print!("\rProcessing dictionary... {:.2}", progress * 100.0);
            let _ = std::io::stdout().flush();
        });
        println!();
        println!(
            "{} words, {} skipped, {} nodes",
            lexicon.words.len(),
            lexicon.rejected,
            index.num_nodes()
        );
        self.index = Some(index);
        Ok(())
    }

    fn moves(&self, picker: move_picker::MovePicker) -> error::Returns<Vec<movegen::Move>> {
        let Some(index) = &self.index else {
            return Err("no lexicon, use lex first".into());
        };
        let board_snapshot = &movegen::BoardSnapshot {
            board: &self.board,
            game_config: &self.game_config,
            index,
        };
        Ok(picker.pick_moves(board_snapshot, self.rack.tiles(), &self.options))
    }

    fn show_moves(&self, moves: &[movegen::Move]) {
        let alphabet = self.game_config.alphabet();
        if moves.is_empty() {
            println!("no legal move");
        }
        for play in moves {
            println!("{}", display::fmt_move(alphabet, &self.board, play));
        }
    }

    fn exec(&mut self, strings: &[String]) -> error::Returns<()> {
        let alphabet = self.game_config.alphabet();
        match strings[0].as_str() {
            "lex" => match strings.get(1) {
                Some(path) => self.lex(path)?,
                None => println!("need another arg"),
            },
            "board" => {
                match strings.get(1).map(String::as_str) {
                    None => {}
                    Some("standard") => {
                        self.game_config = game_config::make_english_game_config();
                        self.board = board::Board::new(self.game_config.board_layout());
                    }
                    Some("wide") => {
                        self.game_config = game_config::make_wide_english_game_config();
                        self.board = board::Board::new(self.game_config.board_layout());
                    }
                    Some(other) => {
                        println!("unknown layout {:?}", other);
                        return Ok(());
                    }
                }
                display::print_board(self.game_config.alphabet(), &self.board);
            }
            "load" => match strings.get(1) {
                Some(path) => {
                    let question = snapshot::Question::from_json(&std::fs::read_to_string(path)?)?;
                    self.board = question.make_board(&self.game_config)?;
                    self.rack = question.make_rack(&self.game_config)?;
                    self.options.hooks = question.hooks;
                    display::print_board(alphabet, &self.board);
                    println!("rack: {}", alphabet.fmt_rack(self.rack.tiles()));
                }
                None => println!("need another arg"),
            },
            "rack" => {
                self.rack = board::Rack::parse(
                    &self.game_config,
                    strings.get(1).map(String::as_str).unwrap_or(""),
                )?;
                println!("rack: {}", alphabet.fmt_rack(self.rack.tiles()));
            }
            "best" => {
                let moves = self.moves(move_picker::MovePicker::Best)?;
                self.show_moves(&moves);
            }
            "top" => {
                let n = match strings.get(1) {
                    Some(s) => s.parse::<usize>()?,
                    None => 10,
                };
                let moves = self.moves(move_picker::MovePicker::Top(n))?;
                self.show_moves(&moves);
            }
            "play" => {
                let moves = self.moves(move_picker::MovePicker::Best)?;
                match moves.first() {
                    Some(play) => {
                        println!("{}", display::fmt_move(alphabet, &self.board, play));
                        self.rack.use_tiles(&self.board, play)?;
                        self.board.apply(alphabet, play);
                        display::print_board(alphabet, &self.board);
                        println!("rack: {}", alphabet.fmt_rack(self.rack.tiles()));
                    }
                    None => println!("no legal move"),
                }
            }
            "word" => match (strings.get(1), &self.index) {
                (Some(s), Some(index)) => {
                    let tiles = s
                        .chars()
                        .map(|c| alphabet.tile_of(c))
                        .collect::<Option<Vec<_>>>()
                        .ok_or("not a word")?;
                    let p = index.lookup(&tiles);
                    if index.accepts(p) {
                        println!("{} is a word", s);
                    } else if p >= 0 {
                        println!("{} is only part of a word", s);
                    } else {
                        println!("{} is not in any word", s);
                    }
                }
                (None, _) => println!("need another arg"),
                (_, None) => println!("no lexicon, use lex first"),
            },
            "hooks" => {
                match strings.get(1).map(String::as_str) {
                    Some("on") => self.options.hooks = true,
                    Some("off") => self.options.hooks = false,
                    _ => {}
                }
                println!("hooks: {}", if self.options.hooks { "on" } else { "off" });
            }
            "threads" => match strings.get(1) {
                Some(s) => self.options.num_threads = s.parse::<usize>()?.max(1),
                None => println!("threads: {}", self.options.num_threads),
            },
            "help" => println!("{}", HELP),
            _ => println!("invalid input, help for help"),
        }
        Ok(())
    }
}

// usage: shell [wordlist]
fn main() -> error::Returns<()> {
    logging::init_logger(false);
    let mut shell = Shell::new();
    if let Some(path) = std::env::args().nth(1) {
        shell.lex(&path)?;
    }
    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {:?}", err);
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        _ => {
                            if let Err(err) = shell.exec(&strings) {
                                println!("Error: {}", err);
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
