// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, error, game_config, matrix, move_picker, movegen};

// board: rows of cells, each one of
//   "" or "."           empty
//   "2L" "3L" "2W" "3W" unused premium
//   "c" or "c3"         placed letter, with points earned (face value if omitted)
// rack: letters, with '?' '_' or ' ' for blanks.
// count: maximum number of moves returned (default 1).
// hooks: also search from empty squares next to tiles.
// start: [row, col] of the start square (default: centre).
#[derive(serde::Deserialize, Debug)]
pub struct Question {
    pub board: Vec<Vec<String>>,
    pub rack: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub hooks: bool,
    #[serde(default)]
    pub start: Option<(i8, i8)>,
}

fn default_count() -> usize {
    1
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonCell {
    pub row: i8,
    pub column: i8,
    pub letter: String,
    pub wildcard: bool,
    // false for a tile that was already on the board.
    pub new: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action")]
pub enum Answer {
    #[serde(rename = "play")]
    Play {
        down: bool,
        cells: Vec<JsonCell>,
        score: i32,
    },
    #[serde(rename = "none")]
    NoMove,
}

impl Answer {
    pub fn from_move(
        alphabet: &alphabet::Alphabet,
        board: &board::Board,
        play: &movegen::Move,
    ) -> Self {
        Self::Play {
            down: play.placement.axis == matrix::Axis::Vertical,
            cells: play
                .placement
                .cells
                .iter()
                .map(|cell| JsonCell {
                    row: cell.row,
                    column: cell.col,
                    letter: alphabet.label(cell.tile).to_string(),
                    wildcard: cell.is_blank,
                    new: !board.is_occupied(cell.row, cell.col),
                })
                .collect(),
            score: play.score,
        }
    }
}

pub fn parse_cell(alphabet: &alphabet::Alphabet, s: &str) -> error::Returns<board::Square> {
    let s = s.trim();
    if s.is_empty() || s == "." {
        return Ok(board::Square::Empty);
    }
    if let Some(premium) = board_layout::Premium::parse(s) {
        return Ok(board::Square::Premium(premium));
    }
    let mut chars = s.chars();
    let Some(tile) = chars.next().and_then(|c| alphabet.tile_of(c)) else {
        return_error!(Snapshot, format!("invalid cell {:?}", s));
    };
    let rest = chars.as_str();
    let points = if rest.is_empty() {
        alphabet.score(tile) as i16
    } else {
        match rest.parse::<i16>() {
            Ok(points) if points >= 0 => points,
            _ => {
                return_error!(Snapshot, format!("invalid points in cell {:?}", s));
            }
        }
    };
    Ok(board::Square::Tile { tile, points })
}

impl Question {
    pub fn from_json(data: &str) -> error::Returns<Self> {
        match serde_json::from_str::<Question>(data) {
            Ok(question) => Ok(question),
            Err(err) => {
                return_error!(Snapshot, format!("invalid question: {}", err));
            }
        }
    }

    pub fn make_board(
        &self,
        game_config: &game_config::GameConfig,
    ) -> error::Returns<board::Board> {
        let alphabet = game_config.alphabet();
        let mut rows = Vec::with_capacity(self.board.len());
        for (row_num, row) in self.board.iter().enumerate() {
            let mut squares = Vec::with_capacity(row.len());
            for (col_num, cell) in row.iter().enumerate() {
                match parse_cell(alphabet, cell) {
                    Ok(square) => squares.push(square),
                    Err(err) => {
                        return_error!(
                            Snapshot,
                            format!("board row {} col {} (0-based): {}", row_num, col_num, err)
                        );
                    }
                }
            }
            rows.push(squares);
        }
        let board = board::Board::from_squares(&rows)?;
        match self.start {
            Some((row, col)) => board.with_start(row, col),
            None => Ok(board),
        }
    }

    pub fn make_rack(&self, game_config: &game_config::GameConfig) -> error::Returns<board::Rack> {
        board::Rack::parse(game_config, &self.rack)
    }

    pub fn search_options(&self, num_threads: usize) -> movegen::SearchOptions {
        movegen::SearchOptions {
            hooks: self.hooks,
            num_threads,
        }
    }
}

// Best `count` moves, or a single NoMove.
pub fn answer(
    board_snapshot: &movegen::BoardSnapshot,
    rack: &[u8],
    count: usize,
    options: &movegen::SearchOptions,
) -> Vec<Answer> {
    let alphabet = board_snapshot.game_config.alphabet();
    let picker = move_picker::MovePicker::Top(count.max(1));
    let moves = picker.pick_moves(board_snapshot, rack, options);
    if moves.is_empty() {
        return vec![Answer::NoMove];
    }
    moves
        .iter()
        .map(|play| Answer::from_move(alphabet, board_snapshot.board, play))
        .collect()
}
