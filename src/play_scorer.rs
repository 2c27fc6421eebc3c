// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, movegen};

// Only the main word counts. Tiles already on the board keep their points and
// ignore premiums; new tiles get letter premiums, word premiums multiply the
// total, and playing the whole rack applies the full-rack multiplier.
pub fn compute_score(
    board_snapshot: &movegen::BoardSnapshot,
    placement: &movegen::Placement,
) -> i32 {
    let alphabet = board_snapshot.game_config.alphabet();
    let mut word_multiplier = 1i32;
    let mut word_score = 0i32;
    let mut num_played = 0i8;
    for cell in placement.cells.iter() {
        match board_snapshot.board.at(cell.row, cell.col) {
            board::Square::Tile { points, .. } => {
                word_score += points as i32;
            }
            square => {
                num_played += 1;
                let face_value = if cell.is_blank {
                    alphabet.score(alphabet::BLANK)
                } else {
                    alphabet.score(cell.tile)
                } as i32;
                let (letter_multiplier, this_word_multiplier) = match square.premium() {
                    Some(premium) => (premium.letter_multiplier(), premium.word_multiplier()),
                    None => (1, 1),
                };
                word_score += face_value * letter_multiplier as i32;
                word_multiplier *= this_word_multiplier as i32;
            }
        }
    }
    word_score
        * word_multiplier
        * board_snapshot.game_config.num_played_multiplier(num_played) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board_layout, build, game_config, matrix};

    fn cell(row: i8, col: i8, c: char, is_blank: bool) -> movegen::PlacedTile {
        movegen::PlacedTile {
            row,
            col,
            tile: (c as u8) & 0x1f,
            is_blank,
        }
    }

    fn placement(cells: Vec<movegen::PlacedTile>) -> movegen::Placement {
        movegen::Placement {
            cells: cells.into_boxed_slice(),
            axis: matrix::Axis::Horizontal,
        }
    }

    #[test]
    fn face_values_on_a_plain_board() {
        let game_config = game_config::make_wide_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let index = build::build_index(&[], |_| {});
        let snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: &game_config,
            index: &index,
        };
        let cat = placement(vec![
            cell(9, 13, 'c', false),
            cell(9, 14, 'a', false),
            cell(9, 15, 't', false),
        ]);
        assert_eq!(compute_score(&snapshot, &cat), 5);
        let blank_cat = placement(vec![
            cell(9, 13, 'c', true),
            cell(9, 14, 'a', false),
            cell(9, 15, 't', false),
        ]);
        assert_eq!(compute_score(&snapshot, &blank_cat), 2);
    }

    #[test]
    fn premiums_apply_to_new_tiles_only() {
        let game_config = game_config::make_english_game_config();
        let mut rows = vec![vec![board::Square::Empty; 5]; 1];
        rows[0][0] = board::Square::Premium(board_layout::DLS.unwrap());
        rows[0][1] = board::Square::Tile { tile: 1, points: 1 };
        rows[0][2] = board::Square::Premium(board_layout::TWS.unwrap());
        rows[0][3] = board::Square::Premium(board_layout::DWS.unwrap());
        let board = board::Board::from_squares(&rows).unwrap();
        let index = build::build_index(&[], |_| {});
        let snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: &game_config,
            index: &index,
        };
        // c on 2L, existing a, t on 3W, s on 2W: (6 + 1 + 1 + 1) * 6
        let cats = placement(vec![
            cell(0, 0, 'c', false),
            cell(0, 1, 'a', false),
            cell(0, 2, 't', false),
            cell(0, 3, 's', false),
        ]);
        assert_eq!(compute_score(&snapshot, &cats), 54);
        // scoring ignores cell order
        let mut reversed = cats.cells.to_vec();
        reversed.reverse();
        assert_eq!(compute_score(&snapshot, &placement(reversed)), 54);
    }

    #[test]
    fn full_rack_doubles() {
        let game_config = game_config::make_wide_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let index = build::build_index(&[], |_| {});
        let snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: &game_config,
            index: &index,
        };
        let seven = placement(
            "jukebox"
                .chars()
                .enumerate()
                .map(|(i, c)| cell(9, 10 + i as i8, c, false))
                .collect(),
        );
        // 8 + 1 + 5 + 1 + 3 + 1 + 8 = 27
        assert_eq!(compute_score(&snapshot, &seven), 54);
        let six = placement(seven.cells[..6].to_vec());
        assert_eq!(compute_score(&snapshot, &six), 19);
    }
}
