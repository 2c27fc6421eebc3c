// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, matrix, movegen};

// "*" start, "=" 3W, "-" 2W, "\"" 3L, "'" 2L.
#[inline(always)]
pub fn empty_label(board: &board::Board, row: i8, col: i8) -> char {
    if row == board.star_row() && col == board.star_col() {
        return '*';
    }
    match board.at(row, col).premium() {
        Some(premium) => match premium.kind {
            board_layout::PremiumKind::Word if premium.multiplier >= 3 => '=',
            board_layout::PremiumKind::Word => '-',
            board_layout::PremiumKind::Letter if premium.multiplier >= 3 => '"',
            board_layout::PremiumKind::Letter => '\'',
        },
        None => ' ',
    }
}

// tiles worth no points (blanks) are lowercase.
#[inline(always)]
pub fn board_label(alphabet: &alphabet::Alphabet, board: &board::Board, row: i8, col: i8) -> char {
    match board.at(row, col) {
        board::Square::Tile { tile, points } => {
            let label = alphabet.label(tile);
            if points == 0 {
                label
            } else {
                label.to_ascii_uppercase()
            }
        }
        _ => empty_label(board, row, col),
    }
}

// a..z then aa, ab, ... for wide boards.
pub fn column_name(col: i8) -> String {
    let col = col as u8;
    if col < 26 {
        ((col + b'a') as char).to_string()
    } else {
        let hi = (col / 26 - 1 + b'a') as char;
        let lo = (col % 26 + b'a') as char;
        format!("{}{}", hi, lo)
    }
}

pub fn fmt_board(alphabet: &alphabet::Alphabet, board: &board::Board) -> String {
    use std::fmt::Write;
    let dim = board.dim();
    let mut s = String::new();
    let mut header = String::from("   ");
    for c in 0..dim.cols {
        header.push_str(&format!("{:>2}", column_name(c)));
    }
    let mut rule = String::from("  +");
    for _ in 1..dim.cols {
        rule.push_str("--");
    }
    rule.push_str("-+");
    let _ = writeln!(s, "{}", header);
    let _ = writeln!(s, "{}", rule);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push(board_label(alphabet, board, r, c));
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    let _ = writeln!(s, "{}", rule);
    let _ = writeln!(s, "{}", header);
    s
}

pub fn print_board(alphabet: &alphabet::Alphabet, board: &board::Board) {
    print!("{}", fmt_board(alphabet, board));
}

// "8H CATS 12": row first for across plays, column first for down plays.
// Board tiles in parentheses, blanks lowercase.
pub fn fmt_move(
    alphabet: &alphabet::Alphabet,
    board: &board::Board,
    play: &movegen::Move,
) -> String {
    let cells = &play.placement.cells;
    let Some(first) = cells.first() else {
        return format!("(empty) {}", play.score);
    };
    let coord = match play.placement.axis {
        matrix::Axis::Horizontal => format!("{}{}", first.row + 1, column_name(first.col)),
        matrix::Axis::Vertical => format!("{}{}", column_name(first.col), first.row + 1),
    };
    let mut word = String::new();
    let mut inside = false;
    for cell in cells.iter() {
        let existing = board.is_occupied(cell.row, cell.col);
        if existing != inside {
            word.push(if existing { '(' } else { ')' });
            inside = existing;
        }
        let label = alphabet.label(cell.tile);
        word.push(if cell.is_blank {
            label
        } else {
            label.to_ascii_uppercase()
        });
    }
    if inside {
        word.push(')');
    }
    format!("{} {} {}", coord, word, play.score)
}
