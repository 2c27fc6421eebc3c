// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error, game_config, matrix, movegen};

// A square holds a placed tile or an unused premium, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Square {
    Empty,
    Premium(board_layout::Premium),
    // points already earned by this tile (0 for a blank).
    Tile { tile: u8, points: i16 },
}

impl Square {
    #[inline(always)]
    pub fn tile(&self) -> Option<u8> {
        match self {
            Square::Tile { tile, .. } => Some(*tile),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Square::Tile { .. })
    }

    #[inline(always)]
    pub fn premium(&self) -> Option<board_layout::Premium> {
        match self {
            Square::Premium(premium) => Some(*premium),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct Board {
    dim: matrix::Dim,
    squares: Box<[Square]>,
    star_row: i8,
    star_col: i8,
}

impl Board {
    pub fn new(board_layout: &board_layout::BoardLayout) -> Self {
        Self {
            dim: board_layout.dim(),
            squares: board_layout
                .premiums()
                .iter()
                .map(|premium| match premium {
                    Some(premium) => Square::Premium(*premium),
                    None => Square::Empty,
                })
                .collect(),
            star_row: board_layout.star_row(),
            star_col: board_layout.star_col(),
        }
    }

    // rows must be rectangular; star defaults to the centre.
    pub fn from_squares(rows: &[Vec<Square>]) -> error::Returns<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return_error!(Snapshot, "board: need at least one row and one col".into());
        }
        if rows.len() > i8::MAX as usize || rows[0].len() > i8::MAX as usize {
            return_error!(
                Snapshot,
                format!("board: {} x {} is too large", rows.len(), rows[0].len())
            );
        }
        let dim = matrix::Dim {
            rows: rows.len() as i8,
            cols: rows[0].len() as i8,
        };
        let mut squares = Vec::with_capacity(dim.len());
        for (row_num, row) in rows.iter().enumerate() {
            if row.len() != dim.cols as usize {
                return_error!(
                    Snapshot,
                    format!(
                        "board row {} (0-based): need {} cols, found {} cols",
                        row_num,
                        dim.cols,
                        row.len()
                    )
                );
            }
            for (col_num, &square) in row.iter().enumerate() {
                if let Square::Tile { tile, .. } = square {
                    if tile == alphabet::BLANK || tile > 26 {
                        return_error!(
                            Snapshot,
                            format!(
                                "board row {} col {} (0-based): invalid tile {}",
                                row_num, col_num, tile
                            )
                        );
                    }
                }
                squares.push(square);
            }
        }
        Ok(Self {
            dim,
            squares: squares.into_boxed_slice(),
            star_row: dim.rows / 2,
            star_col: dim.cols / 2,
        })
    }

    pub fn with_start(mut self, row: i8, col: i8) -> error::Returns<Self> {
        if !self.dim.contains(row, col) {
            return_error!(
                Snapshot,
                format!("start square ({}, {}) is off the board", row, col)
            );
        }
        self.star_row = row;
        self.star_col = col;
        Ok(self)
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    // Square::Empty when off the board, which is what every caller wants.
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> Square {
        if self.dim.contains(row, col) {
            self.squares[self.dim.at_row_col(row, col)]
        } else {
            Square::Empty
        }
    }

    #[inline(always)]
    pub fn tile_at(&self, row: i8, col: i8) -> Option<u8> {
        self.at(row, col).tile()
    }

    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.at(row, col).is_occupied()
    }

    pub fn is_empty(&self) -> bool {
        !self.squares.iter().any(Square::is_occupied)
    }

    pub fn num_tiles(&self) -> usize {
        self.squares.iter().filter(|s| s.is_occupied()).count()
    }

    // new tiles land at face value, their premiums are used up.
    pub fn apply(&mut self, alphabet: &alphabet::Alphabet, play: &movegen::Move) {
        for cell in play.placement.cells.iter() {
            let idx = self.dim.at_row_col(cell.row, cell.col);
            if self.squares[idx].is_occupied() {
                continue;
            }
            self.squares[idx] = Square::Tile {
                tile: cell.tile,
                points: if cell.is_blank {
                    alphabet.score(alphabet::BLANK) as i16
                } else {
                    alphabet.score(cell.tile) as i16
                },
            };
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack(pub Vec<u8>);

impl Rack {
    pub fn new(game_config: &game_config::GameConfig, tiles: &[u8]) -> error::Returns<Self> {
        if tiles.len() > game_config.rack_size() as usize {
            return_error!(
                Input,
                format!(
                    "rack has {} tiles, at most {} allowed",
                    tiles.len(),
                    game_config.rack_size()
                )
            );
        }
        if let Some(&tile) = tiles.iter().find(|&&t| t >= game_config.alphabet().len()) {
            return_error!(Input, format!("rack has invalid tile {}", tile));
        }
        Ok(Rack(tiles.to_vec()))
    }

    // "cat??" or "cat  "; blanks are '?', '_' or ' '.
    pub fn parse(game_config: &game_config::GameConfig, s: &str) -> error::Returns<Self> {
        let alphabet = game_config.alphabet();
        let mut tiles = Vec::with_capacity(s.len());
        for c in s.chars() {
            match alphabet.rack_tile_of(c) {
                Some(tile) => tiles.push(tile),
                None => {
                    return_error!(Input, format!("invalid rack tile {:?} in {:?}", c, s));
                }
            }
        }
        Self::new(game_config, &tiles)
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // removes the tiles a move consumed, blanks included. The rack is left
    // as it was if any of them is missing.
    pub fn use_tiles(&mut self, board: &Board, play: &movegen::Move) -> error::Returns<()> {
        let mut left = self.0.clone();
        for cell in play.placement.cells.iter() {
            if board.is_occupied(cell.row, cell.col) {
                continue;
            }
            let wanted = if cell.is_blank {
                alphabet::BLANK
            } else {
                cell.tile
            };
            let pos = left
                .iter()
                .rposition(|&t| t == wanted)
                .ok_or("move uses a tile not on the rack")?;
            left.swap_remove(pos);
        }
        self.0 = left;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn t(c: char) -> Square {
        Square::Tile {
            tile: (c as u8) & 0x1f,
            points: 1,
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![Square::Empty; 3], vec![Square::Empty; 2]];
        let err = Board::from_squares(&rows).err().unwrap();
        assert_eq!(error::kind_of(&err), Some(ErrorKind::Snapshot));
        assert!(Board::from_squares(&[]).is_err());
    }

    #[test]
    fn rejects_bad_tiles() {
        let rows = vec![vec![Square::Tile { tile: 0, points: 0 }]];
        assert!(Board::from_squares(&rows).is_err());
        let too_big = Square::Tile {
            tile: 27,
            points: 0,
        };
        let rows = vec![vec![too_big]];
        assert!(Board::from_squares(&rows).is_err());
    }

    #[test]
    fn reads_squares() {
        let rows = vec![
            vec![
                Square::Empty,
                t('c'),
                Square::Premium(board_layout::DWS.unwrap()),
            ],
            vec![Square::Empty; 3],
        ];
        let board = Board::from_squares(&rows).unwrap();
        assert_eq!(board.dim(), matrix::Dim { rows: 2, cols: 3 });
        assert_eq!(board.tile_at(0, 1), Some(3));
        assert_eq!(board.tile_at(0, 0), None);
        assert_eq!(board.tile_at(-1, 1), None);
        assert_eq!(board.tile_at(0, 3), None);
        assert_eq!(board.at(0, 2).premium(), board_layout::DWS);
        assert_eq!((board.star_row(), board.star_col()), (1, 1));
        assert!(!board.is_empty());
        assert_eq!(board.num_tiles(), 1);
        assert!(board.clone().with_start(5, 5).is_err());
        let moved = board.with_start(0, 0).unwrap();
        assert_eq!((moved.star_row(), moved.star_col()), (0, 0));
    }

    #[test]
    fn racks() {
        let game_config = game_config::make_english_game_config();
        let rack = Rack::parse(&game_config, "Cat??").unwrap();
        assert_eq!(rack.tiles(), &[3, 1, 20, 0, 0]);
        let err = Rack::parse(&game_config, "abcdefgh").err().unwrap();
        assert_eq!(error::kind_of(&err), Some(ErrorKind::Input));
        assert!(Rack::parse(&game_config, "ab1").is_err());
        assert!(Rack::new(&game_config, &[27]).is_err());
        assert!(Rack::parse(&game_config, "").unwrap().is_empty());
    }

    #[test]
    fn using_tiles_is_all_or_nothing() {
        let board = Board::from_squares(&[vec![Square::Empty; 3]]).unwrap();
        let cell = |col: i8, tile: u8, is_blank: bool| movegen::PlacedTile {
            row: 0,
            col,
            tile,
            is_blank,
        };
        let cells = vec![cell(0, 3, false), cell(1, 1, true), cell(2, 20, false)];
        let play = movegen::Move {
            placement: movegen::Placement {
                cells: cells.into_boxed_slice(),
                axis: matrix::Axis::Horizontal,
            },
            score: 4,
        };
        // the c and the blank are there, the t is not.
        let mut rack = Rack(vec![3, 0]);
        assert!(rack.use_tiles(&board, &play).is_err());
        assert_eq!(rack.tiles(), &[3, 0]);

        let mut rack = Rack(vec![3, 20, 0, 5]);
        rack.use_tiles(&board, &play).unwrap();
        assert_eq!(rack.tiles(), &[5]);
    }
}
