// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    full_rack_multiplier: i16,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    // applied to the whole score when every rack tile is played.
    #[inline(always)]
    pub fn num_played_multiplier(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played == x.rack_size {
                    x.full_rack_multiplier
                } else {
                    1
                }
            }
        }
    }
}

pub fn make_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        full_rack_multiplier: 2,
    })
}

// 19 rows by 27 columns, no premiums, start square at (9, 13).
pub fn make_wide_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_plain_board_layout(19, 27),
        rack_size: 7,
        full_rack_multiplier: 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rack_doubles() {
        let game_config = make_english_game_config();
        assert_eq!(game_config.rack_size(), 7);
        assert_eq!(game_config.num_played_multiplier(7), 2);
        assert_eq!(game_config.num_played_multiplier(6), 1);
        assert_eq!(game_config.num_played_multiplier(1), 1);
        let wide = make_wide_english_game_config();
        assert_eq!(wide.board_layout().dim().cols, 27);
    }
}
