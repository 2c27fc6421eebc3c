// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PremiumKind {
    Letter,
    Word,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub multiplier: i8, // 2 or 3
    pub kind: PremiumKind,
}

impl Premium {
    #[inline(always)]
    pub fn letter_multiplier(&self) -> i8 {
        match self.kind {
            PremiumKind::Letter => self.multiplier,
            PremiumKind::Word => 1,
        }
    }

    #[inline(always)]
    pub fn word_multiplier(&self) -> i8 {
        match self.kind {
            PremiumKind::Letter => 1,
            PremiumKind::Word => self.multiplier,
        }
    }

    // "2L", "3W" and so on.
    pub fn parse(s: &str) -> Option<Premium> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let multiplier = match b[0] {
            b'2' => 2,
            b'3' => 3,
            _ => return None,
        };
        let kind = match b[1].to_ascii_uppercase() {
            b'L' => PremiumKind::Letter,
            b'W' => PremiumKind::Word,
            _ => return None,
        };
        Some(Premium { multiplier, kind })
    }
}

impl std::fmt::Display for Premium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            PremiumKind::Letter => 'L',
            PremiumKind::Word => 'W',
        };
        write!(f, "{}{}", self.multiplier, kind)
    }
}

pub const TWS: Option<Premium> = Some(Premium {
    multiplier: 3,
    kind: PremiumKind::Word,
});
pub const DWS: Option<Premium> = Some(Premium {
    multiplier: 2,
    kind: PremiumKind::Word,
});
pub const TLS: Option<Premium> = Some(Premium {
    multiplier: 3,
    kind: PremiumKind::Letter,
});
pub const DLS: Option<Premium> = Some(Premium {
    multiplier: 2,
    kind: PremiumKind::Letter,
});
pub const FVS: Option<Premium> = None;

pub struct StaticBoardLayout {
    premiums: Box<[Option<Premium>]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Option<Premium>] {
        match self {
            BoardLayout::Static(x) => &x.premiums,
        }
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Option<Premium> {
        self.premiums()[self.dim().at_row_col(row, col)]
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout::Static(StaticBoardLayout {
        premiums: Box::new([
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
        ]),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}

// no premiums at all, star in the middle.
pub fn make_plain_board_layout(rows: i8, cols: i8) -> BoardLayout {
    let dim = matrix::Dim { rows, cols };
    BoardLayout::Static(StaticBoardLayout {
        premiums: vec![FVS; dim.len()].into_boxed_slice(),
        dim,
        star_row: rows / 2,
        star_col: cols / 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_premium_labels() {
        assert_eq!(Premium::parse("2L"), DLS);
        assert_eq!(Premium::parse("3w"), TWS);
        assert_eq!(Premium::parse("4W"), None);
        assert_eq!(Premium::parse("2X"), None);
        assert_eq!(Premium::parse(""), None);
        assert_eq!(TLS.unwrap().to_string(), "3L");
        assert_eq!(DWS.unwrap().word_multiplier(), 2);
        assert_eq!(DWS.unwrap().letter_multiplier(), 1);
    }

    #[test]
    fn standard_layout_is_symmetric() {
        let layout = make_standard_board_layout();
        let dim = layout.dim();
        assert_eq!(layout.premiums().len(), dim.len());
        for r in 0..dim.rows {
            for c in 0..dim.cols {
                assert_eq!(layout.premium_at(r, c), layout.premium_at(c, r));
            }
        }
        assert_eq!(layout.premium_at(7, 7), DWS);
        let wide = make_plain_board_layout(19, 27);
        assert_eq!((wide.star_row(), wide.star_col()), (9, 13));
    }
}
