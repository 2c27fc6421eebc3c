// Copyright (C) 2020-2026 Andy Kurnia.

// Tile numbering: 0 is the blank (only ever on a rack), 1..=26 are a..z.

pub struct Tile {
    label: char,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

pub const BLANK: u8 = 0;

impl<'a> Alphabet<'a> {
    // includes the blank.
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    // face value; the blank scores whatever its own entry says (zero).
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(idx).score
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> char {
        self.get(idx).label
    }

    // letters only, case-insensitive.
    #[inline(always)]
    pub fn tile_of(&self, c: char) -> Option<u8> {
        let lower = c.to_ascii_lowercase();
        (1..self.len()).find(|&tile| self.get(tile).label == lower)
    }

    // letters and the blank markers used by racks.
    #[inline(always)]
    pub fn rack_tile_of(&self, c: char) -> Option<u8> {
        if c == '?' || c == ' ' || c == '_' {
            Some(BLANK)
        } else {
            self.tile_of(c)
        }
    }

    pub fn fmt_word(&self, word: &[u8]) -> String {
        word.iter().map(|&tile| self.label(tile)).collect()
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter()
            .map(|&tile| {
                if tile == BLANK {
                    '?'
                } else {
                    self.label(tile).to_ascii_uppercase()
                }
            })
            .collect()
    }
}

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(StaticAlphabet {
        tiles: &[
            Tile {
                label: '?',
                freq: 2,
                score: 0,
            },
            Tile {
                label: 'a',
                freq: 9,
                score: 1,
            },
            Tile {
                label: 'b',
                freq: 2,
                score: 3,
            },
            Tile {
                label: 'c',
                freq: 2,
                score: 3,
            },
            Tile {
                label: 'd',
                freq: 4,
                score: 2,
            },
            Tile {
                label: 'e',
                freq: 12,
                score: 1,
            },
            Tile {
                label: 'f',
                freq: 2,
                score: 4,
            },
            Tile {
                label: 'g',
                freq: 3,
                score: 2,
            },
            Tile {
                label: 'h',
                freq: 2,
                score: 4,
            },
            Tile {
                label: 'i',
                freq: 9,
                score: 1,
            },
            Tile {
                label: 'j',
                freq: 1,
                score: 8,
            },
            Tile {
                label: 'k',
                freq: 1,
                score: 5,
            },
            Tile {
                label: 'l',
                freq: 4,
                score: 1,
            },
            Tile {
                label: 'm',
                freq: 2,
                score: 3,
            },
            Tile {
                label: 'n',
                freq: 6,
                score: 1,
            },
            Tile {
                label: 'o',
                freq: 8,
                score: 1,
            },
            Tile {
                label: 'p',
                freq: 2,
                score: 3,
            },
            Tile {
                label: 'q',
                freq: 1,
                score: 10,
            },
            Tile {
                label: 'r',
                freq: 6,
                score: 1,
            },
            Tile {
                label: 's',
                freq: 4,
                score: 1,
            },
            Tile {
                label: 't',
                freq: 6,
                score: 1,
            },
            Tile {
                label: 'u',
                freq: 4,
                score: 1,
            },
            Tile {
                label: 'v',
                freq: 2,
                score: 4,
            },
            Tile {
                label: 'w',
                freq: 2,
                score: 4,
            },
            Tile {
                label: 'x',
                freq: 1,
                score: 8,
            },
            Tile {
                label: 'y',
                freq: 2,
                score: 4,
            },
            Tile {
                label: 'z',
                freq: 1,
                score: 10,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_values() {
        let alphabet = make_english_alphabet();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.score(alphabet.tile_of('c').unwrap()), 3);
        assert_eq!(alphabet.score(alphabet.tile_of('Q').unwrap()), 10);
        assert_eq!(alphabet.score(BLANK), 0);
        assert_eq!(alphabet.tile_of('1'), None);
        assert_eq!(alphabet.tile_of('?'), None);
        assert_eq!(alphabet.rack_tile_of('?'), Some(BLANK));
        assert_eq!(alphabet.rack_tile_of(' '), Some(BLANK));
        assert_eq!(alphabet.fmt_rack(&[3, 1, 20, 0]), "CAT?");
        assert_eq!(alphabet.fmt_word(&[3, 1, 20]), "cat");
        let total = (0..alphabet.len())
            .map(|t| alphabet.freq(t) as u32)
            .sum::<u32>();
        assert_eq!(total, 100);
    }
}
