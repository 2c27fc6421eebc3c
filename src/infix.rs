// Copyright (C) 2020-2026 Andy Kurnia.

// Every distinct substring of every word is one node. Node handles are i32,
// a negative handle means "no such substring".

#[derive(Clone, Copy)]
pub(crate) struct Arc {
    pub(crate) tile: u8,
    pub(crate) target: u32,
}

#[derive(Clone, Copy)]
pub(crate) struct Node {
    pub(crate) accepts: bool,
    // ranges into InfixIndex::arcs, sorted by tile.
    pub(crate) left_start: u32,
    pub(crate) left_len: u8,
    pub(crate) right_start: u32,
    pub(crate) right_len: u8,
}

pub struct InfixIndex {
    pub(crate) roots: [i32; 27],
    pub(crate) nodes: Box<[Node]>,
    pub(crate) arcs: Box<[Arc]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl InfixIndex {
    // the single-letter node for tile.
    #[inline(always)]
    pub fn root(&self, tile: u8) -> i32 {
        match self.roots.get(tile as usize) {
            Some(&p) => p,
            None => -1,
        }
    }

    #[inline(always)]
    fn seek_in(&self, start: u32, len: u8, tile: u8) -> i32 {
        let arcs = &self.arcs[start as usize..start as usize + len as usize];
        for arc in arcs {
            if arc.tile == tile {
                return arc.target as i32;
            }
            if arc.tile > tile {
                break;
            }
        }
        -1
    }

    // tile + substring(p)
    #[inline(always)]
    pub fn seek_left(&self, p: i32, tile: u8) -> i32 {
        if p < 0 {
            return -1;
        }
        let node = &self.nodes[p as usize];
        self.seek_in(node.left_start, node.left_len, tile)
    }

    // substring(p) + tile
    #[inline(always)]
    pub fn seek_right(&self, p: i32, tile: u8) -> i32 {
        if p < 0 {
            return -1;
        }
        let node = &self.nodes[p as usize];
        self.seek_in(node.right_start, node.right_len, tile)
    }

    #[inline(always)]
    pub fn seek(&self, p: i32, side: Side, tile: u8) -> i32 {
        match side {
            Side::Left => self.seek_left(p, tile),
            Side::Right => self.seek_right(p, tile),
        }
    }

    #[inline(always)]
    pub fn accepts(&self, p: i32) -> bool {
        p >= 0 && self.nodes[p as usize].accepts
    }

    // tiles that can be added on that side of substring(p).
    pub fn extensions(&self, p: i32, side: Side) -> impl Iterator<Item = u8> + '_ {
        let (start, len) = if p < 0 {
            (0, 0)
        } else {
            let node = &self.nodes[p as usize];
            match side {
                Side::Left => (node.left_start, node.left_len),
                Side::Right => (node.right_start, node.right_len),
            }
        };
        self.arcs[start as usize..start as usize + len as usize]
            .iter()
            .map(|arc| arc.tile)
    }

    // the node for a whole substring, read left to right.
    pub fn lookup(&self, tiles: &[u8]) -> i32 {
        let Some((&first, rest)) = tiles.split_first() else {
            return -1;
        };
        let mut p = self.root(first);
        for &tile in rest {
            p = self.seek_right(p, tile);
            if p < 0 {
                break;
            }
        }
        p
    }

    #[inline(always)]
    pub fn is_word(&self, tiles: &[u8]) -> bool {
        self.accepts(self.lookup(tiles))
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_words(&self) -> usize {
        self.nodes.iter().filter(|node| node.accepts).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, build, dictionary};

    fn make_index(words: &str) -> InfixIndex {
        let alphabet = alphabet::make_english_alphabet();
        let lexicon = dictionary::read_words(&alphabet, words);
        build::build_index(&lexicon.words, |_| {})
    }

    fn tiles(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b & 0x1f).collect()
    }

    #[test]
    fn every_substring_is_reachable_both_ways() {
        let words = ["cats", "scat", "at", "a", "tacts"];
        let index = make_index(&words.join("\n"));
        for word in words {
            let w = tiles(word);
            for i in 0..w.len() {
                for j in i + 1..=w.len() {
                    let sub = &w[i..j];
                    let by_right = index.lookup(sub);
                    assert!(by_right >= 0, "{:?} missing", sub);
                    // build the same substring from its last letter leftwards
                    let mut p = index.root(sub[sub.len() - 1]);
                    for &tile in sub[..sub.len() - 1].iter().rev() {
                        p = index.seek_left(p, tile);
                    }
                    assert_eq!(p, by_right);
                    let text = String::from_utf8(sub.iter().map(|t| t | 0x60).collect()).unwrap();
                    assert_eq!(index.accepts(p), words.contains(&text.as_str()), "{}", text);
                }
            }
        }
    }

    #[test]
    fn shared_substrings_share_nodes() {
        let index = make_index("cater\nlater\nmates");
        // "ate" occurs in all three words but exists once.
        let ate = index.lookup(&tiles("ate"));
        assert!(ate >= 0);
        assert_eq!(index.seek_right(index.lookup(&tiles("at")), 5), ate);
        assert_eq!(index.seek_left(index.lookup(&tiles("te")), 1), ate);
        assert_eq!(index.seek_left(ate, 3), index.lookup(&tiles("cate")));
        assert_eq!(index.seek_left(ate, 12), index.lookup(&tiles("late")));
        assert_eq!(index.seek_left(ate, 13), index.lookup(&tiles("mate")));
        assert_eq!(
            index.extensions(ate, Side::Left).collect::<Vec<_>>(),
            vec![3, 12, 13]
        );
        assert_eq!(
            index.extensions(ate, Side::Right).collect::<Vec<_>>(),
            vec![18, 19]
        );
        assert_eq!(index.num_words(), 3);
    }

    #[test]
    fn absent_substrings() {
        let index = make_index("cat");
        assert_eq!(index.lookup(&tiles("ct")), -1);
        assert_eq!(index.lookup(&[]), -1);
        assert_eq!(index.root(26), -1);
        assert_eq!(index.root(99), -1);
        assert_eq!(index.seek_right(-1, 1), -1);
        assert!(!index.is_word(&tiles("ca")));
        assert!(index.is_word(&tiles("cat")));
        assert_eq!(index.extensions(-1, Side::Left).count(), 0);
        // c, a, t, ca, at, cat
        assert_eq!(index.num_nodes(), 6);
    }
}
