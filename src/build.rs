// Copyright (C) 2020-2026 Andy Kurnia.

use super::infix;

// Fast insecure non-cryptographic hash.
struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (std::num::Wrapping(self.0) * std::num::Wrapping(3467)).0 ^ (!b as u64);
        }
    }
}

impl Default for MyHasher {
    fn default() -> MyHasher {
        MyHasher(0)
    }
}

type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;

// How long one step may run before handing control back.
pub const TIME_SLICE: std::time::Duration = std::time::Duration::from_millis(30);

// Unfrozen node. Edge lists are short (at most one per letter).
#[derive(Default)]
struct State {
    accepts: bool,
    left: Vec<(u8, u32)>,
    right: Vec<(u8, u32)>,
}

pub struct IndexBuilder<'a> {
    words: &'a [Box<[u8]>],
    next_word: usize,
    states: Vec<State>,
    roots: [i32; 27],
    // (node of s minus its last tile, last tile) -> node of s.
    // This identifies s by content, so each substring gets one node.
    states_finder: std::collections::HashMap<(u32, u8), u32, MyHasherDefault>,
    // handles[i * len + j] = node of word[i..=j], reused across words.
    handles: Vec<u32>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(words: &'a [Box<[u8]>]) -> Self {
        Self {
            words,
            next_word: 0,
            states: Vec::new(),
            roots: [-1; 27],
            states_finder: Default::default(),
            handles: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn progress(&self) -> f32 {
        if self.words.is_empty() {
            1.0
        } else {
            self.next_word as f32 / self.words.len() as f32
        }
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.next_word >= self.words.len()
    }

    fn make_root(&mut self, tile: u8) -> u32 {
        let p = self.roots[tile as usize];
        if p >= 0 {
            return p as u32;
        }
        let ret = self.states.len() as u32;
        self.states.push(State::default());
        self.roots[tile as usize] = ret as i32;
        ret
    }

    // node of word[i..=j], given nodes of word[i..j] and word[i+1..=j].
    fn make_state(
        &mut self,
        shorter_on_right: u32,
        shorter_on_left: u32,
        first: u8,
        last: u8,
    ) -> u32 {
        use std::collections::hash_map::Entry::{Occupied, Vacant};
        match self.states_finder.entry((shorter_on_right, last)) {
            Occupied(entry) => *entry.get(),
            Vacant(entry) => {
                let ret = self.states.len() as u32;
                entry.insert(ret);
                self.states.push(State::default());
                // a new node cannot have been linked from either side before.
                let states = &mut self.states;
                states[shorter_on_right as usize].right.push((last, ret));
                states[shorter_on_left as usize].left.push((first, ret));
                ret
            }
        }
    }

    fn add_word(&mut self, word: &[u8]) {
        let len = word.len();
        if len == 0 || word.iter().any(|&t| t == 0 || t > 26) {
            return;
        }
        self.handles.clear();
        self.handles.resize(len * len, 0);
        for i in 0..len {
            self.handles[i * len + i] = self.make_root(word[i]);
        }
        for sub_len in 2..=len {
            for i in 0..=len - sub_len {
                let j = i + sub_len - 1;
                let p = self.make_state(
                    self.handles[i * len + j - 1],
                    self.handles[(i + 1) * len + j],
                    word[i],
                    word[j],
                );
                self.handles[i * len + j] = p;
            }
        }
        let whole = self.handles[len - 1];
        self.states[whole as usize].accepts = true;
    }

    // Adds words until budget runs out. Returns true when all are in.
    pub fn step(&mut self, budget: std::time::Duration) -> bool {
        let t0 = std::time::Instant::now();
        let words = self.words;
        while self.next_word < words.len() {
            self.add_word(&words[self.next_word]);
            self.next_word += 1;
            // checking the clock per word is cheap next to the quadratic work
            if t0.elapsed() >= budget {
                break;
            }
        }
        self.is_done()
    }

    pub fn finish(self) -> infix::InfixIndex {
        let num_arcs = self
            .states
            .iter()
            .map(|state| state.left.len() + state.right.len())
            .sum();
        let mut arcs = Vec::with_capacity(num_arcs);
        let mut nodes = Vec::with_capacity(self.states.len());
        for mut state in self.states {
            state.left.sort_unstable();
            state.right.sort_unstable();
            let left_start = arcs.len() as u32;
            arcs.extend(
                state
                    .left
                    .iter()
                    .map(|&(tile, target)| infix::Arc { tile, target }),
            );
            let right_start = arcs.len() as u32;
            arcs.extend(
                state
                    .right
                    .iter()
                    .map(|&(tile, target)| infix::Arc { tile, target }),
            );
            nodes.push(infix::Node {
                accepts: state.accepts,
                left_start,
                left_len: state.left.len() as u8,
                right_start,
                right_len: state.right.len() as u8,
            });
        }
        infix::InfixIndex {
            roots: self.roots,
            nodes: nodes.into_boxed_slice(),
            arcs: arcs.into_boxed_slice(),
        }
    }
}

// Calls on_progress between slices and once with 1.0 at the end.
pub fn build_index<F: FnMut(f32)>(words: &[Box<[u8]>], mut on_progress: F) -> infix::InfixIndex {
    let t0 = std::time::Instant::now();
    let mut builder = IndexBuilder::new(words);
    while !builder.step(TIME_SLICE) {
        on_progress(builder.progress());
    }
    on_progress(1.0);
    let index = builder.finish();
    log::info!(
        "indexed {} words into {} nodes in {:?}",
        words.len(),
        index.num_nodes(),
        t0.elapsed()
    );
    index
}

// Same result as build_index, but yields to the runtime after every slice.
pub async fn build_index_async<F: FnMut(f32)>(
    words: &[Box<[u8]>],
    mut on_progress: F,
) -> infix::InfixIndex {
    let t0 = std::time::Instant::now();
    let mut builder = IndexBuilder::new(words);
    while !builder.step(TIME_SLICE) {
        on_progress(builder.progress());
        tokio::task::yield_now().await;
    }
    on_progress(1.0);
    let index = builder.finish();
    log::info!(
        "indexed {} words into {} nodes in {:?}",
        words.len(),
        index.num_nodes(),
        t0.elapsed()
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_words(words: &[&str]) -> Vec<Box<[u8]>> {
        words
            .iter()
            .map(|w| w.bytes().map(|b| b & 0x1f).collect())
            .collect()
    }

    #[test]
    fn steps_report_progress() {
        let words = machine_words(&["ab", "abc", "bc"]);
        let mut builder = IndexBuilder::new(&words);
        assert_eq!(builder.progress(), 0.0);
        // zero budget still makes progress, one word per step
        assert!(!builder.step(std::time::Duration::ZERO));
        assert!((builder.progress() - 1.0 / 3.0).abs() < 1e-6);
        assert!(!builder.step(std::time::Duration::ZERO));
        assert!(builder.step(std::time::Duration::ZERO));
        assert!(builder.is_done());
        let index = builder.finish();
        // a, b, c, ab, bc, abc
        assert_eq!(index.num_nodes(), 6);
        assert_eq!(index.num_words(), 3);
    }

    #[test]
    fn progress_ends_at_one() {
        let words = machine_words(&["zoo", "zoom"]);
        let mut seen = Vec::new();
        let index = build_index(&words, |p| seen.push(p));
        assert_eq!(seen.last(), Some(&1.0));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(index.is_word(&words[1]));
    }

    #[test]
    fn empty_word_list() {
        let index = build_index(&[], |_| {});
        assert_eq!(index.num_nodes(), 0);
        assert_eq!(index.lookup(&[1]), -1);
    }

    #[test]
    fn malformed_machine_words_are_skipped() {
        let words: Vec<Box<[u8]>> = vec![Box::new([]), Box::new([1, 0, 2]), Box::new([1, 2])];
        let index = build_index(&words, |_| {});
        assert_eq!(index.num_words(), 1);
        assert!(index.is_word(&[1, 2]));
    }

    #[tokio::test]
    async fn async_build_matches_sync_build() {
        let words = machine_words(&["rate", "tear", "eat", "tea", "ate", "at"]);
        let mut calls = 0;
        let a = build_index_async(&words, |_| calls += 1).await;
        let b = build_index(&words, |_| {});
        assert!(calls >= 1);
        assert_eq!(a.num_nodes(), b.num_nodes());
        for w in &words {
            assert_eq!(a.lookup(w), b.lookup(w));
            assert!(a.is_word(w));
        }
        assert!(!a.is_word(&machine_words(&["ear"])[0]));
        assert!(a.lookup(&machine_words(&["ear"])[0]) >= 0);
    }
}
