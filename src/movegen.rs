// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, game_config, infix, matrix, play_scorer};

// Bit t is set when tile t may go on a square. Bit 0 (blank) is never set.
const ALL_LETTERS: u32 = ((1u32 << 27) - 1) & !1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlacedTile {
    pub row: i8,
    pub col: i8,
    pub tile: u8,
    // only ever true for tiles this move puts down.
    pub is_blank: bool,
}

// One word span, both the board's tiles and the new ones, in axis order.
// Field order is the tie-break order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    pub cells: Box<[PlacedTile]>,
    pub axis: matrix::Axis,
}

impl Placement {
    pub fn word(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.tile).collect()
    }

    pub fn num_played(&self, board: &board::Board) -> i8 {
        self.cells
            .iter()
            .filter(|cell| !board.is_occupied(cell.row, cell.col))
            .count() as i8
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub placement: Placement,
    pub score: i32,
}

pub struct BoardSnapshot<'a> {
    pub board: &'a board::Board,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub index: &'a infix::InfixIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor {
    pub row: i8,
    pub col: i8,
    pub axis: matrix::Axis,
}

#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    // also anchor on empty squares next to tiles (parallel plays, hooks).
    pub hooks: bool,
    pub num_threads: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            hooks: false,
            num_threads: 1,
        }
    }
}

// Letters allowed on each empty square by the perpendicular word they would
// form, for plays along each axis. Indexed like the board.
pub struct CrossSets {
    across: Box<[u32]>,
    down: Box<[u32]>,
}

impl CrossSets {
    #[inline(always)]
    fn for_axis(&self, axis: matrix::Axis) -> &[u32] {
        match axis {
            matrix::Axis::Horizontal => &self.across,
            matrix::Axis::Vertical => &self.down,
        }
    }
}

fn gen_cross_set(board_snapshot: &BoardSnapshot, axis: matrix::Axis) -> Box<[u32]> {
    let board = board_snapshot.board;
    let dim = board.dim();
    let (dr, dc) = axis.perpendicular().delta();
    let mut word_buffer = Vec::new();
    let mut cross_set = vec![0u32; dim.len()].into_boxed_slice();
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if board.is_occupied(row, col) {
                continue;
            }
            // walk back to the start of the perpendicular word.
            let (mut r, mut c) = (row, col);
            while board.is_occupied(r - dr, c - dc) {
                r -= dr;
                c -= dc;
            }
            let has_before = (r, c) != (row, col);
            let has_after = board.is_occupied(row + dr, col + dc);
            let bits = if !has_before && !has_after {
                ALL_LETTERS
            } else {
                word_buffer.clear();
                while (r, c) != (row, col) {
                    word_buffer.extend(board.tile_at(r, c));
                    r += dr;
                    c += dc;
                }
                let at = word_buffer.len();
                word_buffer.push(0);
                let (mut r, mut c) = (row + dr, col + dc);
                while let Some(tile) = board.tile_at(r, c) {
                    word_buffer.push(tile);
                    r += dr;
                    c += dc;
                }
                let mut bits = 0u32;
                for tile in 1..=26u8 {
                    word_buffer[at] = tile;
                    if board_snapshot.index.is_word(&word_buffer) {
                        bits |= 1 << tile;
                    }
                }
                bits
            };
            cross_set[dim.at_row_col(row, col)] = bits;
        }
    }
    cross_set
}

struct Env<'a> {
    board_snapshot: &'a BoardSnapshot<'a>,
    cross_set: &'a [u32],
    strider: matrix::Strider,
    axis: matrix::Axis,
    lane: i8,
    rack_tally: [u8; 27],
    // (tile, is_blank) per position along the lane.
    word_buffer: Box<[(u8, bool)]>,
    num_played: i8,
    found: Vec<Placement>,
}

impl Env<'_> {
    #[inline(always)]
    fn row_col(&self, idx: i8) -> (i8, i8) {
        match self.axis {
            matrix::Axis::Horizontal => (self.lane, idx),
            matrix::Axis::Vertical => (idx, self.lane),
        }
    }

    #[inline(always)]
    fn is_occupied(&self, idx: i8) -> bool {
        idx >= 0
            && idx < self.strider.len()
            && self.board_snapshot.board.squares()[self.strider.at(idx)].is_occupied()
    }

    #[inline(always)]
    fn seek(&self, side: Option<infix::Side>, p: i32, tile: u8) -> i32 {
        match side {
            None => self.board_snapshot.index.root(tile),
            Some(side) => self.board_snapshot.index.seek(p, side, tile),
        }
    }

    fn record(&mut self, lo: i8, hi: i8) {
        let cells = (lo..=hi)
            .map(|idx| {
                let (row, col) = self.row_col(idx);
                let (tile, is_blank) = self.word_buffer[idx as usize];
                PlacedTile {
                    row,
                    col,
                    tile,
                    is_blank,
                }
            })
            .collect();
        self.found.push(Placement {
            cells,
            axis: self.axis,
        });
    }
}

// Square idx joins the span lo..=hi on the given side (None for the anchor).
// p is the node for the span so far.
fn play(env: &mut Env, idx: i8, side: Option<infix::Side>, p: i32, lo: i8, hi: i8) {
    if idx < 0 || idx >= env.strider.len() {
        return;
    }
    let square = env.board_snapshot.board.squares()[env.strider.at(idx)];
    if let Some(tile) = square.tile() {
        let q = env.seek(side, p, tile);
        if q < 0 {
            return;
        }
        env.word_buffer[idx as usize] = (tile, false);
        extend(env, idx, side, q, lo, hi);
        return;
    }

    let cross_bits = env.cross_set[env.strider.at(idx)];
    if cross_bits == 0 {
        return;
    }
    let index = env.board_snapshot.index;
    let candidates = match side {
        None => (1..=26u8)
            .filter(|&tile| index.root(tile) >= 0)
            .fold(0u32, |bits, tile| bits | (1u32 << tile)),
        Some(side) => index
            .extensions(p, side)
            .fold(0u32, |bits, tile| bits | (1u32 << tile)),
    } & cross_bits;
    if candidates == 0 {
        return;
    }
    for tile in 1..=26u8 {
        if candidates & (1 << tile) == 0 {
            continue;
        }
        let q = env.seek(side, p, tile);
        // the real tile and a blank are separate branches: which square
        // gets the real tile changes the score.
        for (rack_tile, is_blank) in [(tile, false), (alphabet::BLANK, true)] {
            if env.rack_tally[rack_tile as usize] == 0 {
                continue;
            }
            env.rack_tally[rack_tile as usize] -= 1;
            env.num_played += 1;
            env.word_buffer[idx as usize] = (tile, is_blank);
            extend(env, idx, side, q, lo, hi);
            env.num_played -= 1;
            env.rack_tally[rack_tile as usize] += 1;
        }
    }
}

// Each span is grown leftwards first, then rightwards, so every span is
// reached by exactly one path from its anchor.
fn extend(env: &mut Env, idx: i8, side: Option<infix::Side>, q: i32, lo: i8, hi: i8) {
    let (lo, hi) = match side {
        None => (idx, idx),
        Some(infix::Side::Left) => (idx, hi),
        Some(infix::Side::Right) => (lo, idx),
    };
    let touches_before = env.is_occupied(lo - 1);
    let touches_after = env.is_occupied(hi + 1);
    let closed = !touches_before && !touches_after;
    if closed && env.num_played > 0 && env.board_snapshot.index.accepts(q) {
        env.record(lo, hi);
    }
    if side != Some(infix::Side::Right) {
        play(env, lo - 1, Some(infix::Side::Left), q, lo, hi);
    }
    // growing rightwards ends the left edge, so a span touching a tile on
    // its left would stay unclosed.
    if !touches_before {
        play(env, hi + 1, Some(infix::Side::Right), q, lo, hi);
    }
}

pub struct InfixMoveGenerator {
    cross_sets: CrossSets,
}

impl InfixMoveGenerator {
    pub fn new(board_snapshot: &BoardSnapshot) -> Self {
        Self {
            cross_sets: CrossSets {
                across: gen_cross_set(board_snapshot, matrix::Axis::Horizontal),
                down: gen_cross_set(board_snapshot, matrix::Axis::Vertical),
            },
        }
    }

    // Every placement along axis through (row, col) that uses rack tiles.
    pub fn search(
        &self,
        board_snapshot: &BoardSnapshot,
        row: i8,
        col: i8,
        axis: matrix::Axis,
        rack: &[u8],
    ) -> Vec<Placement> {
        let dim = board_snapshot.board.dim();
        if !dim.contains(row, col) {
            return Vec::new();
        }
        let mut rack_tally = [0u8; 27];
        for &tile in rack {
            if let Some(count) = rack_tally.get_mut(tile as usize) {
                *count += 1;
            }
        }
        let strider = dim.lane(axis, row, col);
        let mut env = Env {
            board_snapshot,
            cross_set: self.cross_sets.for_axis(axis),
            word_buffer: vec![(0u8, false); strider.len() as usize].into_boxed_slice(),
            strider,
            axis,
            lane: axis.perpendicular().idx(row, col),
            rack_tally,
            num_played: 0,
            found: Vec::new(),
        };
        let idx = axis.idx(row, col);
        play(&mut env, idx, None, -1, idx, idx);
        env.found
    }

    pub fn gen_candidates(
        &self,
        board_snapshot: &BoardSnapshot,
        rack: &[u8],
        options: &SearchOptions,
    ) -> Vec<Placement> {
        let t0 = std::time::Instant::now();
        let anchors = anchors(board_snapshot.board, options.hooks);
        let num_threads = options.num_threads.clamp(1, anchors.len().max(1));
        let found = if num_threads <= 1 {
            anchors
                .iter()
                .flat_map(|anchor| {
                    self.search(board_snapshot, anchor.row, anchor.col, anchor.axis, rack)
                })
                .collect::<Vec<_>>()
        } else {
            let chunk_size = anchors.len().div_ceil(num_threads);
            std::thread::scope(|s| {
                let handles = anchors
                    .chunks(chunk_size)
                    .map(|chunk| {
                        s.spawn(move || {
                            chunk
                                .iter()
                                .flat_map(|anchor| {
                                    self.search(
                                        board_snapshot,
                                        anchor.row,
                                        anchor.col,
                                        anchor.axis,
                                        rack,
                                    )
                                })
                                .collect::<Vec<_>>()
                        })
                    })
                    .collect::<Vec<_>>();
                // joined in chunk order, so the result matches one thread.
                handles
                    .into_iter()
                    .flat_map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|e| std::panic::resume_unwind(e))
                    })
                    .collect::<Vec<_>>()
            })
        };
        log::debug!(
            "{} anchors, {} candidates, {} threads, {:?}",
            anchors.len(),
            found.len(),
            num_threads,
            t0.elapsed()
        );
        found
    }
}

// Where searches start, in row-major order, without repeats.
// An empty board has only the start square, in both axes.
pub fn anchors(board: &board::Board, hooks: bool) -> Vec<Anchor> {
    let dim = board.dim();
    let mut ret = Vec::new();
    if board.is_empty() {
        for axis in matrix::Axis::BOTH {
            ret.push(Anchor {
                row: board.star_row(),
                col: board.star_col(),
                axis,
            });
        }
        return ret;
    }
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if !board.is_occupied(row, col) {
                continue;
            }
            for (r, c) in [
                (row, col),
                (row - 1, col),
                (row + 1, col),
                (row, col - 1),
                (row, col + 1),
            ] {
                if !dim.contains(r, c) {
                    continue;
                }
                if board.is_occupied(r, c) || hooks {
                    for axis in matrix::Axis::BOTH {
                        ret.push(Anchor { row: r, col: c, axis });
                    }
                }
            }
        }
    }
    ret.sort_unstable();
    ret.dedup();
    ret
}

// Single anchor search without keeping the generator around.
pub fn search(
    board_snapshot: &BoardSnapshot,
    row: i8,
    col: i8,
    axis: matrix::Axis,
    rack: &[u8],
) -> Vec<Placement> {
    InfixMoveGenerator::new(board_snapshot).search(board_snapshot, row, col, axis, rack)
}

pub fn gen_moves(
    board_snapshot: &BoardSnapshot,
    rack: &[u8],
    options: &SearchOptions,
) -> Vec<Move> {
    InfixMoveGenerator::new(board_snapshot)
        .gen_candidates(board_snapshot, rack, options)
        .into_iter()
        .map(|placement| Move {
            score: play_scorer::compute_score(board_snapshot, &placement),
            placement,
        })
        .collect()
}
