// Copyright (C) 2020-2026 Andy Kurnia.

use super::{movegen, play_scorer};

// Higher score first. Equal scores fall back to the placement order, so the
// answer never depends on the order anchors were searched in.
#[inline(always)]
fn compare_moves(a: &movegen::Move, b: &movegen::Move) -> std::cmp::Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.placement.cmp(&b.placement))
}

pub fn pick_best(
    board_snapshot: &movegen::BoardSnapshot,
    candidates: &[movegen::Placement],
) -> Option<movegen::Move> {
    let mut best: Option<movegen::Move> = None;
    for placement in candidates {
        let score = play_scorer::compute_score(board_snapshot, placement);
        let better = match &best {
            None => true,
            Some(best) => {
                score > best.score || (score == best.score && *placement < best.placement)
            }
        };
        if better {
            best = Some(movegen::Move {
                placement: placement.clone(),
                score,
            });
        }
    }
    best
}

// n best distinct placements, best first.
pub fn top_moves(
    board_snapshot: &movegen::BoardSnapshot,
    candidates: Vec<movegen::Placement>,
    n: usize,
) -> Vec<movegen::Move> {
    let mut moves = candidates
        .into_iter()
        .map(|placement| movegen::Move {
            score: play_scorer::compute_score(board_snapshot, &placement),
            placement,
        })
        .collect::<Vec<_>>();
    moves.sort_unstable_by(compare_moves);
    // the same placement always has the same score, so repeats are adjacent.
    moves.dedup_by(|a, b| a.placement == b.placement);
    moves.truncate(n);
    moves
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePicker {
    Best,
    Top(usize),
}

impl MovePicker {
    pub fn pick_moves(
        &self,
        board_snapshot: &movegen::BoardSnapshot,
        rack: &[u8],
        options: &movegen::SearchOptions,
    ) -> Vec<movegen::Move> {
        let move_generator = movegen::InfixMoveGenerator::new(board_snapshot);
        let candidates = move_generator.gen_candidates(board_snapshot, rack, options);
        match self {
            MovePicker::Best => pick_best(board_snapshot, &candidates).into_iter().collect(),
            MovePicker::Top(n) => top_moves(board_snapshot, candidates, *n),
        }
    }
}

// None means no legal move.
pub fn find_best_move(
    board_snapshot: &movegen::BoardSnapshot,
    rack: &[u8],
    options: &movegen::SearchOptions,
) -> Option<movegen::Move> {
    let t0 = std::time::Instant::now();
    let best = MovePicker::Best
        .pick_moves(board_snapshot, rack, options)
        .pop();
    match &best {
        Some(play) => log::debug!("best move scores {} in {:?}", play.score, t0.elapsed()),
        None => log::debug!("no legal move in {:?}", t0.elapsed()),
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, board, build, dictionary, game_config, infix, matrix};

    fn make_index(words: &[&str]) -> infix::InfixIndex {
        let alphabet = alphabet::make_english_alphabet();
        let lexicon = dictionary::read_words(&alphabet, &words.join("\n"));
        build::build_index(&lexicon.words, |_| {})
    }

    fn t(c: char) -> u8 {
        (c as u8) & 0x1f
    }

    #[test]
    fn ties_go_to_the_smallest_placement() {
        let game_config = game_config::make_wide_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let index = make_index(&["at", "ta"]);
        let snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: &game_config,
            index: &index,
        };
        let rack = [t('a'), t('t')];
        let best = find_best_move(&snapshot, &rack, &movegen::SearchOptions::default()).unwrap();
        assert_eq!(best.score, 2);
        // every candidate scores 2; the topmost cell wins, then the lower letter.
        assert_eq!(best.placement.axis, matrix::Axis::Vertical);
        assert_eq!(
            best.placement.cells[..],
            [
                movegen::PlacedTile {
                    row: 8,
                    col: 13,
                    tile: t('a'),
                    is_blank: false,
                },
                movegen::PlacedTile {
                    row: 9,
                    col: 13,
                    tile: t('t'),
                    is_blank: false,
                },
            ]
        );
        // same answer with more threads or a shuffled candidate list
        let threaded = find_best_move(
            &snapshot,
            &rack,
            &movegen::SearchOptions {
                hooks: false,
                num_threads: 3,
            },
        );
        assert_eq!(threaded.as_ref(), Some(&best));
        let mut candidates = movegen::InfixMoveGenerator::new(&snapshot).gen_candidates(
            &snapshot,
            &rack,
            &movegen::SearchOptions::default(),
        );
        candidates.reverse();
        assert_eq!(pick_best(&snapshot, &candidates), Some(best));
    }

    #[test]
    fn top_moves_are_sorted_and_distinct() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let index = make_index(&["za", "az", "a"]);
        let snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: &game_config,
            index: &index,
        };
        let candidates = movegen::InfixMoveGenerator::new(&snapshot).gen_candidates(
            &snapshot,
            &[t('z'), t('a')],
            &movegen::SearchOptions::default(),
        );
        let mut doubled = candidates.clone();
        doubled.extend(candidates.iter().cloned());
        let top = top_moves(&snapshot, doubled, 100);
        assert_eq!(top.len(), candidates.len());
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(top.windows(2).all(|w| w[0].placement != w[1].placement));
        assert_eq!(top[0], pick_best(&snapshot, &candidates).unwrap());
        assert_eq!(top_moves(&snapshot, candidates, 2).len(), 2);
    }

    #[test]
    fn no_legal_move_is_none() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let index = make_index(&["cat"]);
        let snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: &game_config,
            index: &index,
        };
        let options = movegen::SearchOptions::default();
        assert_eq!(
            find_best_move(&snapshot, &[t('d'), t('o'), t('g')], &options),
            None
        );
        assert_eq!(find_best_move(&snapshot, &[], &options), None);
        let picker = MovePicker::Top(5);
        assert!(picker.pick_moves(&snapshot, &[t('x')], &options).is_empty());
        assert_eq!(pick_best(&snapshot, &[]), None);
    }
}
