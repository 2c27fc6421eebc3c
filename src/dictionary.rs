// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// Machine words are tiles 1..=26, sorted, no duplicates.
pub struct Lexicon {
    pub words: Box<[Box<[u8]>]>,
    pub rejected: usize,
}

pub fn read_words(alphabet: &alphabet::Alphabet, giant_string: &str) -> Lexicon {
    let mut machine_words = Vec::<Box<[u8]>>::new();
    let mut rejected = 0;
    let mut v = Vec::new();
    'next_line: for line in giant_string.lines() {
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        v.clear();
        for c in s.chars() {
            match alphabet.tile_of(c) {
                Some(tile) => v.push(tile),
                None => {
                    log::debug!("skipping {:?}", s);
                    rejected += 1;
                    continue 'next_line;
                }
            }
        }
        machine_words.push(v[..].into());
    }
    machine_words.sort_unstable();
    machine_words.dedup();
    Lexicon {
        words: machine_words.into_boxed_slice(),
        rejected,
    }
}

pub fn read_words_from_file(
    alphabet: &alphabet::Alphabet,
    path: impl AsRef<std::path::Path>,
) -> error::Returns<Lexicon> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(giant_string) => {
            let lexicon = read_words(alphabet, &giant_string);
            log::info!(
                "read {} words from {} ({} lines skipped)",
                lexicon.words.len(),
                path.display(),
                lexicon.rejected
            );
            Ok(lexicon)
        }
        Err(err) => {
            return_error!(Lexicon, format!("cannot read {}: {}", path.display(), err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_dedups() {
        let alphabet = alphabet::make_english_alphabet();
        let lexicon = read_words(&alphabet, "cat\nCAT\n\n  dog \nno-way\nc4t\nact\n");
        assert_eq!(lexicon.rejected, 2);
        let words = lexicon
            .words
            .iter()
            .map(|w| alphabet.fmt_word(w))
            .collect::<Vec<_>>();
        assert_eq!(words, vec!["act", "cat", "dog"]);
    }

    #[test]
    fn missing_file_is_a_lexicon_error() {
        let alphabet = alphabet::make_english_alphabet();
        let err = read_words_from_file(&alphabet, "/nonexistent/words.txt")
            .err()
            .unwrap();
        assert_eq!(error::kind_of(&err), Some(error::ErrorKind::Lexicon));
    }
}
