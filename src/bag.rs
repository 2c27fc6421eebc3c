// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

#[derive(Clone)]
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(
            (0..alphabet.len())
                .map(|tile| alphabet.freq(tile) as usize)
                .sum(),
        );
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_until_full_or_empty() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        assert_eq!(bag.len(), 100);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
        bag.shuffle(&mut rng);
        let mut rack = vec![1, 2];
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 95);
        bag.0.truncate(2);
        bag.replenish(&mut rack, 10);
        assert_eq!(rack.len(), 9);
        assert!(bag.is_empty());
        assert_eq!(bag.pop(), None);
    }

    #[test]
    fn same_seed_same_order() {
        let alphabet = alphabet::make_english_alphabet();
        let mut a = Bag::new(&alphabet);
        let mut b = a.clone();
        a.shuffle(&mut rand_chacha::ChaCha20Rng::seed_from_u64(7));
        b.shuffle(&mut rand_chacha::ChaCha20Rng::seed_from_u64(7));
        assert_eq!(a.0, b.0);
        let mut sorted = a.0.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, Bag::new(&alphabet).0);
    }
}
