// Joseph Prichard
// 10/16/2026
// Symbol frequency table kept in first-occurrence order

use std::collections::HashMap;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    // (symbol, count) pairs in the order each symbol was first seen
    entries: Vec<(char, u64)>,
    // position of each symbol in entries
    #[serde(skip)]
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable::default()
    }

    // adds weight to a symbol, appending it when it has not been seen yet, counts saturate at u64::MAX
    pub fn add(&mut self, symbol: char, weight: u64) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = self.entries[i].1.saturating_add(weight),
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, weight));
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.index.get(&symbol).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().fold(0, |total, (_, count)| total.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }

    // copy of the table without the given symbols, order of the rest is kept
    pub fn without(&self, skipped: &[char]) -> FrequencyTable {
        self.iter()
            .filter(|(symbol, _)| !skipped.contains(symbol))
            .collect()
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (symbol, weight) in iter {
            table.add(symbol, weight);
        }
        table
    }
}

// counts every symbol as is, filtering is left to the caller
pub fn count_frequencies<I: IntoIterator<Item = char>>(symbols: I) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for symbol in symbols {
        table.add(symbol, 1);
    }
    table
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use super::*;

    #[test]
    fn test_count_first_occurrence_order() {
        let table = count_frequencies("abracadabra".chars());
        let entries: Vec<(char, u64)> = table.iter().collect();
        assert_eq!(entries, vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_count_keeps_whitespace_and_punctuation() {
        let table = count_frequencies("hi, hi!".chars());
        assert_eq!(table.get(' '), Some(1));
        assert_eq!(table.get(','), Some(1));
        assert_eq!(table.get('!'), Some(1));
        assert_eq!(table.get('h'), Some(2));
        assert_eq!(table.get('z'), None);
    }

    #[test]
    fn test_count_empty() {
        let table = count_frequencies("".chars());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_without() {
        let table = count_frequencies("huffman animation example".chars());
        let filtered = table.without(&[' ']);
        assert_eq!(filtered.get(' '), None);
        assert_eq!(filtered.len(), table.len() - 1);
        assert_eq!(filtered.total(), table.total() - 2);
        assert_eq!(filtered.iter().next(), Some(('h', 1)));
    }

    #[test]
    fn test_from_iter_merges_duplicates() {
        let table: FrequencyTable = vec![('x', 3), ('y', 4), ('x', 2)].into_iter().collect();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![('x', 5), ('y', 4)]);
    }

    #[test]
    fn test_counts_saturate() {
        let table: FrequencyTable = vec![('a', u64::MAX), ('b', 1), ('a', 5)].into_iter().collect();
        assert_eq!(table.get('a'), Some(u64::MAX));
        assert_eq!(table.total(), u64::MAX);
    }

    #[test]
    fn test_count_random_text() {
        // the counts of a random text always sum to its length
        let len = rand::thread_rng().gen_range(1..500);
        let text: String = (0..len)
            .map(|_| rand::thread_rng().gen_range(b'a'..=b'h') as char)
            .collect();
        let table = count_frequencies(text.chars());
        assert_eq!(table.total(), len as u64);
        for (symbol, count) in table.iter() {
            assert_eq!(count, text.chars().filter(|&c| c == symbol).count() as u64);
        }
    }
}
