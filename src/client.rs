//! Building blocks of the command-line clients: a whitespace tokenizer over
//! any buffered reader and the client algorithms themselves, kept here so they
//! can be tested without spawning processes.

use std::io::BufRead;

use log::debug;

use crate::deque::Deque;
use crate::error::{Error, Result};
use crate::random::UniformRandom;
use crate::randomized_queue::RandomizedQueue;

/// Lazily splits a reader into whitespace-delimited tokens.
pub struct Tokens<R> {
    reader: R,
    pending: Deque<String>,
    line: String,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens { reader, pending: Deque::new(), line: String::new() }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        loop {
            if let Ok(token) = self.pending.remove_first() {
                return Some(Ok(token));
            }
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                // End of input
                Ok(0) => return None,
                Ok(_) => self.pending.extend(self.line.split_whitespace().map(String::from)),
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

// A seeded generator if asked for one, otherwise an unpredictable one
pub fn generator(seed: Option<u64>) -> UniformRandom {
    match seed {
        Some(seed) => {
            debug!("using seed {}", seed);
            UniformRandom::seeded(seed)
        }
        None => UniformRandom::new(),
    }
}

/// Reads every token into a randomized queue and dequeues `k` of them.
///
/// Fails with `Error::InvalidArgument` if fewer than `k` tokens were read.
pub fn permutation<T, I>(tokens: I, k: usize, random: UniformRandom) -> Result<Vec<T>>
where I: IntoIterator<Item = Result<T>> {
    let mut queue = RandomizedQueue::with_random(random);
    for token in tokens {
        queue.enqueue(token?);
    }
    debug!("read {} items, printing {}", queue.len(), k);

    if k > queue.len() {
        return Err(Error::InvalidArgument(
            format!("cannot print {} items, only {} were read", k, queue.len())));
    }
    (0..k).map(|_| queue.dequeue()).collect()
}

/// Picks one token uniformly at random in a single pass (Knuth's method):
/// the `i`th token replaces the current pick with probability `1/i`.
///
/// Returns an empty string if there are no tokens.
pub fn random_word<I>(tokens: I, random: &mut UniformRandom) -> Result<String>
where I: IntoIterator<Item = Result<String>> {
    let mut selected = String::new();
    let mut count: u64 = 0;
    for token in tokens {
        let token = token?;
        count += 1;
        if random.bernoulli(1.0 / count as f64)? {
            selected = token;
        }
    }
    debug!("picked {:?} out of {} words", selected, count);
    Ok(selected)
}

// Names in order for the greeting, reversed for the farewell
pub fn hello_goodbye(first: &str, second: &str) -> [String; 2] {
    [
        format!("Hello {} and {}.", first, second),
        format!("Goodbye {} and {}.", second, first),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};
    use super::*;

    fn tokens(input: &str) -> Tokens<Cursor<&str>> {
        Tokens::new(Cursor::new(input))
    }

    #[test]
    fn split_on_whitespace() {
        let words: Vec<String> = tokens("  to be\tor\n\nnot  to\r\nbe ")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(words, vec!["to", "be", "or", "not", "to", "be"]);
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens(" \n\t\n").count(), 0);
    }

    #[test]
    fn read_failure() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
            }
        }

        let mut tokens = Tokens::new(io::BufReader::new(Broken));
        assert!(matches!(tokens.next(), Some(Err(Error::Io(_)))));
    }

    #[test]
    fn permutation_prints_k() {
        let out = permutation(tokens("A B C D E F G H I"), 3, UniformRandom::seeded(1)).unwrap();
        assert_eq!(out.len(), 3);
        for item in &out {
            assert!("ABCDEFGHI".contains(item.as_str()));
        }
        // Without replacement
        assert!(out[0] != out[1] && out[1] != out[2] && out[0] != out[2]);
    }

    #[test]
    fn permutation_bounds() {
        let all = permutation(tokens("a b c"), 3, UniformRandom::seeded(2)).unwrap();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c"]);

        assert!(permutation(tokens("a b c"), 0, UniformRandom::seeded(2)).unwrap().is_empty());
        let err = permutation(tokens("a b c"), 4, UniformRandom::seeded(2)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn random_word_picks_an_input() {
        let mut random = UniformRandom::seeded(4);
        let word = random_word(tokens("heads tails"), &mut random).unwrap();
        assert!(word == "heads" || word == "tails");
        assert_eq!(random_word(tokens("only"), &mut random).unwrap(), "only");
        assert_eq!(random_word(tokens(""), &mut random).unwrap(), "");
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let a = permutation(tokens("1 2 3 4 5 6"), 6, generator(Some(8))).unwrap();
        let b = permutation(tokens("1 2 3 4 5 6"), 6, generator(Some(8))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn greeting() {
        let [hello, goodbye] = hello_goodbye("Kevin", "Bob");
        assert_eq!(hello, "Hello Kevin and Bob.");
        assert_eq!(goodbye, "Goodbye Bob and Kevin.");
    }
}
