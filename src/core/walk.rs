/// Generation — weighted random walks producing words and sentences.

use rand::seq::IteratorRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::chain::{ChainModel, SENTENCE_ENDERS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("count must be a positive integer, got {0}")]
    InvalidCount(usize),
    #[error("cannot generate from an empty model")]
    EmptyModel,
    #[error("model has no sentence boundaries; sentence generation is unsupported")]
    NoSentenceBoundary,
}

/// Whether a word carries a sentence-terminating character.
fn ends_sentence(word: &str) -> bool {
    word.contains(SENTENCE_ENDERS)
}

impl ChainModel {
    /// Produces the word following `current`, or a fresh starting word.
    ///
    /// With `current == None`, returns a uniformly random key of the model
    /// (unweighted by traffic) to seed a walk. With a known word, draws a
    /// weighted successor from its entry; `None` means a dead end. With a
    /// word the model has never seen, returns `None`.
    ///
    /// # Errors
    /// `EmptyModel` if the model has zero entries.
    pub fn next_word<R: Rng>(
        &mut self,
        current: Option<&str>,
        rng: &mut R,
    ) -> Result<Option<String>, GenerateError> {
        if self.entries.is_empty() {
            return Err(GenerateError::EmptyModel);
        }
        match current {
            None => Ok(self.entries.keys().choose(rng).cloned()),
            Some(word) => match self.entries.get_mut(word) {
                Some(entry) => Ok(entry.draw(rng).map(str::to_owned)),
                None => Ok(None),
            },
        }
    }

    /// Generates up to `count` words by walking the model.
    ///
    /// `start`, when given, is prepended to the output before the first
    /// call to [`next_word`](Self::next_word). On a dead end the walk
    /// either stops early (`halt_on_dead_end`) or re-seeds from a random
    /// key and keeps going; re-seeding emits the new key, so the
    /// non-halting walk always returns exactly `count` words.
    ///
    /// # Errors
    /// `InvalidCount` when `count` is zero, `EmptyModel` on a model with
    /// no entries. Errors are raised before any state is touched.
    pub fn generate_words<R: Rng>(
        &mut self,
        count: usize,
        start: Option<&str>,
        halt_on_dead_end: bool,
        rng: &mut R,
    ) -> Result<Vec<String>, GenerateError> {
        if count == 0 {
            return Err(GenerateError::InvalidCount(count));
        }
        if self.entries.is_empty() {
            return Err(GenerateError::EmptyModel);
        }

        let mut words = Vec::with_capacity(count);
        let mut current: Option<String> = start.map(str::to_owned);
        if let Some(seed) = &current {
            words.push(seed.clone());
        }

        while words.len() < count {
            match self.next_word(current.as_deref(), rng)? {
                Some(word) => {
                    words.push(word.clone());
                    current = Some(word);
                }
                None if halt_on_dead_end => break,
                None => current = None,
            }
        }
        Ok(words)
    }

    /// Generates `count` sentences' worth of words.
    ///
    /// Every word produced by the walk is tested for a sentence
    /// terminator (`.`, `!`, `?`) and `count` decrements only on a match;
    /// a prepended `start` is emitted untested. Dead ends always re-seed.
    /// If the distribution never yields a terminator the walk does not
    /// terminate — an accepted property of the sampled data, not guarded
    /// against here.
    ///
    /// # Errors
    /// `NoSentenceBoundary` when no ingested text ever contained a
    /// terminator, `InvalidCount` when `count` is zero, `EmptyModel` on a
    /// model with no entries.
    pub fn generate_sentences<R: Rng>(
        &mut self,
        count: usize,
        start: Option<&str>,
        rng: &mut R,
    ) -> Result<Vec<String>, GenerateError> {
        if !self.has_sentence_boundary {
            return Err(GenerateError::NoSentenceBoundary);
        }
        if count == 0 {
            return Err(GenerateError::InvalidCount(count));
        }
        if self.entries.is_empty() {
            return Err(GenerateError::EmptyModel);
        }

        let mut words = Vec::new();
        let mut current: Option<String> = start.map(str::to_owned);
        if let Some(seed) = &current {
            words.push(seed.clone());
        }

        let mut remaining = count;
        while remaining > 0 {
            match self.next_word(current.as_deref(), rng)? {
                Some(word) => {
                    if ends_sentence(&word) {
                        remaining -= 1;
                    }
                    words.push(word.clone());
                    current = Some(word);
                }
                None => current = None,
            }
        }
        Ok(words)
    }
}
