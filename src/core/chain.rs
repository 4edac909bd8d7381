/// Transition table — per-word outgoing-edge statistics and text ingestion.

use rustc_hash::FxHashMap;

/// Characters that terminate a sentence in ingested or generated text.
pub const SENTENCE_ENDERS: &[char] = &['.', '!', '?'];

/// Outgoing-edge statistics for one word observed as a predecessor.
///
/// `related` keeps successors in first-observation order; updates probe it
/// linearly, which is fine for the short rows natural language produces.
/// `compiled` is the lazily built cumulative distribution: `None` means the
/// entry is dirty and must be recompiled before the next draw.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    /// Sum of all outgoing observation counts.
    pub(crate) total: u32,
    /// Successor word → observation count, in first-observation order.
    pub(crate) related: Vec<(String, u32)>,
    /// Cumulative distribution: strictly increasing `(threshold, word)`
    /// pairs. Rebuilt on demand, never serialized.
    pub(crate) compiled: Option<Vec<(u32, String)>>,
}

impl Entry {
    /// Sum of all outgoing observation counts.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Successor words and their counts, in first-observation order.
    pub fn related(&self) -> &[(String, u32)] {
        &self.related
    }

    /// Whether the cumulative distribution is current.
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }
}

/// A first-order word-transition model: word → outgoing-edge statistics,
/// plus aggregate counters.
///
/// Purely synchronous and single-threaded; every mutating or cache-filling
/// operation takes `&mut self`, so concurrent mutation and sampling on one
/// model is ruled out at compile time. Multiple models coexist freely —
/// there is no shared module state.
#[derive(Debug, Clone, Default)]
pub struct ChainModel {
    pub(crate) entries: FxHashMap<String, Entry>,
    pub(crate) edge_count: u64,
    pub(crate) has_sentence_boundary: bool,
}

impl ChainModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one observation of `second` following `first`.
    ///
    /// Creates the entry for `first` (and the counter for `second`) if
    /// absent, bumps the entry's `total` and the model's edge count, and
    /// marks the entry dirty. Also registers `second` as a key so trailing
    /// words of an ingested text are part of the model; such entries stay
    /// at `total == 0` until observed as predecessors themselves.
    pub fn observe(&mut self, first: &str, second: &str) {
        let entry = self.entries.entry(first.to_string()).or_default();
        match entry.related.iter_mut().find(|(word, _)| word == second) {
            Some((_, count)) => *count += 1,
            None => entry.related.push((second.to_string(), 1)),
        }
        entry.total += 1;
        entry.compiled = None;
        self.edge_count += 1;
        self.entries.entry(second.to_string()).or_default();
    }

    /// Ingests raw text: tokenizes on whitespace and observes every
    /// consecutive token pair in order.
    ///
    /// Runs of whitespace collapse to single separators; empty tokens are
    /// discarded. Fewer than two tokens is a silent no-op — degenerate
    /// input is expected, not an error. The sentence-boundary probe runs
    /// on the untokenized text first, so punctuation attached to words
    /// still counts.
    pub fn ingest_text(&mut self, text: &str) {
        if !self.has_sentence_boundary && text.contains(SENTENCE_ENDERS) {
            self.has_sentence_boundary = true;
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 2 {
            return;
        }
        for pair in tokens.windows(2) {
            self.observe(pair[0], pair[1]);
        }
    }

    /// Whether `word` is a key of the model.
    pub fn has(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Borrow the entry for `word`, if present.
    pub fn entry(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total observation pairs ever recorded.
    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// True once any ingested text contained `.`, `!`, or `?`.
    pub fn has_sentence_boundary(&self) -> bool {
        self.has_sentence_boundary
    }

    /// Clears all entries, counters, and the sentence-boundary flag.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.edge_count = 0;
        self.has_sentence_boundary = false;
    }

    /// Eagerly compiles every entry's distribution.
    ///
    /// The one global pass; everywhere else compilation stays lazy.
    pub fn finalize(&mut self) {
        for entry in self.entries.values_mut() {
            entry.compile(false);
        }
    }
}
