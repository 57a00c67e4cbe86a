use std::fmt;

use thiserror::Error;

/// An error which may occur when configuring wildcard symbols.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("wildcard symbols must differ, got {0:?} for both")]
    AmbiguousWildcards(char),
}

/// The pair of symbols acting as metacharacters in a pattern.
///
/// Defaults to `?` for the single-character wildcard and `*` for the
/// zero-or-more-characters wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wildcards {
    single: char,
    multi: char,
}

impl Wildcards {
    /// Creates a wildcard configuration from the given symbols.
    ///
    /// The two symbols must be distinct; with a shared symbol every
    /// occurrence would be ambiguous and matching semantics undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmatch::Wildcards;
    ///
    /// let sql = Wildcards::new('_', '%').unwrap();
    /// assert_eq!(sql.single(), '_');
    /// assert_eq!(sql.multi(), '%');
    ///
    /// assert!(Wildcards::new('*', '*').is_err());
    /// ```
    pub fn new(single: char, multi: char) -> Result<Self, Error> {
        if single == multi {
            return Err(Error::AmbiguousWildcards(single));
        }
        Ok(Self { single, multi })
    }

    /// The symbol matching exactly one character.
    pub fn single(&self) -> char {
        self.single
    }

    /// The symbol matching zero or more characters.
    pub fn multi(&self) -> char {
        self.multi
    }
}

impl Default for Wildcards {
    fn default() -> Self {
        Self { single: '?', multi: '*' }
    }
}

/// A wildcard pattern for matching text strings.
///
/// Patterns are plain strings where two configured symbols act as
/// metacharacters:
/// - `*` (by default) matches zero or more characters
/// - `?` (by default) matches exactly one character
///
/// All other characters are literal and compared by exact code point
/// equality; there is no case folding and no way to escape the wildcard
/// symbols.
///
/// # Examples
///
/// ```
/// use wildmatch::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log");
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Pattern {
    chars: Vec<char>,
    wildcards: Wildcards,
}

impl Pattern {
    /// Creates a new pattern with the default `?`/`*` wildcards.
    ///
    /// This function is infallible; all input strings are valid patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmatch::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("hello world"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::with_wildcards(raw, Wildcards::default())
    }

    /// Creates a new pattern with custom wildcard symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmatch::{Pattern, Wildcards};
    ///
    /// let sql = Wildcards::new('_', '%').unwrap();
    /// let pattern = Pattern::with_wildcards("h_llo%", sql);
    /// assert!(pattern.matches("hello world"));
    /// assert!(!pattern.matches("hllo world"));
    /// ```
    pub fn with_wildcards(raw: impl AsRef<str>, wildcards: Wildcards) -> Self {
        Self {
            chars: raw.as_ref().chars().collect(),
            wildcards,
        }
    }

    /// Tests whether the pattern matches the given subject.
    ///
    /// Returns `true` if the entire subject matches the pattern.
    ///
    /// Adversarial patterns with many multi wildcards stay polynomial: the
    /// search queues each cursor pair at most once, so total work is bounded
    /// by the product of the subject and pattern lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmatch::Pattern;
    ///
    /// let pattern = Pattern::new("*This is *test *!");
    /// assert!(pattern.matches("This is a test string!"));
    ///
    /// let pattern = Pattern::new("a?c");
    /// assert!(pattern.matches("abc"));
    /// assert!(!pattern.matches("abdc"));
    /// ```
    pub fn matches(&self, subject: &str) -> bool {
        let subject: Vec<char> = subject.chars().collect();
        Search::new(&subject, &self.chars, self.wildcards).run()
    }

    /// Tests an optional subject, where an absent subject never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmatch::Pattern;
    ///
    /// let pattern = Pattern::new("*");
    /// assert!(pattern.matches_opt(Some("anything")));
    /// assert!(!pattern.matches_opt(None));
    /// ```
    pub fn matches_opt(&self, subject: Option<&str>) -> bool {
        subject.is_some_and(|subject| self.matches(subject))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// A cursor pair: subject consumed up to `subject`, pattern consumed up to
/// `pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct State {
    subject: usize,
    pattern: usize,
}

/// Dense (n+1)×(m+1) grid of states already queued for exploration.
///
/// A state enters the grid at most once and is never queued again, which
/// bounds the whole search to O(n·m) queued states no matter how many multi
/// wildcards the pattern contains.
struct Visited {
    width: usize,
    cells: Vec<bool>,
}

impl Visited {
    fn new(n: usize, m: usize) -> Self {
        Self {
            width: m + 1,
            cells: vec![false; (n + 1) * (m + 1)],
        }
    }

    /// Marks the state, returning `false` if it was already present.
    fn insert(&mut self, state: State) -> bool {
        let cell = &mut self.cells[state.subject * self.width + state.pattern];
        !std::mem::replace(cell, true)
    }
}

struct Search<'a> {
    subject: &'a [char],
    pattern: &'a [char],
    wildcards: Wildcards,
    visited: Visited,
    stack: Vec<State>,
}

impl<'a> Search<'a> {
    fn new(subject: &'a [char], pattern: &'a [char], wildcards: Wildcards) -> Self {
        Self {
            subject,
            pattern,
            wildcards,
            visited: Visited::new(subject.len(), pattern.len()),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> bool {
        let start = self.scan(State::default());
        self.offer(start);

        while let Some(state) = self.stack.pop() {
            if state.pattern == self.pattern.len() {
                if state.subject == self.subject.len() {
                    return true;
                }
                // Pattern exhausted with subject characters left over.
                continue;
            }
            if state.pattern == self.pattern.len() - 1 {
                // Queued states below the pattern end always point at a
                // multi wildcard, and a trailing one absorbs any remaining
                // subject suffix.
                return true;
            }
            for offset in state.subject..=self.subject.len() {
                let next = self.scan(State {
                    subject: offset,
                    pattern: state.pattern + 1,
                });
                self.offer(next);
            }
        }

        false
    }

    /// Advances both cursors while pattern characters consume subject
    /// characters one-to-one, stopping at a mismatch, a multi wildcard, or
    /// either end.
    fn scan(&self, mut state: State) -> State {
        while state.subject < self.subject.len()
            && state.pattern < self.pattern.len()
            && self.pattern[state.pattern] != self.wildcards.multi
            && (self.subject[state.subject] == self.pattern[state.pattern]
                || self.pattern[state.pattern] == self.wildcards.single)
        {
            state.subject += 1;
            state.pattern += 1;
        }
        state
    }

    /// Queues a state when it sits on a decision boundary, either the end of
    /// the pattern or a multi wildcard, and has not been queued before.
    fn offer(&mut self, state: State) {
        let boundary = state.pattern == self.pattern.len()
            || self.pattern[state.pattern] == self.wildcards.multi;
        if boundary && self.visited.insert(state) {
            self.stack.push(state);
        }
    }
}
