//! Whitespace tokenization and per-token case classification.

/// Case class of a single feed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCase {
    /// The token has alphabetic content and all of it is uppercase.
    Upper,
    /// Anything else, including tokens with no alphabetic content at all.
    Mixed,
}

impl TokenCase {
    /// Classifies a token by its alphabetic characters only, so punctuation
    /// inside a token ("O'CONNOR", "N.") does not affect the verdict.
    ///
    /// # Examples
    /// ```
    /// use rider_names::TokenCase;
    ///
    /// assert_eq!(TokenCase::classify("POEL"), TokenCase::Upper);
    /// assert_eq!(TokenCase::classify("O'CONNOR"), TokenCase::Upper);
    /// assert_eq!(TokenCase::classify("Mathieu"), TokenCase::Mixed);
    /// assert_eq!(TokenCase::classify("123"), TokenCase::Mixed);
    /// ```
    pub fn classify(token: &str) -> Self {
        let mut saw_alphabetic = false;
        for ch in token.chars() {
            if !ch.is_alphabetic() {
                continue;
            }
            if !ch.is_uppercase() {
                return TokenCase::Mixed;
            }
            saw_alphabetic = true;
        }
        if saw_alphabetic {
            TokenCase::Upper
        } else {
            TokenCase::Mixed
        }
    }

    /// Returns true for [`TokenCase::Upper`].
    pub fn is_upper(self) -> bool {
        self == TokenCase::Upper
    }
}

/// Splits a raw feed string into whitespace-delimited tokens.
///
/// Runs of whitespace collapse and never produce empty tokens. Apostrophes
/// and hyphens stay inside their token; they are word-internal characters,
/// not separators.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Length of the maximal prefix of tokens that are all [`TokenCase::Upper`],
/// starting at the first token.
///
/// # Examples
/// ```
/// use rider_names::normalizer::{leading_upper_run, tokenize};
///
/// let tokens = tokenize("VAN DER POEL Mathieu");
/// assert_eq!(leading_upper_run(&tokens), 3);
///
/// let tokens = tokenize("Loana lecomte");
/// assert_eq!(leading_upper_run(&tokens), 0);
/// ```
pub fn leading_upper_run(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .take_while(|token| TokenCase::classify(token).is_upper())
        .count()
}
