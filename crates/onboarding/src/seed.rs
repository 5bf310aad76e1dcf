//! Seed phrases and the sources that produce them.
//!
//! Neither source derives keys. [`RandomSeed`] draws one byte per word from
//! the thread RNG and maps it onto a 256-entry list, which is enough for a
//! phrase the user has to copy and re-enter but is not a BIP-39 mnemonic.

use std::fmt;

use {
    pursue_config::SeedSourceKind,
    serde::{Deserialize, Serialize},
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

use crate::wordlist::WORDLIST;

/// Number of words in every generated phrase.
pub const SEED_WORD_COUNT: usize = 12;

/// Ordered seed words. Cleared from memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SeedPhrase {
    words: Vec<String>,
}

impl SeedPhrase {
    /// Wrap an arbitrary word list. Generators always pass exactly
    /// [`SEED_WORD_COUNT`] words; restored state may carry any number.
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the phrase has exactly [`SEED_WORD_COUNT`] words.
    pub fn is_complete(&self) -> bool {
        self.words.len() == SEED_WORD_COUNT
    }

    /// Word at a 1-indexed position, the way it is shown to the user.
    pub fn word(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.words.get(i))
            .map(String::as_str)
    }
}

impl fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedPhrase([{} words redacted])", self.words.len())
    }
}

/// Produces a fresh seed phrase for each identity-creation attempt.
pub trait SeedSource: Send + Sync {
    fn generate(&self) -> SeedPhrase;
}

/// The fixed phrase shipped with the app's first release.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSeed;

const PLACEHOLDER_WORDS: [&str; SEED_WORD_COUNT] = [
    "example", "words", "here", "from", "the", "seed", "another", "set", "of", "recovery", "phrase",
    "words",
];

impl SeedSource for PlaceholderSeed {
    fn generate(&self) -> SeedPhrase {
        SeedPhrase::from_words(PLACEHOLDER_WORDS.iter().map(|w| w.to_string()).collect())
    }
}

/// Twelve words picked with the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeed;

impl SeedSource for RandomSeed {
    fn generate(&self) -> SeedPhrase {
        use rand::RngCore;

        let mut entropy = Zeroizing::new([0u8; SEED_WORD_COUNT]);
        rand::rng().fill_bytes(entropy.as_mut_slice());

        SeedPhrase::from_words(
            entropy
                .iter()
                .map(|byte| WORDLIST[usize::from(*byte)].to_string())
                .collect(),
        )
    }
}

/// Build the source selected in config.
pub fn source_for(kind: SeedSourceKind) -> Box<dyn SeedSource> {
    match kind {
        SeedSourceKind::Placeholder => Box::new(PlaceholderSeed),
        SeedSourceKind::Random => Box::new(RandomSeed),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashSet};

    #[test]
    fn placeholder_matches_shipped_phrase() {
        let seed = PlaceholderSeed.generate();
        assert_eq!(seed.len(), SEED_WORD_COUNT);
        assert_eq!(seed.word(3), Some("here"));
        assert_eq!(seed.word(7), Some("another"));
        assert_eq!(seed.word(11), Some("phrase"));
    }

    #[test]
    fn random_phrase_has_twelve_listed_words() {
        let seed = RandomSeed.generate();
        assert_eq!(seed.len(), SEED_WORD_COUNT);
        assert!(seed.is_complete());
        for word in seed.words() {
            assert!(WORDLIST.contains(&word.as_str()), "{word} not in list");
        }
    }

    #[test]
    fn random_phrases_differ() {
        // 96 bits each; a collision here means the RNG is broken.
        assert_ne!(RandomSeed.generate(), RandomSeed.generate());
    }

    #[test]
    fn wordlist_entries_are_unique() {
        let unique: HashSet<_> = WORDLIST.iter().collect();
        assert_eq!(unique.len(), WORDLIST.len());
    }

    #[test]
    fn word_positions_are_one_indexed() {
        let seed = SeedPhrase::from_words(vec!["a".into(), "b".into()]);
        assert_eq!(seed.word(0), None);
        assert_eq!(seed.word(1), Some("a"));
        assert_eq!(seed.word(2), Some("b"));
        assert_eq!(seed.word(3), None);
        assert!(!seed.is_complete());
    }

    #[test]
    fn extra_words_are_not_complete() {
        let mut words: Vec<String> = PlaceholderSeed.generate().words().to_vec();
        words.push("extra".into());
        assert!(!SeedPhrase::from_words(words).is_complete());
    }

    #[test]
    fn debug_output_hides_words() {
        let rendered = format!("{:?}", PlaceholderSeed.generate());
        assert_eq!(rendered, "SeedPhrase([12 words redacted])");
        assert!(!rendered.contains("recovery"));
    }

    #[test]
    fn serializes_as_plain_list() {
        let seed = SeedPhrase::from_words(vec!["alpha".into(), "beta".into()]);
        let json = serde_json::to_value(&seed).unwrap();
        assert_eq!(json, serde_json::json!(["alpha", "beta"]));
        let back: SeedPhrase = serde_json::from_value(json).unwrap();
        assert_eq!(back, seed);
    }

    #[test]
    fn source_for_config_kind() {
        assert_eq!(
            source_for(SeedSourceKind::Placeholder).generate(),
            PlaceholderSeed.generate()
        );
        assert_eq!(source_for(SeedSourceKind::Random).generate().len(), 12);
    }
}
