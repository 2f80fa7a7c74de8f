//! theme names and ids
use {
    rand::{Rng, seq::IndexedRandom},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::fmt,
    tracing::warn,
};

/// length of generated ids and short-id names
pub const ID_LEN: usize = 6;

/// alphabet of generated ids
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// the default adjectives for generated names
pub const DEFAULT_ADJECTIVES: [&str; 12] = [
    "Neon",
    "Solar",
    "Velvet",
    "Quantum",
    "Crystal",
    "Aurora",
    "Midnight",
    "Prismatic",
    "Retro",
    "Electric",
    "Lunar",
    "Pixel",
];

/// the default nouns for generated names
pub const DEFAULT_NOUNS: [&str; 12] = [
    "Falcon", "Wave", "Blossom", "Pulse", "Forge", "Echo", "Nova", "Drift", "Spectrum", "Glide",
    "Breeze", "Matrix",
];

/// how a generated theme gets its name
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema, SmartDefault,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum NameStrategy {
    /// a random adjective and noun, e.g. `neon falcon`
    #[default]
    AdjectiveNoun,

    /// a short random token, e.g. `k3x9qa`
    #[serde(alias = "short-id")]
    #[cfg_attr(feature = "cli", value(alias = "short-id"))]
    Uuid,

    /// `theme-` followed by the current unix time in milliseconds
    Timestamp,
}

impl NameStrategy {
    /// parse a strategy, falling back to the default for anything unrecognized
    pub fn from_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "adjective-noun" | "adjective_noun" => Self::AdjectiveNoun,
            "uuid" | "short-id" | "short_id" | "id" => Self::Uuid,
            "timestamp" | "time" => Self::Timestamp,
            other => {
                if !other.is_empty() {
                    warn!(value = other, "unknown name strategy, using the default");
                }
                Self::default()
            }
        }
    }

    /// the config/cli token of this strategy
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdjectiveNoun => "adjective-noun",
            Self::Uuid => "uuid",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for NameStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// the word lists adjective-noun names are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    /// first words
    adjectives: Vec<String>,
    /// second words
    nouns: Vec<String>,
}

impl Default for WordLists {
    fn default() -> Self {
        Self {
            adjectives: DEFAULT_ADJECTIVES.iter().map(|s| s.to_string()).collect(),
            nouns: DEFAULT_NOUNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WordLists {
    /// make word lists, dropping anything that isn't a single word and replacing a list with
    /// nothing left in it by the defaults
    pub fn new(adjectives: Vec<String>, nouns: Vec<String>) -> Self {
        let defaults = Self::default();

        Self {
            adjectives: clean_words(adjectives).unwrap_or(defaults.adjectives),
            nouns: clean_words(nouns).unwrap_or(defaults.nouns),
        }
    }

    /// the adjectives
    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    /// the nouns
    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// pick a lower-cased `adjective noun` pair
    pub fn random_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let adjective = self.adjectives.choose(rng).map_or("random", String::as_str);
        let noun = self.nouns.choose(rng).map_or("theme", String::as_str);

        format!("{adjective} {noun}").to_lowercase()
    }
}

/// whether `word` is a single word made of ascii letters
pub fn is_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// trim words and drop anything that isn't a word, `None` when nothing is left
fn clean_words(words: Vec<String>) -> Option<Vec<String>> {
    let (cleaned, dropped): (Vec<String>, Vec<String>) = words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .partition(|w| is_word(w));

    if !dropped.is_empty() {
        warn!(?dropped, "ignoring entries that aren't single words");
    }

    (!cleaned.is_empty()).then_some(cleaned)
}

/// a short lowercase base36 token, not meant to be unique beyond a ui session
pub fn simple_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(*ID_ALPHABET.choose(rng).unwrap_or(&b'0')))
        .collect()
}

/// generate a theme name with the given strategy
pub fn generate_name<R: Rng + ?Sized>(
    strategy: NameStrategy,
    words: &WordLists,
    rng: &mut R,
) -> String {
    match strategy {
        NameStrategy::AdjectiveNoun => words.random_name(rng),
        NameStrategy::Uuid => simple_id(rng),
        NameStrategy::Timestamp => format!("theme-{}", chrono::Utc::now().timestamp_millis()),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rand::{SeedableRng, rngs::StdRng},
    };

    fn is_lower_word(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase())
    }

    #[test]
    fn test_adjective_noun_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let words = WordLists::default();

        for _ in 0..200 {
            let name = generate_name(NameStrategy::AdjectiveNoun, &words, &mut rng);
            let (adj, noun) = name.split_once(' ').unwrap();

            assert!(is_lower_word(adj) && is_lower_word(noun), "{name}");
            assert!(DEFAULT_ADJECTIVES.iter().any(|a| a.to_lowercase() == adj));
            assert!(DEFAULT_NOUNS.iter().any(|n| n.to_lowercase() == noun));
        }
    }

    #[test]
    fn test_uuid_shape() {
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..200 {
            let name = generate_name(NameStrategy::Uuid, &WordLists::default(), &mut rng);
            assert_eq!(name.len(), ID_LEN);
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn test_timestamp_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = generate_name(NameStrategy::Timestamp, &WordLists::default(), &mut rng);
        let millis = name.strip_prefix("theme-").unwrap();

        assert!(millis.parse::<i64>().unwrap() > 1_600_000_000_000);
    }

    #[test]
    fn test_blank_lists_fall_back() {
        let words = WordLists::new(vec!["  ".into()], vec![" Otter ".into()]);
        assert_eq!(words.adjectives().len(), DEFAULT_ADJECTIVES.len());
        assert_eq!(words.nouns(), ["Otter".to_string()]);

        let mut rng = StdRng::seed_from_u64(8);
        assert!(words.random_name(&mut rng).ends_with(" otter"));
    }

    #[test]
    fn test_invalid_words_are_dropped() {
        let words = WordLists::new(
            vec!["Deep Sea".into(), "Calm".into()],
            vec!["Otter2".into(), "x-ray".into()],
        );
        assert_eq!(words.adjectives(), ["Calm".to_string()]);
        assert_eq!(words.nouns().len(), DEFAULT_NOUNS.len());

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let name = words.random_name(&mut rng);
            let (adj, noun) = name.split_once(' ').unwrap();
            assert_eq!(adj, "calm");
            assert!(is_lower_word(noun), "{name}");
        }
    }

    #[test]
    fn test_lenient_strategy_parsing() {
        assert_eq!(NameStrategy::from_lenient("UUID"), NameStrategy::Uuid);
        assert_eq!(NameStrategy::from_lenient("short-id"), NameStrategy::Uuid);
        assert_eq!(NameStrategy::from_lenient("timestamp"), NameStrategy::Timestamp);
        assert_eq!(NameStrategy::from_lenient("banana"), NameStrategy::AdjectiveNoun);
        assert_eq!(NameStrategy::from_lenient(""), NameStrategy::AdjectiveNoun);
    }
}
