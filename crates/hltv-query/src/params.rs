//! Wire-ready query parameters.

/// Parameter names understood by the results listing.
pub mod keys {
    /// Result offset into the listing.
    pub const OFFSET: &str = "offset";
    /// First day of the range (inclusive).
    pub const START_DATE: &str = "startDate";
    /// Last day of the range (inclusive).
    pub const END_DATE: &str = "endDate";
    /// `de_`-prefixed map name, repeated.
    pub const MAP: &str = "map";
    /// Event id, repeated.
    pub const EVENT: &str = "event";
    /// Player id, repeated.
    pub const PLAYER: &str = "player";
    /// Team id, repeated.
    pub const TEAM: &str = "team";
    /// Star rating.
    pub const STARS: &str = "stars";
    /// LAN or online.
    pub const MATCH_TYPE: &str = "matchType";
    /// Presence flag: every listed team must play.
    pub const REQUIRE_ALL_TEAMS: &str = "requireAllTeams";
    /// Presence flag: every listed player must play.
    pub const REQUIRE_ALL_PLAYERS: &str = "requireAllPlayers";
}

/// Value sent for presence-only flags. The site only checks that the key exists.
pub const FLAG_VALUE: &str = "true";

/// Ordered list of `(key, value)` pairs; list filters appear once per value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a pair.
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Appends one pair per value.
    pub fn extend<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// Returns a copy with the `offset` parameter first.
    #[must_use]
    pub fn with_offset(&self, offset: usize) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        pairs.push((keys::OFFSET.to_string(), offset.to_string()));
        pairs.extend(
            self.pairs
                .iter()
                .filter(|(key, _)| key != keys::OFFSET)
                .cloned(),
        );
        Self { pairs }
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if `key` is present at all.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns the pairs as a slice.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
