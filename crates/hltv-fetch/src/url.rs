//! Site endpoints and URL construction.

use hltv_query::SearchKind;

/// Origin of the site.
pub const BASE_URL: &str = "https://www.hltv.org";

/// Slug appended to detail URLs. The site routes on the numeric id and
/// ignores the slug, so any non-empty segment works.
pub const PLACEHOLDER_SLUG: &str = "x";

/// Immutable description of the site's endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin, without trailing slash.
    pub base_url: String,
    /// Results listing.
    pub results_path: String,
    /// Match overview pages, followed by `/<id>/<slug>`.
    pub matches_path: String,
    /// Map economy pages, followed by `/<map stats id>/<slug>`.
    pub economy_path: String,
    /// Team search endpoint.
    pub search_team_path: String,
    /// Player search endpoint.
    pub search_player_path: String,
    /// Event search endpoint.
    pub search_event_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            results_path: "results".to_string(),
            matches_path: "matches".to_string(),
            economy_path: "stats/matches/mapstatsid".to_string(),
            search_team_path: "searchTeam".to_string(),
            search_player_path: "searchPlayer".to_string(),
            search_event_path: "searchEvent".to_string(),
        }
    }
}

impl SiteConfig {
    /// Creates a config pointing at another origin, keeping the default paths.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// URL of the results listing.
    ///
    /// ```
    /// use hltv_fetch::url::SiteConfig;
    ///
    /// assert_eq!(SiteConfig::default().results_url(), "https://www.hltv.org/results");
    /// ```
    #[must_use]
    pub fn results_url(&self) -> String {
        self.join(&self.results_path)
    }

    /// URL of a match overview page.
    ///
    /// ```
    /// use hltv_fetch::url::SiteConfig;
    ///
    /// let url = SiteConfig::default().match_url(2350368);
    /// assert_eq!(url, "https://www.hltv.org/matches/2350368/x");
    /// ```
    #[must_use]
    pub fn match_url(&self, match_id: u64) -> String {
        format!("{}/{match_id}/{PLACEHOLDER_SLUG}", self.join(&self.matches_path))
    }

    /// URL of the economy page of one played map.
    #[must_use]
    pub fn economy_url(&self, map_stats_id: u64) -> String {
        format!(
            "{}/{map_stats_id}/{PLACEHOLDER_SLUG}",
            self.join(&self.economy_path)
        )
    }

    /// URL of the search endpoint for `kind`.
    #[must_use]
    pub fn search_url(&self, kind: SearchKind) -> String {
        let path = match kind {
            SearchKind::Team => &self.search_team_path,
            SearchKind::Player => &self.search_player_path,
            SearchKind::Event => &self.search_event_path,
        };
        self.join(path)
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }
}
