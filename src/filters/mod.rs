//! Typed search filters and their query-pair serialization.
//!
//! The form collaborator collects a handful of optional filters; the
//! transport collaborator sends them to the backend as query parameters. The
//! parameter set is opaque to ranking, but building it in one place keeps
//! the name/format drift out of the UI code. Role-restricted person search
//! is whitelisted against the known catalog columns; an unrecognized role
//! falls back to searching every person column, matching the backend's own
//! fallback.

use serde::{Deserialize, Serialize};

/// Person-role columns the catalog actually has. A requested role is
/// normalized (lowercased, parentheses stripped, so `"realisateur(s)"`
/// style labels match) and must land in this list to be forwarded.
pub const VALID_ROLE_COLUMNS: &[&str] = &[
    "realisateurs",
    "producteurs",
    "acteurs",
    "diffuseurs",
    "scenaristes",
];

/// One search request's worth of user-entered filters.
///
/// Empty strings are treated the same as absent filters; the form layer
/// does not trim or validate beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Title search term; also drives client-side similarity ranking.
    pub title: Option<String>,
    /// Registration year.
    pub year: Option<String>,
    /// Metrage type (long / short).
    #[serde(rename = "type")]
    pub metrage_type: Option<String>,
    /// Minimum budget in euros.
    pub budget_min: Option<u64>,
    /// Person name, searched across the role columns.
    pub person: Option<String>,
    /// Optional role restricting the person search to one column.
    pub role: Option<String>,
    /// Freeform keywords matched against the synopsis.
    pub keywords: Option<String>,
    /// Production company or nationality.
    pub production: Option<String>,
    /// Genre.
    pub genre: Option<String>,
}

impl SearchFilters {
    /// Filters containing only a title term.
    pub fn for_title<S: Into<String>>(title: S) -> Self {
        SearchFilters {
            title: Some(title.into()),
            ..SearchFilters::default()
        }
    }

    /// The term client-side ranking compares titles against.
    pub fn search_term(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Whether no filter is set at all.
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// The role normalized against [`VALID_ROLE_COLUMNS`], or `None` when
    /// the role is absent or unrecognized (person search then spans all
    /// role columns).
    pub fn normalized_role(&self) -> Option<&'static str> {
        let role = self.role.as_deref()?;
        let normalized: String = role
            .chars()
            .filter(|c| *c != '(' && *c != ')')
            .collect::<String>()
            .to_lowercase();

        VALID_ROLE_COLUMNS
            .iter()
            .find(|col| **col == normalized)
            .copied()
    }

    /// Serialize the set filters as query pairs for the transport
    /// collaborator. Encoding is the transport's concern. The role pair is
    /// only emitted alongside a person, never on its own.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_pair(&mut pairs, "title", &self.title);
        push_pair(&mut pairs, "year", &self.year);
        push_pair(&mut pairs, "type", &self.metrage_type);
        if let Some(budget) = self.budget_min {
            pairs.push(("budget", budget.to_string()));
        }
        push_pair(&mut pairs, "keywords", &self.keywords);
        push_pair(&mut pairs, "production", &self.production);
        push_pair(&mut pairs, "genre", &self.genre);

        if let Some(person) = self.person.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("intervenant", person.to_string()));
            if let Some(role) = self.normalized_role() {
                pairs.push(("role", role.to_string()));
            }
        }

        pairs
    }
}

fn push_pair(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value
        && !value.is_empty()
    {
        pairs.push((key, value.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        let filters = SearchFilters::default();
        assert!(filters.is_empty());
        assert!(filters.to_query_pairs().is_empty());
    }

    #[test]
    fn test_title_only() {
        let filters = SearchFilters::for_title("Matrix");
        assert_eq!(filters.search_term(), "Matrix");
        assert_eq!(
            filters.to_query_pairs(),
            vec![("title", "Matrix".to_string())]
        );
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let filters = SearchFilters {
            title: Some(String::new()),
            genre: Some(String::new()),
            ..SearchFilters::default()
        };
        assert!(filters.is_empty());
        assert_eq!(filters.search_term(), "");
    }

    #[test]
    fn test_role_normalization() {
        let filters = SearchFilters {
            person: Some("Mathieu Kassovitz".into()),
            role: Some("Réalisateur(s)".into()),
            ..SearchFilters::default()
        };
        // The accented label is not a catalog column name.
        assert_eq!(filters.normalized_role(), None);

        let filters = SearchFilters {
            role: Some("realisateur(s)".into()),
            ..SearchFilters::default()
        };
        assert_eq!(filters.normalized_role(), Some("realisateurs"));

        let filters = SearchFilters {
            role: Some("PRODUCTEURS".into()),
            ..SearchFilters::default()
        };
        assert_eq!(filters.normalized_role(), Some("producteurs"));
    }

    #[test]
    fn test_unknown_role_is_dropped_from_pairs() {
        let filters = SearchFilters {
            person: Some("Kassovitz".into()),
            role: Some("cascadeur".into()),
            ..SearchFilters::default()
        };

        let pairs = filters.to_query_pairs();
        assert_eq!(pairs, vec![("intervenant", "Kassovitz".to_string())]);
    }

    #[test]
    fn test_role_without_person_is_not_emitted() {
        let filters = SearchFilters {
            role: Some("producteurs".into()),
            ..SearchFilters::default()
        };
        assert!(filters.to_query_pairs().is_empty());
    }

    #[test]
    fn test_full_filter_set() {
        let filters = SearchFilters {
            title: Some("Amélie".into()),
            year: Some("2001".into()),
            metrage_type: Some("Long".into()),
            budget_min: Some(1_000_000),
            person: Some("Jeunet".into()),
            role: Some("realisateur(s)".into()),
            keywords: Some("Montmartre".into()),
            production: Some("UGC".into()),
            genre: Some("Comédie".into()),
        };

        let pairs = filters.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("title", "Amélie".to_string()),
                ("year", "2001".to_string()),
                ("type", "Long".to_string()),
                ("budget", "1000000".to_string()),
                ("keywords", "Montmartre".to_string()),
                ("production", "UGC".to_string()),
                ("genre", "Comédie".to_string()),
                ("intervenant", "Jeunet".to_string()),
                ("role", "realisateurs".to_string()),
            ]
        );
    }
}
