//! Alias tables for the catalog's logical fields.
//!
//! One ordered table per logical field, earlier spellings preferred. These
//! mirror the key variants actually observed across the catalog's data
//! sources; tolerant lookup over them replaces ad hoc per-call-site
//! conditionals.

/// Title. The one field every row is expected to carry.
pub const TITLE: &[&str] = &["titre"];

/// Registration date.
pub const REGISTRATION_DATE: &[&str] = &[
    "dateimmatriculation",
    "date_immatriculation",
    "dateImmatriculation",
];

/// Budget. `devis` doubles as an estimate amount in older rows.
pub const BUDGET: &[&str] = &["budget", "devis", "devis_global"];

/// Production company, falling back to nationality.
pub const PRODUCTION: &[&str] = &["production", "producteur_delegue", "nationalite", "pays"];

/// Genre or metrage category.
pub const GENRE: &[&str] = &["genre", "categorie", "type_de_metrage", "typemetrage"];

/// Synopsis, preferring the TMDB-enriched variant.
pub const SYNOPSIS: &[&str] = &["synopsis_tmdb", "synopsis"];

/// Director list.
pub const DIRECTORS: &[&str] = &["realisateurs", "realisateur", "realisateur_s"];

/// Writer list.
pub const WRITERS: &[&str] = &["scenaristes", "scenariste", "scenariste_s"];

/// Producer list.
pub const PRODUCERS: &[&str] = &["producteurs", "producteur", "producteur_s"];

/// Cast list.
pub const CAST: &[&str] = &["acteurs", "acteur", "acteur_s"];

/// Financing-plan document path. The backend writes this key
/// unconditionally, so a single alias suffices.
pub const FINANCING_PLAN: &[&str] = &["plan_financement"];

/// Budget-estimate document path.
pub const ESTIMATE_DOCUMENT: &[&str] = &["devis"];
