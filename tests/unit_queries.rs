// Unit tests for the six analytical queries.
//
// Each query is exercised on small in-memory corpora with hand-checked
// answers, including the "nothing found" outcomes that must not error.

use speechscope::corpus::Corpus;
use speechscope::queries::{
    common_words, first_to_mention, highest_tfidf_words, least_important_words, mentions_of,
    most_repeated_by, Analysis, QuerySettings,
};
use speechscope::tfidf::TfIdfMatrix;

const MARKER: &str = "Nomination_";

fn two_speeches() -> Corpus {
    Corpus::from_texts([
        ("Nomination_Hollande.txt", "the nation the state"),
        ("Nomination_Sarkozy.txt", "the nation"),
    ])
    .unwrap()
}

// ============================================================
// Least important / highest TF-IDF
// ============================================================

#[test]
fn least_important_includes_zero_rows_only() {
    let m = TfIdfMatrix::from_corpus(&two_speeches()).unwrap();
    let words = least_important_words(&m);
    assert!(words.contains(&"the".to_string()));
    assert!(words.contains(&"nation".to_string()));
    assert!(!words.contains(&"state".to_string()));
}

#[test]
fn highest_is_sole_maximum() {
    let m = TfIdfMatrix::from_corpus(&two_speeches()).unwrap();
    assert_eq!(highest_tfidf_words(&m), vec!["state"]);
}

#[test]
fn highest_prefers_repeated_rare_term() {
    let corpus = Corpus::from_texts([
        ("a.txt", "crise crise crise emploi"),
        ("b.txt", "emploi avenir"),
    ])
    .unwrap();
    let m = TfIdfMatrix::from_corpus(&corpus).unwrap();
    assert_eq!(highest_tfidf_words(&m), vec!["crise"]);
}

// ============================================================
// Most repeated by author
// ============================================================

#[test]
fn most_repeated_returns_all_ties() {
    let corpus = Corpus::from_texts([
        ("Nomination_Chirac1.txt", "france europe france europe peuple"),
        ("Nomination_Mitterrand1.txt", "socialisme"),
    ])
    .unwrap();
    assert_eq!(most_repeated_by(&corpus, "Chirac"), vec!["europe", "france"]);
}

#[test]
fn most_repeated_without_author_is_empty() {
    assert!(most_repeated_by(&two_speeches(), "Chirac").is_empty());
}

// ============================================================
// Mentions
// ============================================================

#[test]
fn mentions_tie_returns_both_authors() {
    let mentions = mentions_of(&two_speeches(), "nation", MARKER);
    assert_eq!(mentions.author_names(), vec!["Hollande", "Sarkozy"]);
    assert_eq!(mentions.most, vec!["Hollande", "Sarkozy"]);
}

#[test]
fn mentions_single_maximum() {
    let corpus = Corpus::from_texts([
        ("Nomination_Hollande.txt", "nation nation"),
        ("Nomination_Sarkozy.txt", "nation"),
        ("Nomination_Macron.txt", "europe"),
    ])
    .unwrap();
    let mentions = mentions_of(&corpus, "nation", MARKER);
    assert_eq!(mentions.author_names(), vec!["Hollande", "Sarkozy"]);
    assert_eq!(mentions.most, vec!["Hollande"]);
}

#[test]
fn mentions_most_ranks_single_documents_not_author_totals() {
    let corpus = Corpus::from_texts([
        ("Nomination_Chirac1.txt", "nation"),
        ("Nomination_Chirac2.txt", "nation"),
        ("Nomination_Macron.txt", "nation nation"),
    ])
    .unwrap();
    let mentions = mentions_of(&corpus, "nation", MARKER);

    // Totals still add up per author for display...
    assert_eq!(mentions.authors[0].author, "Chirac");
    assert_eq!(mentions.authors[0].count, 2);
    assert_eq!(mentions.authors[1].count, 2);
    // ...but only Macron's speech reaches two mentions on its own.
    assert_eq!(mentions.most, vec!["Macron"]);
}

#[test]
fn mentions_nobody_has_no_maximum() {
    let mentions = mentions_of(&two_speeches(), "climat", MARKER);
    assert!(mentions.authors.is_empty());
    assert!(mentions.most.is_empty());
}

// ============================================================
// First to mention
// ============================================================

#[test]
fn first_mention_only_third_document_matches() {
    let corpus = Corpus::from_texts([
        ("Nomination_Macron.txt", "transition climatique"),
        ("Nomination_Chirac1.txt", "la france"),
        ("Nomination_Giscard dEstaing.txt", "le changement"),
    ])
    .unwrap();
    assert_eq!(
        first_to_mention(&corpus, &["climat"], MARKER).as_deref(),
        Some("Macron")
    );
}

#[test]
fn first_mention_earliest_file_name_wins() {
    let corpus = Corpus::from_texts([
        ("Nomination_Sarkozy.txt", "ecologie"),
        ("Nomination_Hollande.txt", "climat"),
    ])
    .unwrap();
    assert_eq!(
        first_to_mention(&corpus, &["climat", "ecologie"], MARKER).as_deref(),
        Some("Hollande")
    );
}

#[test]
fn first_mention_no_match_is_none() {
    let corpus = Corpus::from_texts([
        ("Nomination_Chirac1.txt", "la france"),
        ("Nomination_Chirac2.txt", "l europe"),
        ("Nomination_Mitterrand1.txt", "le socialisme"),
    ])
    .unwrap();
    assert_eq!(first_to_mention(&corpus, &["climat"], MARKER), None);
}

// ============================================================
// Common words
// ============================================================

#[test]
fn common_words_padded_in_every_document() {
    let corpus = Corpus::from_texts([
        ("a.txt", " vive the republic "),
        ("b.txt", " vive the nation "),
        ("c.txt", " and the people "),
    ])
    .unwrap();
    let m = TfIdfMatrix::from_corpus(&corpus).unwrap();
    let words = common_words(&corpus, &m);
    assert!(words.contains(&"the".to_string()));
    assert!(!words.contains(&"vive".to_string()));
}

// ============================================================
// Analysis report
// ============================================================

#[test]
fn report_matches_individual_queries() {
    let corpus = Corpus::from_texts([
        ("Nomination_Chirac1.txt", " la nation la france la "),
        ("Nomination_Macron.txt", " la nation et le climat "),
    ])
    .unwrap();
    let analysis = Analysis::from_corpus(corpus).unwrap();
    let settings = QuerySettings::default();
    let report = analysis.report(&settings);

    assert_eq!(report.documents, 2);
    assert_eq!(report.terms, analysis.matrix().term_count());
    assert_eq!(report.least_important, analysis.least_important());
    assert_eq!(report.highest_tfidf, analysis.highest_tfidf());
    assert_eq!(report.most_repeated, vec!["la"]);
    assert_eq!(report.mentions.author_names(), vec!["Chirac", "Macron"]);
    assert_eq!(report.first_mention.as_deref(), Some("Macron"));
    assert_eq!(report.common, vec!["la", "nation"]);
}
