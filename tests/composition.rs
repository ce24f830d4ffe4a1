// Composition tests: raw speeches through preparation, analysis and output.
//
// These exercise the data flow between modules:
//   prepare -> Corpus -> TfIdfMatrix -> queries -> JSON
// using temporary directories for both the raw and the normalized corpus.

use std::fs;

use speechscope::output::to_json;
use speechscope::prepare::{self, PrepareError, PrepareOptions};
use speechscope::queries::{Analysis, QuerySettings};

fn options(strip_stop_words: bool) -> PrepareOptions {
    PrepareOptions {
        name_marker: "Nomination_".to_string(),
        strip_stop_words,
        stop_words_path: None,
    }
}

fn raw_speeches() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let speeches = [
        (
            "Nomination_Chirac1.txt",
            "Mes chers compatriotes, la Nation est rassemblée. La Nation! Vive la République.",
        ),
        (
            "Nomination_Chirac2.txt",
            "La France est forte. Vive la République, vive la France.",
        ),
        (
            "Nomination_Macron.txt",
            "Le défi du climat et de l'écologie. La Nation avance. Vive la République.",
        ),
    ];
    for (name, text) in speeches {
        fs::write(dir.path().join(name), text).unwrap();
    }
    dir
}

#[test]
fn prepare_normalizes_and_lists_authors() {
    let raw = raw_speeches();
    let out = tempfile::tempdir().unwrap();
    let cleaned = out.path().join("cleaned");

    let report = prepare::run(raw.path(), &cleaned, &options(false)).unwrap();
    assert_eq!(report.documents, 3);
    assert_eq!(report.authors, vec!["Chirac", "Macron"]);

    let text = fs::read_to_string(cleaned.join("Nomination_Macron.txt")).unwrap();
    assert_eq!(
        text,
        "le défi du climat et de l écologie  la nation avance  vive la république "
    );
}

#[test]
fn prepare_then_analyze() {
    let raw = raw_speeches();
    let out = tempfile::tempdir().unwrap();
    prepare::run(raw.path(), out.path(), &options(false)).unwrap();

    let analysis = Analysis::load(out.path()).unwrap();
    assert_eq!(analysis.matrix().document_count(), 3);

    // "la", "vive" and "république" occur in every speech.
    let least = analysis.least_important();
    for word in ["la", "vive", "république"] {
        assert!(least.contains(&word.to_string()), "{word} missing from {least:?}");
    }

    // Chirac1 is the first file containing "Chirac".
    assert_eq!(analysis.most_repeated("Chirac"), vec!["la"]);

    let mentions = analysis.mentions("nation", "Nomination_");
    assert_eq!(mentions.author_names(), vec!["Chirac", "Macron"]);
    assert_eq!(mentions.most, vec!["Chirac"]);

    assert_eq!(
        analysis.first_mention(&["climat", "ecologie"], "Nomination_").as_deref(),
        Some("Macron")
    );

    let common = analysis.common();
    assert!(common.contains(&"vive".to_string()));
    assert!(!common.contains(&"france".to_string()));
}

#[test]
fn stop_word_stripping_removes_function_words() {
    let raw = raw_speeches();
    let out = tempfile::tempdir().unwrap();
    prepare::run(raw.path(), out.path(), &options(true)).unwrap();

    let analysis = Analysis::load(out.path()).unwrap();
    assert!(analysis.matrix().row("la").is_none());
    assert!(analysis.matrix().row("nation").is_some());
}

#[test]
fn configured_stop_word_file_must_exist() {
    let raw = raw_speeches();
    let out = tempfile::tempdir().unwrap();
    let mut opts = options(true);
    opts.stop_words_path = Some(out.path().join("stop_words.txt"));

    let err = prepare::run(raw.path(), out.path(), &opts).unwrap_err();
    assert!(matches!(err, PrepareError::MissingStopWords { .. }), "got {err}");
}

#[test]
fn configured_stop_word_file_is_used() {
    let raw = raw_speeches();
    let out = tempfile::tempdir().unwrap();
    let stop_dir = tempfile::tempdir().unwrap();
    let stop_file = stop_dir.path().join("stop_words.txt");
    fs::write(&stop_file, "Vive\nla\n\n").unwrap();

    let mut opts = options(true);
    opts.stop_words_path = Some(stop_file);
    prepare::run(raw.path(), out.path(), &opts).unwrap();

    let analysis = Analysis::load(out.path()).unwrap();
    assert!(analysis.matrix().row("vive").is_none());
    assert!(analysis.matrix().row("la").is_none());
    assert!(analysis.matrix().row("république").is_some());
}

#[test]
fn report_serializes_to_json() {
    let raw = raw_speeches();
    let out = tempfile::tempdir().unwrap();
    prepare::run(raw.path(), out.path(), &options(false)).unwrap();

    let analysis = Analysis::load(out.path()).unwrap();
    let report = analysis.report(&QuerySettings::default());
    let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

    assert_eq!(json["documents"], 3);
    assert_eq!(json["first_mention"], "Macron");
    assert_eq!(json["mentions"]["term"], "nation");
    assert_eq!(json["mentions"]["most"][0], "Chirac");
    assert!(json["most_repeated"].is_array());
}

#[test]
fn empty_prepared_corpus_fails_analysis() {
    let raw = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let report = prepare::run(raw.path(), out.path(), &options(false)).unwrap();
    assert_eq!(report.documents, 0);
    assert!(Analysis::load(out.path()).is_err());
}
