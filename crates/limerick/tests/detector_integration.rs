//! Limerick detector integration tests
//!
//! Uses a small CMU-format dictionary written to a temp dir.

use corpus::{Input, Output};
use limerick::cli::{self, LimerickArgs};
use limerick::{DetectorConfig, LimerickDetector, Rejection, Role};
use std::path::{Path, PathBuf};

const CMUDICT: &str = "\
;;; fixture for the flea and fly limerick
A  AH0
A(1)  EY1
AND  AH0 N D
AND(1)  AE1 N D
COULD  K UH1 D
DO  D UW1
FLAW  F L AO1
FLEA  F L IY1
FLEE  F L IY1
FLEW  F L UW1
FLUE  F L UW1
FLY  F L AY1
IMPRISONED  IH2 M P R IH1 Z AH0 N D
IN  IH0 N
IN(1)  IH1 N
LET  L EH1 T
SAID  S EH1 D
SO  S OW1
THE  DH AH0
THE(1)  DH AH1
THE(2)  DH IY0
THEY  DH EY1
THROUGH  TH R UW1
US  AH1 S
WERE  W ER1
WHAT  W AH1 T
";

const FLEA_AND_FLY: &str = "\
A flea and a fly in a flue
Were imprisoned, so what could they do?
Said the fly, \"let us flee!\"
\"Let us fly!\" said the flea.
So they flew through a flaw in the flue.
";

fn write_dict(dir: &Path) -> PathBuf {
    let path = dir.join("cmudict");
    std::fs::write(&path, CMUDICT).unwrap();
    path
}

fn detector() -> LimerickDetector {
    LimerickDetector::new(CMUDICT.parse().unwrap())
}

#[test]
fn test_canonical_limerick() {
    let d = detector();
    let analysis = d.analyze(FLEA_AND_FLY);
    assert!(analysis.is_limerick(), "rejected: {:?}", analysis.rejection);

    let a: Vec<usize> = analysis.lines_of(Role::A).map(|l| l.syllables).collect();
    let b: Vec<usize> = analysis.lines_of(Role::B).map(|l| l.syllables).collect();
    assert_eq!(a, vec![8, 9, 9]);
    assert_eq!(b, vec![6, 6]);
}

#[test]
fn test_blank_lines_and_indentation_ignored() {
    let padded = format!("\n\n{}\n\n", FLEA_AND_FLY.replace('\n', "\n   \n  "));
    assert!(detector().is_limerick(&padded));
}

#[test]
fn test_four_line_poem() {
    let four: Vec<&str> = FLEA_AND_FLY.lines().take(4).collect();
    let analysis = detector().analyze(&four.join("\n"));
    assert!(!analysis.is_limerick());
    assert_eq!(analysis.rejection, Some(Rejection::LineCount { lines: 4 }));
}

#[test]
fn test_six_line_poem() {
    let six = format!("{}So they flew through a flaw in the flue.\n", FLEA_AND_FLY);
    assert!(!detector().is_limerick(&six));
}

#[test]
fn test_everything_rhymes() {
    let poem = "\
A flea and a fly in a flue
Were imprisoned, so what could they do?
Said the fly, let us do
Let us fly, said the flue
So they flew through a flaw in the flue.";
    let analysis = detector().analyze(poem);
    assert_eq!(analysis.rejection, Some(Rejection::AllRhyme));
}

#[test]
fn test_b_lines_must_rhyme() {
    let poem = "\
A flea and a fly in a flue
Were imprisoned, so what could they do?
Said the fly, let us flee
Let us fly, said the what
So they flew through a flaw in the flue.";
    let analysis = detector().analyze(poem);
    assert_eq!(analysis.rejection, Some(Rejection::NoRhyme { role: Role::B }));
}

#[test]
fn test_a_lines_must_rhyme() {
    let poem = "\
A flea and a fly in a flue
Were imprisoned, so what could they do?
Said the fly, let us flee
Let us fly, said the flea
So they flew through a flaw in the flaw.";
    let analysis = detector().analyze(poem);
    assert_eq!(analysis.rejection, Some(Rejection::NoRhyme { role: Role::A }));
}

#[test]
fn test_long_b_line() {
    let poem = "\
A flea and a fly in a flue
Were imprisoned, so what could they do?
Said the fly to the flea let us flee
Let us fly to the flue said the flea
So they flew through a flaw in the flue.";
    let analysis = detector().analyze(poem);
    assert!(matches!(analysis.rejection, Some(Rejection::BNotShorter { .. })));
}

#[test]
fn test_unknown_terminal_word_breaks_rhyme() {
    let poem = FLEA_AND_FLY.replace("the flue.", "the zorblax.");
    let analysis = detector().analyze(&poem);
    assert_eq!(analysis.rejection, Some(Rejection::NoRhyme { role: Role::A }));
}

#[test]
fn test_loose_config_accepts_short_lines() {
    let poem = "flue\ndo\nflee\nflea\nflue";
    let strict = detector();
    assert!(!strict.is_limerick(poem));

    let loose = detector().with_config(DetectorConfig {
        min_syllables: 2,
        max_spread: 2,
        guess_syllables: false,
    });
    // 1-syllable A lines are not longer than 1-syllable B lines
    assert!(matches!(
        loose.analyze(poem).rejection,
        Some(Rejection::BNotShorter { .. })
    ));
}

#[test]
fn test_open_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    let d = LimerickDetector::open(&write_dict(dir.path())).unwrap();
    assert!(d.dictionary().contains("flue"));
    assert!(d.rhymes("Flue", "DO"));
}

#[test]
fn test_open_missing_dictionary() {
    let err = LimerickDetector::open(Path::new("/nonexistent/cmudict"))
        .err()
        .unwrap();
    assert!(err.to_string().contains("/nonexistent/cmudict"));
}

fn run_cli(dir: &Path, poem: &str, json: bool, guess: bool) -> String {
    let infile = dir.join("poem.txt");
    let outfile = dir.join("out.txt");
    std::fs::write(&infile, poem).unwrap();

    let args = LimerickArgs {
        infile: Input::File(infile),
        outfile: Output::File(outfile.clone()),
        dict: Some(write_dict(dir)),
        guess,
        json,
        debug: false,
        no_debug: false,
    };
    cli::run(&args).unwrap();
    std::fs::read_to_string(outfile).unwrap()
}

#[test]
fn test_cli_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli(dir.path(), FLEA_AND_FLY, false, false);
    assert_eq!(out, format!("{}\n-----------\nTrue\n", FLEA_AND_FLY.trim()));

    let out = run_cli(dir.path(), "just one line", false, false);
    assert_eq!(out, "just one line\n-----------\nFalse\n");
}

#[test]
fn test_cli_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli(dir.path(), "one\ntwo", true, false);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["limerick"], false);
    assert_eq!(value["rejection"]["rule"], "line_count");
    assert_eq!(value["lines"].as_array().unwrap().len(), 2);
    assert!(value["lines"][0].get("pronunciations").is_none());
}

#[test]
fn test_cli_json_lists_terminal_pronunciations() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli(dir.path(), FLEA_AND_FLY, true, false);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["limerick"], true);
    assert_eq!(value["lines"][0]["terminal"], "flue");
    assert_eq!(value["lines"][0]["pronunciations"], serde_json::json!([["F", "L", "UW1"]]));
    assert_eq!(value["lines"][2]["role"], "B");
}

#[test]
fn test_cli_guess_changes_verdict() {
    // "abracadabra" is not in the dictionary: 1 syllable by default, 5 guessed,
    // which pushes the B lines 3 syllables apart
    let poem = FLEA_AND_FLY.replace("let us flee!", "abracadabra, flee!");
    let dir = tempfile::tempdir().unwrap();

    let plain = run_cli(dir.path(), &poem, false, false);
    assert!(plain.ends_with("True\n"), "{}", plain);

    let guessed = run_cli(dir.path(), &poem, false, true);
    assert!(guessed.ends_with("False\n"), "{}", guessed);
}

#[test]
fn test_cli_gzipped_input_and_dictionary() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("poem.txt.gz");
    let dict = dir.path().join("cmudict.gz");
    for (path, text) in [(&infile, FLEA_AND_FLY), (&dict, CMUDICT)] {
        let mut w = corpus::create_file(path).unwrap();
        w.write_all(text.as_bytes()).unwrap();
    }

    let outfile = dir.path().join("out.txt");
    let args = LimerickArgs {
        infile: Input::File(infile),
        outfile: Output::File(outfile.clone()),
        dict: Some(dict),
        guess: false,
        json: false,
        debug: false,
        no_debug: false,
    };
    cli::run(&args).unwrap();
    assert!(std::fs::read_to_string(outfile).unwrap().ends_with("True\n"));
}

#[test]
fn test_cli_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = LimerickArgs {
        infile: Input::File(dir.path().join("missing.txt")),
        outfile: Output::File(dir.path().join("out.txt")),
        dict: Some(write_dict(dir.path())),
        guess: false,
        json: false,
        debug: false,
        no_debug: false,
    };
    let err = cli::run(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.txt"));
}
