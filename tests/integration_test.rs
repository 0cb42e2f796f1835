//! Integration tests for coqfmt
//!
//! These tests check the observable properties of the formatting pipeline
//! over a varied corpus, plus file-level formatting through the library API.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;

use coqfmt::format::{is_trigger_keyword, TRIGGER_KEYWORDS};
use coqfmt::process::{collect_targets, process_single_file, FileStatus};
use coqfmt::{format_source, Config};

/// Inputs covering markers, keywords, line endings and their interactions
const CORPUS: &[&str] = &[
    "",
    " ",
    "\n\n",
    "(*comment*)",
    "(**)",
    "(*)",
    "(***)",
    "*)(*",
    "(*(*(*",
    "*)*)*)",
    "intro. Qed.",
    "Lemma foo.",
    "  Lemma foo.",
    "Lemma a : True. Proof. trivial. Qed.",
    "(*Qed*)",
    "*)Qed",
    "Qed(*",
    "a\rb\r\nc\n",
    "a.\rQed.\r\n",
    "\r\nQed.",
    "\rQed.",
    "Definition s := \"(*not a comment*)\". Example x.",
    "Fixpoint f n := n.Admitted.Admit.Remark r.Corollary c.Proposition p.",
    "λ(*∀x,x*)Theorem θ.",
    "QedQed Qed_ Qed' Qed1 qed",
    "x Lemma₁ y",
    "x Qed² z",
];

/// Byte offsets of whole-word trigger keywords in `text`
fn keyword_positions(text: &str) -> Vec<usize> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut positions = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
        match (start, is_word(c)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                if is_trigger_keyword(&text[s..i]) {
                    positions.push(s);
                }
                start = None;
            }
            _ => {}
        }
    }
    positions
}

#[test]
fn test_idempotent() {
    for input in CORPUS {
        let once = format_source(input);
        let twice = format_source(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn test_no_carriage_returns_in_output() {
    for input in CORPUS {
        assert!(
            !format_source(input).contains('\r'),
            "CR survived for {input:?}"
        );
    }
}

#[test]
fn test_comment_markers_are_spaced() {
    for input in CORPUS {
        let out = format_source(input);
        for (i, _) in out.match_indices("(*") {
            let next = out[i + 2..].chars().next();
            assert!(
                next.map_or(true, char::is_whitespace),
                "open marker not spaced in {out:?}"
            );
        }
        for (i, _) in out.match_indices("*)") {
            let prev = out[..i].chars().next_back();
            assert!(
                prev.map_or(true, char::is_whitespace),
                "close marker not spaced in {out:?}"
            );
        }
    }
}

#[test]
fn test_keywords_start_lines() {
    for input in CORPUS {
        let out = format_source(input);
        for pos in keyword_positions(&out) {
            assert!(
                pos == 0 || out.as_bytes()[pos - 1] == b'\n',
                "keyword at {pos} does not start a line in {out:?}"
            );
        }
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(format_source("(*comment*)"), "(* comment *)");
    assert_eq!(format_source("intro. Qed."), "intro. \nQed.");
    assert_eq!(format_source("Lemma foo."), "Lemma foo.");
    assert_eq!(
        format_source("Lemma foo.\r\nProof.\r\nQed.\r\n"),
        "Lemma foo.\nProof.\nQed.\n"
    );
}

#[test]
fn test_keyword_table_is_fixed() {
    assert_eq!(
        TRIGGER_KEYWORDS,
        [
            "Lemma",
            "Theorem",
            "Definition",
            "Fixpoint",
            "Proof",
            "Qed",
            "Admitted",
            "Admit",
            "Corollary",
            "Remark",
            "Proposition",
            "Example",
        ]
    );
}

#[test]
fn test_preceding_text_preserved() {
    let out = format_source("auto.   Qed.");
    assert_eq!(out, "auto.   \nQed.");
}

#[test]
fn test_concurrent_formatting() {
    let handles: Vec<_> = CORPUS
        .iter()
        .map(|input| {
            let input = (*input).to_string();
            std::thread::spawn(move || (format_source(&input), input))
        })
        .collect();
    for handle in handles {
        let (out, input) = handle.join().unwrap();
        assert_eq!(out, format_source(&input));
    }
}

#[test]
fn test_format_directory_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("theories")).unwrap();
    fs::create_dir_all(dir.path().join("_build")).unwrap();
    fs::write(dir.path().join("theories/A.v"), "(*a*) Lemma a : True.").unwrap();
    fs::write(dir.path().join("_build/B.v"), "(*b*)").unwrap();
    fs::write(dir.path().join("README.md"), "(*not coq*)").unwrap();

    let config = Config {
        exclude: vec!["_build".to_string()],
        backup: true,
        ..Default::default()
    };
    let files = collect_targets(None, Some(dir.path()), &config).unwrap();
    assert_eq!(files, vec![dir.path().join("theories/A.v")]);

    let mut out = Vec::new();
    for path in &files {
        let status = process_single_file(path, &config, true, &mut out).unwrap();
        assert_eq!(
            status,
            FileStatus::Formatted {
                backup: Some(dir.path().join("theories/A.v.bak"))
            }
        );
    }
    assert!(out.is_empty());

    // Second run finds nothing to do
    for path in &files {
        let status = process_single_file(path, &config, true, &mut out).unwrap();
        assert_eq!(status, FileStatus::Unchanged);
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("theories/A.v")).unwrap(),
        "(* a *) \nLemma a : True."
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("theories/A.v.bak")).unwrap(),
        "(*a*) Lemma a : True."
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("_build/B.v")).unwrap(),
        "(*b*)"
    );
}
