//! Marking matched sentences in rendered passages.

use super::common::make_line;
use lectio::highlight::tokens;
use lectio::{highlight_passage, HighlightClasses, Passage, PassageHighlighter};

fn classes_of(markup: &str) -> Vec<Vec<String>> {
    let passage = Passage::parse(markup).unwrap();
    tokens(&passage, &HighlightClasses::default())
        .into_iter()
        .map(|t| t.classes)
        .collect()
}

fn has(classes: &[String], class: &str) -> bool {
    classes.iter().any(|c| c == class)
}

#[test]
fn quick_fox_gets_start_and_end() {
    let markup = make_line(&["The", "quick", "fox"]);
    let out = highlight_passage(&markup, &["quick fox"]);
    let classes = classes_of(&out);
    assert!(!has(&classes[0], "searched-start") && !has(&classes[0], "searched-end"));
    assert!(has(&classes[1], "searched-start"));
    assert!(has(&classes[2], "searched-end"));
}

#[test]
fn slow_dog_changes_nothing() {
    let markup = make_line(&["The", "quick", "fox"]);
    assert_eq!(highlight_passage(&markup, &["slow dog"]), markup);
}

#[test]
fn several_sentences_in_one_pass() {
    let markup = format!(
        "<div>{}{}</div>",
        make_line(&["Ἐν", "ἀρχῇ", "ἦν", "ὁ", "λόγος,"]),
        make_line(&["καὶ", "ὁ", "λόγος", "ἦν", "πρὸς", "τὸν", "θεόν,"])
    );
    let out = highlight_passage(&markup, &["ὁ λόγος", "πρὸς τὸν θεόν", "οὐκ ἐγένετο"]);
    // The first "ὁ λόγος" is taken, the second line's copy is left alone.
    assert_eq!(out.matches(r#"class="searched""#).count(), 2);
    let classes = classes_of(&out);
    assert!(has(&classes[3], "searched-start"));
    assert!(has(&classes[4], "searched-end"));
    assert!(!has(&classes[6], "searched-start"));
    assert!(has(&classes[9], "searched-start"));
    assert!(has(&classes[11], "searched-end"));
}

#[test]
fn highlighting_twice_is_a_no_op() {
    let markup = format!(
        "{}{}",
        make_line(&["a", "b", "c"]),
        make_line(&["d", "e", "f"])
    );
    let sentences = ["b c d", "f"];
    let once = highlight_passage(&markup, &sentences);
    let twice = highlight_passage(&once, &sentences);
    assert_eq!(once, twice);
}

#[test]
fn custom_classes() {
    let highlighter = PassageHighlighter::new(HighlightClasses {
        word: "tok".into(),
        start: "from".into(),
        end: "to".into(),
        matched: "hit".into(),
    });
    let markup = r#"<p><b class="tok">x</b> <b class="tok">y</b></p>"#;
    let out = highlighter.highlight(markup, &["x y"]);
    assert_eq!(
        out,
        r#"<p><span class="hit"><b class="tok from">x</b> <b class="tok to">y</b></span></p>"#
    );
}

#[test]
fn entities_survive_highlighting() {
    let markup = r#"<p><span class="w">A&amp;B</span>&#160;<span class="w">C</span></p>"#;
    let out = highlight_passage(markup, &["A&B C"]);
    assert!(out.contains("A&amp;B"));
    assert!(out.contains("&#160;"));
    assert!(out.contains("searched-start"));
}
