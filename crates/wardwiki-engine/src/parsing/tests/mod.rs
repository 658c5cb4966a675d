//! Behavioural tests for the whole parser.
//!
//! Trees are compared through `Document::outline()` with inline `insta`
//! snapshots; every parsed document is also run through the invariant checks.


use rstest::rstest;

use crate::models::{Child, Document, NodeKind};
use crate::parsing::parse;
use crate::render::render;

fn parse_checked(src: &str) -> Document {
    let doc = parse(src);
    invariants::check(&doc);
    doc
}

fn outline(src: &str) -> String {
    parse_checked(src).outline()
}

// Plain text

#[rstest]
#[case("hello world")]
#[case("  leading and trailing  ")]
#[case("tabs\tare kept")]
#[case("numbers 1 2 3, punctuation; fine.")]
#[case("unicode café naïve")]
#[case("double  spaced   words")]
fn text_without_markup_is_one_verbatim_paragraph(#[case] src: &str) {
    let doc = parse_checked(src);
    let [Child::Node(para)] = doc.root().children() else {
        panic!("expected a single paragraph, got {}", doc.outline());
    };
    assert_eq!(doc.node(*para).kind(), &NodeKind::Paragraph);
    assert_eq!(doc.node(*para).children(), &[Child::Text(src.to_string())]);
}

#[test]
fn empty_input_is_empty_root() {
    assert!(parse_checked("").is_empty());
    assert!(parse_checked("\n\r\n  \n").is_empty());
}

#[test]
fn crlf_lines_are_separate_paragraphs() {
    insta::assert_snapshot!(outline("first\r\nsecond\r\n"), @r#"
    Root
      Paragraph
        "first"
      Paragraph
        "second"
    "#);
}

// Emphasis

#[test]
fn bold_toggle_is_balanced() {
    insta::assert_snapshot!(outline("'''bold''' plain"), @r#"
    Root
      Paragraph
        Bold
          "bold"
        " plain"
    "#);
}

#[test]
fn unclosed_bold_is_closed_implicitly() {
    insta::assert_snapshot!(outline("'''bold"), @r#"
    Root
      Paragraph
        Bold
          "bold"
    "#);
}

#[test]
fn italic_wraps_nested_bold() {
    insta::assert_snapshot!(outline("''it '''both''' it''"), @r#"
    Root
      Paragraph
        Italic
          "it "
          Bold
            "both"
          " it"
    "#);
}

#[test]
fn apostrophe_inside_word_is_text() {
    insta::assert_snapshot!(outline("Ward's wiki"), @r#"
    Root
      Paragraph
        "Ward's wiki"
    "#);
}

// Links

#[test]
fn wiki_word_becomes_site_link() {
    insta::assert_snapshot!(outline("see WardWiki page"), @r#"
    Root
      Paragraph
        "see "
        Link(/WardWiki)
          "WardWiki"
        " page"
    "#);
}

#[test]
fn wiki_word_with_punctuation() {
    insta::assert_snapshot!(outline("(WelcomeVisitors)."), @r#"
    Root
      Paragraph
        "("
        Link(/WelcomeVisitors)
          "WelcomeVisitors"
        ")."
    "#);
}

#[test]
fn bare_url_becomes_external_link() {
    insta::assert_snapshot!(outline("visit https://example.com now"), @r#"
    Root
      Paragraph
        "visit "
        Link(https://example.com)
          "https://example.com"
        " now"
    "#);
}

#[test]
fn ftp_url_stays_text() {
    insta::assert_snapshot!(outline("visit ftp://example.com now"), @r#"
    Root
      Paragraph
        "visit ftp://example.com now"
    "#);
}

#[test]
fn links_inside_emphasis() {
    insta::assert_snapshot!(outline("'''WardWiki'''"), @r#"
    Root
      Paragraph
        Bold
          Link(/WardWiki)
            "WardWiki"
    "#);
}

// Lists

#[test]
fn returning_to_depth_one_resumes_the_list() {
    insta::assert_snapshot!(outline("* a\n** b\n* c"), @r#"
    Root
      List(1)
        Paragraph
          "a"
          List(2)
            Paragraph
              "b"
        Paragraph
          "c"
    "#);
}

#[test]
fn three_levels_then_back_to_two() {
    insta::assert_snapshot!(outline("* a\n** b\n*** c\n** d"), @r#"
    Root
      List(1)
        Paragraph
          "a"
          List(2)
            Paragraph
              "b"
              List(3)
                Paragraph
                  "c"
            Paragraph
              "d"
    "#);
}

#[test]
fn skipping_a_level_opens_intermediate_lists() {
    insta::assert_snapshot!(outline("** deep\n* shallow"), @r#"
    Root
      List(1)
        List(2)
          Paragraph
            "deep"
        Paragraph
          "shallow"
    "#);
}

#[test]
fn list_items_carry_inline_markup() {
    insta::assert_snapshot!(outline("* see ''WardWiki''\n* '''done"), @r#"
    Root
      List(1)
        Paragraph
          "see "
          Italic
            Link(/WardWiki)
              "WardWiki"
        Paragraph
          Bold
            "done"
    "#);
}

#[test]
fn paragraph_between_lists_splits_them() {
    let doc = parse_checked("* a\ntext\n* b");
    let lists = doc
        .root()
        .children()
        .iter()
        .filter(|c| match c {
            Child::Node(id) => matches!(doc.node(*id).kind(), NodeKind::List { .. }),
            Child::Text(_) => false,
        })
        .count();
    assert_eq!(lists, 2);
}

#[test]
fn sibling_lists_at_same_depth_under_one_parent_are_distinct_items() {
    let doc = parse_checked("* a\n** b\n* c\n** d");
    insta::assert_snapshot!(doc.outline(), @r#"
    Root
      List(1)
        Paragraph
          "a"
          List(2)
            Paragraph
              "b"
        Paragraph
          "c"
          List(2)
            Paragraph
              "d"
    "#);
}

// Horizontal rules

#[test]
fn rule_line_stands_alone() {
    insta::assert_snapshot!(outline("before\n----\nafter"), @r#"
    Root
      Paragraph
        "before"
      HorizontalRule
      Paragraph
        "after"
    "#);
}

#[test]
fn padded_rule_line_is_a_rule() {
    insta::assert_snapshot!(outline("  ----  "), @r#"
    Root
      HorizontalRule
    "#);
}

#[test]
fn trailing_spaces_after_rule_add_no_paragraph() {
    insta::assert_snapshot!(outline("text\n----  \nmore"), @r#"
    Root
      Paragraph
        "text"
      HorizontalRule
      Paragraph
        "more"
    "#);
}

#[test]
fn rule_after_a_toggle_stays_in_the_paragraph() {
    insta::assert_snapshot!(outline("''a''----b"), @r#"
    Root
      Paragraph
        Italic
          "a"
        HorizontalRule
        "b"
    "#);
}

#[test]
fn dashes_following_a_space_are_text() {
    insta::assert_snapshot!(outline("a ----b"), @r#"
    Root
      Paragraph
        "a ----b"
    "#);
}

// Escaping

#[test]
fn six_quotes_are_one_literal_quote() {
    assert_eq!(parse_checked("''''''Tis the season"), parse("'Tis the season"));
    insta::assert_snapshot!(outline("''''''Tis the season"), @r#"
    Root
      Paragraph
        "'Tis the season"
    "#);
}

// Robustness

#[rstest]
#[case("'''")]
#[case("''")]
#[case("*")]
#[case("***")]
#[case("'''''''''")]
#[case("* '''a\n** ''b\nc''' d''")]
#[case("----------")]
#[case("**** \n* \n\n** x")]
#[case("http:// https:// WardWiki''")]
#[case("\r\r\r")]
fn malformed_input_still_yields_a_valid_tree(#[case] src: &str) {
    parse_checked(src);
}

#[test]
fn deeply_nested_list_markers_render_and_drop() {
    let depth = 100_000;
    let doc = parse_checked(&"*".repeat(depth));
    assert_eq!(doc.len(), depth + 1);

    let out = render(&doc);
    let html = out.to_html();
    assert!(html.starts_with("<ul><li><ul><li>"));
    assert_eq!(html.matches("<ul>").count(), depth);
    assert_eq!(out.plain_text(), "");
}

#[test]
fn deeply_nested_outline_has_one_line_per_node() {
    let doc = parse_checked(&"*".repeat(5_000));
    assert_eq!(doc.outline().lines().count(), 5_001);
}
