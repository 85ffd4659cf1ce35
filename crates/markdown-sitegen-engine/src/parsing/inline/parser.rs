use super::{
    cursor::Cursor,
    error::InlineError,
    kinds::{CodeSpan, Emphasis, Reference},
    types::{Segment, SegmentKind},
};

/// A single lexer stage. Consumes the segments produced so far and only
/// rewrites the [`SegmentKind::Plain`] ones.
type Pass = fn(Vec<Segment>) -> Result<Vec<Segment>, InlineError>;

/// Lexer stages in application order.
///
/// References run before the delimiter passes so that `_` or `**` inside a
/// URL is never taken for emphasis.
const PASSES: &[Pass] = &[
    split_links,
    split_images,
    split_bold,
    split_italic,
    split_code_spans,
];

/// Lexes raw inline text into a flat sequence of [`Segment`]s.
///
/// Text with no markup comes back as a single plain segment, including the
/// empty string. Markup never nests: once a stage tags a segment, later
/// stages leave it alone.
///
/// # Errors
/// Returns [`InlineError`] when a plain run contains an unmatched or
/// repeated delimiter.
pub fn lex(text: &str) -> Result<Vec<Segment>, InlineError> {
    PASSES
        .iter()
        .try_fold(vec![Segment::plain(text)], |segments, pass| pass(segments))
}

fn split_links(segments: Vec<Segment>) -> Result<Vec<Segment>, InlineError> {
    Ok(split_references(segments, SegmentKind::Link))
}

fn split_images(segments: Vec<Segment>) -> Result<Vec<Segment>, InlineError> {
    Ok(split_references(segments, SegmentKind::Image))
}

fn split_bold(segments: Vec<Segment>) -> Result<Vec<Segment>, InlineError> {
    split_delimited(segments, Emphasis::BOLD, SegmentKind::Bold)
}

fn split_italic(segments: Vec<Segment>) -> Result<Vec<Segment>, InlineError> {
    split_delimited(segments, Emphasis::ITALIC, SegmentKind::Italic)
}

fn split_code_spans(segments: Vec<Segment>) -> Result<Vec<Segment>, InlineError> {
    split_delimited(segments, CodeSpan::TICK, SegmentKind::Code)
}

/// Splits every plain segment around one `delimiter` pair.
fn split_delimited(
    segments: Vec<Segment>,
    delimiter: &'static str,
    kind: SegmentKind,
) -> Result<Vec<Segment>, InlineError> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        if !segment.is_plain() {
            out.push(segment);
            continue;
        }

        match segment.content.matches(delimiter).count() {
            0 => out.push(segment),
            2 => {
                if let Some((before, rest)) = segment.content.split_once(delimiter)
                    && let Some((inner, after)) = rest.split_once(delimiter)
                {
                    push_plain(&mut out, before);
                    if !inner.is_empty() {
                        out.push(Segment::styled(inner, kind));
                    }
                    push_plain(&mut out, after);
                }
            }
            count if count % 2 == 1 => {
                return Err(InlineError::UnclosedDelimiter {
                    delimiter,
                    text: segment.content,
                });
            }
            count => {
                return Err(InlineError::RepeatedDelimiter {
                    delimiter,
                    count,
                    text: segment.content,
                });
            }
        }
    }

    Ok(out)
}

/// Splits every plain segment around its link or image references.
fn split_references(segments: Vec<Segment>, kind: SegmentKind) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        if !segment.is_plain() {
            out.push(segment);
            continue;
        }

        let mut pieces = scan_references(&segment.content, kind);
        if pieces.is_empty() {
            out.push(segment);
        } else {
            out.append(&mut pieces);
        }
    }

    out
}

/// Returns the segments of `s` when it holds at least one reference of
/// `kind`, or an empty vector when it holds none.
fn scan_references(s: &str, kind: SegmentKind) -> Vec<Segment> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        let found = match kind {
            SegmentKind::Image => try_parse_image(&mut cur),
            _ => try_parse_link(&mut cur),
        };
        if let Some((label, destination)) = found {
            push_plain(&mut out, cur.slice(text_start, start));
            out.push(match kind {
                SegmentKind::Image => Segment::image(label, destination),
                _ => Segment::link(label, destination),
            });
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if out.is_empty() {
        return out;
    }
    push_plain(&mut out, cur.slice(text_start, cur.pos()));
    out
}

/// Attempts to parse `[label](url)` at the current position.
///
/// A `[` directly after `!` belongs to an image and is skipped.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.prev() == Some(Reference::BANG) {
        return None;
    }
    try_parse_reference(cur, Reference::LINK_OPEN)
}

/// Attempts to parse `![alt](src)` at the current position.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    try_parse_reference(cur, Reference::IMAGE_OPEN)
}

/// Parses `<open>label](destination)`, restoring the cursor on failure.
fn try_parse_reference<'a>(cur: &mut Cursor<'a>, open: &[u8]) -> Option<(&'a str, &'a str)> {
    if !cur.starts_with(open) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(open.len());
    let label_start = cur.pos();

    if !cur.seek_on_line(Reference::LABEL_CLOSE) {
        *cur = saved;
        return None;
    }
    let label_end = cur.pos();
    cur.bump_n(Reference::LABEL_CLOSE.len());
    let destination_start = cur.pos();

    if !cur.seek_on_line(Reference::CLOSE) {
        *cur = saved;
        return None;
    }
    let destination_end = cur.pos();
    cur.bump_n(Reference::CLOSE.len());

    Some((
        cur.slice(label_start, label_end),
        cur.slice(destination_start, destination_end),
    ))
}

fn push_plain(out: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        out.push(Segment::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn bold(s: &str) -> Segment {
        Segment::styled(s, SegmentKind::Bold)
    }

    fn italic(s: &str) -> Segment {
        Segment::styled(s, SegmentKind::Italic)
    }

    fn code(s: &str) -> Segment {
        Segment::styled(s, SegmentKind::Code)
    }

    #[rstest]
    #[case("hello world")]
    #[case("")]
    #[case("a * lone star and [brackets] and (parens)")]
    #[case("![not closed](x.png")]
    fn text_without_markup_is_one_plain_segment(#[case] text: &str) {
        assert_eq!(lex(text).unwrap(), vec![Segment::plain(text)]);
    }

    #[test]
    fn code_span_at_end() {
        assert_eq!(
            lex("This code is based: `Bitcoin.mineAll()`").unwrap(),
            vec![
                Segment::plain("This code is based: "),
                code("Bitcoin.mineAll()"),
            ]
        );
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            lex("This text is **bold**, very BOLD!").unwrap(),
            vec![
                Segment::plain("This text is "),
                bold("bold"),
                Segment::plain(", very BOLD!"),
            ]
        );
    }

    #[rstest]
    #[case("**whole**", bold("whole"))]
    #[case("_whole_", italic("whole"))]
    #[case("`whole`", code("whole"))]
    fn span_covering_everything_drops_empty_plain(#[case] text: &str, #[case] expected: Segment) {
        assert_eq!(lex(text).unwrap(), vec![expected]);
    }

    #[test]
    fn unclosed_italic_names_delimiter() {
        let err = lex("This is _incorrect text").unwrap_err();
        assert_eq!(err.delimiter(), "_");
        assert_eq!(
            err,
            InlineError::UnclosedDelimiter {
                delimiter: "_",
                text: "This is _incorrect text".to_string(),
            }
        );
    }

    #[rstest]
    #[case("**a** and **b**", "**", 4)]
    #[case("_a_ _b_", "_", 4)]
    fn repeated_spans_are_rejected(
        #[case] text: &str,
        #[case] delimiter: &str,
        #[case] count: usize,
    ) {
        match lex(text).unwrap_err() {
            InlineError::RepeatedDelimiter {
                delimiter: d,
                count: c,
                ..
            } => {
                assert_eq!(d, delimiter);
                assert_eq!(c, count);
            }
            other => panic!("expected RepeatedDelimiter, got {other:?}"),
        }
    }

    #[test]
    fn three_ticks_is_unclosed() {
        assert!(matches!(
            lex("a ` b ` c `").unwrap_err(),
            InlineError::UnclosedDelimiter { delimiter: "`", .. }
        ));
    }

    #[test]
    fn image_then_link() {
        assert_eq!(
            lex("![a](x.png) and [b](y)").unwrap(),
            vec![
                Segment::image("a", "x.png"),
                Segment::plain(" and "),
                Segment::link("b", "y"),
            ]
        );
    }

    #[test]
    fn multiple_links() {
        assert_eq!(
            lex("This is text with an [link](https://www.google.com) and another [second link](https://www.wikipedia.com)").unwrap(),
            vec![
                Segment::plain("This is text with an "),
                Segment::link("link", "https://www.google.com"),
                Segment::plain(" and another "),
                Segment::link("second link", "https://www.wikipedia.com"),
            ]
        );
    }

    #[test]
    fn link_pass_leaves_images_alone() {
        let out = split_links(vec![Segment::plain(
            "an ![image](https://i.imgur.com/zjjcJKZ.png) and another [link](https://www.wikipedia.com)",
        )])
        .unwrap();
        assert_eq!(
            out,
            vec![
                Segment::plain("an ![image](https://i.imgur.com/zjjcJKZ.png) and another "),
                Segment::link("link", "https://www.wikipedia.com"),
            ]
        );
    }

    #[test]
    fn image_pass_leaves_links_alone() {
        let out = split_images(vec![Segment::plain(
            "a [link](https://x.dev) and ![pic](https://x.dev/p.png)",
        )])
        .unwrap();
        assert_eq!(
            out,
            vec![
                Segment::plain("a [link](https://x.dev) and "),
                Segment::image("pic", "https://x.dev/p.png"),
            ]
        );
    }

    #[test]
    fn underscores_in_urls_are_not_emphasis() {
        assert_eq!(
            lex("see [docs](https://x.dev/some_page_name) now").unwrap(),
            vec![
                Segment::plain("see "),
                Segment::link("docs", "https://x.dev/some_page_name"),
                Segment::plain(" now"),
            ]
        );
    }

    #[test]
    fn tagged_segments_pass_through_later_stages() {
        let input = vec![italic("Text _node_ 1"), Segment::plain("Text node 2")];
        assert_eq!(split_italic(input.clone()).unwrap(), input);
    }

    #[test]
    fn markup_does_not_nest_inside_links() {
        assert_eq!(
            lex("[**bold label**](u)").unwrap(),
            vec![Segment::link("**bold label**", "u")]
        );
    }

    #[test]
    fn reference_cannot_span_lines() {
        assert_eq!(
            lex("[label\n](url)").unwrap(),
            vec![Segment::plain("[label\n](url)")]
        );
    }

    #[test]
    fn everything_at_once() {
        let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            lex(text).unwrap(),
            vec![
                Segment::plain("This is "),
                bold("text"),
                Segment::plain(" with an "),
                italic("italic"),
                Segment::plain(" word and a "),
                code("code block"),
                Segment::plain(" and an "),
                Segment::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                Segment::plain(" and a "),
                Segment::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn link_segment_debug_shape() {
        insta::assert_debug_snapshot!(lex("[b](y)").unwrap(), @r#"
        [
            Segment {
                content: "b",
                kind: Link,
                destination: Some(
                    "y",
                ),
            },
        ]
        "#);
    }
}
