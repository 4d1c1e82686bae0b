use crate::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link},
    types::{SpanKind, TextSpan},
};

/// Tokenizes raw inline markdown into a sequence of [`TextSpan`]s.
///
/// Passes run in a fixed order, each consuming the full output of the one
/// before: bold (`**`, `__`), italic (`_`, `*`), code (`` ` ``), images, links.
/// Only spans still `Plain` after a pass are visible to later passes, so
/// emphasis is never nested.
pub fn text_to_spans(raw: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::plain(raw)];
    for (delimiter, kind) in Emphasis::PASSES {
        spans = split_by_delimiter(spans, delimiter, kind)?;
    }
    spans = split_by_delimiter(spans, CodeSpan::TICK, SpanKind::Code)?;
    spans = split_images(spans)?;
    split_links(spans)
}

/// Splits every `Plain` span on `delimiter`, tagging the inside pieces with `kind`.
///
/// Non-plain spans pass through untouched. A plain span must split into an
/// odd number of pieces; an even count means a delimiter was left open.
/// Empty pieces are dropped, so no zero-length span is ever emitted.
pub fn split_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text().split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text().to_string(),
            });
        }

        for (idx, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if idx % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(piece, piece_kind));
        }
    }
    Ok(out)
}

/// Extracts `![alt](url)` images from every `Plain` span.
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ParseError> {
    split_plain_with(spans, try_parse_image)
}

/// Extracts `[text](url)` links from every `Plain` span.
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ParseError> {
    split_plain_with(spans, try_parse_link)
}

/// A scanner tried at each byte of a plain span.
///
/// Returns `Ok(None)` with the cursor unchanged when nothing starts here,
/// or the parsed span with the cursor just past the construct.
type TryParse = fn(&mut Cursor<'_>) -> Result<Option<TextSpan>, ParseError>;

fn split_plain_with(
    spans: Vec<TextSpan>,
    try_parse: TryParse,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            scan_plain(span.text(), try_parse, &mut out)?;
        } else {
            out.push(span);
        }
    }
    Ok(out)
}

fn scan_plain(text: &str, try_parse: TryParse, out: &mut Vec<TextSpan>) -> Result<(), ParseError> {
    // Flush accumulated text as a Plain span, skipping empty runs
    fn flush_text(out: &mut Vec<TextSpan>, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            out.push(TextSpan::plain(cur.slice(start, end)));
        }
    }

    let mut cur = Cursor::new(text);
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.i;
        if let Some(span) = try_parse(&mut cur)? {
            flush_text(out, &cur, text_start, start);
            out.push(span);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    flush_text(out, &cur, text_start, text.len());
    Ok(())
}

fn malformed(kind: SpanKind, cur: &Cursor<'_>, reason: &'static str) -> ParseError {
    ParseError::MalformedInlineSyntax {
        kind,
        text: cur.s.to_string(),
        reason,
    }
}

/// Parses an image at the current position.
///
/// `![` commits to image syntax: an unclosed bracket, a missing `(url)` or
/// an unclosed parenthesis is an error. The alt text is the content of the
/// innermost bracket pair, and whitespace is tolerated between `]` and `(`.
fn try_parse_image(cur: &mut Cursor<'_>) -> Result<Option<TextSpan>, ParseError> {
    if !cur.starts_with(Image::OPEN) {
        return Ok(None);
    }
    cur.bump_n(Image::OPEN.len());

    let mut alt_start = cur.i;
    loop {
        match cur.advance_to_any(&[Link::OPEN, Image::ALT_CLOSE]) {
            Some(Link::OPEN) => {
                cur.bump();
                alt_start = cur.i;
            }
            Some(_) => break,
            None => return Err(malformed(SpanKind::Image, cur, "unclosed `![`")),
        }
    }
    let alt_end = cur.i;
    cur.bump(); // ]

    cur.skip_whitespace();
    if cur.peek() != Some(Image::URL_OPEN) {
        return Err(malformed(SpanKind::Image, cur, "expected `(url)` after `]`"));
    }
    cur.bump(); // (

    let url_start = cur.i;
    if cur.advance_to_any(&[Image::URL_CLOSE]).is_none() {
        return Err(malformed(SpanKind::Image, cur, "unclosed `(`"));
    }
    let url_end = cur.i;
    cur.bump(); // )

    Ok(Some(TextSpan::image(
        cur.slice(alt_start, alt_end),
        cur.slice(url_start, url_end),
    )))
}

/// Parses a link at the current position.
///
/// A `[` with no closing `]` anywhere after it is an error, as is an
/// unclosed `(` after `](`. A bracket pair not directly followed by `(` is
/// literal text, and a nested `[` restarts the candidate so the innermost
/// pair wins. A `[` right after `!` is never a link.
fn try_parse_link(cur: &mut Cursor<'_>) -> Result<Option<TextSpan>, ParseError> {
    if cur.peek() != Some(Link::OPEN) || cur.prev() == Some(Link::IMAGE_MARKER) {
        return Ok(None);
    }

    let saved = cur.clone();
    cur.bump(); // [
    let text_start = cur.i;

    match cur.advance_to_any(&[Link::OPEN, Link::CLOSE]) {
        Some(Link::CLOSE) => {}
        Some(_) => {
            *cur = saved;
            return Ok(None);
        }
        None => return Err(malformed(SpanKind::Link, cur, "unclosed `[`")),
    }
    let text_end = cur.i;
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return Ok(None);
    }
    cur.bump(); // (

    let url_start = cur.i;
    if cur.advance_to_any(&[Link::URL_CLOSE]).is_none() {
        return Err(malformed(SpanKind::Link, cur, "unclosed `(`"));
    }
    let url_end = cur.i;
    cur.bump(); // )

    Ok(Some(TextSpan::link(
        cur.slice(text_start, text_end),
        cur.slice(url_start, url_end),
    )))
}
