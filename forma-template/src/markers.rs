//! Marker-delimited blocks.
//!
//! Templates carry demo code wrapped in a start and end marker. A scan
//! splits the content into plain and marked segments so a rule can drop
//! or unwrap every marked block in one pass.

use crate::{Error, Result};

/// A piece of scanned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// A block between markers; `body` excludes both markers
    Marked { body: &'a str },
}

/// Split `content` into literal and marked segments.
///
/// An end marker with no preceding start marker is ordinary text. A start
/// marker without a matching end fails with [`Error::UnbalancedMarker`].
pub fn scan<'a>(file: &str, content: &'a str, start: &str, end: &str) -> Result<Vec<Segment<'a>>> {
    let mut segments = Vec::new();
    let mut rest = content;
    let mut offset = 0;

    while let Some(open) = rest.find(start) {
        let body_start = open + start.len();
        let Some(close) = rest[body_start..].find(end) else {
            return Err(Error::UnbalancedMarker {
                file: file.to_string(),
                marker: start.to_string(),
                offset: offset + open,
            });
        };

        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        segments.push(Segment::Marked {
            body: &rest[body_start..body_start + close],
        });

        let consumed = body_start + close + end.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    Ok(segments)
}

/// Remove every marked block, or keep only its body when `keep_body` is set.
pub fn strip(file: &str, content: &str, start: &str, end: &str, keep_body: bool) -> Result<String> {
    let segments = scan(file, content, start, end)?;
    let mut out = String::with_capacity(content.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Marked { body } if keep_body => out.push_str(body),
            Segment::Marked { .. } => {}
        }
    }
    Ok(out)
}
