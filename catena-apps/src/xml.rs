//! Tag-balance checking and bitmap extraction for the image XML format.
//!
//! The format is line oriented:
//!
//! ```text
//! <dataset>
//!   <img>
//!     <name>ring</name>
//!     <height>3</height>
//!     <width>3</width>
//!     <data>
//!       111
//!       101
//!       111
//!     </data>
//!   </img>
//! </dataset>
//! ```
//!
//! Only tag nesting is validated; attributes, entities and text content
//! outside the image fields are ignored.

use std::fmt;

use catena_collections::{Error, LinkedStack};

use crate::labeler::{Bitmap, ShapeMismatch};

// =============================================================================
// Well-formedness
// =============================================================================

/// Why a document failed the tag-balance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedXml {
    /// A closing tag did not match the innermost open tag.
    Mismatch {
        /// 1-based line of the closing tag.
        line: usize,
        /// Name of the innermost open tag.
        expected: String,
        /// Name of the closing tag.
        found: String,
    },
    /// A closing tag appeared with no tag open.
    UnexpectedClose {
        /// 1-based line of the closing tag.
        line: usize,
        /// Name of the closing tag.
        tag: String,
    },
    /// A `<` with no `>` after it on the same line.
    UnterminatedTag {
        /// 1-based line of the `<`.
        line: usize,
    },
    /// The document ended with tags still open; `tag` is the innermost.
    Unclosed {
        /// Innermost open tag.
        tag: String,
        /// Number of tags left open.
        open: usize,
    },
    /// The tag stack could not grow.
    Stack(Error),
}

impl fmt::Display for MalformedXml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected </{expected}>, found </{found}>"),
            Self::UnexpectedClose { line, tag } => {
                write!(f, "line {line}: </{tag}> closes nothing")
            }
            Self::UnterminatedTag { line } => write!(f, "line {line}: unterminated tag"),
            Self::Unclosed { tag, open } => {
                write!(f, "{open} tag(s) left open, innermost <{tag}>")
            }
            Self::Stack(err) => write!(f, "tag stack: {err}"),
        }
    }
}

impl std::error::Error for MalformedXml {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stack(err) => Some(err),
            _ => None,
        }
    }
}

/// One tag occurrence: its name and whether it closes.
#[derive(Debug, PartialEq, Eq)]
struct Tag<'a> {
    name: &'a str,
    closing: bool,
}

/// Yields the tags of a single line in order.
fn tags(line: &str) -> impl Iterator<Item = Result<Tag<'_>, ()>> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let open = rest.find('<')?;
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            rest = "";
            return Some(Err(()));
        };
        let body = &after[..close];
        rest = &after[close + 1..];
        let (closing, body) = match body.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, body),
        };
        let name = body.split_whitespace().next().unwrap_or("");
        Some(Ok(Tag { name, closing }))
    })
}

/// Checks that every closing tag matches the innermost open tag and that
/// nothing is left open at the end.
///
/// # Errors
///
/// Returns the first [`MalformedXml`] violation found.
///
/// # Example
///
/// ```
/// use catena_apps::xml::{check_well_formed, MalformedXml};
///
/// assert!(check_well_formed("<a><b></b></a>").is_ok());
/// assert!(matches!(
///     check_well_formed("<a><b></a></b>"),
///     Err(MalformedXml::Mismatch { .. })
/// ));
/// ```
pub fn check_well_formed(input: &str) -> Result<(), MalformedXml> {
    let mut stack: LinkedStack<String> = LinkedStack::new();

    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        for tag in tags(text) {
            let tag = tag.map_err(|()| MalformedXml::UnterminatedTag { line })?;
            if !tag.closing {
                stack.push(tag.name.to_owned()).map_err(MalformedXml::Stack)?;
                continue;
            }
            let expected = stack.top().map_err(|_| MalformedXml::UnexpectedClose {
                line,
                tag: tag.name.to_owned(),
            })?;
            if expected != tag.name {
                return Err(MalformedXml::Mismatch {
                    line,
                    expected: expected.clone(),
                    found: tag.name.to_owned(),
                });
            }
            stack.pop().map_err(MalformedXml::Stack)?;
        }
    }

    match stack.top() {
        Ok(tag) => Err(MalformedXml::Unclosed {
            tag: tag.clone(),
            open: stack.len(),
        }),
        Err(_) => Ok(()),
    }
}

// =============================================================================
// Image extraction
// =============================================================================

/// A named bitmap read from an `<img>` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Contents of `<name>`.
    pub name: String,
    /// Pixels of the `<data>` block.
    pub bitmap: Bitmap,
}

/// Why an image record could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document failed [`check_well_formed`].
    Malformed(MalformedXml),
    /// A `<height>` or `<width>` value is not a non-negative integer.
    InvalidNumber {
        /// 1-based line of the field.
        line: usize,
        /// `"height"` or `"width"`.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },
    /// A `<data>` block closed before `field` was given.
    MissingField {
        /// 1-based line of `<data>`.
        line: usize,
        /// The field that was never given.
        field: &'static str,
    },
    /// A data row contains something other than `0` or `1`.
    InvalidPixel {
        /// 1-based line of the row.
        line: usize,
        /// The offending character.
        found: char,
    },
    /// A data row has the wrong number of pixels.
    RowWidth {
        /// 1-based line of the row.
        line: usize,
        /// Declared `<width>`.
        expected: usize,
        /// Pixels in the row.
        found: usize,
    },
    /// A `<data>` block has the wrong number of rows.
    RowCount {
        /// 1-based line of `</data>`.
        line: usize,
        /// Declared `<height>`.
        expected: usize,
        /// Rows read.
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed xml: {err}"),
            Self::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: invalid {field} {value:?}")
            }
            Self::MissingField { line, field } => {
                write!(f, "line {line}: image data without <{field}>")
            }
            Self::InvalidPixel { line, found } => {
                write!(f, "line {line}: invalid pixel {found:?}")
            }
            Self::RowWidth {
                line,
                expected,
                found,
            } => write!(f, "line {line}: row has {found} pixels, expected {expected}"),
            Self::RowCount {
                line,
                expected,
                found,
            } => write!(f, "line {line}: image has {found} rows, expected {expected}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MalformedXml> for ParseError {
    fn from(err: MalformedXml) -> Self {
        Self::Malformed(err)
    }
}

/// Text between `<field>` and `</field>` on `line`, trimmed.
fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let open = format!("<{field}>");
    let close = format!("</{field}>");
    let start = line.find(&open)? + open.len();
    let end = line[start..].find(&close)? + start;
    Some(line[start..end].trim())
}

fn parse_dimension(line: usize, field: &'static str, value: &str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
    })
}

fn parse_row(line: usize, text: &str, width: usize) -> Result<Vec<bool>, ParseError> {
    let row = text
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(ParseError::InvalidPixel { line, found }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if row.len() != width {
        return Err(ParseError::RowWidth {
            line,
            expected: width,
            found: row.len(),
        });
    }
    Ok(row)
}

/// Fields collected for the image currently being read.
#[derive(Default)]
struct Record {
    name: Option<String>,
    height: Option<usize>,
    width: Option<usize>,
    pixels: Vec<bool>,
    rows: usize,
    in_data: bool,
}

impl Record {
    fn width(&self, line: usize) -> Result<usize, ParseError> {
        self.width.ok_or(ParseError::MissingField {
            line,
            field: "width",
        })
    }

    fn finish(&mut self, line: usize) -> Result<Image, ParseError> {
        let missing = |field| ParseError::MissingField { line, field };
        let name = self.name.clone().ok_or(missing("name"))?;
        let height = self.height.ok_or(missing("height"))?;
        let width = self.width(line)?;
        if self.rows != height {
            return Err(ParseError::RowCount {
                line,
                expected: height,
                found: self.rows,
            });
        }
        let pixels = std::mem::take(&mut self.pixels);
        self.rows = 0;
        let bitmap = Bitmap::from_pixels(height, width, pixels).map_err(
            |ShapeMismatch { expected, found }| ParseError::RowCount {
                line,
                expected,
                found,
            },
        )?;
        Ok(Image { name, bitmap })
    }
}

/// Reads every image record from `input`.
///
/// The document must pass [`check_well_formed`] first. An image is emitted
/// when its `</data>` closes, using the most recent `<name>`, `<height>`
/// and `<width>` of the enclosing `<img>`.
///
/// # Errors
///
/// Returns a [`ParseError`] for the first malformed record.
pub fn parse_images(input: &str) -> Result<Vec<Image>, ParseError> {
    check_well_formed(input)?;

    let mut images = Vec::new();
    let mut record = Record::default();

    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = text.trim();

        if record.in_data {
            if trimmed.starts_with("</data>") {
                record.in_data = false;
                let image = record.finish(line)?;
                tracing::debug!(name = %image.name, line, "image parsed");
                images.push(image);
            } else if !trimmed.is_empty() {
                let width = record.width(line)?;
                record.pixels.extend(parse_row(line, trimmed, width)?);
                record.rows += 1;
            }
            continue;
        }

        if trimmed.starts_with("<img") {
            record = Record::default();
        }
        if let Some(name) = field_value(text, "name") {
            record.name = Some(name.to_owned());
        }
        if let Some(value) = field_value(text, "height") {
            record.height = Some(parse_dimension(line, "height", value)?);
        }
        if let Some(value) = field_value(text, "width") {
            record.width = Some(parse_dimension(line, "width", value)?);
        }
        if trimmed.starts_with("<data>") {
            record.in_data = true;
        }
    }

    Ok(images)
}
