//! Applications built on `catena-collections`.
//!
//! - [`xml`] validates tag nesting with a [`LinkedStack`](catena_collections::LinkedStack)
//!   and extracts binary images from the image XML format.
//! - [`labeler`] counts 4-connected components of a bitmap by flooding each
//!   one through a [`LinkedQueue`](catena_collections::LinkedQueue).
//! - [`report`] renders the labeler's per-image text output.
//!
//! # Example
//!
//! ```
//! use catena_apps::{labeler, xml};
//!
//! let doc = "<img>\n<name>pair</name>\n<height>1</height>\n<width>3</width>\n<data>\n101\n</data>\n</img>\n";
//! let images = xml::parse_images(doc)?;
//! assert_eq!(labeler::count_components(&images[0].bitmap)?, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod labeler;
pub mod report;
pub mod xml;

pub use labeler::{Bitmap, Labels, Point, count_components, label};
pub use xml::{Image, MalformedXml, ParseError, check_well_formed, parse_images};
