//! Text report produced by the `catena-labeler` binary.

use crate::{labeler, xml};

/// Output for a document that fails validation or parsing.
pub const ERROR_REPORT: &str = "error\n";

/// Renders one `"<name> <count>"` line per image in `input`.
///
/// Any malformed document, bad image record or labeling failure collapses
/// the whole report to [`ERROR_REPORT`]; the cause is logged.
pub fn render(input: &str) -> String {
    let images = match xml::parse_images(input) {
        Ok(images) => images,
        Err(err) => {
            tracing::error!("rejecting input: {err}");
            return ERROR_REPORT.to_owned();
        }
    };

    let mut out = String::new();
    for image in &images {
        match labeler::count_components(&image.bitmap) {
            Ok(count) => {
                tracing::debug!(name = %image.name, count, "image labeled");
                out.push_str(&format!("{} {}\n", image.name, count));
            }
            Err(err) => {
                tracing::error!("labeling {} failed: {err}", image.name);
                return ERROR_REPORT.to_owned();
            }
        }
    }
    tracing::info!("labeled {} image(s)", images.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_image() {
        let doc = "\
<dataset>
<img><name>a</name><height>2</height><width>2</width>
<data>
10
01
</data>
</img>
<img><name>b</name><height>1</height><width>1</width>
<data>
1
</data>
</img>
</dataset>";
        assert_eq!(render(doc), "a 2\nb 1\n");
    }

    #[test]
    fn malformed_input_reports_error() {
        assert_eq!(render("<a><b></a>"), ERROR_REPORT);
    }

    #[test]
    fn document_without_images_is_empty() {
        assert_eq!(render("<dataset></dataset>"), "");
    }
}
