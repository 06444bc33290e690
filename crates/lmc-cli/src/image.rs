//! Memory-image text format.
//!
//! Whitespace-separated decimal cell values (`0..=999`), `#` starts a
//! comment running to end of line. This is a raw cell image, not assembly
//! text; values are loaded verbatim into consecutive cells from address 0.

use lmc_core::{MEMORY_CELLS, STORED_MODULUS};
use thiserror::Error;

/// Error raised while parsing a memory-image text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// A token is not a decimal cell value.
    #[error("line {line}: `{token}` is not a cell value")]
    BadToken {
        /// 1-based source line of the rejected token.
        line: usize,
        /// The rejected token.
        token: String,
    },
    /// A value falls outside the stored representation.
    #[error("line {line}: {value} is outside the stored range 0..1000")]
    ValueOutOfRange {
        /// 1-based source line of the rejected value.
        line: usize,
        /// The rejected value.
        value: u16,
    },
    /// The image supplies more cells than the machine has.
    #[error("image holds more than 100 cells")]
    TooManyCells,
}

/// Parses a memory-image text into consecutive cell values.
///
/// # Errors
///
/// Returns an [`ImageError`] naming the offending line for malformed or
/// out-of-range tokens, or [`ImageError::TooManyCells`] past 100 values.
pub fn parse_image(text: &str) -> Result<Vec<u16>, ImageError> {
    let mut cells = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw_line
            .find('#')
            .map_or(raw_line, |comment| &raw_line[..comment]);

        for token in content.split_whitespace() {
            let value: u16 = token.parse().map_err(|_| ImageError::BadToken {
                line,
                token: token.to_string(),
            })?;

            if value >= STORED_MODULUS {
                return Err(ImageError::ValueOutOfRange { line, value });
            }
            if cells.len() == usize::from(MEMORY_CELLS) {
                return Err(ImageError::TooManyCells);
            }
            cells.push(value);
        }
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::{parse_image, ImageError};

    #[test]
    fn parses_values_across_lines_and_whitespace() {
        let cells = parse_image("901 902\n  000\n").expect("valid image");
        assert_eq!(cells, vec![901, 902, 0]);
    }

    #[test]
    fn comments_run_to_end_of_line() {
        let text = "901  # read a value\n902  # print it\n000  # stop\n";
        let cells = parse_image(text).expect("valid image");
        assert_eq!(cells, vec![901, 902, 0]);
    }

    #[test]
    fn empty_and_comment_only_images_parse_to_nothing() {
        assert_eq!(parse_image("").expect("valid image"), Vec::<u16>::new());
        assert_eq!(
            parse_image("# nothing here\n\n").expect("valid image"),
            Vec::<u16>::new()
        );
    }

    #[test]
    fn bad_token_reports_its_line() {
        let error = parse_image("901\nBRZ 08\n").expect_err("rejects mnemonics");
        assert_eq!(
            error,
            ImageError::BadToken {
                line: 2,
                token: "BRZ".to_string(),
            }
        );
    }

    #[test]
    fn negative_values_are_not_cell_values() {
        let error = parse_image("-5").expect_err("rejects negatives");
        assert!(matches!(error, ImageError::BadToken { line: 1, .. }));
    }

    #[test]
    fn out_of_range_value_reports_its_line() {
        let error = parse_image("000\n1000\n").expect_err("rejects 1000");
        assert_eq!(
            error,
            ImageError::ValueOutOfRange {
                line: 2,
                value: 1000,
            }
        );
    }

    #[test]
    fn more_than_one_hundred_cells_is_an_error() {
        let text = "0 ".repeat(101);
        assert_eq!(parse_image(&text), Err(ImageError::TooManyCells));
    }

    #[test]
    fn exactly_one_hundred_cells_is_accepted() {
        let text = "0 ".repeat(100);
        assert_eq!(parse_image(&text).expect("valid image").len(), 100);
    }
}
