//! Initialization-vector (COE) text codec.
//!
//! File layout:
//! - `memory_initialization_radix=10;`
//! - `memory_initialization_vector=`
//! - one decimal value per line, comma-separated, final value terminated
//!   by a semicolon

use std::io::{self, Write};

use itertools::{Itertools, Position};

use crate::PixelGrid;

pub const RADIX_LINE: &str = "memory_initialization_radix=10;";
pub const VECTOR_MARKER: &str = "memory_initialization_vector=";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoeError {
    #[error("no `{VECTOR_MARKER}` marker in file")]
    MissingMarker,

    #[error("entry {index} (`{text}`) does not fit in a byte")]
    ValueOutOfRange { index: usize, text: String },

    #[error("expected {expected} pixel values, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// Serialize a flat sample sequence as an initialization vector.
pub fn write<W: Write>(out: &mut W, pixels: &[u8]) -> io::Result<()> {
    writeln!(out, "{RADIX_LINE}")?;
    writeln!(out, "{VECTOR_MARKER}")?;

    let mut num_buf = itoa::Buffer::new();
    for (position, pixel) in pixels.iter().with_position() {
        out.write_all(num_buf.format(*pixel).as_bytes())?;
        match position {
            Position::Last | Position::Only => out.write_all(b";")?,
            Position::First | Position::Middle => out.write_all(b",\n")?,
        }
    }

    Ok(())
}

/// Parse an initialization vector back into a square grid.
///
/// The scan is tolerant of surrounding whitespace and punctuation: every
/// decimal digit run after the marker counts as one value. The run count
/// must equal `side * side` exactly.
pub fn parse(text: &str, side: usize) -> Result<PixelGrid, CoeError> {
    let (_, tail) = text
        .split_once(VECTOR_MARKER)
        .ok_or(CoeError::MissingMarker)?;

    let mut data = Vec::with_capacity(side * side);
    for (index, run) in tail
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .enumerate()
    {
        let value: u8 = run.parse().map_err(|_| CoeError::ValueOutOfRange {
            index,
            text: run.to_owned(),
        })?;
        data.push(value);
    }

    if data.len() != side * side {
        return Err(CoeError::CountMismatch {
            expected: side * side,
            found: data.len(),
        });
    }

    Ok(PixelGrid::from_flat(side, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_to_string(pixels: &[u8]) -> String {
        let mut out = Vec::new();
        write(&mut out, pixels).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_format() {
        let text = write_to_string(&[0, 1, 200, 255]);
        assert_eq!(
            text,
            "memory_initialization_radix=10;\n\
             memory_initialization_vector=\n\
             0,\n1,\n200,\n255;"
        );
    }

    #[test]
    fn test_write_single_value_gets_semicolon() {
        let text = write_to_string(&[42]);
        assert!(text.ends_with("memory_initialization_vector=\n42;"));
    }

    #[test]
    fn test_roundtrip() {
        let pixels: Vec<u8> = (0..64).map(|i| (i * 37 % 256) as u8).collect();
        let text = write_to_string(&pixels);

        let grid = parse(&text, 8).unwrap();
        assert_eq!(grid.as_bytes(), pixels.as_slice());
    }

    #[test]
    fn test_parse_ignores_header_digits() {
        // the radix line contains a digit run that must not leak into the data
        let text = write_to_string(&[9, 8, 7, 6]);
        let grid = parse(&text, 2).unwrap();
        assert_eq!(grid.as_bytes(), &[9, 8, 7, 6]);
    }

    #[test]
    fn test_parse_tolerates_loose_punctuation() {
        let text = "memory_initialization_vector=\n  12 ;34\t56 ,, 7;";
        let grid = parse(text, 2).unwrap();
        assert_eq!(grid.as_bytes(), &[12, 34, 56, 7]);
    }

    #[test]
    fn test_parse_missing_marker() {
        let result = parse("memory_initialization_radix=10;\n1,\n2;", 2);
        assert_eq!(result, Err(CoeError::MissingMarker));
    }

    #[test]
    fn test_parse_undersized_vector() {
        let text = "memory_initialization_vector=\n1,\n2,\n3;";
        let result = parse(text, 2);
        assert_eq!(
            result,
            Err(CoeError::CountMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_parse_oversized_vector() {
        let text = "memory_initialization_vector=\n1,\n2,\n3,\n4,\n5;";
        let result = parse(text, 2);
        assert_eq!(
            result,
            Err(CoeError::CountMismatch {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn test_parse_value_out_of_range() {
        let text = "memory_initialization_vector=\n1,\n300,\n3,\n4;";
        let result = parse(text, 2);
        assert_eq!(
            result,
            Err(CoeError::ValueOutOfRange {
                index: 1,
                text: "300".to_owned()
            })
        );
    }
}
