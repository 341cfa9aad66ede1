/*!
Reader for ASCII PBM (`P1`) bitmap files.

The accepted format is:

```ignore
P1
# optional full-line comments
<width> <height>
<width*height pixel values, row-major, whitespace-separated>
```

Dimensions and pixels are plain whitespace-separated integers; any nonzero
pixel value is stored as a 1. Comment lines are only recognised between the
marker and the dimensions, each one consumed through its terminating
newline. Input that runs out before the declared number of pixels is a
[UnexpectedEof](../error/enum.PbmError.html) error, never a partial bitmap.
*/

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::PbmError;
use crate::matrix::BitMatrix;

type Result<T> = std::result::Result<T, PbmError>;

/// Reads a bitmap from a PBM file on disk.
///
/// Fails with `PbmError::Io` if the file cannot be opened or read, and with
/// the other `PbmError` variants if its contents are not a valid `P1` bitmap.
pub fn from_file(path: impl AsRef<Path>) -> Result<BitMatrix> {
  let text = fs::read_to_string(path)?;
  from_str(&text)
}

/// Reads a bitmap from any readable PBM source.
pub fn from_reader(mut reader: impl Read) -> Result<BitMatrix> {
  let mut text = String::new();
  reader.read_to_string(&mut text)?;
  from_str(&text)
}

/// Parses a bitmap from in-memory PBM text.
/// ```
/// fn main() -> Result<(), quad_code::error::PbmError> {
///   use quad_code::pbm;
///   let m = pbm::from_str("P1\n3 2\n0 1 0\n1 0 1\n")?;
///   assert_eq!(3, m.width);
///   assert_eq!(2, m.height);
///   assert_eq!(true, m.get(1, 0).unwrap());
///   Ok(())
/// }
/// ```
pub fn from_str(text: &str) -> Result<BitMatrix> {
  let mut scanner = Scanner::new(text);
  let marker = scanner.marker();
  if marker != "P1" {
    return Err(PbmError::BadMagic {
      found: marker.to_string(),
    })
  }
  scanner.skip_comment_lines();
  let width = scanner.next_dimension("image width")?;
  let height = scanner.next_dimension("image height")?;
  if width == 0 || height == 0 {
    return Err(PbmError::ZeroDimension {
      width,
      height,
    })
  }
  let mut bits = Vec::with_capacity(width*height);
  for _ in 0..width*height {
    bits.push(scanner.next_integer("pixel values")? != 0);
  }
  debug!("parsed {}x{} bitmap from pbm input", width, height);
  Ok(BitMatrix::from_bits(width, height, bits))
}

/* Cursor over the raw PBM text. The format is ASCII, so it walks bytes. */
struct Scanner<'a> {
  bytes: &'a [u8],
  pos: usize,
}
impl<'a> Scanner<'a> {
  fn new(text: &'a str) -> Self {
    Scanner {
      bytes: text.as_bytes(),
      pos: 0,
    }
  }
  fn peek(&self) -> Option<u8> {
    self.bytes.get(self.pos).copied()
  }
  fn skip_whitespace(&mut self) {
    while let Some(byte) = self.peek() {
      if !byte.is_ascii_whitespace() { break }
      self.pos += 1;
    }
  }
  /// The marker token: up to two leading non-whitespace characters.
  fn marker(&mut self) -> &'a str {
    self.skip_whitespace();
    let start = self.pos;
    while self.pos - start < 2 {
      match self.peek() {
        Some(byte) if !byte.is_ascii_whitespace() => self.pos += 1,
        _ => break,
      }
    }
    /* Slicing on byte offsets is fine here: both ends sit on ASCII
    non-whitespace found above, or the start of the input. */
    std::str::from_utf8(&self.bytes[start..self.pos]).unwrap_or("")
  }
  /// Consumes every full line starting with `#`, including its newline.
  fn skip_comment_lines(&mut self) {
    loop {
      self.skip_whitespace();
      if self.peek() != Some(b'#') { return }
      while let Some(byte) = self.peek() {
        self.pos += 1;
        if byte == b'\n' { break }
      }
    }
  }
  /// The next maximal run of non-whitespace bytes, if any input remains.
  fn next_token(&mut self) -> Option<&'a str> {
    self.skip_whitespace();
    let start = self.pos;
    while let Some(byte) = self.peek() {
      if byte.is_ascii_whitespace() { break }
      self.pos += 1;
    }
    if self.pos == start { return None }
    std::str::from_utf8(&self.bytes[start..self.pos]).ok()
  }
  fn next_integer(&mut self, expected: &'static str) -> Result<i64> {
    let token = match self.next_token() {
      Some(token) => token,
      None => return Err(PbmError::UnexpectedEof {
        expected
      }),
    };
    token.parse::<i64>().map_err(|_| PbmError::BadToken {
      token: token.to_string(),
    })
  }
  fn next_dimension(&mut self, expected: &'static str) -> Result<usize> {
    let token = match self.next_token() {
      Some(token) => token,
      None => return Err(PbmError::UnexpectedEof {
        expected
      }),
    };
    token.parse::<usize>().map_err(|_| PbmError::BadToken {
      token: token.to_string(),
    })
  }
}

#[cfg(test)]
mod api {
  use super::*;
  #[test]
  fn minimal_bitmap() -> Result<()> {
    let m = from_str("P1\n2 2\n0 1\n1 0\n")?;
    assert_eq!(2, m.width);
    assert_eq!(2, m.height);
    assert_eq!(
      vec![false,true, true,false],
      m.to_bits()
    );
    Ok(())
  }
  #[test]
  fn comment_lines_are_transparent() -> Result<()> {
    let with_comments = from_str("P1\n# created by hand\n# second note\n2 2\n1 1 1 1\n")?;
    let without = from_str("P1\n2 2\n1 1 1 1\n")?;
    assert_eq!(without, with_comments);
    Ok(())
  }
  #[test]
  fn flexible_whitespace() -> Result<()> {
    let m = from_str("P1  3\n1\t0 1 0")?;
    assert_eq!(3, m.width);
    assert_eq!(1, m.height);
    assert_eq!(vec![false,true,false], m.to_bits());
    Ok(())
  }
  #[test]
  fn nonzero_pixels_count_as_one() -> Result<()> {
    let m = from_str("P1\n2 1\n7 0\n")?;
    assert_eq!(vec![true,false], m.to_bits());
    Ok(())
  }
  #[test]
  fn trailing_data_is_ignored() -> Result<()> {
    let m = from_str("P1\n1 1\n0\n1 1 1\n")?;
    assert_eq!(vec![false], m.to_bits());
    Ok(())
  }
  #[test]
  fn rejects_wrong_marker() {
    match from_str("P2\n2 2\n0 0 0 0\n") {
      Err(PbmError::BadMagic{found}) => assert_eq!("P2", found),
      other => panic!("expected BadMagic, got {:?}", other),
    }
  }
  #[test]
  fn rejects_empty_input() {
    assert!(matches!(from_str(""), Err(PbmError::BadMagic{..})));
  }
  #[test]
  fn rejects_missing_dimensions() {
    assert!(matches!(
      from_str("P1\n# only a comment\n"),
      Err(PbmError::UnexpectedEof{expected: "image width"})
    ));
  }
  #[test]
  fn rejects_truncated_pixels() {
    assert!(matches!(
      from_str("P1\n2 2\n0 1 1\n"),
      Err(PbmError::UnexpectedEof{expected: "pixel values"})
    ));
  }
  #[test]
  fn rejects_garbage_pixel() {
    match from_str("P1\n2 1\n0 x\n") {
      Err(PbmError::BadToken{token}) => assert_eq!("x", token),
      other => panic!("expected BadToken, got {:?}", other),
    }
  }
  #[test]
  fn rejects_garbage_dimension() {
    assert!(matches!(
      from_str("P1\nwide 2\n"),
      Err(PbmError::BadToken{..})
    ));
  }
  #[test]
  fn rejects_zero_dimensions() {
    assert!(matches!(
      from_str("P1\n0 0\n"),
      Err(PbmError::ZeroDimension{width: 0, height: 0})
    ));
    assert!(matches!(
      from_str("P1\n3 0\n"),
      Err(PbmError::ZeroDimension{width: 3, height: 0})
    ));
  }
  #[test]
  fn from_reader_matches_from_str() -> Result<()> {
    let text = "P1\n2 2\n0 1 1 0\n";
    assert_eq!(from_str(text)?, from_reader(text.as_bytes())?);
    Ok(())
  }
  #[test]
  fn missing_file_is_io_error() {
    assert!(matches!(
      from_file("definitely/not/a/real/file.pbm"),
      Err(PbmError::Io{..})
    ));
  }
}
