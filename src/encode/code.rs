use {
  serde::{Deserialize, Serialize},
  log::debug,
  crate::encode::Region,
  crate::error::EncodeError as Error,
  crate::error::QuadCodeError,
  crate::matrix::BitMatrix,
};

type Result<T> = std::result::Result<T, Error>;

/// One element of a quadtree region code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
  /// A homogeneous region of 0s.
  P,
  /// A homogeneous region of 1s.
  B,
  /// A mixed region that splits into four quadrants.
  X,
}
impl Symbol {
  /// The character this symbol renders as.
  pub fn as_char(self) -> char {
    match self {
      Symbol::P => 'P',
      Symbol::B => 'B',
      Symbol::X => 'X',
    }
  }
  /// Whether this symbol terminates a branch of the traversal.
  pub fn is_leaf(self) -> bool {
    match self {
      Symbol::P | Symbol::B => true,
      Symbol::X => false,
    }
  }
  fn leaf(value: bool) -> Self {
    if value { Symbol::B }
    else     { Symbol::P }
  }
}

/// The preorder quadtree code of a bitmap.
///
/// Each region visited by the traversal appends exactly one symbol: a leaf
/// symbol (`P` or `B`) when the region is homogeneous, or `X` followed by the
/// codes of its four quadrants in top-left, top-right, bottom-left,
/// bottom-right order. Quadrants with no cells are skipped without emitting
/// anything, so the code always holds at least one symbol and every `X` is
/// followed by the codes of two to four sub-regions.
///
/// ```
/// fn main() -> Result<(), quad_code::error::EncodeError> {
///   use quad_code::{QuadCode, matrix::BitMatrix};
///   let bits = vec![
///     false, true,
///     true, false,
///   ];
///   let code = QuadCode::from_matrix(&BitMatrix::from_bits(2, 2, bits))?;
///   assert_eq!("XPBBP", code.to_string());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuadCode {
  symbols: Vec<Symbol>,
}

/* Public */
impl QuadCode {
  /// Builds the code describing the contents of a bitmap.
  ///
  /// The matrix is only read, never modified, and may be of any rectangular
  /// shape with at least one cell. A matrix with a zero width or height
  /// cannot be traversed and produces an `EmptyBitmap` error.
  /// ```
  /// fn main() -> Result<(), quad_code::error::EncodeError> {
  ///   use quad_code::{QuadCode, matrix::BitMatrix};
  ///   let blank = BitMatrix::with_dimensions(6, 4);
  ///   assert_eq!("P", QuadCode::from_matrix(&blank)?.to_string());
  ///   Ok(())
  /// }
  /// ```
  pub fn from_matrix(matrix: &BitMatrix) -> Result<Self> {
    if matrix.width == 0 || matrix.height == 0 {
      return Err(Error::EmptyBitmap {
        width: matrix.width,
        height: matrix.height,
      })
    }
    let mut symbols = Vec::new();
    encode_region(
      matrix,
      Region::new(0, 0, matrix.height, matrix.width),
      &mut symbols
    );
    debug!(
      "encoded {}x{} bitmap into {} symbols",
      matrix.width, matrix.height, symbols.len()
    );
    Ok(QuadCode {
      symbols
    })
  }
  /// Reads a PBM file and builds the code of the bitmap it holds.
  ///
  /// Convenience for driving the whole pipeline with one error type.
  pub fn from_pbm_file(path: impl AsRef<std::path::Path>) -> std::result::Result<Self, QuadCodeError> {
    let matrix = crate::pbm::from_file(path)?;
    Ok(QuadCode::from_matrix(&matrix)?)
  }
  /// The number of symbols in the code. Always at least 1.
  pub fn len(&self) -> usize {
    self.symbols.len()
  }
  /// Returns true if the code holds no symbols.
  ///
  /// Never true for a code built by `from_matrix`; present so `len` follows
  /// the usual collection conventions.
  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }
  /// The symbols of the code in preorder.
  pub fn symbols(&self) -> &[Symbol] {
    &self.symbols
  }
}

/* Traits */
impl std::fmt::Display for QuadCode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for symbol in &self.symbols {
      write!(f, "{}", symbol.as_char())?;
    }
    Ok(())
  }
}

/* Private */
fn encode_region(matrix: &BitMatrix, region: Region, symbols: &mut Vec<Symbol>) {
  let reference = matrix.bit(region.left, region.top);
  if is_homogeneous(matrix, region, reference) {
    symbols.push(Symbol::leaf(reference));
    return
  }
  symbols.push(Symbol::X);
  for quadrant in &region.split() {
    if !quadrant.is_empty() {
      encode_region(matrix, *quadrant, symbols);
    }
  }
}

fn is_homogeneous(matrix: &BitMatrix, region: Region, reference: bool) -> bool {
  for y in region.top..region.top + region.rows {
    for x in region.left..region.left + region.cols {
      if matrix.bit(x, y) != reference {
        return false
      }
    }
  }
  true
}
