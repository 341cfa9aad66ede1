
use bitvec::vec::BitVec;
use crate::error::BitMatrixError;

type Result<T> = std::result::Result<T, BitMatrixError>;

/// A 2-d bit-matrix holding the pixels of a binary bitmap.
///
/// Pixels are stored row-major in a single contiguous bit-vector, so the
/// cell at `(x, y)` lives at index `y*width + x`. Any nonzero source pixel
/// is stored as a 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
  /// Width of the matrix.
  pub width: usize,
  /// Height of the matrix.
  pub height: usize,
  bits: BitVec,
}
impl BitMatrix {
  /// Creates an empty BitMatrix with zero width or height.
  pub fn new() -> Self {
    BitMatrix {
      width: 0,
      height: 0,
      bits: BitVec::new(),
    }
  }
  /// Creates an all-zero BitMatrix with predefined dimensions.
  pub fn with_dimensions(width: usize, height: usize) -> Self {
    let mut bits = BitVec::with_capacity(width*height);
    bits.resize_with(width*height, Default::default);
    BitMatrix {
      width,
      height,
      bits,
    }
  }
  /// Builds a BitMatrix instance from another collection of bits, row by row.
  ///
  /// If the data passed in contains more bits than will fit a matrix of the
  /// specified height and width, excess data is discarded. If not enough bits
  /// are passed in, 0s will be appended until the right size is reached.
  /// ```
  /// use quad_code::matrix::BitMatrix;
  /// let m = BitMatrix::from_bits(2, 2, vec![false, true, true, false]);
  /// assert_eq!(2, m.width);
  /// assert_eq!(2, m.height);
  /// assert_eq!(true, m.get(1, 0).unwrap());
  /// ```
  pub fn from_bits(width: usize, height: usize, data: impl IntoIterator<Item=bool>) -> Self {
    let mut bits: BitVec = data.into_iter().take(width*height).collect();
    bits.resize_with(width*height, Default::default);
    BitMatrix {
      width,
      height,
      bits,
    }
  }
  /// Returns the state of a bit at a specific coordinate.
  pub fn get(&self, x: usize, y: usize) -> Result<bool> {
    if x >= self.width || y >= self.height {
      return Err(BitMatrixError::OutOfBounds {
        x_y: [x, y],
        max_x_y: [self.width.saturating_sub(1), self.height.saturating_sub(1)],
      })
    }
    Ok(self.bits[y*self.width + x])
  }
  /// Changes the state of a bit at a specific coordinate.
  pub fn set(&mut self, x: usize, y: usize, state: bool) -> Result<()> {
    if x >= self.width || y >= self.height {
      return Err(BitMatrixError::OutOfBounds {
        x_y: [x, y],
        max_x_y: [self.width.saturating_sub(1), self.height.saturating_sub(1)],
      })
    }
    let index: usize = y*self.width + x;
    self.bits.set(index, state);
    Ok(())
  }
  /// Produces the contents of the matrix as a flat vec of bits.
  ///
  /// Vec contains each row one after another.
  pub fn to_bits(&self) -> Vec<bool> {
    let mut bits = Vec::with_capacity(self.bits.len());
    bits.extend(&self.bits);
    bits
  }
  /* Unchecked access for the traversal, which stays inside the extent
  by construction. */
  pub(crate) fn bit(&self, x: usize, y: usize) -> bool {
    self.bits[y*self.width + x]
  }
}
impl Default for BitMatrix {
  fn default() -> Self {
    BitMatrix::new()
  }
}

#[cfg(test)]
mod api {
  use super::*;
  #[test]
  fn new() {
    let m = BitMatrix::new();
    assert_eq!(0, m.width);
    assert_eq!(0, m.height);
    assert_eq!(Vec::<bool>::new(), m.to_bits());
  }
  #[test]
  fn with_dimensions() {
    let m = BitMatrix::with_dimensions(5, 3);
    assert_eq!(5, m.width);
    assert_eq!(3, m.height);
    assert_eq!(vec![false; 15], m.to_bits());
  }
  #[test]
  fn from_bits() {
    let bits = vec![
      false,false,false,true,
      false,false,true,false,
      false,true,false,false,
      true,false,false,false,
    ];
    let m = BitMatrix::from_bits(4, 4, bits.clone());
    assert_eq!(4, m.width);
    assert_eq!(4, m.height);
    assert_eq!(bits, m.to_bits());
  }
  #[test]
  fn from_bits_pads_missing_data() {
    let m = BitMatrix::from_bits(3, 2, vec![true, true]);
    assert_eq!(
      vec![true,true,false, false,false,false],
      m.to_bits()
    );
  }
  #[test]
  fn from_bits_discards_excess_data() {
    let m = BitMatrix::from_bits(2, 1, vec![false, true, true, true]);
    assert_eq!(vec![false, true], m.to_bits());
  }
  #[test]
  fn get() -> Result<()> {
    let bits = vec![
      false,false,false,true,
      false,false,true,false,
      false,true,false,false,
      true,false,false,false,
    ];
    let m = BitMatrix::from_bits(4, 4, bits);
    assert_eq!(false, m.get(0, 0)?);
    assert_eq!(true, m.get(3, 0)?);
    assert_eq!(true, m.get(2, 1)?);
    assert_eq!(true, m.get(1, 2)?);
    assert_eq!(true, m.get(0, 3)?);
    assert_eq!(false, m.get(3, 3)?);
    Ok(())
  }
  #[test]
  fn get_out_of_bounds() {
    let m = BitMatrix::with_dimensions(4, 2);
    assert!(m.get(4, 0).is_err());
    assert!(m.get(0, 2).is_err());
    assert!(m.get(0, 0).is_ok());
  }
  #[test]
  fn set() -> Result<()> {
    let mut m = BitMatrix::with_dimensions(8, 8);
    assert_eq!(false, m.get(0, 0)?);
    m.set(0, 0, true)?;
    assert_eq!(true, m.get(0, 0)?);
    m.set(0, 0, false)?;
    assert_eq!(false, m.get(0, 0)?);
    m.set(3, 3, true)?;
    assert_eq!(true, m.get(3, 3)?);
    assert_eq!(false, m.get(2, 3)?);
    assert_eq!(false, m.get(3, 2)?);
    Ok(())
  }
  #[test]
  fn set_out_of_bounds() {
    let mut m = BitMatrix::with_dimensions(2, 2);
    assert!(m.set(2, 0, true).is_err());
    assert!(m.set(0, 5, true).is_err());
  }
  #[test]
  fn bit_matches_get() -> Result<()> {
    let bits = vec![
      true,false,true,
      false,true,false,
    ];
    let m = BitMatrix::from_bits(3, 2, bits);
    for y in 0..2 {
      for x in 0..3 {
        assert_eq!(m.get(x, y)?, m.bit(x, y));
      }
    }
    Ok(())
  }
}
