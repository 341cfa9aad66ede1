#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

/*!
Encode binary bitmaps as preorder quadtree region codes.

A bitmap is recursively subdivided into quadrants until every region is
homogeneous; each visited region contributes exactly one symbol to the code:
`P` for a region of all 0s, `B` for a region of all 1s, `X` for a mixed
region that splits further.

**Note:** This library relies upon [bitvec](https://docs.rs/bitvec/0.17.4/bitvec/)
to store bitmap contents. Always try to compile with optimisations, `bitvec`
is very slow without them!
*/

/*!
# How it Works:

## Input Bit-Matrix:

```ignore
00|11
00|11
-----
01|00
11|00
```

The 4x4 matrix is not homogeneous, so it is split into four quadrants and
an `X` is emitted. The upper-left quadrant is all 0s (`P`), the upper-right
all 1s (`B`). The lower-left is mixed, so it emits `X` and splits again into
four single cells (`P`, `B`, `B`, `B`), and the lower-right is all 0s (`P`).

## Resulting Code:

Visiting each region before its quadrants, upper-left to lower-right:

`XPBXPBBBP`

Matrices do not need to be square or power-of-two sized: quadrants of
odd-sized regions are produced with floor division, and the zero-sized
quadrants this creates on 1-wide or 1-tall strips are skipped without
emitting anything.

## Reading Bitmaps:

Bitmaps come from an ASCII PBM (`P1`) file via the [pbm](pbm/index.html)
module, or from any source of row-major bits via
[BitMatrix::from_bits](matrix/struct.BitMatrix.html#method.from_bits).

```
fn main() -> Result<(), quad_code::error::QuadCodeError> {
  use quad_code::{QuadCode, pbm};
  let text = "P1\n# a checkerboard\n2 2\n0 1\n1 0\n";
  let matrix = pbm::from_str(text)?;
  let code = QuadCode::from_matrix(&matrix)?;
  assert_eq!("XPBBP", code.to_string());
  Ok(())
}
```
*/

pub use encode::{QuadCode, Symbol};

/// `QuadCode` structure and the encoding traversal.
pub mod encode;

/// Library error types.
pub mod error;

/// `BitMatrix` struct.
pub mod matrix;

/// Reader for ASCII PBM (`P1`) bitmap files.
pub mod pbm;
