use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use quad_code::{matrix::BitMatrix, QuadCode};

#[derive(Parser)]
#[command(version)]
#[command(about = "Encode a binary bitmap as a preorder quadtree region code")]
struct Cli {
  /// PBM (P1) bitmap file to encode
  #[arg(short, long, value_name = "FILE", conflicts_with = "manual")]
  file: Option<PathBuf>,

  /// Read dimensions and pixel values from standard input
  #[arg(short, long)]
  manual: bool,
}

fn main() {
  let cli = Cli::parse();
  let result = if let Some(path) = &cli.file {
    encode_file(path)
  }
  else if cli.manual {
    encode_manual()
  }
  else {
    eprintln!("error: pass --file <FILE> or --manual (see --help)");
    process::exit(2);
  };
  match result {
    Ok(code) => println!("{}", code),
    Err(e) => {
      eprintln!("error: {}", e);
      process::exit(1);
    }
  }
}

fn encode_file(path: &PathBuf) -> Result<QuadCode, Box<dyn Error>> {
  Ok(QuadCode::from_pbm_file(path)?)
}

fn encode_manual() -> Result<QuadCode, Box<dyn Error>> {
  let stdin = io::stdin();
  let mut input = stdin.lock();
  print!("image dimensions (width height): ");
  io::stdout().flush()?;
  let dimensions = read_integers(&mut input, 2, "image dimensions")?;
  let (width, height) = (dimensions[0], dimensions[1]);
  if width <= 0 || height <= 0 {
    return Err(format!("invalid image dimensions: {} {}", width, height).into());
  }
  let (width, height) = (width as usize, height as usize);
  println!("pixel values, row by row ({} expected, 0 or 1):", width * height);
  let pixels = read_integers(&mut input, width * height, "pixel values")?;
  let matrix = BitMatrix::from_bits(width, height, pixels.into_iter().map(|p| p != 0));
  Ok(QuadCode::from_matrix(&matrix)?)
}

/// Collects `count` whitespace-separated integers from `reader`, reading as
/// many lines as needed. Extra tokens on the final line are ignored.
fn read_integers(reader: &mut impl BufRead, count: usize, expected: &str) -> Result<Vec<i64>, Box<dyn Error>> {
  let mut values = Vec::with_capacity(count);
  let mut line = String::new();
  while values.len() < count {
    line.clear();
    if reader.read_line(&mut line)? == 0 {
      return Err(format!("input ended while reading the {}", expected).into());
    }
    for token in line.split_whitespace() {
      if values.len() == count { break }
      let value = token
        .parse::<i64>()
        .map_err(|_| format!("expected an integer in the {}, found \"{}\"", expected, token))?;
      values.push(value);
    }
  }
  Ok(values)
}
