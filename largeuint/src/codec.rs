//! The canonical text encoding of a [`LargeUInt`], and decimal display.
//!
//! The canonical form is the byte count as four uppercase hex digits in
//! little-endian order, an underscore, then each byte as two uppercase hex
//! digits, least significant byte first: `0x3D4A50` is `0300_054A3D`.

use std::{
  error::Error,
  fmt::{self, Display, Write},
  str::FromStr,
};

use logos::{Lexer, Logos};

use crate::uint::{LargeUInt, MAX_BYTES};

impl Display for LargeUInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02X}{:02X}_", self.len & 0xFF, self.len >> 8)?;
    for i in 0..self.len {
      write!(f, "{:02X}", self.bytes[i])?;
    }
    Ok(())
  }
}

impl LargeUInt {
  /// Exact number of characters the canonical encoding occupies: four count
  /// digits, the separator, and two digits per byte.
  pub fn hex_len(&self) -> usize {
    5 + 2 * self.len
  }

  /// Displays the value in base 10, most significant digit first, with no
  /// leading zeros; zero displays as `0`. Not round-tripped by parsing.
  pub fn base10(&self) -> Base10<'_> {
    Base10(self)
  }
}

/// See [`LargeUInt::base10`].
pub struct Base10<'a>(&'a LargeUInt);

impl Display for Base10<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0.is_zero() {
      return f.write_char('0');
    }
    let ten = LargeUInt::from(10u8);
    let mut digits = Vec::new();
    let mut value = self.0.clone();
    while !value.is_zero() {
      let (quotient, remainder) = LargeUInt::divide(&value, &ten);
      digits.push(remainder.get_byte(0));
      value = quotient;
    }
    for digit in digits.iter().rev() {
      f.write_char((b'0' + digit) as char)?;
    }
    Ok(())
  }
}

/// An error parsing the canonical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
  /// A character outside the canonical grammar.
  BadChar,
  /// The input ended before the declared byte count was satisfied.
  Truncated,
  /// The separator after the byte count is missing.
  MissingSeparator,
  /// Characters remain past the declared byte count.
  TrailingInput,
  /// The declared byte count does not fit in [`MAX_BYTES`].
  Oversized(usize),
}

impl Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::BadChar => write!(f, "unexpected character"),
      ParseError::Truncated => write!(f, "unexpected end of input"),
      ParseError::MissingSeparator => write!(f, "expected `_` after the byte count"),
      ParseError::TrailingInput => write!(f, "unexpected trailing input"),
      ParseError::Oversized(count) => {
        write!(f, "byte count {count} exceeds the maximum of {MAX_BYTES}")
      }
    }
  }
}

impl Error for ParseError {}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
  #[regex("[0-9A-F][0-9A-F]")]
  Pair,
  #[token("_")]
  Separator,
}

fn next_pair(lexer: &mut Lexer<'_, Token>) -> Result<u8, ParseError> {
  match lexer.next() {
    Some(Ok(Token::Pair)) => {
      Ok(u8::from_str_radix(lexer.slice(), 16).expect("lexed a hex pair"))
    }
    Some(_) => Err(ParseError::BadChar),
    None => Err(ParseError::Truncated),
  }
}

impl FromStr for LargeUInt {
  type Err = ParseError;

  fn from_str(str: &str) -> Result<Self, ParseError> {
    let mut lexer = Token::lexer(str);
    let lo = next_pair(&mut lexer)?;
    let hi = next_pair(&mut lexer)?;
    match lexer.next() {
      Some(Ok(Token::Separator)) => {}
      Some(_) => return Err(ParseError::MissingSeparator),
      None => return Err(ParseError::Truncated),
    }
    let count = lo as usize | (hi as usize) << 8;
    if count > MAX_BYTES {
      return Err(ParseError::Oversized(count));
    }
    let mut value = LargeUInt::with_len(count);
    for i in 0..count {
      value.bytes[i] = next_pair(&mut lexer)?;
    }
    if lexer.next().is_some() {
      return Err(ParseError::TrailingInput);
    }
    value.trim();
    Ok(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store() {
    let mut a = LargeUInt::with_len(2);
    a.set_byte(12, 0);
    a.set_byte(99, 1);
    assert_eq!(a.to_string(), "0200_0C63");
    assert_eq!(a.hex_len(), a.to_string().len());
  }

  #[test]
  fn load() {
    let a: LargeUInt = "0300_BC0007".parse().unwrap();
    assert_eq!(a.num_bytes(), 3);
    assert_eq!(a.get_byte(0), 188);
    assert_eq!(a.get_byte(1), 0);
    assert_eq!(a.get_byte(2), 7);
    assert_eq!(a.to_string(), "0300_BC0007");
  }

  #[test]
  fn load_trims() {
    let a: LargeUInt = "0300_110000".parse().unwrap();
    assert_eq!(a.num_bytes(), 1);
    assert_eq!(a.to_string(), "0100_11");
  }

  #[test]
  fn zero() {
    let zero: LargeUInt = "0000_".parse().unwrap();
    assert!(zero.is_zero());
    assert_eq!(zero.to_string(), "0000_");
    assert_eq!(zero.hex_len(), 5);
    assert_eq!(zero.base10().to_string(), "0");
  }

  #[test]
  fn round_trip() {
    for str in ["0000_", "0100_01", "0200_0C63", "0300_BC0007", "0700_404A36549FDF06"] {
      let value: LargeUInt = str.parse().unwrap();
      assert_eq!(value.to_string(), str);
    }
  }

  #[test]
  fn base10() {
    let cases = [
      ("0100_01", "1"),
      ("0200_317F", "32561"),
      ("0100_65", "101"),
      ("0300_054A3D", "4016720"),
      ("0400_5FF27898", "2558063199"),
    ];
    for (hex, decimal) in cases {
      let value: LargeUInt = hex.parse().unwrap();
      assert_eq!(value.base10().to_string(), decimal);
    }
  }

  #[test]
  fn malformed() {
    assert_eq!("".parse::<LargeUInt>(), Err(ParseError::Truncated));
    assert_eq!("03".parse::<LargeUInt>(), Err(ParseError::Truncated));
    assert_eq!("0300".parse::<LargeUInt>(), Err(ParseError::Truncated));
    assert_eq!("0300_BC00".parse::<LargeUInt>(), Err(ParseError::Truncated));
    assert_eq!("0300BC0007".parse::<LargeUInt>(), Err(ParseError::MissingSeparator));
    assert_eq!("0300_bc0007".parse::<LargeUInt>(), Err(ParseError::BadChar));
    assert_eq!("03G0_BC0007".parse::<LargeUInt>(), Err(ParseError::BadChar));
    assert_eq!("0100_0102".parse::<LargeUInt>(), Err(ParseError::TrailingInput));
    assert_eq!("0200_0C63 ".parse::<LargeUInt>(), Err(ParseError::TrailingInput));
    assert_eq!("1F00_".parse::<LargeUInt>(), Err(ParseError::Oversized(31)));
  }
}
