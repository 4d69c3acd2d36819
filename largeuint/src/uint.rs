use std::{
  cmp::Ordering,
  hash::{Hash, Hasher},
};

/// Maximum number of bytes a [`LargeUInt`] can hold.
pub const MAX_BYTES: usize = 30;

/// A nonnegative integer of at most [`MAX_BYTES`] bytes, stored little-endian
/// with an explicit significant-byte count.
///
/// Values are kept *trimmed*: the most significant byte is never zero, and
/// zero itself is the unique value with `len == 0`. Bytes past `len` are
/// always zero.
///
/// Arithmetic mutates the receiver in place; operands are borrowed and left
/// unchanged. Any operation whose true result needs more than [`MAX_BYTES`]
/// bytes panics, as do subtraction below zero and division by zero.
#[derive(Debug, Clone)]
pub struct LargeUInt {
  pub(crate) len: usize,
  pub(crate) bytes: [u8; MAX_BYTES],
}

impl LargeUInt {
  pub const ZERO: LargeUInt = LargeUInt { len: 0, bytes: [0; MAX_BYTES] };

  /// Creates a value pre-sized to `len` zero bytes, not yet trimmed.
  pub fn with_len(len: usize) -> Self {
    assert!(len <= MAX_BYTES, "capacity exceeded: {len} bytes");
    LargeUInt { len, bytes: [0; MAX_BYTES] }
  }

  pub fn num_bytes(&self) -> usize {
    self.len
  }

  pub fn is_zero(&self) -> bool {
    self.len == 0
  }

  /// The byte at `index`, or zero past the significant bytes.
  pub fn get_byte(&self, index: usize) -> u8 {
    if index < self.len { self.bytes[index] } else { 0 }
  }

  /// Sets the byte at `index` if the index is within the significant bytes
  /// and the value fits in a byte; otherwise does nothing. Note the
  /// value-then-index argument order.
  pub fn set_byte(&mut self, value: u32, index: usize) {
    if index < self.len && value <= u8::MAX as u32 {
      self.bytes[index] = value as u8;
    }
  }

  /// Adds one byte of capacity at the most significant end.
  pub fn grow(&mut self) {
    assert!(self.len < MAX_BYTES, "capacity exceeded: {} bytes", self.len + 1);
    self.len += 1;
  }

  /// Drops leading zero bytes until the value is trimmed.
  pub fn trim(&mut self) {
    while self.len > 0 && self.bytes[self.len - 1] == 0 {
      self.len -= 1;
    }
  }

  /// Three-way comparison with an inverted sign convention: `0` when equal,
  /// `1` when `self` is the smaller value, `-1` when it is the larger.
  pub fn compare(&self, that: &LargeUInt) -> i32 {
    match self.cmp(that) {
      Ordering::Equal => 0,
      Ordering::Less => 1,
      Ordering::Greater => -1,
    }
  }

  pub fn less_than(&self, that: &LargeUInt) -> bool {
    self.compare(that) == 1
  }

  pub fn less_than_or_equal(&self, that: &LargeUInt) -> bool {
    self.compare(that) >= 0
  }

  pub fn equal(&self, that: &LargeUInt) -> bool {
    self.compare(that) == 0
  }

  /// The value as a `u64`, when it fits.
  pub fn to_u64(&self) -> Option<u64> {
    if self.len > 8 {
      return None;
    }
    let mut n = 0;
    for i in (0..self.len).rev() {
      n = n << 8 | self.bytes[i] as u64;
    }
    Some(n)
  }
}

impl Ord for LargeUInt {
  fn cmp(&self, that: &Self) -> Ordering {
    // A shorter trimmed value is always smaller; equal lengths compare from
    // the most significant byte down.
    self
      .len
      .cmp(&that.len)
      .then_with(|| self.bytes[..self.len].iter().rev().cmp(that.bytes[..that.len].iter().rev()))
  }
}

impl PartialOrd for LargeUInt {
  fn partial_cmp(&self, that: &Self) -> Option<Ordering> {
    Some(self.cmp(that))
  }
}

impl PartialEq for LargeUInt {
  fn eq(&self, that: &Self) -> bool {
    self.cmp(that) == Ordering::Equal
  }
}

impl Eq for LargeUInt {}

impl Hash for LargeUInt {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.len.hash(state);
    self.bytes[..self.len].hash(state);
  }
}

impl From<u8> for LargeUInt {
  fn from(byte: u8) -> LargeUInt {
    let mut value = LargeUInt::ZERO;
    if byte != 0 {
      value.len = 1;
      value.bytes[0] = byte;
    }
    value
  }
}

impl From<u64> for LargeUInt {
  fn from(mut n: u64) -> LargeUInt {
    let mut value = LargeUInt::ZERO;
    while n != 0 {
      value.grow();
      value.bytes[value.len - 1] = n as u8;
      n >>= 8;
    }
    value
  }
}
