use crate::uint::{LargeUInt, MAX_BYTES};

impl LargeUInt {
  /// `self := self + that`.
  pub fn add(&mut self, that: &LargeUInt) {
    if self.len < that.len {
      self.len = that.len;
    }
    let mut carry = 0;
    for i in 0..self.len {
      let sum = self.bytes[i] as u16 + that.get_byte(i) as u16 + carry;
      self.bytes[i] = sum as u8;
      carry = sum >> 8;
    }
    if carry != 0 {
      self.grow();
      self.bytes[self.len - 1] = carry as u8;
    }
  }

  /// Adds a single byte into the low end of the value.
  pub fn add_byte(&mut self, byte: u8) {
    let mut carry = byte as u16;
    for i in 0..self.len {
      if carry == 0 {
        return;
      }
      let sum = self.bytes[i] as u16 + carry;
      self.bytes[i] = sum as u8;
      carry = sum >> 8;
    }
    if carry != 0 {
      self.grow();
      self.bytes[self.len - 1] = carry as u8;
    }
  }

  pub fn increment(&mut self) {
    self.add_byte(1);
  }

  /// `self := self - that`. Panics if the result would be negative.
  pub fn sub(&mut self, that: &LargeUInt) {
    assert!(that.less_than_or_equal(self), "subtraction underflow");
    let mut borrow = 0;
    for i in 0..self.len {
      let mut diff = self.bytes[i] as i16 - that.get_byte(i) as i16 - borrow;
      borrow = 0;
      if diff < 0 {
        diff += 256;
        borrow = 1;
      }
      self.bytes[i] = diff as u8;
    }
    self.trim();
  }

  /// Subtracts one. Panics if the value is already zero.
  pub fn decrement(&mut self) {
    assert!(!self.is_zero(), "subtraction underflow");
    self.sub(&LargeUInt::from(1u8));
  }

  /// Multiplies by 256 by inserting a zero byte at the low end. Zero is left
  /// unchanged so it stays trimmed.
  pub fn byte_shift_inc(&mut self) {
    if self.is_zero() {
      return;
    }
    self.grow();
    for i in (1..self.len).rev() {
      self.bytes[i] = self.bytes[i - 1];
    }
    self.bytes[0] = 0;
  }

  /// Divides by 256, returning the discarded low byte.
  pub fn byte_shift_dec(&mut self) -> u8 {
    if self.is_zero() {
      return 0;
    }
    let low = self.bytes[0];
    for i in 1..self.len {
      self.bytes[i - 1] = self.bytes[i];
    }
    self.len -= 1;
    self.bytes[self.len] = 0;
    low
  }

  /// [`Self::byte_shift_inc`] generalized to `n` byte positions at once.
  pub fn multi_byte_shift_inc(&mut self, n: usize) {
    if self.is_zero() || n == 0 {
      return;
    }
    assert!(self.len + n <= MAX_BYTES, "capacity exceeded: {} bytes", self.len + n);
    self.len += n;
    for i in (n..self.len).rev() {
      self.bytes[i] = self.bytes[i - n];
    }
    self.bytes[..n].fill(0);
  }

  /// [`Self::byte_shift_dec`] generalized to `n` byte positions, discarding
  /// the removed bytes.
  pub fn multi_byte_shift_dec(&mut self, n: usize) {
    let n = n.min(self.len);
    for i in n..self.len {
      self.bytes[i - n] = self.bytes[i];
    }
    self.bytes[self.len - n..self.len].fill(0);
    self.len -= n;
  }
}
