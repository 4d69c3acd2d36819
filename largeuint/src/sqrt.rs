use crate::uint::LargeUInt;

impl LargeUInt {
  /// An integer close to the square root of `self` from above: the result
  /// squared is never less than `self`, and equals it exactly for a perfect
  /// square.
  ///
  /// Newton iteration with integer division. The initial estimate
  /// `256^ceil(len / 2)` is strictly above the true root, so the sequence
  /// decreases until it reaches the floor of the root; one corrective
  /// increment then restores the overestimate when the square falls short.
  pub fn approximate_square_root(&self) -> LargeUInt {
    if self.is_zero() {
      return LargeUInt::ZERO;
    }
    let mut estimate = LargeUInt::from(1u8);
    estimate.multi_byte_shift_inc(self.len.div_ceil(2));
    let two = LargeUInt::from(2u8);
    loop {
      let (quotient, _) = LargeUInt::divide(self, &estimate);
      let mut next = quotient;
      next.add(&estimate);
      let (next, _) = LargeUInt::divide(&next, &two);
      if estimate.less_than_or_equal(&next) {
        break;
      }
      estimate = next;
    }
    let mut square = estimate.clone();
    square.multiply(&estimate);
    if square.less_than(self) {
      estimate.increment();
    }
    estimate
  }
}
