use crate::uint::{LargeUInt, MAX_BYTES};

impl LargeUInt {
  /// `self := self * that`, by schoolbook multiplication: each byte pair
  /// contributes a 16-bit partial product at position `i + j`, with carries
  /// propagated upward. Panics if the true product needs more than
  /// [`MAX_BYTES`] bytes.
  pub fn multiply(&mut self, that: &LargeUInt) {
    let mut product = [0; MAX_BYTES];
    for j in 0..that.len {
      let mut carry = 0;
      for i in 0..self.len {
        let k = i + j;
        assert!(k < MAX_BYTES, "capacity exceeded: {} bytes", k + 1);
        let total = self.bytes[i] as u16 * that.bytes[j] as u16 + product[k] as u16 + carry;
        product[k] = total as u8;
        carry = total >> 8;
      }
      let mut k = self.len + j;
      while carry != 0 {
        assert!(k < MAX_BYTES, "capacity exceeded: {} bytes", k + 1);
        let total = product[k] as u16 + carry;
        product[k] = total as u8;
        carry = total >> 8;
        k += 1;
      }
    }
    self.bytes = product;
    self.len = (self.len + that.len).min(MAX_BYTES);
    self.trim();
  }
}
