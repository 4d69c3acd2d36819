use crate::uint::LargeUInt;

impl LargeUInt {
  /// Long division of `numerator` by `denominator`, returning the quotient
  /// and remainder. Panics if `denominator` is zero.
  pub fn divide(numerator: &LargeUInt, denominator: &LargeUInt) -> (LargeUInt, LargeUInt) {
    assert!(!denominator.is_zero(), "division by zero");
    let mut quotient = LargeUInt::ZERO;
    let mut remainder = LargeUInt::ZERO;
    // Consume the numerator from the most significant byte down, folding each
    // byte into the partial remainder. The remainder stays below the
    // denominator between steps, so after a shift it is below denominator *
    // 256 and the digit search needs at most 255 subtractions.
    for i in (0..numerator.len).rev() {
      remainder.byte_shift_inc();
      remainder.add_byte(numerator.bytes[i]);
      let mut digit = 0;
      while denominator.less_than_or_equal(&remainder) {
        remainder.sub(denominator);
        digit += 1;
      }
      quotient.byte_shift_inc();
      quotient.add_byte(digit);
    }
    (quotient, remainder)
  }

  /// The remainder of `numerator` modulo `divisor`. Panics if `divisor` is
  /// zero.
  pub fn modulo(numerator: &LargeUInt, divisor: &LargeUInt) -> LargeUInt {
    LargeUInt::divide(numerator, divisor).1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn n(str: &str) -> LargeUInt {
    str.parse().unwrap()
  }

  fn divide(numerator: &str, denominator: &str) -> (String, String) {
    let (quotient, remainder) = LargeUInt::divide(&n(numerator), &n(denominator));
    (quotient.to_string(), remainder.to_string())
  }

  #[test]
  fn single_byte() {
    assert_eq!(divide("0100_0F", "0100_05"), ("0100_03".into(), "0000_".into()));
    assert_eq!(divide("0100_15", "0100_05"), ("0100_04".into(), "0100_01".into()));
    assert_eq!(divide("0100_0E", "0100_05"), ("0100_02".into(), "0100_04".into()));
    assert_eq!(divide("0100_07", "0100_08"), ("0000_".into(), "0100_07".into()));
  }

  #[test]
  fn multi_byte() {
    // 15746896 / 3 = 5248965 r 1
    assert_eq!(divide("0300_5047F0", "0100_03"), ("0300_C51750".into(), "0100_01".into()));
    // 2558063199 / 32561 = 78562 r 5917
    assert_eq!(divide("0400_5FF27898", "0200_317F"), ("0300_E23201".into(), "0200_1D17".into()));
    // 981238718624873549 / 471683913 = 2080288709 r 194035232
    assert_eq!(
      divide("0800_4DBC7E6F6A0F9E0D", "0400_49531D1C"),
      ("0400_C5AFFE7B".into(), "0400_20BE900B".into())
    );
    // 694894489 / 53 = 13111216 r 41
    assert_eq!(divide("0400_993F6B29", "0100_35"), ("0300_B00FC8".into(), "0100_29".into()));
    // 694894489 / 265 = 2622243 r 94
    assert_eq!(divide("0400_993F6B29", "0200_0901"), ("0300_230328".into(), "0100_5E".into()));
  }

  #[test]
  fn zero_numerator() {
    assert_eq!(divide("0000_", "0200_317F"), ("0000_".into(), "0000_".into()));
  }

  #[test]
  #[should_panic = "division by zero"]
  fn zero_denominator() {
    LargeUInt::divide(&n("0100_07"), &LargeUInt::ZERO);
  }

  #[test]
  fn modulo() {
    let cases = [
      ("0100_0F", "0100_05", "0000_"),
      ("0100_15", "0100_05", "0100_01"),
      ("0100_0E", "0100_05", "0100_04"),
      ("0100_07", "0100_08", "0100_07"),
      ("0600_040303030303", "0100_03", "0100_01"),
      ("0600_020306030903", "0100_03", "0100_02"),
      ("0400_993F6B29", "0200_0901", "0100_5E"),
      ("0800_4DBC7E6F6A0F9E0D", "0400_49531D1C", "0400_20BE900B"),
    ];
    for (numerator, divisor, remainder) in cases {
      assert_eq!(LargeUInt::modulo(&n(numerator), &n(divisor)).to_string(), remainder);
    }
  }

  #[test]
  fn division_identity() {
    let samples = [1u64, 3, 8, 53, 255, 256, 32561, 471683913, 981238718624873549];
    for a in [0u64, 1, 7, 255, 65535, 15746896, 2558063199, 981238718624873549] {
      for b in samples {
        let (quotient, remainder) = LargeUInt::divide(&a.into(), &b.into());
        assert_eq!(quotient.to_u64(), Some(a / b), "{a} / {b}");
        assert_eq!(remainder.to_u64(), Some(a % b), "{a} % {b}");
      }
    }
  }
}
