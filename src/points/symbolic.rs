use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{pow, ToPrimitive, Zero};

use crate::error::{LaminationError, Result};

pub const MIN_RADIX: u32 = 2;
/// Largest radix whose digits fit a single label character.
pub const MAX_RADIX: u32 = 36;

/// Eventually periodic base-`radix` expansion of a circle position.
///
/// Equality and hashing compare digit sequences, so `"0_030"` and `"_003"`
/// are distinct labels of the same position. Use [`SymbolicPoint::value`]
/// or [`SymbolicPoint::canonical`] to compare positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolicPoint {
    radix: u32,
    preperiod: Vec<u32>,
    period: Vec<u32>,
    value: BigRational,
}

pub(crate) fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(LaminationError::InvalidRadix(radix))
    }
}

fn digits_value(digits: &[u32], radix: &BigInt) -> BigInt {
    digits
        .iter()
        .fold(BigInt::zero(), |acc, &d| acc * radix + d)
}

/// Exact value in `[0, 1)`:
/// `(pre * (r^k - 1) + period) / ((r^k - 1) * r^m)`, taken mod 1.
fn exact_value(radix: u32, preperiod: &[u32], period: &[u32]) -> BigRational {
    let r = BigInt::from(radix);
    let pre_scale = pow(r.clone(), preperiod.len());
    let pre_value = digits_value(preperiod, &r);

    let (numer, denom) = if period.is_empty() {
        (pre_value, pre_scale)
    } else {
        let period_scale = pow(r.clone(), period.len()) - 1u32;
        let period_value = digits_value(period, &r);
        (
            pre_value * &period_scale + period_value,
            period_scale * pre_scale,
        )
    };

    // An all-(r-1) tail evaluates to exactly 1, which is 0 on the circle.
    let numer = if numer >= denom { numer - &denom } else { numer };
    BigRational::new(numer, denom)
}

/// Digits are `0-9` then lowercase `a-z`, the alphabet [`SymbolicPoint::label`] writes.
fn parse_digits(label: &str, digits: &str) -> Result<Vec<u32>> {
    digits
        .chars()
        .map(|c| {
            Some(c)
                .filter(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
                .and_then(|c| c.to_digit(MAX_RADIX))
                .ok_or_else(|| LaminationError::MalformedLabel(label.to_string()))
        })
        .collect()
}

impl SymbolicPoint {
    pub fn new(radix: u32, preperiod: Vec<u32>, period: Vec<u32>) -> Result<Self> {
        check_radix(radix)?;
        if let Some(&digit) = preperiod.iter().chain(period.iter()).find(|&&d| d >= radix) {
            return Err(LaminationError::InvalidDigit { digit, radix });
        }
        let value = exact_value(radix, &preperiod, &period);
        Ok(Self {
            radix,
            preperiod,
            period,
            value,
        })
    }

    /// Parses a `<pre-period>_<period>` label, e.g. `"0_003"`.
    pub fn parse(label: &str, radix: u32) -> Result<Self> {
        check_radix(radix)?;
        let (pre, period) = label
            .split_once('_')
            .ok_or_else(|| LaminationError::MalformedLabel(label.to_string()))?;
        Self::new(
            radix,
            parse_digits(label, pre)?,
            parse_digits(label, period)?,
        )
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn preperiod(&self) -> &[u32] {
        &self.preperiod
    }

    pub fn period(&self) -> &[u32] {
        &self.period
    }

    /// Exact position, reduced to `[0, 1)`.
    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn to_float(&self) -> f64 {
        // Rounding can carry a value just below 1 up to 1.0.
        super::wrap_unit(self.value.to_f64().unwrap_or_default())
    }

    pub fn label(&self) -> String {
        let render = |digits: &[u32]| -> String {
            digits
                .iter()
                .filter_map(|&d| std::char::from_digit(d, self.radix))
                .collect()
        };
        format!("{}_{}", render(&self.preperiod), render(&self.period))
    }

    /// Shortest label for the same expansion.
    ///
    /// The period is cut to its minimal repeating block, then trailing
    /// pre-period digits that match the period's last digit are rotated
    /// into the period. An empty period is read as a repeating `0`.
    pub fn canonical(&self) -> Self {
        let mut period = if self.period.is_empty() {
            vec![0]
        } else {
            self.period.clone()
        };
        let len = period.len();
        if let Some(block) = (1..=len)
            .filter(|d| Integer::is_multiple_of(&len, d))
            .find(|&d| period.chunks(d).all(|chunk| chunk == &period[..d]))
        {
            period.truncate(block);
        }

        let mut preperiod = self.preperiod.clone();
        while let (Some(&pre), Some(&last)) = (preperiod.last(), period.last()) {
            if pre != last {
                break;
            }
            preperiod.pop();
            period.rotate_right(1);
        }

        Self {
            radix: self.radix,
            preperiod,
            period,
            value: self.value.clone(),
        }
    }

    /// Image under the radix map `x -> radix * x (mod 1)`.
    pub fn shift(&self) -> Result<Self> {
        let mut preperiod = self.preperiod.clone();
        let mut period = self.period.clone();
        if !preperiod.is_empty() {
            preperiod.remove(0);
        } else {
            let n = 1.min(period.len());
            period.rotate_left(n);
        }
        Self::new(self.radix, preperiod, period)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for SymbolicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(numer.into(), denom.into())
    }

    /// Repeating-fraction value summed digit by digit in floating point.
    fn float_value(radix: u32, preperiod: &[u32], period: &[u32]) -> f64 {
        let r = f64::from(radix);
        let mut scale = 1.0;
        let mut x = 0.0;
        for &d in preperiod {
            scale /= r;
            x += f64::from(d) * scale;
        }
        let mut cycle = 0.0;
        let mut step = 1.0;
        for &d in period {
            step /= r;
            cycle += f64::from(d) * step;
        }
        if !period.is_empty() {
            x += scale * cycle / (1.0 - step);
        }
        x.rem_euclid(1.0)
    }

    #[test]
    fn test_parse_and_label_round_trip() {
        for label in ["0_003", "3_300", "_1", "12_", "_", "a_b"] {
            let point = SymbolicPoint::parse(label, 16).unwrap();
            assert_eq!(point.label(), label);
        }
    }

    #[test]
    fn test_value_matches_repeating_fraction() {
        // 0.0(003) in base 4 = 3 / 63 / 4
        let point = SymbolicPoint::parse("0_003", 4).unwrap();
        assert_eq!(point.value(), &ratio(1, 84));
        assert_relative_eq!(point.to_float(), 1.0 / 84.0);

        let point = SymbolicPoint::parse("3_300", 4).unwrap();
        assert_eq!(point.value(), &ratio(237, 252));

        // terminating expansion
        let point = SymbolicPoint::parse("12_", 10).unwrap();
        assert_eq!(point.value(), &ratio(12, 100));
    }

    #[test]
    fn test_all_max_digit_tail_wraps_to_zero() {
        // (3) repeating in base 4 is 3/3 = 1, which is 0 on the circle
        let point = SymbolicPoint::parse("_3", 4).unwrap();
        assert!(point.is_zero());
        assert_eq!(point.to_float(), 0.0);

        // a leading pre-period digit scales the tail: 0.0(3) = 1/4
        let point = SymbolicPoint::parse("0_3", 4).unwrap();
        assert_eq!(point.value(), &ratio(1, 4));
        assert_eq!(point.to_float(), 0.25);

        let point = SymbolicPoint::parse("_1", 2).unwrap();
        assert_eq!(point.to_float(), 0.0);
    }

    #[test]
    fn test_invalid_digit_rejected() {
        let err = SymbolicPoint::parse("0_4", 4).unwrap_err();
        assert!(matches!(err, LaminationError::InvalidDigit { digit: 4, radix: 4 }));

        let err = SymbolicPoint::new(3, vec![0, 3], vec![]).unwrap_err();
        assert!(matches!(err, LaminationError::InvalidDigit { digit: 3, radix: 3 }));
    }

    #[test]
    fn test_malformed_labels_rejected() {
        for label in ["003", "0_-1", "0_0_1", "0 _1"] {
            let err = SymbolicPoint::parse(label, 4).unwrap_err();
            assert!(matches!(err, LaminationError::MalformedLabel(_)), "{label}");
        }
    }

    #[test]
    fn test_invalid_radix_rejected() {
        assert!(matches!(
            SymbolicPoint::parse("0_1", 1),
            Err(LaminationError::InvalidRadix(1))
        ));
        assert!(matches!(
            SymbolicPoint::new(37, vec![], vec![1]),
            Err(LaminationError::InvalidRadix(37))
        ));
    }

    #[test]
    fn test_long_expansions_stay_exact() {
        // 0.(1) in base 4 is 1/3 however many times the block is spelled out
        let label = format!("_{}", "1".repeat(64));
        let point = SymbolicPoint::parse(&label, 4).unwrap();
        assert_eq!(point.value(), &ratio(1, 3));
        assert_relative_eq!(point.to_float(), 1.0 / 3.0);
        assert_eq!(point.label(), label);

        let label = format!("{}_{}", "1".repeat(20), "2".repeat(20));
        let point = SymbolicPoint::parse(&label, 10).unwrap();
        assert_relative_eq!(point.to_float(), 0.111_111_111_111_111_111_12, epsilon = 1e-15);

        let point = SymbolicPoint::new(36, vec![35; 200], vec![35; 50]).unwrap();
        assert!(point.is_zero());
    }

    #[test]
    fn test_random_expansions_match_float_evaluation() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let radix = rng.gen_range(MIN_RADIX..=MAX_RADIX);
            let preperiod: Vec<u32> = (0..rng.gen_range(0..8))
                .map(|_| rng.gen_range(0..radix))
                .collect();
            let period: Vec<u32> = (0..rng.gen_range(0..8))
                .map(|_| rng.gen_range(0..radix))
                .collect();
            let point = SymbolicPoint::new(radix, preperiod.clone(), period.clone()).unwrap();

            let x = point.to_float();
            assert!((0.0..1.0).contains(&x), "{} in radix {radix} gave {x}", point);
            // all-(r-1) tails sit on the seam, so compare along the circle
            let d = (x - float_value(radix, &preperiod, &period)).rem_euclid(1.0);
            assert!(d.min(1.0 - d) < 1e-9, "{} in radix {radix}", point);
        }
    }

    #[test]
    fn test_uppercase_digits_rejected() {
        assert!(matches!(
            SymbolicPoint::parse("A_B", 16),
            Err(LaminationError::MalformedLabel(_))
        ));
        assert_eq!(SymbolicPoint::parse("a_b", 16).unwrap().label(), "a_b");
    }

    #[test]
    fn test_canonical_label() {
        let point = SymbolicPoint::parse("0_030", 4).unwrap();
        let canonical = point.canonical();
        assert_eq!(canonical.label(), "_003");
        assert_eq!(canonical.value(), point.value());
        assert_ne!(canonical, point);

        let point = SymbolicPoint::parse("1_2121", 4).unwrap();
        assert_eq!(point.canonical().label(), "_12");

        let point = SymbolicPoint::parse("12_", 10).unwrap();
        assert_eq!(point.canonical().label(), "12_0");
    }

    #[test]
    fn test_shift_multiplies_by_radix() {
        let point = SymbolicPoint::parse("1_003", 4).unwrap();
        let shifted = point.shift().unwrap();
        assert_eq!(shifted.label(), "_003");
        assert_eq!(shifted.value(), &(point.value() * ratio(4, 1)).fract());

        let periodic = SymbolicPoint::parse("_001", 2).unwrap();
        assert_eq!(periodic.shift().unwrap().label(), "_010");
        assert_eq!(
            periodic.shift().unwrap().value(),
            &(periodic.value() * ratio(2, 1)).fract()
        );
    }
}
