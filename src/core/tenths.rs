// src/core/tenths.rs
//
// One-decimal fixed point. Averages are carried as whole tenths so that
// sorting and display never hit binary floating-point artifacts
// ("3.0" stays "3.0", never "2.9999999999999996").

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tenths(i64);

impl Tenths {
    /// `numer / denom` rounded half-away-from-zero at the tenths place.
    /// `denom` must be positive; callers guard the zero-games case upstream.
    pub fn ratio(numer: i64, denom: i64) -> Tenths {
        debug_assert!(denom > 0);
        let scaled = numer * 10;
        let q = scaled / denom;
        let r = scaled % denom;
        let adjust = if r.abs() * 2 >= denom {
            if scaled < 0 { -1 } else { 1 }
        } else {
            0
        };
        Tenths(q + adjust)
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let a = self.0.abs();
        write!(f, "{sign}{}.{}", a / 10, a % 10)
    }
}
