// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fmt;
use std::num::ParseIntError;
use std::ops::Deref;
use std::str::FromStr;

use rand::prelude::*;

/// Tile ordering.
///
/// Entry `p` names the source tile (row-major index) that fills
/// destination slot `p`. Any sequence of integers can be held here,
/// use [`crate::is_valid`] before relying on it being a permutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ordering(Vec<i64>);

impl Ordering {
    pub fn new(indices: Vec<i64>) -> Self {
        Self(indices)
    }

    /// `[0, 1, ..., n - 1]`, leaves every tile in place.
    pub fn identity(n: usize) -> Self {
        Self((0..n as i64).collect())
    }

    /// Uniformly shuffled permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, random: &mut R) -> Self {
        let mut ret = Self::identity(n);
        ret.0.shuffle(random);
        ret
    }

    /// Checks that every value in `0..len` occurs exactly once.
    pub fn is_permutation(&self) -> bool {
        self.positions().is_some()
    }

    /// Inverse permutation, such that applying `self` then the inverse
    /// restores the original arrangement.
    ///
    /// Returns `None` if this is not a permutation.
    pub fn inverse(&self) -> Option<Self> {
        let mut ret = vec![0; self.0.len()];
        for (position, index) in self.positions()?.into_iter().enumerate() {
            ret[index] = position as i64;
        }
        Some(Self(ret))
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }

    // Entries as usize, if they form a permutation.
    fn positions(&self) -> Option<Vec<usize>> {
        let mut seen = vec![false; self.0.len()];
        self.0
            .iter()
            .map(|&v| {
                let v = usize::try_from(v).ok()?;
                match seen.get_mut(v) {
                    Some(s) if !*s => {
                        *s = true;
                        Some(v)
                    }
                    _ => None,
                }
            })
            .collect()
    }
}

impl Deref for Ordering {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for Ordering {
    fn from(v: Vec<i64>) -> Self {
        Self(v)
    }
}

impl FromIterator<i64> for Ordering {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ordering entry {text:?} on line {line}")]
pub struct ParseOrderingError {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    #[source]
    pub source: ParseIntError,
}

/// Newline-delimited integers, one per line.
impl FromStr for Ordering {
    type Err = ParseOrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Blank lines around the list are allowed, but not inside it.
        let skipped = s.lines().take_while(|l| l.trim().is_empty()).count();

        s.trim()
            .lines()
            .enumerate()
            .map(|(i, l)| {
                l.trim().parse().map_err(|source| ParseOrderingError {
                    line: skipped + i + 1,
                    text: l.to_owned(),
                    source,
                })
            })
            .collect()
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use rstest::rstest;

    #[test]
    fn identity() {
        assert_eq!(&*Ordering::identity(4), &[0, 1, 2, 3]);
        assert!(Ordering::identity(0).is_empty());
    }

    #[rstest]
    #[case::identity(vec![0, 1, 2], true)]
    #[case::shuffled(vec![2, 0, 1], true)]
    #[case::empty(vec![], true)]
    #[case::duplicate(vec![0, 1, 1], false)]
    #[case::gap(vec![0, 1, 3], false)]
    #[case::negative(vec![-1, 0, 1], false)]
    fn permutation(#[case] v: Vec<i64>, #[case] expected: bool) {
        assert_eq!(Ordering::new(v).is_permutation(), expected);
    }

    #[test]
    fn inverse() {
        let o = Ordering::new(vec![2, 0, 3, 1]);
        let inv = o.inverse().unwrap();
        assert_eq!(&*inv, &[1, 3, 0, 2]);
        assert_eq!(inv.inverse(), Some(o));
        assert_eq!(Ordering::new(vec![0, 0]).inverse(), None);
    }

    #[test]
    fn random_is_permutation() {
        let mut random = Xoshiro256StarStar::seed_from_u64(7);
        for n in [0, 1, 6, 100] {
            let o = Ordering::random(n, &mut random);
            assert_eq!(o.len(), n);
            assert!(o.is_permutation());
        }
    }

    #[test]
    fn parse() {
        let o: Ordering = "\n3\n 0\n2 \r\n1\n\n".parse().unwrap();
        assert_eq!(&*o, &[3, 0, 2, 1]);
        assert!("".parse::<Ordering>().unwrap().is_empty());
    }

    #[test]
    fn parse_reports_line() {
        let err = "\n0\n1\nx\n".parse::<Ordering>().unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.text, "x");

        let err = "0\n\n1".parse::<Ordering>().unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn display_roundtrips() {
        let o = Ordering::new(vec![1, 0, -4]);
        assert_eq!(o.to_string(), "1\n0\n-4\n");
        assert_eq!(o.to_string().parse::<Ordering>(), Ok(o));
    }
}
