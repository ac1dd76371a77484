use std::{fmt, iter::Sum, ops::Add};

/// How much of a phrase's value is filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completeness {
    /// Number of non-empty values.
    pub complete: usize,
    /// Number of expected values.
    pub total: usize,
}

impl Completeness {
    pub fn new(complete: usize, total: usize) -> Self {
        Self { complete, total }
    }

    /// Count the non-empty entries among `values`.
    pub fn of<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        values
            .into_iter()
            .fold(Self::default(), |acc, value| Self {
                complete: acc.complete + usize::from(!value.is_empty()),
                total: acc.total + 1,
            })
    }

    /// Fraction of complete values. An empty phrase has nothing filled in: `0.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.complete as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.complete == self.total
    }
}

impl Add for Completeness {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            complete: self.complete + rhs.complete,
            total: self.total + rhs.total,
        }
    }
}

impl Sum for Completeness {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.complete, self.total)
    }
}
