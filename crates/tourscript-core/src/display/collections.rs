//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::DayPlan;

/// Newtype wrapper for displaying a selection of days without the route
/// header.
///
/// # Examples
///
/// ```rust
/// use tourscript_core::{display::Days, parser::build_route_from_text};
///
/// let route = build_route_from_text("Day 1\nA\n\nDay 2\nB");
/// let days = Days(route.days);
/// let output = format!("{}", days);
/// assert!(output.contains("## Day 2"));
/// ```
pub struct Days(pub Vec<DayPlan>);

impl Days {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of days in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the day at the given position.
    pub fn get(&self, index: usize) -> Option<&DayPlan> {
        self.0.get(index)
    }

    /// Get an iterator over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.0.iter()
    }
}

impl Index<usize> for Days {
    type Output = DayPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Days {
    type Item = DayPlan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Days {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No days found.")
        } else {
            for (idx, day) in self.0.iter().enumerate() {
                if idx > 0 {
                    writeln!(f)?;
                }
                write!(f, "{day}")?;
            }
            Ok(())
        }
    }
}
