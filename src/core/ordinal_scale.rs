use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Maps distinct categories to values from a cyclic output list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale<T> {
    categories: IndexSet<String>,
    range: Vec<T>,
}

impl<T: Clone> OrdinalScale<T> {
    pub fn new<I, S>(categories: I, range: Vec<T>) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if range.is_empty() {
            return Err(ChartError::InvalidData(
                "ordinal scale range must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            categories: categories.into_iter().map(Into::into).collect(),
            range,
        })
    }

    /// Output value for `category`; unknown categories yield `None`.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<T> {
        self.categories
            .get_index_of(category)
            .map(|index| self.range[index % self.range.len()].clone())
    }

    /// Categories in first-appearance order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
