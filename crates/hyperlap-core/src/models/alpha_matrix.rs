use serde::Serialize;

/// Square matrix of inter-order overlap coefficients.
///
/// Entry `(m - 1, n - 1)` holds the overlap between orders `m < n`. Every
/// other entry, and every undefined ratio, is `NaN`.
#[derive(Debug, Clone, Serialize)]
pub struct AlphaMatrix {
    min_order: usize,
    max_order: usize,
    dimension: usize,
    values: Vec<f64>,
}

impl AlphaMatrix {
    /// An all-`NaN` matrix of dimension `max_order - min_order` (saturating).
    pub fn undefined(min_order: usize, max_order: usize) -> Self {
        let dimension = max_order.saturating_sub(min_order);
        Self {
            min_order,
            max_order,
            dimension,
            values: vec![f64::NAN; dimension * dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn min_order(&self) -> usize {
        self.min_order
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Raw entry by matrix index. `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.offset(row, col).map(|i| self.values[i])
    }

    /// Store a raw entry. Returns `false` when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Entry for the order pair `(m, n)`, translating orders to indices.
    pub fn overlap(&self, m: usize, n: usize) -> Option<f64> {
        self.get(m.checked_sub(1)?, n.checked_sub(1)?)
    }

    /// Rows as nested vectors.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        if self.dimension == 0 {
            return Vec::new();
        }
        self.values
            .chunks(self.dimension)
            .map(<[f64]>::to_vec)
            .collect()
    }

    /// Number of entries that hold a defined (non-`NaN`) value.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dimension && col < self.dimension).then(|| row * self.dimension + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_undefined() {
        let matrix = AlphaMatrix::undefined(1, 4);
        assert_eq!(matrix.dimension(), 3);
        assert_eq!(matrix.defined_count(), 0);
        assert!(matrix.get(0, 2).is_some_and(f64::is_nan));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn order_lookup_applies_offset() {
        let mut matrix = AlphaMatrix::undefined(1, 4);
        assert!(matrix.set(0, 1, 0.5));
        assert_eq!(matrix.overlap(1, 2), Some(0.5));
        assert_eq!(matrix.overlap(0, 2), None);
    }

    #[test]
    fn inverted_range_is_empty() {
        let matrix = AlphaMatrix::undefined(3, 1);
        assert_eq!(matrix.dimension(), 0);
        assert!(matrix.rows().is_empty());
    }
}
