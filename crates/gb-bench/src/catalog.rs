use gb_kernel::Shape;

use crate::error::Result;

/// Ordered, read-only list of benchmark shapes.
///
/// Every dimension is validated on construction, so a malformed entry fails
/// before any timing begins. An empty catalog is allowed and simply runs
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemCatalog {
    shapes: Vec<Shape>,
}

impl ProblemCatalog {
    pub fn new(dims: &[(usize, usize, usize)]) -> Result<Self> {
        let shapes = dims
            .iter()
            .map(|&(m, n, k)| Shape::new(m, n, k))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ProblemCatalog { shapes })
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProblemCatalog {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SHAPES;
    use crate::error::BenchError;

    #[test]
    fn test_default_shapes_are_valid() {
        let catalog = ProblemCatalog::new(&DEFAULT_SHAPES).unwrap();
        assert_eq!(catalog.len(), DEFAULT_SHAPES.len());
    }

    #[test]
    fn test_preserves_order() {
        let catalog = ProblemCatalog::new(&[(4, 5, 6), (1, 2, 3)]).unwrap();
        let names: Vec<String> = catalog.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["4x5x6", "1x2x3"]);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = ProblemCatalog::new(&[(4, 4, 4), (4, 0, 4)]).unwrap_err();
        assert!(matches!(err, BenchError::InvalidShape(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProblemCatalog::new(&[]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
