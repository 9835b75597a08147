//! Deep-copy hook shared by the containers.
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Produces independent copies of elements when a container is duplicated (sorted copies, set
/// algebra results, [`Clone`]).
///
/// Falls back to [`Clone`] unless a custom function was supplied.
pub struct Copier<T> {
    copy_fn: Option<Arc<dyn Fn(&T) -> T + Send + Sync>>,
}

impl<T> Copier<T> {
    /// Create a copier that runs `copy_fn` for every element.
    pub fn new<F>(copy_fn: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self {
            copy_fn: Some(Arc::new(copy_fn)),
        }
    }

    /// Check whether a custom copy function is installed.
    pub fn is_custom(&self) -> bool {
        self.copy_fn.is_some()
    }
}

impl<T: Clone> Copier<T> {
    /// Copy a single element.
    #[inline]
    pub fn copy(&self, value: &T) -> T {
        match &self.copy_fn {
            Some(copy_fn) => copy_fn(value),
            None => value.clone(),
        }
    }
}

impl<T> Default for Copier<T> {
    fn default() -> Self {
        Self { copy_fn: None }
    }
}

impl<T> Clone for Copier<T> {
    fn clone(&self) -> Self {
        Self {
            copy_fn: self.copy_fn.clone(),
        }
    }
}

impl<T> Debug for Copier<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Copier")
            .field("custom", &self.is_custom())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clones() {
        let copier = Copier::<String>::default();
        assert!(!copier.is_custom());
        assert_eq!(copier.copy(&"abc".to_string()), "abc");
    }

    #[test]
    fn test_custom_copy() {
        let copier = Copier::new(|value: &Vec<u8>| {
            let mut copy = value.clone();
            copy.push(0);
            copy
        });
        assert!(copier.is_custom());
        assert_eq!(copier.clone().copy(&vec![1]), vec![1, 0]);
    }
}
