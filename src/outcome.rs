// Two-branch result of a read: data was loaded, or there was nothing to load

/// Outcome of a read against the store
///
/// `NotAvailable` means the query matched nothing. It is not an error;
/// driver failures travel separately through `eyre::Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Loaded(T),
    NotAvailable,
}

impl<T> Outcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Outcome::Loaded(_))
    }

    pub fn is_not_available(&self) -> bool {
        matches!(self, Outcome::NotAvailable)
    }

    /// Convert into an `Option`, dropping the distinction into `None`
    pub fn loaded(self) -> Option<T> {
        match self {
            Outcome::Loaded(value) => Some(value),
            Outcome::NotAvailable => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Loaded(value) => Outcome::Loaded(f(value)),
            Outcome::NotAvailable => Outcome::NotAvailable,
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// An empty collection is reported as `NotAvailable`
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Outcome::NotAvailable
        } else {
            Outcome::Loaded(items)
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Loaded(v),
            None => Outcome::NotAvailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vec_is_not_available() {
        let outcome: Outcome<Vec<i32>> = Outcome::from_vec(Vec::new());
        assert!(outcome.is_not_available());

        let outcome = Outcome::from_vec(vec![1, 2]);
        assert_eq!(outcome, Outcome::Loaded(vec![1, 2]));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Outcome::from(Some(3)), Outcome::Loaded(3));
        assert!(Outcome::<i32>::from(None).is_not_available());
    }

    #[test]
    fn test_map_and_loaded() {
        let outcome = Outcome::Loaded(2).map(|v| v * 10);
        assert!(outcome.is_loaded());
        assert_eq!(outcome.loaded(), Some(20));

        let missing: Outcome<i32> = Outcome::NotAvailable;
        assert_eq!(missing.map(|v| v + 1).loaded(), None);
    }
}
