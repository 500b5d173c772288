//! Feature-detected collaborators

/// A collaborator that may or may not exist on the running platform
///
/// Each component documents what it does on the [`Capability::Unavailable`]
/// path instead of failing.
#[derive(Clone, Debug)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    /// The collaborator, if present
    pub fn get(&self) -> Option<&T> {
        match self {
            Capability::Available(value) => Some(value),
            Capability::Unavailable => None,
        }
    }
}

impl<T> Default for Capability<T> {
    fn default() -> Self {
        Capability::Unavailable
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Capability::Available(value),
            None => Capability::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(Capability::from(Some(3)).get(), Some(&3));
        assert_eq!(Capability::<i32>::from(None).get(), None);
    }

    #[test]
    fn test_default_is_unavailable() {
        let missing: Capability<i32> = Capability::default();
        assert!(missing.get().is_none());
    }
}
