//! # Core Traits Module
//!
//! Small traits shared by the configuration types.
//!
//! - [`Validate`]: checks a resolved value against its structural constraints
//! - [`Named`]: exposes the package-style identifier of an opaque handle

use crate::core::error::Result;

/// Trait for values that can check their own invariants once assembled.
pub trait Validate {
    /// Validates the value.
    ///
    /// # Returns
    ///
    /// A `Result` indicating whether the value is consistent.
    fn validate(&self) -> Result<()>;
}

/// Trait for opaque handles that carry a stable, human-readable identifier.
///
/// The identifier is only used for display and logging; resolution never
/// branches on it.
pub trait Named {
    /// Returns the identifier of the handle, e.g. `"rehype-slug"`.
    fn name(&self) -> &'static str;
}

/// Joins the names of a sequence of handles with `", "`.
pub fn join_names<'a, T, I>(items: I) -> String
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FolioError;

    #[derive(Debug)]
    struct Flag(&'static str);

    impl Named for Flag {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_join_names() {
        let flags = [Flag("a"), Flag("b"), Flag("c")];
        assert_eq!(join_names(&flags), "a, b, c");
        assert_eq!(join_names::<Flag, _>(&[]), "");
    }

    #[test]
    fn test_validate_implementation() {
        #[derive(Debug)]
        struct NonEmpty(Vec<u8>);

        impl Validate for NonEmpty {
            fn validate(&self) -> Result<()> {
                if self.0.is_empty() {
                    Err(FolioError::pipeline_error("empty"))
                } else {
                    Ok(())
                }
            }
        }

        assert!(NonEmpty(vec![1]).validate().is_ok());
        assert!(NonEmpty(Vec::new()).validate().is_err());
    }
}
