/// Error types that can be built from a plain message.
///
/// Implement this for a crate's `Error`, then call [`impl_context!`] in the
/// module that defines it.
pub trait FromMessage: Sized {
    fn from_message(message: String) -> Self;
}

#[doc(hidden)]
pub fn prefixed(context: &str, source: &dyn std::fmt::Display) -> String {
    format!("{context}: {source}")
}

/// Emit a crate-local `Context` trait for the `Error`/`Result` pair in scope.
///
/// `.context(msg)` on a `Result` turns any displayable error into
/// `Error::from_message("msg: <source>")`. On an `Option`, `None` becomes
/// `Error::from_message("msg")`.
///
/// ```ignore
/// // crates/config/src/error.rs
/// pursue_common::impl_context!();
/// ```
#[macro_export]
macro_rules! impl_context {
    () => {
        pub trait Context<T> {
            fn context(self, context: impl Into<String>) -> Result<T>;
            fn with_context<C, F>(self, f: F) -> Result<T>
            where
                C: Into<String>,
                F: FnOnce() -> C;
        }

        impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
            fn context(self, context: impl Into<String>) -> Result<T> {
                self.with_context(|| context)
            }

            fn with_context<C, F>(self, f: F) -> Result<T>
            where
                C: Into<String>,
                F: FnOnce() -> C,
            {
                self.map_err(|source| {
                    <Error as $crate::FromMessage>::from_message($crate::context::prefixed(
                        &f().into(),
                        &source,
                    ))
                })
            }
        }

        impl<T> Context<T> for Option<T> {
            fn context(self, context: impl Into<String>) -> Result<T> {
                self.with_context(|| context)
            }

            fn with_context<C, F>(self, f: F) -> Result<T>
            where
                C: Into<String>,
                F: FnOnce() -> C,
            {
                self.ok_or_else(|| <Error as $crate::FromMessage>::from_message(f().into()))
            }
        }
    };
}
