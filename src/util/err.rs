/// Converts errors from their error type (of the submodule) to that of
/// a `saferoute::Error` variant, or to a variant of another module error.
///
/// ```rust,ignore
/// use saferoute::route::RouteError;
/// saferoute::impl_err!(RouteError, Route);
/// saferoute::impl_err!(GeoError, RouteError, Geo);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
        ($from:ty, $to:ty, $variant:ident) => {
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    <$to>::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
