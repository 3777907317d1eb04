/// Builds a [`View`](crate::View) from a string literal, or the null view
/// when called without arguments.
///
/// ```
/// use slice_view::{view, View};
///
/// assert_eq!(view!("something").len(), 9);
/// assert!(view!().is_null());
/// assert_eq!(view!(), View::from(""));
/// ```
#[macro_export]
macro_rules! view {
    () => {
        $crate::View::null()
    };
    ($text:expr $(,)?) => {
        $crate::View::from_literal($text)
    };
}
