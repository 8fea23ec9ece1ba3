//! Variadic constructors. Every trailing argument is turned into a
//! [`Parameter`](crate::Parameter) with `Parameter::from`, so numbers,
//! strings, booleans and ready-made values can be mixed freely.

/// Build an [`ErrorRecord`](crate::ErrorRecord).
///
/// ```
/// let record = fielderr::error_record!("MonError", 12, "titi");
/// assert_eq!(record.parameters().len(), 2);
/// ```
#[macro_export]
macro_rules! error_record {
    () => {
        $crate::ErrorRecord::default()
    };
    ($message:expr $(, $param:expr)* $(,)?) => {
        $crate::ErrorRecord::new($message, vec![$($crate::Parameter::from($param)),*])
    };
}

/// Build an [`ErrorCollection`](crate::ErrorCollection), optionally seeded
/// with one global error.
#[macro_export]
macro_rules! error_collection {
    () => {
        $crate::ErrorCollection::new()
    };
    ($message:expr $(, $param:expr)* $(,)?) => {
        $crate::ErrorCollection::with_global(
            $message,
            vec![$($crate::Parameter::from($param)),*],
        )
    };
}

/// Attach an error to a field of an existing collection.
#[macro_export]
macro_rules! add_field {
    ($errors:expr, $field:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $errors.add_field(
            $field,
            $message,
            vec![$($crate::Parameter::from($param)),*],
        )
    };
}

/// Record a global error in an existing collection.
#[macro_export]
macro_rules! add_global {
    ($errors:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $errors.add_global($message, vec![$($crate::Parameter::from($param)),*])
    };
}
