pub mod test_utils {
    use fielderr::{add_field, add_global, label, ErrorCollection};

    /// A collection with two field errors on `email`, one on `age` and two globals.
    pub fn sample_collection() -> ErrorCollection {
        let mut errors = ErrorCollection::new();
        add_field!(errors, "email", "Required", label("EMAIL"));
        add_field!(errors, "email", "TooLong", label("EMAIL"), 64);
        add_field!(errors, "age", "OutOfRange", 18, 99);
        add_global!(errors, "MonError", 12, "titi");
        add_global!(errors, "Conflict");
        errors
    }

    pub fn compact(errors: &ErrorCollection) -> String {
        serde_json::to_string(errors).expect("collection should serialize")
    }
}
