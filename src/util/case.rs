use heck::{ToLowerCamelCase, ToSnakeCase};

/// Convert a separator-delimited name (`user_name`, `user-name`) to
/// lower camel case (`userName`).
pub fn camelize(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Convert a camel-case name (`userName`) to snake case (`user_name`).
pub fn decamelize(s: &str) -> String {
    s.to_snake_case()
}
