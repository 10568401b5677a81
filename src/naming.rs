//! Casing rules for generated identifiers.
//!
//! Raw database identifiers are `_`-separated. Segments are never trimmed or
//! merged, so `a__b` keeps its empty middle segment.

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `user_account` -> `UserAccount`. Used for class and file names.
pub fn upper_camel(raw: &str) -> String {
    raw.split('_').map(upper_first).collect()
}

/// `user_account` -> `userAccount`. Used for field identifiers.
pub fn lower_camel(raw: &str) -> String {
    lower_first(&upper_camel(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heck::{ToLowerCamelCase, ToUpperCamelCase};

    #[test]
    fn test_upper_camel() {
        assert_eq!(upper_camel("user_account"), "UserAccount");
        assert_eq!(upper_camel("order_item_id"), "OrderItemId");
        assert_eq!(upper_camel("user"), "User");
        assert_eq!(upper_camel(""), "");
    }

    #[test]
    fn test_lower_camel() {
        assert_eq!(lower_camel("user_account"), "userAccount");
        assert_eq!(lower_camel("id"), "id");
    }

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(upper_camel("a__b"), "AB");
        assert_eq!(upper_camel("_leading"), "Leading");
        assert_eq!(lower_camel("trailing_"), "trailing");
    }

    #[test]
    fn test_only_first_letter_changes() {
        assert_eq!(upper_camel("DATABASECHANGELOG"), "DATABASECHANGELOG");
        assert_eq!(upper_camel("userID_x"), "UserIDX");
        assert_eq!(lower_camel("URL_path"), "uRLPath");
    }

    #[test]
    fn test_single_segment_round_trip() {
        for name in ["id", "quantity", "user"] {
            assert_eq!(lower_first(&upper_camel(name)), name);
        }
    }

    #[test]
    fn test_matches_heck_for_plain_snake_case() {
        for name in ["user_account", "order_item", "created_at", "customer_id", "name"] {
            assert_eq!(upper_camel(name), name.to_upper_camel_case());
            assert_eq!(lower_camel(name), name.to_lower_camel_case());
        }
    }
}
