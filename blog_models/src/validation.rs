//! Field-level validation rules for blog records.
//!
//! Every validated field has one predicate registered in a static
//! [FieldRule] table. Setters call [Validated::validate_field] with
//! the field name, so a single lookup dispatches to the right check.

use thiserror::Error as ThisError;

/// Result type that uses [ValidationError].
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Substrings of which a post title must contain at least one.
pub const TITLE_KEYWORDS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];
/// Categories a post may be filed under.
pub const CATEGORIES: [&str; 2] = ["Fiction", "Non-Fiction"];
/// Minimum length of post content, in characters.
pub const MIN_CONTENT_CHARS: usize = 250;
/// Maximum length of a post summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 250;
/// Exact length of an author phone number, in characters.
pub const PHONE_NUMBER_CHARS: usize = 10;

/// A field assignment was rejected.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    /// Create a new error for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }

    /// Name of the rejected field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable reason.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Predicate over a single field value. Receives the field name so
/// messages can mention it.
pub type Validator = fn(&'static str, &str) -> Result<()>;

/// One entry of a record's validation table.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    /// Column the rule applies to.
    pub field: &'static str,
    /// Check run on every assignment of the field.
    pub validator: Validator,
}

impl FieldRule {
    /// Register `validator` for `field`.
    pub const fn new(field: &'static str, validator: Validator) -> Self {
        FieldRule { field, validator }
    }
}

/// A record type whose fields are checked on assignment.
pub trait Validated {
    /// The validation table for this record type.
    const RULES: &'static [FieldRule];

    /// Look up the rule for `field`, if any.
    fn rule_for(field: &str) -> Option<&'static FieldRule> {
        Self::RULES.iter().find(|rule| rule.field == field)
    }

    /// Run the rule registered for `field` against `value`. Fields
    /// without a rule always pass.
    fn validate_field(field: &str, value: &str) -> Result<()> {
        match Self::rule_for(field) {
            Some(rule) => (rule.validator)(rule.field, value).inspect_err(|err| {
                log::debug!("rejected {field}: {err}");
            }),
            None => Ok(()),
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Author names must be non-empty. Uniqueness needs a database
/// lookup and is checked by the model.
pub fn author_name(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "Author cannot be empty."));
    }
    Ok(())
}

/// Phone numbers must be exactly [PHONE_NUMBER_CHARS] long. The
/// characters themselves are not checked.
pub fn phone_number(field: &'static str, value: &str) -> Result<()> {
    if char_len(value) != PHONE_NUMBER_CHARS {
        return Err(ValidationError::new(
            field,
            format!("{field} must be exactly {PHONE_NUMBER_CHARS} digits"),
        ));
    }
    Ok(())
}

/// Titles must be non-empty and contain one of [TITLE_KEYWORDS].
pub fn post_title(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "Post must have a title."));
    }
    if !TITLE_KEYWORDS.iter().any(|keyword| value.contains(keyword)) {
        return Err(ValidationError::new(
            field,
            "Post title must contain one of the following: 'Won't Believe', 'Secret', 'Top [number]', 'Guess'",
        ));
    }
    Ok(())
}

/// Content must be at least [MIN_CONTENT_CHARS] long.
pub fn post_content(field: &'static str, value: &str) -> Result<()> {
    if char_len(value) < MIN_CONTENT_CHARS {
        return Err(ValidationError::new(
            field,
            format!("{field} must be at least {MIN_CONTENT_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Summaries may be empty but no longer than [MAX_SUMMARY_CHARS].
pub fn post_summary(field: &'static str, value: &str) -> Result<()> {
    if char_len(value) > MAX_SUMMARY_CHARS {
        return Err(ValidationError::new(
            field,
            format!("Post summary cannot be more than {MAX_SUMMARY_CHARS} characters."),
        ));
    }
    Ok(())
}

/// Category must be one of [CATEGORIES].
pub fn post_category(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "Post must have a category."));
    }
    if !CATEGORIES.contains(&value) {
        return Err(ValidationError::new(
            field,
            "Post category must be either 'Fiction' or 'Non-Fiction'.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;
    impl Validated for Dummy {
        const RULES: &'static [FieldRule] = &[FieldRule::new("summary", post_summary)];
    }

    #[test]
    fn empty_author_name() {
        let err = author_name("name", "").unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.to_string(), "Author cannot be empty.");
        assert!(author_name("name", "Ada").is_ok());
    }

    #[test]
    fn phone_number_length_only() {
        assert!(phone_number("phone_number", "555123456").is_err());
        assert!(phone_number("phone_number", "55512345678").is_err());
        assert!(phone_number("phone_number", "5551234567").is_ok());
        assert!(phone_number("phone_number", "abcdefghij").is_ok());
        assert_eq!(
            phone_number("phone_number", "").unwrap_err().message(),
            "phone_number must be exactly 10 digits"
        );
    }

    #[test]
    fn title_keywords() {
        for title in [
            "You Won't Believe This",
            "The Secret Garden",
            "Top 10 Rust Crates",
            "Guess Who",
            "Topology",
        ] {
            assert!(post_title("title", title).is_ok(), "{title}");
        }
        assert_eq!(
            post_title("title", "").unwrap_err().message(),
            "Post must have a title."
        );
        assert!(post_title("title", "A Quiet Afternoon").is_err());
        // Matching is case sensitive.
        assert!(post_title("title", "the secret").is_err());
    }

    #[test]
    fn content_boundary() {
        assert!(post_content("content", &"a".repeat(249)).is_err());
        assert!(post_content("content", &"a".repeat(250)).is_ok());
        assert_eq!(
            post_content("content", "short").unwrap_err().message(),
            "content must be at least 250 characters"
        );
    }

    #[test]
    fn content_counts_chars_not_bytes() {
        // 250 chars, 500 bytes
        assert!(post_content("content", &"é".repeat(250)).is_ok());
        assert!(post_content("content", &"é".repeat(125)).is_err());
    }

    #[test]
    fn summary_boundary() {
        assert!(post_summary("summary", "").is_ok());
        assert!(post_summary("summary", &"s".repeat(250)).is_ok());
        assert_eq!(
            post_summary("summary", &"s".repeat(251))
                .unwrap_err()
                .message(),
            "Post summary cannot be more than 250 characters."
        );
    }

    #[test]
    fn categories() {
        assert!(post_category("category", "Fiction").is_ok());
        assert!(post_category("category", "Non-Fiction").is_ok());
        assert!(post_category("category", "fiction").is_err());
        assert_eq!(
            post_category("category", "Fantasy").unwrap_err().message(),
            "Post category must be either 'Fiction' or 'Non-Fiction'."
        );
        assert_eq!(
            post_category("category", "").unwrap_err().message(),
            "Post must have a category."
        );
    }

    #[test]
    fn table_dispatch() {
        assert!(Dummy::rule_for("summary").is_some());
        assert!(Dummy::rule_for("title").is_none());
        assert!(Dummy::validate_field("summary", &"s".repeat(251)).is_err());
        // No rule registered, so anything goes.
        assert!(Dummy::validate_field("title", "").is_ok());
    }
}
