use crate::models::Classroom;
use serde::Serialize;

pub const NAME_MAX_LENGTH: usize = 255;

/// A single failed constraint on a classroom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a classroom snapshot against its field constraints.
/// An empty list means the classroom may be persisted.
pub fn validate(classroom: &Classroom) -> Vec<Violation> {
    let mut violations = Vec::new();

    if classroom.name.is_empty() {
        violations.push(Violation::new("name", "This value should not be blank."));
    } else if classroom.name.chars().count() > NAME_MAX_LENGTH {
        violations.push(Violation::new(
            "name",
            format!(
                "This value is too long. It should have {} characters or less.",
                NAME_MAX_LENGTH
            ),
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_classroom() {
        let classroom = Classroom::new("TEST".to_string(), false);
        assert!(validate(&classroom).is_empty());
    }

    #[test]
    fn test_empty_name() {
        let classroom = Classroom::new(String::new(), true);
        let violations = validate(&classroom);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let classroom = Classroom::new("   ".to_string(), true);
        assert!(validate(&classroom).is_empty());
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = Classroom::new("a".repeat(NAME_MAX_LENGTH), true);
        assert!(validate(&at_limit).is_empty());

        let too_long = Classroom::new("a".repeat(NAME_MAX_LENGTH + 1), true);
        let violations = validate(&too_long);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("too long"));
    }
}
