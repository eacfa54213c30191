//! Name validation
//!
//! Checks applied to folder names before they enter the store.

use crate::error::StoreError;

/// Default limit on folder name length, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Default limit on folder nesting below ROOT.
pub const MAX_FOLDER_DEPTH: usize = 32;

/// Validate a folder name and return it trimmed.
pub fn validate_folder_name(name: &str, max_length: usize) -> Result<String, StoreError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(StoreError::EmptyName);
    }

    let length = trimmed.chars().count();
    if length > max_length {
        return Err(StoreError::NameTooLong {
            length,
            max: max_length,
        });
    }

    if trimmed.chars().any(char::is_control) {
        return Err(StoreError::InvalidName(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(validate_folder_name("", 10), Err(StoreError::EmptyName));
        assert_eq!(validate_folder_name("   \t", 10), Err(StoreError::EmptyName));
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_folder_name("  Docs ", 10).unwrap(), "Docs");
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(validate_folder_name("ééééé", 5).is_ok());
        assert_eq!(
            validate_folder_name("abcdef", 5),
            Err(StoreError::NameTooLong { length: 6, max: 5 })
        );
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(matches!(
            validate_folder_name("a\nb", 10),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            validate_folder_name("a\0b", 10),
            Err(StoreError::InvalidName(_))
        ));
    }
}
