//! Field validation rules shared by registration and update.
//!
//! Lengths are counted in characters. Each function reports the first rule
//! the input breaks.

use ip_registry_sdk::{BlockHeight, Dimensions, FileType, Metadata, NewMetadata};

use super::error::DomainError;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_TAG_LEN: usize = 20;
pub const MAX_MEDIUM_LEN: usize = 50;
pub const MAX_ROYALTY_RATE: u32 = 50;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// # Errors
///
/// `InvalidTitle` if empty or longer than 100 characters.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let len = char_len(title);
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(DomainError::InvalidTitle { len });
    }
    Ok(())
}

/// # Errors
///
/// `InvalidDescription` if longer than 500 characters.
pub fn validate_description(description: &str) -> Result<(), DomainError> {
    let len = char_len(description);
    if len > MAX_DESCRIPTION_LEN {
        return Err(DomainError::InvalidDescription { len });
    }
    Ok(())
}

/// Checks registration metadata against the current height and converts it
/// into the stored form.
///
/// Order: category, created-at, tags, medium, dimensions, file type,
/// royalty rate.
///
/// # Errors
///
/// The error of the first failing check.
pub fn validate_metadata(
    input: NewMetadata,
    current: BlockHeight,
) -> Result<Metadata, DomainError> {
    let category_len = char_len(&input.category);
    if category_len == 0 || category_len > MAX_CATEGORY_LEN {
        return Err(DomainError::InvalidCategory { len: category_len });
    }

    if input.created_at > current {
        return Err(DomainError::InvalidCreatedAt {
            created_at: input.created_at,
            current,
        });
    }

    if let Some(tag) = input.tags.iter().find(|t| char_len(t) > MAX_TAG_LEN) {
        return Err(DomainError::InvalidTag(tag.clone()));
    }

    let medium_len = char_len(&input.medium);
    if medium_len > MAX_MEDIUM_LEN {
        return Err(DomainError::InvalidMedium { len: medium_len });
    }

    if let Some(Dimensions { width, height }) = input.dimensions
        && (width == 0 || height == 0)
    {
        return Err(DomainError::InvalidDimensions { width, height });
    }

    let file_type: FileType = input
        .file_type
        .parse()
        .map_err(|_| DomainError::InvalidFileType(input.file_type.clone()))?;

    if input.royalty_rate > MAX_ROYALTY_RATE {
        return Err(DomainError::InvalidRoyaltyRate(input.royalty_rate));
    }

    Ok(Metadata {
        category: input.category,
        created_at: input.created_at,
        tags: input.tags,
        medium: input.medium,
        dimensions: input.dimensions,
        file_type,
        royalty_rate: input.royalty_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> NewMetadata {
        NewMetadata {
            category: "digital".to_owned(),
            created_at: 0,
            tags: vec!["art".to_owned(), "nft".to_owned()],
            medium: "pixel".to_owned(),
            dimensions: Some(Dimensions::new(1024, 768)),
            file_type: "image/png".to_owned(),
            royalty_rate: 10,
        }
    }

    #[test]
    fn test_title_bounds() {
        assert_eq!(validate_title(""), Err(DomainError::InvalidTitle { len: 0 }));
        assert!(validate_title("x").is_ok());
        assert!(validate_title(&"x".repeat(100)).is_ok());
        assert_eq!(
            validate_title(&"x".repeat(101)),
            Err(DomainError::InvalidTitle { len: 101 })
        );
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(500)).is_ok());
        assert_eq!(
            validate_description(&"d".repeat(501)),
            Err(DomainError::InvalidDescription { len: 501 })
        );
    }

    #[test]
    fn test_valid_metadata_converts() {
        let stored = validate_metadata(metadata(), 5).unwrap();
        assert_eq!(stored.file_type, FileType::ImagePng);
        assert_eq!(stored.tags, vec!["art", "nft"]);
        assert_eq!(stored.dimensions, Some(Dimensions::new(1024, 768)));
    }

    #[test]
    fn test_category_bounds() {
        let mut m = metadata();
        m.category = String::new();
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidCategory { len: 0 })
        );

        let mut m = metadata();
        m.category = "c".repeat(51);
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidCategory { len: 51 })
        );
    }

    #[test]
    fn test_created_at_may_equal_but_not_exceed_current() {
        let mut m = metadata();
        m.created_at = 7;
        assert!(validate_metadata(m.clone(), 7).is_ok());
        assert_eq!(
            validate_metadata(m, 6),
            Err(DomainError::InvalidCreatedAt {
                created_at: 7,
                current: 6
            })
        );
    }

    #[test]
    fn test_tags_checked_individually() {
        let mut m = metadata();
        m.tags = vec!["t".repeat(20), "u".repeat(21)];
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidTag("u".repeat(21)))
        );

        let mut m = metadata();
        m.tags = (0..200).map(|i| format!("tag{i}")).collect();
        assert!(validate_metadata(m, 0).is_ok());
    }

    #[test]
    fn test_medium_may_be_empty() {
        let mut m = metadata();
        m.medium = String::new();
        assert!(validate_metadata(m, 0).is_ok());

        let mut m = metadata();
        m.medium = "m".repeat(51);
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidMedium { len: 51 })
        );
    }

    #[test]
    fn test_dimensions_must_be_positive_when_present() {
        let mut m = metadata();
        m.dimensions = None;
        assert!(validate_metadata(m, 0).is_ok());

        let mut m = metadata();
        m.dimensions = Some(Dimensions::new(0, 10));
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );

        let mut m = metadata();
        m.dimensions = Some(Dimensions::new(10, 0));
        assert!(matches!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_file_type_must_be_supported() {
        let mut m = metadata();
        m.file_type = "image/gif".to_owned();
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidFileType("image/gif".to_owned()))
        );
    }

    #[test]
    fn test_royalty_rate_cap() {
        let mut m = metadata();
        m.royalty_rate = 50;
        assert!(validate_metadata(m, 0).is_ok());

        let mut m = metadata();
        m.royalty_rate = 51;
        assert_eq!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidRoyaltyRate(51))
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut m = metadata();
        m.category = String::new();
        m.royalty_rate = 99;
        m.file_type = "text/plain".to_owned();
        assert!(matches!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidCategory { .. })
        ));

        let mut m = metadata();
        m.medium = "m".repeat(60);
        m.file_type = "text/plain".to_owned();
        assert!(matches!(
            validate_metadata(m, 0),
            Err(DomainError::InvalidMedium { .. })
        ));
    }
}
