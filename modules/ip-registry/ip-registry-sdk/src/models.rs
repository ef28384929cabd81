//! Public models for the ip-registry module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the registry and its consumers. Stored records (`Artwork`,
//! `Metadata`) are only produced by the registry after validation; the
//! `New*` types carry raw caller input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dense, creation-ordered artwork identifier starting at 0.
pub type ArtworkId = u64;

/// Chain height used as the registry clock.
pub type BlockHeight = u64;

/// Identity of a caller, owner or administrative principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Media type of the registered work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "image/jpeg")]
    ImageJpeg,
    #[serde(rename = "image/png")]
    ImagePng,
    #[serde(rename = "audio/mp3")]
    AudioMp3,
    #[serde(rename = "video/mp4")]
    VideoMp4,
}

impl FileType {
    pub const ALL: [Self; 4] = [
        Self::ImageJpeg,
        Self::ImagePng,
        Self::AudioMp3,
        Self::VideoMp4,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImageJpeg => "image/jpeg",
            Self::ImagePng => "image/png",
            Self::AudioMp3 => "audio/mp3",
            Self::VideoMp4 => "video/mp4",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported [`FileType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported file type: {0}")]
pub struct UnknownFileType(pub String);

impl FromStr for FileType {
    type Err = UnknownFileType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ft| ft.as_str() == s)
            .ok_or_else(|| UnknownFileType(s.to_owned()))
    }
}

/// Physical or pixel dimensions of a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Validated, immutable metadata attached to an artwork at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub category: String,
    pub created_at: BlockHeight,
    pub tags: Vec<String>,
    pub medium: String,
    pub dimensions: Option<Dimensions>,
    pub file_type: FileType,
    pub royalty_rate: u32,
}

/// Registration-time metadata as supplied by the caller.
///
/// `file_type` is a raw string; the registry parses it into [`FileType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMetadata {
    pub category: String,
    pub created_at: BlockHeight,
    pub tags: Vec<String>,
    pub medium: String,
    pub dimensions: Option<Dimensions>,
    pub file_type: String,
    pub royalty_rate: u32,
}

/// Registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtwork {
    /// 64-character content digest; the primary natural key.
    pub hash: String,
    pub title: String,
    pub description: String,
    pub metadata: NewMetadata,
}

/// A registered creative work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub owner: Principal,
    pub title: String,
    pub description: String,
    pub metadata: Metadata,
    /// Height of registration, or of the latest title/description update.
    pub timestamp: BlockHeight,
    pub status: bool,
}

/// Audit record of the most recent title/description edit of an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkUpdate {
    pub title: String,
    pub description: String,
    pub timestamp: BlockHeight,
    pub updater: Principal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_parses_supported_values() {
        assert_eq!("image/jpeg".parse::<FileType>(), Ok(FileType::ImageJpeg));
        assert_eq!("image/png".parse::<FileType>(), Ok(FileType::ImagePng));
        assert_eq!("audio/mp3".parse::<FileType>(), Ok(FileType::AudioMp3));
        assert_eq!("video/mp4".parse::<FileType>(), Ok(FileType::VideoMp4));
    }

    #[test]
    fn file_type_rejects_unknown_and_case_variants() {
        assert_eq!(
            "image/gif".parse::<FileType>(),
            Err(UnknownFileType("image/gif".to_owned()))
        );
        assert!("IMAGE/PNG".parse::<FileType>().is_err());
        assert!("".parse::<FileType>().is_err());
    }

    #[test]
    fn file_type_serializes_as_mime_string() {
        let json = serde_json::to_string(&FileType::AudioMp3).unwrap();
        assert_eq!(json, "\"audio/mp3\"");
    }

    #[test]
    fn principal_serializes_transparently() {
        let p = Principal::from("ST1TEST");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"ST1TEST\"");
        assert_eq!(p.to_string(), "ST1TEST");
    }

    #[test]
    fn metadata_uses_camel_case_keys() {
        let metadata = Metadata {
            category: "digital".to_owned(),
            created_at: 3,
            tags: vec!["art".to_owned()],
            medium: "pixel".to_owned(),
            dimensions: None,
            file_type: FileType::ImagePng,
            royalty_rate: 10,
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["createdAt"], 3);
        assert_eq!(value["fileType"], "image/png");
        assert_eq!(value["royaltyRate"], 10);
    }
}
