use std::{fmt, str::FromStr};

use crate::RevisionError;

/// Every host protocol revision with a packet factory
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Revision {
    V1_8_R3,
    V1_12_R1,
    V1_16_R3,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::V1_8_R3, Revision::V1_12_R1, Revision::V1_16_R3];

    /// Token used in the host's internal package names
    pub fn nms_token(&self) -> &'static str {
        match self {
            Revision::V1_8_R3 => "v1_8_R3",
            Revision::V1_12_R1 => "v1_12_R1",
            Revision::V1_16_R3 => "v1_16_R3",
        }
    }

    pub fn protocol_version(&self) -> i32 {
        match self {
            Revision::V1_8_R3 => 47,
            Revision::V1_12_R1 => 340,
            Revision::V1_16_R3 => 754,
        }
    }

    /// Game versions served by this revision
    pub fn game_versions(&self) -> &'static [&'static str] {
        match self {
            Revision::V1_8_R3 => &["1.8.3", "1.8.4", "1.8.5", "1.8.6", "1.8.7", "1.8.8"],
            Revision::V1_12_R1 => &["1.12", "1.12.1", "1.12.2"],
            Revision::V1_16_R3 => &["1.16.4", "1.16.5"],
        }
    }

    /// Whether entity names are JSON chat components rather than plain strings
    pub fn supports_rich_text(&self) -> bool {
        match self {
            Revision::V1_8_R3 | Revision::V1_12_R1 => false,
            Revision::V1_16_R3 => true,
        }
    }

    /// Matches a host revision string against the supported list.
    ///
    /// Accepts an NMS token (`v1_8_R3`), a CraftBukkit package
    /// (`org.bukkit.craftbukkit.v1_8_R3`), a Bukkit version
    /// (`1.8.8-R0.1-SNAPSHOT`) or a server version banner
    /// (`git-Paper-445 (MC: 1.16.5)`). Partial matches are rejected.
    pub fn detect(host_revision: &str) -> Result<Self, RevisionError> {
        let trimmed = host_revision.trim();

        let package_token = trimmed.rsplit('.').next().unwrap_or(trimmed);
        if let Some(revision) = Self::ALL
            .iter()
            .find(|revision| revision.nms_token() == package_token)
        {
            return Ok(*revision);
        }

        let game_version = match trimmed.find("(MC: ") {
            Some(start) => trimmed[start + 5..].trim_end_matches(')').trim(),
            None => trimmed.split('-').next().unwrap_or(trimmed),
        };
        if let Some(revision) = Self::ALL
            .iter()
            .find(|revision| revision.game_versions().contains(&game_version))
        {
            return Ok(*revision);
        }

        Err(RevisionError::Unsupported {
            found: host_revision.to_string(),
            supported: Self::supported_description(),
        })
    }

    fn supported_description() -> String {
        Self::ALL
            .iter()
            .map(|revision| {
                let versions = revision.game_versions();
                let first = versions.first().copied().unwrap_or_default();
                let last = versions.last().copied().unwrap_or_default();
                format!("{} ({} to {})", revision.nms_token(), first, last)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Revision {
    type Err = RevisionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::detect(value)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nms_token())
    }
}
