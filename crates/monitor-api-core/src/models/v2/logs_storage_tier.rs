use serde::{Deserialize, Serialize};

/// Specifies storage type as indexes, online-archives or flex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogsStorageTier {
    #[default]
    Indexes,
    OnlineArchives,
    Flex,
}

impl LogsStorageTier {
    pub const ALL: [Self; 3] = [Self::Indexes, Self::OnlineArchives, Self::Flex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indexes => "indexes",
            Self::OnlineArchives => "online-archives",
            Self::Flex => "flex",
        }
    }
}
