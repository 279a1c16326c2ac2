/// What sits behind a door.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Prize,
    Decoy,
}

impl Label {
    pub const fn is_prize(&self) -> bool {
        matches!(self, Self::Prize)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Prize => write!(f, "prize"),
            Self::Decoy => write!(f, "decoy"),
        }
    }
}
