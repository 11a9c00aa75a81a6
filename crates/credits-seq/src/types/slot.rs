//! The fixed file slot list referenced by load/unload commands.

/// One of the six named resource-loading destinations.
///
/// Load and unload commands address a slot by its index on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FileSlot {
    Logo,
    HeaderFont,
    BodyFont,
    TheEnd,
    CoinCounterFont,
    Darkness,
}

impl FileSlot {
    /// All slots in wire order.
    pub const ALL: [FileSlot; 6] = [
        FileSlot::Logo,
        FileSlot::HeaderFont,
        FileSlot::BodyFont,
        FileSlot::TheEnd,
        FileSlot::CoinCounterFont,
        FileSlot::Darkness,
    ];

    /// Wire index of this slot.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Logo => 0,
            Self::HeaderFont => 1,
            Self::BodyFont => 2,
            Self::TheEnd => 3,
            Self::CoinCounterFont => 4,
            Self::Darkness => 5,
        }
    }

    /// Look up a slot by wire index.
    #[must_use]
    pub const fn from_index(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Logo),
            1 => Some(Self::HeaderFont),
            2 => Some(Self::BodyFont),
            3 => Some(Self::TheEnd),
            4 => Some(Self::CoinCounterFont),
            5 => Some(Self::Darkness),
            _ => None,
        }
    }

    /// Human-readable slot name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Logo => "Logo",
            Self::HeaderFont => "Header Font",
            Self::BodyFont => "Body Font",
            Self::TheEnd => "The End",
            Self::CoinCounterFont => "Coin Counter Font",
            Self::Darkness => "Darkness",
        }
    }
}

impl std::fmt::Display for FileSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
