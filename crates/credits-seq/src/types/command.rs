//! Command variants for the credits sequence.

use super::FileSlot;

/// A single playback command in a credits sequence.
///
/// Each variant corresponds to one opcode in the range 1..=34 and carries
/// its fixed field set. Field widths match the wire format: `u16` and `u32`
/// fields are stored little-endian, text fields are length-prefixed latin-1.
/// The terminator (opcode 0) is not a variant; it is synthesized on encode
/// and consumed on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", rename_all = "snake_case"))]
pub enum Command {
    /// Delay before the next command is processed (opcode 1).
    Wait { delay: u16 },
    /// Switch the level to another scene (opcode 2).
    SwitchScene {
        area_id: u16,
        entrance_id: u16,
        bg_top: u8,
        bg_bottom: u8,
        tileset_slot: u8,
        is_ending: bool,
    },
    /// Begin fading the logo in (opcode 3).
    FadeLogoIn,
    /// Drop the logo to the lower screen (opcode 4).
    DropLogo,
    /// Fade the screen to black (opcode 5).
    FadeToBlack,
    /// Fade the screen in from black (opcode 6).
    FadeFromBlack,
    /// Fade the screen to white (opcode 7).
    FadeToWhite,
    /// Fade the screen in from white (opcode 8).
    FadeFromWhite,
    /// Fade in the current header and body text (opcode 9).
    ShowText,
    /// Fade out the current header and body text (opcode 10).
    HideText,
    /// Change the current header text (opcode 11).
    SetHeaderText { text: String },
    /// Fade in the current header text (opcode 12).
    ShowHeaderText,
    /// Fade out the current header text (opcode 13).
    HideHeaderText,
    /// Change the current body text (opcode 14).
    SetBodyText { text: String },
    /// Fade in the current body text (opcode 15).
    ShowBodyText,
    /// Fade out the current body text (opcode 16).
    HideBodyText,
    /// Stop the player from receiving button inputs (opcode 17).
    DisablePlayerControl,
    /// Let the player receive button inputs again (opcode 18).
    EnablePlayerControl,
    /// Switch the player to low-gravity physics (opcode 19).
    EnableLowGravityPhysics,
    /// Switch the player back to normal physics (opcode 20).
    DisableLowGravityPhysics,
    /// Let the inactive character move (opcode 21).
    UnlockInactiveCharacter,
    /// Make all players face the screen (opcode 22).
    SetPlayersFacingScreen,
    /// Load Peach and place her at a position (opcode 23).
    ///
    /// The payload carries two reserved bytes before the coordinates;
    /// they are always written as zero.
    LoadAndPlacePeach { x: u32, y: u32 },
    /// Play the characters' win animations (opcode 24).
    PlayCharacterWinAnimations,
    /// Start the fireworks (opcode 25).
    BeginFireworks,
    /// Stop the fireworks (opcode 26).
    EndFireworks,
    /// Run the darkness wipe behind "The End" (opcode 27).
    ShowDarknessOverlay,
    /// Display "The End" (opcode 28).
    ShowTheEnd,
    /// Hide "The End" (opcode 29).
    HideTheEnd,
    /// Display the coin counter (opcode 30).
    ShowCoinCounter,
    /// Hide the coin counter (opcode 31).
    HideCoinCounter,
    /// Load a file into a slot (opcode 32).
    LoadFile { file_id: u16, slot: FileSlot },
    /// Unload the file in a slot (opcode 33).
    UnloadFile { slot: FileSlot },
    /// Exit the stage (opcode 34).
    ExitStage,
}

impl Command {
    /// Wire opcode for this command.
    #[must_use]
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Wait { .. } => 1,
            Self::SwitchScene { .. } => 2,
            Self::FadeLogoIn => 3,
            Self::DropLogo => 4,
            Self::FadeToBlack => 5,
            Self::FadeFromBlack => 6,
            Self::FadeToWhite => 7,
            Self::FadeFromWhite => 8,
            Self::ShowText => 9,
            Self::HideText => 10,
            Self::SetHeaderText { .. } => 11,
            Self::ShowHeaderText => 12,
            Self::HideHeaderText => 13,
            Self::SetBodyText { .. } => 14,
            Self::ShowBodyText => 15,
            Self::HideBodyText => 16,
            Self::DisablePlayerControl => 17,
            Self::EnablePlayerControl => 18,
            Self::EnableLowGravityPhysics => 19,
            Self::DisableLowGravityPhysics => 20,
            Self::UnlockInactiveCharacter => 21,
            Self::SetPlayersFacingScreen => 22,
            Self::LoadAndPlacePeach { .. } => 23,
            Self::PlayCharacterWinAnimations => 24,
            Self::BeginFireworks => 25,
            Self::EndFireworks => 26,
            Self::ShowDarknessOverlay => 27,
            Self::ShowTheEnd => 28,
            Self::HideTheEnd => 29,
            Self::ShowCoinCounter => 30,
            Self::HideCoinCounter => 31,
            Self::LoadFile { .. } => 32,
            Self::UnloadFile { .. } => 33,
            Self::ExitStage => 34,
        }
    }

    /// Human-readable command name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wait { .. } => "Wait",
            Self::SwitchScene { .. } => "Switch Scene",
            Self::FadeLogoIn => "Fade Logo In",
            Self::DropLogo => "Drop Logo",
            Self::FadeToBlack => "Fade to Black",
            Self::FadeFromBlack => "Fade from Black",
            Self::FadeToWhite => "Fade to White",
            Self::FadeFromWhite => "Fade from White",
            Self::ShowText => "Show Text",
            Self::HideText => "Hide Text",
            Self::SetHeaderText { .. } => "Set Header Text",
            Self::ShowHeaderText => "Show Header Text",
            Self::HideHeaderText => "Hide Header Text",
            Self::SetBodyText { .. } => "Set Body Text",
            Self::ShowBodyText => "Show Body Text",
            Self::HideBodyText => "Hide Body Text",
            Self::DisablePlayerControl => "Disable Player Control",
            Self::EnablePlayerControl => "Enable Player Control",
            Self::EnableLowGravityPhysics => "Enable Low-Gravity Physics",
            Self::DisableLowGravityPhysics => "Disable Low-Gravity Physics",
            Self::UnlockInactiveCharacter => "Unlock Inactive Character",
            Self::SetPlayersFacingScreen => "Set Players Facing Screen",
            Self::LoadAndPlacePeach { .. } => "Load and Place Peach",
            Self::PlayCharacterWinAnimations => "Play Character Win Animations",
            Self::BeginFireworks => "Begin Fireworks",
            Self::EndFireworks => "End Fireworks",
            Self::ShowDarknessOverlay => "Show Darkness Overlay",
            Self::ShowTheEnd => "Show \"The End\"",
            Self::HideTheEnd => "Hide \"The End\"",
            Self::ShowCoinCounter => "Show Coin Counter",
            Self::HideCoinCounter => "Hide Coin Counter",
            Self::LoadFile { .. } => "Load File",
            Self::UnloadFile { .. } => "Unload File",
            Self::ExitStage => "Exit Stage",
        }
    }
}
