//! Human-readable command names, descriptions, and per-command details.
//!
//! Formatting summaries from decoded field values is a presentation
//! concern; the codec crate only exposes the data.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use credits_seq::Command;

/// Static catalog entry for one command type.
pub struct CommandInfo {
    pub opcode: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// All command types, ordered by opcode (1..=34).
pub const COMMAND_CATALOG: [CommandInfo; 34] = [
    CommandInfo {
        opcode: 1,
        name: "Wait",
        description: "Causes a delay before the next command is processed.",
    },
    CommandInfo {
        opcode: 2,
        name: "Switch Scene",
        description: "Causes the level to switch to another scene.",
    },
    CommandInfo {
        opcode: 3,
        name: "Fade Logo In",
        description: "Causes the logo to begin to fade in.",
    },
    CommandInfo {
        opcode: 4,
        name: "Drop Logo",
        description: "Causes the logo to drop to the lower screen.",
    },
    CommandInfo {
        opcode: 5,
        name: "Fade to Black",
        description: "Causes the screen to fade to black.",
    },
    CommandInfo {
        opcode: 6,
        name: "Fade from Black",
        description: "Causes the screen to fade in from black.",
    },
    CommandInfo {
        opcode: 7,
        name: "Fade to White",
        description: "Causes the screen to fade to white.",
    },
    CommandInfo {
        opcode: 8,
        name: "Fade from White",
        description: "Causes the screen to fade in from white.",
    },
    CommandInfo {
        opcode: 9,
        name: "Show Text",
        description: "Causes the current header and body text to fade in.",
    },
    CommandInfo {
        opcode: 10,
        name: "Hide Text",
        description: "Causes the current header and body text to fade out.",
    },
    CommandInfo {
        opcode: 11,
        name: "Set Header Text",
        description: "Changes the current header text.",
    },
    CommandInfo {
        opcode: 12,
        name: "Show Header Text",
        description: "Causes the current header text to fade in.",
    },
    CommandInfo {
        opcode: 13,
        name: "Hide Header Text",
        description: "Causes the current header text to fade out.",
    },
    CommandInfo {
        opcode: 14,
        name: "Set Body Text",
        description: "Changes the current body text.",
    },
    CommandInfo {
        opcode: 15,
        name: "Show Body Text",
        description: "Causes the current body text to fade in.",
    },
    CommandInfo {
        opcode: 16,
        name: "Hide Body Text",
        description: "Causes the current body text to fade out.",
    },
    CommandInfo {
        opcode: 17,
        name: "Disable Player Control",
        description: "Prevents the player from receiving button inputs.",
    },
    CommandInfo {
        opcode: 18,
        name: "Enable Player Control",
        description: "Allows the player to receive button inputs again.",
    },
    CommandInfo {
        opcode: 19,
        name: "Enable Low-Gravity Physics",
        description: "Causes the player to experience low-gravity physics.",
    },
    CommandInfo {
        opcode: 20,
        name: "Disable Low-Gravity Physics",
        description: "Switches the player back to normal physics.",
    },
    CommandInfo {
        opcode: 21,
        name: "Unlock Inactive Character",
        description: "Causes the inactive character to be able to move.",
    },
    CommandInfo {
        opcode: 22,
        name: "Set Players Facing Screen",
        description: "Causes all of the players to face the screen.",
    },
    CommandInfo {
        opcode: 23,
        name: "Load and Place Peach",
        description: "Loads Peach and positions her at a given location.",
    },
    CommandInfo {
        opcode: 24,
        name: "Play Character Win Animations",
        description: "Causes the characters to play their \"win\" animations.",
    },
    CommandInfo {
        opcode: 25,
        name: "Begin Fireworks",
        description: "Starts the fireworks firing.",
    },
    CommandInfo {
        opcode: 26,
        name: "End Fireworks",
        description: "Stops the fireworks.",
    },
    CommandInfo {
        opcode: 27,
        name: "Show Darkness Overlay",
        description: "Causes the wipe behind \"The End\" to occur.",
    },
    CommandInfo {
        opcode: 28,
        name: "Show \"The End\"",
        description: "Causes \"The End\" to be displayed on-screen.",
    },
    CommandInfo {
        opcode: 29,
        name: "Hide \"The End\"",
        description: "Causes \"The End\" to be hidden.",
    },
    CommandInfo {
        opcode: 30,
        name: "Show Coin Counter",
        description: "Displays the coin counter.",
    },
    CommandInfo {
        opcode: 31,
        name: "Hide Coin Counter",
        description: "Hides the coin counter.",
    },
    CommandInfo {
        opcode: 32,
        name: "Load File",
        description: "Causes a file to be loaded.",
    },
    CommandInfo {
        opcode: 33,
        name: "Unload File",
        description: "Causes a file to be unloaded.",
    },
    CommandInfo {
        opcode: 34,
        name: "Exit Stage",
        description: "Causes the stage to be exited.",
    },
];

/// Static description for a command's type.
pub fn describe(command: &Command) -> &'static str {
    COMMAND_CATALOG[usize::from(command.opcode()) - 1].description
}

/// Field-value summary for a command, when it has fields worth showing.
pub fn detail(command: &Command) -> Option<String> {
    match command {
        Command::Wait { delay: 1 } => Some("for 1 frame".to_string()),
        Command::Wait { delay } => Some(format!("for {delay} frames")),
        Command::SwitchScene {
            area_id,
            entrance_id,
            ..
        } => Some(format!("to area {area_id}, entrance {entrance_id}")),
        Command::SetHeaderText { text } | Command::SetBodyText { text } => {
            Some(format!("to \"{}\"", preview(text)))
        }
        Command::LoadAndPlacePeach { x, y } => {
            Some(format!("at position (0x{x:08X}, 0x{y:08X})"))
        }
        Command::LoadFile { slot, .. } => Some(format!("to the \"{slot}\" slot")),
        Command::UnloadFile { slot } => Some(format!("from the \"{slot}\" slot")),
        _ => None,
    }
}

/// Flatten newlines and truncate long text for list display.
fn preview(text: &str) -> String {
    let flat = text.replace('\n', " / ");
    if flat.chars().count() > 19 {
        let head: String = flat.chars().take(16).collect();
        format!("{head}...")
    } else {
        flat
    }
}

/// Shared table styling for CLI output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
