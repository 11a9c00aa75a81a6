//! Ordered container for credits commands.

use super::Command;

/// An ordered list of commands, in playback order.
///
/// Insertion order is semantically meaningful; commands carry no
/// cross-references to one another. The wire terminator is not stored
/// here, it is an artifact of the encoded form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CreditsSequence {
    pub commands: Vec<Command>,
}

impl CreditsSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from a list of commands.
    #[must_use]
    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Number of commands in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the sequence has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a command at the end.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Insert a command at `index`, shifting later commands back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, command: Command) {
        self.commands.insert(index, command);
    }

    /// Remove and return the command at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Command {
        self.commands.remove(index)
    }

    /// Move the command at `from` so it ends up at position `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= len` or `to > len - 1`.
    pub fn move_command(&mut self, from: usize, to: usize) {
        let command = self.commands.remove(from);
        self.commands.insert(to, command);
    }

    /// Iterate over the commands in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl FromIterator<Command> for CreditsSequence {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CreditsSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut sequence = CreditsSequence::new();
        assert!(sequence.is_empty());

        sequence.push(Command::FadeToBlack);
        sequence.push(Command::ExitStage);
        sequence.insert(1, Command::Wait { delay: 30 });
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.commands[1], Command::Wait { delay: 30 });

        sequence.move_command(2, 0);
        assert_eq!(sequence.commands[0], Command::ExitStage);

        let removed = sequence.remove(0);
        assert_eq!(removed, Command::ExitStage);
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let sequence: CreditsSequence =
            [Command::ShowText, Command::HideText].into_iter().collect();
        assert_eq!(sequence.len(), 2);
    }
}
