//! Verlauf der ausgeführten Commands (Ringpuffer mit halbierendem Überlauf).

use super::AppCommand;

/// Ausgeführte Commands in Ausführungsreihenfolge, höchstens `CAPACITY` Einträge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt `command` an. Ist der Verlauf voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.drain(..Self::CAPACITY / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_keeps_newer_half() {
        let mut log = CommandLog::new();
        for i in 0..CommandLog::CAPACITY {
            log.record(&AppCommand::SetYIntercept { value: i as f64 });
        }
        assert_eq!(log.entries().len(), CommandLog::CAPACITY);

        log.record(&AppCommand::ResetMidpoint);
        assert_eq!(log.entries().len(), CommandLog::CAPACITY / 2 + 1);
        assert_eq!(
            log.entries().first(),
            Some(&AppCommand::SetYIntercept {
                value: (CommandLog::CAPACITY / 2) as f64
            })
        );
        assert_eq!(log.last(), Some(&AppCommand::ResetMidpoint));
    }
}
