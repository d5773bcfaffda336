//! The assistant's per-step guidance, revealed one character at a time.

use std::time::Duration;

use crate::wizard::TransferStep;

/// Guidance shown while `step` is active.
pub fn step_messages(step: TransferStep) -> &'static [&'static str] {
    match step {
        TransferStep::AssetSelection => &[
            "WELCOME TO THE TEST TRANSFER SETUP!\n",
            "I'LL HELP YOU SEND A SMALL TEST AMOUNT FIRST.\n",
            "LET'S START BY SELECTING AN ASSET AND ENTERING THE RECIPIENT'S ADDRESS.",
        ],
        TransferStep::SafetyScan => &[
            "GREAT! NOW I'LL SCAN THIS ADDRESS FOR ANY POTENTIAL RISKS.\n",
            "I CHECK MULTIPLE SECURITY DATABASES.\n",
            "THIS HELPS ENSURE YOUR FUNDS WILL BE SAFE.",
        ],
        TransferStep::TestTransfer => &[
            "THE SAFETY SCAN IS COMPLETE!\n",
            "NOW, CHOOSE A SMALL TEST AMOUNT TO SEND.\n",
            "THIS VERIFIES THE ADDRESS WORKS AS EXPECTED.",
        ],
        TransferStep::EmailVerification => &[
            "PERFECT! THE TEST TRANSFER IS ON ITS WAY.\n",
            "LET'S VERIFY YOUR EMAIL SO I CAN NOTIFY YOU WHEN IT'S RETURNED.\n",
            "THIS ALSO LETS YOU TRACK THE TRANSFER STATUS.",
        ],
        TransferStep::LinkSharing => &[
            "EMAIL VERIFIED! HERE'S YOUR UNIQUE LINK.\n",
            "SHARE THIS WITH THE RECIPIENT SO THEY CAN EASILY RETURN THE TEST.\n",
            "THEY'LL SEE STEP-BY-STEP INSTRUCTIONS.",
        ],
    }
}

/// Timing of the typing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingCadence {
    pub char_delay: Duration,
    pub message_pause: Duration,
    pub cursor_blink: Duration,
}

impl Default for TypingCadence {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(70),
            message_pause: Duration::from_millis(1200),
            cursor_blink: Duration::from_millis(530),
        }
    }
}

impl TypingCadence {
    /// Delay before `c` appears. Punctuation and line breaks linger.
    pub fn delay_for(&self, c: char) -> Duration {
        match c {
            '.' => self.char_delay * 4,
            ',' => self.char_delay * 2,
            '\n' => self.char_delay * 3,
            _ => self.char_delay,
        }
    }
}

/// Progress through a list of messages. Only the current message is shown;
/// the next one replaces it after a pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    messages: &'static [&'static str],
    message_index: usize,
    revealed: usize,
    cadence: TypingCadence,
}

impl Typewriter {
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self::with_cadence(messages, TypingCadence::default())
    }

    pub fn for_step(step: TransferStep) -> Self {
        Self::new(step_messages(step))
    }

    pub fn with_cadence(messages: &'static [&'static str], cadence: TypingCadence) -> Self {
        Self {
            messages,
            message_index: 0,
            revealed: 0,
            cadence,
        }
    }

    pub fn cadence(&self) -> TypingCadence {
        self.cadence
    }

    fn current(&self) -> &'static str {
        self.messages.get(self.message_index).copied().unwrap_or("")
    }

    /// The part of the current message revealed so far.
    pub fn text(&self) -> &'static str {
        let message = self.current();
        let end = message
            .char_indices()
            .nth(self.revealed)
            .map_or(message.len(), |(i, _)| i);
        &message[..end]
    }

    fn next_char(&self) -> Option<char> {
        self.current().chars().nth(self.revealed)
    }

    /// How long to wait before the next [`advance`](Self::advance), or
    /// `None` once the last message is fully shown.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.next_char() {
            Some(c) => Some(self.cadence.delay_for(c)),
            None if self.message_index + 1 < self.messages.len() => {
                Some(self.cadence.message_pause)
            }
            None => None,
        }
    }

    /// Reveals one more character, or moves on to the next message.
    pub fn advance(&mut self) -> bool {
        if self.next_char().is_some() {
            self.revealed += 1;
            true
        } else if self.message_index + 1 < self.messages.len() {
            self.message_index += 1;
            self.revealed = 0;
            true
        } else {
            false
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next_delay().is_none()
    }
}
