use std::io::{self, Write};

/// Audible cues emitted by the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cue {
    FoodEaten,
    LifeLost,
    GameOver,
}

impl Cue {
    /// Number of terminal bells to ring for this cue
    fn pulses(self) -> usize {
        match self {
            Cue::FoodEaten => 1,
            Cue::LifeLost => 2,
            Cue::GameOver => 3,
        }
    }
}

/// Sound effects via the terminal bell.  Strictly fire-and-forget: the
/// simulation never waits on a cue, and write failures are discarded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bell {
    enabled: bool,
}

impl Bell {
    pub(crate) fn new(enabled: bool) -> Bell {
        Bell { enabled }
    }

    pub(crate) fn play(&self, cue: Cue) {
        if !self.enabled {
            return;
        }
        let mut out = io::stdout().lock();
        let _ = out.write_all(&vec![0x07; cue.pulses()]);
        let _ = out.flush();
    }
}
