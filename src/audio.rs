use ggez::audio::{self, SoundSource};
use ggez::Context;
use tracing::{debug, warn};

/// A short sound tied to a game event.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Cue {
    Eat,
    Crash,
    GameOver,
    Explosion,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Eat, Cue::Crash, Cue::GameOver, Cue::Explosion];

    /// File looked up under the configured sound directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Cue::Eat => "fart.wav",
            Cue::Crash => "crash.wav",
            Cue::GameOver => "game_over.wav",
            Cue::Explosion => "explosion.wav",
        }
    }
}

/// Anything that can play a cue. Playback must not block and must not fail
/// the caller.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Swallows every cue.
#[derive(Default, Debug)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Loaded sound sources, one optional slot per cue.
#[derive(Default)]
pub struct SoundBank {
    eat: Option<audio::Source>,
    crash: Option<audio::Source>,
    game_over: Option<audio::Source>,
    explosion: Option<audio::Source>,
}

impl SoundBank {
    /// Loads `<dir>/<cue file>` for each cue from the ggez resource paths.
    /// A file that cannot be loaded leaves that cue silent.
    pub fn load(ctx: &mut Context, dir: &str) -> Self {
        let mut bank = SoundBank::default();
        for cue in Cue::ALL {
            let path = format!("{}/{}", dir.trim_end_matches('/'), cue.file_name());
            match audio::Source::new(ctx, &path) {
                Ok(source) => *bank.slot(cue) = Some(source),
                Err(e) => debug!(?cue, %path, error = %e, "sound cue unavailable"),
            }
        }
        bank
    }

    pub fn is_loaded(&self, cue: Cue) -> bool {
        match cue {
            Cue::Eat => self.eat.is_some(),
            Cue::Crash => self.crash.is_some(),
            Cue::GameOver => self.game_over.is_some(),
            Cue::Explosion => self.explosion.is_some(),
        }
    }

    fn slot(&mut self, cue: Cue) -> &mut Option<audio::Source> {
        match cue {
            Cue::Eat => &mut self.eat,
            Cue::Crash => &mut self.crash,
            Cue::GameOver => &mut self.game_over,
            Cue::Explosion => &mut self.explosion,
        }
    }

    /// Plays `cue` if it was loaded.
    pub fn play_if_present(&mut self, ctx: &Context, cue: Cue) {
        if let Some(source) = self.slot(cue) {
            if let Err(e) = source.play_detached(ctx) {
                warn!(?cue, error = %e, "failed to play sound cue");
            }
        }
    }
}

/// A [`SoundBank`] bound to the ggez context for the duration of one tick.
pub struct Speaker<'a> {
    bank: &'a mut SoundBank,
    ctx: &'a Context,
}

impl<'a> Speaker<'a> {
    pub fn new(bank: &'a mut SoundBank, ctx: &'a Context) -> Self {
        Speaker { bank, ctx }
    }
}

impl CuePlayer for Speaker<'_> {
    fn play(&mut self, cue: Cue) {
        self.bank.play_if_present(self.ctx, cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_cue_has_its_own_file() {
        let names: HashSet<_> = Cue::ALL.iter().map(|c| c.file_name()).collect();
        assert_eq!(names.len(), Cue::ALL.len());
        assert!(names.iter().all(|n| n.ends_with(".wav")));
    }

    #[test]
    fn cue_files_match_the_shipped_sound_set() {
        assert_eq!(Cue::Eat.file_name(), "fart.wav");
        assert_eq!(Cue::Crash.file_name(), "crash.wav");
        assert_eq!(Cue::GameOver.file_name(), "game_over.wav");
        assert_eq!(Cue::Explosion.file_name(), "explosion.wav");
    }

    #[test]
    fn empty_bank_has_nothing_loaded() {
        let bank = SoundBank::default();
        for cue in Cue::ALL {
            assert!(!bank.is_loaded(cue));
        }
    }

    #[test]
    fn silent_player_accepts_everything() {
        let mut player = Silent;
        for cue in Cue::ALL {
            player.play(cue);
        }
    }
}
