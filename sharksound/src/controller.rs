use std::collections::HashMap;

#[cfg(feature = "debug")]
use sharksound_debug::logging::{print_debug, Colorize};
use sharksound_util::container::GenerationalSlab;
use sharksound_util::create_generational_key;

use crate::settings::SoundSettings;
use crate::sound::{Sound, SoundFactory};
use crate::volume::GLOBAL_VOLUME_DIVISOR;

create_generational_key!(SoundKey, "Handle to a sound owned by a sound controller");

/// Owns every sound that was requested by file name. Each file name maps to
/// exactly one sound, which is shared by all requesters through its retain
/// count. Mute flag and global volume are applied to every owned sound and
/// to every sound created later.
pub struct SoundController<F: SoundFactory> {
    factory: F,
    global_volume: f32,
    lookup: HashMap<String, SoundKey>,
    sound_on: bool,
    sounds: GenerationalSlab<SoundKey, F::Sound>,
}

impl<F: SoundFactory> SoundController<F> {
    /// Creates a controller without any sounds. Sound is on and the global
    /// volume is `1.0`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            global_volume: 1.0,
            lookup: HashMap::default(),
            sound_on: true,
            sounds: GenerationalSlab::default(),
        }
    }

    /// Creates a controller and applies the given settings.
    pub fn with_settings(factory: F, settings: &SoundSettings) -> Self {
        let mut controller = Self::new(factory);
        controller.set_global_volume(settings.global_volume);
        controller.set_sound_on(settings.sound_on);
        controller
    }

    /// Turns all sounds on or off.
    pub fn set_sound_on(&mut self, on: bool) {
        #[cfg(feature = "debug")]
        print_debug!("sound turned {}", (if on { "on" } else { "off" }).yellow());

        self.sound_on = on;
        self.sounds.iter_mut().for_each(|(_, sound)| sound.set_on(on));
    }

    /// Sets the global volume. The value stored and handed to the sounds is
    /// half of the given volume.
    pub fn set_global_volume(&mut self, volume: f32) {
        self.global_volume = volume / GLOBAL_VOLUME_DIVISOR;

        let global_volume = self.global_volume;
        self.sounds
            .iter_mut()
            .for_each(|(_, sound)| sound.set_global_volume(global_volume));
    }

    /// Returns true if sounds are on.
    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    /// Returns the global volume as handed to the sounds, i.e. after halving.
    pub fn global_volume(&self) -> f32 {
        self.global_volume
    }

    /// Returns the current mute flag and volume as settings that can be
    /// saved.
    pub fn settings(&self) -> SoundSettings {
        SoundSettings {
            sound_on: self.sound_on,
            global_volume: self.global_volume * GLOBAL_VOLUME_DIVISOR,
        }
    }

    /// Returns the sound for the given file name and registers one more
    /// holder of it. The sound is created on the first request; errors of
    /// the factory are returned unchanged and leave the controller as it
    /// was.
    pub fn get_sound(&mut self, filename: &str) -> Result<SoundKey, F::Error> {
        if let Some(sound_key) = self.lookup.get(filename).copied() {
            if let Some(sound) = self.sounds.get_mut(sound_key) {
                sound.increment_retain_count();
                return Ok(sound_key);
            }
        }

        let mut sound = self.factory.create_sound(filename)?;
        sound.increment_retain_count();
        sound.set_global_volume(self.global_volume);
        sound.set_on(self.sound_on);

        let sound_key = self.sounds.insert(sound).expect("sound slab is full");
        self.lookup.insert(filename.to_string(), sound_key);

        #[cfg(feature = "debug")]
        print_debug!("created sound {} ({} loaded)", filename.magenta(), self.sounds.len().cyan());

        Ok(sound_key)
    }

    /// Returns the key of an already loaded sound without registering a new
    /// holder.
    pub fn find_sound(&self, filename: &str) -> Option<SoundKey> {
        self.lookup.get(filename).copied()
    }

    /// Removes the sound from the controller and hands it back to the caller.
    /// The retain count is not checked or changed. Does nothing if the key
    /// does not belong to a loaded sound.
    pub fn free_sound(&mut self, sound_key: SoundKey) -> Option<F::Sound> {
        let filename = self
            .lookup
            .iter()
            .find(|(_, key)| **key == sound_key)
            .map(|(filename, _)| filename.clone())?;

        self.lookup.remove(&filename);

        #[cfg(feature = "debug")]
        print_debug!("freed sound {}", filename.magenta());

        self.sounds.remove(sound_key)
    }

    /// Unregisters one holder of the sound. Once no holder is left, the
    /// sound is freed and handed back to the caller.
    pub fn release_sound(&mut self, sound_key: SoundKey) -> Option<F::Sound> {
        let sound = self.sounds.get_mut(sound_key)?;

        if sound.decrement_retain_count() > 0 {
            return None;
        }

        self.free_sound(sound_key)
    }

    /// Plays the sound at the given volume. Returns false if the key is
    /// unknown or the sound did not play.
    pub fn play_sound(&mut self, sound_key: SoundKey, volume: f32) -> bool {
        self.sounds.get_mut(sound_key).is_some_and(|sound| sound.play(volume))
    }

    /// Returns the sound of the given key.
    pub fn sound(&self, sound_key: SoundKey) -> Option<&F::Sound> {
        self.sounds.get(sound_key)
    }

    /// Returns the sound of the given key mutably.
    pub fn sound_mut(&mut self, sound_key: SoundKey) -> Option<&mut F::Sound> {
        self.sounds.get_mut(sound_key)
    }

    /// Iterates over the file names and keys of all loaded sounds.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SoundKey)> + '_ {
        self.lookup.iter().map(|(filename, sound_key)| (filename.as_str(), *sound_key))
    }

    /// Returns the number of loaded sounds.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if no sound is loaded.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Returns the factory used to create sounds.
    pub fn factory(&self) -> &F {
        &self.factory
    }
}
