/// A loaded sound resource. The resource tracks how many holders share it,
/// whether it may be heard and the global volume it plays at.
pub trait Sound {
    /// Turns the sound on or off. A sound that is off stays silent.
    fn set_on(&mut self, on: bool);

    /// Returns true if the sound is on.
    fn is_on(&self) -> bool;

    /// Sets the volume every playback of this sound is scaled by.
    fn set_global_volume(&mut self, volume: f32);

    /// Registers one more holder of this sound.
    fn increment_retain_count(&mut self);

    /// Unregisters one holder of this sound and returns how many are left.
    /// Never goes below zero.
    fn decrement_retain_count(&mut self) -> u32;

    /// Returns the number of holders of this sound.
    fn retain_count(&self) -> u32;

    /// Plays the sound at the given volume, scaled by the global volume.
    /// Returns false if nothing was played.
    fn play(&mut self, volume: f32) -> bool;
}

/// Creates sounds from their file names.
pub trait SoundFactory {
    /// The sound this factory creates.
    type Sound: Sound;
    /// The error returned when a sound can't be created.
    type Error;

    /// Creates a new, unshared sound for the given file name.
    fn create_sound(&mut self, filename: &str) -> Result<Self::Sound, Self::Error>;
}
