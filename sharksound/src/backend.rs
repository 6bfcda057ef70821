use std::cell::RefCell;
use std::fmt::Debug;
use std::io::Cursor;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use kira::backend::Backend;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use kira::sound::PlaybackState;
use kira::{AudioManager, AudioManagerSettings, Decibels, DefaultBackend, Tween};
#[cfg(feature = "debug")]
use sharksound_debug::logging::{print_debug, Colorize, Timer};
use sharksound_util::FileLoader;

use crate::controller::SoundController;
use crate::error::SoundLoadError;
use crate::sound::{Sound, SoundFactory};
use crate::volume::amplitude_to_decibels;

/// A sound controller that plays its sounds through kira.
pub type KiraSoundController<L, B = DefaultBackend> = SoundController<KiraSoundFactory<L, B>>;

const FADE_DURATION: Duration = Duration::from_millis(50);

fn fade() -> Tween {
    Tween {
        duration: FADE_DURATION,
        ..Default::default()
    }
}

fn decibels(amplitude: f32) -> Decibels {
    Decibels(amplitude_to_decibels(amplitude))
}

/// Decodes sound files into [`KiraSound`]s that share one audio manager.
pub struct KiraSoundFactory<L, B: Backend = DefaultBackend> {
    file_loader: Arc<L>,
    manager: Rc<RefCell<AudioManager<B>>>,
}

impl<L: FileLoader, B: Backend> KiraSoundFactory<L, B> {
    /// Opens the audio backend with its default settings. Without the `cpal`
    /// feature the default backend is kira's mock backend, which produces no
    /// output.
    pub fn new(file_loader: Arc<L>) -> Result<Self, SoundLoadError>
    where
        B::Settings: Default,
        B::Error: Debug,
    {
        let manager = AudioManager::<B>::new(AudioManagerSettings::default())
            .map_err(|error| SoundLoadError::Backend(format!("can't initialize audio backend: {error:?}")))?;

        Ok(Self::with_manager(file_loader, Rc::new(RefCell::new(manager))))
    }

    /// Uses an already opened audio manager.
    pub fn with_manager(file_loader: Arc<L>, manager: Rc<RefCell<AudioManager<B>>>) -> Self {
        Self { file_loader, manager }
    }

    /// The audio manager all sounds of this factory play on.
    pub fn manager(&self) -> &Rc<RefCell<AudioManager<B>>> {
        &self.manager
    }
}

impl<L: FileLoader, B: Backend> SoundFactory for KiraSoundFactory<L, B> {
    type Error = SoundLoadError;
    type Sound = KiraSound<B>;

    fn create_sound(&mut self, filename: &str) -> Result<KiraSound<B>, SoundLoadError> {
        #[cfg(feature = "debug")]
        let timer = Timer::new_dynamic(format!("load sound {}", filename.magenta()));

        let data = self.file_loader.get(filename)?;
        let data = StaticSoundData::from_cursor(Cursor::new(data))?;

        #[cfg(feature = "debug")]
        timer.stop();

        Ok(KiraSound::new(data, self.manager.clone()))
    }
}

struct Playback {
    handle: StaticSoundHandle,
    /// Volume the playback was started with, before global scaling.
    volume: f32,
}

/// A decoded sound that can be played any number of times at once.
pub struct KiraSound<B: Backend = DefaultBackend> {
    data: StaticSoundData,
    global_volume: f32,
    manager: Rc<RefCell<AudioManager<B>>>,
    on: bool,
    playing: Vec<Playback>,
    retain_count: u32,
}

impl<B: Backend> KiraSound<B> {
    fn new(data: StaticSoundData, manager: Rc<RefCell<AudioManager<B>>>) -> Self {
        Self {
            data,
            global_volume: 1.0,
            manager,
            on: true,
            playing: Vec::new(),
            retain_count: 0,
        }
    }

    /// Fades out every active playback.
    pub fn stop(&mut self) {
        self.playing.iter_mut().for_each(|playback| playback.handle.stop(fade()));
        self.playing.clear();
    }

    /// Returns true if at least one playback has not finished yet.
    pub fn is_playing(&mut self) -> bool {
        self.forget_stopped();
        !self.playing.is_empty()
    }

    /// Linear amplitudes the active playbacks are currently set to.
    pub fn active_amplitudes(&self) -> impl Iterator<Item = f32> + '_ {
        self.playing.iter().map(|playback| playback.volume * self.global_volume)
    }

    fn forget_stopped(&mut self) {
        self.playing.retain(|playback| playback.handle.state() != PlaybackState::Stopped);
    }
}

impl<B: Backend> Sound for KiraSound<B> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if !on {
            self.stop();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn set_global_volume(&mut self, volume: f32) {
        self.global_volume = volume;
        self.forget_stopped();

        for playback in self.playing.iter_mut() {
            playback.handle.set_volume(decibels(playback.volume * volume), fade());
        }
    }

    fn increment_retain_count(&mut self) {
        self.retain_count += 1;
    }

    fn decrement_retain_count(&mut self) -> u32 {
        self.retain_count = self.retain_count.saturating_sub(1);
        self.retain_count
    }

    fn retain_count(&self) -> u32 {
        self.retain_count
    }

    fn play(&mut self, volume: f32) -> bool {
        if !self.on {
            return false;
        }

        self.forget_stopped();

        let data = self.data.clone().volume(decibels(volume * self.global_volume));
        match self.manager.borrow_mut().play(data) {
            Ok(handle) => {
                self.playing.push(Playback { handle, volume });
                true
            }
            Err(_error) => {
                #[cfg(feature = "debug")]
                print_debug!("[{}] can't play sound: {:?}", "error".red(), _error);
                false
            }
        }
    }
}
