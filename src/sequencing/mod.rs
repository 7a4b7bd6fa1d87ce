pub mod composer;
pub mod duration;
pub mod event;
pub mod mode;

pub use composer::{compose_beat, BeatRng, Composer};
pub use duration::Duration;
pub use event::{Instrument, NoteEvent};
pub use mode::MusicMode;
