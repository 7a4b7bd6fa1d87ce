// Purpose: Scheduled voices and the commands that move them to the mixer.
// A voice is built on the control side and owned by the mixer once sent.

pub mod message;
pub mod voice;

pub use message::MixerCommand;
pub use voice::{ActiveVoice, Voice, VoiceHandle};
