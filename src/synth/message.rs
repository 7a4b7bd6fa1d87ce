use crate::synth::voice::{Voice, VoiceHandle};

/// Commands sent from the control side to the mixer on the audio thread.
pub enum MixerCommand {
    /// Take ownership of a voice and render it on its schedule.
    Start { handle: VoiceHandle, voice: Voice },
    /// Drop a voice immediately, wherever it is in its envelope.
    Stop(VoiceHandle),
    /// Drop every voice.
    StopAll,
}
