use conquest_audio::{
    dsp::Waveform,
    engine::{AudioContext, ContextState, Mixer},
    runtime::SoundEffect,
    EngineConfig, MusicMode, SoundFx,
};

const SAMPLE_RATE: f32 = 48_000.0;

/// A `SoundFx` on an offline context. The test renders the mixer and pumps
/// the scheduler itself.
fn offline_fx(seed: u64) -> (SoundFx, Mixer) {
    let config = EngineConfig::default()
        .seed(seed)
        .spawn_driver(false)
        .scope_capacity(4_096);
    let (ctx, mixer) = AudioContext::offline(&config);
    (SoundFx::with_context(config, ctx), mixer)
}

fn render(mixer: &mut Mixer, seconds: f64) -> Vec<f32> {
    let mut out = vec![0.0f32; (seconds * SAMPLE_RATE as f64) as usize];
    mixer.render(&mut out);
    out
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

#[test]
fn calls_before_init_are_ignored() {
    let (mut sfx, mut mixer) = offline_fx(1);

    sfx.play_key();
    sfx.play_conquer();
    sfx.play_tone(440.0, Waveform::Sine, 0.2);
    sfx.stop_bgm();

    assert!(!sfx.is_available());
    assert!(sfx.status().is_none());
    assert_eq!(sfx.pump(), 0);
    assert!(render(&mut mixer, 0.1).iter().all(|&s| s == 0.0));
}

#[test]
fn init_is_repeatable() {
    let (mut sfx, _mixer) = offline_fx(1);
    assert!(sfx.init());
    assert!(sfx.init());
    assert!(sfx.is_available());

    let status = sfx.status().unwrap();
    assert_eq!(status.context_state, ContextState::Running);
    assert_eq!(status.mode, None);
    assert_eq!(status.sample_rate, SAMPLE_RATE);
}

#[test]
fn init_fails_quietly_when_the_output_is_gone() {
    let (mut sfx, mixer) = offline_fx(1);
    drop(mixer);

    assert!(!sfx.init());
    assert!(!sfx.is_available());
    sfx.play_win();
    assert!(sfx.status().is_none());
}

#[test]
fn play_bgm_initialises_and_schedules_when_pumped() {
    let (mut sfx, mut mixer) = offline_fx(2);
    sfx.play_bgm(MusicMode::Normal);

    let status = sfx.status().unwrap();
    assert_eq!(status.mode, Some(MusicMode::Normal));
    assert_eq!(status.tempo_bpm, 110.0);
    assert_eq!(status.beat_index, 0);

    let mut audio = Vec::new();
    for _ in 0..40 {
        sfx.pump();
        audio.extend(render(&mut mixer, 0.025));
    }

    let status = sfx.status().unwrap();
    assert!(status.beat_index > 0);
    assert!(status.next_note_time > status.now);
    assert!(peak(&audio) > 0.01);
}

#[test]
fn repeating_the_current_mode_keeps_the_beat() {
    let (mut sfx, mut mixer) = offline_fx(3);
    sfx.play_bgm(MusicMode::Title);
    sfx.pump();
    render(&mut mixer, 0.5);
    sfx.pump();
    let before = sfx.status().unwrap().beat_index;

    sfx.play_bgm(MusicMode::Title);
    assert_eq!(sfx.status().unwrap().beat_index, before);

    sfx.play_bgm(MusicMode::Hurry);
    let status = sfx.status().unwrap();
    assert_eq!(status.mode, Some(MusicMode::Hurry));
    assert_eq!(status.beat_index, 0);
}

#[test]
fn victory_stops_the_music_and_plays_the_fanfare() {
    let (mut sfx, mut mixer) = offline_fx(4);
    sfx.play_bgm(MusicMode::Hurry);
    sfx.pump();
    render(&mut mixer, 0.3);

    sfx.play_win();
    let status = sfx.status().unwrap();
    assert_eq!(status.mode, None);
    assert_eq!(status.active_voices, 0);
    assert_eq!(sfx.pump(), 0);

    // Six notes, 150 ms apart; the last one starts 0.75 s in.
    let fanfare = render(&mut mixer, 1.0);
    let tail = &fanfare[(0.8 * SAMPLE_RATE) as usize..];
    assert!(peak(tail) > 0.01);
}

#[test]
fn defeat_stops_the_music() {
    let (mut sfx, mut mixer) = offline_fx(5);
    sfx.play_bgm(MusicMode::Normal);
    sfx.pump();

    sfx.play_over();
    assert_eq!(sfx.status().unwrap().mode, None);
    assert!(peak(&render(&mut mixer, 0.5)) > 0.01);
}

#[test]
fn key_click_does_not_touch_the_music() {
    let (mut sfx, mut mixer) = offline_fx(6);
    sfx.play_bgm(MusicMode::Normal);
    sfx.pump();

    sfx.play_key();
    sfx.play_effect(SoundEffect::Advance);
    assert_eq!(sfx.status().unwrap().mode, Some(MusicMode::Normal));
    render(&mut mixer, 0.05);
}

#[test]
fn tones_reach_the_scope_tap() {
    let (mut sfx, mut mixer) = offline_fx(7);
    assert!(sfx.take_scope().is_none());
    assert!(sfx.init());
    let mut scope = sfx.take_scope().unwrap();
    assert!(sfx.take_scope().is_none());

    sfx.play_tone_at_volume(440.0, Waveform::Square, 0.1, 0.5);
    render(&mut mixer, 0.05);

    let mut tapped = Vec::new();
    while let Ok(sample) = scope.pop() {
        tapped.push(sample);
    }
    assert_eq!(tapped.len(), (0.05 * SAMPLE_RATE) as usize);
    assert!(peak(&tapped) > 0.1);
}

#[test]
fn offline_rate_comes_from_config() {
    let config = EngineConfig::default()
        .fallback_sample_rate(22_050.0)
        .spawn_driver(false);
    let (ctx, mut mixer) = AudioContext::offline(&config);
    let mut sfx = SoundFx::with_context(config, ctx);
    assert!(sfx.init());

    let mut one_second = vec![0.0f32; 22_050];
    mixer.render(&mut one_second);

    let status = sfx.status().unwrap();
    assert_eq!(status.sample_rate, 22_050.0);
    assert!((status.now - 1.0).abs() < 1e-9);
}
