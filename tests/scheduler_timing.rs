use conquest_audio::{
    engine::{AudioContext, Mixer, Scheduler, SchedulerState},
    EngineConfig, MusicMode,
};

const SAMPLE_RATE: f32 = 48_000.0;

fn offline(config: &EngineConfig) -> (AudioContext, Mixer, Scheduler) {
    let (ctx, mixer) = AudioContext::offline(config);
    ctx.resume().unwrap();
    (ctx, mixer, Scheduler::new(config))
}

fn render(mixer: &mut Mixer, frames: usize) {
    let mut buffer = vec![0.0f32; frames];
    mixer.render(&mut buffer);
}

#[test]
fn lookahead_window_invariants_hold_under_jitter() {
    let config = EngineConfig::default().seed(21);
    let mut jitter = fastrand::Rng::with_seed(99);

    for mode in MusicMode::ALL {
        let (mut ctx, mut mixer, mut scheduler) = offline(&config);
        scheduler.start(mode, &mut ctx);
        let step = scheduler.beat_seconds();

        for _ in 0..300 {
            // Caller wakes anywhere between 1 ms and 60 ms late.
            render(&mut mixer, jitter.usize(48..2_880));

            let before = scheduler.playback().clone();
            let scheduled = scheduler.fill(&mut ctx);
            let after = scheduler.playback();
            let now = ctx.now();

            assert_eq!(after.beat_index, before.beat_index + scheduled as u64);
            if scheduled > 0 {
                assert!(after.next_note_time > before.next_note_time);
            }
            assert!(after.next_note_time >= now);
            assert!(
                after.next_note_time - now < config.lookahead + step,
                "{mode}: next beat {} too far ahead of {now}",
                after.next_note_time
            );
        }
    }
}

#[test]
fn beats_are_evenly_spaced() {
    let config = EngineConfig::default().seed(2);
    let (mut ctx, mut mixer, mut scheduler) = offline(&config);
    scheduler.start(MusicMode::Normal, &mut ctx);
    let origin = scheduler.playback().next_note_time;

    for _ in 0..100 {
        render(&mut mixer, 1_200);
        scheduler.fill(&mut ctx);
    }

    let playback = scheduler.playback();
    let expected = origin + playback.beat_index as f64 * (60.0 / 110.0 / 4.0);
    assert!((playback.next_note_time - expected).abs() < 1e-9);
}

#[test]
fn restart_after_stop_matches_fresh_start() {
    let config = EngineConfig::default().seed(4);

    let (mut ctx, mut mixer, mut scheduler) = offline(&config);
    scheduler.start(MusicMode::Hurry, &mut ctx);
    render(&mut mixer, 24_000);
    scheduler.fill(&mut ctx);
    scheduler.stop(&mut ctx);
    scheduler.start(MusicMode::Hurry, &mut ctx);
    let restarted = scheduler.playback().clone();
    let restarted_at = ctx.now();

    let (mut fresh_ctx, _fresh_mixer, mut fresh) = offline(&config);
    fresh.start(MusicMode::Hurry, &mut fresh_ctx);
    let fresh_state = fresh.playback();

    assert_eq!(restarted.state, fresh_state.state);
    assert_eq!(restarted.tempo_bpm, fresh_state.tempo_bpm);
    assert_eq!(restarted.beat_index, 0);
    assert!(restarted.active_voices.is_empty());
    assert!(
        ((restarted.next_note_time - restarted_at) - (fresh_state.next_note_time - fresh_ctx.now()))
            .abs()
            < 1e-12
    );
}

#[test]
fn mode_switch_drains_voices_and_resets_beat() {
    let config = EngineConfig::default().seed(8);
    let (mut ctx, mut mixer, mut scheduler) = offline(&config);

    scheduler.start(MusicMode::Normal, &mut ctx);
    render(&mut mixer, 12_000);
    scheduler.fill(&mut ctx);
    assert!(scheduler.playback().beat_index > 0);

    scheduler.start(MusicMode::Hurry, &mut ctx);
    assert_eq!(scheduler.state(), SchedulerState::Scheduling(MusicMode::Hurry));
    assert_eq!(scheduler.playback().beat_index, 0);
    assert_eq!(scheduler.playback().tempo_bpm, 160.0);
    assert!(scheduler.playback().active_voices.is_empty());

    // The Normal voices are gone from the mixer once it drains the stops.
    render(&mut mixer, 1);
    assert_eq!(mixer.active_voices(), 0);
}

#[test]
fn stop_is_idempotent() {
    let config = EngineConfig::default();
    let (mut ctx, _mixer, mut scheduler) = offline(&config);
    scheduler.stop(&mut ctx);
    scheduler.stop(&mut ctx);
    assert_eq!(scheduler.state(), SchedulerState::Idle);
}

#[test]
fn suspended_clock_schedules_nothing_new() {
    let config = EngineConfig::default().seed(6);
    let (mut ctx, mut mixer, mut scheduler) = offline(&config);
    scheduler.start(MusicMode::Title, &mut ctx);
    render(&mut mixer, 9_600);
    scheduler.fill(&mut ctx);
    let beats = scheduler.playback().beat_index;

    ctx.suspend();
    render(&mut mixer, 48_000);
    assert_eq!(scheduler.fill(&mut ctx), 0);
    assert_eq!(scheduler.playback().beat_index, beats);
}
