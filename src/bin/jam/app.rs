//! jam - opens the engine and hands it to the UI loop

use color_eyre::eyre::{eyre, Result as EyreResult};
use conquest_audio::{EngineConfig, SoundFx};

use super::ui::UiApp;

/// Samples buffered between the mixer and the scope.
pub const SCOPE_CAPACITY: usize = 16_384;

pub fn run(config: EngineConfig) -> EyreResult<()> {
    let mut sfx = SoundFx::new(config);
    if !sfx.init() {
        return Err(eyre!("no audio output available"));
    }

    let scope = sfx
        .take_scope()
        .ok_or_else(|| eyre!("scope tap was not configured"))?;
    let sample_rate = sfx
        .status()
        .map(|status| status.sample_rate)
        .unwrap_or(48_000.0);

    let mut app = UiApp::new(sfx, scope, sample_rate);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
