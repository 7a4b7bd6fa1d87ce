//! TUI module for jam
//!
//! Live view of the music engine plus keyboard triggers for every mode and
//! effect the game can fire.

mod spectrum;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use conquest_audio::{dsp::Waveform, runtime::PlaybackStatus, MusicMode, SoundFx};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;

const HELP: &str = concat!(
    " [1] Title [2] Normal [3] Hurry [S] Stop",
    "  [K]ey [N]ext [C]onquer [W]in [O]ver [T]one  [Q] Quit",
);

/// UI application state
pub struct UiApp {
    sfx: SoundFx,
    /// Ring buffer receiver for the mixer's output
    audio_rx: Consumer<f32>,
    /// Audio sample buffer for visualization
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    /// Latest snapshot of the scheduler
    status: Option<PlaybackStatus>,
    /// Last thing the user triggered
    last_action: &'static str,
    should_quit: bool,
}

impl UiApp {
    pub fn new(sfx: SoundFx, audio_rx: Consumer<f32>, sample_rate: f32) -> Self {
        Self {
            sfx,
            audio_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            status: None,
            last_action: "ready",
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.status = self.sfx.status();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.sfx.stop_bgm();
        Ok(())
    }

    /// Poll for new audio samples from ring buffer
    fn poll_audio(&mut self) {
        let mut received = false;
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
            received = true;
        }

        if received {
            // Keep only the last VIS_BUFFER_SIZE samples
            if self.audio_buffer.len() > VIS_BUFFER_SIZE {
                let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
                self.audio_buffer.drain(0..excess);
            }
            self.spectrum.update(&self.audio_buffer);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let KeyCode::Char(c) = key else {
            if key == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        };

        self.last_action = match c.to_ascii_lowercase() {
            '1' => {
                self.sfx.play_bgm(MusicMode::Title);
                "title"
            }
            '2' => {
                self.sfx.play_bgm(MusicMode::Normal);
                "normal"
            }
            '3' => {
                self.sfx.play_bgm(MusicMode::Hurry);
                "hurry"
            }
            's' => {
                self.sfx.stop_bgm();
                "stop"
            }
            'k' => {
                self.sfx.play_key();
                "key"
            }
            'n' => {
                self.sfx.play_next();
                "next"
            }
            'c' => {
                self.sfx.play_conquer();
                "conquer"
            }
            'w' => {
                self.sfx.play_win();
                "win"
            }
            'o' => {
                self.sfx.play_over();
                "over"
            }
            't' => {
                self.sfx.play_tone(440.0, Waveform::Sine, 0.5);
                "tone"
            }
            'q' => {
                self.should_quit = true;
                "quit"
            }
            _ => return,
        };
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: status, waveform, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Waveform
                Constraint::Min(8),    // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(frame, chunks[0], self.status.as_ref(), self.last_action, &stats);
        render_waveform(frame, chunks[1], &self.audio_buffer);
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
