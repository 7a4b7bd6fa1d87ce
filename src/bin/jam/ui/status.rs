//! Status bar widget - shows mode, tempo, beat position, voices and audio stats

use conquest_audio::{engine::ContextState, runtime::PlaybackStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the status bar
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    status: Option<&PlaybackStatus>,
    last_action: &str,
    audio_stats: &AudioStats,
) {
    let block = Block::default().title(" jam ").borders(Borders::ALL);

    let Some(status) = status else {
        let paragraph = Paragraph::new(" audio unavailable")
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let (mode_str, mode_color) = match status.mode {
        Some(mode) => (format!("▶ {mode}"), Color::Green),
        None => ("⏸ idle".to_string(), Color::Yellow),
    };
    let clock_color = match status.context_state {
        ContextState::Running => Color::DarkGray,
        ContextState::Suspended => Color::Yellow,
        ContextState::Closed => Color::Red,
    };

    let line = Line::from(vec![
        Span::styled(format!(" {mode_str}  "), Style::default().fg(mode_color)),
        Span::styled(
            format!("BPM: {:.0}  ", status.tempo_bpm),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Beat {} | Step {:>2}/16  ", status.beat_index, status.bar16() + 1),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Voices: {}  ", status.active_voices),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:.2}s @ {:.1}kHz  ", status.now, status.sample_rate / 1000.0),
            Style::default().fg(clock_color),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}  ", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(format!("[{last_action}]"), Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
