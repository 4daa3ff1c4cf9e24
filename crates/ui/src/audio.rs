//! Web Audio playback for Morse tones.
//!
//! The desktop webview owns the audio device, so the sink ships the whole
//! schedule to JavaScript in one `eval` and lets the browser clock drive it.

use dioxus::document::eval;
use gdpt_core::signal::ToneSchedule;
use services::{SignalError, ToneSink};

/// Envelope ramp at each tone edge, to avoid clicks.
const RAMP_SECS: f64 = 0.005;

/// `ToneSink` backed by an `OscillatorNode` in the webview.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebAudioSink;

impl ToneSink for WebAudioSink {
    fn start(&self, schedule: &ToneSchedule) -> Result<(), SignalError> {
        let _ = eval(&tone_script(schedule));
        Ok(())
    }

    fn stop(&self) {
        let _ = eval(STOP_SCRIPT);
    }
}

const STOP_SCRIPT: &str = r"(function() {
    const player = window.__gdptTone;
    if (player) { player.stop(); window.__gdptTone = null; }
})();";

/// Script that plays every tone segment of `schedule` on a fresh oscillator.
#[must_use]
pub fn tone_script(schedule: &ToneSchedule) -> String {
    let gates = schedule
        .tones()
        .map(|tone| {
            format!(
                "[{:.3}, {:.3}]",
                tone.offset.as_secs_f64(),
                (tone.offset + tone.duration).as_secs_f64()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let total = schedule.total_duration().as_secs_f64();
    let frequency = schedule.frequency_hz();

    format!(
        r"(function() {{
    if (window.__gdptTone) {{ window.__gdptTone.stop(); }}
    const Ctx = window.AudioContext || window.webkitAudioContext;
    if (!Ctx) return;
    const ctx = new Ctx();
    const osc = ctx.createOscillator();
    const gain = ctx.createGain();
    osc.type = 'sine';
    osc.frequency.value = {frequency};
    gain.gain.value = 0;
    osc.connect(gain).connect(ctx.destination);
    const t0 = ctx.currentTime;
    const gates = [{gates}];
    for (const [on, off] of gates) {{
        gain.gain.setValueAtTime(0, t0 + on);
        gain.gain.linearRampToValueAtTime(0.6, t0 + on + {RAMP_SECS});
        gain.gain.setValueAtTime(0.6, t0 + off - {RAMP_SECS});
        gain.gain.linearRampToValueAtTime(0, t0 + off);
    }}
    osc.start(t0);
    osc.stop(t0 + {total:.3});
    const player = {{
        stop() {{ try {{ osc.stop(); }} catch (_) {{}} ctx.close(); }},
    }};
    osc.onended = () => {{
        ctx.close();
        if (window.__gdptTone === player) window.__gdptTone = null;
    }};
    window.__gdptTone = player;
}})();"
    )
}
