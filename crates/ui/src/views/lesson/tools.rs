use dioxus::prelude::*;
use tracing::debug;

use services::SignalError;

use super::graphics::{PigpenGlyphSvg, SemaphoreFigure};
use crate::context::AppContext;
use crate::vm::{
    CipherOutput, CipherTool, DEFAULT_SHIFT, PigpenCell, morse_preview, morse_reading,
    run_cipher_field, semaphore_figures,
};

fn signal_message(err: &SignalError) -> &'static str {
    match err {
        SignalError::Busy => "Tín hiệu đang phát, chờ một chút.",
        SignalError::EmptySequence => "Chưa có gì để phát.",
        _ => "Không phát được âm thanh.",
    }
}

//
// ─── MORSE ─────────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn MorseTool() -> Element {
    let ctx = use_context::<AppContext>();
    let player = ctx.signal_player();
    let mut input = use_signal(|| "SOS".to_string());
    let mut symbols = use_signal(|| "--. -.. .--. -".to_string());
    let mut status = use_signal(|| None::<&'static str>);

    let code = morse_preview(&input.read());
    let reading = morse_reading(&symbols.read());
    let code_for_play = code.clone();
    let player_for_stop = player.clone();

    rsx! {
        div { class: "tool morse-tool",
            label { r#for: "morse-input", "Nhập chữ" }
            input {
                id: "morse-input",
                value: "{input}",
                oninput: move |evt| input.set(evt.value()),
            }
            p { class: "tool-output", id: "morse-output", "{code}" }
            div { class: "tool-actions",
                button {
                    class: "btn btn-primary",
                    id: "morse-play",
                    r#type: "button",
                    onclick: move |_| match player.play(&code_for_play) {
                        Ok(_) => status.set(None),
                        Err(err) => {
                            debug!(error = %err, "morse playback rejected");
                            status.set(Some(signal_message(&err)));
                        }
                    },
                    "Phát âm"
                }
                button {
                    class: "btn btn-secondary",
                    id: "morse-stop",
                    r#type: "button",
                    onclick: move |_| {
                        player_for_stop.cancel();
                        status.set(None);
                    },
                    "Dừng"
                }
            }
            if let Some(message) = status() {
                p { class: "tool-status", "{message}" }
            }
            label { r#for: "morse-decode-input", "Nhập mã (cách nhau bằng dấu cách, / giữa hai từ)" }
            input {
                id: "morse-decode-input",
                value: "{symbols}",
                oninput: move |evt| symbols.set(evt.value()),
            }
            p { class: "tool-output", id: "morse-decode-output", "{reading}" }
        }
    }
}

//
// ─── SEMAPHORE ─────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn SemaphoreTool() -> Element {
    let mut input = use_signal(|| "GDPT".to_string());
    let figures = semaphore_figures(&input.read());

    rsx! {
        div { class: "tool semaphore-tool",
            label { r#for: "semaphore-input", "Nhập chữ" }
            input {
                id: "semaphore-input",
                value: "{input}",
                oninput: move |evt| input.set(evt.value()),
            }
            div { class: "figure-row",
                for (i, figure) in figures.into_iter().enumerate() {
                    SemaphoreFigure { key: "{i}", figure }
                }
            }
        }
    }
}

//
// ─── CIPHER ────────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn CipherWorkbench() -> Element {
    let mut tool = use_signal(|| CipherTool::Shift);
    let mut input = use_signal(|| "Gia Dinh Phat Tu".to_string());
    let mut amount = use_signal(|| DEFAULT_SHIFT.to_string());

    let current = tool();
    let output = run_cipher_field(current, &input.read(), &amount.read());

    rsx! {
        div { class: "tool cipher-tool",
            div { class: "cipher-tabs", role: "tablist",
                for option in CipherTool::ALL {
                    button {
                        key: "{option.key()}",
                        id: "cipher-{option.key()}",
                        class: if option == current { "cipher-tab cipher-tab--active" } else { "cipher-tab" },
                        r#type: "button",
                        onclick: move |_| tool.set(option),
                        "{option.label()}"
                    }
                }
            }
            label { r#for: "cipher-input", "Nội dung" }
            textarea {
                id: "cipher-input",
                value: "{input}",
                oninput: move |evt| input.set(evt.value()),
            }
            if current.uses_shift() {
                label { r#for: "cipher-shift", "Số bước dời" }
                input {
                    id: "cipher-shift",
                    r#type: "number",
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }
            }
            match output {
                Err(err) => rsx! {
                    p { class: "tool-status", id: "cipher-error", "Số bước dời phải là số nguyên ({err})." }
                },
                Ok(CipherOutput::Text(text)) => rsx! {
                    p { class: "tool-output", id: "cipher-output", "{text}" }
                },
                Ok(CipherOutput::Pigpen(cells)) => rsx! {
                    div { class: "pigpen-row", id: "cipher-output",
                        for (i, cell) in cells.into_iter().enumerate() {
                            match cell {
                                PigpenCell::Glyph(glyph) => rsx! {
                                    PigpenGlyphSvg { key: "{i}", glyph }
                                },
                                PigpenCell::Gap(ch) => rsx! {
                                    span { key: "{i}", class: "pigpen-gap", "{ch}" }
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}
