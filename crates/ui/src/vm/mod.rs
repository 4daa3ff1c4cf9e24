mod dashboard_vm;
mod geometry;
mod lesson_vm;
mod quiz_vm;

pub use dashboard_vm::{SectionVm, TopicCardVm, map_dashboard_sections, map_topic_card};
pub use geometry::{
    FIGURE_VIEWBOX, GLYPH_SIZE, Line, PigpenGlyphVm, SemaphoreFigureVm, figure_for_pose,
    pigpen_glyph, scale_segments, semaphore_figure,
};
pub use lesson_vm::{
    CipherOutput, CipherTool, DEFAULT_SHIFT, PigpenCell, morse_preview, morse_reading, parse_shift,
    run_cipher, run_cipher_field, semaphore_figures,
};
pub use quiz_vm::{OptionTone, OptionVm, QuizIntent, QuizVm, result_message, start_quiz};
