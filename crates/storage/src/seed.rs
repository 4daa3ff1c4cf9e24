//! Built-in question bank.
//!
//! Morse questions are generated from the code table so the answers can never
//! drift from what the lesson teaches; everything else is hand written.

use gdpt_core::model::{OPTION_COUNT, Question, QuestionDraft, QuestionError, QuestionId, TopicKey};
use gdpt_core::transform::morse;

struct SeedQuestion {
    topic: TopicKey,
    question: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct: usize,
    explanation: Option<&'static str>,
}

const fn q(
    topic: TopicKey,
    question: &'static str,
    options: [&'static str; OPTION_COUNT],
    correct: usize,
    explanation: Option<&'static str>,
) -> SeedQuestion {
    SeedQuestion {
        topic,
        question,
        options,
        correct,
        explanation,
    }
}

const MORSE_LETTERS: [char; 10] = ['A', 'E', 'O', 'S', 'T', 'M', 'N', 'R', 'K', 'U'];

static HANDWRITTEN: &[SeedQuestion] = &[
    // Morse, beyond the per-letter drill
    q(
        TopicKey::Morse,
        "Tín hiệu cấp cứu quốc tế SOS được đánh như thế nào?",
        ["... --- ...", "--- ... ---", ".-. .-. .-.", "-.- -.- -.-"],
        0,
        Some("S là ba tích, O là ba te."),
    ),
    q(
        TopicKey::Morse,
        "Một tè dài bằng bao nhiêu tích?",
        ["2", "3", "4", "5"],
        1,
        Some("Dấu te dài gấp ba lần dấu tích."),
    ),
    // Semaphore
    q(
        TopicKey::Semaphore,
        "Hai tay giang ngang vai là chữ gì?",
        ["R", "U", "N", "D"],
        0,
        None,
    ),
    q(
        TopicKey::Semaphore,
        "Hai cờ cùng chéo lên cao thành hình chữ V là chữ gì?",
        ["N", "X", "U", "W"],
        2,
        None,
    ),
    q(
        TopicKey::Semaphore,
        "Hai cờ cùng chéo xuống thấp là chữ gì?",
        ["N", "U", "K", "G"],
        0,
        None,
    ),
    q(
        TopicKey::Semaphore,
        "Khi nghỉ, hai cờ được đặt ở đâu?",
        ["Bắt chéo phía trước, hạ thấp", "Giơ thẳng lên trời", "Giang ngang vai", "Cắm xuống đất"],
        0,
        None,
    ),
    q(
        TopicKey::Semaphore,
        "Chữ số trong Semaphore được đánh như thế nào?",
        [
            "Đánh dấu số rồi dùng chữ A–I và K",
            "Đánh số La Mã",
            "Lắc cờ theo số lần",
            "Không đánh được chữ số",
        ],
        0,
        Some("Sau dấu số, A là 1 … I là 9 và K là 0."),
    ),
    // Ciphers
    q(
        TopicKey::Cipher,
        "Dời mỗi chữ 1 vị trí (A→B), chữ GDPT trở thành?",
        ["HEQU", "FCOS", "GDPT", "TPDG"],
        0,
        None,
    ),
    q(
        TopicKey::Cipher,
        "Mật thư số 7-4-16-20 giải ra chữ gì?",
        ["GDPT", "HEQU", "GCPT", "FDPT"],
        0,
        Some("A=1, B=2, … Z=26."),
    ),
    q(
        TopicKey::Cipher,
        "Đọc ngược \"NEHS\" ta được?",
        ["SHEN", "SENH", "HENS", "NESH"],
        1,
        None,
    ),
    q(
        TopicKey::Cipher,
        "Trong Pigpen, chữ E có hình gì?",
        ["Ô vuông kín", "Chữ V", "Góc vuông có chấm", "Hình tam giác"],
        0,
        Some("E nằm ở ô giữa của lưới #."),
    ),
    q(
        TopicKey::Cipher,
        "Các chữ từ J đến R trong Pigpen khác A–I ở điểm nào?",
        ["Có thêm dấu chấm", "Xoay ngược", "Vẽ nét đôi", "Không khác gì"],
        0,
        None,
    ),
    // First aid
    q(
        TopicKey::FirstAid,
        "Việc đầu tiên khi gặp vết thương chảy máu nhiều là gì?",
        ["Ấn trực tiếp lên vết thương", "Rửa bằng cồn", "Bôi thuốc đỏ", "Cho uống nước"],
        0,
        Some("Cầm máu trước, băng bó sau."),
    ),
    q(
        TopicKey::FirstAid,
        "Bỏng nhẹ nên làm gì trước tiên?",
        ["Bôi kem đánh răng", "Xả nước mát ít nhất 10 phút", "Chọc vỡ bóng nước", "Chườm đá trực tiếp"],
        1,
        None,
    ),
    q(
        TopicKey::FirstAid,
        "Khi bị bong gân, nguyên tắc xử lý là?",
        ["Xoa bóp mạnh", "Nghỉ, chườm lạnh, băng ép, kê cao", "Chườm nóng ngay", "Tiếp tục vận động"],
        1,
        None,
    ),
    q(
        TopicKey::FirstAid,
        "Người bị ngất nên được đặt nằm thế nào?",
        ["Nằm sấp", "Ngồi dựa tường", "Nằm ngửa, kê cao chân", "Nằm nghiêng, kê cao đầu"],
        2,
        None,
    ),
    q(
        TopicKey::FirstAid,
        "Nẹp cố định xương gãy phải dài tối thiểu?",
        ["Bằng chỗ gãy", "Quá một khớp", "Quá hai khớp trên và dưới", "Dài bằng cả chi"],
        2,
        None,
    ),
    // Knots
    q(
        TopicKey::Knots,
        "Gút nào dùng để nối hai dây cùng cỡ?",
        ["Gút dẹt", "Gút thợ dệt", "Gút sơn ca", "Gút chạy"],
        0,
        None,
    ),
    q(
        TopicKey::Knots,
        "Gút nào dùng để nối hai dây khác cỡ?",
        ["Gút dẹt", "Gút thợ dệt", "Gút ghế đơn", "Gút chạy"],
        1,
        None,
    ),
    q(
        TopicKey::Knots,
        "Gút ghế đơn thường dùng để làm gì?",
        ["Nối dây", "Tạo vòng cố định cứu người", "Cột cọc lều", "Trang trí"],
        1,
        None,
    ),
    q(
        TopicKey::Knots,
        "Gút nào là thòng lọng tự siết?",
        ["Gút chạy", "Gút dẹt", "Gút sơn ca", "Gút thợ dệt"],
        0,
        None,
    ),
    q(
        TopicKey::Knots,
        "Gút sơn ca dùng để?",
        ["Cột dây vào cọc hoặc khoen", "Nối hai dây", "Rút ngắn dây", "Làm băng treo"],
        0,
        None,
    ),
    // Trail signs
    q(
        TopicKey::TrailSigns,
        "Dấu chữ X trên đường có nghĩa là gì?",
        ["Không đi lối này", "Chờ ở đây", "Nước uống được", "Đi nhanh lên"],
        0,
        None,
    ),
    q(
        TopicKey::TrailSigns,
        "Mũi tên có hai đầu nhọn nối tiếp nghĩa là?",
        ["Chia hai nhóm", "Đi nhanh lên", "Quay lại", "Đã về trại"],
        1,
        None,
    ),
    q(
        TopicKey::TrailSigns,
        "Đường lượn sóng chỉ điều gì?",
        ["Nguy hiểm", "Nước uống được", "Đường trơn", "Đã về trại"],
        1,
        None,
    ),
    q(
        TopicKey::TrailSigns,
        "Hình vuông trên đường có nghĩa là?",
        ["Chờ ở đây", "Trại ở đây", "Đi thẳng", "Có thư"],
        0,
        None,
    ),
    q(
        TopicKey::TrailSigns,
        "Mũi tên tách làm hai nhánh báo hiệu gì?",
        ["Chia làm hai nhóm", "Đường cụt", "Quay lại", "Đi chậm"],
        0,
        None,
    ),
    // Doctrine
    q(
        TopicKey::Doctrine,
        "Tam Bảo gồm những gì?",
        ["Phật, Pháp, Tăng", "Bi, Trí, Dũng", "Giới, Định, Tuệ", "Tham, Sân, Si"],
        0,
        None,
    ),
    q(
        TopicKey::Doctrine,
        "Châm ngôn của Gia Đình Phật Tử là?",
        ["Bi – Trí – Dũng", "Hòa – Kính – Nhẫn", "Tín – Hạnh – Nguyện", "Giới – Định – Tuệ"],
        0,
        None,
    ),
    q(
        TopicKey::Doctrine,
        "Huy hiệu Gia Đình Phật Tử là hình gì?",
        ["Hoa sen trắng", "Bánh xe pháp", "Cây bồ đề", "Ngọn đuốc"],
        0,
        None,
    ),
    q(
        TopicKey::Doctrine,
        "Tứ Diệu Đế gồm?",
        [
            "Khổ, Tập, Diệt, Đạo",
            "Sinh, Lão, Bệnh, Tử",
            "Từ, Bi, Hỷ, Xả",
            "Giới, Định, Tuệ, Giải thoát",
        ],
        0,
        None,
    ),
    q(
        TopicKey::Doctrine,
        "Giới thứ năm trong Năm giới là?",
        ["Không dùng chất say", "Không nói dối", "Không trộm cắp", "Không sát sanh"],
        0,
        None,
    ),
];

/// Every built-in question, with stable ids of the form `<topic>-NN`.
///
/// # Errors
///
/// Returns `QuestionError` if a seed entry is malformed.
pub fn seed_questions() -> Result<Vec<Question>, QuestionError> {
    let mut drafts = morse_drill();
    drafts.extend(HANDWRITTEN.iter().map(|seed| {
        let draft = QuestionDraft::new(seed.topic, seed.question, seed.options, seed.correct);
        match seed.explanation {
            Some(explanation) => draft.with_explanation(explanation),
            None => draft,
        }
    }));

    let mut per_topic = std::collections::HashMap::<TopicKey, usize>::new();
    drafts
        .into_iter()
        .map(|draft| {
            let topic = draft.topic.unwrap_or(TopicKey::Doctrine);
            let n = per_topic.entry(topic).or_insert(0);
            *n += 1;
            let id = QuestionId::new(format!("{topic}-{n:02}"));
            draft.validate(topic).map(|validated| validated.assign_id(id))
        })
        .collect()
}

// One "which code is letter X" question per drill letter. Distractors are the
// codes of the next table entries, and the correct slot rotates A–D.
fn morse_drill() -> Vec<QuestionDraft> {
    MORSE_LETTERS
        .iter()
        .enumerate()
        .filter_map(|(i, letter)| {
            let position = morse::TABLE.iter().position(|(ch, _)| ch == letter)?;
            let correct = i % OPTION_COUNT;
            let mut options = [""; OPTION_COUNT];
            let mut distractor = 1;
            for (slot, option) in options.iter_mut().enumerate() {
                *option = if slot == correct {
                    morse::TABLE[position].1
                } else {
                    let code = morse::TABLE[(position + distractor) % 26].1;
                    distractor += 1;
                    code
                };
            }
            Some(
                QuestionDraft::new(
                    TopicKey::Morse,
                    format!("Chữ {letter} trong Morse được đánh như thế nào?"),
                    options,
                    correct,
                )
                .with_explanation(format!("{letter} = {}", morse::TABLE[position].1)),
            )
        })
        .collect()
}
