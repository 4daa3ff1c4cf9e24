/// A heading with its explanatory paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctrineSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static DOCTRINE_SECTIONS: [DoctrineSection; 4] = [
    DoctrineSection {
        heading: "Tam Bảo",
        paragraphs: &[
            "Phật, Pháp, Tăng là ba ngôi báu mà người Phật tử quy y.",
            "Phật là bậc giác ngộ; Pháp là lời dạy; Tăng là đoàn thể tu học.",
        ],
    },
    DoctrineSection {
        heading: "Năm giới",
        paragraphs: &[
            "Không sát sanh, không trộm cắp, không tà dâm, không nói dối, không dùng chất say.",
        ],
    },
    DoctrineSection {
        heading: "Tứ Diệu Đế",
        paragraphs: &[
            "Khổ đế, Tập đế, Diệt đế, Đạo đế.",
            "Bát Chánh Đạo là con đường dẫn đến sự chấm dứt khổ đau.",
        ],
    },
    DoctrineSection {
        heading: "Lý tưởng Gia Đình Phật Tử",
        paragraphs: &[
            "Huy hiệu hoa sen trắng tượng trưng cho sự thanh tịnh.",
            "Châm ngôn Bi – Trí – Dũng hướng đoàn sinh đến tình thương, hiểu biết và can đảm.",
        ],
    },
];
