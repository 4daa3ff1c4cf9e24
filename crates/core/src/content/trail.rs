use crate::geometry::Segment;

/// A trail sign drawn on the ground, with its vector glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSign {
    pub name: &'static str,
    pub meaning: &'static str,
    pub glyph: &'static [Segment],
}

pub static TRAIL_SIGNS: [TrailSign; 7] = [
    TrailSign {
        name: "Đi theo hướng này",
        meaning: "Tiếp tục đi theo chiều mũi tên.",
        glyph: &[
            Segment::new(0.1, 0.5, 0.9, 0.5),
            Segment::new(0.9, 0.5, 0.7, 0.3),
            Segment::new(0.9, 0.5, 0.7, 0.7),
        ],
    },
    TrailSign {
        name: "Không đi lối này",
        meaning: "Đường cấm, quay lại tìm dấu khác.",
        glyph: &[
            Segment::new(0.15, 0.15, 0.85, 0.85),
            Segment::new(0.85, 0.15, 0.15, 0.85),
        ],
    },
    TrailSign {
        name: "Đi nhanh lên",
        meaning: "Đoàn phía trước đã đi xa, cần rảo bước.",
        glyph: &[
            Segment::new(0.1, 0.5, 0.9, 0.5),
            Segment::new(0.9, 0.5, 0.75, 0.35),
            Segment::new(0.9, 0.5, 0.75, 0.65),
            Segment::new(0.7, 0.5, 0.55, 0.35),
            Segment::new(0.7, 0.5, 0.55, 0.65),
        ],
    },
    TrailSign {
        name: "Chia làm hai nhóm",
        meaning: "Đoàn tách đôi theo hai nhánh.",
        glyph: &[
            Segment::new(0.1, 0.5, 0.5, 0.5),
            Segment::new(0.5, 0.5, 0.9, 0.2),
            Segment::new(0.5, 0.5, 0.9, 0.8),
            Segment::new(0.9, 0.2, 0.75, 0.2),
            Segment::new(0.9, 0.8, 0.75, 0.8),
        ],
    },
    TrailSign {
        name: "Nước uống được",
        meaning: "Nguồn nước gần đây dùng được.",
        glyph: &[
            Segment::new(0.1, 0.5, 0.3, 0.35),
            Segment::new(0.3, 0.35, 0.5, 0.5),
            Segment::new(0.5, 0.5, 0.7, 0.35),
            Segment::new(0.7, 0.35, 0.9, 0.5),
        ],
    },
    TrailSign {
        name: "Chờ ở đây",
        meaning: "Dừng lại đợi người đến đón.",
        glyph: &[
            Segment::new(0.2, 0.2, 0.8, 0.2),
            Segment::new(0.8, 0.2, 0.8, 0.8),
            Segment::new(0.8, 0.8, 0.2, 0.8),
            Segment::new(0.2, 0.8, 0.2, 0.2),
        ],
    },
    TrailSign {
        name: "Đã về trại",
        meaning: "Hết dấu, trại ở ngay gần.",
        glyph: &[
            Segment::new(0.2, 0.8, 0.5, 0.2),
            Segment::new(0.5, 0.2, 0.8, 0.8),
            Segment::new(0.8, 0.8, 0.2, 0.8),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_stay_on_unit_square() {
        for sign in &TRAIL_SIGNS {
            assert!(!sign.glyph.is_empty(), "{} has no glyph", sign.name);
            for segment in sign.glyph {
                for p in [segment.from, segment.to] {
                    assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
                }
            }
        }
    }
}
