/// A titled first-aid procedure with ordered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Procedure {
    pub title: &'static str,
    pub summary: &'static str,
    pub steps: &'static [&'static str],
}

pub static FIRST_AID_PROCEDURES: [Procedure; 5] = [
    Procedure {
        title: "Vết thương chảy máu",
        summary: "Cầm máu trước, băng bó sau.",
        steps: &[
            "Rửa tay hoặc mang găng trước khi chạm vào vết thương.",
            "Ấn trực tiếp lên vết thương bằng gạc sạch.",
            "Nâng phần bị thương cao hơn tim nếu không gãy xương.",
            "Băng ép vừa phải, không làm tím đầu chi.",
            "Đưa đến cơ sở y tế nếu máu vẫn không cầm.",
        ],
    },
    Procedure {
        title: "Bong gân",
        summary: "Nghỉ, chườm lạnh, băng ép, kê cao.",
        steps: &[
            "Cho nạn nhân nghỉ, không cử động khớp bị đau.",
            "Chườm lạnh 15–20 phút, lót khăn giữa đá và da.",
            "Băng ép bằng băng thun từ xa về gần.",
            "Kê cao chi bị thương.",
        ],
    },
    Procedure {
        title: "Bỏng nhẹ",
        summary: "Làm mát vết bỏng bằng nước sạch.",
        steps: &[
            "Tách nạn nhân khỏi nguồn nhiệt.",
            "Xả nước mát lên vết bỏng ít nhất 10 phút.",
            "Tháo nhẫn, đồng hồ trước khi vùng bỏng sưng.",
            "Che phủ bằng gạc sạch, không bôi kem đánh răng hay mỡ.",
        ],
    },
    Procedure {
        title: "Ngất xỉu",
        summary: "Đặt nằm, kê cao chân, nới lỏng quần áo.",
        steps: &[
            "Đặt nạn nhân nằm ngửa nơi thoáng mát.",
            "Kê chân cao khoảng 30 cm.",
            "Nới lỏng cổ áo, thắt lưng.",
            "Theo dõi hơi thở; gọi cấp cứu nếu không tỉnh sau 1 phút.",
        ],
    },
    Procedure {
        title: "Gãy xương",
        summary: "Bất động chi gãy bằng nẹp.",
        steps: &[
            "Không cố nắn lại xương.",
            "Đặt nẹp dài quá hai khớp trên và dưới chỗ gãy.",
            "Lót vải mềm giữa nẹp và da rồi cột cố định.",
            "Chuyển nạn nhân đến cơ sở y tế.",
        ],
    },
];
