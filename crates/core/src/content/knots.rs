/// A knot with its typical use and tying steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knot {
    pub name: &'static str,
    pub usage: &'static str,
    pub steps: &'static [&'static str],
}

pub static KNOTS: [Knot; 5] = [
    Knot {
        name: "Gút dẹt",
        usage: "Nối hai đầu dây cùng cỡ, buộc băng cứu thương.",
        steps: &[
            "Đặt đầu trái lên đầu phải và xoắn một lần.",
            "Đặt đầu phải lên đầu trái và xoắn lần nữa.",
            "Kéo chặt; hai vòng phải nằm dẹt song song.",
        ],
    },
    Knot {
        name: "Gút thợ dệt",
        usage: "Nối hai dây khác cỡ.",
        steps: &[
            "Gập dây lớn thành khuyết.",
            "Luồn dây nhỏ từ dưới lên qua khuyết.",
            "Quấn dây nhỏ vòng sau khuyết rồi chèn dưới chính nó.",
        ],
    },
    Knot {
        name: "Gút ghế đơn",
        usage: "Tạo vòng cố định không tuột, dùng cứu người.",
        steps: &[
            "Tạo một khoen nhỏ trên dây chính.",
            "Đưa đầu dây lên qua khoen.",
            "Vòng ra sau dây chính rồi xuống lại qua khoen.",
            "Giữ vòng và kéo dây chính để siết.",
        ],
    },
    Knot {
        name: "Gút chạy",
        usage: "Thòng lọng tự siết vào vật.",
        steps: &[
            "Tạo khoen ở đầu dây.",
            "Kéo một khúc dây chính qua khoen thành vòng.",
            "Kéo dây chính để vòng siết lại.",
        ],
    },
    Knot {
        name: "Gút sơn ca",
        usage: "Cột dây vào cọc hoặc khoen.",
        steps: &[
            "Gập đôi dây thành khuyết.",
            "Vòng khuyết qua cọc.",
            "Luồn hai đầu dây qua khuyết và kéo chặt.",
        ],
    },
];
