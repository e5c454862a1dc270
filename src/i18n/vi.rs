//! Vietnamese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Nhà Tài Trợ");

    // Landing page
    m.insert(Key::HeroEyebrow, "Ủng hộ tác giả");
    m.insert(Key::HeroTitle, "Nuôi tui một bữa, nhận về cả bầu trời vui vẻ");
    m.insert(
        Key::HeroSubtitle,
        "Chọn một gói, chuyển khoản, rồi ngồi xem pháo giấy bay. Không hoàn tiền, chỉ hoàn cảm xúc.",
    );
    m.insert(Key::PackagesTitle, "Các gói tài trợ");
    m.insert(Key::PackagesSubtitle, "Gói nào cũng có hiệu ứng riêng, thử đi rồi biết");
    m.insert(Key::PickPackage, "Chọn gói này");
    m.insert(Key::Footer, "Làm bằng Rust, trà sữa và rất nhiều tình cảm");

    // Donation modal
    m.insert(Key::ModalEyebrow, "Xác nhận đầu tư");
    m.insert(Key::ModalTitle, "Cổng Thanh Toán Niềm Tin");
    m.insert(Key::SelectedPackage, "Gói đã chọn");
    m.insert(Key::BankLabel, "Ngân hàng");
    m.insert(Key::AccountLabel, "Số tài khoản (Chạm để copy)");
    m.insert(Key::HolderLabel, "Chủ tài khoản");
    m.insert(Key::MemoLabel, "Nội dung CK (Quan trọng!!)");
    m.insert(Key::MemoWarning, "Không được sai");
    m.insert(Key::Copy, "Copy");
    m.insert(Key::Copied, "Đã copy");
    m.insert(
        Key::TransferNote,
        "*Lưu ý: Sau khi chuyển khoản, vui lòng hít thở sâu và chờ đợi tín hiệu từ vũ trụ (hoặc check story của tui).",
    );
    m.insert(Key::ConfirmTransfer, "Đã chuyển khoản (Uy tín)");
    m.insert(Key::Close, "Đóng");

    // Success banner
    m.insert(Key::BannerTitle, "Đã nhận được tấm lòng!");
    m.insert(Key::BannerDismiss, "Tuyệt vời ông mặt trời");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
