//! Money formatting

use crate::i18n::Lang;

/// Group digits by thousands: `28000` → `"28 000"`
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Amount with the currency suffix of `lang`: `"28 000 so'm"`
pub fn format_amount(amount: i64, lang: Lang) -> String {
    format!("{} {}", group_thousands(amount), lang.texts().currency)
}
