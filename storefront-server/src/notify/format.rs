//! Order message formatting (Telegram HTML parse mode)

use chrono::{DateTime, FixedOffset, Utc};
use shared::i18n::{Lang, Localized};
use shared::models::{Order, OrderLine};
use shared::money::format_amount;

/// Render an order as a notification message
///
/// Layout: header, phone, optional customer name and address, payment
/// method, total, item list, time in `offset`, delivery footer. All
/// user-supplied text is HTML-escaped.
pub fn format_order_message(order: &Order, lang: Lang, offset: FixedOffset) -> String {
    let t = lang.texts();
    let mut out = String::new();

    out.push_str(&format!("<b>{}</b>\n\n", t.new_order));
    out.push_str(&format!(
        "<b>{}</b> <code>{}</code>\n",
        t.phone,
        escape_html(&order.customer_phone)
    ));
    if let Some(name) = &order.customer_name {
        out.push_str(&format!("<b>{}</b> {}\n", t.customer, escape_html(name)));
    }
    if let Some(address) = &order.customer_address {
        out.push_str(&format!("<b>{}</b> {}\n", t.address, escape_html(address)));
    }
    out.push_str(&format!(
        "<b>{}</b> {}\n",
        t.payment_method,
        t.payment_method(order.payment_method)
    ));
    out.push_str(&format!(
        "<b>{}</b> <b>{}</b>\n\n",
        t.total,
        format_amount(order.total_price, lang)
    ));

    out.push_str(&format!("<b>{}</b>\n", t.order_items));
    for line in &order.items {
        out.push_str(&format_line(line, lang));
        out.push('\n');
    }

    out.push_str(&format!(
        "\n<b>{}</b> {}\n\n",
        t.time,
        format_timestamp(order.created_at, offset)
    ));
    out.push_str(&format!("<i>{}</i>", t.delivery_notice));
    out
}

/// `• Hot-Dog (Хот-Дог) - 2 x 8 000 so'm = 16 000 so'm`
fn format_line(line: &OrderLine, lang: Lang) -> String {
    let primary = line.name_in(lang);
    let secondary = line.name_in(lang.other());
    let name = if primary == secondary {
        escape_html(primary)
    } else {
        format!("{} ({})", escape_html(primary), escape_html(secondary))
    };
    format!(
        "• {} - {} x {} = {}",
        name,
        line.quantity,
        format_amount(line.price, lang),
        format_amount(line.line_total(), lang)
    )
}

/// `dd.mm.yyyy, HH:MM` in the given offset
pub fn format_timestamp(millis: i64, offset: FixedOffset) -> String {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(Utc::now);
    utc.with_timezone(&offset).format("%d.%m.%Y, %H:%M").to_string()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PaymentMethod;

    fn tashkent() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600).unwrap()
    }

    fn line(id: i64, qty: i64, price: i64, uz: &str, ru: &str) -> OrderLine {
        OrderLine {
            id,
            order_id: 1,
            item_id: Some(id),
            quantity: qty,
            price,
            name: uz.into(),
            name_uz: uz.into(),
            name_ru: ru.into(),
            item: None,
        }
    }

    fn order() -> Order {
        Order {
            id: 1,
            total_price: 28000,
            payment_method: PaymentMethod::Cash,
            customer_name: None,
            customer_phone: "+998901234567".into(),
            customer_address: None,
            // 2024-03-01 10:30 UTC
            created_at: 1_709_289_000_000,
            items: vec![
                line(1, 2, 8000, "Hot-Dog", "Хот-Дог"),
                line(2, 1, 12000, "Kombo", "Комбо"),
            ],
        }
    }

    #[test]
    fn test_uzbek_message() {
        let text = format_order_message(&order(), Lang::Uz, tashkent());
        let expected = "<b>🍔 YANGI BUYURTMA!</b>\n\n\
            <b>📞 Telefon:</b> <code>+998901234567</code>\n\
            <b>💰 To'lov usuli:</b> Naqd pul\n\
            <b>📊 Jami summa:</b> <b>28 000 so'm</b>\n\n\
            <b>🛒 Buyurtma mahsulotlari:</b>\n\
            • Hot-Dog (Хот-Дог) - 2 x 8 000 so'm = 16 000 so'm\n\
            • Kombo (Комбо) - 1 x 12 000 so'm = 12 000 so'm\n\n\
            <b>⏰ Vaqt:</b> 01.03.2024, 15:30\n\n\
            <i>Buyurtma 30-35 daqiqa ichida yetkazib beriladi</i>";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_russian_labels_and_optional_fields() {
        let mut order = order();
        order.payment_method = PaymentMethod::Card;
        order.customer_name = Some("Aziz".into());
        order.customer_address = Some("Chilonzor 5".into());

        let text = format_order_message(&order, Lang::Ru, tashkent());
        assert!(text.starts_with("<b>🍔 НОВЫЙ ЗАКАЗ!</b>"));
        assert!(text.contains("<b>👤 Клиент:</b> Aziz\n<b>📍 Адрес:</b> Chilonzor 5\n"));
        assert!(text.contains("<b>💰 Способ оплаты:</b> Картой"));
        assert!(text.contains("• Хот-Дог (Hot-Dog) - 2 x 8 000 сум = 16 000 сум"));
        assert!(text.ends_with("<i>Заказ будет доставлен в течение 30-35 минут</i>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut order = order();
        order.customer_name = Some("<b>Bob</b> & co".into());
        order.items = vec![line(1, 1, 28000, "Tom & Jerry", "Tom & Jerry")];

        let text = format_order_message(&order, Lang::Uz, tashkent());
        assert!(text.contains("&lt;b&gt;Bob&lt;/b&gt; &amp; co"));
        // identical names are shown once
        assert!(text.contains("• Tom &amp; Jerry - 1 x"));
    }

    #[test]
    fn test_timestamp_offset() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_timestamp(1_709_289_000_000, utc), "01.03.2024, 10:30");
        // crosses midnight in +05:00
        assert_eq!(format_timestamp(1_709_319_600_000, tashkent()), "02.03.2024, 00:00");
    }
}
