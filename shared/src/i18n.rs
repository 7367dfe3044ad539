//! Text resources
//!
//! Customer-facing labels live in one table per language; callers pick the
//! table with [`Lang::texts`] instead of branching on the language inline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, FoodItem, PaymentMethod};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Uz,
    Ru,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Uz, Lang::Ru];

    /// Parse a language tag (`uz`, `ru`, `ru-RU`, `uz_Latn`...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "uz" => Some(Lang::Uz),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Lang::Uz => "uz",
            Lang::Ru => "ru",
        }
    }

    pub fn texts(&self) -> &'static Texts {
        match self {
            Lang::Uz => &UZ,
            Lang::Ru => &RU,
        }
    }

    /// The other supported language
    pub fn other(&self) -> Lang {
        match self {
            Lang::Uz => Lang::Ru,
            Lang::Ru => Lang::Uz,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_tag(s).ok_or_else(|| format!("unsupported language tag '{s}'"))
    }
}

/// Label table for one language
#[derive(Debug)]
pub struct Texts {
    pub new_order: &'static str,
    pub phone: &'static str,
    pub customer: &'static str,
    pub address: &'static str,
    pub payment_method: &'static str,
    pub cash: &'static str,
    pub card: &'static str,
    pub total: &'static str,
    pub order_items: &'static str,
    pub time: &'static str,
    pub delivery_notice: &'static str,
    pub currency: &'static str,
    pub cart_empty: &'static str,
    pub phone_required: &'static str,
    pub order_placed: &'static str,
    pub order_failed: &'static str,
}

impl Texts {
    pub fn payment_method(&self, method: PaymentMethod) -> &'static str {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Card => self.card,
        }
    }
}

static UZ: Texts = Texts {
    new_order: "🍔 YANGI BUYURTMA!",
    phone: "📞 Telefon:",
    customer: "👤 Mijoz:",
    address: "📍 Manzil:",
    payment_method: "💰 To'lov usuli:",
    cash: "Naqd pul",
    card: "Karta orqali",
    total: "📊 Jami summa:",
    order_items: "🛒 Buyurtma mahsulotlari:",
    time: "⏰ Vaqt:",
    delivery_notice: "Buyurtma 30-35 daqiqa ichida yetkazib beriladi",
    currency: "so'm",
    cart_empty: "Savat bo'sh",
    phone_required: "Telefon raqamini kiriting",
    order_placed: "Buyurtma qabul qilindi!",
    order_failed: "Buyurtma berishda xatolik yuz berdi",
};

static RU: Texts = Texts {
    new_order: "🍔 НОВЫЙ ЗАКАЗ!",
    phone: "📞 Телефон:",
    customer: "👤 Клиент:",
    address: "📍 Адрес:",
    payment_method: "💰 Способ оплаты:",
    cash: "Наличные",
    card: "Картой",
    total: "📊 Итого:",
    order_items: "🛒 Состав заказа:",
    time: "⏰ Время:",
    delivery_notice: "Заказ будет доставлен в течение 30-35 минут",
    currency: "сум",
    cart_empty: "Корзина пуста",
    phone_required: "Введите номер телефона",
    order_placed: "Заказ принят!",
    order_failed: "Не удалось оформить заказ",
};

/// Anything carrying the three catalog names
pub trait Localized {
    fn name_default(&self) -> &str;
    fn name_uz(&self) -> &str;
    fn name_ru(&self) -> &str;

    /// Name in `lang`, falling back to the default name when blank
    fn name_in(&self, lang: Lang) -> &str {
        let name = match lang {
            Lang::Uz => self.name_uz(),
            Lang::Ru => self.name_ru(),
        };
        if name.trim().is_empty() {
            self.name_default()
        } else {
            name
        }
    }
}

macro_rules! impl_localized {
    ($($ty:ty),*) => {
        $(impl Localized for $ty {
            fn name_default(&self) -> &str {
                &self.name
            }
            fn name_uz(&self) -> &str {
                &self.name_uz
            }
            fn name_ru(&self) -> &str {
                &self.name_ru
            }
        })*
    };
}

impl_localized!(Category, FoodItem, crate::models::OrderLine);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags() {
        assert_eq!(Lang::from_tag("uz"), Some(Lang::Uz));
        assert_eq!(Lang::from_tag("RU"), Some(Lang::Ru));
        assert_eq!(Lang::from_tag("ru-RU"), Some(Lang::Ru));
        assert_eq!(Lang::from_tag("uz_Latn"), Some(Lang::Uz));
        assert_eq!(Lang::from_tag("en"), None);
        assert_eq!(Lang::from_tag(""), None);
        assert!("de".parse::<Lang>().is_err());
    }

    #[test]
    fn tag_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(serde_json::to_string(&Lang::Ru).unwrap(), "\"ru\"");
    }

    #[test]
    fn every_label_is_filled() {
        for lang in Lang::ALL {
            let t = lang.texts();
            for label in [
                t.new_order,
                t.phone,
                t.customer,
                t.address,
                t.payment_method,
                t.cash,
                t.card,
                t.total,
                t.order_items,
                t.time,
                t.delivery_notice,
                t.currency,
                t.cart_empty,
                t.phone_required,
                t.order_placed,
                t.order_failed,
            ] {
                assert!(!label.is_empty(), "{lang}: empty label");
            }
        }
    }

    #[test]
    fn payment_labels() {
        assert_eq!(Lang::Uz.texts().payment_method(PaymentMethod::Cash), "Naqd pul");
        assert_eq!(Lang::Ru.texts().payment_method(PaymentMethod::Card), "Картой");
    }

    #[test]
    fn localized_name_falls_back() {
        let category = Category {
            id: 1,
            name: "Drinks".into(),
            name_uz: "Ichimliklar".into(),
            name_ru: " ".into(),
            description: None,
            created_at: 0,
        };
        assert_eq!(category.name_in(Lang::Uz), "Ichimliklar");
        assert_eq!(category.name_in(Lang::Ru), "Drinks");
    }
}
