//! Canonical multilingual sample data.
//!
//! A three-store template covering English, Kurdish Sorani and Arabic
//! values for every translatable field, used for generating test
//! workbooks and exercising the import pipeline end to end.

use crate::model::{CellValue, SourceTable};

/// Column headers of the store import template: standard fields plus the
/// `_ku`/`_ar` translation columns.
pub const TEMPLATE_HEADERS: [&str; 35] = [
    "ownerFirstName",
    "ownerLastName",
    "storeName",
    "storeName_ku",
    "storeName_ar",
    "phone",
    "email",
    "logo",
    "CoverPhoto",
    "latitude",
    "longitude",
    "Address",
    "Address_ku",
    "Address_ar",
    "zone_id",
    "module_id",
    "MinimumOrderAmount",
    "Comission",
    "Tax",
    "DeliveryTime",
    "MinimumDeliveryFee",
    "PerKmDeliveryFee",
    "MaximumDeliveryFee",
    "ScheduleOrder",
    "Status",
    "SelfDeliverySystem",
    "Veg",
    "NonVeg",
    "FreeDelivery",
    "TakeAway",
    "Delivery",
    "ReviewsSection",
    "PosSystem",
    "storeOpen",
    "FeaturedStore",
];

fn t(s: &str) -> Option<CellValue> {
    Some(CellValue::text(s))
}

fn n(v: f64) -> Option<CellValue> {
    Some(CellValue::Number(v))
}

/// Build the sample store table: three stores with Kurdish and Arabic
/// translations for store name and address.
pub fn store_template() -> SourceTable {
    let headers = TEMPLATE_HEADERS.iter().map(|h| h.to_string()).collect();
    let mut table = SourceTable::with_name("Stores Multilingual", headers);

    table.add_row(vec![
        t("Ahmad"),
        t("Hassan"),
        t("Kurdistan Restaurant"),
        t("چێشتخانەی کوردستان"),
        t("مطعم كردستان"),
        t("+9647501234567"),
        t("ahmad.kurdistan@test.com"),
        t("def.png"),
        t("def.png"),
        n(36.1916),
        n(44.0092),
        t("Downtown Erbil"),
        t("ناوەندی هەولێر"),
        t("وسط أربيل"),
        n(1.0),
        n(2.0),
        n(5000.0),
        n(10.0),
        n(5.0),
        t("30-45 min"),
        n(2000.0),
        n(500.0),
        n(15000.0),
        t("yes"),
        t("active"),
        t("active"),
        t("yes"),
        t("yes"),
        t("no"),
        t("yes"),
        t("yes"),
        t("active"),
        t("active"),
        t("yes"),
        t("no"),
    ]);

    table.add_row(vec![
        t("Fatima"),
        t("Ali"),
        t("Hawler Food Corner"),
        t("گۆشەی خواردنی هەولێر"),
        t("ركن طعام أربيل"),
        t("+9647501234568"),
        t("fatima.hawler@test.com"),
        t("def.png"),
        t("def.png"),
        n(36.2),
        n(44.01),
        t("Sami Abdul Rahman Park"),
        t("پارکی سامی عەبدولڕەحمان"),
        t("حديقة سامي عبد الرحمن"),
        n(1.0),
        n(2.0),
        n(3000.0),
        n(8.0),
        n(3.0),
        t("20-35 min"),
        n(1500.0),
        n(400.0),
        n(12000.0),
        t("yes"),
        t("active"),
        t("inactive"),
        t("yes"),
        t("no"),
        t("yes"),
        t("yes"),
        t("yes"),
        t("active"),
        t("active"),
        t("yes"),
        t("yes"),
    ]);

    table.add_row(vec![
        t("Omar"),
        t("Rashid"),
        t("Slemani Delights"),
        t("تامەکانی سلێمانی"),
        t("مأكولات السليمانية"),
        t("+9647501234569"),
        t("omar.slemani@test.com"),
        t("def.png"),
        t("def.png"),
        n(35.5617),
        n(45.4329),
        t("Sulaymaniyah Center"),
        t("ناوەندی سلێمانی"),
        t("مركز السليمانية"),
        n(1.0),
        n(2.0),
        n(4000.0),
        n(12.0),
        n(6.0),
        t("25-40 min"),
        n(1800.0),
        n(600.0),
        n(14000.0),
        t("no"),
        t("active"),
        t("active"),
        t("no"),
        t("yes"),
        t("no"),
        t("yes"),
        t("yes"),
        t("active"),
        t("inactive"),
        t("yes"),
        t("no"),
    ]);

    table
}
