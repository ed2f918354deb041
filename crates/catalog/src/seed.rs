//! Built-in storefront catalog data.

use yadak_core::ProductId;

use crate::product::Product;

fn part(id: &str, code: &str, name: &str, price: u64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        code: code.to_string(),
        name: name.to_string(),
        price,
        stock,
    }
}

/// The seeded spare-parts list, in listing order. Prices in Toman.
pub(crate) fn seed_products() -> Vec<Product> {
    vec![
        part("P-01", "SKT-101", "سوکت دوخانه پراید", 45_000, 12),
        part("P-02", "SKT-102", "سوکت سه‌خانه پراید", 52_000, 8),
        part("P-03", "SKT-103", "سوکت سوزنی پراید", 38_000, 20),
        part("P-04", "SKT-104", "سوکت چهارخانه پراید", 61_000, 5),
        part("P-05", "SKT-201", "سوکت دوخانه پژو 206", 48_000, 10),
        part("P-06", "SKT-202", "سوکت سه‌خانه پژو 206", 56_000, 7),
        part("P-07", "SKT-203", "سوکت سوزنی پژو 206", 41_000, 15),
        part("P-08", "SKT-204", "سوکت کوئل پژو 206", 74_000, 6),
        part("P-09", "SKT-301", "سوکت دوخانه پژو 405", 47_000, 9),
        part("P-10", "SKT-302", "سوکت سه‌خانه پژو 405", 55_000, 11),
        part("P-11", "SKT-303", "سوکت سوزنی پژو 405", 40_000, 18),
        part("P-12", "SKT-304", "سوکت سنسور اکسیژن پژو 405", 89_000, 4),
        part("P-13", "RLE-101", "رله فن پراید", 98_000, 14),
        part("P-14", "RLE-102", "رله دوبل پراید", 112_000, 6),
        part("P-15", "RLE-201", "رله فن پژو 206", 105_000, 9),
        part("P-16", "RLE-202", "رله راهنما پژو 206", 87_000, 12),
        part("P-17", "RLE-301", "رله فن پژو 405", 102_000, 8),
        part("P-18", "RLE-302", "رله شیشه بالابر پژو 405", 96_000, 0),
        part("P-19", "RST-101", "مقاومت فن پراید", 135_000, 10),
        part("P-20", "RST-201", "مقاومت فن پژو 206", 148_000, 5),
        part("P-21", "RST-301", "مقاومت فن پژو 405", 142_000, 7),
        part("P-22", "WRE-101", "سیم‌کشی چراغ جلو پراید", 210_000, 3),
        part("P-23", "WRE-201", "سیم‌کشی چراغ جلو پژو 206", 245_000, 2),
        part("P-24", "SNS-101", "سنسور دریچه گاز پراید", 185_000, 6),
        part("P-25", "SNS-201", "سنسور میل سوپاپ پژو 206", 230_000, 4),
        part("P-26", "SNS-301", "سنسور کیلومتر پژو 405", 165_000, 0),
        part("P-27", "FSH-101", "فیش سرشمع پراید", 72_000, 16),
    ]
}
