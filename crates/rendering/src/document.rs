//! Printable invoice document.

use yadak_invoicing::Invoice;

use crate::format::{format_date, format_toman, to_persian_digits};

/// Render `invoice` as a plain-text bill.
///
/// Same shape as the storefront's printable invoice: a title, the invoice
/// number and date, a header row, one row per line in cart order, and a
/// closing grand-total row. The invoice number stays in its original ASCII
/// form so it can be quoted back verbatim.
pub fn render_invoice(invoice: &Invoice) -> String {
    let mut doc = String::new();

    doc.push_str("فاکتور فروش\n");
    doc.push_str(&format!("شماره فاکتور: {}\n", invoice.number()));
    doc.push_str(&format!("تاریخ: {}\n", format_date(invoice.issued_at())));
    doc.push('\n');

    doc.push_str("کد محصول | نام محصول | قیمت واحد | تعداد | جمع\n");
    for line in invoice.lines() {
        doc.push_str(&format!(
            "{} | {} | {} | {} | {}\n",
            line.code,
            line.name,
            format_toman(line.unit_price),
            to_persian_digits(&line.quantity.to_string()),
            format_toman(line.line_total),
        ));
    }

    doc.push('\n');
    doc.push_str(&format!("جمع کل: {}\n", format_toman(invoice.grand_total())));

    doc
}
