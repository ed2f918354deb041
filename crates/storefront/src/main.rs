use anyhow::{Context, Result};
use tracing::info;

use yadak_cart::SharedCart;
use yadak_catalog::{Catalog, Product};
use yadak_core::{ProductId, SystemClock};
use yadak_invoicing::{TimestampNumberSource, create_invoice};
use yadak_rendering::{format_toman, render_invoice, to_persian_digits};

/// Scripted storefront session: browse the catalog, work a cart through its
/// commands (including refused ones), then check out into a printed invoice.
fn main() -> Result<()> {
    yadak_observability::init();

    let catalog = Catalog::seeded();
    info!(
        products = catalog.len(),
        pages = catalog.page_count(),
        "catalog loaded"
    );

    println!("=== صفحه اول کاتالوگ ===");
    for product in catalog.page(0) {
        print_listing(product);
    }

    let session = SharedCart::new();
    let socket = lookup(&catalog, "P-01")?;
    let relay = lookup(&catalog, "P-13")?;
    let sold_out = lookup(&catalog, "P-18")?;

    session.add_item(socket, 2);
    session.add_item(relay, 1);
    session.add_item(socket, 1);

    // The stock ceiling holds quietly: state stays as it was, no error.
    let outcome = session.add_item(socket, socket.stock);
    info!(?outcome, product_id = %socket.id, "over-ceiling add refused");
    let outcome = session.add_item(sold_out, 1);
    info!(?outcome, product_id = %sold_out.id, "sold-out add refused");

    session.update_quantity(&relay.id, 2);

    println!();
    println!("=== سبد خرید ===");
    let cart = session.snapshot();
    for item in cart.items() {
        println!(
            "{} | {} | تعداد: {} | {}",
            item.product.code,
            item.product.name,
            to_persian_digits(&item.quantity.to_string()),
            format_toman(item.line_total()),
        );
    }
    println!(
        "جمع اقلام: {}",
        to_persian_digits(&cart.total_items().to_string())
    );
    println!("جمع سبد: {}", format_toman(cart.total_price()));

    let numbers = TimestampNumberSource::new(SystemClock);
    let invoice = create_invoice(&cart, &numbers, &SystemClock)?;
    info!(
        number = %invoice.number(),
        grand_total = invoice.grand_total(),
        "invoice issued"
    );

    println!();
    println!("=== فاکتور ===");
    print!("{}", render_invoice(&invoice));

    session.clear();
    info!("session cleared after checkout");

    Ok(())
}

fn lookup<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Product> {
    let id = ProductId::new(id);
    catalog
        .require(&id)
        .with_context(|| format!("product {id} missing from seeded catalog"))
}

fn print_listing(product: &Product) {
    if product.in_stock() {
        println!(
            "{} | {} | {} | موجودی: {}",
            product.code,
            product.name,
            format_toman(product.price),
            to_persian_digits(&product.stock.to_string()),
        );
    } else {
        println!(
            "{} | {} | {} | ناموجود",
            product.code,
            product.name,
            format_toman(product.price),
        );
    }
}
