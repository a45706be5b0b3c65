use console::style;
use serde::Serialize;
use shelfapp::api::{CmdMessage, MessageLevel};
use shelfapp::model::{Catalog, Product};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", style(&message.content).dim()),
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Warning => println!("{}", style(&message.content).yellow()),
            MessageLevel::Error => println!("{}", style(&message.content).red()),
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No products found.");
        return;
    }
    for (i, (category, products)) in catalog.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_category(category, products);
    }
}

pub(super) fn print_category(category: &str, products: &[Product]) {
    println!(
        "{} {}",
        style(category).bold(),
        style(format!("({})", products.len())).dim()
    );
    if products.is_empty() {
        println!("{}", style("  no products").dim());
        return;
    }
    for product in products {
        println!("{}", format_product_line(product));
    }
}

/// One product as a single plain-text line.
pub(super) fn format_product_line(product: &Product) -> String {
    let mut line = format!("  {:>3}. {}", product.id, product.name);

    if product.sale_price > 0.0 {
        line.push_str(&format!("  {}", format_price(product.sale_price)));
        if product.original_price > product.sale_price {
            line.push_str(&format!(" (was {})", format_price(product.original_price)));
        }
    }
    if product.discount != 0 {
        line.push_str(&format!("  -{}%", product.discount));
    }
    if product.rating > 0.0 {
        line.push_str(&format!("  ★{:.1} ({})", product.rating, product.reviews));
    }
    if !product.badge.is_empty() {
        line.push_str(&format!("  [{}]", product.badge));
    }
    line.push_str(&format!("  → {}", product.affiliate_link));
    line
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
