use colored::Colorize;
use northwind::error::Result;
use northwind::model::Customer;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 6] = ["ID", "Contact", "Company", "City", "Country", "Postal Code"];

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_customers(customers: &[Customer]) {
    if customers.is_empty() {
        println!("No customers found.");
        return;
    }

    let rows: Vec<[&str; 6]> = customers.iter().map(columns).collect();
    let widths = column_widths(&rows);

    println!("{}", pad_row(&HEADERS, &widths).bold());
    for row in &rows {
        println!("{}", customer_row(row, &widths));
    }
}

pub(super) fn print_customer(customer: &Customer) {
    let fields = columns(customer);
    let label_width = HEADERS.iter().map(|h| h.width()).max().unwrap_or(0);
    for (label, value) in HEADERS.iter().zip(fields.iter()) {
        println!(
            "{}{}  {}",
            label.bold(),
            " ".repeat(label_width - label.width()),
            value
        );
    }
}

fn columns(customer: &Customer) -> [&str; 6] {
    [
        customer.customer_id.as_str(),
        customer.contact_name.as_deref().unwrap_or("-"),
        customer.company_name.as_deref().unwrap_or("-"),
        customer.city.as_deref().unwrap_or("-"),
        customer.country.as_deref().unwrap_or("-"),
        customer.postal_code.as_deref().unwrap_or("-"),
    ]
}

fn column_widths(rows: &[[&str; 6]]) -> [usize; 6] {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn pad_cells(cells: &[&str; 6], widths: &[usize; 6]) -> Vec<String> {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width - cell.width())))
        .collect()
}

fn pad_row(cells: &[&str; 6], widths: &[usize; 6]) -> String {
    pad_cells(cells, widths).join("  ").trim_end().to_string()
}

/// A table row with only the id cell highlighted.
fn customer_row(cells: &[&str; 6], widths: &[usize; 6]) -> String {
    let padded = pad_cells(cells, widths);
    let rest = padded[1..].join("  ");
    format!("{}  {}", padded[0].yellow(), rest)
        .trim_end()
        .to_string()
}
