//! Ranked customer and product lists
//!
//! Ranking is a stable sort on (revenue descending, first-seen index
//! ascending): equal revenues keep ledger encounter order, making tie
//! behavior deterministic.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::app::models::Transaction;

/// One entry of the customer ranking
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRank {
    pub customer_id: String,
    /// Sum of this customer's transaction amounts
    pub total_spent: f64,
    /// Number of purchases
    pub purchase_count: usize,
    /// Mean amount per purchase
    pub avg_order_value: f64,
    /// Distinct product names bought, in first-purchase order
    pub products: Vec<String>,
}

/// One entry of the product rankings
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRank {
    pub product_name: String,
    /// Units sold across all transactions
    pub total_quantity: i64,
    /// Revenue across all transactions
    pub total_revenue: f64,
}

struct CustomerAccum {
    total_spent: f64,
    purchase_count: usize,
    products: Vec<String>,
    first_seen: usize,
}

struct ProductAccum {
    total_quantity: i64,
    total_revenue: f64,
    first_seen: usize,
}

/// Rank customers by total spend, descending; ties keep first-seen order.
pub fn top_customers(transactions: &[Transaction], n: usize) -> Vec<CustomerRank> {
    let mut by_customer: HashMap<&str, CustomerAccum> = HashMap::new();

    for (index, transaction) in transactions.iter().enumerate() {
        let accum = by_customer
            .entry(transaction.customer_id.as_str())
            .or_insert_with(|| CustomerAccum {
                total_spent: 0.0,
                purchase_count: 0,
                products: Vec::new(),
                first_seen: index,
            });
        accum.total_spent += transaction.amount();
        accum.purchase_count += 1;
        if !accum.products.contains(&transaction.product_name) {
            accum.products.push(transaction.product_name.clone());
        }
    }

    let mut entries: Vec<(String, CustomerAccum)> = by_customer
        .into_iter()
        .map(|(id, accum)| (id.to_string(), accum))
        .collect();
    entries.sort_by(|a, b| rank_order(a.1.total_spent, a.1.first_seen, b.1.total_spent, b.1.first_seen));
    entries.truncate(n);

    entries
        .into_iter()
        .map(|(customer_id, accum)| CustomerRank {
            customer_id,
            total_spent: accum.total_spent,
            avg_order_value: accum.total_spent / accum.purchase_count as f64,
            purchase_count: accum.purchase_count,
            products: accum.products,
        })
        .collect()
}

/// Rank products by total revenue, descending; ties keep first-seen order.
pub fn top_products(transactions: &[Transaction], n: usize) -> Vec<ProductRank> {
    let mut ranked = accumulate_products(transactions);
    ranked.sort_by(|a, b| rank_order(a.1.total_revenue, a.1.first_seen, b.1.total_revenue, b.1.first_seen));
    ranked.truncate(n);
    into_product_ranks(ranked)
}

/// Products whose unit count falls below the threshold, ascending by
/// quantity so the weakest sellers lead the list.
pub fn low_performing_products(transactions: &[Transaction], threshold: i64) -> Vec<ProductRank> {
    let mut low: Vec<(String, ProductAccum)> = accumulate_products(transactions)
        .into_iter()
        .filter(|(_, accum)| accum.total_quantity < threshold)
        .collect();
    low.sort_by(|a, b| {
        a.1.total_quantity
            .cmp(&b.1.total_quantity)
            .then(a.1.first_seen.cmp(&b.1.first_seen))
    });
    into_product_ranks(low)
}

fn accumulate_products(transactions: &[Transaction]) -> Vec<(String, ProductAccum)> {
    let mut by_product: HashMap<&str, ProductAccum> = HashMap::new();

    for (index, transaction) in transactions.iter().enumerate() {
        let accum = by_product
            .entry(transaction.product_name.as_str())
            .or_insert_with(|| ProductAccum {
                total_quantity: 0,
                total_revenue: 0.0,
                first_seen: index,
            });
        accum.total_quantity += transaction.quantity;
        accum.total_revenue += transaction.amount();
    }

    by_product
        .into_iter()
        .map(|(name, accum)| (name.to_string(), accum))
        .collect()
}

fn into_product_ranks(entries: Vec<(String, ProductAccum)>) -> Vec<ProductRank> {
    entries
        .into_iter()
        .map(|(product_name, accum)| ProductRank {
            product_name,
            total_quantity: accum.total_quantity,
            total_revenue: accum.total_revenue,
        })
        .collect()
}

/// Descending by value, then ascending by first-seen index.
fn rank_order(value_a: f64, seen_a: usize, value_b: f64, seen_b: usize) -> Ordering {
    value_b
        .partial_cmp(&value_a)
        .unwrap_or(Ordering::Equal)
        .then(seen_a.cmp(&seen_b))
}
