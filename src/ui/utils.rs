/// Price formatting used by the label and the Y axis: two decimals, always.
pub(crate) fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
