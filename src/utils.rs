/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

/// Collect the distinct items of an iterator, keeping the order in
/// which each item was first seen.
pub fn first_seen<'a, I>(items: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = hashbrown::HashSet::new();
    let mut ordered = Vec::new();
    for item in items {
        if seen.insert(item) {
            ordered.push(item);
        }
    }
    ordered
}
