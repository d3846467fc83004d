/// Narrows the options of a select prompt to those matching the typed text.
pub type Filter = Box<dyn Fn(&str, &[String]) -> Vec<String>>;

/// Keeps the options that contain `filter`, ignoring case.
///
/// An empty filter keeps every option.
pub fn default_filter(filter: &str, options: &[String]) -> Vec<String> {
    let needle = filter.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
