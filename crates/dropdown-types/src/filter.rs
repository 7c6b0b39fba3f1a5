use crate::option::NormalizedOption;

/// Options matching `term`, in their original order.
///
/// Matching is a case-insensitive substring test against the display label
/// or the option's search text. An empty term keeps everything.
pub fn filter_options<'a>(options: &'a [NormalizedOption], term: &str) -> Vec<&'a NormalizedOption> {
    if term.is_empty() {
        return options.iter().collect();
    }
    let needle = term.to_lowercase();
    options
        .iter()
        .filter(|option| {
            option.display_label().to_lowercase().contains(&needle)
                || option.search_text().to_lowercase().contains(&needle)
        })
        .collect()
}
