// List fields are persisted as joined text columns using the same
// separators the form normalizer splits on.

pub fn join_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(","))
    }
}

pub fn split_list(joined: Option<String>) -> Vec<String> {
    joined
        .map(|joined| joined.split(',').map(ToOwned::to_owned).collect())
        .unwrap_or_default()
}

pub fn join_lines(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join("\n"))
    }
}

pub fn split_lines(joined: Option<String>) -> Vec<String> {
    joined
        .map(|joined| joined.split('\n').map(ToOwned::to_owned).collect())
        .unwrap_or_default()
}
