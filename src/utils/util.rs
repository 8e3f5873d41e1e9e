pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

/// Tax ids are plain decimal numbers; anything else is treated as a name.
pub fn is_tax_id(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_id_detection() {
        assert!(is_tax_id("562"));
        assert!(!is_tax_id("Escherichia coli"));
        assert!(!is_tax_id("562a"));
        assert!(!is_tax_id(""));
    }
}
