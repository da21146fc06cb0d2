//! Small formatting helpers shared by the renderers.

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `50000` -> `$50,000`.
pub fn currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// `188000` -> `$188K`, rounded half up to the nearest thousand.
pub fn currency_thousands(amount: u64) -> String {
    format!("${}K", amount / 1000 + u64::from(amount % 1000 >= 500))
}

/// `1` -> `"1 campaign"`, `3` -> `"3 campaigns"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Lucide icon placeholder; the page script swaps these for SVGs.
pub fn icon(name: &str, class: &str) -> String {
    format!("<i data-lucide=\"{}\" class=\"{}\"></i>", name, class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Q4" & 'more'</b>"#),
            "&lt;b&gt;&quot;Q4&quot; &amp; &#39;more&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(0), "$0");
        assert_eq!(currency(999), "$999");
        assert_eq!(currency(50_000), "$50,000");
        assert_eq!(currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_currency_thousands() {
        assert_eq!(currency_thousands(188_000), "$188K");
        assert_eq!(currency_thousands(18_400), "$18K");
        assert_eq!(currency_thousands(18_500), "$19K");
        assert_eq!(currency_thousands(2_500), "$3K");
        assert_eq!(currency_thousands(499), "$0K");
        assert_eq!(currency_thousands(u64::MAX), "$18446744073709552K");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "campaign"), "0 campaigns");
        assert_eq!(plural(1, "campaign"), "1 campaign");
        assert_eq!(plural(5, "campaign"), "5 campaigns");
    }
}
