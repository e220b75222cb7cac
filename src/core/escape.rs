use std::fmt::Display;

/// 將 `& < > " '` 轉成實體，其餘字元原樣保留。
///
/// 接受任何 `Display` 值，數字等會先轉成字串。
pub fn escape_html<T: Display + ?Sized>(value: &T) -> String {
    let text = value.to_string();
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }

    escaped
}
