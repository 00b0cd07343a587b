// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持日语（默认）和英语
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 不使用全局 set_locale,语言由调用方显式传入
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "ja";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["ja", "en"];

/// 规范化语言代码（不支持的语言回退到默认语言）
///
/// "en-US" / "EN" → "en"
pub fn normalize_locale(locale: &str) -> &'static str {
    let primary = locale
        .trim()
        .split(&['-', '_'][..])
        .next()
        .unwrap_or("")
        .to_lowercase();

    SUPPORTED_LOCALES
        .iter()
        .find(|l| **l == primary)
        .copied()
        .unwrap_or(DEFAULT_LOCALE)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use stock_alert::i18n::t;
/// let msg = t("ja", "alert.link_heading");
/// ```
pub fn t(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use stock_alert::i18n::t_with_args;
/// let msg = t_with_args("ja", "alert.survival_detail", &[("days", "3"), ("total", "10")]);
/// ```
pub fn t_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(&t(locale, key), args)
}

/// 单遍替换 %{name} 占位符（参数值中的占位符不会被再次替换）
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) => out.push_str(v),
                    None => out.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
