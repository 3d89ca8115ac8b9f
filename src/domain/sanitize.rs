//! 值转义（最小化策略）
//!
//! 只做两件事：换行 → `\n`；`$'...'` 语法下单引号 → `\'`。
//! 不是完整的 shell 引用实现，不保证任意二进制值安全。

use crate::domain::models::QuoteStyle;
use std::borrow::Cow;

/// 转义值以便嵌入单行输出。对任何输入都不会失败。
#[must_use]
pub fn sanitize(value: &str, style: QuoteStyle) -> Cow<'_, str> {
    let needs_quote_escape = style == QuoteStyle::DollarQuoted && value.contains('\'');
    if !value.contains('\n') && !needs_quote_escape {
        return Cow::Borrowed(value);
    }

    let mut escaped = value.replace('\n', "\\n");
    if needs_quote_escape {
        escaped = escaped.replace('\'', "\\'");
    }
    Cow::Owned(escaped)
}
