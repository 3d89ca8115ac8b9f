//! 分页获取器
//!
//! 把"带续页令牌的列举调用"展开成一个惰性的记录流：
//! 逐页顺序请求，页内保持远程返回的顺序，没有令牌即结束。
//! 任何远程错误都会作为流中的错误返回，调用方应立即中止。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{BasePath, PageRequest, ParameterRecord};
use crate::domain::repositories::ParameterStore;
use futures::stream::{self, Stream, TryStreamExt};

enum Cursor {
    First,
    Next(String),
    Done,
}

/// 获取一个基础路径下的所有参数
///
/// 返回的流只能消费一次，不可重启。
pub fn fetch_all<'a>(
    store: &'a dyn ParameterStore,
    base: &'a BasePath,
    recursive: bool,
) -> impl Stream<Item = Result<ParameterRecord>> + Send + 'a {
    stream::try_unfold(Cursor::First, move |cursor| async move {
        let next_token = match cursor {
            Cursor::First => None,
            Cursor::Next(token) => Some(token),
            Cursor::Done => return Ok(None),
        };

        let request = PageRequest {
            path: base.as_str().to_string(),
            recursive,
            next_token,
        };
        let page = store.list_page(&request).await?;

        tracing::debug!(
            path = %base,
            records = page.records.len(),
            more = page.continuation().is_some(),
            "已获取一页参数"
        );

        let cursor = match page.continuation() {
            Some(token) => Cursor::Next(token.to_string()),
            None => Cursor::Done,
        };
        let records = stream::iter(page.records.into_iter().map(Ok::<_, DomainError>));

        Ok::<_, DomainError>(Some((records, cursor)))
    })
    .try_flatten()
}
