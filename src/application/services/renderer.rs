//! 输出渲染
//!
//! 文本格式（每行以换行结尾）：
//! - exports: `export NAME=$'VALUE'`
//! - dotenv:  `NAME="VALUE"`
//! - json:    `{"NAME": "VALUE", ...}`
//!
//! 进程环境模式不产生文本，而是写入传入的 [`EnvTable`]。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{EnvironmentMapping, OutputFormat, RenderOrder};
use crate::domain::repositories::EnvTable;
use indexmap::IndexMap;

/// 渲染为文本
pub fn render(
    mapping: &EnvironmentMapping,
    format: OutputFormat,
    order: RenderOrder,
) -> Result<String> {
    let entries = match order {
        RenderOrder::Insertion => mapping.iter().collect::<Vec<_>>(),
        RenderOrder::Sorted => mapping.sorted(),
    };

    match format {
        OutputFormat::Exports => Ok(render_lines(&entries, |name, value| {
            format!("export {name}=$'{value}'")
        })),
        OutputFormat::Dotenv => Ok(render_lines(&entries, |name, value| {
            format!("{name}=\"{value}\"")
        })),
        OutputFormat::Json => {
            let ordered: IndexMap<&str, &str> = entries.into_iter().collect();
            let mut json = serde_json::to_string_pretty(&ordered)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::ProcessEnv => Err(DomainError::InvalidArgument(
            "process-env 模式没有文本输出".to_string(),
        )),
    }
}

fn render_lines(entries: &[(&str, &str)], line: impl Fn(&str, &str) -> String) -> String {
    let mut output = String::new();
    for (name, value) in entries {
        output.push_str(&line(name, value));
        output.push('\n');
    }
    output
}

/// 写入环境变量表，静默覆盖同名变量；返回写入数量
pub fn apply(mapping: &EnvironmentMapping, table: &mut dyn EnvTable) -> Result<usize> {
    for (name, value) in mapping.iter() {
        table.set(name, value)?;
    }
    Ok(mapping.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryEnvTable;

    fn mapping(entries: &[(&str, &str)]) -> EnvironmentMapping {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_exports_line() {
        let output = render(
            &mapping(&[("MYSQL_PASSWORD", "passwerd")]),
            OutputFormat::Exports,
            RenderOrder::Insertion,
        )
        .unwrap();
        assert_eq!(output, "export MYSQL_PASSWORD=$'passwerd'\n");
    }

    #[test]
    fn test_exports_escaped_newline() {
        let output = render(
            &mapping(&[("CERT", "line1\\nline2")]),
            OutputFormat::Exports,
            RenderOrder::Insertion,
        )
        .unwrap();
        assert_eq!(output, "export CERT=$'line1\\nline2'\n");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_dotenv_line() {
        let output = render(
            &mapping(&[("a", "1"), ("b", "two words")]),
            OutputFormat::Dotenv,
            RenderOrder::Insertion,
        )
        .unwrap();
        assert_eq!(output, "a=\"1\"\nb=\"two words\"\n");
    }

    #[test]
    fn test_sorted_order() {
        let entries = mapping(&[("ZED", "1"), ("ALPHA", "2")]);
        let insertion = render(&entries, OutputFormat::Dotenv, RenderOrder::Insertion).unwrap();
        let sorted = render(&entries, OutputFormat::Dotenv, RenderOrder::Sorted).unwrap();
        assert_eq!(insertion, "ZED=\"1\"\nALPHA=\"2\"\n");
        assert_eq!(sorted, "ALPHA=\"2\"\nZED=\"1\"\n");
    }

    #[test]
    fn test_json_keeps_order() {
        let output = render(
            &mapping(&[("ZED", "1"), ("ALPHA", "2")]),
            OutputFormat::Json,
            RenderOrder::Insertion,
        )
        .unwrap();
        let zed = output.find("ZED").unwrap();
        let alpha = output.find("ALPHA").unwrap();
        assert!(zed < alpha);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["ALPHA"], "2");
    }

    #[test]
    fn test_empty_mapping_renders_nothing() {
        let output = render(
            &EnvironmentMapping::new(),
            OutputFormat::Exports,
            RenderOrder::Sorted,
        )
        .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_process_env_has_no_text() {
        let result = render(
            &EnvironmentMapping::new(),
            OutputFormat::ProcessEnv,
            RenderOrder::Insertion,
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_apply_overwrites_existing() {
        let mut table = MemoryEnvTable::default()
            .with_var("DB_HOST", "old")
            .with_var("HOME", "/root");

        let written = apply(&mapping(&[("DB_HOST", "new"), ("API_KEY", "k")]), &mut table).unwrap();

        assert_eq!(written, 2);
        assert_eq!(table.get("DB_HOST").as_deref(), Some("new"));
        assert_eq!(table.get("API_KEY").as_deref(), Some("k"));
        assert_eq!(table.get("HOME").as_deref(), Some("/root"));
    }
}
