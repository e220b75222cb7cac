use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// 方便交給日誌收集系統
    Json,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "project_cards=debug,info"
    } else {
        "project_cards=info"
    }
}

/// 日誌寫到 stderr，stdout 留給結果摘要。`RUST_LOG` 優先於預設值。
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_for_this_crate() {
        assert_eq!(default_directive(false), "project_cards=info");
        assert!(default_directive(true).starts_with("project_cards=debug"));
    }
}
