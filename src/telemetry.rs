use std::io;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{
    fmt::{format::FmtSpan, time::UtcTime},
    prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

const LOG_LEVEL: &str = "RUSTY_PUGS_LOG_LEVEL";
const LOG_FORMAT: &str = "RUSTY_PUGS_LOG_FORMAT";

pub(crate) fn init() -> Result<()> {
    let fmt_env_filter = env_filter_merge_from_environment("info", LOG_LEVEL)?;
    let json = matches!(std::env::var(LOG_FORMAT).as_deref(), Ok("json"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);
    let fmt_layer = if json {
        fmt_layer
            .json()
            .with_current_span(true)
            .with_filter(fmt_env_filter)
            .boxed()
    } else {
        fmt_layer.with_filter(fmt_env_filter).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .context("Failed to set global default tracing subscriber")?;

    Ok(())
}

fn env_filter_merge_from_environment(
    default_directives: &'static str,
    env_var: &'static str,
) -> Result<EnvFilter> {
    let env_value = std::env::var(env_var).ok();
    merge_directives(default_directives, env_value.as_deref())
}

/// Builds a filter from `default_directives` with the comma separated
/// `overrides` added on top. Directives that fail to parse are skipped.
fn merge_directives(default_directives: &'static str, overrides: Option<&str>) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder()
        .parse(default_directives)
        .with_context(|| anyhow!("Default directives were invalid: {default_directives}"))?;

    if let Some(overrides) = overrides {
        for env_directive in overrides.split(',').filter(|d| !d.trim().is_empty()) {
            match env_directive.parse() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => eprintln!("WARN ignoring log directive: {env_directive:?}: {err}"),
            }
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_are_added_to_defaults() {
        let filter = merge_directives("info", Some("rusty_pugs=debug,tide=warn")).unwrap();
        let rendered = filter.to_string();

        assert!(rendered.contains("info"));
        assert!(rendered.contains("rusty_pugs=debug"));
        assert!(rendered.contains("tide=warn"));
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let filter = merge_directives("info", Some("rusty_pugs=loud,,")).unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn invalid_defaults_are_an_error() {
        assert!(merge_directives("=", None).is_err());
    }
}
