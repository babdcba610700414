//! Share link preview (native).

#[cfg(feature = "native")]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use sharewidget_core::{WidgetConfig, WidgetError, WidgetResult};

    /// Print the share links and key bindings the widget would use.
    #[derive(Parser, Debug)]
    #[command(name = "sharewidget-preview", version)]
    pub struct Args {
        /// Widget configuration (JSON). Defaults are used when omitted.
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Address of the article page.
        #[arg(default_value = "https://example.com/article")]
        pub page_url: String,
    }

    pub fn load_config(path: Option<&PathBuf>) -> WidgetResult<WidgetConfig> {
        let Some(path) = path else {
            return Ok(WidgetConfig::default());
        };
        log::info!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| WidgetError::Config(format!("{}: {}", path.display(), e)))?;
        WidgetConfig::from_json(&json)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_args_defaults() {
            let args = Args::try_parse_from(["sharewidget-preview"]).unwrap();
            assert_eq!(args.config, None);
            assert_eq!(args.page_url, "https://example.com/article");
        }

        #[test]
        fn test_args_config_option_and_page_url() {
            let args = Args::try_parse_from([
                "sharewidget-preview",
                "--config",
                "widget.json",
                "https://blog.example.org/post",
            ])
            .unwrap();
            assert_eq!(args.config, Some(PathBuf::from("widget.json")));
            assert_eq!(args.page_url, "https://blog.example.org/post");

            let args = Args::try_parse_from(["sharewidget-preview", "-c", "w.json"]).unwrap();
            assert_eq!(args.config, Some(PathBuf::from("w.json")));
        }

        #[test]
        fn test_missing_config_file_is_config_error() {
            let path = PathBuf::from("/nonexistent/sharewidget/config.json");
            assert!(matches!(
                load_config(Some(&path)),
                Err(WidgetError::Config(_))
            ));
            assert_eq!(load_config(None).unwrap(), WidgetConfig::default());
        }
    }
}

#[cfg(feature = "native")]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();

    let args = cli::Args::parse();
    match cli::load_config(args.config.as_ref()) {
        Ok(config) => {
            print!("{}", sharewidget_app::render_preview(&config, &args.page_url));
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
