pub mod site_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_output_path, validate_source, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "project-cards")]
    #[command(about = "Render projects.json into a page of project cards")]
    pub struct CliConfig {
        /// Site URL or local directory containing projects.json (or the .json file itself)
        #[arg(long, default_value = "./")]
        pub source: String,

        #[arg(long, default_value = "./index.html")]
        pub output: String,

        #[arg(long, default_value = "Projects")]
        pub title: String,

        /// Path to a TOML configuration file; its values replace the flags above
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn source_location(&self) -> &str {
            &self.source
        }

        fn output_path(&self) -> &str {
            &self.output
        }

        fn page_title(&self) -> &str {
            &self.title
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_source("source", &self.source)?;
            validate_output_path("output", &self.output)?;
            validate_non_empty_string("title", &self.title)
        }
    }

}
