use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use folio_config::Config;
use folio_core_theme_contracts::ThemeService;
use folio_models::form::ContactForm;
use folio_templates_contracts::{ContactFormTemplate, ProfilePageTemplate, TemplateService};
use tracing::info;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Render the page as it looks after clicking the theme toggle once
    #[arg(long)]
    toggle_theme: bool,
}

impl RenderCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let provider = Provider::new(&config);

        let page = render_page(
            &provider.theme,
            &provider.templates,
            &config,
            &ContactForm::default(),
            self.toggle_theme,
        )?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, page)
                    .with_context(|| format!("Failed to write page to {}", path.display()))?;
                info!("Page written to {}", path.display());
            }
            None => print!("{page}"),
        }

        Ok(())
    }
}

pub fn render_page(
    theme: &impl ThemeService,
    templates: &impl TemplateService,
    config: &Config,
    form: &ContactForm,
    toggle_theme: bool,
) -> anyhow::Result<String> {
    let theme = if toggle_theme {
        theme.toggle()
    } else {
        theme.current()
    };

    templates.render(&ProfilePageTemplate {
        theme,
        profile: (&config.profile).into(),
        contact: ContactFormTemplate::new(
            form,
            config.contact.endpoint.as_str(),
            config.contact.recaptcha_sitekey.as_deref(),
        ),
    })
}
