use std::sync::Arc;

use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl, ContactFormHandler};
use folio_core_theme_impl::ThemeServiceImpl;
use folio_extern_impl::form::{FormApiServiceConfig, FormApiServiceImpl};
use folio_templates_impl::TemplateServiceImpl;

pub type ContactFeature = ContactFeatureServiceImpl<FormApiServiceImpl>;

/// Services wired up from the configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    pub contact_form: ContactFormHandler<ContactFeature>,
    pub theme: ThemeServiceImpl,
    pub templates: TemplateServiceImpl,
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        // Extern
        let form_api = FormApiServiceImpl::new(FormApiServiceConfig {
            endpoint: config.contact.endpoint.clone().into(),
        });

        // Core
        let contact_feature_config = ContactFeatureConfig {
            timeout: config.contact.timeout.into(),
            success_message: Arc::from(config.contact.success_message.as_str()),
            fallback_email: Arc::from(config.contact.fallback_email.as_str()),
        };
        let contact_form =
            ContactFormHandler::new(ContactFeatureServiceImpl::new(form_api, contact_feature_config));

        let theme = ThemeServiceImpl::new(config.theme.initial);

        Self {
            contact_form,
            theme,
            templates: TemplateServiceImpl::default(),
        }
    }
}
