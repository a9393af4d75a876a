use folio_models::{
    form::ContactForm,
    profile::{Profile, ProfileLink},
    theme::Theme,
};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    /// Ends in `.html` so that the template engine escapes all values.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: (&str, &str) = ("base.html", include_str!("../templates/base.html"));

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ProfilePageTemplate("profile.html"),
}

/// The whole page: profile card and contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePageTemplate {
    /// Value of the `data-theme` attribute on the document root.
    pub theme: Theme,
    pub profile: ProfileTemplate,
    pub contact: ContactFormTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileTemplate {
    pub name: String,
    pub subtitle: String,
    pub about: String,
    pub picture: Option<String>,
    pub links: Vec<LinkTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTemplate {
    pub title: String,
    pub url: String,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    pub endpoint: String,
    pub recaptcha_sitekey: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub bot_check_value: String,
    pub submit_label: String,
    pub submit_disabled: bool,
    /// Empty if the success region is hidden.
    pub success: String,
    /// Empty if the error region is hidden.
    pub error: String,
}

impl From<&Profile> for ProfileTemplate {
    fn from(value: &Profile) -> Self {
        Self {
            name: value.name.clone(),
            subtitle: value.subtitle.clone(),
            about: value.about.clone(),
            picture: value.picture.clone(),
            links: value.links.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ProfileLink> for LinkTemplate {
    fn from(value: &ProfileLink) -> Self {
        Self {
            title: value.title.clone(),
            url: value.url.to_string(),
            external: value.is_external(),
        }
    }
}

impl ContactFormTemplate {
    pub fn new(form: &ContactForm, endpoint: &str, recaptcha_sitekey: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.into(),
            recaptcha_sitekey: recaptcha_sitekey.map(Into::into),
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            bot_check_value: form.bot_check.value.clone(),
            submit_label: form.submit_label().into(),
            submit_disabled: form.submit_disabled(),
            success: form.feedback().success().unwrap_or_default().into(),
            error: form.feedback().error().unwrap_or_default().into(),
        }
    }
}
