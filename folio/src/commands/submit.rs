use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_contact_impl::ContactFormHandler;
use folio_models::form::{ChallengeWidget, Checkbox, ContactForm, Feedback};

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Token issued by the challenge widget
    #[arg(long, default_value = "")]
    recaptcha_response: String,
    /// Check the honeypot checkbox, sending this value
    #[arg(long)]
    bot_check: Option<String>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let provider = Provider::new(&config);
        let mut form = self.into_form();

        let message = submit(&provider.contact_form, &mut form).await?;
        println!("{message}");

        Ok(())
    }

    fn into_form(self) -> ContactForm {
        let mut challenge = ChallengeWidget::default();
        challenge.solve(self.recaptcha_response);

        let bot_check = match self.bot_check {
            Some(value) => Checkbox {
                checked: true,
                value,
            },
            None => Checkbox::default(),
        };

        let mut form = ContactForm::default();
        form.name = self.name;
        form.email = self.email;
        form.message = self.message;
        form.bot_check = bot_check;
        form.challenge = Some(challenge);
        form
    }
}

/// Submits the form and returns the text of the success region, or fails
/// with the text of the error region.
pub async fn submit(
    handler: &ContactFormHandler<impl ContactFeatureService>,
    form: &mut ContactForm,
) -> anyhow::Result<String> {
    handler.submit_form(form).await;

    match form.feedback() {
        Feedback::Success(message) => Ok(message.clone()),
        Feedback::Error(message) => bail!("{message}"),
        Feedback::None => bail!("The contact form was not submitted"),
    }
}
