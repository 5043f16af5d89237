use barhop_core::gateways::email::{EmailContent, EmailGateway};
use barhop_entities::email::EmailAddress;

/// Writes outgoing mail to the log instead of delivering it.
///
/// Used in development and in deployments that hand the invite link to
/// the admin inline instead of mailing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailGateway;

impl EmailGateway for LogMailGateway {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        for recipient in recipients {
            log::info!(
                "Would send e-mail \"{}\" to {}:\n{}",
                email.subject,
                recipient,
                email.body
            );
        }
    }
}
