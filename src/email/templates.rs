use super::EmailMessage;
use crate::models::SignupRecord;

pub const WELCOME_SUBJECT: &str = "Welcome to the NetWorth beta";

pub fn verification_link(site_url: &str, token: &str) -> String {
    format!("{}/verify?token={}", site_url, token)
}

/// Welcome email for a beta signup.
///
/// Includes a verification link while the record is unverified and still
/// holds a token.
pub fn welcome_email(from: &str, site_url: &str, signup: &SignupRecord) -> EmailMessage {
    let verify_block = match (&signup.verification_token, signup.verified) {
        (Some(token), false) => format!(
            r#"<p>Please confirm your email address:</p><p><a href="{link}">{link}</a></p>"#,
            link = verification_link(site_url, token)
        ),
        _ => String::new(),
    };

    let html = format!(
        concat!(
            "<h1>You're on the list!</h1>",
            "<p>Thanks for joining the NetWorth by Acepyr beta. ",
            "We'll let you know as soon as your access is ready.</p>",
            "{verify}",
            "<p>The Acepyr team</p>"
        ),
        verify = verify_block
    );

    EmailMessage {
        from: from.to_string(),
        to: vec![signup.email.clone()],
        subject: WELCOME_SUBJECT.to_string(),
        html,
    }
}
