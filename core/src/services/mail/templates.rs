//! Message templates

use super::relay::OutgoingMail;

/// Email confirmation message with a plain-text and an HTML part
pub fn verification_mail(site_name: &str, to: &str, recipient_name: &str, link: &str) -> OutgoingMail {
    let subject = format!("Подтверждение регистрации на {}", site_name);

    let text = format!(
        "Здравствуйте, {name}!\n\n\
         Спасибо за регистрацию на {site}.\n\
         Чтобы подтвердить email, перейдите по ссылке:\n\n\
         {link}\n\n\
         Если вы не регистрировались, просто проигнорируйте это письмо.",
        name = recipient_name,
        site = site_name,
        link = link,
    );

    let html = format!(
        "<!DOCTYPE html>\
         <html><body style=\"font-family: Arial, sans-serif; color: #1f2937;\">\
         <h2>Здравствуйте, {name}!</h2>\
         <p>Спасибо за регистрацию на {site}.</p>\
         <p><a href=\"{link}\" style=\"display: inline-block; padding: 12px 24px; \
         background: #2563eb; color: #ffffff; text-decoration: none; border-radius: 6px;\">\
         Подтвердить email</a></p>\
         <p style=\"font-size: 12px; color: #6b7280;\">Если кнопка не работает, скопируйте ссылку: {link}</p>\
         <p style=\"font-size: 12px; color: #6b7280;\">Если вы не регистрировались, просто проигнорируйте это письмо.</p>\
         </body></html>",
        name = escape_html(recipient_name),
        site = escape_html(site_name),
        link = escape_html(link),
    );

    OutgoingMail::new(to, subject, text).with_html(html)
}

/// Plain relay check message
pub fn test_mail(site_name: &str, to: &str) -> OutgoingMail {
    OutgoingMail::new(
        to,
        "Тест отправки email",
        format!("Тестовое письмо из {}", site_name),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
