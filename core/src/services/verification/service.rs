//! Main verification service implementation

use chrono::Utc;
use std::sync::Arc;
use url::Url;

use hd_shared::config::{SiteConfig, VerificationConfig};
use hd_shared::masking::mask_email;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{UserDirectory, VerificationTokenStore};
use crate::services::mail::{deliver_best_effort, templates, MailRelay};
use crate::services::token::{generate_token, hash_token};
use crate::services::validation::{validate_email, validate_verification_token};

use super::types::{IssuedVerification, VerificationConfirmation, VerificationDispatch};

/// Verification service for email confirmation tokens
pub struct VerificationService<D: UserDirectory, T: VerificationTokenStore> {
    /// Directory updated when a stored token is confirmed
    directory: Arc<D>,
    /// Token storage
    tokens: Arc<T>,
    /// Relay used for verification mail
    relay: Arc<dyn MailRelay>,
    config: VerificationConfig,
    site: SiteConfig,
    /// Parsed `{base_url}/{verify_path}`, the prefix of every link
    link_base: Url,
}

impl<D: UserDirectory, T: VerificationTokenStore> VerificationService<D, T> {
    /// Fails when the site base URL and verify path do not form a valid URL
    pub fn new(
        directory: Arc<D>,
        tokens: Arc<T>,
        relay: Arc<dyn MailRelay>,
        config: VerificationConfig,
        site: SiteConfig,
    ) -> DomainResult<Self> {
        let base = format!(
            "{}/{}",
            site.base_url_trimmed(),
            config.verify_path.trim_start_matches('/')
        );
        let link_base = Url::parse(&base)
            .map_err(|e| DomainError::internal(format!("invalid verification base URL {}: {}", base, e)))?;

        Ok(Self {
            directory,
            tokens,
            relay,
            config,
            site,
            link_base,
        })
    }

    #[cfg(test)]
    pub(crate) fn tokens(&self) -> &Arc<T> {
        &self.tokens
    }

    /// Issue a new token for `email`
    ///
    /// Earlier tokens for the same address are revoked so that only the
    /// newest link works. Expired tokens of any address are dropped first.
    pub async fn issue(&self, email: &str) -> DomainResult<IssuedVerification> {
        self.purge_expired().await?;
        let revoked = self.tokens.revoke_for_email(email).await?;
        if revoked > 0 {
            tracing::debug!(
                email = %mask_email(email),
                revoked = revoked,
                "Revoked previous verification tokens"
            );
        }

        let token = generate_token();
        let record = VerificationToken::new(hash_token(&token), email, self.config.token_ttl_hours);
        let expires_at = record.expires_at;
        self.tokens.save(record).await?;

        let link = self.build_link(&token, email);
        tracing::info!(
            email = %mask_email(email),
            expires_at = %expires_at,
            event = "verification_token_issued",
            "Verification token issued"
        );

        Ok(IssuedVerification {
            token,
            link,
            expires_at,
        })
    }

    /// Issue a token and mail the link. Mail failure is reported, not raised.
    pub async fn send_verification(
        &self,
        email: &str,
        recipient_name: &str,
    ) -> DomainResult<VerificationDispatch> {
        let issued = self.issue(email).await?;
        let mail = templates::verification_mail(&self.site.name, email, recipient_name, &issued.link);
        let outcome = deliver_best_effort(self.relay.as_ref(), &mail).await;

        Ok(VerificationDispatch { issued, outcome })
    }

    /// Confirm a token for an email address
    ///
    /// Rules, first failure wins:
    /// 1. Token and email are both present
    /// 2. Token has at least 10 characters
    /// 3. Email has a valid shape
    /// 4. A stored token must belong to the email and be unexpired; it is
    ///    consumed and the directory entry marked verified
    /// 5. An unknown token is accepted unless issued tokens are required
    pub async fn confirm(&self, token: &str, email: &str) -> DomainResult<VerificationConfirmation> {
        if token.trim().is_empty() || email.trim().is_empty() {
            return Err(ValidationError::TokenAndEmailRequired.into());
        }
        let token = validate_verification_token(token)?;
        let email = validate_email(email)?;

        let token_hash = hash_token(&token);
        match self.tokens.find(&token_hash).await? {
            Some(record) => {
                if !record.belongs_to(&email) {
                    tracing::warn!(
                        email = %mask_email(&email),
                        event = "verification_email_mismatch",
                        "Verification token presented for a different email"
                    );
                    return Err(AuthError::InvalidVerificationToken.into());
                }
                if record.is_expired() {
                    self.tokens.consume(&token_hash).await?;
                    tracing::info!(
                        email = %mask_email(&email),
                        event = "verification_token_expired",
                        "Expired verification token presented"
                    );
                    return Err(AuthError::VerificationTokenExpired.into());
                }

                self.tokens.consume(&token_hash).await?;
                let updated = self.directory.mark_email_verified(&email).await?;
                tracing::info!(
                    email = %mask_email(&email),
                    directory_updated = updated,
                    event = "email_verified",
                    "Email verified"
                );
            }
            None if self.config.require_issued_token => {
                tracing::info!(
                    email = %mask_email(&email),
                    event = "verification_token_unknown",
                    "Unknown verification token rejected"
                );
                return Err(AuthError::InvalidVerificationToken.into());
            }
            None => {
                tracing::debug!(
                    email = %mask_email(&email),
                    "Unknown verification token accepted"
                );
            }
        }

        Ok(VerificationConfirmation {
            email,
            verified_at: Utc::now(),
        })
    }

    /// Drop expired tokens from the store
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        let purged = self.tokens.purge_expired().await?;
        if purged > 0 {
            tracing::debug!(purged = purged, "Purged expired verification tokens");
        }
        Ok(purged)
    }

    fn build_link(&self, token: &str, email: &str) -> String {
        let mut url = self.link_base.clone();
        url.query_pairs_mut()
            .append_pair("token", token)
            .append_pair("email", email);
        url.into()
    }
}
