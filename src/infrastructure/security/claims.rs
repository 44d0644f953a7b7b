// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{TokenSubject, VerifiedToken},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the token claims from the authority facts of a verified biscuit.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<VerifiedToken> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(&fact.predicate);
    }
    ctx.into_verified()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(predicate),
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        if let [Term::Integer(id), Term::Str(name)] = predicate.terms.as_slice() {
            self.user_id = Some(*id);
            self.username = Some(name.clone());
        }
    }

    fn into_verified(self) -> ApplicationResult<VerifiedToken> {
        let missing = |claim: &str| ApplicationError::unauthorized(format!("missing {claim}"));

        let user_id = self.user_id.ok_or_else(|| missing("user id"))?;
        let username = self.username.ok_or_else(|| missing("username"))?;
        let issued_at = self.issued_at.ok_or_else(|| missing("issued_at"))?;
        let expires_at = self.expires_at.ok_or_else(|| missing("expires_at"))?;

        Ok(VerifiedToken {
            subject: TokenSubject {
                user_id: UserId::new(user_id)
                    .map_err(|_| ApplicationError::unauthorized("invalid user id"))?,
                username,
            },
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
