use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use std::marker::PhantomData;

use super::auth::{create_api_error, resolve_subject};
use crate::auth::application::ports::incoming::use_cases::{AuthorizationDecision, Requirement};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Binds a route guard to an authorization requirement.
pub trait AccessPolicy {
    const REQUIREMENT: Requirement;
}

pub struct AdminPolicy;

impl AccessPolicy for AdminPolicy {
    const REQUIREMENT: Requirement = Requirement::Admin;
}

pub struct UserPolicy;

impl AccessPolicy for UserPolicy {
    const REQUIREMENT: Requirement = Requirement::User;
}

/// Caller that passed the policy `P`.
#[derive(Debug)]
pub struct Authorized<P> {
    pub user_id: String,
    _policy: PhantomData<P>,
}

impl<P> Authorized<P> {
    fn new(user_id: String) -> Self {
        Self {
            user_id,
            _policy: PhantomData,
        }
    }
}

impl<P: AccessPolicy + 'static> FromRequest for Authorized<P> {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let subject = resolve_subject(req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let subject = subject?;

            let Some(state) = state else {
                tracing::error!("AppState is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let decision = state
                .auth
                .authorize
                .execute(P::REQUIREMENT, subject.as_deref())
                .await
                .map_err(|e| {
                    tracing::error!("Authorization lookup failed: {}", e);
                    create_api_error(ApiResponse::internal_error())
                })?;

            match (decision, subject) {
                (AuthorizationDecision::Granted, Some(user_id)) => Ok(Authorized::new(user_id)),
                (_, None) => Err(create_api_error(ApiResponse::unauthorized(
                    "UNAUTHORIZED",
                    "Authentication required",
                ))),
                (_, Some(user_id)) => {
                    tracing::warn!(
                        "{:?} requirement denied for user {}",
                        P::REQUIREMENT,
                        user_id
                    );
                    Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "You do not have permission to perform this action",
                    )))
                }
            }
        })
    }
}
