use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;
use crate::config::Config;
use crate::error::AppError;
use crate::store::UserStore;

/// Authentication gate.
///
/// Wrapped around the whole app; only the routes that require a bearer token
/// are gated, everything else (including unmatched paths, which must still
/// reach the 404 fallback) passes through untouched.
///
/// For gated routes the sequence is: extract the `Bearer` token (401 when
/// absent), verify signature and expiry (403 on any failure), resolve the
/// encoded user id against the store (401 when the account no longer exists),
/// then attach the full `User` record to the request extensions for the
/// handler's extractor.
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequireAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAuthService<S> {
    // Rc because the call future outlives the borrow of `self`.
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Only the token-verify and todos endpoints sit behind the gate.
        let path = req.path();
        if path != "/verify" && path != "/todos" {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let token = match bearer_token(&req) {
                Some(token) => token.to_owned(),
                None => {
                    return Err(AppError::Unauthorized("Access token required".into()).into());
                }
            };

            let (jwt_secret, store) = {
                let config = req
                    .app_data::<web::Data<Config>>()
                    .ok_or_else(|| AppError::Internal("Config not registered".into()))?;
                let store = req
                    .app_data::<web::Data<UserStore>>()
                    .ok_or_else(|| AppError::Internal("UserStore not registered".into()))?;
                (config.jwt_secret.clone(), store.clone())
            };

            let claims = verify_token(&token, &jwt_secret)?;

            let user = store
                .find_by_id(claims.sub)
                .await?
                .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

            req.extensions_mut().insert(user);
            service.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}
