use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

pub const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Tags each webhook request with a request id and, when a secret is
/// configured, rejects deliveries that do not carry it.
pub struct WebhookSecretMiddleware {
    secret: Option<SecretString>,
}

impl WebhookSecretMiddleware {
    pub fn new(secret: Option<SecretString>) -> Self {
        Self { secret }
    }
}

impl<S, B> Transform<S, ServiceRequest> for WebhookSecretMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = WebhookSecretMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(WebhookSecretMiddlewareService {
            service: Rc::new(service),
            secret: self.secret.clone().map(Rc::new),
        }))
    }
}

pub struct WebhookSecretMiddlewareService<S> {
    service: Rc<S>,
    secret: Option<Rc<SecretString>>,
}

impl<S, B> Service<ServiceRequest> for WebhookSecretMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let service = Rc::clone(&self.service);
        let secret = self.secret.clone();

        Box::pin(async move {
            if let Some(secret) = secret {
                let provided = req
                    .headers()
                    .get(SECRET_TOKEN_HEADER)
                    .and_then(|h| h.to_str().ok());

                if provided != Some(secret.expose_secret()) {
                    log::warn!("Rejected webhook request {} with bad secret token", request_id);
                    return Err(ErrorUnauthorized("Invalid webhook secret token"));
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

pub fn get_request_id(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}
