use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::ContentType,
    Error, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use futures_util::FutureExt;

use crate::config::security::{Decision, SecurityConfig};

/// Consults the [`SecurityConfig`] before any handler runs.
pub struct AccessPolicy {
    config: Rc<SecurityConfig>,
}

impl AccessPolicy {
    pub fn new(config: SecurityConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessPolicy
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response  = ServiceResponse<EitherBody<B>>;
    type Error     = Error;
    type InitError = ();
    type Transform = AccessPolicyMw<S>;
    type Future    = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, srv: S) -> Self::Future {
        ok(AccessPolicyMw {
            inner: srv,
            config: Rc::clone(&self.config),
        })
    }
}

pub struct AccessPolicyMw<S> {
    inner: S,
    config: Rc<SecurityConfig>,
}

impl<S, B> Service<ServiceRequest> for AccessPolicyMw<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error    = Error;
    type Future   = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.config.decide(&req) {
            Decision::Allow => self
                .inner
                .call(req)
                .map(|res| res.map(ServiceResponse::map_into_left_body))
                .boxed_local(),
            Decision::Deny(reason) => {
                log::warn!("{} {} rejected: {}", req.method(), req.path(), reason);
                let res = HttpResponse::Forbidden()
                    .content_type(ContentType::plaintext())
                    .body(reason);
                futures_util::future::ready(Ok(req.into_response(res).map_into_right_body()))
                    .boxed_local()
            }
        }
    }
}
