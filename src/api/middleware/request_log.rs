use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use std::{
    future::{ready, Future, Ready},
    pin::Pin,
    rc::Rc,
    time::Instant,
};
use tracing::{info, warn};

/// Logs method, path, status and latency of every request.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let res = srv.call(req).await;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            match &res {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() {
                        warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed");
                    } else {
                        info!(%method, %path, status = status.as_u16(), elapsed_ms, "request handled");
                    }
                }
                Err(e) => {
                    warn!(%method, %path, error = %e, elapsed_ms, "request errored");
                }
            }

            res
        })
    }
}
