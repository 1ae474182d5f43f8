use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::{
        header::{
            HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        Method,
    },
    middleware::Next,
    Error, HttpResponse,
};
use log::trace;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Origin, Content-Type, Accept";

fn apply_cors_headers<B>(mut res: ServiceResponse<B>) -> ServiceResponse<B> {
    let headers = res.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    res
}

/// Adds the permissive CORS headers to every response and answers any
/// `OPTIONS` request with `204 No Content` before it reaches the router.
///
/// Wrap with `actix_web::middleware::from_fn(cors_headers)`.
pub async fn cors_headers<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if req.method() == Method::OPTIONS {
        trace!("preflight {}", req.path());
        let res = req.into_response(HttpResponse::NoContent().finish());
        return Ok(apply_cors_headers(res).map_into_right_body());
    }

    let res = next.call(req).await?;
    Ok(apply_cors_headers(res).map_into_left_body())
}
