use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest};

use crate::routes::response::{UNAUTHORIZED, error};

/// Header carrying the id of the user performing a write.
pub const ACTOR_HEADER: &str = "X-User-Id";

/// Id of the acting user, taken from [`ACTOR_HEADER`].
///
/// Only the header format is checked here; the services load the user and
/// check its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor(pub i32);

impl Actor {
    pub fn id(&self) -> i32 {
        self.0
    }
}

impl FromRequest for Actor {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_actor(req))
    }
}

fn parse_actor(req: &HttpRequest) -> Result<Actor, actix_web::Error> {
    let Some(header) = req.headers().get(ACTOR_HEADER) else {
        return Err(rejection(format!("missing {ACTOR_HEADER} header")));
    };

    header
        .to_str()
        .ok()
        .and_then(|value| value.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
        .map(Actor)
        .ok_or_else(|| rejection(format!("invalid {ACTOR_HEADER} header")))
}

fn rejection(message: String) -> actix_web::Error {
    let response = error(StatusCode::UNAUTHORIZED, UNAUTHORIZED, message.clone());
    InternalError::from_response(message, response).into()
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[actix_web::test]
    async fn reads_actor_id_from_header() {
        let req = TestRequest::default()
            .insert_header((ACTOR_HEADER, " 7 "))
            .to_http_request();

        assert_eq!(parse_actor(&req).expect("actor"), Actor(7));
    }

    #[actix_web::test]
    async fn rejects_missing_or_malformed_header() {
        let missing = TestRequest::default().to_http_request();
        let malformed = TestRequest::default()
            .insert_header((ACTOR_HEADER, "abc"))
            .to_http_request();
        let negative = TestRequest::default()
            .insert_header((ACTOR_HEADER, "-3"))
            .to_http_request();

        for req in [missing, malformed, negative] {
            let err = parse_actor(&req).expect_err("rejected");
            assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
        }
    }
}
