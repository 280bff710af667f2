pub(crate) mod auth;
pub(crate) mod cors;

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use site_cms_error::{auth::AuthError, web::WebError};
use site_cms_models::entities::prelude::AdminModel;
use std::ops::Deref;

/// The admin the authentication middleware resolved for this request.
///
/// Only available on protected routes; extracting it elsewhere is a 401.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub AdminModel);

impl Deref for CurrentAdmin {
    type Target = AdminModel;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CurrentAdmin {
    type Error = WebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AdminModel>()
                .cloned()
                .map(CurrentAdmin)
                .ok_or(WebError::Unauthorized(AuthError::MissingToken)),
        )
    }
}
