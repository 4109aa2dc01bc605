use std::future::Ready;

use ::askama_actix::{Template, TemplateToResponse};
use ::aw::{
    http::StatusCode,
    web::{self, Data},
    FromRequest, HttpRequest, HttpResponse, Responder,
};
use ::chrono::Datelike;
use ::log::debug;

use crate::state::*;
use comment_form::CommentBlock;

mod index;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index::get)));
}

/// Data every page template gets, whatever the route.
#[derive(Clone)]
pub struct AppTpl {
    pub page_title: &'static str,
    /// shown in the footer
    pub current_year: i32,
}

impl FromRequest for AppTpl {
    type Error = ::aw::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(_req: &HttpRequest, _payload: &mut ::aw::dev::Payload) -> Self::Future {
        std::future::ready(Ok(Self {
            page_title: "Homepage",
            current_year: ::chrono::Local::now().year(),
        }))
    }
}

#[derive(Clone, Template)]
#[template(path = "error.html")]
pub struct ErrorTpl {
    pub app: AppTpl,
    pub status_code: u16,
}

pub async fn not_found(mut app: AppTpl, req: HttpRequest) -> impl Responder {
    debug!("no route for `{}`", req.path());

    app.page_title = "Not Found";
    let status = StatusCode::NOT_FOUND;

    let mut res = ErrorTpl {
        app,
        status_code: status.as_u16(),
    }
    .to_response();
    *res.status_mut() = status;
    res
}
