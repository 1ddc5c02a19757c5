use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Request, RequestInit, Response, UrlSearchParams};

use crate::constants::FIELD_CSRF;
use crate::utils::get_input_value;

#[derive(Deserialize)]
pub struct PostResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// What became of one form POST; the caller decides whether to reload,
/// show a banner, or drop an element.
pub enum PostOutcome {
    Accepted { message: Option<String> },
    Rejected { message: Option<String> },
    TransportError,
}

pub fn connect_form_send<F>(url: &str, fields: Vec<(&'static str, String)>, done: F)
    where
        F: FnOnce(PostOutcome) + 'static
{
    let url = url.to_string();
    spawn_local(async move {
        match send(&url, &fields).await {
            Ok(data) => {
                match serde_wasm_bindgen::from_value::<PostResponse>(data) {
                    Ok(resp) => {
                        if resp.success {
                            done(PostOutcome::Accepted { message: resp.message });
                        } else {
                            done(PostOutcome::Rejected { message: resp.message });
                        }
                    }
                    Err(err) => {
                        log::error!("connect_form_send[{url}]: {:?}", err);
                        done(PostOutcome::TransportError);
                    }
                }
            }
            Err(err) => {
                log::error!("connect_form_send[{url}]: {:?}", err);
                done(PostOutcome::TransportError);
            }
        };
    });
}

// Django expects form-encoded bodies with the csrfmiddlewaretoken inside.
async fn send(url: &str, fields: &[(&'static str, String)]) -> Result<JsValue, JsValue> {
    let params = UrlSearchParams::new()?;
    for (name, value) in fields {
        params.append(name, value);
    }
    params.append(FIELD_CSRF, &csrf_token());
    let body = JsValue::from(params);

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.credentials(web_sys::RequestCredentials::Include);
    opts.body(Some(&body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("X-Requested-With", "XMLHttpRequest")?;

    let window = web_sys::window().unwrap_throw();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let json = JsFuture::from(resp.json()?).await?;

    Ok(json)
}

pub fn csrf_token() -> String {
    get_input_value(FIELD_CSRF)
}
