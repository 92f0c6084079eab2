pub mod auth;
pub mod confirm;
pub mod dashboard;
pub mod layout;
pub mod payroll;
pub mod performance;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use yew::{BaseComponent, ServerRenderer};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f1f5f9; color: #1c2434; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 220px; background: #1c2434; padding: 24px 16px; }
.sidebar a, .sidebar button { display: block; color: #dee4ee; text-decoration: none; padding: 8px 0; background: none; border: 0; font: inherit; cursor: pointer; }
.content { flex: 1; padding: 32px; }
.breadcrumb { margin: 0 0 24px; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 24px; margin-bottom: 32px; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; margin-bottom: 16px; }
label { display: block; font-size: 14px; margin-bottom: 4px; }
input, select, textarea { width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid #e2e8f0; border-radius: 4px; }
button, .button { background: #5750f1; color: #fff; border: 0; border-radius: 4px; padding: 8px 16px; cursor: pointer; text-decoration: none; }
button:disabled { opacity: .6; cursor: wait; }
.button-secondary { background: #e2e8f0; color: #1c2434; }
table { width: 100%; border-collapse: collapse; }
th { background: #f7f9fc; text-align: left; }
th, td { padding: 16px; border-bottom: 1px solid #eee; }
.actions { text-align: right; white-space: nowrap; }
.actions a { margin-left: 14px; color: #5750f1; }
.empty { padding: 16px; text-align: center; }
.toast { padding: 12px 16px; border-radius: 6px; margin-bottom: 16px; }
.toast-success { background: #219653; color: #fff; }
.toast-error { background: #d34053; color: #fff; }
.score { display: inline-flex; border-radius: 999px; padding: 4px 14px; font-weight: 500; }
.score-high { background: rgba(33, 150, 83, .08); color: #219653; }
.score-medium { background: rgba(255, 167, 11, .08); color: #ffa70b; }
.score-low { background: rgba(211, 64, 83, .08); color: #d34053; }
.auth { display: flex; min-height: 100vh; align-items: center; justify-content: center; }
.auth .card { width: 360px; }
.auth input { margin-bottom: 12px; }
.error { color: #d34053; }
.success { color: #219653; }
"#;

// Disables the submit button of `data-single-submit` forms while the
// request is in flight.
const SCRIPT: &str = r#"
document.querySelectorAll('form[data-single-submit]').forEach(function (form) {
  form.addEventListener('submit', function () {
    var button = form.querySelector('button[type=submit]');
    if (button) { button.disabled = true; button.textContent = 'En cours...'; }
  });
});
"#;

/// Renders `C` server-side and wraps it in the HTML document shell.
pub async fn render<C>(title: &'static str, props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send,
{
    let body = ServerRenderer::<C>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;

    format!(
        "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} | RH</title><style>{STYLE}</style></head>\
         <body>{body}<script>{SCRIPT}</script></body></html>"
    )
}

pub fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}
