use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::session::{SessionToken, expired, see_other},
    client::Clients,
    model::performance::{PerformanceReview, ReviewForm},
    utils::notice::{Notice, NoticeQuery, Toast, load_failure},
    view::{
        self,
        confirm::{ConfirmPage, ConfirmPageProps},
        performance::{PerformancePage, PerformancePageProps},
    },
};

const PAGE_TITLE: &str = "Évaluations";

/// Fetches the list and renders it with `form`. A 401 ends the session.
async fn render_page(
    token: &SessionToken,
    clients: &Clients,
    form: ReviewForm,
    editing: Option<u64>,
    mut toasts: Vec<Toast>,
) -> HttpResponse {
    let reviews = match clients.performance.list(token.as_deref()).await {
        Ok(reviews) => reviews,
        Err(e) if e.is_unauthorized() => return expired(),
        Err(e) => {
            error!(error = %e, "Failed to fetch review list");
            toasts.push(load_failure(&e));
            Vec::new()
        }
    };

    render_list(reviews, form, editing, toasts).await
}

async fn render_list(
    reviews: Vec<PerformanceReview>,
    form: ReviewForm,
    editing: Option<u64>,
    toasts: Vec<Toast>,
) -> HttpResponse {
    let page = view::render::<PerformancePage>(
        PAGE_TITLE,
        PerformancePageProps {
            reviews,
            form,
            editing,
            toasts,
        },
    )
    .await;
    view::html(page)
}

#[instrument(name = "review_page", skip_all)]
pub async fn list_reviews(
    token: SessionToken,
    clients: web::Data<Clients>,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    render_page(&token, &clients, ReviewForm::default(), None, query.toasts()).await
}

#[instrument(name = "review_create", skip_all)]
pub async fn create_review(
    token: SessionToken,
    clients: web::Data<Clients>,
    form: web::Form<ReviewForm>,
) -> impl Responder {
    let form = form.into_inner();

    let payload = match form.to_create() {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Rejected review form");
            let toasts = vec![Notice::ReviewCreateFailed.toast()];
            return render_page(&token, &clients, form, None, toasts).await;
        }
    };

    match clients.performance.create(&payload, token.as_deref()).await {
        Ok(created) => {
            info!(review_id = created.id, "Review created");
            see_other(&Notice::ReviewCreated.location("/performance"))
        }
        Err(e) if e.is_unauthorized() => expired(),
        Err(e) => {
            error!(error = %e, "Failed to create review");
            let toasts = vec![Notice::ReviewCreateFailed.toast()];
            render_page(&token, &clients, form, None, toasts).await
        }
    }
}

/// Opens the form prefilled with an existing record. Nothing is deleted
/// until the replacement has been saved.
#[instrument(name = "review_edit", skip(token, clients))]
pub async fn edit_review(
    token: SessionToken,
    clients: web::Data<Clients>,
    path: web::Path<u64>,
) -> impl Responder {
    let review_id = path.into_inner();

    let reviews = match clients.performance.list(token.as_deref()).await {
        Ok(reviews) => reviews,
        Err(e) if e.is_unauthorized() => return expired(),
        Err(e) => {
            error!(error = %e, review_id, "Failed to fetch review list");
            return render_list(Vec::new(), ReviewForm::default(), None, vec![load_failure(&e)])
                .await;
        }
    };

    let Some(form) = reviews
        .iter()
        .find(|r| r.id == review_id)
        .map(ReviewForm::from)
    else {
        info!(review_id, "Review to edit not found");
        return see_other(&Notice::ReviewNotFound.location("/performance"));
    };

    render_list(reviews, form, Some(review_id), Vec::new()).await
}

/// Saves the edited record as a new one, then deletes the original.
#[instrument(name = "review_replace", skip(token, clients, form))]
pub async fn replace_review(
    token: SessionToken,
    clients: web::Data<Clients>,
    path: web::Path<u64>,
    form: web::Form<ReviewForm>,
) -> impl Responder {
    let review_id = path.into_inner();
    let form = form.into_inner();

    let payload = match form.to_create() {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Rejected review form");
            let toasts = vec![Notice::ReviewCreateFailed.toast()];
            return render_page(&token, &clients, form, Some(review_id), toasts).await;
        }
    };

    match clients.performance.create(&payload, token.as_deref()).await {
        Ok(created) => info!(review_id = created.id, "Replacement review created"),
        Err(e) if e.is_unauthorized() => return expired(),
        Err(e) => {
            error!(error = %e, "Failed to create replacement review");
            let toasts = vec![Notice::ReviewCreateFailed.toast()];
            return render_page(&token, &clients, form, Some(review_id), toasts).await;
        }
    }

    match clients.performance.delete(review_id, token.as_deref()).await {
        Ok(()) => see_other(&Notice::ReviewUpdated.location("/performance")),
        Err(e) if e.is_unauthorized() => expired(),
        Err(e) => {
            error!(error = %e, review_id, "Failed to delete replaced review");
            see_other(&Notice::ReviewDeleteFailed.location("/performance"))
        }
    }
}

/// Confirmation prompt; never calls the performance service.
pub async fn confirm_delete_review(path: web::Path<u64>) -> impl Responder {
    let review_id = path.into_inner();
    let page = view::render::<ConfirmPage>(
        PAGE_TITLE,
        ConfirmPageProps {
            page_name: PAGE_TITLE,
            message: "Êtes-vous sûr de vouloir supprimer cette évaluation ?",
            summary: format!("Évaluation #{review_id}"),
            action: format!("/performance/{review_id}/delete"),
            cancel_href: "/performance",
        },
    )
    .await;
    view::html(page)
}

#[instrument(name = "review_delete", skip(token, clients))]
pub async fn delete_review(
    token: SessionToken,
    clients: web::Data<Clients>,
    path: web::Path<u64>,
) -> impl Responder {
    let review_id = path.into_inner();

    match clients.performance.delete(review_id, token.as_deref()).await {
        Ok(()) => {
            info!(review_id, "Review deleted");
            see_other(&Notice::ReviewDeleted.location("/performance"))
        }
        Err(e) if e.is_unauthorized() => expired(),
        Err(e) => {
            error!(error = %e, review_id, "Failed to delete review");
            see_other(&Notice::ReviewDeleteFailed.location("/performance"))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_text, init_app, mock_backend, session};
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use serde_json::json;
    use wiremock::matchers::{body_json, header as has_header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn review_json(id: u64, score: u8) -> serde_json::Value {
        json!({
            "id": id,
            "employeeId": 4,
            "score": score,
            "comments": null,
            "reviewDate": "2025-03-15"
        })
    }

    #[actix_web::test]
    async fn test_scores_render_with_band_classes() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .and(has_header("authorization", "Bearer jwt-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                review_json(1, 85),
                review_json(2, 60),
                review_json(3, 40)
            ])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance")
            .cookie(session("jwt-abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("class=\"score score-high\">85/100"));
        assert!(body.contains("class=\"score score-medium\">60/100"));
        assert!(body.contains("class=\"score score-low\">40/100"));
        assert!(body.contains("Aucun commentaire"));
        assert!(body.contains("15/03/2025"));
    }

    #[actix_web::test]
    async fn test_form_offers_scores_one_to_hundred() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance")
            .cookie(session("jwt-abc"))
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.contains("<option value=\"1\">1</option>"));
        assert!(body.contains("<option value=\"100\">100</option>"));
        assert!(!body.contains("<option value=\"101\">"));
        assert!(!body.contains("<option value=\"0\">"));
        assert!(body.contains("data-single-submit"));
        assert!(body.contains("Aucune évaluation disponible"));
    }

    #[actix_web::test]
    async fn test_create_review_redirects_to_list() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("POST"))
            .and(path("/api/performance/"))
            .and(body_json(json!({
                "employeeId": 4,
                "score": 85,
                "comments": "Très bon trimestre",
                "reviewDate": "2025-03-15"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(review_json(5, 85)))
            .expect(1)
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::post()
            .uri("/performance")
            .cookie(session("jwt-abc"))
            .set_form([
                ("employeeId", "4"),
                ("score", "85"),
                ("comments", "Très bon trimestre"),
                ("reviewDate", "2025-03-15"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/performance?notice=review_created"
        );
    }

    #[actix_web::test]
    async fn test_out_of_range_score_is_rejected_locally() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::post()
            .uri("/performance")
            .cookie(session("jwt-abc"))
            .set_form([("employeeId", "4"), ("score", "150"), ("reviewDate", "2025-03-15")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("toast-error"));
    }

    #[actix_web::test]
    async fn test_delete_only_after_confirmation() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("DELETE"))
            .and(path("/api/performance/2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance/2/delete")
            .cookie(session("jwt-abc"))
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("supprimer cette évaluation"));
        assert!(server.received_requests().await.unwrap().is_empty());

        let req = test::TestRequest::post()
            .uri("/performance/2/delete")
            .cookie(session("jwt-abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/performance?notice=review_deleted"
        );
    }

    #[actix_web::test]
    async fn test_unauthorized_create_clears_token() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("POST"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::post()
            .uri("/performance")
            .cookie(session("stale"))
            .set_form([("employeeId", "4"), ("score", "70"), ("reviewDate", "2025-03-15")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?notice=session_expired"
        );
        let cookie = resp.response().cookies().find(|c| c.name() == "token").unwrap();
        assert_eq!(cookie.value(), "");
    }

    #[actix_web::test]
    async fn test_edit_unknown_review_redirects_with_notice() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([review_json(1, 85)])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance/99/edit")
            .cookie(session("jwt-abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/performance?notice=review_not_found"
        );
    }

    #[actix_web::test]
    async fn test_edit_selects_current_score() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([review_json(1, 85)])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance/1/edit")
            .cookie(session("jwt-abc"))
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.contains("<option value=\"85\" selected"));
        assert!(body.contains("action=\"/performance/1/replace\""));
    }

    #[actix_web::test]
    async fn test_unauthorized_review_list_clears_token() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance")
            .cookie(session("stale"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?notice=session_expired"
        );
        let cookie = resp.response().cookies().find(|c| c.name() == "token").unwrap();
        assert_eq!(cookie.value(), "");
    }

    #[actix_web::test]
    async fn test_replace_review_creates_before_deleting() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("POST"))
            .and(path("/api/performance/"))
            .and(body_json(json!({
                "employeeId": 4,
                "score": 90,
                "comments": "En progrès",
                "reviewDate": "2025-03-15"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(review_json(11, 90)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/performance/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::post()
            .uri("/performance/3/replace")
            .cookie(session("jwt-abc"))
            .set_form([
                ("employeeId", "4"),
                ("score", "90"),
                ("comments", "En progrès"),
                ("reviewDate", "2025-03-15"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/performance?notice=review_updated"
        );
        let requests = server.received_requests().await.unwrap();
        let methods: Vec<String> = requests.iter().map(|r| r.method.to_string()).collect();
        assert_eq!(methods, vec!["POST", "DELETE"]);
    }

    #[actix_web::test]
    async fn test_failed_review_replacement_keeps_original() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([review_json(3, 85)])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::post()
            .uri("/performance/3/replace")
            .cookie(session("jwt-abc"))
            .set_form([("employeeId", "4"), ("score", "90"), ("reviewDate", "2025-03-15")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("toast-error"));
        assert!(body.contains("action=\"/performance/3/replace\""));
        assert!(body.contains("85/100"));
    }

    #[actix_web::test]
    async fn test_review_without_date_still_listed() {
        let (server, config, clients) = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/api/performance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                review_json(1, 85),
                {"id": 2, "employeeId": 5, "score": 30, "reviewDate": null}
            ])))
            .mount(&server)
            .await;

        let app = init_app!(config, clients);
        let req = test::TestRequest::get()
            .uri("/performance")
            .cookie(session("jwt-abc"))
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.contains("85/100"));
        assert!(body.contains("30/100"));
        assert!(body.contains("<td>-</td>"));
        assert!(!body.contains("toast-error"));
        assert!(!body.contains("Aucune évaluation disponible"));
    }
}
