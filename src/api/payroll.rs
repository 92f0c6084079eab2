use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::session::{SessionToken, expired, see_other},
    client::Clients,
    model::payroll::{Payroll, PayrollForm},
    utils::notice::{Notice, NoticeQuery, Toast, load_failure},
    view::{
        self,
        confirm::{ConfirmPage, ConfirmPageProps},
        payroll::{PayrollPage, PayrollPageProps},
    },
};

const PAGE_TITLE: &str = "Gestion des Paies";

/// Fetches the list and renders it with `form`. A 401 ends the session.
async fn render_page(
    token: &SessionToken,
    clients: &Clients,
    form: PayrollForm,
    editing: Option<u64>,
    mut toasts: Vec<Toast>,
) -> HttpResponse {
    let payrolls = match clients.payroll.list(token.as_deref()).await {
        Ok(payrolls) => payrolls,
        Err(e) if e.is_unauthorized() => return expired(),
        Err(e) => {
            error!(error = %e, "Failed to fetch payroll list");
            toasts.push(load_failure(&e));
            Vec::new()
        }
    };

    render_list(payrolls, form, editing, toasts).await
}

async fn render_list(
    payrolls: Vec<Payroll>,
    form: PayrollForm,
    editing: Option<u64>,
    toasts: Vec<Toast>,
) -> HttpResponse {
    let page = view::render::<PayrollPage>(
        PAGE_TITLE,
        PayrollPageProps {
            payrolls,
            form,
            editing,
            toasts,
        },
    )
    .await;
    view::html(page)
}

#[instrument(name = "payroll_page", skip_all)]
pub async fn list_payrolls(
    token: SessionToken,
    clients: web::Data<Clients>,
    query: web::Query<NoticeQuery>,
) -> impl Responder {
    render_page(&token, &clients, PayrollForm::default(), None, query.toasts()).await
}

#[instrument(name = "payroll_create", skip_all)]
pub async fn create_payroll(
    token: SessionToken,
    clients: web::Data<Clients>,
    form: web::Form<PayrollForm>,
) -> impl Responder {
    let form = form.into_inner();

    let payload = match form.to_create() {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "Rejected payroll form");
            let toasts = vec![Notice::PayrollCreateFailed.toast()];
            return render_page(&token, &clients, form, None, toasts).await;
        }
    };

    match clients.payroll.create(&payload, token.as_deref()).await {
        Ok(created) => {
            info!(payroll_id = created.id, "Payroll created");
            see_other(&Notice::PayrollCreated.location("/payroll"))
        }
        Err(e) if e.is_unauthorized() => expired(),
        Err(e) => {
            error!(error = %e, "Failed to create payroll");
            let toasts = vec![Notice::PayrollCreateFailed.toast()];
            render_page(&token, &clients, form, None, toasts).await
        }
    }
}

/// Opens the form prefilled with an existing record. Nothing is deleted
/// until the replacement has been saved.
#[instrument(name = "payroll_edit", skip(token, clients))]
pub async fn edit_payroll(
    token: SessionToken,
    clients: web::Data<Clients>,
    path: web::Path<u64>,
) -> impl Responder {
    let payroll_id = path.into_inner();

    let payrolls = match clients.payroll.list(token.as_deref()).await {
        Ok(payrolls) => payrolls,
        Err(e) if e.is_unauthorized() => return expired(),
        Err(e) => {
            error!(error = %e, payroll_id, "Failed to fetch payroll list");
            return render_list(Vec::new(), PayrollForm::default(), None, vec![load_failure(&e)])
                .await;
        }
    };

    let Some(form) = payrolls
        .iter()
        .find(|p| p.id == payroll_id)
        .map(PayrollForm::from)
    else {
        info!(payroll_id, "Payroll to edit not found");
        return see_other(&Notice::PayrollNotFound.location("/payroll"));
    };

    render_list(payrolls, form, Some(payroll_id), Vec::new()).await
}

/// Saves the edited record as a new one, then deletes the original.
#[instrument(name = "payroll_replace", skip(token, clients, form))]
pub async fn replace_payroll(
    token: SessionToken,
    clients: web::Data<Clients>,
    path: web::Path<u64>,
    form: web::Form<PayrollForm>,
) -> impl Responder {
    let payroll_id = path.into_inner();
    let form = form.into_inner();

    let payload = match form.to_create() {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "Rejected payroll form");
            let toasts = vec![Notice::PayrollCreateFailed.toast()];
            return render_page(&token, &clients, form, Some(payroll_id), toasts).await;
        }
    };

    match clients.payroll.create(&payload, token.as_deref()).await {
        Ok(created) => info!(payroll_id = created.id, "Replacement payroll created"),
        Err(e) if e.is_unauthorized() => return expired(),
        Err(e) => {
            error!(error = %e, "Failed to create replacement payroll");
            let toasts = vec![Notice::PayrollCreateFailed.toast()];
            return render_page(&token, &clients, form, Some(payroll_id), toasts).await;
        }
    }

    match clients.payroll.delete(payroll_id, token.as_deref()).await {
        Ok(()) => see_other(&Notice::PayrollUpdated.location("/payroll")),
        Err(e) if e.is_unauthorized() => expired(),
        Err(e) => {
            error!(error = %e, payroll_id, "Failed to delete replaced payroll");
            see_other(&Notice::PayrollDeleteFailed.location("/payroll"))
        }
    }
}

/// Confirmation prompt; never calls the payroll service.
pub async fn confirm_delete_payroll(path: web::Path<u64>) -> impl Responder {
    let payroll_id = path.into_inner();
    let page = view::render::<ConfirmPage>(
        PAGE_TITLE,
        ConfirmPageProps {
            page_name: PAGE_TITLE,
            message: "Êtes-vous sûr de vouloir supprimer cette fiche de paie ?",
            summary: format!("Fiche de paie #{payroll_id}"),
            action: format!("/payroll/{payroll_id}/delete"),
            cancel_href: "/payroll",
        },
    )
    .await;
    view::html(page)
}

#[instrument(name = "payroll_delete", skip(token, clients))]
pub async fn delete_payroll(
    token: SessionToken,
    clients: web::Data<Clients>,
    path: web::Path<u64>,
) -> impl Responder {
    let payroll_id = path.into_inner();

    match clients.payroll.delete(payroll_id, token.as_deref()).await {
        Ok(()) => {
            info!(payroll_id, "Payroll deleted");
            see_other(&Notice::PayrollDeleted.location("/payroll"))
        }
        Err(e) if e.is_unauthorized() => expired(),
        Err(e) => {
            error!(error = %e, payroll_id, "Failed to delete payroll");
            see_other(&Notice::PayrollDeleteFailed.location("/payroll"))
        }
    }
}
