use yew::prelude::*;

use crate::model::performance::{MAX_SCORE, MIN_SCORE, PerformanceReview, ReviewForm, ScoreBand};
use crate::utils::format::format_date;
use crate::utils::notice::Toast;
use crate::view::layout::{Layout, empty_state};

#[derive(Properties, PartialEq)]
pub struct PerformancePageProps {
    pub reviews: Vec<PerformanceReview>,
    pub form: ReviewForm,
    #[prop_or_default]
    pub editing: Option<u64>,
    #[prop_or_default]
    pub toasts: Vec<Toast>,
}

fn review_row(r: &PerformanceReview) -> Html {
    let comments = r
        .comments
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "Aucun commentaire".to_string());

    html! {
        <tr key={r.id.to_string()}>
            <td><h5>{ format!("Employé #{}", r.employee_id) }</h5></td>
            <td>
                <p class={classes!("score", ScoreBand::of(r.score).class())}>
                    { format!("{}/100", r.score) }
                </p>
            </td>
            <td>{ format_date(r.review_date) }</td>
            <td><p class="comments">{ comments }</p></td>
            <td class="actions">
                <a href={format!("/performance/{}/edit", r.id)}>{ "Modifier" }</a>
                <a href={format!("/performance/{}/delete", r.id)}>{ "Supprimer" }</a>
            </td>
        </tr>
    }
}

fn score_options(selected: &str) -> Html {
    let selected = selected.trim();
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{ "Sélectionner" }</option>
            { for (MIN_SCORE..=MAX_SCORE).map(|n| {
                let value = n.to_string();
                let is_selected = value == selected;
                html! { <option value={value.clone()} selected={is_selected}>{ value }</option> }
            }) }
        </>
    }
}

#[function_component]
pub fn PerformancePage(props: &PerformancePageProps) -> Html {
    let form = &props.form;
    let (title, action) = match props.editing {
        Some(id) => (
            format!("Modifier l'évaluation #{id}"),
            format!("/performance/{id}/replace"),
        ),
        None => ("Ajouter une évaluation".to_string(), "/performance".to_string()),
    };

    let table = if props.reviews.is_empty() {
        empty_state("Aucune évaluation disponible")
    } else {
        html! {
            <table>
                <thead>
                    <tr>
                        <th>{ "Employé" }</th>
                        <th>{ "Score" }</th>
                        <th>{ "Date" }</th>
                        <th>{ "Commentaires" }</th>
                        <th class="actions">{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.reviews.iter().map(review_row) }
                </tbody>
            </table>
        }
    };

    html! {
        <Layout page_name="Évaluations" toasts={props.toasts.clone()}>
            <div class="card">
                <h3>{ title }</h3>
                <form method="post" action={action} data-single-submit="true">
                    <div class="grid">
                        <div>
                            <label>{ "ID Employé" }</label>
                            <input type="number" name="employeeId" min="1"
                                value={form.employee_id.clone()} required={true} />
                        </div>
                        <div>
                            <label>{ "Score" }</label>
                            <select name="score" required={true}>
                                { score_options(&form.score) }
                            </select>
                        </div>
                        <div>
                            <label>{ "Date" }</label>
                            <input type="date" name="reviewDate"
                                value={form.review_date.clone()} required={true} />
                        </div>
                        <div>
                            <button type="submit">
                                { if props.editing.is_some() { "Enregistrer" } else { "Ajouter" } }
                            </button>
                            if props.editing.is_some() {
                                <>
                                    { " " }
                                    <a class="button button-secondary" href="/performance">{ "Annuler" }</a>
                                </>
                            }
                        </div>
                    </div>
                    <div>
                        <label>{ "Commentaires" }</label>
                        <textarea name="comments" rows="3"
                            value={form.comments.clone()} />
                    </div>
                </form>
            </div>
            <div class="card">
                { table }
            </div>
        </Layout>
    }
}
