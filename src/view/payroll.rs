use yew::prelude::*;

use crate::model::payroll::{Payroll, PayrollForm};
use crate::utils::format::{format_currency, format_date};
use crate::utils::notice::Toast;
use crate::view::layout::{Layout, empty_state};

#[derive(Properties, PartialEq)]
pub struct PayrollPageProps {
    pub payrolls: Vec<Payroll>,
    pub form: PayrollForm,
    /// Record being replaced when the form was opened through "edit".
    #[prop_or_default]
    pub editing: Option<u64>,
    #[prop_or_default]
    pub toasts: Vec<Toast>,
}

fn payroll_row(p: &Payroll) -> Html {
    html! {
        <tr key={p.id.to_string()}>
            <td>{ p.id.to_string() }</td>
            <td>{ format!("Employé #{}", p.employee_id) }</td>
            <td>{ format_currency(p.base_salary) }</td>
            <td>{ format_currency(p.bonus) }</td>
            <td>{ format_currency(p.deductions) }</td>
            <td><strong class="net-salary">{ format_currency(p.net_salary) }</strong></td>
            <td>{ format_date(p.payment_date) }</td>
            <td class="actions">
                <a href={format!("/payroll/{}/edit", p.id)}>{ "Modifier" }</a>
                <a href={format!("/payroll/{}/delete", p.id)}>{ "Supprimer" }</a>
            </td>
        </tr>
    }
}

#[function_component]
pub fn PayrollPage(props: &PayrollPageProps) -> Html {
    let form = &props.form;
    let (title, action) = match props.editing {
        Some(id) => (
            format!("Modifier la fiche de paie #{id}"),
            format!("/payroll/{id}/replace"),
        ),
        None => ("Ajouter une fiche de paie".to_string(), "/payroll".to_string()),
    };

    let table = if props.payrolls.is_empty() {
        empty_state("Aucune fiche de paie disponible")
    } else {
        html! {
            <table>
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Employé" }</th>
                        <th>{ "Salaire Base" }</th>
                        <th>{ "Bonus" }</th>
                        <th>{ "Déductions" }</th>
                        <th>{ "Net" }</th>
                        <th>{ "Date" }</th>
                        <th class="actions">{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.payrolls.iter().map(payroll_row) }
                </tbody>
            </table>
        }
    };

    html! {
        <Layout page_name="Gestion des Paies" toasts={props.toasts.clone()}>
            <div class="card">
                <h3>{ title }</h3>
                <form method="post" action={action}>
                    <div class="grid">
                        <div>
                            <label>{ "ID Employé" }</label>
                            <input type="number" name="employeeId" min="1"
                                value={form.employee_id.clone()} required={true} />
                        </div>
                        <div>
                            <label>{ "Salaire de base" }</label>
                            <input type="number" name="baseSalary" step="0.01"
                                value={form.base_salary.clone()} required={true} />
                        </div>
                        <div>
                            <label>{ "Bonus" }</label>
                            <input type="number" name="bonus" step="0.01"
                                value={form.bonus.clone()} />
                        </div>
                        <div>
                            <label>{ "Déductions" }</label>
                            <input type="number" name="deductions" step="0.01"
                                value={form.deductions.clone()} />
                        </div>
                        <div>
                            <label>{ "Date de paiement" }</label>
                            <input type="date" name="paymentDate"
                                value={form.payment_date.clone()} required={true} />
                        </div>
                    </div>
                    <button type="submit">
                        { if props.editing.is_some() { "Enregistrer" } else { "Ajouter" } }
                    </button>
                    if props.editing.is_some() {
                        <>
                            { " " }
                            <a class="button button-secondary" href="/payroll">{ "Annuler" }</a>
                        </>
                    }
                </form>
            </div>
            <div class="card">
                { table }
            </div>
        </Layout>
    }
}
