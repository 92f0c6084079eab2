use yew::prelude::*;

use crate::utils::notice::Toast;
use crate::view::layout::Layout;

#[derive(Properties, PartialEq, Default)]
pub struct DashboardPageProps {
    #[prop_or_default]
    pub toasts: Vec<Toast>,
}

#[function_component]
pub fn DashboardPage(props: &DashboardPageProps) -> Html {
    html! {
        <Layout page_name="Tableau de bord" toasts={props.toasts.clone()}>
            <div class="grid">
                <a class="card" href="/payroll">
                    <h3>{ "Gestion des Paies" }</h3>
                    <p>{ "Consulter, ajouter et supprimer les fiches de paie." }</p>
                </a>
                <a class="card" href="/performance">
                    <h3>{ "Évaluations" }</h3>
                    <p>{ "Suivre les évaluations de performance des employés." }</p>
                </a>
            </div>
        </Layout>
    }
}
