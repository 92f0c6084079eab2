use yew::prelude::*;

use crate::view::layout::Layout;

/// Blocking prompt shown before a destructive action. Only submitting the
/// form performs the action.
#[derive(Properties, PartialEq)]
pub struct ConfirmPageProps {
    pub page_name: &'static str,
    pub message: &'static str,
    pub summary: String,
    pub action: String,
    pub cancel_href: &'static str,
}

#[function_component]
pub fn ConfirmPage(props: &ConfirmPageProps) -> Html {
    html! {
        <Layout page_name={props.page_name}>
            <div class="card">
                <p>{ props.message }</p>
                <p><strong>{ props.summary.clone() }</strong></p>
                <form method="post" action={props.action.clone()}>
                    <button type="submit">{ "Supprimer" }</button>
                    { " " }
                    <a class="button button-secondary" href={props.cancel_href}>{ "Annuler" }</a>
                </form>
            </div>
        </Layout>
    }
}
