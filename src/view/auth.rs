use yew::prelude::*;

use crate::utils::notice::Toast;
use crate::view::layout::Toasts;

#[derive(Properties, PartialEq, Default)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub username: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub toasts: Vec<Toast>,
}

#[function_component]
pub fn LoginPage(props: &LoginPageProps) -> Html {
    html! {
        <div class="auth">
            <div class="card">
                <h2>{ "Connexion" }</h2>
                <Toasts toasts={props.toasts.clone()} />
                <form method="post" action="/login">
                    if let Some(error) = &props.error {
                        <p class="error">{ error.clone() }</p>
                    }
                    <input type="text" name="username" placeholder="Nom d'utilisateur"
                        value={props.username.clone()} required={true} />
                    <input type="password" name="password" placeholder="Mot de passe" required={true} />
                    <button type="submit">{ "Se connecter" }</button>
                </form>
                <p>
                    { "Pas encore inscrit ? " }
                    <a href="/register">{ "Créez un compte" }</a>
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct RegisterPageProps {
    #[prop_or_default]
    pub username: String,
    #[prop_or_default]
    pub email: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub success: Option<String>,
}

#[function_component]
pub fn RegisterPage(props: &RegisterPageProps) -> Html {
    html! {
        <div class="auth">
            <div class="card">
                <h1>{ "Inscription" }</h1>
                if let Some(error) = &props.error {
                    <p class="error">{ error.clone() }</p>
                }
                if let Some(success) = &props.success {
                    <p class="success">{ success.clone() }</p>
                }
                <form method="post" action="/register">
                    <input type="text" name="username" placeholder="Nom d'utilisateur"
                        value={props.username.clone()} required={true} />
                    <input type="email" name="email" placeholder="Email"
                        value={props.email.clone()} required={true} />
                    <input type="password" name="password" placeholder="Mot de passe" required={true} />
                    <button type="submit">{ "S’inscrire" }</button>
                </form>
                <p>
                    { "Déjà un compte ? " }
                    <a href="/login">{ "Connectez-vous" }</a>
                </p>
            </div>
        </div>
    }
}
