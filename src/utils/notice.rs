use serde::Deserialize;
use strum::{AsRefStr, EnumString};

use crate::client::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

/// One-line notification rendered at the top of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

/// Toasts that survive a redirect, carried as `?notice=<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Notice {
    SessionExpired,
    LoggedOut,
    PayrollCreated,
    PayrollCreateFailed,
    PayrollUpdated,
    PayrollDeleted,
    PayrollDeleteFailed,
    PayrollNotFound,
    ReviewCreated,
    ReviewCreateFailed,
    ReviewUpdated,
    ReviewDeleted,
    ReviewDeleteFailed,
    ReviewNotFound,
}

impl Notice {
    pub fn toast(self) -> Toast {
        match self {
            Notice::SessionExpired => Toast::error("Session expirée - Veuillez vous reconnecter"),
            Notice::LoggedOut => Toast::success("Vous êtes déconnecté"),
            Notice::PayrollCreated => Toast::success("Fiche de paie ajoutée avec succès"),
            Notice::PayrollCreateFailed => {
                Toast::error("Erreur lors de l'ajout de la fiche de paie")
            }
            Notice::PayrollUpdated => Toast::success("Fiche de paie modifiée avec succès"),
            Notice::PayrollDeleted => Toast::success("Fiche de paie supprimée avec succès"),
            Notice::PayrollDeleteFailed => {
                Toast::error("Erreur lors de la suppression de la fiche de paie")
            }
            Notice::PayrollNotFound => Toast::error("Fiche de paie introuvable"),
            Notice::ReviewCreated => Toast::success("Évaluation ajoutée avec succès"),
            Notice::ReviewCreateFailed => Toast::error("Erreur lors de l'ajout de l'évaluation"),
            Notice::ReviewUpdated => Toast::success("Évaluation modifiée avec succès"),
            Notice::ReviewDeleted => Toast::success("Évaluation supprimée avec succès"),
            Notice::ReviewDeleteFailed => {
                Toast::error("Erreur lors de la suppression de l'évaluation")
            }
            Notice::ReviewNotFound => Toast::error("Évaluation introuvable"),
        }
    }

    /// `path?notice=key`
    pub fn location(self, path: &str) -> String {
        format!("{}?notice={}", path, self.as_ref())
    }
}

/// Query string of every page that can show a post-redirect toast.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    /// Unknown keys are ignored rather than echoed back.
    pub fn toasts(&self) -> Vec<Toast> {
        self.notice
            .as_deref()
            .and_then(|key| key.parse::<Notice>().ok())
            .map(|notice| vec![notice.toast()])
            .unwrap_or_default()
    }
}

/// Toast for a failed load, one message per failure class.
pub fn load_failure(err: &ClientError) -> Toast {
    match err {
        ClientError::Status { .. } | ClientError::Decode(_) => Toast::error(format!(
            "Erreur serveur: {}",
            err.server_message().unwrap_or_default()
        )),
        ClientError::Network(_) => Toast::error("Problème de connexion au serveur"),
        ClientError::NoResponse(_) => Toast::error("Aucune réponse du serveur"),
        ClientError::Config(_) => Toast::error("Erreur de configuration de la requête"),
    }
}
