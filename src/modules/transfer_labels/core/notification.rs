use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ValidationFailed,
    LabelGenerated,
    PrintUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A toast shown once on the next rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn validation_failed() -> Self {
        Self {
            kind: NotificationKind::ValidationFailed,
            variant: NotificationVariant::Destructive,
            title: "Campos obrigatórios".into(),
            description: "Por favor, preencha todos os campos obrigatórios.".into(),
        }
    }

    pub fn label_generated() -> Self {
        Self {
            kind: NotificationKind::LabelGenerated,
            variant: NotificationVariant::Default,
            title: "Etiqueta gerada".into(),
            description: "Sua etiqueta foi gerada com sucesso!".into(),
        }
    }

    pub fn print_unavailable() -> Self {
        Self {
            kind: NotificationKind::PrintUnavailable,
            variant: NotificationVariant::Destructive,
            title: "Erro".into(),
            description: "Não foi possível abrir a janela de impressão.".into(),
        }
    }

    pub fn message_type(&self) -> &'static str {
        match self.kind {
            NotificationKind::ValidationFailed => "ValidationFailed",
            NotificationKind::LabelGenerated => "LabelGenerated",
            NotificationKind::PrintUnavailable => "PrintUnavailable",
        }
    }
}
