use crate::types::OrderStatus;

/// Display attributes resolved for a status code: the pt-BR label shown in
/// the badge and the presentation class applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl OrderStatus {
    /// Returns the badge rendered for this status.
    pub fn badge(self) -> StatusBadge {
        match self {
            Self::Draft => StatusBadge {
                label: "Rascunho",
                class: "bg-slate-100 text-slate-700 dark:bg-slate-800 dark:text-slate-300",
            },
            Self::Diagnosing => StatusBadge {
                label: "Diagnóstico",
                class: "bg-purple-100 text-purple-700 dark:bg-purple-900/30 dark:text-purple-400",
            },
            Self::Quoting => StatusBadge {
                label: "Orçamento",
                class: "bg-yellow-100 text-yellow-700 dark:bg-yellow-900/30 dark:text-yellow-400",
            },
            Self::WaitingApproval => StatusBadge {
                label: "Aguardando",
                class: "bg-orange-100 text-orange-700 dark:bg-orange-900/30 dark:text-orange-400",
            },
            Self::Approved => StatusBadge {
                label: "Aprovado",
                class: "bg-cyan-100 text-cyan-700 dark:bg-cyan-900/30 dark:text-cyan-400",
            },
            Self::InProgress => StatusBadge {
                label: "Em Manutenção",
                class: "bg-blue-100 text-blue-700 dark:bg-blue-900/30 dark:text-blue-400",
            },
            Self::QualityCheck => StatusBadge {
                label: "Revisão",
                class: "bg-indigo-100 text-indigo-700 dark:bg-indigo-900/30 dark:text-indigo-400",
            },
            Self::Completed => StatusBadge {
                label: "Concluído",
                class: "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-400",
            },
            Self::Delivered => StatusBadge {
                label: "Entregue",
                class: "bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-400",
            },
            Self::Cancelled => StatusBadge {
                label: "Cancelado",
                class: "bg-red-100 text-red-700 dark:bg-red-900/30 dark:text-red-400",
            },
        }
    }
}

/// Resolves display attributes for a raw status code.
///
/// Total over arbitrary input: the ten known codes map to their exact badge,
/// anything else (empty string included) falls back to the draft badge so
/// rendering never fails on unexpected data. A lookup, not a validator.
pub fn classify(code: &str) -> StatusBadge {
    OrderStatus::from_code(code)
        .unwrap_or(OrderStatus::Draft)
        .badge()
}
