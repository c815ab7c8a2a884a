//! Order lifecycle tags and how they are displayed.
//!
//! The backend owns transitions; this side only maps a tag to a label, a
//! color class and an icon.

use serde::{Deserialize, Serialize};

/// Order status tag as sent by the backend.
///
/// `Concluido` and `Entregue` are both kept: older orders were stored as
/// `entregue`. They render identically but are never merged into one stored
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pendente,
    Confirmado,
    EmPreparacao,
    EmTransporte,
    Concluido,
    Entregue,
    Cancelado,
    Reembolsado,
    /// Any tag outside the known set, kept verbatim.
    Other(String),
}

impl OrderStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pendente" => Self::Pendente,
            "confirmado" => Self::Confirmado,
            "em_preparacao" => Self::EmPreparacao,
            "em_transporte" => Self::EmTransporte,
            "concluido" => Self::Concluido,
            "entregue" => Self::Entregue,
            "cancelado" => Self::Cancelado,
            "reembolsado" => Self::Reembolsado,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Pendente => "pendente",
            Self::Confirmado => "confirmado",
            Self::EmPreparacao => "em_preparacao",
            Self::EmTransporte => "em_transporte",
            Self::Concluido => "concluido",
            Self::Entregue => "entregue",
            Self::Cancelado => "cancelado",
            Self::Reembolsado => "reembolsado",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Concluido | Self::Entregue)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn display(&self) -> StatusDisplay {
        let (label, color_class, icon) = match self {
            Self::Pendente => ("Pendente", "bg-yellow-100 text-yellow-800", StatusIcon::Clock),
            Self::Confirmado => ("Confirmado", "bg-blue-100 text-blue-800", StatusIcon::CheckCircle),
            Self::EmPreparacao => ("Em Preparação", "bg-indigo-100 text-indigo-800", StatusIcon::Package),
            Self::EmTransporte => ("Em Transporte", "bg-purple-100 text-purple-800", StatusIcon::Truck),
            Self::Concluido | Self::Entregue => {
                ("Concluído", "bg-green-100 text-green-800", StatusIcon::CheckCircle)
            }
            Self::Cancelado => ("Cancelado", "bg-red-100 text-red-800", StatusIcon::XCircle),
            Self::Reembolsado => ("Reembolsado", "bg-gray-100 text-gray-800", StatusIcon::AlertCircle),
            Self::Other(tag) => {
                return StatusDisplay {
                    label: tag.clone(),
                    color_class: FALLBACK_COLOR_CLASS,
                    icon: StatusIcon::Package,
                };
            }
        };

        StatusDisplay {
            label: label.to_string(),
            color_class,
            icon,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match Self::from_tag(&value) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(tag) => tag,
            known => known.as_tag().to_string(),
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Neutral style for tags outside the known set.
pub const FALLBACK_COLOR_CLASS: &str = "bg-gray-100 text-gray-800";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Clock,
    CheckCircle,
    Package,
    Truck,
    XCircle,
    AlertCircle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: String,
    pub color_class: &'static str,
    pub icon: StatusIcon,
}

/// Label and style for a raw status tag. Never fails.
pub fn describe_status(tag: &str) -> StatusDisplay {
    OrderStatus::from_tag(tag).display()
}
