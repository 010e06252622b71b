//! Default catalyst table for the tracked obesity-drug names.

use types::{CatalystEvent, Polarity};

use crate::table::EventTable;

impl EventTable {
    /// The dashboard's default catalysts for LLY, NVO, VKTX, AMGN, RHHBY and PFE.
    pub fn builtin() -> Self {
        use Polarity::{Negative, Positive};

        EventTable::new()
            // Eli Lilly
            .with_event(
                "LLY",
                CatalystEvent::new(
                    "Aug",
                    Positive,
                    "Orforglipron ATTAIN-1 topline",
                    "Oral GLP-1 efficacy confirmed",
                ),
            )
            .with_event(
                "LLY",
                CatalystEvent::new(
                    "Dec",
                    Positive,
                    "Orforglipron NDA submitted",
                    "Priority review voucher applied",
                )
                .with_source("Eli Lilly PR", None),
            )
            // Novo Nordisk
            .with_event(
                "NVO",
                CatalystEvent::new(
                    "Jul",
                    Negative,
                    "Full-year guidance cut",
                    "Compounded semaglutide competition",
                ),
            )
            .with_event(
                "NVO",
                CatalystEvent::new(
                    "Dec",
                    Positive,
                    "Oral Wegovy approved",
                    "First-to-market oral obesity drug",
                ),
            )
            // Viking
            .with_event(
                "VKTX",
                CatalystEvent::new(
                    "Jul",
                    Negative,
                    "VENTURE-Oral tolerability concerns",
                    "Discontinuation rate above peers",
                ),
            )
            .with_event(
                "VKTX",
                CatalystEvent::new(
                    "Sep",
                    Positive,
                    "VANQUISH-1 Phase 3 over-enrolled",
                    "4,650 patients enrolled ahead of plan",
                ),
            )
            .with_event(
                "VKTX",
                CatalystEvent::new(
                    "Nov",
                    Positive,
                    "VENTURE Phase 2 published",
                    "Peer-reviewed validation, no plateau",
                )
                .with_source("Obesity Journal", None),
            )
            // Amgen
            .with_event(
                "AMGN",
                CatalystEvent::new(
                    "Nov",
                    Positive,
                    "MARITIME Phase 3 enrolling",
                    "Monthly dosing program advances",
                ),
            )
            // Roche
            .with_event(
                "RHHBY",
                CatalystEvent::new(
                    "Sep",
                    Positive,
                    "Top-3 obesity strategy",
                    "$700M investment commitment",
                ),
            )
            // Pfizer
            .with_event(
                "PFE",
                CatalystEvent::new(
                    "Sep",
                    Positive,
                    "Metsera acquisition announced",
                    "Re-entry into obesity",
                ),
            )
            .with_event(
                "PFE",
                CatalystEvent::new(
                    "Nov",
                    Negative,
                    "Bidding war lifts Metsera price to $10B",
                    "Higher cost of entry",
                )
                .with_source("M&A", None),
            )
    }
}
