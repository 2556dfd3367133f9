//! Per-product marketing campaign state.
//!
//! DESIGN
//! ======
//! Each shop product carries its campaign status and, once finished, the
//! campaign result. Result sections start collapsed and toggle
//! independently per product.

#[cfg(test)]
#[path = "marketing_test.rs"]
mod marketing_test;

use crate::net::types::{CampaignResult, Product};

/// Collapsible parts of a finished campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Image,
    Blog,
    Suggestions,
    Stats,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Image, Self::Blog, Self::Suggestions, Self::Stats];

    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Blog => "Blog",
            Self::Suggestions => "Suggestions",
            Self::Stats => "Stats",
        }
    }

    /// Button label for the current open state.
    pub fn toggle_label(self, open: bool) -> String {
        format!("{} {}", if open { "Hide" } else { "View" }, self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenSections {
    pub image: bool,
    pub blog: bool,
    pub suggestions: bool,
    pub stats: bool,
}

impl OpenSections {
    pub fn is_open(self, section: Section) -> bool {
        match section {
            Section::Image => self.image,
            Section::Blog => self.blog,
            Section::Suggestions => self.suggestions,
            Section::Stats => self.stats,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        let flag = match section {
            Section::Image => &mut self.image,
            Section::Blog => &mut self.blog,
            Section::Suggestions => &mut self.suggestions,
            Section::Stats => &mut self.stats,
        };
        *flag = !*flag;
    }
}

/// One product row on the marketing screen.
#[derive(Clone, Debug, Default)]
pub struct ProductCampaign {
    pub product: Product,
    pub done: bool,
    pub result: Option<CampaignResult>,
    pub starting: bool,
    pub sections: OpenSections,
}

impl ProductCampaign {
    pub fn new(product: Product) -> Self {
        Self { product, ..Self::default() }
    }

    /// Record a finished campaign. Sections reset to collapsed.
    pub fn finish(&mut self, result: CampaignResult) {
        self.done = true;
        self.starting = false;
        self.result = Some(result);
        self.sections = OpenSections::default();
    }

    pub fn stats(&self) -> Option<CampaignStats> {
        self.result.as_ref().map(CampaignStats::from)
    }
}

/// Mail delivery counts of a campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CampaignStats {
    pub sent: i64,
    pub failed: i64,
}

impl CampaignStats {
    /// Share of sent mails in percent, for the bar widths.
    #[allow(clippy::cast_precision_loss)]
    pub fn sent_percent(self) -> f64 {
        let total = self.sent + self.failed;
        if total <= 0 { 0.0 } else { self.sent as f64 * 100.0 / total as f64 }
    }
}

impl From<&CampaignResult> for CampaignStats {
    fn from(result: &CampaignResult) -> Self {
        Self {
            sent: result.successfully_send_mails,
            failed: (result.target_mails - result.successfully_send_mails).max(0),
        }
    }
}

/// Human label for a strategy key (`target_audience` -> `target audience`).
pub fn strategy_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Display text for a strategy value; strings are shown unquoted.
pub fn strategy_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => items.iter().map(strategy_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Find the row for `product_id`.
pub fn find_mut<'a>(rows: &'a mut [ProductCampaign], product_id: &str) -> Option<&'a mut ProductCampaign> {
    rows.iter_mut().find(|r| r.product.id == product_id)
}

/// Campaign controls shown next to a product on the shop dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignPanel {
    pub loading: bool,
    pub status: String,
    pub result: Option<CampaignResult>,
}

impl CampaignPanel {
    /// A start or check request went out; clear the previous status line.
    pub fn begin(&mut self) {
        self.loading = true;
        self.status.clear();
    }

    /// Record the outcome of starting a campaign.
    pub fn started(&mut self, outcome: Result<(), String>) {
        self.loading = false;
        self.status = match outcome {
            Ok(()) => "Campaign started. Check back for results.".to_owned(),
            Err(message) => message,
        };
    }

    /// Record the outcome of checking for a result. A missing result keeps
    /// any earlier one.
    pub fn checked(&mut self, outcome: Result<CampaignResult, String>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.status = "Campaign results are ready.".to_owned();
                self.result = Some(result);
            }
            Err(message) => self.status = message,
        }
    }
}
