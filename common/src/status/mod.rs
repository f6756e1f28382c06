/// Reachability badge shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    Online,
    /// Until a request has succeeded the API is assumed to be unreachable.
    #[default]
    Offline,
}

impl ApiStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, ApiStatus::Online)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Online => "online",
            ApiStatus::Offline => "offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Online => "API reachable",
            ApiStatus::Offline => "API unreachable",
        }
    }
}

/// The two page indicators, updated after every fetch.
///
/// Each transition overwrites both values, so applying the same outcome twice
/// leaves the page unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    pub api: ApiStatus,
    pub empty_state_visible: bool,
}

impl Indicators {
    pub fn filters_loaded(&mut self) {
        self.api = ApiStatus::Online;
    }

    /// Filter failures only touch the badge; the empty state belongs to the
    /// sample list.
    pub fn filters_failed(&mut self) {
        self.api = ApiStatus::Offline;
    }

    pub fn samples_loaded(&mut self, count: usize) {
        self.api = ApiStatus::Online;
        self.empty_state_visible = count == 0;
    }

    pub fn samples_failed(&mut self) {
        self.api = ApiStatus::Offline;
        self.empty_state_visible = false;
    }
}
