//! Localized UI strings.

use serde::{Deserialize, Serialize};
use staffing::EmployeeStatus;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    #[value(name = "ja", alias = "japanese")]
    Japanese,
    #[value(name = "en", alias = "english")]
    English,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Japanese, Locale::English];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Some(Locale::Japanese),
            "en" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::Japanese => "日本語",
            Locale::English => "English",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Japanese => &JAPANESE,
            Locale::English => &ENGLISH,
        }
    }
}

pub struct Labels {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub brand: &'static str,
    pub nav_dashboard: &'static str,
    pub status_active: &'static str,
    pub status_absent: &'static str,
    pub status_busy: &'static str,
    pub total: &'static str,
    pub on_duty: &'static str,
    pub empty_pool_hint: &'static str,
    pub headcount_suffix: &'static str,
    pub reset: &'static str,
    pub open_roster: &'static str,
    pub settings: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub dismiss: &'static str,
}

impl Labels {
    pub fn status(&self, status: EmployeeStatus) -> &'static str {
        match status {
            EmployeeStatus::Active => self.status_active,
            EmployeeStatus::Absent => self.status_absent,
            EmployeeStatus::Busy => self.status_busy,
        }
    }

    /// Headcount text for pools without a capacity, e.g. `4 名`.
    pub fn headcount(&self, count: usize) -> String {
        format!("{count} {}", self.headcount_suffix)
    }
}

static JAPANESE: Labels = Labels {
    app_title: "配置システム",
    subtitle: "従業員を異なるラインにドラッグ＆ドロップ",
    brand: "Factory",
    nav_dashboard: "ダッシュボード",
    status_active: "出勤",
    status_absent: "欠勤",
    status_busy: "取り込み中",
    total: "総人数",
    on_duty: "出勤中",
    empty_pool_hint: "従業員をここにドラッグ＆ドロップ",
    headcount_suffix: "名",
    reset: "リセット",
    open_roster: "名簿を開く…",
    settings: "設定",
    theme: "テーマ",
    language: "言語",
    dismiss: "閉じる",
};

static ENGLISH: Labels = Labels {
    app_title: "Staff Placement",
    subtitle: "Drag and drop employees between lines",
    brand: "Factory",
    nav_dashboard: "Dashboard",
    status_active: "Active",
    status_absent: "Absent",
    status_busy: "Busy",
    total: "Total",
    on_duty: "On duty",
    empty_pool_hint: "Drag employees here",
    headcount_suffix: "staff",
    reset: "Reset",
    open_roster: "Open roster…",
    settings: "Settings",
    theme: "Theme",
    language: "Language",
    dismiss: "Dismiss",
};
